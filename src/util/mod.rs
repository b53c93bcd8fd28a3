//! Miscellaneous functionalities that do not logically belong to a concrete group.

/// Defines various types with type aliases to shorten syntax used elsewhere in the crate.
pub mod aliases;
/// Denomination and coin set checks shared by the messages that move funds.
pub mod coins;
/// Defines all global constant values used throughout the crate.
pub mod constants;
/// Helpers to ensure that emitting event attributes on admitted messages occurs with standard
/// values throughout the crate.
pub mod event_attributes;
/// Global traits to be used across various areas of the crate.
pub mod traits;
