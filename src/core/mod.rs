//! Contains all types and base functionality used to construct the admission logic of the module.

/// Contains each error type emitted during message admission.
pub mod error;
/// Contains the closed set of messages accepted by the module, as well as the capabilities each
/// message must implement.
pub mod msg;
/// Contains the module-owned configuration aggregate that parameter updates carry.
pub mod params;
pub mod types;
