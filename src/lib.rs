#![warn(clippy::all)]
pub mod codec;
pub mod core;
pub mod handler;
pub mod msgs;
pub mod util;
pub mod validation;

// Conditional modules
#[cfg(any(test, feature = "enable-test-utils"))]
pub mod testutil;
