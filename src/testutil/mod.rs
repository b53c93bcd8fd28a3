//! Shared fixtures for unit tests.  Compiled for tests and behind the `enable-test-utils` feature.

/// An in-memory [OpChildKeeper](crate::handler::OpChildKeeper) backed by mock storage.
pub mod mock_keeper;
/// Well-formed addresses and values in the default namespaces.
pub mod test_constants;
/// Builders for a valid instance of every message, plus response assertions.
pub mod test_utilities;
