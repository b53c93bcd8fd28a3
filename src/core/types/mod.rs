//! Contains all value types carried by opchild messages.

/// Distinct wrapper types for the account and validator bech32 address namespaces.
pub mod address;
/// A type-tagged opaque payload standing in for sub-messages and public keys.
pub mod any;
/// A coin whose amount is a decimal value, used for gas prices.
pub mod dec_coin;
/// Validator consensus public keys.
pub mod pub_key;
