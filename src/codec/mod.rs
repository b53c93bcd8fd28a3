//! Converters between external representations and the values the admission gate inspects.

/// Bech32 codecs for the account and validator address namespaces.
pub mod address_codec;
/// The registry used to resolve type-tagged [Any](crate::core::types::any::Any) payloads.
pub mod interface_registry;
