//! Functionality used to ensure the logical integrity of received external values.

/// Field-aware address checks shared by every message validator.
pub mod validate_address;
/// The admission gate: validates an [OpChildMsg](crate::core::msg::OpChildMsg) and resolves its
/// embedded payloads.
pub mod validate_msg;
