use cosmwasm_std::CanonicalAddr;

use crate::codec::address_codec::AddressCodec;
use crate::util::aliases::ContractResult;

/// Decodes an address through the codec of its namespace, naming the message field in the
/// resulting [InvalidAddress](crate::core::error::ContractError::InvalidAddress) explanation.
///
/// # Parameters
///
/// * `codec` The codec for the namespace the field belongs to.
/// * `address` The address value held by the field.
/// * `field` The name of the field, ex: "sender" or "validator".
///
/// # Examples
/// ```
/// use opchild_admission::codec::address_codec::AccountCodec;
/// use opchild_admission::core::types::address::AccountAddress;
/// use opchild_admission::validation::validate_address::validate_address_field;
///
/// let error = validate_address_field(&AccountCodec::default(), &AccountAddress::new(""), "sender")
///     .unwrap_err();
/// assert_eq!(
///     "Invalid address provided []: invalid sender address: empty address string is not allowed",
///     error.to_string(),
/// );
/// ```
pub fn validate_address_field<C: AddressCodec>(
    codec: &C,
    address: &C::Address,
    field: &str,
) -> ContractResult<CanonicalAddr> {
    codec
        .string_to_bytes(address)
        .map_err(|e| e.for_address_field(field))
}
