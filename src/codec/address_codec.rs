use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::CanonicalAddr;

use crate::core::error::ContractError;
use crate::core::types::address::{AccountAddress, ValidatorAddress};
use crate::util::aliases::ContractResult;
use crate::util::constants::{
    DEFAULT_ACCOUNT_PREFIX, DEFAULT_VALIDATOR_PREFIX, MAX_ADDRESS_LENGTH,
};
use crate::util::traits::ResultExtensions;

/// Converts between the human-readable form of an address and its canonical byte identity.  Each
/// implementation is bound to exactly one address wrapper type, which keeps account and
/// validator addresses from being decoded by the wrong codec.
pub trait AddressCodec {
    type Address;

    /// Decodes the address, failing with [InvalidAddress](crate::core::error::ContractError::InvalidAddress)
    /// when it is empty, malformed, or belongs to a different namespace.
    fn string_to_bytes(&self, address: &Self::Address) -> ContractResult<CanonicalAddr>;

    /// Encodes canonical bytes into this codec's human-readable namespace.
    fn bytes_to_string(&self, bytes: &CanonicalAddr) -> ContractResult<Self::Address>;
}

/// The shared bech32 implementation behind both namespaced codecs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bech32Codec {
    prefix: String,
}
impl Bech32Codec {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Decodes a bech32 string that must carry this codec's prefix.
    pub fn decode(&self, address: &str) -> ContractResult<CanonicalAddr> {
        if address.trim().is_empty() {
            return invalid_address(address, "empty address string is not allowed");
        }
        let (hrp, base_32, variant) = bech32::decode(address)
            .map_err(|e| ContractError::InvalidAddress {
                address: address.to_string(),
                explanation: format!("decoding bech32 failed: {}", e),
            })?;
        // Run a human-readable-prefix match on the output of the decode to verify that the address
        // belongs to this codec's namespace
        if hrp != self.prefix {
            return invalid_address(
                address,
                format!("invalid Bech32 prefix; expected {}, got {}", self.prefix, hrp),
            );
        }
        if variant != Variant::Bech32 {
            return invalid_address(address, "expected bech32 encoding, but found bech32m");
        }
        let bytes = Vec::from_base32(&base_32).map_err(|e| ContractError::InvalidAddress {
            address: address.to_string(),
            explanation: format!("decoding bech32 failed: {}", e),
        })?;
        verify_address_format(address, &bytes)?;
        CanonicalAddr::from(bytes).to_ok()
    }

    pub fn encode(&self, bytes: &CanonicalAddr) -> ContractResult<String> {
        let display = bytes.to_string();
        verify_address_format(&display, bytes.as_slice())?;
        bech32::encode(&self.prefix, bytes.as_slice().to_base32(), Variant::Bech32).map_err(|e| {
            ContractError::InvalidAddress {
                address: display,
                explanation: format!("encoding bech32 failed: {}", e),
            }
        })
    }
}

/// Decodes addresses in the account namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountCodec(Bech32Codec);
impl AccountCodec {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self(Bech32Codec::new(prefix))
    }

    pub fn prefix(&self) -> &str {
        self.0.prefix()
    }
}
impl Default for AccountCodec {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT_PREFIX)
    }
}
impl AddressCodec for AccountCodec {
    type Address = AccountAddress;

    fn string_to_bytes(&self, address: &AccountAddress) -> ContractResult<CanonicalAddr> {
        self.0.decode(address.as_str())
    }

    fn bytes_to_string(&self, bytes: &CanonicalAddr) -> ContractResult<AccountAddress> {
        self.0.encode(bytes).map(AccountAddress::new)
    }
}

/// Decodes addresses in the validator operator namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorCodec(Bech32Codec);
impl ValidatorCodec {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self(Bech32Codec::new(prefix))
    }

    pub fn prefix(&self) -> &str {
        self.0.prefix()
    }
}
impl Default for ValidatorCodec {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDATOR_PREFIX)
    }
}
impl AddressCodec for ValidatorCodec {
    type Address = ValidatorAddress;

    fn string_to_bytes(&self, address: &ValidatorAddress) -> ContractResult<CanonicalAddr> {
        self.0.decode(address.as_str())
    }

    fn bytes_to_string(&self, bytes: &CanonicalAddr) -> ContractResult<ValidatorAddress> {
        self.0.encode(bytes).map(ValidatorAddress::new)
    }
}

fn verify_address_format(address: &str, bytes: &[u8]) -> ContractResult<()> {
    if bytes.is_empty() {
        return invalid_address(address, "addresses cannot be empty");
    }
    if bytes.len() > MAX_ADDRESS_LENGTH {
        return invalid_address(
            address,
            format!(
                "address max length is {}, got {}",
                MAX_ADDRESS_LENGTH,
                bytes.len()
            ),
        );
    }
    Ok(())
}

fn invalid_address<T, S1: Into<String>, S2: Into<String>>(
    address: S1,
    explanation: S2,
) -> ContractResult<T> {
    ContractError::InvalidAddress {
        address: address.into(),
        explanation: explanation.into(),
    }
    .to_err()
}
