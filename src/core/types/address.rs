use std::fmt::{Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A bech32 address string in the account namespace (ex: init1...).  Only an
/// [AccountCodec](crate::codec::address_codec::AccountCodec) accepts this type, so an account
/// field can never be run through the validator codec by accident.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(transparent)]
pub struct AccountAddress(String);
impl AccountAddress {
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl Display for AccountAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
impl From<&str> for AccountAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}
impl From<String> for AccountAddress {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

/// A bech32 address string in the validator operator namespace (ex: initvaloper1...).  Only a
/// [ValidatorCodec](crate::codec::address_codec::ValidatorCodec) accepts this type.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(transparent)]
pub struct ValidatorAddress(String);
impl ValidatorAddress {
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl Display for ValidatorAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
impl From<&str> for ValidatorAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}
impl From<String> for ValidatorAddress {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}
