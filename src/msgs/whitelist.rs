use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::core::msg::Validatable;
use crate::core::types::address::AccountAddress;
use crate::core::types::any::TypeUrl;
use crate::util::aliases::ContractResult;
use crate::validation::validate_address::validate_address_field;

/// Adds an account to the fee whitelist of the module parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgWhitelist {
    pub authority: AccountAddress,
    /// The account to exempt from fees.
    pub address: AccountAddress,
}
impl MsgWhitelist {
    pub fn new<A1: Into<AccountAddress>, A2: Into<AccountAddress>>(
        authority: A1,
        address: A2,
    ) -> Self {
        Self {
            authority: authority.into(),
            address: address.into(),
        }
    }
}
impl TypeUrl for MsgWhitelist {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgWhitelist";
}
impl Validatable for MsgWhitelist {
    fn validate(&self, ac: &AccountCodec, _vc: &ValidatorCodec) -> ContractResult<()> {
        validate_address_field(ac, &self.authority, "authority")?;
        validate_address_field(ac, &self.address, "whitelist")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
    use crate::core::error::ContractError;
    use crate::core::msg::Validatable;
    use crate::msgs::whitelist::MsgWhitelist;
    use crate::testutil::test_constants::{DEFAULT_AUTHORITY_ADDRESS, DEFAULT_RECIPIENT_ADDRESS};

    #[test]
    fn test_valid_whitelist() {
        MsgWhitelist::new(DEFAULT_AUTHORITY_ADDRESS, DEFAULT_RECIPIENT_ADDRESS)
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .expect("a well-formed whitelist message should pass validation");
    }

    #[test]
    fn test_invalid_whitelist_address_is_rejected() {
        let error = MsgWhitelist::new(DEFAULT_AUTHORITY_ADDRESS, "init1")
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        match error {
            ContractError::InvalidAddress { explanation, .. } => assert!(
                explanation.starts_with("invalid whitelist address"),
                "expected the explanation to name the whitelist field, but got: {}",
                explanation,
            ),
            _ => panic!("unexpected error encountered: {:?}", error),
        }
    }
}
