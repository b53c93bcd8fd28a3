use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::core::msg::Validatable;
use crate::core::types::address::{AccountAddress, ValidatorAddress};
use crate::core::types::any::TypeUrl;
use crate::util::aliases::ContractResult;
use crate::validation::validate_address::validate_address_field;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgRemoveValidator {
    pub authority: AccountAddress,
    pub validator_address: ValidatorAddress,
}
impl MsgRemoveValidator {
    pub fn new<A: Into<AccountAddress>, V: Into<ValidatorAddress>>(
        authority: A,
        validator_address: V,
    ) -> Self {
        Self {
            authority: authority.into(),
            validator_address: validator_address.into(),
        }
    }
}
impl TypeUrl for MsgRemoveValidator {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgRemoveValidator";
}
impl Validatable for MsgRemoveValidator {
    fn validate(&self, ac: &AccountCodec, vc: &ValidatorCodec) -> ContractResult<()> {
        validate_address_field(ac, &self.authority, "authority")?;
        validate_address_field(vc, &self.validator_address, "validator")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
    use crate::core::error::ContractError;
    use crate::core::msg::Validatable;
    use crate::msgs::remove_validator::MsgRemoveValidator;
    use crate::testutil::test_constants::{DEFAULT_AUTHORITY_ADDRESS, DEFAULT_VALIDATOR_ADDRESS};

    #[test]
    fn test_valid_remove_validator() {
        MsgRemoveValidator::new(DEFAULT_AUTHORITY_ADDRESS, DEFAULT_VALIDATOR_ADDRESS)
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .expect("a well-formed remove validator message should pass validation");
    }

    #[test]
    fn test_empty_authority_is_rejected() {
        let error = MsgRemoveValidator::new("", DEFAULT_VALIDATOR_ADDRESS)
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        assert_eq!(
            ContractError::InvalidAddress {
                address: String::new(),
                explanation:
                    "invalid authority address: empty address string is not allowed".to_string(),
            },
            error,
            "an empty authority should produce an invalid address error",
        );
    }

    #[test]
    fn test_swapped_addresses_are_rejected() {
        let error = MsgRemoveValidator::new(DEFAULT_AUTHORITY_ADDRESS, DEFAULT_AUTHORITY_ADDRESS)
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        match error {
            ContractError::InvalidAddress {
                address,
                explanation,
            } => {
                assert_eq!(
                    DEFAULT_AUTHORITY_ADDRESS, address,
                    "expected the offending address in the error",
                );
                assert_eq!(
                    "invalid validator address: invalid Bech32 prefix; expected initvaloper, got init",
                    explanation,
                    "expected the explanation to describe the namespace mismatch",
                );
            }
            _ => panic!("unexpected error encountered: {:?}", error),
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let msg = MsgRemoveValidator::new(DEFAULT_AUTHORITY_ADDRESS, "initvaloper1bad");
        let first = msg
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        let second = msg
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        assert_eq!(first, second, "validating twice should produce the same result");
    }
}
