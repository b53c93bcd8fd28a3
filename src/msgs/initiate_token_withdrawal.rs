use cosmwasm_std::Coin;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::core::msg::Validatable;
use crate::core::types::address::AccountAddress;
use crate::core::types::any::TypeUrl;
use crate::util::aliases::ContractResult;
use crate::util::coins::validate_positive_coin;
use crate::validation::validate_address::validate_address_field;

/// Burns coins on the child chain so that they can be released to `to` on the base layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgInitiateTokenWithdrawal {
    pub sender: AccountAddress,
    /// The base layer recipient.  Both layers share the account namespace, so it is decoded with
    /// the same codec as the sender.
    pub to: AccountAddress,
    pub amount: Coin,
}
impl MsgInitiateTokenWithdrawal {
    pub fn new<A1: Into<AccountAddress>, A2: Into<AccountAddress>>(
        sender: A1,
        to: A2,
        amount: Coin,
    ) -> Self {
        Self {
            sender: sender.into(),
            to: to.into(),
            amount,
        }
    }
}
impl TypeUrl for MsgInitiateTokenWithdrawal {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgInitiateTokenWithdrawal";
}
impl Validatable for MsgInitiateTokenWithdrawal {
    fn validate(&self, ac: &AccountCodec, _vc: &ValidatorCodec) -> ContractResult<()> {
        validate_address_field(ac, &self.sender, "sender")?;
        validate_address_field(ac, &self.to, "recipient")?;
        validate_positive_coin(&self.amount)
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
    use crate::core::error::ContractError;
    use crate::core::msg::Validatable;
    use crate::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
    use crate::testutil::test_constants::{DEFAULT_DENOM, DEFAULT_SENDER_ADDRESS};
    use crate::testutil::test_utilities::get_valid_initiate_token_withdrawal;

    #[test]
    fn test_valid_withdrawal() {
        get_valid_initiate_token_withdrawal()
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .expect("a well-formed withdrawal should pass validation");
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let msg = MsgInitiateTokenWithdrawal {
            amount: coin(0, DEFAULT_DENOM),
            ..get_valid_initiate_token_withdrawal()
        };
        let error = msg
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        assert_eq!(
            ContractError::invalid_amount("amount [0uinit] must be positive"),
            error,
            "a zero withdrawal should be rejected",
        );
    }

    #[test]
    fn test_malformed_recipient_is_rejected() {
        let error = MsgInitiateTokenWithdrawal::new(
            DEFAULT_SENDER_ADDRESS,
            "0x0000000000000000000000000000000000000001",
            coin(1, DEFAULT_DENOM),
        )
        .validate(&AccountCodec::default(), &ValidatorCodec::default())
        .unwrap_err();
        match error {
            ContractError::InvalidAddress { explanation, .. } => assert!(
                explanation.starts_with("invalid recipient address"),
                "expected the explanation to name the recipient, but got: {}",
                explanation,
            ),
            _ => panic!("unexpected error encountered: {:?}", error),
        }
    }

    #[test]
    fn test_sender_is_checked_before_amount() {
        let msg = MsgInitiateTokenWithdrawal {
            sender: "".into(),
            amount: coin(0, DEFAULT_DENOM),
            ..get_valid_initiate_token_withdrawal()
        };
        let error = msg
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidAddress { .. }),
            "the sender should fail before the amount is inspected, but got: {:?}",
            error,
        );
    }
}
