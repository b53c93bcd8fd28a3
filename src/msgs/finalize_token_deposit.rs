use cosmwasm_std::{Binary, Coin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::core::error::ContractError;
use crate::core::msg::Validatable;
use crate::core::types::address::AccountAddress;
use crate::core::types::any::TypeUrl;
use crate::util::aliases::ContractResult;
use crate::util::coins::validate_positive_coin;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_address::validate_address_field;

/// Relays a deposit made on the base layer.  Submitted by the bridge executor, and credited to
/// `to` exactly once per `sequence`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgFinalizeTokenDeposit {
    /// The bridge executor relaying the deposit.
    pub sender: AccountAddress,
    /// The base layer depositor.
    pub from: AccountAddress,
    pub to: AccountAddress,
    pub amount: Coin,
    /// The base layer deposit sequence.  Starts at 1.
    pub sequence: u64,
    /// An optional hook payload executed alongside the deposit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Binary>,
}
impl MsgFinalizeTokenDeposit {
    pub fn new<A1: Into<AccountAddress>, A2: Into<AccountAddress>, A3: Into<AccountAddress>>(
        sender: A1,
        from: A2,
        to: A3,
        amount: Coin,
        sequence: u64,
        data: Option<Binary>,
    ) -> Self {
        Self {
            sender: sender.into(),
            from: from.into(),
            to: to.into(),
            amount,
            sequence,
            data,
        }
    }
}
impl TypeUrl for MsgFinalizeTokenDeposit {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgFinalizeTokenDeposit";
}
impl Validatable for MsgFinalizeTokenDeposit {
    fn validate(&self, ac: &AccountCodec, _vc: &ValidatorCodec) -> ContractResult<()> {
        validate_address_field(ac, &self.sender, "sender")?;
        validate_address_field(ac, &self.from, "depositor")?;
        validate_address_field(ac, &self.to, "recipient")?;
        validate_positive_coin(&self.amount)?;
        if self.sequence == 0 {
            return ContractError::InvalidSequence.to_err();
        }
        Ok(())
    }
}
