use cosmwasm_std::{CanonicalAddr, Coin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, AddressCodec, ValidatorCodec};
use crate::core::error::ContractError;
use crate::core::msg::Validatable;
use crate::core::types::address::AccountAddress;
use crate::core::types::any::TypeUrl;
use crate::util::aliases::ContractResult;
use crate::util::coins::validate_coins;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_address::validate_address_field;

/// Spends coins out of the accumulated fee pool.  An empty spend is structurally valid and left
/// to the keeper to treat as a no-op, but every listed coin must carry a positive amount.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgSpendFeePool {
    pub authority: AccountAddress,
    pub recipient: AccountAddress,
    /// The coins to spend, sorted by denom.
    pub amount: Vec<Coin>,
}
impl MsgSpendFeePool {
    /// Constructs a new instance of this struct from canonical account identities, encoding them
    /// through the account codec.
    ///
    /// # Parameters
    ///
    /// * `ac` The account codec used to render both addresses.
    /// * `authority` The canonical identity of the module authority.
    /// * `recipient` The canonical identity of the account receiving the coins.
    /// * `amount` The coins to spend.
    pub fn new(
        ac: &AccountCodec,
        authority: &CanonicalAddr,
        recipient: &CanonicalAddr,
        amount: Vec<Coin>,
    ) -> ContractResult<Self> {
        Self {
            authority: ac.bytes_to_string(authority)?,
            recipient: ac.bytes_to_string(recipient)?,
            amount,
        }
        .to_ok()
    }
}
impl TypeUrl for MsgSpendFeePool {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgSpendFeePool";
}
impl Validatable for MsgSpendFeePool {
    fn validate(&self, ac: &AccountCodec, _vc: &ValidatorCodec) -> ContractResult<()> {
        validate_address_field(ac, &self.authority, "authority")?;
        validate_address_field(ac, &self.recipient, "recipient")?;
        validate_coins(&self.amount).map_err(|e| match e {
            ContractError::InvalidAmount { explanation } => {
                ContractError::invalid_amount(format!("invalid spend amount: {}", explanation))
            }
            other => other,
        })
    }
}
