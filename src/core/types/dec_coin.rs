use std::fmt::{Display, Formatter};

use cosmwasm_std::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A denomination paired with a decimal amount.  Used where fractional amounts are meaningful,
/// like the minimum gas prices in [Params](crate::core::params::Params).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct DecCoin {
    pub denom: String,
    pub amount: Decimal,
}
impl DecCoin {
    pub fn new<S: Into<String>>(amount: Decimal, denom: S) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}
impl Display for DecCoin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
