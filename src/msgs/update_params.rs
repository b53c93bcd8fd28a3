use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::core::msg::Validatable;
use crate::core::params::Params;
use crate::core::types::address::AccountAddress;
use crate::core::types::any::TypeUrl;
use crate::util::aliases::ContractResult;
use crate::validation::validate_address::validate_address_field;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgUpdateParams {
    pub authority: AccountAddress,
    /// The replacement parameters.  All fields must be supplied.
    pub params: Params,
}
impl MsgUpdateParams {
    pub fn new<A: Into<AccountAddress>>(authority: A, params: Params) -> Self {
        Self {
            authority: authority.into(),
            params,
        }
    }
}
impl TypeUrl for MsgUpdateParams {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgUpdateParams";
}
impl Validatable for MsgUpdateParams {
    fn validate(&self, ac: &AccountCodec, _vc: &ValidatorCodec) -> ContractResult<()> {
        validate_address_field(ac, &self.authority, "authority")?;
        self.params.validate(ac)
    }
}
