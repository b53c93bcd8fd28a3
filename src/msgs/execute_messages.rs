use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::codec::interface_registry::InterfaceRegistry;
use crate::core::error::ContractError;
use crate::core::msg::{SdkMsg, UnpackInterfaces, Validatable};
use crate::core::types::address::AccountAddress;
use crate::core::types::any::{Any, TypeUrl};
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_address::validate_address_field;

/// Executes an ordered batch of arbitrary sub-messages, governance style.  The sub-messages are
/// carried as [Any](crate::core::types::any::Any) payloads and are only validated by the
/// component that dispatches them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgExecuteMessages {
    /// The account executing the batch.
    pub sender: AccountAddress,
    /// The packed sub-messages, in execution order.
    pub messages: Vec<Any>,
}
impl MsgExecuteMessages {
    /// Packs each provided message and constructs a new instance of this struct.  Fails with
    /// [MalformedPayload](crate::core::error::ContractError::MalformedPayload) if any message
    /// cannot be packed.
    ///
    /// # Parameters
    ///
    /// * `sender` The account executing the batch.
    /// * `messages` The sub-messages to pack, in execution order.
    pub fn new<A: Into<AccountAddress>>(
        sender: A,
        messages: &[&dyn SdkMsg],
    ) -> ContractResult<Self> {
        Self {
            sender: sender.into(),
            messages: messages
                .iter()
                .map(|msg| msg.to_any())
                .collect::<ContractResult<Vec<Any>>>()?,
        }
        .to_ok()
    }

    /// Unpacks every sub-message, in order, through the registry.
    pub fn get_msgs(&self, registry: &InterfaceRegistry) -> ContractResult<Vec<Box<dyn SdkMsg>>> {
        self.messages
            .iter()
            .map(|any| registry.unpack::<Box<dyn SdkMsg>>(any))
            .collect()
    }
}
impl TypeUrl for MsgExecuteMessages {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgExecuteMessages";
}
impl Validatable for MsgExecuteMessages {
    fn validate(&self, ac: &AccountCodec, _vc: &ValidatorCodec) -> ContractResult<()> {
        validate_address_field(ac, &self.sender, "sender")?;
        if self.messages.is_empty() {
            return ContractError::EmptyBatch.to_err();
        }
        Ok(())
    }
}
impl UnpackInterfaces for MsgExecuteMessages {
    fn unpack_interfaces(&self, registry: &InterfaceRegistry) -> ContractResult<()> {
        self.get_msgs(registry).map(|_| ())
    }
}
