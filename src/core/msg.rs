use std::fmt::Debug;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::codec::interface_registry::InterfaceRegistry;
use crate::core::types::any::{Any, TypeUrl};
use crate::msgs::add_validator::MsgAddValidator;
use crate::msgs::execute_messages::MsgExecuteMessages;
use crate::msgs::finalize_token_deposit::MsgFinalizeTokenDeposit;
use crate::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
use crate::msgs::remove_validator::MsgRemoveValidator;
use crate::msgs::spend_fee_pool::MsgSpendFeePool;
use crate::msgs::update_params::MsgUpdateParams;
use crate::msgs::whitelist::MsgWhitelist;
use crate::util::aliases::ContractResult;

// Legacy route names for each message kind
pub const TYPE_MSG_EXECUTE_MESSAGES: &str = "execute_messages";
pub const TYPE_MSG_ADD_VALIDATOR: &str = "add_validator";
pub const TYPE_MSG_REMOVE_VALIDATOR: &str = "remove_validator";
pub const TYPE_MSG_UPDATE_PARAMS: &str = "update_params";
pub const TYPE_MSG_WHITELIST: &str = "whitelist";
pub const TYPE_MSG_SPEND_FEE_POOL: &str = "spend_fee_pool";
pub const TYPE_MSG_INITIATE_TOKEN_WITHDRAWAL: &str = "withdraw";
pub const TYPE_MSG_FINALIZE_TOKEN_DEPOSIT: &str = "deposit";

/// Any message that can be carried inside an [Any](crate::core::types::any::Any) payload,
/// including the sub-messages of a [MsgExecuteMessages](crate::msgs::execute_messages::MsgExecuteMessages)
/// batch.  Every serializable [TypeUrl](crate::core::types::any::TypeUrl) type implements this
/// automatically.
pub trait SdkMsg: Debug {
    fn type_url(&self) -> &'static str;

    fn to_any(&self) -> ContractResult<Any>;

    fn as_std_any(&self) -> &dyn std::any::Any;
}
impl<T> SdkMsg for T
where
    T: TypeUrl + Serialize + Debug + 'static,
{
    fn type_url(&self) -> &'static str {
        T::TYPE_URL
    }

    fn to_any(&self) -> ContractResult<Any> {
        Any::pack(self)
    }

    fn as_std_any(&self) -> &dyn std::any::Any {
        self
    }
}
impl dyn SdkMsg {
    /// Recovers the concrete type of an unpacked message.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_std_any().downcast_ref::<T>()
    }
}

/// The stateless admission checks of a message.  Both codecs are always supplied so that each
/// address field is decoded by the codec of its own namespace.
pub trait Validatable {
    fn validate(&self, ac: &AccountCodec, vc: &ValidatorCodec) -> ContractResult<()>;
}

/// Implemented by messages that embed [Any](crate::core::types::any::Any) payloads.  Resolves
/// every payload through the registry without interpreting the results.
pub trait UnpackInterfaces {
    fn unpack_interfaces(&self, registry: &InterfaceRegistry) -> ContractResult<()>;
}

// Every message kind must be validatable and packable
const _: fn() = || {
    fn assert_msg<T: Validatable + TypeUrl + SdkMsg>() {}
    assert_msg::<MsgExecuteMessages>();
    assert_msg::<MsgAddValidator>();
    assert_msg::<MsgRemoveValidator>();
    assert_msg::<MsgUpdateParams>();
    assert_msg::<MsgWhitelist>();
    assert_msg::<MsgSpendFeePool>();
    assert_msg::<MsgInitiateTokenWithdrawal>();
    assert_msg::<MsgFinalizeTokenDeposit>();
};

/// Every message accepted by the opchild module.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpChildMsg {
    ExecuteMessages(MsgExecuteMessages),
    AddValidator(MsgAddValidator),
    RemoveValidator(MsgRemoveValidator),
    UpdateParams(MsgUpdateParams),
    Whitelist(MsgWhitelist),
    SpendFeePool(MsgSpendFeePool),
    InitiateTokenWithdrawal(MsgInitiateTokenWithdrawal),
    FinalizeTokenDeposit(MsgFinalizeTokenDeposit),
}
impl OpChildMsg {
    pub fn msg_type(&self) -> &'static str {
        match self {
            Self::ExecuteMessages(_) => TYPE_MSG_EXECUTE_MESSAGES,
            Self::AddValidator(_) => TYPE_MSG_ADD_VALIDATOR,
            Self::RemoveValidator(_) => TYPE_MSG_REMOVE_VALIDATOR,
            Self::UpdateParams(_) => TYPE_MSG_UPDATE_PARAMS,
            Self::Whitelist(_) => TYPE_MSG_WHITELIST,
            Self::SpendFeePool(_) => TYPE_MSG_SPEND_FEE_POOL,
            Self::InitiateTokenWithdrawal(_) => TYPE_MSG_INITIATE_TOKEN_WITHDRAWAL,
            Self::FinalizeTokenDeposit(_) => TYPE_MSG_FINALIZE_TOKEN_DEPOSIT,
        }
    }

    pub fn type_url(&self) -> &'static str {
        match self {
            Self::ExecuteMessages(msg) => msg.type_url(),
            Self::AddValidator(msg) => msg.type_url(),
            Self::RemoveValidator(msg) => msg.type_url(),
            Self::UpdateParams(msg) => msg.type_url(),
            Self::Whitelist(msg) => msg.type_url(),
            Self::SpendFeePool(msg) => msg.type_url(),
            Self::InitiateTokenWithdrawal(msg) => msg.type_url(),
            Self::FinalizeTokenDeposit(msg) => msg.type_url(),
        }
    }
}
impl Validatable for OpChildMsg {
    fn validate(&self, ac: &AccountCodec, vc: &ValidatorCodec) -> ContractResult<()> {
        match self {
            Self::ExecuteMessages(msg) => msg.validate(ac, vc),
            Self::AddValidator(msg) => msg.validate(ac, vc),
            Self::RemoveValidator(msg) => msg.validate(ac, vc),
            Self::UpdateParams(msg) => msg.validate(ac, vc),
            Self::Whitelist(msg) => msg.validate(ac, vc),
            Self::SpendFeePool(msg) => msg.validate(ac, vc),
            Self::InitiateTokenWithdrawal(msg) => msg.validate(ac, vc),
            Self::FinalizeTokenDeposit(msg) => msg.validate(ac, vc),
        }
    }
}
impl UnpackInterfaces for OpChildMsg {
    fn unpack_interfaces(&self, registry: &InterfaceRegistry) -> ContractResult<()> {
        match self {
            Self::ExecuteMessages(msg) => msg.unpack_interfaces(registry),
            Self::AddValidator(msg) => msg.unpack_interfaces(registry),
            _ => Ok(()),
        }
    }
}

impl From<MsgExecuteMessages> for OpChildMsg {
    fn from(msg: MsgExecuteMessages) -> Self {
        Self::ExecuteMessages(msg)
    }
}
impl From<MsgAddValidator> for OpChildMsg {
    fn from(msg: MsgAddValidator) -> Self {
        Self::AddValidator(msg)
    }
}
impl From<MsgRemoveValidator> for OpChildMsg {
    fn from(msg: MsgRemoveValidator) -> Self {
        Self::RemoveValidator(msg)
    }
}
impl From<MsgUpdateParams> for OpChildMsg {
    fn from(msg: MsgUpdateParams) -> Self {
        Self::UpdateParams(msg)
    }
}
impl From<MsgWhitelist> for OpChildMsg {
    fn from(msg: MsgWhitelist) -> Self {
        Self::Whitelist(msg)
    }
}
impl From<MsgSpendFeePool> for OpChildMsg {
    fn from(msg: MsgSpendFeePool) -> Self {
        Self::SpendFeePool(msg)
    }
}
impl From<MsgInitiateTokenWithdrawal> for OpChildMsg {
    fn from(msg: MsgInitiateTokenWithdrawal) -> Self {
        Self::InitiateTokenWithdrawal(msg)
    }
}
impl From<MsgFinalizeTokenDeposit> for OpChildMsg {
    fn from(msg: MsgFinalizeTokenDeposit) -> Self {
        Self::FinalizeTokenDeposit(msg)
    }
}
