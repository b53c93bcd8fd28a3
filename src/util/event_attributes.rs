use crate::core::msg::OpChildMsg;
use crate::util::coins::coins_display_string;

use super::constants::{
    AMOUNT_KEY, MESSAGE_COUNT_KEY, OPCHILD_EVENT_TYPE_KEY, RECIPIENT_KEY, SEQUENCE_KEY,
    SIGNER_KEY, VALIDATOR_ADDRESS_KEY,
};

pub enum EventType {
    ExecuteMessages,
    AddValidator,
    RemoveValidator,
    UpdateParams,
    Whitelist,
    SpendFeePool,
    InitiateTokenWithdrawal,
    FinalizeTokenDeposit,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::ExecuteMessages => "execute_messages",
            EventType::AddValidator => "add_validator",
            EventType::RemoveValidator => "remove_validator",
            EventType::UpdateParams => "update_params",
            EventType::Whitelist => "whitelist",
            EventType::SpendFeePool => "spend_fee_pool",
            EventType::InitiateTokenWithdrawal => "initiate_token_withdrawal",
            EventType::FinalizeTokenDeposit => "finalize_token_deposit",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(OPCHILD_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    /// Derives the standard attributes of an admitted message.
    pub fn for_msg(msg: &OpChildMsg) -> Self {
        match msg {
            OpChildMsg::ExecuteMessages(msg) => Self::new(EventType::ExecuteMessages)
                .set_signer(&msg.sender)
                .set_message_count(msg.messages.len()),
            OpChildMsg::AddValidator(msg) => Self::new(EventType::AddValidator)
                .set_signer(&msg.authority)
                .set_validator(&msg.validator_address),
            OpChildMsg::RemoveValidator(msg) => Self::new(EventType::RemoveValidator)
                .set_signer(&msg.authority)
                .set_validator(&msg.validator_address),
            OpChildMsg::UpdateParams(msg) => {
                Self::new(EventType::UpdateParams).set_signer(&msg.authority)
            }
            OpChildMsg::Whitelist(msg) => Self::new(EventType::Whitelist)
                .set_signer(&msg.authority)
                .set_recipient(&msg.address),
            OpChildMsg::SpendFeePool(msg) => Self::new(EventType::SpendFeePool)
                .set_signer(&msg.authority)
                .set_recipient(&msg.recipient)
                .set_amount(coins_display_string(&msg.amount)),
            OpChildMsg::InitiateTokenWithdrawal(msg) => {
                Self::new(EventType::InitiateTokenWithdrawal)
                    .set_signer(&msg.sender)
                    .set_recipient(&msg.to)
                    .set_amount(&msg.amount)
            }
            OpChildMsg::FinalizeTokenDeposit(msg) => Self::new(EventType::FinalizeTokenDeposit)
                .set_signer(&msg.sender)
                .set_recipient(&msg.to)
                .set_amount(&msg.amount)
                .set_sequence(msg.sequence),
        }
    }

    pub fn set_signer<T: ToString>(mut self, signer: T) -> Self {
        self.attributes.push((SIGNER_KEY.into(), signer.to_string()));
        self
    }

    pub fn set_validator<T: ToString>(mut self, validator_address: T) -> Self {
        self.attributes
            .push((VALIDATOR_ADDRESS_KEY.into(), validator_address.to_string()));
        self
    }

    pub fn set_recipient<T: ToString>(mut self, recipient: T) -> Self {
        self.attributes
            .push((RECIPIENT_KEY.into(), recipient.to_string()));
        self
    }

    pub fn set_amount<T: ToString>(mut self, amount: T) -> Self {
        self.attributes.push((AMOUNT_KEY.into(), amount.to_string()));
        self
    }

    pub fn set_sequence(mut self, sequence: u64) -> Self {
        self.attributes
            .push((SEQUENCE_KEY.into(), sequence.to_string()));
        self
    }

    pub fn set_message_count(mut self, count: usize) -> Self {
        self.attributes
            .push((MESSAGE_COUNT_KEY.into(), count.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
