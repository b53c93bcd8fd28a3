//! Hands admitted messages to the keeper that executes them.

use crate::core::msg::OpChildMsg;
use crate::msgs::add_validator::MsgAddValidator;
use crate::msgs::execute_messages::MsgExecuteMessages;
use crate::msgs::finalize_token_deposit::MsgFinalizeTokenDeposit;
use crate::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
use crate::msgs::remove_validator::MsgRemoveValidator;
use crate::msgs::spend_fee_pool::MsgSpendFeePool;
use crate::msgs::update_params::MsgUpdateParams;
use crate::msgs::whitelist::MsgWhitelist;
use crate::util::aliases::HandlerResponse;
use crate::util::event_attributes::EventAttributes;
use crate::validation::validate_msg::{validate_msg, AdmissionDeps};

/// The state machine that executes admitted messages.  Every handler receives a message that has
/// already passed admission, so implementations only enforce stateful rules: authority checks,
/// balances, and deposit sequence uniqueness.
pub trait OpChildKeeper {
    fn handle_execute_messages(&mut self, msg: MsgExecuteMessages) -> HandlerResponse;

    fn handle_add_validator(&mut self, msg: MsgAddValidator) -> HandlerResponse;

    fn handle_remove_validator(&mut self, msg: MsgRemoveValidator) -> HandlerResponse;

    fn handle_update_params(&mut self, msg: MsgUpdateParams) -> HandlerResponse;

    fn handle_whitelist(&mut self, msg: MsgWhitelist) -> HandlerResponse;

    fn handle_spend_fee_pool(&mut self, msg: MsgSpendFeePool) -> HandlerResponse;

    fn handle_initiate_token_withdrawal(
        &mut self,
        msg: MsgInitiateTokenWithdrawal,
    ) -> HandlerResponse;

    fn handle_finalize_token_deposit(&mut self, msg: MsgFinalizeTokenDeposit)
        -> HandlerResponse;
}

/// Admits the message and dispatches it to the matching keeper handler.  A rejected message
/// never reaches the keeper.  The keeper's response is returned with the standard event
/// attributes of the message appended.
///
/// # Parameters
///
/// * `keeper` The state machine that executes the message.
/// * `deps` The codecs and registry used to admit the message.
/// * `msg` The message to admit and execute.
pub fn route_msg<K: OpChildKeeper>(
    keeper: &mut K,
    deps: &AdmissionDeps,
    msg: OpChildMsg,
) -> HandlerResponse {
    // Ensure the message is properly formatted before doing anything
    validate_msg(&msg, deps)?;
    let attributes = EventAttributes::for_msg(&msg);
    let response = match msg {
        OpChildMsg::ExecuteMessages(msg) => keeper.handle_execute_messages(msg),
        OpChildMsg::AddValidator(msg) => keeper.handle_add_validator(msg),
        OpChildMsg::RemoveValidator(msg) => keeper.handle_remove_validator(msg),
        OpChildMsg::UpdateParams(msg) => keeper.handle_update_params(msg),
        OpChildMsg::Whitelist(msg) => keeper.handle_whitelist(msg),
        OpChildMsg::SpendFeePool(msg) => keeper.handle_spend_fee_pool(msg),
        OpChildMsg::InitiateTokenWithdrawal(msg) => keeper.handle_initiate_token_withdrawal(msg),
        OpChildMsg::FinalizeTokenDeposit(msg) => keeper.handle_finalize_token_deposit(msg),
    }?;
    Ok(response.add_attributes(attributes))
}
