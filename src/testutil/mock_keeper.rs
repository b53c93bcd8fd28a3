use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::Response;
use cw_storage_plus::{Item, Map};

use crate::core::error::ContractError;
use crate::core::msg::{
    TYPE_MSG_ADD_VALIDATOR, TYPE_MSG_EXECUTE_MESSAGES, TYPE_MSG_FINALIZE_TOKEN_DEPOSIT,
    TYPE_MSG_INITIATE_TOKEN_WITHDRAWAL, TYPE_MSG_REMOVE_VALIDATOR, TYPE_MSG_SPEND_FEE_POOL,
    TYPE_MSG_UPDATE_PARAMS, TYPE_MSG_WHITELIST,
};
use crate::core::params::Params;
use crate::handler::OpChildKeeper;
use crate::msgs::add_validator::MsgAddValidator;
use crate::msgs::execute_messages::MsgExecuteMessages;
use crate::msgs::finalize_token_deposit::MsgFinalizeTokenDeposit;
use crate::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
use crate::msgs::remove_validator::MsgRemoveValidator;
use crate::msgs::spend_fee_pool::MsgSpendFeePool;
use crate::msgs::update_params::MsgUpdateParams;
use crate::msgs::whitelist::MsgWhitelist;
use crate::util::aliases::{ContractResult, HandlerResponse};
use crate::util::traits::ResultExtensions;

use super::test_utilities::get_default_params;

const HANDLED_MSGS: Item<Vec<String>> = Item::new("handled_msgs");
const PARAMS: Item<Params> = Item::new("params");
/// Validator operator address -> moniker
const VALIDATORS: Map<&str, String> = Map::new("validators");
const FINALIZED_SEQUENCES: Map<u64, bool> = Map::new("finalized_sequences");

/// An in-memory keeper that records which handlers were invoked.  Only the state needed to
/// observe the handlers is kept: params, the validator set, and finalized deposit sequences.
pub struct MockKeeper {
    storage: MockStorage,
}
impl MockKeeper {
    /// Creates a keeper with the default test params in place.
    pub fn new() -> Self {
        let mut storage = MockStorage::new();
        HANDLED_MSGS
            .save(&mut storage, &vec![])
            .expect("the handled messages should be stored");
        PARAMS
            .save(&mut storage, &get_default_params())
            .expect("the default params should be stored");
        Self { storage }
    }

    /// The legacy route name of every message handled so far, in order.
    pub fn handled(&self) -> Vec<String> {
        HANDLED_MSGS
            .load(&self.storage)
            .expect("the handled messages should load")
    }

    pub fn params(&self) -> Params {
        PARAMS
            .load(&self.storage)
            .expect("the params should always be present")
    }

    pub fn moniker_of(&self, validator_address: &str) -> Option<String> {
        VALIDATORS
            .may_load(&self.storage, validator_address)
            .expect("the validator should load")
    }

    fn record(&mut self, msg_type: &str) -> ContractResult<()> {
        HANDLED_MSGS.update(&mut self.storage, |mut handled| -> ContractResult<_> {
            handled.push(msg_type.to_string());
            handled.to_ok()
        })?;
        Ok(())
    }
}
impl Default for MockKeeper {
    fn default() -> Self {
        Self::new()
    }
}
impl OpChildKeeper for MockKeeper {
    fn handle_execute_messages(&mut self, _msg: MsgExecuteMessages) -> HandlerResponse {
        self.record(TYPE_MSG_EXECUTE_MESSAGES)?;
        Response::new().to_ok()
    }

    fn handle_add_validator(&mut self, msg: MsgAddValidator) -> HandlerResponse {
        self.record(TYPE_MSG_ADD_VALIDATOR)?;
        VALIDATORS.save(
            &mut self.storage,
            msg.validator_address.as_str(),
            &msg.moniker,
        )?;
        Response::new().to_ok()
    }

    fn handle_remove_validator(&mut self, msg: MsgRemoveValidator) -> HandlerResponse {
        self.record(TYPE_MSG_REMOVE_VALIDATOR)?;
        VALIDATORS.remove(&mut self.storage, msg.validator_address.as_str());
        Response::new().to_ok()
    }

    fn handle_update_params(&mut self, msg: MsgUpdateParams) -> HandlerResponse {
        self.record(TYPE_MSG_UPDATE_PARAMS)?;
        PARAMS.save(&mut self.storage, &msg.params)?;
        Response::new().to_ok()
    }

    fn handle_whitelist(&mut self, msg: MsgWhitelist) -> HandlerResponse {
        self.record(TYPE_MSG_WHITELIST)?;
        PARAMS.update(&mut self.storage, |mut params| -> ContractResult<_> {
            if !params.fee_whitelist.contains(&msg.address) {
                params.fee_whitelist.push(msg.address);
            }
            params.to_ok()
        })?;
        Response::new().to_ok()
    }

    fn handle_spend_fee_pool(&mut self, _msg: MsgSpendFeePool) -> HandlerResponse {
        self.record(TYPE_MSG_SPEND_FEE_POOL)?;
        Response::new().to_ok()
    }

    fn handle_initiate_token_withdrawal(
        &mut self,
        _msg: MsgInitiateTokenWithdrawal,
    ) -> HandlerResponse {
        self.record(TYPE_MSG_INITIATE_TOKEN_WITHDRAWAL)?;
        Response::new().to_ok()
    }

    fn handle_finalize_token_deposit(&mut self, msg: MsgFinalizeTokenDeposit) -> HandlerResponse {
        self.record(TYPE_MSG_FINALIZE_TOKEN_DEPOSIT)?;
        if FINALIZED_SEQUENCES.has(&self.storage, msg.sequence) {
            return ContractError::generic(format!(
                "deposit sequence [{}] has already been finalized",
                msg.sequence
            ))
            .to_err();
        }
        FINALIZED_SEQUENCES.save(&mut self.storage, msg.sequence, &true)?;
        Response::new().to_ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::handler::route_msg;
    use crate::testutil::mock_keeper::MockKeeper;
    use crate::testutil::test_constants::{
        DEFAULT_MONIKER, DEFAULT_RECIPIENT_ADDRESS, DEFAULT_VALIDATOR_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        get_valid_add_validator, get_valid_remove_validator, get_valid_whitelist, TestDeps,
    };

    #[test]
    fn test_validator_set_follows_handled_msgs() {
        let deps = TestDeps::new();
        let mut keeper = MockKeeper::new();
        route_msg(&mut keeper, &deps.admission(), get_valid_add_validator().into())
            .expect("adding the validator should succeed");
        assert_eq!(
            Some(DEFAULT_MONIKER.to_string()),
            keeper.moniker_of(DEFAULT_VALIDATOR_ADDRESS),
            "the added validator should be stored with its moniker",
        );
        route_msg(&mut keeper, &deps.admission(), get_valid_remove_validator().into())
            .expect("removing the validator should succeed");
        assert_eq!(
            None,
            keeper.moniker_of(DEFAULT_VALIDATOR_ADDRESS),
            "the removed validator should no longer be stored",
        );
    }

    #[test]
    fn test_whitelist_is_appended_once() {
        let deps = TestDeps::new();
        let mut keeper = MockKeeper::new();
        for _ in 0..2 {
            route_msg(&mut keeper, &deps.admission(), get_valid_whitelist().into())
                .expect("whitelisting should succeed");
        }
        let whitelisted = keeper
            .params()
            .fee_whitelist
            .iter()
            .filter(|address| address.as_str() == DEFAULT_RECIPIENT_ADDRESS)
            .count();
        assert_eq!(1, whitelisted, "the address should only be whitelisted once");
    }
}
