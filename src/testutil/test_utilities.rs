use cosmwasm_std::{coin, coins, CanonicalAddr, Coin, Decimal, Response};
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::core::msg::OpChildMsg;
use crate::core::params::Params;
use crate::core::types::address::AccountAddress;
use crate::core::types::any::TypeUrl;
use crate::core::types::dec_coin::DecCoin;
use crate::core::types::pub_key::PubKey;
use crate::msgs::add_validator::MsgAddValidator;
use crate::msgs::execute_messages::MsgExecuteMessages;
use crate::msgs::finalize_token_deposit::MsgFinalizeTokenDeposit;
use crate::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
use crate::msgs::remove_validator::MsgRemoveValidator;
use crate::msgs::spend_fee_pool::MsgSpendFeePool;
use crate::msgs::update_params::MsgUpdateParams;
use crate::msgs::whitelist::MsgWhitelist;
use crate::validation::validate_msg::AdmissionDeps;

use super::test_constants::{
    DEFAULT_AMOUNT, DEFAULT_AUTHORITY_ADDRESS, DEFAULT_BRIDGE_EXECUTOR_ADDRESS, DEFAULT_DENOM,
    DEFAULT_DEPOSITOR_ADDRESS, DEFAULT_DEPOSIT_SEQUENCE, DEFAULT_MONIKER,
    DEFAULT_RECIPIENT_ADDRESS, DEFAULT_SENDER_ADDRESS, DEFAULT_VALIDATOR_ADDRESS,
};

/// Holds the default codecs so that tests can borrow an [AdmissionDeps](crate::validation::validate_msg::AdmissionDeps)
/// from them.
pub struct TestDeps {
    pub ac: AccountCodec,
    pub vc: ValidatorCodec,
}
impl TestDeps {
    pub fn new() -> Self {
        Self {
            ac: AccountCodec::default(),
            vc: ValidatorCodec::default(),
        }
    }

    pub fn admission(&self) -> AdmissionDeps<'_> {
        AdmissionDeps::with_default_registry(&self.ac, &self.vc)
    }
}
impl Default for TestDeps {
    fn default() -> Self {
        Self::new()
    }
}

/// A message type that exists on the chain but is never registered by this crate.  Useful for
/// driving the registry's unregistered type pathways.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TestMsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}
impl TestMsgSend {
    pub fn default_send() -> Self {
        Self {
            from_address: DEFAULT_SENDER_ADDRESS.to_string(),
            to_address: DEFAULT_RECIPIENT_ADDRESS.to_string(),
            amount: coins(DEFAULT_AMOUNT, DEFAULT_DENOM),
        }
    }
}
impl TypeUrl for TestMsgSend {
    const TYPE_URL: &'static str = "/cosmos.bank.v1beta1.MsgSend";
}

pub fn hex_to_canonical(hex: &str) -> CanonicalAddr {
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("test hex should be well-formed"))
        .collect::<Vec<u8>>();
    CanonicalAddr::from(bytes)
}

pub fn get_default_pub_key() -> PubKey {
    PubKey::ed25519(vec![7u8; 32])
}

pub fn get_default_params() -> Params {
    Params::new(DEFAULT_BRIDGE_EXECUTOR_ADDRESS)
        .with_min_gas_prices(vec![DecCoin::new(Decimal::percent(15), DEFAULT_DENOM)])
        .with_fee_whitelist(vec![AccountAddress::new(DEFAULT_AUTHORITY_ADDRESS)])
}

pub fn get_valid_execute_messages() -> MsgExecuteMessages {
    MsgExecuteMessages::new(DEFAULT_SENDER_ADDRESS, &[&get_valid_remove_validator()])
        .expect("the default batch should pack")
}

pub fn get_valid_add_validator() -> MsgAddValidator {
    MsgAddValidator::new(
        DEFAULT_MONIKER,
        DEFAULT_AUTHORITY_ADDRESS,
        DEFAULT_VALIDATOR_ADDRESS,
        Some(&get_default_pub_key()),
    )
    .expect("the default public key should pack")
}

pub fn get_valid_remove_validator() -> MsgRemoveValidator {
    MsgRemoveValidator::new(DEFAULT_AUTHORITY_ADDRESS, DEFAULT_VALIDATOR_ADDRESS)
}

pub fn get_valid_update_params() -> MsgUpdateParams {
    MsgUpdateParams::new(DEFAULT_AUTHORITY_ADDRESS, get_default_params())
}

pub fn get_valid_whitelist() -> MsgWhitelist {
    MsgWhitelist::new(DEFAULT_AUTHORITY_ADDRESS, DEFAULT_RECIPIENT_ADDRESS)
}

pub fn get_valid_spend_fee_pool() -> MsgSpendFeePool {
    MsgSpendFeePool {
        authority: DEFAULT_AUTHORITY_ADDRESS.into(),
        recipient: DEFAULT_RECIPIENT_ADDRESS.into(),
        amount: coins(DEFAULT_AMOUNT, DEFAULT_DENOM),
    }
}

pub fn get_valid_initiate_token_withdrawal() -> MsgInitiateTokenWithdrawal {
    MsgInitiateTokenWithdrawal::new(
        DEFAULT_SENDER_ADDRESS,
        DEFAULT_RECIPIENT_ADDRESS,
        coin(DEFAULT_AMOUNT, DEFAULT_DENOM),
    )
}

pub fn get_valid_finalize_token_deposit() -> MsgFinalizeTokenDeposit {
    MsgFinalizeTokenDeposit::new(
        DEFAULT_BRIDGE_EXECUTOR_ADDRESS,
        DEFAULT_DEPOSITOR_ADDRESS,
        DEFAULT_RECIPIENT_ADDRESS,
        coin(DEFAULT_AMOUNT, DEFAULT_DENOM),
        DEFAULT_DEPOSIT_SEQUENCE,
        None,
    )
}

/// One valid instance of every message kind, in declaration order.
pub fn get_valid_msgs() -> Vec<OpChildMsg> {
    vec![
        get_valid_execute_messages().into(),
        get_valid_add_validator().into(),
        get_valid_remove_validator().into(),
        get_valid_update_params().into(),
        get_valid_whitelist().into(),
        get_valid_spend_fee_pool().into(),
        get_valid_initiate_token_withdrawal().into(),
        get_valid_finalize_token_deposit().into(),
    ]
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap_or_else(|| panic!("expected an attribute with key [{}]", key))
        .value
        .as_str()
}
