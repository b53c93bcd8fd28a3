use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::AccountCodec;
use crate::core::error::ContractError;
use crate::core::types::address::AccountAddress;
use crate::core::types::dec_coin::DecCoin;
use crate::util::aliases::ContractResult;
use crate::util::coins::are_valid_dec_coins;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_address::validate_address_field;

pub const DEFAULT_MAX_VALIDATORS: u32 = 100;
pub const DEFAULT_HISTORICAL_ENTRIES: u32 = 10_000;

/// The configuration aggregate owned by the opchild module.  Parameter updates replace it
/// wholesale, so it carries its own validation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Params {
    /// The maximum number of validators the child chain may have.
    pub max_validators: u32,
    /// The number of historical entries persisted by the keeper.
    pub historical_entries: u32,
    /// The lowest gas prices accepted by the child chain, sorted by denom.
    pub min_gas_prices: Vec<DecCoin>,
    /// The account permitted to relay bridge events from the base layer.
    pub bridge_executor: AccountAddress,
    /// Accounts whose transactions are exempt from fees.
    pub fee_whitelist: Vec<AccountAddress>,
}
impl Params {
    /// Constructs a new instance of this struct with default limits, no gas prices and an empty
    /// fee whitelist.
    ///
    /// # Parameters
    ///
    /// * `bridge_executor` The account permitted to relay bridge events from the base layer.
    pub fn new<A: Into<AccountAddress>>(bridge_executor: A) -> Self {
        Self {
            max_validators: DEFAULT_MAX_VALIDATORS,
            historical_entries: DEFAULT_HISTORICAL_ENTRIES,
            min_gas_prices: vec![],
            bridge_executor: bridge_executor.into(),
            fee_whitelist: vec![],
        }
    }

    pub fn with_min_gas_prices(mut self, min_gas_prices: Vec<DecCoin>) -> Self {
        self.min_gas_prices = min_gas_prices;
        self
    }

    pub fn with_fee_whitelist(mut self, fee_whitelist: Vec<AccountAddress>) -> Self {
        self.fee_whitelist = fee_whitelist;
        self
    }

    /// Fails fast on the first invalid value.  Malformed addresses produce
    /// [InvalidAddress](crate::core::error::ContractError::InvalidAddress) errors, while every
    /// other violation produces [InvalidParams](crate::core::error::ContractError::InvalidParams).
    pub fn validate(&self, ac: &AccountCodec) -> ContractResult<()> {
        if self.max_validators == 0 {
            return ContractError::invalid_params("max validators must be positive").to_err();
        }
        validate_address_field(ac, &self.bridge_executor, "bridge executor")?;
        if !are_valid_dec_coins(&self.min_gas_prices) {
            return ContractError::invalid_params(format!(
                "min gas prices must be positive and sorted by denom: {:?}",
                self.min_gas_prices
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<String>>(),
            ))
            .to_err();
        }
        let mut seen = HashSet::new();
        for address in &self.fee_whitelist {
            validate_address_field(ac, address, "fee whitelist")?;
            if !seen.insert(address) {
                return ContractError::invalid_params(format!(
                    "duplicate fee whitelist address [{}]",
                    address
                ))
                .to_err();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Decimal;

    use crate::codec::address_codec::AccountCodec;
    use crate::core::error::ContractError;
    use crate::core::params::{Params, DEFAULT_HISTORICAL_ENTRIES, DEFAULT_MAX_VALIDATORS};
    use crate::core::types::address::AccountAddress;
    use crate::core::types::dec_coin::DecCoin;
    use crate::testutil::test_constants::{
        DEFAULT_BRIDGE_EXECUTOR_ADDRESS, DEFAULT_RECIPIENT_ADDRESS, DEFAULT_VALIDATOR_ADDRESS,
    };
    use crate::testutil::test_utilities::get_default_params;

    #[test]
    fn test_new_uses_defaults() {
        let params = Params::new(DEFAULT_BRIDGE_EXECUTOR_ADDRESS);
        assert_eq!(
            DEFAULT_MAX_VALIDATORS, params.max_validators,
            "expected the default max validators",
        );
        assert_eq!(
            DEFAULT_HISTORICAL_ENTRIES, params.historical_entries,
            "expected the default historical entries",
        );
        params
            .validate(&AccountCodec::default())
            .expect("default params with a valid executor should pass validation");
    }

    #[test]
    fn test_valid_default_params() {
        get_default_params()
            .validate(&AccountCodec::default())
            .expect("the default test params should pass validation");
    }

    #[test]
    fn test_zero_max_validators_is_rejected() {
        let params = Params {
            max_validators: 0,
            ..get_default_params()
        };
        let error = params.validate(&AccountCodec::default()).unwrap_err();
        assert_eq!(
            ContractError::invalid_params("max validators must be positive"),
            error,
            "zero max validators should be rejected",
        );
    }

    #[test]
    fn test_invalid_bridge_executor_is_rejected() {
        let params = Params::new(DEFAULT_VALIDATOR_ADDRESS);
        let error = params.validate(&AccountCodec::default()).unwrap_err();
        match error {
            ContractError::InvalidAddress { explanation, .. } => assert!(
                explanation.starts_with("invalid bridge executor address"),
                "expected the explanation to name the bridge executor, but got: {}",
                explanation,
            ),
            _ => panic!("unexpected error encountered: {:?}", error),
        }
    }

    #[test]
    fn test_unsorted_gas_prices_are_rejected() {
        let params = get_default_params().with_min_gas_prices(vec![
            DecCoin::new(Decimal::percent(15), "uinit"),
            DecCoin::new(Decimal::percent(15), "uatom"),
        ]);
        let error = params.validate(&AccountCodec::default()).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidParams { .. }),
            "unsorted gas prices should produce an invalid params error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_zero_gas_price_is_rejected() {
        let params =
            get_default_params().with_min_gas_prices(vec![DecCoin::new(Decimal::zero(), "uinit")]);
        let error = params.validate(&AccountCodec::default()).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidParams { .. }),
            "a zero gas price should produce an invalid params error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_duplicate_whitelist_is_rejected() {
        let params = get_default_params().with_fee_whitelist(vec![
            AccountAddress::new(DEFAULT_RECIPIENT_ADDRESS),
            AccountAddress::new(DEFAULT_RECIPIENT_ADDRESS),
        ]);
        let error = params.validate(&AccountCodec::default()).unwrap_err();
        assert_eq!(
            ContractError::invalid_params(format!(
                "duplicate fee whitelist address [{}]",
                DEFAULT_RECIPIENT_ADDRESS
            )),
            error,
            "a duplicated whitelist entry should be rejected",
        );
    }
}
