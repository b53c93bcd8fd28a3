use cosmwasm_std::Coin;

use crate::core::error::ContractError;
use crate::core::types::dec_coin::DecCoin;
use crate::util::aliases::ContractResult;
use crate::util::constants::{MAX_DENOM_LENGTH, MIN_DENOM_LENGTH};
use crate::util::traits::ResultExtensions;

/// Ensures that a denomination follows the canonical format: a leading ascii letter followed by
/// 2 to 127 ascii alphanumerics or any of `/ : . _ -`.
///
/// # Parameters
///
/// * `denom` The denomination to check.
///
/// # Examples
/// ```
/// use opchild_admission::util::coins::validate_denom;
///
/// validate_denom("uinit").expect("a plain lowercase denom is valid");
/// validate_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2")
///     .expect("ibc denoms are valid");
/// validate_denom("1up").expect_err("denoms must begin with a letter");
/// ```
pub fn validate_denom(denom: &str) -> ContractResult<()> {
    let explanation = if denom.len() < MIN_DENOM_LENGTH || denom.len() > MAX_DENOM_LENGTH {
        Some(format!(
            "denom [{}] must be between {} and {} characters",
            denom, MIN_DENOM_LENGTH, MAX_DENOM_LENGTH,
        ))
    } else if !denom.starts_with(|c: char| c.is_ascii_alphabetic()) {
        Some(format!("denom [{}] must begin with a letter", denom))
    } else if !denom.chars().all(is_denom_char) {
        Some(format!("denom [{}] contains invalid characters", denom))
    } else {
        None
    };
    match explanation {
        Some(explanation) => ContractError::invalid_amount(explanation).to_err(),
        None => Ok(()),
    }
}

/// A coin is valid when its denomination is well-formed.  Amounts are unsigned, so every amount
/// is non-negative by construction.
pub fn is_valid_coin(coin: &Coin) -> bool {
    validate_denom(&coin.denom).is_ok()
}

pub fn is_zero_coin(coin: &Coin) -> bool {
    coin.amount.is_zero()
}

/// Ensures the coin is valid and carries a strictly positive amount.
pub fn validate_positive_coin(coin: &Coin) -> ContractResult<()> {
    validate_denom(&coin.denom)?;
    if is_zero_coin(coin) {
        return ContractError::invalid_amount(format!("amount [{}] must be positive", coin))
            .to_err();
    }
    Ok(())
}

/// Validates a coin set: every denom must be well-formed, every amount positive, and the set
/// must be sorted by denom with no duplicates.  An empty set is accepted.
///
/// # Examples
/// ```
/// use cosmwasm_std::coin;
/// use opchild_admission::util::coins::are_valid_coins;
///
/// assert!(are_valid_coins(&[]));
/// assert!(are_valid_coins(&[coin(1, "uatom"), coin(5, "uinit")]));
/// assert!(!are_valid_coins(&[coin(1, "uatom"), coin(0, "uinit")]));
/// assert!(!are_valid_coins(&[coin(1, "uinit"), coin(1, "uatom")]));
/// ```
pub fn are_valid_coins(coins: &[Coin]) -> bool {
    validate_coins(coins).is_ok()
}

/// The erroring form of [are_valid_coins](self::are_valid_coins).  The returned
/// [InvalidAmount](crate::core::error::ContractError::InvalidAmount) explains the first violation.
pub fn validate_coins(coins: &[Coin]) -> ContractResult<()> {
    validate_coin_set(coins.iter().map(|c| (c.denom.as_str(), c.amount.is_zero())))
}

/// The [DecCoin](crate::core::types::dec_coin::DecCoin) counterpart to [are_valid_coins](self::are_valid_coins).
pub fn are_valid_dec_coins(coins: &[DecCoin]) -> bool {
    validate_coin_set(coins.iter().map(|c| (c.denom.as_str(), c.amount.is_zero()))).is_ok()
}

/// Renders a coin set the way the cosmos sdk does: `1uatom,5uinit`.
pub fn coins_display_string(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

/// Each entry is a denom paired with whether its amount is zero.
fn validate_coin_set<'a, I: Iterator<Item = (&'a str, bool)>>(entries: I) -> ContractResult<()> {
    let mut previous: Option<&str> = None;
    for (denom, is_zero) in entries {
        validate_denom(denom)?;
        if is_zero {
            return ContractError::invalid_amount(format!(
                "amount for denom [{}] must be positive",
                denom
            ))
            .to_err();
        }
        if let Some(prev) = previous {
            if denom <= prev {
                return ContractError::invalid_amount(format!(
                    "denom [{}] is duplicated or out of order after [{}]",
                    denom, prev,
                ))
                .to_err();
            }
        }
        previous = Some(denom);
    }
    Ok(())
}

fn is_denom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')
}
