use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid address provided [{address}]: {explanation}")]
    InvalidAddress {
        address: String,
        explanation: String,
    },

    #[error("no messages to execute: msgs length must be non-zero")]
    EmptyBatch,

    #[error("empty validator public key")]
    EmptyPubKey,

    #[error("invalid amount: {explanation}")]
    InvalidAmount { explanation: String },

    #[error("invalid sequence: deposit sequence must be non-zero")]
    InvalidSequence,

    #[error("no {interface} implementation registered for type url [{type_url}]")]
    UnregisteredType { type_url: String, interface: String },

    #[error("payload of type url [{type_url}] could not be resolved: {explanation}")]
    MalformedPayload {
        type_url: String,
        explanation: String,
    },

    #[error("invalid params: {explanation}")]
    InvalidParams { explanation: String },

    #[error("{msg}")]
    GenericError { msg: String },
}
impl ContractError {
    pub fn generic<S: Into<String>>(msg: S) -> ContractError {
        ContractError::GenericError { msg: msg.into() }
    }

    /// Rewraps an [InvalidAddress](self::ContractError::InvalidAddress) error so that its
    /// explanation names the message field that held the address.  All other variants pass
    /// through unchanged.
    ///
    /// # Parameters
    ///
    /// * `field` The message field name, ex: "authority" or "validator".
    pub fn for_address_field<S: Into<String>>(self, field: S) -> ContractError {
        match self {
            ContractError::InvalidAddress {
                address,
                explanation,
            } => ContractError::InvalidAddress {
                address,
                explanation: format!("invalid {} address: {}", field.into(), explanation),
            },
            other => other,
        }
    }

    pub fn invalid_amount<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::InvalidAmount {
            explanation: explanation.into(),
        }
    }

    pub fn invalid_params<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::InvalidParams {
            explanation: explanation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;

    #[test]
    fn test_for_address_field_rewraps_invalid_address() {
        let error = ContractError::InvalidAddress {
            address: "bad".to_string(),
            explanation: "invalid checksum".to_string(),
        }
        .for_address_field("authority");
        assert_eq!(
            "Invalid address provided [bad]: invalid authority address: invalid checksum",
            error.to_string(),
            "the field name should be prefixed onto the explanation",
        );
    }

    #[test]
    fn test_for_address_field_ignores_other_errors() {
        let error = ContractError::EmptyBatch.for_address_field("sender");
        assert_eq!(
            ContractError::EmptyBatch,
            error,
            "errors other than invalid address should pass through untouched",
        );
    }
}
