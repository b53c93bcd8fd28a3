use crate::core::error::ContractError;
use cosmwasm_std::Response;

/// Shortens the lengthy response type returned by keeper handlers and the message router.
pub type HandlerResponse = Result<Response, ContractError>;

/// All admission pathways with exceptional code should return a result that has a contract error
/// as its resulting error type.
pub type ContractResult<T> = Result<T, ContractError>;
