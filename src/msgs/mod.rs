//! One module per opchild message kind.  Each module owns the message struct, its constructor,
//! and its stateless admission checks.

/// Adds a validator to the child chain validator set.
pub mod add_validator;
/// Executes a batch of arbitrary sub-messages on behalf of the sender.
pub mod execute_messages;
/// Mints tokens deposited on the base layer to an account on the child chain.
pub mod finalize_token_deposit;
/// Burns tokens on the child chain so they can be withdrawn on the base layer.
pub mod initiate_token_withdrawal;
/// Removes a validator from the child chain validator set.
pub mod remove_validator;
/// Spends coins out of the accumulated fee pool.
pub mod spend_fee_pool;
/// Replaces the module parameters.
pub mod update_params;
/// Adds an account to the fee whitelist.
pub mod whitelist;
