// Admission output attributes.  All should be prefixed with "opchild_" to make them easy to
// discern when observed in the event stream

/////////////////////////////
// Shared output attributes //
/////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const OPCHILD_EVENT_TYPE_KEY: &str = "opchild_event_type";
/// Value = The account that signed for the message, either its sender or its authority (String)
pub const SIGNER_KEY: &str = "opchild_signer";
/// Value = The validator operator address targeted by the message (String)
pub const VALIDATOR_ADDRESS_KEY: &str = "opchild_validator_address";
/// Value = The account receiving funds or privileges from the message (String)
pub const RECIPIENT_KEY: &str = "opchild_recipient";
/// Value = The coin amount(s) moved by the message, comma separated (String)
pub const AMOUNT_KEY: &str = "opchild_amount";
/// Value = The base layer deposit sequence of a finalized deposit (u64 as String)
pub const SEQUENCE_KEY: &str = "opchild_sequence";
/// Value = The amount of sub-messages carried by a batch (usize as String)
pub const MESSAGE_COUNT_KEY: &str = "opchild_message_count";

///////////////////////////
// Address configuration //
///////////////////////////

/// Standard bech32 prefix for account addresses on the child chain and its base layer
pub const DEFAULT_ACCOUNT_PREFIX: &str = "init";
/// Standard bech32 prefix for validator operator addresses
pub const DEFAULT_VALIDATOR_PREFIX: &str = "initvaloper";
/// Canonical addresses longer than this are rejected by both codecs
pub const MAX_ADDRESS_LENGTH: usize = 255;

//////////////////////
// Global Constants //
//////////////////////

/// Denominations must be between 3 and 128 characters long
pub const MIN_DENOM_LENGTH: usize = 3;
pub const MAX_DENOM_LENGTH: usize = 128;
