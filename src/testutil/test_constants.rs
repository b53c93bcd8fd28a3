/// All addresses in these test constants were generated for testing purposes from fixed 20 byte
/// identities.
/// This address should be used as the module authority
pub const DEFAULT_AUTHORITY_ADDRESS: &str = "init13am065qmk680w86wya4u9refhnssqwcvw96t66";
/// The canonical identity behind DEFAULT_AUTHORITY_ADDRESS, hex encoded
pub const DEFAULT_AUTHORITY_BYTES_HEX: &str = "8f76fd501bb68ef71f4e276bc28f29bce1003b0c";
/// Use this address in a circumstance that is testing a user executing or withdrawing
pub const DEFAULT_SENDER_ADDRESS: &str = "init1pgm8hyk0pvphmlvfjc8wsvk4daluz5tg444vk6";
/// Use this address as the receiver of funds or privileges
pub const DEFAULT_RECIPIENT_ADDRESS: &str = "init1vewsdxxmeraett7ztsaym88jsrv85kzmf0kpm2";
/// The canonical identity behind DEFAULT_RECIPIENT_ADDRESS, hex encoded
pub const DEFAULT_RECIPIENT_BYTES_HEX: &str = "665d0698dbc8fb95afc25c3a4d9cf280d87a585b";
/// The base layer account that makes deposits
pub const DEFAULT_DEPOSITOR_ADDRESS: &str = "init1wkzh53vfnxzmunzdjs0fpd4njmtvj2jvycg55y";
/// The account permitted to relay bridge events
pub const DEFAULT_BRIDGE_EXECUTOR_ADDRESS: &str = "init137ap8k4hr4hamz5mnkclqm5px9wlhltfuhxdkd";
/// Use this address in a circumstance that is testing the validator set
pub const DEFAULT_VALIDATOR_ADDRESS: &str = "initvaloper1lq40xgtqh3f3zt9prz4m74l6dlk506ussajlr5";
/// The identity of DEFAULT_VALIDATOR_ADDRESS, encoded in the account namespace instead
pub const VALIDATOR_BYTES_AS_ACCOUNT_ADDRESS: &str = "init1lq40xgtqh3f3zt9prz4m74l6dlk506usyctxdy";
/// The identity of DEFAULT_AUTHORITY_ADDRESS, encoded with a prefix from another chain
pub const FOREIGN_CHAIN_ADDRESS: &str = "cosmos13am065qmk680w86wya4u9refhnssqwcvqn6c3c";
/// This is the default denom used by every amount in the test suite
pub const DEFAULT_DENOM: &str = "uinit";
/// This is the default amount moved by the messages in the test suite
pub const DEFAULT_AMOUNT: u128 = 100;
/// The default name given to a new validator
pub const DEFAULT_MONIKER: &str = "test-validator";
/// The default base layer deposit sequence
pub const DEFAULT_DEPOSIT_SEQUENCE: u64 = 1;
