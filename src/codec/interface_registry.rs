use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::ContractError;
use crate::core::msg::SdkMsg;
use crate::core::types::any::{Any, TypeUrl};
use crate::core::types::pub_key::{PubKey, ED25519_PUB_KEY_TYPE_URL, SECP256K1_PUB_KEY_TYPE_URL};
use crate::msgs::add_validator::MsgAddValidator;
use crate::msgs::execute_messages::MsgExecuteMessages;
use crate::msgs::finalize_token_deposit::MsgFinalizeTokenDeposit;
use crate::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
use crate::msgs::remove_validator::MsgRemoveValidator;
use crate::msgs::spend_fee_pool::MsgSpendFeePool;
use crate::msgs::update_params::MsgUpdateParams;
use crate::msgs::whitelist::MsgWhitelist;
use crate::util::aliases::ContractResult;

pub const MSG_INTERFACE_NAME: &str = "sdk.Msg";
pub const PUB_KEY_INTERFACE_NAME: &str = "cryptotypes.PubKey";

/// Turns the raw bytes of an [Any](crate::core::types::any::Any) into a concrete value.
pub type Decoder<V> = fn(&[u8]) -> ContractResult<V>;

/// Maps type urls to the decoders of a single interface.
pub struct InterfaceTable<V> {
    interface: &'static str,
    decoders: BTreeMap<String, Decoder<V>>,
}
impl<V> InterfaceTable<V> {
    pub fn new(interface: &'static str) -> Self {
        Self {
            interface,
            decoders: BTreeMap::new(),
        }
    }

    pub fn interface(&self) -> &'static str {
        self.interface
    }

    pub fn register<S: Into<String>>(&mut self, type_url: S, decoder: Decoder<V>) {
        self.decoders.insert(type_url.into(), decoder);
    }

    pub fn is_registered(&self, type_url: &str) -> bool {
        self.decoders.contains_key(type_url)
    }

    pub fn type_urls(&self) -> Vec<&str> {
        self.decoders.keys().map(|k| k.as_str()).collect()
    }

    /// Resolves the payload, failing with [UnregisteredType](crate::core::error::ContractError::UnregisteredType)
    /// when no decoder exists for its type url.  Decoding failures are returned as produced by the
    /// decoder.
    pub fn unpack(&self, any: &Any) -> ContractResult<V> {
        let decoder =
            self.decoders
                .get(&any.type_url)
                .ok_or_else(|| ContractError::UnregisteredType {
                    type_url: any.type_url.clone(),
                    interface: self.interface.to_string(),
                })?;
        decoder(any.value.as_slice())
    }
}
impl<V> Debug for InterfaceTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceTable")
            .field("interface", &self.interface)
            .field("type_urls", &self.type_urls())
            .finish()
    }
}

/// Implemented by each interface the registry can resolve payloads into.
pub trait Unpackable: Sized {
    fn table(registry: &InterfaceRegistry) -> &InterfaceTable<Self>;
}
impl Unpackable for Box<dyn SdkMsg> {
    fn table(registry: &InterfaceRegistry) -> &InterfaceTable<Self> {
        &registry.msgs
    }
}
impl Unpackable for PubKey {
    fn table(registry: &InterfaceRegistry) -> &InterfaceTable<Self> {
        &registry.pub_keys
    }
}

/// The explicit registry of every payload type that may be unpacked.  A registry is populated
/// once and then only read, so a shared reference can be handed to any number of concurrent
/// validations.
#[derive(Debug)]
pub struct InterfaceRegistry {
    msgs: InterfaceTable<Box<dyn SdkMsg>>,
    pub_keys: InterfaceTable<PubKey>,
}
impl InterfaceRegistry {
    /// Creates a registry with nothing registered.
    pub fn new() -> Self {
        Self {
            msgs: InterfaceTable::new(MSG_INTERFACE_NAME),
            pub_keys: InterfaceTable::new(PUB_KEY_INTERFACE_NAME),
        }
    }

    /// Creates a registry containing both supported public key types and every opchild message.
    pub fn with_opchild_types() -> Self {
        let mut registry = Self::new();
        registry
            .register_pub_key(ED25519_PUB_KEY_TYPE_URL, PubKey::decode_ed25519)
            .register_pub_key(SECP256K1_PUB_KEY_TYPE_URL, PubKey::decode_secp256k1)
            .register_msg::<MsgExecuteMessages>()
            .register_msg::<MsgAddValidator>()
            .register_msg::<MsgRemoveValidator>()
            .register_msg::<MsgUpdateParams>()
            .register_msg::<MsgWhitelist>()
            .register_msg::<MsgSpendFeePool>()
            .register_msg::<MsgInitiateTokenWithdrawal>()
            .register_msg::<MsgFinalizeTokenDeposit>();
        registry
    }

    /// Registers a message type under its [TypeUrl](crate::core::types::any::TypeUrl), decoding
    /// its payload from json.
    pub fn register_msg<T>(&mut self) -> &mut Self
    where
        T: TypeUrl + Serialize + DeserializeOwned + Debug + 'static,
    {
        self.msgs.register(T::TYPE_URL, decode_msg::<T>);
        self
    }

    pub fn register_pub_key<S: Into<String>>(
        &mut self,
        type_url: S,
        decoder: Decoder<PubKey>,
    ) -> &mut Self {
        self.pub_keys.register(type_url, decoder);
        self
    }

    pub fn msgs(&self) -> &InterfaceTable<Box<dyn SdkMsg>> {
        &self.msgs
    }

    pub fn pub_keys(&self) -> &InterfaceTable<PubKey> {
        &self.pub_keys
    }

    /// Resolves a payload into the interface requested by the caller.
    ///
    /// # Parameters
    ///
    /// * `any` The payload to resolve.
    ///
    /// # Examples
    /// ```
    /// use opchild_admission::codec::interface_registry::InterfaceRegistry;
    /// use opchild_admission::core::types::pub_key::PubKey;
    ///
    /// let registry = InterfaceRegistry::with_opchild_types();
    /// let any = PubKey::ed25519(vec![1u8; 32]).to_any().unwrap();
    /// let key = registry.unpack::<PubKey>(&any).expect("ed25519 keys are registered");
    /// assert_eq!(PubKey::ed25519(vec![1u8; 32]), key);
    /// ```
    pub fn unpack<V: Unpackable>(&self, any: &Any) -> ContractResult<V> {
        V::table(self).unpack(any)
    }
}
impl Default for InterfaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A process-wide registry holding every opchild type, built on first use and read-only after.
pub fn default_registry() -> &'static InterfaceRegistry {
    static DEFAULT_REGISTRY: Lazy<InterfaceRegistry> =
        Lazy::new(InterfaceRegistry::with_opchild_types);
    &DEFAULT_REGISTRY
}

fn decode_msg<T>(bytes: &[u8]) -> ContractResult<Box<dyn SdkMsg>>
where
    T: TypeUrl + Serialize + DeserializeOwned + Debug + 'static,
{
    serde_json_wasm::from_slice::<T>(bytes)
        .map(|msg| Box::new(msg) as Box<dyn SdkMsg>)
        .map_err(|e| ContractError::MalformedPayload {
            type_url: T::TYPE_URL.to_string(),
            explanation: format!("failed to decode message: {}", e),
        })
}
