use cosmwasm_std::Binary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::types::any::Any;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

pub const ED25519_PUB_KEY_TYPE_URL: &str = "/cosmos.crypto.ed25519.PubKey";
pub const SECP256K1_PUB_KEY_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";
pub const ED25519_PUB_KEY_SIZE: usize = 32;
/// Secp256k1 keys are always carried in their compressed form
pub const SECP256K1_PUB_KEY_SIZE: usize = 33;

/// A validator consensus public key, as resolved from an [Any](super::any::Any) payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PubKey {
    Ed25519(Binary),
    Secp256k1(Binary),
}
impl PubKey {
    pub fn ed25519<B: Into<Binary>>(key: B) -> Self {
        Self::Ed25519(key.into())
    }

    pub fn secp256k1<B: Into<Binary>>(key: B) -> Self {
        Self::Secp256k1(key.into())
    }

    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Ed25519(_) => ED25519_PUB_KEY_TYPE_URL,
            Self::Secp256k1(_) => SECP256K1_PUB_KEY_TYPE_URL,
        }
    }

    pub fn key_bytes(&self) -> &Binary {
        match self {
            Self::Ed25519(key) | Self::Secp256k1(key) => key,
        }
    }

    /// Packs the key into its wire payload: `{"key": "<base64>"}` tagged with the key's type url.
    pub fn to_any(&self) -> ContractResult<Any> {
        Any::pack_with_type_url(
            self.type_url(),
            &PubKeyPayload {
                key: self.key_bytes().clone(),
            },
        )
    }

    pub fn decode_ed25519(bytes: &[u8]) -> ContractResult<Self> {
        decode_sized_key(bytes, ED25519_PUB_KEY_TYPE_URL, ED25519_PUB_KEY_SIZE).map(Self::Ed25519)
    }

    pub fn decode_secp256k1(bytes: &[u8]) -> ContractResult<Self> {
        decode_sized_key(bytes, SECP256K1_PUB_KEY_TYPE_URL, SECP256K1_PUB_KEY_SIZE)
            .map(Self::Secp256k1)
    }
}

#[derive(Serialize, Deserialize)]
struct PubKeyPayload {
    key: Binary,
}

fn decode_sized_key(bytes: &[u8], type_url: &str, expected_size: usize) -> ContractResult<Binary> {
    let payload: PubKeyPayload =
        serde_json_wasm::from_slice(bytes).map_err(|e| ContractError::MalformedPayload {
            type_url: type_url.to_string(),
            explanation: format!("failed to decode public key: {}", e),
        })?;
    if payload.key.len() != expected_size {
        return ContractError::MalformedPayload {
            type_url: type_url.to_string(),
            explanation: format!(
                "expected a public key of {} bytes, but got {}",
                expected_size,
                payload.key.len(),
            ),
        }
        .to_err();
    }
    payload.key.to_ok()
}
