use cosmwasm_std::Binary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

/// Implemented by every value that can be packed into an [Any](self::Any).  The type url is the
/// tag that an [InterfaceRegistry](crate::codec::interface_registry::InterfaceRegistry) uses to
/// locate the decoder for the payload.
pub trait TypeUrl {
    const TYPE_URL: &'static str;
}

/// A type-tagged opaque payload.  The bytes are only interpreted once the payload is unpacked
/// through a registry, so a packed value may still fail to unpack later on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Any {
    /// Identifies the concrete type serialized into the value bytes.
    pub type_url: String,
    /// The serialized (json) form of the concrete value.
    pub value: Binary,
}
impl Any {
    pub fn new<S: Into<String>>(type_url: S, value: Binary) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }

    /// Serializes the given value and tags it with its type url.
    ///
    /// # Parameters
    ///
    /// * `value` Any serializable value with a registered-style type url.
    pub fn pack<T: TypeUrl + Serialize>(value: &T) -> ContractResult<Self> {
        Self::pack_with_type_url(T::TYPE_URL, value)
    }

    /// Serializes the given value under an explicitly provided type url.  Used for values whose
    /// type url depends on their runtime variant, like [PubKey](super::pub_key::PubKey).
    pub fn pack_with_type_url<T: Serialize + ?Sized>(
        type_url: &str,
        value: &T,
    ) -> ContractResult<Self> {
        if type_url.is_empty() {
            return ContractError::MalformedPayload {
                type_url: String::new(),
                explanation: "type url must not be blank".to_string(),
            }
            .to_err();
        }
        let bytes = serde_json_wasm::to_vec(value).map_err(|e| ContractError::MalformedPayload {
            type_url: type_url.to_string(),
            explanation: format!("failed to encode value: {}", e),
        })?;
        Self::new(type_url, Binary::from(bytes)).to_ok()
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use crate::core::error::ContractError;
    use crate::core::types::any::{Any, TypeUrl};

    #[derive(Serialize)]
    struct Ping {
        nonce: u64,
    }
    impl TypeUrl for Ping {
        const TYPE_URL: &'static str = "/test.v1.Ping";
    }

    #[test]
    fn test_pack_tags_and_encodes_value() {
        let any = Any::pack(&Ping { nonce: 7 }).expect("packing should succeed");
        assert_eq!("/test.v1.Ping", any.type_url, "the type url should be taken from the type");
        assert_eq!(
            b"{\"nonce\":7}".as_slice(),
            any.value.as_slice(),
            "the value should be the json encoding of the packed type",
        );
    }

    #[test]
    fn test_pack_with_blank_type_url_fails() {
        let error = Any::pack_with_type_url("", &Ping { nonce: 1 }).unwrap_err();
        assert!(
            matches!(error, ContractError::MalformedPayload { .. }),
            "a blank type url should produce a malformed payload error, but got: {:?}",
            error,
        );
    }
}
