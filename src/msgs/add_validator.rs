use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::codec::interface_registry::InterfaceRegistry;
use crate::core::error::ContractError;
use crate::core::msg::{UnpackInterfaces, Validatable};
use crate::core::types::address::{AccountAddress, ValidatorAddress};
use crate::core::types::any::{Any, TypeUrl};
use crate::core::types::pub_key::PubKey;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_address::validate_address_field;

/// Adds a validator to the child chain validator set.  Only the module authority may submit it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgAddValidator {
    /// A human-readable name for the validator.
    pub moniker: String,
    pub authority: AccountAddress,
    pub validator_address: ValidatorAddress,
    /// The consensus public key of the validator, packed.
    pub pubkey: Option<Any>,
}
impl MsgAddValidator {
    /// Constructs a new instance of this struct, packing the public key when one is provided.
    ///
    /// # Parameters
    ///
    /// * `moniker` A human-readable name for the validator.
    /// * `authority` The module authority submitting the message.
    /// * `validator_address` The operator address of the new validator.
    /// * `pub_key` The consensus public key of the validator.  A missing key is accepted here and
    /// rejected by [validate](crate::core::msg::Validatable::validate).
    pub fn new<S: Into<String>, A: Into<AccountAddress>, V: Into<ValidatorAddress>>(
        moniker: S,
        authority: A,
        validator_address: V,
        pub_key: Option<&PubKey>,
    ) -> ContractResult<Self> {
        Self {
            moniker: moniker.into(),
            authority: authority.into(),
            validator_address: validator_address.into(),
            pubkey: pub_key.map(|key| key.to_any()).transpose()?,
        }
        .to_ok()
    }

    /// Resolves the packed public key through the registry.
    pub fn get_pub_key(&self, registry: &InterfaceRegistry) -> ContractResult<PubKey> {
        match &self.pubkey {
            Some(any) => registry.unpack::<PubKey>(any),
            None => ContractError::EmptyPubKey.to_err(),
        }
    }
}
impl TypeUrl for MsgAddValidator {
    const TYPE_URL: &'static str = "/opinit.opchild.v1.MsgAddValidator";
}
impl Validatable for MsgAddValidator {
    fn validate(&self, ac: &AccountCodec, vc: &ValidatorCodec) -> ContractResult<()> {
        // note that decoding from bech32 ensures both non-empty and valid
        validate_address_field(ac, &self.authority, "authority")?;
        validate_address_field(vc, &self.validator_address, "validator")?;
        if self.pubkey.is_none() {
            return ContractError::EmptyPubKey.to_err();
        }
        Ok(())
    }
}
impl UnpackInterfaces for MsgAddValidator {
    fn unpack_interfaces(&self, registry: &InterfaceRegistry) -> ContractResult<()> {
        self.get_pub_key(registry).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Binary;

    use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
    use crate::codec::interface_registry::default_registry;
    use crate::core::error::ContractError;
    use crate::core::msg::{UnpackInterfaces, Validatable};
    use crate::core::types::any::Any;
    use crate::core::types::pub_key::{PubKey, SECP256K1_PUB_KEY_TYPE_URL};
    use crate::msgs::add_validator::MsgAddValidator;
    use crate::testutil::test_constants::{
        DEFAULT_AUTHORITY_ADDRESS, DEFAULT_MONIKER, DEFAULT_VALIDATOR_ADDRESS,
        VALIDATOR_BYTES_AS_ACCOUNT_ADDRESS,
    };
    use crate::testutil::test_utilities::{get_default_pub_key, get_valid_add_validator};

    #[test]
    fn test_valid_add_validator() {
        let msg = get_valid_add_validator();
        msg.validate(&AccountCodec::default(), &ValidatorCodec::default())
            .expect("a well-formed add validator message should pass validation");
        msg.unpack_interfaces(default_registry())
            .expect("the packed ed25519 key should unpack");
        assert_eq!(
            get_default_pub_key(),
            msg.get_pub_key(default_registry())
                .expect("the public key should resolve"),
            "the resolved key should match the key provided to the constructor",
        );
    }

    #[test]
    fn test_missing_pub_key_is_rejected() {
        let msg = MsgAddValidator::new(
            DEFAULT_MONIKER,
            DEFAULT_AUTHORITY_ADDRESS,
            DEFAULT_VALIDATOR_ADDRESS,
            None,
        )
        .expect("constructing without a key should succeed");
        let error = msg
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        assert_eq!(
            ContractError::EmptyPubKey,
            error,
            "a missing public key should produce an empty pub key error",
        );
    }

    #[test]
    fn test_validator_address_requires_validator_namespace() {
        let msg = MsgAddValidator::new(
            DEFAULT_MONIKER,
            DEFAULT_AUTHORITY_ADDRESS,
            // Same identity as the default validator, but encoded with the account prefix
            VALIDATOR_BYTES_AS_ACCOUNT_ADDRESS,
            Some(&get_default_pub_key()),
        )
        .expect("constructing should succeed");
        let error = msg
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        match error {
            ContractError::InvalidAddress { explanation, .. } => assert!(
                explanation.starts_with("invalid validator address"),
                "expected the explanation to name the validator field, but got: {}",
                explanation,
            ),
            _ => panic!("unexpected error encountered: {:?}", error),
        }
    }

    #[test]
    fn test_authority_is_checked_first() {
        let msg = MsgAddValidator::new(DEFAULT_MONIKER, "", "", None)
            .expect("constructing should succeed");
        let error = msg
            .validate(&AccountCodec::default(), &ValidatorCodec::default())
            .unwrap_err();
        match error {
            ContractError::InvalidAddress { explanation, .. } => assert!(
                explanation.starts_with("invalid authority address"),
                "expected the authority to fail before the other checks, but got: {}",
                explanation,
            ),
            _ => panic!("unexpected error encountered: {:?}", error),
        }
    }

    #[test]
    fn test_unpack_rejects_wrong_size_key() {
        let msg = MsgAddValidator {
            pubkey: Some(Any::new(
                SECP256K1_PUB_KEY_TYPE_URL,
                Binary::from(br#"{"key":"AQID"}"#.to_vec()),
            )),
            ..get_valid_add_validator()
        };
        msg.validate(&AccountCodec::default(), &ValidatorCodec::default())
            .expect("validation only checks for the presence of the key");
        let error = msg.unpack_interfaces(default_registry()).unwrap_err();
        assert!(
            matches!(error, ContractError::MalformedPayload { .. }),
            "a three byte secp256k1 key should be malformed, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_unpack_rejects_unregistered_key_type() {
        let msg = MsgAddValidator {
            pubkey: Some(Any::new(
                "/cosmos.crypto.bls12_381.PubKey",
                PubKey::ed25519(vec![1u8; 32])
                    .to_any()
                    .expect("packing should succeed")
                    .value,
            )),
            ..get_valid_add_validator()
        };
        let error = msg.unpack_interfaces(default_registry()).unwrap_err();
        assert!(
            matches!(error, ContractError::UnregisteredType { .. }),
            "an unknown key type should be unregistered, but got: {:?}",
            error,
        );
    }
}
