use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
use crate::codec::interface_registry::{default_registry, InterfaceRegistry};
use crate::core::msg::{OpChildMsg, UnpackInterfaces, Validatable};
use crate::util::aliases::ContractResult;

/// Everything the admission gate reads while checking a message.  Holds references only, so a
/// single set of codecs and a single registry can serve every call.
#[derive(Clone, Copy, Debug)]
pub struct AdmissionDeps<'a> {
    pub ac: &'a AccountCodec,
    pub vc: &'a ValidatorCodec,
    pub registry: &'a InterfaceRegistry,
}
impl<'a> AdmissionDeps<'a> {
    pub fn new(
        ac: &'a AccountCodec,
        vc: &'a ValidatorCodec,
        registry: &'a InterfaceRegistry,
    ) -> Self {
        Self { ac, vc, registry }
    }

    /// Pairs the provided codecs with the process-wide [default_registry](crate::codec::interface_registry::default_registry).
    pub fn with_default_registry(ac: &'a AccountCodec, vc: &'a ValidatorCodec) -> Self {
        Self::new(ac, vc, default_registry())
    }
}

/// Ensures that an incoming message is fit to be handed to the keeper.  Stateless checks run
/// first, after which every embedded payload is resolved through the registry.  The first
/// failure encountered is returned.
///
/// # Parameters
///
/// * `msg` The message to admit.
/// * `deps` The codecs and registry to check the message against.
pub fn validate_msg(msg: &OpChildMsg, deps: &AdmissionDeps) -> ContractResult<()> {
    msg.validate(deps.ac, deps.vc)?;
    msg.unpack_interfaces(deps.registry)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use crate::codec::address_codec::{AccountCodec, ValidatorCodec};
    use crate::codec::interface_registry::InterfaceRegistry;
    use crate::core::error::ContractError;
    use crate::core::msg::OpChildMsg;
    use crate::msgs::add_validator::MsgAddValidator;
    use crate::msgs::execute_messages::MsgExecuteMessages;
    use crate::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
    use crate::testutil::test_constants::{DEFAULT_DENOM, DEFAULT_SENDER_ADDRESS};
    use crate::testutil::test_utilities::{
        get_valid_add_validator, get_valid_initiate_token_withdrawal, get_valid_msgs,
        get_valid_remove_validator, TestDeps,
    };
    use crate::validation::validate_msg::{validate_msg, AdmissionDeps};

    #[test]
    fn test_every_valid_msg_is_admitted() {
        let deps = TestDeps::new();
        for msg in get_valid_msgs() {
            validate_msg(&msg, &deps.admission()).unwrap_or_else(|e| {
                panic!(
                    "expected message [{}] to be admitted, but got: {:?}",
                    msg.msg_type(),
                    e
                )
            });
        }
    }

    #[test]
    fn test_validation_errors_precede_unpacking() {
        let deps = TestDeps::new();
        // Both the authority and the missing key are invalid, but the authority is checked first
        let msg: OpChildMsg = MsgAddValidator {
            authority: "".into(),
            pubkey: None,
            ..get_valid_add_validator()
        }
        .into();
        let error = validate_msg(&msg, &deps.admission()).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidAddress { .. }),
            "expected the authority to be rejected first, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_registry_is_consulted_for_batches() {
        let ac = AccountCodec::default();
        let vc = ValidatorCodec::default();
        let empty_registry = InterfaceRegistry::new();
        let deps = AdmissionDeps::new(&ac, &vc, &empty_registry);
        let remove = get_valid_remove_validator();
        let msg: OpChildMsg = MsgExecuteMessages::new(DEFAULT_SENDER_ADDRESS, &[&remove])
            .expect("packing should succeed")
            .into();
        let error = validate_msg(&msg, &deps).unwrap_err();
        assert!(
            matches!(error, ContractError::UnregisteredType { .. }),
            "an empty registry should not resolve the sub-message, but got: {:?}",
            error,
        );
        validate_msg(&msg, &AdmissionDeps::with_default_registry(&ac, &vc))
            .expect("the default registry should resolve the sub-message");
    }

    #[test]
    fn test_custom_prefixes_are_honored() {
        let ac = AccountCodec::new("cosmos");
        let vc = ValidatorCodec::new("cosmosvaloper");
        let deps = AdmissionDeps::with_default_registry(&ac, &vc);
        let msg: OpChildMsg = MsgInitiateTokenWithdrawal {
            amount: coin(10, DEFAULT_DENOM),
            ..get_valid_initiate_token_withdrawal()
        }
        .into();
        let error = validate_msg(&msg, &deps).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidAddress { .. }),
            "addresses from the default namespace should be rejected by a cosmos codec, but got: {:?}",
            error,
        );
    }
}
