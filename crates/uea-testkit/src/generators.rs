//! Proptest generators for property-based testing.

use proptest::prelude::*;

use uea_core::{AccAddress, AddressCodec, Bech32Codec, MsgDeployUea, UniversalAccountId};

/// Generate a CAIP-2 namespace.
pub fn namespace() -> impl Strategy<Value = String> {
    "[-a-z0-9]{3,8}".prop_map(String::from)
}

/// Generate a CAIP-2 reference.
pub fn reference() -> impl Strategy<Value = String> {
    "[-_a-zA-Z0-9]{1,32}".prop_map(String::from)
}

/// Generate a well-formed `namespace:reference` chain.
pub fn chain() -> impl Strategy<Value = String> {
    (namespace(), reference()).prop_map(|(ns, r)| format!("{ns}:{r}"))
}

/// Generate a chain with no separator, or with an empty namespace or reference.
pub fn malformed_chain() -> impl Strategy<Value = String> {
    prop_oneof![
        "[^:]{0,24}".prop_map(String::from),
        reference().prop_map(|r| format!(":{r}")),
        namespace().prop_map(|ns| format!("{ns}:")),
    ]
}

/// Generate a well-formed 0x-prefixed hex owner.
pub fn owner() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 1..=32).prop_map(|bytes| format!("0x{}", hex::encode(bytes)))
}

/// Generate an owner that fails the hex rule.
pub fn malformed_owner() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9a-f]{2,40}".prop_map(String::from),
        Just("0x".to_string()),
        "0x[g-z]{1,20}".prop_map(String::from),
        "0x[0-9a-f]([0-9a-f]{2}){0,10}".prop_map(String::from),
    ]
}

/// Generate a non-empty proof hash. Its format is not checked.
pub fn tx_hash() -> impl Strategy<Value = String> {
    ".{1,80}".prop_map(String::from)
}

/// Generate raw signer bytes, up to module-account size.
pub fn address_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=32)
}

/// Generate a signer that decodes under the default prefix.
pub fn signer() -> impl Strategy<Value = String> {
    address_bytes().prop_map(|bytes| {
        let addr = AccAddress::from_bytes(bytes).expect("length within bounds");
        Bech32Codec::default()
            .encode(&addr)
            .expect("default prefix always encodes")
    })
}

/// Generate a signer that can never decode: bech32 requires a `1` separator.
pub fn invalid_signer() -> impl Strategy<Value = String> {
    "[a-z_]{0,30}".prop_map(String::from)
}

/// Parameters for generating a valid deployment request.
#[derive(Debug, Clone)]
pub struct DeployParams {
    pub signer: String,
    pub chain: String,
    pub owner: String,
    pub tx_hash: String,
}

impl DeployParams {
    pub fn account(&self) -> UniversalAccountId {
        UniversalAccountId::new(self.chain.clone(), self.owner.clone())
    }

    pub fn to_msg(&self) -> MsgDeployUea {
        MsgDeployUea::new(self.signer.clone(), self.account(), self.tx_hash.clone())
    }
}

impl Arbitrary for DeployParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (signer(), chain(), owner(), tx_hash())
            .prop_map(|(signer, chain, owner, tx_hash)| DeployParams {
                signer,
                chain,
                owner,
                tx_hash,
            })
            .boxed()
    }
}
