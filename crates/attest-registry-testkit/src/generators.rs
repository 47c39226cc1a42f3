//! Proptest generators for property-based testing.

use bytes::Bytes;
use proptest::prelude::*;

use attest_registry_core::{Address, AttestationRecord, ResolverUid, SchemaUid};

/// Generate a random Address.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 32]>().prop_map(Address::from_bytes)
}

/// Generate a random non-zero Address.
pub fn nonzero_address() -> impl Strategy<Value = Address> {
    address().prop_filter("zero address", |a| !a.is_zero())
}

/// Generate a random SchemaUid.
pub fn schema_uid() -> impl Strategy<Value = SchemaUid> {
    any::<[u8; 32]>().prop_map(SchemaUid::from_bytes)
}

/// Generate a random ResolverUid.
pub fn resolver_uid() -> impl Strategy<Value = ResolverUid> {
    any::<[u8; 32]>().prop_map(ResolverUid::from_bytes)
}

/// Generate a schema text.
pub fn schema_text() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 ]{0,63}".prop_map(String::from)
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Generate a batch of declared values for multi-item callbacks.
pub fn batch_values(max_items: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..10_000, 0..=max_items)
}

/// Parameters for generating an attestation.
#[derive(Debug, Clone)]
pub struct AttestationParams {
    pub schema_text: String,
    pub validator: Option<Address>,
    pub attester: Address,
    pub recipient: Address,
    pub time: i64,
    pub expiration: i64,
    pub revocable: bool,
    pub data: Vec<u8>,
}

impl Arbitrary for AttestationParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            schema_text(),
            prop::option::of(address()),
            address(),
            address(),
            0i64..=1_700_000_000_000i64,
            0i64..=1_700_000_000_000i64,
            any::<bool>(),
            payload(256),
        )
            .prop_map(
                |(schema_text, validator, attester, recipient, time, expiration, revocable, data)| {
                    AttestationParams {
                        schema_text,
                        validator,
                        attester,
                        recipient,
                        time,
                        expiration,
                        revocable,
                        data,
                    }
                },
            )
            .boxed()
    }
}

/// Generate an attestation from parameters.
pub fn attestation_from_params(params: &AttestationParams) -> AttestationRecord {
    AttestationRecord {
        schema: SchemaUid::derive(&params.schema_text, params.validator.as_ref()),
        attester: params.attester,
        recipient: params.recipient,
        time: params.time,
        expiration: params.expiration,
        revocable: params.revocable,
        data: Bytes::from(params.data.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_schema_uid_deterministic(text in schema_text(), validator in prop::option::of(address())) {
            let a = SchemaUid::derive(&text, validator.as_ref());
            let b = SchemaUid::derive(&text, validator.as_ref());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_schema_uid_separates_texts(
            t1 in schema_text(),
            t2 in schema_text(),
        ) {
            prop_assume!(t1 != t2);
            prop_assert_ne!(SchemaUid::derive(&t1, None), SchemaUid::derive(&t2, None));
        }

        #[test]
        fn test_validator_presence_separates_uids(text in schema_text(), validator in address()) {
            prop_assert_ne!(
                SchemaUid::derive(&text, None),
                SchemaUid::derive(&text, Some(&validator))
            );
        }

        #[test]
        fn test_resolver_uid_separates_owners(
            resolver in nonzero_address(),
            o1 in address(),
            o2 in address(),
        ) {
            prop_assume!(o1 != o2);
            prop_assert_ne!(
                ResolverUid::derive(&resolver, &o1),
                ResolverUid::derive(&resolver, &o2)
            );
        }

        #[test]
        fn test_attestation_generation_deterministic(params: AttestationParams) {
            let a = attestation_from_params(&params);
            let b = attestation_from_params(&params);
            prop_assert_eq!(a, b);
        }
    }
}
