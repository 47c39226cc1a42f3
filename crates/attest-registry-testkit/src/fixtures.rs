//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use attest_registry::Registry;
use attest_registry_core::{
    Address, AttestationRecord, ModuleRecord, ResolverUid, SchemaUid,
};
use attest_registry_resolver::ResolverHooks;
use attest_registry_store::MemoryStore;

/// A test fixture with a caller identity and an in-memory registry.
pub struct TestFixture {
    pub caller: Address,
    pub registry: Registry<MemoryStore>,
}

impl TestFixture {
    /// Create a new fixture with a random caller.
    pub fn new() -> Self {
        Self {
            caller: Address::random(),
            registry: Registry::new(MemoryStore::new()),
        }
    }

    /// Create with a deterministic caller from seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            caller: seeded_address(seed),
            registry: Registry::new(MemoryStore::new()),
        }
    }

    /// Register a schema as this fixture's caller.
    pub async fn register_schema(
        &self,
        schema: &str,
        validator: Option<Address>,
    ) -> SchemaUid {
        self.registry
            .register_schema(&self.caller, schema, validator)
            .await
            .expect("fixture schema registration failed")
    }

    /// Register a resolver as this fixture's caller.
    pub async fn register_resolver(&self, resolver: Address) -> ResolverUid {
        self.registry
            .register_resolver(&self.caller, resolver)
            .await
            .expect("fixture resolver registration failed")
    }

    /// Build an attestation against a schema, attested by this caller.
    pub fn make_attestation(&self, schema: SchemaUid, data: &[u8]) -> AttestationRecord {
        AttestationRecord {
            schema,
            attester: self.caller,
            recipient: Address::random(),
            time: now_millis(),
            expiration: 0,
            revocable: true,
            data: Bytes::copy_from_slice(data),
        }
    }

    /// Build a module registration bound to a resolver entry, sent by this
    /// caller.
    pub fn make_module(&self, resolver: ResolverUid, metadata: &[u8]) -> ModuleRecord {
        ModuleRecord {
            resolver,
            implementation: Address::random(),
            sender: self.caller,
            metadata: Bytes::copy_from_slice(metadata),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count).map(|i| TestFixture::with_seed(i as u64)).collect()
}

/// Derive a deterministic address from a numeric seed.
pub fn seeded_address(seed: u64) -> Address {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    Address::from_bytes(bytes)
}

/// Hook double that approves everything and counts invocations per kind.
#[derive(Debug, Default)]
pub struct CountingHooks {
    pub attests: usize,
    pub revokes: usize,
    pub modules: usize,
    pub payable: bool,
}

impl CountingHooks {
    /// A non-payable instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A payable instance with all counters at zero.
    pub fn payable() -> Self {
        Self {
            payable: true,
            ..Self::default()
        }
    }
}

impl ResolverHooks for CountingHooks {
    fn on_attest(&mut self, _attestation: &AttestationRecord, _value: u64) -> bool {
        self.attests += 1;
        true
    }

    fn on_revoke(&mut self, _attestation: &AttestationRecord, _value: u64) -> bool {
        self.revokes += 1;
        true
    }

    fn on_module_registration(&mut self, _module: &ModuleRecord, _value: u64) -> bool {
        self.modules += 1;
        true
    }

    fn is_payable(&self) -> bool {
        self.payable
    }
}

/// Hook double that follows a per-call verdict script and records the value
/// attached to each invocation. Calls past the end of the script approve.
#[derive(Debug)]
pub struct ScriptedHooks {
    script: Vec<bool>,
    pub calls: Vec<u64>,
    pub payable: bool,
}

impl ScriptedHooks {
    pub fn new(script: Vec<bool>) -> Self {
        Self {
            script,
            calls: Vec::new(),
            payable: false,
        }
    }

    pub fn approve_all() -> Self {
        Self::new(Vec::new())
    }

    fn verdict(&mut self, value: u64) -> bool {
        self.calls.push(value);
        self.script.get(self.calls.len() - 1).copied().unwrap_or(true)
    }
}

impl ResolverHooks for ScriptedHooks {
    fn on_attest(&mut self, _attestation: &AttestationRecord, value: u64) -> bool {
        self.verdict(value)
    }

    fn on_revoke(&mut self, _attestation: &AttestationRecord, value: u64) -> bool {
        self.verdict(value)
    }

    fn on_module_registration(&mut self, _module: &ModuleRecord, value: u64) -> bool {
        self.verdict(value)
    }

    fn is_payable(&self) -> bool {
        self.payable
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_registry_resolver::ResolverEngine;

    #[tokio::test]
    async fn test_fixture_schema_registration() {
        let fixture = TestFixture::new();
        let uid = fixture.register_schema("bool verified", None).await;

        let record = fixture
            .registry
            .get_schema(&uid)
            .await
            .unwrap()
            .expect("registered schema missing");
        assert_eq!(record.schema, "bool verified");
    }

    #[tokio::test]
    async fn test_multi_party() {
        let parties = multi_party_fixtures(3);

        // Each party has a unique caller identity.
        assert_ne!(parties[0].caller, parties[1].caller);
        assert_ne!(parties[1].caller, parties[2].caller);
        assert_ne!(parties[0].caller, parties[2].caller);
    }

    #[test]
    fn test_seeded_address_is_stable() {
        assert_eq!(seeded_address(7), seeded_address(7));
        assert_ne!(seeded_address(7), seeded_address(8));
        assert!(!seeded_address(0).is_zero());
    }

    #[test]
    fn test_counting_hooks_tally() {
        let fixture = TestFixture::with_seed(1);
        let registry_addr = seeded_address(99);
        let mut engine = ResolverEngine::new(registry_addr, CountingHooks::new()).unwrap();

        let schema = SchemaUid::derive("bool verified", None);
        let attestation = fixture.make_attestation(schema, b"\x01");

        engine.attest(&registry_addr, &attestation, 0).unwrap();
        engine.attest(&registry_addr, &attestation, 0).unwrap();
        engine.revoke(&registry_addr, &attestation, 0).unwrap();

        assert_eq!(engine.hooks().attests, 2);
        assert_eq!(engine.hooks().revokes, 1);
        assert_eq!(engine.hooks().modules, 0);
    }

    #[test]
    fn test_scripted_hooks_follow_script() {
        let registry_addr = seeded_address(99);
        let mut engine =
            ResolverEngine::new(registry_addr, ScriptedHooks::new(vec![true, false])).unwrap();

        let fixture = TestFixture::with_seed(2);
        let attestation = fixture.make_attestation(SchemaUid::derive("x", None), b"");

        assert!(engine.attest(&registry_addr, &attestation, 1).unwrap());
        assert!(!engine.attest(&registry_addr, &attestation, 2).unwrap());
        // Past the script's end, calls approve.
        assert!(engine.attest(&registry_addr, &attestation, 3).unwrap());
        assert_eq!(engine.hooks().calls, vec![1, 2, 3]);
    }
}
