//! The hook trait concrete resolver variants implement.
//!
//! The engine owns the guard and accounting logic; variants only decide
//! approve or reject per event, and may keep whatever internal state they
//! choose (counters, allowlists, fee tallies).

use attest_registry_core::{AttestationRecord, ModuleRecord};

/// Type-specific validation hooks.
///
/// Each hook receives the payload by reference and the value attached to
/// that invocation, and returns an approve/reject verdict. Hooks take
/// `&mut self` so variants can accumulate state across calls; the engine
/// never rolls that state back (see the batch short-circuit notes on
/// [`crate::ResolverEngine::multi_attest`]).
pub trait ResolverHooks: Send {
    /// Called for every attestation referencing this resolver.
    fn on_attest(&mut self, attestation: &AttestationRecord, value: u64) -> bool;

    /// Called for every revocation referencing this resolver.
    fn on_revoke(&mut self, attestation: &AttestationRecord, value: u64) -> bool;

    /// Called for every module registration referencing this resolver.
    fn on_module_registration(&mut self, module: &ModuleRecord, value: u64) -> bool;

    /// Whether this variant accepts attached value. Defaults to false;
    /// non-payable resolvers reject direct transfers outside the structured
    /// callback paths.
    fn is_payable(&self) -> bool {
        false
    }
}
