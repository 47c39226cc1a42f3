//! The resolver engine: guarded dispatch shared by every resolver variant.

use attest_registry_core::{Address, AttestationRecord, ModuleRecord};

use crate::error::{ResolverError, Result};
use crate::hooks::ResolverHooks;
use crate::interface::InterfaceId;

/// The shared guard/dispatch layer wrapping a variant's hooks.
///
/// Construction pins the one registry principal allowed to invoke the entry
/// points; it is immutable thereafter and is the engine's only state. Every
/// call is a self-contained dispatch: caller check, value accounting, hook.
pub struct ResolverEngine<H: ResolverHooks> {
    /// The designated registry principal. Set once, never changed.
    registry: Address,

    /// The variant's type-specific validation hooks.
    hooks: H,
}

impl<H: ResolverHooks> ResolverEngine<H> {
    /// Create a new engine bound to the given registry principal.
    ///
    /// Fails with `InvalidResolver` if the principal is the zero address.
    pub fn new(registry: Address, hooks: H) -> Result<Self> {
        if registry.is_zero() {
            return Err(ResolverError::InvalidResolver(
                "registry principal is the zero address".into(),
            ));
        }
        Ok(Self { registry, hooks })
    }

    /// The registry principal this engine accepts calls from.
    pub fn registry(&self) -> &Address {
        &self.registry
    }

    /// Borrow the variant's hooks (e.g. to inspect accumulated state).
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Whether the variant accepts attached value.
    pub fn is_payable(&self) -> bool {
        self.hooks.is_payable()
    }

    /// Capability probe. The engine implements every entry point of the
    /// closed set, so any known identifier reports true; feature detection
    /// for unknown identifiers happens at [`InterfaceId::from_u32`].
    pub fn supports_interface(&self, _id: InterfaceId) -> bool {
        true
    }

    /// A direct value transfer outside the structured callback paths.
    ///
    /// Fails with `NotPayable` unless the variant opts into value.
    pub fn receive(&self, value: u64) -> Result<()> {
        if value > 0 && !self.is_payable() {
            return Err(ResolverError::NotPayable);
        }
        Ok(())
    }

    /// Single attestation callback: forwards the payload and the full
    /// attached value, returns the hook's verdict verbatim.
    pub fn attest(
        &mut self,
        caller: &Address,
        attestation: &AttestationRecord,
        value: u64,
    ) -> Result<bool> {
        self.require_registry(caller)?;
        Ok(self.hooks.on_attest(attestation, value))
    }

    /// Single revocation callback.
    pub fn revoke(
        &mut self,
        caller: &Address,
        attestation: &AttestationRecord,
        value: u64,
    ) -> Result<bool> {
        self.require_registry(caller)?;
        Ok(self.hooks.on_revoke(attestation, value))
    }

    /// Module registration callback.
    pub fn module_registration(
        &mut self,
        caller: &Address,
        module: &ModuleRecord,
        value: u64,
    ) -> Result<bool> {
        self.require_registry(caller)?;
        Ok(self.hooks.on_module_registration(module, value))
    }

    /// Batched attestation callback with value conservation.
    ///
    /// `values[i]` is the value declared for `attestations[i]`; `total_value`
    /// is what the batch call actually carries. Items are processed in
    /// order against a running budget:
    ///
    /// - a declared value above the remaining budget fails the whole call
    ///   with `InsufficientValue` before that item's hook runs;
    /// - a hook rejection returns `Ok(false)` immediately — earlier items'
    ///   hook side effects stand (short-circuit, not rollback);
    /// - otherwise the budget shrinks by the declared value.
    ///
    /// Returns `Ok(true)` only if every item was approved.
    pub fn multi_attest(
        &mut self,
        caller: &Address,
        attestations: &[AttestationRecord],
        values: &[u64],
        total_value: u64,
    ) -> Result<bool> {
        self.require_registry(caller)?;
        self.run_batch(attestations, values, total_value, |hooks, record, value| {
            hooks.on_attest(record, value)
        })
    }

    /// Batched revocation callback. Same budget semantics as
    /// [`multi_attest`](Self::multi_attest).
    pub fn multi_revoke(
        &mut self,
        caller: &Address,
        attestations: &[AttestationRecord],
        values: &[u64],
        total_value: u64,
    ) -> Result<bool> {
        self.require_registry(caller)?;
        self.run_batch(attestations, values, total_value, |hooks, record, value| {
            hooks.on_revoke(record, value)
        })
    }

    /// The shared batch loop.
    fn run_batch(
        &mut self,
        records: &[AttestationRecord],
        values: &[u64],
        total_value: u64,
        mut invoke: impl FnMut(&mut H, &AttestationRecord, u64) -> bool,
    ) -> Result<bool> {
        if records.len() != values.len() {
            return Err(ResolverError::BatchLengthMismatch {
                records: records.len(),
                values: values.len(),
            });
        }

        let mut remaining = total_value;
        for (record, &value) in records.iter().zip(values) {
            if value > remaining {
                return Err(ResolverError::InsufficientValue {
                    declared: value,
                    remaining,
                });
            }

            if !invoke(&mut self.hooks, record, value) {
                return Ok(false);
            }

            remaining -= value;
        }

        Ok(true)
    }

    fn require_registry(&self, caller: &Address) -> Result<()> {
        if caller != &self.registry {
            return Err(ResolverError::AccessDenied { caller: *caller });
        }
        Ok(())
    }
}
