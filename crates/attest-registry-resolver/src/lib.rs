//! # Attest Registry Resolver
//!
//! The resolver callback engine: the shared guard and dispatch layer every
//! concrete resolver variant builds on.
//!
//! ## Overview
//!
//! A resolver is pluggable validation logic invoked by the attestation
//! registry on every attest, revoke, and module-registration event. Concrete
//! variants implement the [`ResolverHooks`] trait; [`ResolverEngine`] wraps
//! the hooks with the behavior all variants share:
//!
//! - **Caller restriction**: only the one registry principal set at
//!   construction may invoke the entry points.
//! - **Batch value conservation**: `multi_attest`/`multi_revoke` track a
//!   running budget so the sum of per-item declared values never exceeds the
//!   value attached to the call.
//! - **Payability gate**: direct value transfers outside the structured
//!   paths fail unless the variant opts into `is_payable`.
//! - **Capability probe**: [`InterfaceId`] is the closed 4-byte identifier
//!   set callers use for feature detection.
//!
//! The engine persists nothing; each call is a self-contained guarded
//! dispatch. The only state is the immutable registry principal.

pub mod engine;
pub mod error;
pub mod hooks;
pub mod interface;

pub use engine::ResolverEngine;
pub use error::{ResolverError, Result};
pub use hooks::ResolverHooks;
pub use interface::InterfaceId;
