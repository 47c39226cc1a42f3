//! Strong type definitions for the attestation registry.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte address identifying a principal or contract reference.
///
/// The zero address is reserved: it is never a valid resolver or registry
/// reference and registration paths reject it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Generate a random address.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Check whether this is the reserved zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// The zero address (reserved, never a valid reference).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 32-byte schema identifier.
///
/// Derived from Blake3 over (schema text, optional validator address). The
/// derivation is pure: identical inputs always collide into the same UID,
/// which is what gives re-registration its "already exists" semantics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaUid(pub [u8; 32]);

impl SchemaUid {
    /// Derive a schema UID from its identity fields.
    ///
    /// The schema text is length-framed and the validator is tagged so that
    /// `("ab", None)` and `("a", validator-starting-with-b)` cannot collide.
    pub fn derive(schema: &str, validator: Option<&Address>) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"attest-schema-v0:");
        hasher.update(&(schema.len() as u64).to_le_bytes());
        hasher.update(schema.as_bytes());
        match validator {
            Some(addr) => {
                hasher.update(&[0x01]);
                hasher.update(&addr.0);
            }
            None => {
                hasher.update(&[0x00]);
            }
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for SchemaUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemaUid({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for SchemaUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for SchemaUid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for SchemaUid {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 32-byte resolver identifier.
///
/// Derived from Blake3 over (resolver address, owner address). The owner
/// participates in derivation, so the same resolver address registered by
/// two different owners yields two distinct, independently-owned entries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolverUid(pub [u8; 32]);

impl ResolverUid {
    /// Derive a resolver UID from its identity fields.
    pub fn derive(resolver: &Address, owner: &Address) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"attest-resolver-v0:");
        hasher.update(&resolver.0);
        hasher.update(&owner.0);
        Self(*hasher.finalize().as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ResolverUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolverUid({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ResolverUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for ResolverUid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for ResolverUid {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_hex_roundtrip() {
        let addr = Address::from_bytes([0x42; 32]);
        let hex = addr.to_hex();
        let recovered = Address::from_hex(&hex).unwrap();
        assert_eq!(addr, recovered);
    }

    #[test]
    fn test_address_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_bytes([1; 32]).is_zero());
    }

    #[test]
    fn test_schema_uid_deterministic() {
        let validator = Address::random();
        let u1 = SchemaUid::derive("uint256 balance", Some(&validator));
        let u2 = SchemaUid::derive("uint256 balance", Some(&validator));
        assert_eq!(u1, u2);
    }

    #[test]
    fn test_schema_uid_distinguishes_validator() {
        let validator = Address::random();
        let with = SchemaUid::derive("uint256 balance", Some(&validator));
        let without = SchemaUid::derive("uint256 balance", None);
        assert_ne!(with, without);
    }

    #[test]
    fn test_schema_uid_distinguishes_text() {
        let u1 = SchemaUid::derive("bool verified", None);
        let u2 = SchemaUid::derive("bool revoked", None);
        assert_ne!(u1, u2);
    }

    #[test]
    fn test_schema_uid_no_framing_collision() {
        // Length framing keeps text bytes from bleeding into the validator tag.
        let addr = Address::from_bytes([0x01; 32]);
        let u1 = SchemaUid::derive("a", Some(&addr));
        let u2 = SchemaUid::derive("a\x01", None);
        assert_ne!(u1, u2);
    }

    #[test]
    fn test_resolver_uid_owner_participates() {
        let resolver = Address::random();
        let owner_a = Address::random();
        let owner_b = Address::random();

        let u1 = ResolverUid::derive(&resolver, &owner_a);
        let u2 = ResolverUid::derive(&resolver, &owner_b);
        assert_ne!(u1, u2);

        let u1_again = ResolverUid::derive(&resolver, &owner_a);
        assert_eq!(u1, u1_again);
    }

    #[test]
    fn test_uid_display_truncated() {
        let uid = SchemaUid::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", uid), "abababababababab");
        assert!(format!("{:?}", uid).starts_with("SchemaUid("));
    }
}
