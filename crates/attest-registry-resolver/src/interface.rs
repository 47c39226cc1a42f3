//! Capability probe: the closed set of operation identifiers.
//!
//! Callers feature-detect a resolver by querying fixed-width identifiers
//! before invoking. The set is closed: unknown identifiers do not parse.

use serde::{Deserialize, Serialize};

/// A 4-byte operation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum InterfaceId {
    // Probe and capability queries (0x0000_000x)
    /// The probe itself.
    SupportsInterface = 0x0000_0001,
    /// Whether the resolver accepts attached value.
    IsPayable = 0x0000_0002,

    // Attestation entry points (0x0000_001x)
    /// Single attestation callback.
    Attest = 0x0000_0010,
    /// Module registration callback.
    ModuleRegistration = 0x0000_0011,
    /// Batched attestation callback.
    MultiAttest = 0x0000_0012,

    // Revocation entry points (0x0000_002x)
    /// Single revocation callback.
    Revoke = 0x0000_0020,
    /// Batched revocation callback.
    MultiRevoke = 0x0000_0021,
}

impl InterfaceId {
    /// All identifiers in the closed set.
    pub const ALL: [Self; 7] = [
        Self::SupportsInterface,
        Self::IsPayable,
        Self::Attest,
        Self::ModuleRegistration,
        Self::MultiAttest,
        Self::Revoke,
        Self::MultiRevoke,
    ];

    /// Convert to u32 for serialization.
    pub fn to_u32(self) -> u32 {
        self as u32
    }

    /// Try to parse from u32. Unknown identifiers are rejected.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x0000_0001 => Some(Self::SupportsInterface),
            0x0000_0002 => Some(Self::IsPayable),
            0x0000_0010 => Some(Self::Attest),
            0x0000_0011 => Some(Self::ModuleRegistration),
            0x0000_0012 => Some(Self::MultiAttest),
            0x0000_0020 => Some(Self::Revoke),
            0x0000_0021 => Some(Self::MultiRevoke),
            _ => None,
        }
    }

    /// The identifier as big-endian wire bytes.
    pub fn to_bytes(self) -> [u8; 4] {
        self.to_u32().to_be_bytes()
    }

    /// Parse from big-endian wire bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
        Self::from_u32(u32::from_be_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_id_roundtrip() {
        for id in InterfaceId::ALL {
            assert_eq!(InterfaceId::from_u32(id.to_u32()), Some(id));
            assert_eq!(InterfaceId::from_bytes(id.to_bytes()), Some(id));
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        assert_eq!(InterfaceId::from_u32(0xdead_beef), None);
        assert_eq!(InterfaceId::from_u32(0), None);
    }

    #[test]
    fn test_identifiers_distinct() {
        for (i, a) in InterfaceId::ALL.iter().enumerate() {
            for b in &InterfaceId::ALL[i + 1..] {
                assert_ne!(a.to_u32(), b.to_u32());
            }
        }
    }
}
