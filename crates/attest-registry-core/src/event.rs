//! Registry events.
//!
//! Events are fire-and-forget notifications for external indexers. Nothing
//! in the registry consumes them internally.

use serde::{Deserialize, Serialize};

use crate::types::{Address, ResolverUid, SchemaUid};

/// An event emitted by a registry mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new schema was registered.
    SchemaRegistered {
        uid: SchemaUid,
        registrant: Address,
    },

    /// A new resolver entry was registered.
    SchemaResolverRegistered {
        uid: ResolverUid,
        registrant: Address,
    },

    /// An existing resolver entry had its resolver reference replaced.
    NewSchemaResolver {
        uid: ResolverUid,
        resolver: Address,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_equality() {
        let uid = SchemaUid::from_bytes([0x11; 32]);
        let registrant = Address::from_bytes([0x22; 32]);

        let a = RegistryEvent::SchemaRegistered { uid, registrant };
        let b = RegistryEvent::SchemaRegistered { uid, registrant };
        assert_eq!(a, b);
    }
}
