//! Identifier newtypes and the lock-holder value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a fresh random identifier.
            #[must_use]
            pub fn new_one() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing identifier value.
            #[must_use]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// The underlying identifier value.
            #[must_use]
            pub const fn id(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_id! {
    /// Opaque identifier of an allocatable resource in the availability ledger.
    ResourceId
}

uuid_id! {
    /// Identifier of a project's allocation aggregate.
    ProjectId
}

uuid_id! {
    /// Identifier of a capability instance offered for allocation. The
    /// availability ledger sees the same value as a [`ResourceId`].
    AllocatableCapabilityId
}

impl AllocatableCapabilityId {
    /// View of this capability instance as an availability-ledger resource.
    #[must_use]
    pub const fn to_availability_resource_id(self) -> ResourceId {
        ResourceId::from_uuid(self.0)
    }
}

/// The party currently holding a lock on a ledger row. An available row has
/// the explicit `none` owner rather than an absent reference, so comparisons
/// are always plain value comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner(Option<Uuid>);

impl Owner {
    /// The "no owner" sentinel carried by available rows.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Mint a fresh owner identity.
    #[must_use]
    pub fn new_one() -> Self {
        Self(Some(Uuid::new_v4()))
    }

    /// Owner identity wrapping an existing id (typically a project id).
    #[must_use]
    pub const fn of(id: Uuid) -> Self {
        Self(Some(id))
    }

    /// The wrapped identity, if any.
    #[must_use]
    pub const fn id(&self) -> Option<Uuid> {
        self.0
    }

    /// Whether this is the "no owner" sentinel.
    #[must_use]
    pub const fn by_none(&self) -> bool {
        self.0.is_none()
    }
}

/// A named skill, permission, or asset type that projects demand and
/// resources provide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    /// Capability name, e.g. `"java"` or `"forklift"`.
    pub name: String,
    /// Capability kind, e.g. `"SKILL"`, `"PERMISSION"`, `"ASSET"`.
    pub kind: String,
}

impl Capability {
    /// A capability of an arbitrary kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// A skill capability.
    #[must_use]
    pub fn skill(name: impl Into<String>) -> Self {
        Self::new(name, "SKILL")
    }

    /// A permission capability.
    #[must_use]
    pub fn permission(name: impl Into<String>) -> Self {
        Self::new(name, "PERMISSION")
    }

    /// An asset capability.
    #[must_use]
    pub fn asset(name: impl Into<String>) -> Self {
        Self::new(name, "ASSET")
    }
}
