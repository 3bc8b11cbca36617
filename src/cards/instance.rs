//! Card instances - runtime card identity.
//!
//! Every copy of a template that enters a game (starter deck, purchase,
//! curse injection, shop offer) gets a fresh `InstanceId` from the
//! game's allocator. Instance identity, not template identity, is the
//! addressing key for play/discard/remove operations.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A specific copy of a card template in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique runtime identity.
    pub instance_id: InstanceId,

    /// Template this copy was instantiated from.
    pub card_id: CardId,
}

impl CardInstance {
    /// Create an instance binding an identity to a template.
    #[must_use]
    pub const fn new(instance_id: InstanceId, card_id: CardId) -> Self {
        Self {
            instance_id,
            card_id,
        }
    }
}

/// Monotonic instance ID allocator, one per game.
///
/// `issued()` exposes the running total, which the deck-closure
/// invariant is checked against in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    /// Create a fresh allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next instance ID.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Instantiate a template with a fresh identity.
    pub fn instantiate(&mut self, card_id: CardId) -> CardInstance {
        CardInstance::new(self.alloc(), card_id)
    }

    /// Total number of IDs issued so far.
    #[must_use]
    pub const fn issued(&self) -> u32 {
        self.next
    }
}
