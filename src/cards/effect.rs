//! Card effects as data.
//!
//! Effects are a small tagged enum interpreted by one dispatcher in the
//! turn engine, instead of executable logic attached to each card. This
//! keeps the catalog serializable and effects enumerable in tests.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::ResourceKind;

/// A one-shot card effect, applied when a card is played.
///
/// Curse cards reuse `Damage` as their held-at-end-of-turn penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CardEffect {
    /// Credit a resource.
    GainResource { resource: ResourceKind, amount: i64 },

    /// Damage the player's health.
    Damage { amount: i64 },

    /// Restore the player's health.
    Heal { amount: i64 },

    /// Replace the first deck copy of `from` with a copy of `to`.
    TransformCard { from: CardId, to: CardId },
}

impl CardEffect {
    /// Create a resource gain effect.
    #[must_use]
    pub const fn gain(resource: ResourceKind, amount: i64) -> Self {
        Self::GainResource { resource, amount }
    }

    /// Create a damage effect.
    #[must_use]
    pub const fn damage(amount: i64) -> Self {
        Self::Damage { amount }
    }

    /// Create a heal effect.
    #[must_use]
    pub const fn heal(amount: i64) -> Self {
        Self::Heal { amount }
    }

    /// Create a card transformation effect.
    #[must_use]
    pub const fn transform(from: CardId, to: CardId) -> Self {
        Self::TransformCard { from, to }
    }
}

/// When a recurring passive fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassiveTrigger {
    /// Fires during the start phase while the card is deployed.
    TurnStart,
    /// Fires during the end phase while the card is deployed.
    TurnEnd,
}

/// A recurring effect carried by a deployed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passive {
    pub trigger: PassiveTrigger,
    pub effect: CardEffect,
}

impl Passive {
    /// A turn-start resource gain, the common structure passive.
    #[must_use]
    pub const fn turn_start(resource: ResourceKind, amount: i64) -> Self {
        Self {
            trigger: PassiveTrigger::TurnStart,
            effect: CardEffect::gain(resource, amount),
        }
    }

    /// A turn-end resource gain.
    #[must_use]
    pub const fn turn_end(resource: ResourceKind, amount: i64) -> Self {
        Self {
            trigger: PassiveTrigger::TurnEnd,
            effect: CardEffect::gain(resource, amount),
        }
    }
}
