//! Crisis definitions.
//!
//! A crisis is a challenge checked once per cycle: a requirement the
//! civilization must meet, a penalty applied on failure, and an optional
//! reward on success. Catalog templates are scaled up by the current era
//! when a concrete crisis is generated.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{Era, ResourceKind};

/// Unique identifier for a crisis template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrisisId(pub u32);

impl CrisisId {
    /// Create a new crisis ID.
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

impl std::fmt::Display for CrisisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Crisis({})", self.0)
    }
}

/// What the civilization must muster to pass a crisis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CrisisRequirement {
    /// Total attack across deployed units must reach `attack`.
    /// Nothing is consumed on success.
    Combat { attack: i64 },

    /// The named resource must reach `amount`; the amount is consumed
    /// on success, nothing on failure.
    ResourceCheck { resource: ResourceKind, amount: i64 },

    /// At least `count` tech-type cards anywhere in the deck.
    /// Nothing is consumed.
    TechCount { count: i64 },
}

/// Applied exactly once when a crisis is failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CrisisPenalty {
    /// Direct damage to the player's health.
    DamageHp { amount: i64 },

    /// Lose `floor(food * percent / 100)` food.
    LoseResource { percent: i64 },

    /// Demolish the most recently deployed structure, if any.
    DestroyStructure,

    /// Shuffle `count` copies of a curse template into the draw pile.
    AddCurseCard { card: CardId, count: usize },
}

/// Granted only when the crisis requirement is met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisReward {
    pub resource: ResourceKind,
    pub amount: i64,
}

/// A crisis, both as a catalog template and as a scaled live challenge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crisis {
    pub id: CrisisId,
    pub name: String,
    pub description: String,
    pub requirement: CrisisRequirement,
    pub penalty: CrisisPenalty,
    #[serde(default)]
    pub reward: Option<CrisisReward>,
}

impl Crisis {
    /// Create a crisis template.
    #[must_use]
    pub fn new(
        id: CrisisId,
        name: impl Into<String>,
        description: impl Into<String>,
        requirement: CrisisRequirement,
        penalty: CrisisPenalty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            requirement,
            penalty,
            reward: None,
        }
    }

    /// Attach a success reward (builder pattern).
    #[must_use]
    pub fn with_reward(mut self, resource: ResourceKind, amount: i64) -> Self {
        self.reward = Some(CrisisReward { resource, amount });
        self
    }

    /// Scale this template for the given era.
    ///
    /// Requirement magnitudes grow by the era index, damage-shaped
    /// penalties by twice the era index. Structure destruction and
    /// curse counts do not scale.
    #[must_use]
    pub fn scaled_for(&self, era: Era) -> Crisis {
        let era_bonus = era.index() as i64;
        let mut scaled = self.clone();

        scaled.requirement = match scaled.requirement {
            CrisisRequirement::Combat { attack } => CrisisRequirement::Combat {
                attack: attack + era_bonus,
            },
            CrisisRequirement::ResourceCheck { resource, amount } => {
                CrisisRequirement::ResourceCheck {
                    resource,
                    amount: amount + era_bonus,
                }
            }
            CrisisRequirement::TechCount { count } => CrisisRequirement::TechCount {
                count: count + era_bonus,
            },
        };

        scaled.penalty = match scaled.penalty {
            CrisisPenalty::DamageHp { amount } => CrisisPenalty::DamageHp {
                amount: amount + era_bonus * 2,
            },
            CrisisPenalty::LoseResource { percent } => CrisisPenalty::LoseResource {
                percent: (percent + era_bonus * 2).min(100),
            },
            other => other,
        };

        scaled
    }
}
