//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card template:
//! cost, stat block, one-shot effect, recurring passive. Runtime identity
//! lives separately in `CardInstance`; the same template can appear in
//! the deck many times as distinct instances.

use serde::{Deserialize, Serialize};

use super::effect::{CardEffect, Passive};
use crate::core::{Era, ResourceCost};

/// Unique identifier for a card template.
///
/// Identifies the "kind" of card (e.g. "Farm"), not a specific copy
/// inside a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The five card categories the engine routes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// One-shot effect, then discarded.
    Action,
    /// Deployed to a structure slot; may carry a recurring passive.
    Structure,
    /// Deployed to a unit slot; contributes attack, eats upkeep.
    Unit,
    /// One-shot effect, then discarded. Counts toward tech crisis checks.
    Tech,
    /// Crisis/curse cards. Unplayable deck pollution.
    Crisis,
}

impl CardType {
    /// True for types that occupy a field slot when played.
    #[must_use]
    pub const fn is_deployable(self) -> bool {
        matches!(self, CardType::Structure | CardType::Unit)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Action => "action",
            CardType::Structure => "structure",
            CardType::Unit => "unit",
            CardType::Tech => "tech",
            CardType::Crisis => "crisis",
        };
        write!(f, "{name}")
    }
}

/// Combat/durability stats for units and structures.
///
/// `upkeep` is food consumed per turn while deployed. When unset, units
/// default to 1 and structures to 0 (see `CardDefinition::upkeep`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    pub attack: i64,
    #[serde(default)]
    pub health: i64,
    #[serde(default)]
    pub upkeep: Option<i64>,
}

impl StatBlock {
    /// Create a stat block with explicit upkeep.
    #[must_use]
    pub const fn new(attack: i64, health: i64, upkeep: i64) -> Self {
        Self {
            attack,
            health,
            upkeep: Some(upkeep),
        }
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use civdeck::cards::{CardDefinition, CardId, CardType};
/// use civdeck::core::{Era, ResourceCost};
///
/// let farm = CardDefinition::new(CardId::new(7), "Farm", CardType::Structure, Era::Ancient)
///     .with_cost(ResourceCost::production(3));
///
/// assert_eq!(farm.upkeep(), 0);
/// assert!(!farm.unplayable);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this template.
    pub id: CardId,

    /// Card name (for display/logging).
    pub name: String,

    /// Card category.
    pub card_type: CardType,

    /// Cost paid when played from hand.
    pub cost: ResourceCost,

    /// Era this card first appears in the shop.
    pub era: Era,

    /// Unit/structure stats. `None` for actions and techs.
    #[serde(default)]
    pub stats: Option<StatBlock>,

    /// One-shot effect applied when the card is played.
    #[serde(default)]
    pub effect: Option<CardEffect>,

    /// Recurring effect while deployed.
    #[serde(default)]
    pub passive: Option<Passive>,

    /// True for crisis/curse cards the player can never choose to play.
    #[serde(default)]
    pub unplayable: bool,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType, era: Era) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            cost: ResourceCost::free(),
            era,
            stats: None,
            effect: None,
            passive: None,
            unplayable: false,
        }
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: ResourceCost) -> Self {
        self.cost = cost;
        self
    }

    /// Set the stat block (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set the one-shot effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Set the recurring passive (builder pattern).
    #[must_use]
    pub fn with_passive(mut self, passive: Passive) -> Self {
        self.passive = Some(passive);
        self
    }

    /// Mark this card as unplayable (builder pattern).
    #[must_use]
    pub fn unplayable(mut self) -> Self {
        self.unplayable = true;
        self
    }

    /// Attack contributed while deployed (0 when unset).
    #[must_use]
    pub fn attack(&self) -> i64 {
        self.stats.map_or(0, |s| s.attack)
    }

    /// Food upkeep per turn while deployed.
    ///
    /// Units without an explicit upkeep default to 1, everything else to 0.
    #[must_use]
    pub fn upkeep(&self) -> i64 {
        let default = match self.card_type {
            CardType::Unit => 1,
            _ => 0,
        };
        self.stats.and_then(|s| s.upkeep).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::effect::{CardEffect, Passive, PassiveTrigger};
    use crate::core::ResourceKind;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_builder() {
        let warrior = CardDefinition::new(CardId::new(5), "Warrior", CardType::Unit, Era::Primitive)
            .with_cost(ResourceCost::production(3))
            .with_stats(StatBlock::new(3, 5, 1));

        assert_eq!(warrior.name, "Warrior");
        assert_eq!(warrior.attack(), 3);
        assert_eq!(warrior.upkeep(), 1);
        assert!(warrior.card_type.is_deployable());
    }

    #[test]
    fn test_upkeep_defaults() {
        let unit = CardDefinition::new(CardId::new(1), "Scout", CardType::Unit, Era::Primitive);
        assert_eq!(unit.upkeep(), 1);

        let structure =
            CardDefinition::new(CardId::new(2), "Hut", CardType::Structure, Era::Primitive);
        assert_eq!(structure.upkeep(), 0);

        let action = CardDefinition::new(CardId::new(3), "Forage", CardType::Action, Era::Primitive);
        assert_eq!(action.upkeep(), 0);
    }

    #[test]
    fn test_unplayable_flag() {
        let curse = CardDefinition::new(CardId::new(9), "Hunger", CardType::Crisis, Era::Primitive)
            .with_effect(CardEffect::damage(5))
            .unplayable();

        assert!(curse.unplayable);
    }

    #[test]
    fn test_serialization_round_trip() {
        let farm = CardDefinition::new(CardId::new(7), "Farm", CardType::Structure, Era::Ancient)
            .with_cost(ResourceCost::production(3))
            .with_stats(StatBlock::new(0, 10, 0))
            .with_passive(Passive::turn_start(ResourceKind::Food, 2));

        let json = serde_json::to_string(&farm).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(farm, back);
        assert_eq!(back.passive.unwrap().trigger, PassiveTrigger::TurnStart);
    }
}
