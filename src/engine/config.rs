//! Engine configuration.
//!
//! All tunables in one place, defaulting to the standard balance. Tests
//! pin the RNG seed; interactive play leaves it unset for an entropy
//! seed.

use serde::{Deserialize, Serialize};

/// Balance and setup parameters for one engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Player starting/maximum health.
    pub max_health: i64,

    /// Production granted at every start phase.
    pub base_production: i64,

    /// Cards drawn each turn before the production bonus.
    pub base_hand_size: usize,

    /// Hard cap on cards drawn per turn.
    pub max_hand_size: usize,

    /// Food at game start.
    pub starting_food: i64,

    /// Science at game start.
    pub starting_science: i64,

    /// Health damage per missing food at the end phase.
    pub starvation_damage: i64,

    /// Science cost per era transition, indexed by the current era.
    pub era_costs: [i64; 5],

    /// Structure slots on the field.
    pub structure_slots: usize,

    /// Unit slots on the field.
    pub unit_slots: usize,

    /// Offers in the shop.
    pub shop_slots: usize,

    /// Production fee to re-roll the shop.
    pub shop_refresh_cost: i64,

    /// Production fee to trash a deck card.
    pub shop_trash_cost: i64,

    /// Chance per shop slot of a previous-era offer.
    pub previous_era_shop_chance: f64,

    /// Turns between crises, rolled uniformly inclusive.
    pub crisis_cooldown_min: i64,
    pub crisis_cooldown_max: i64,

    /// Event log entries kept (oldest dropped first).
    pub log_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_health: 50,
            base_production: 3,
            base_hand_size: 5,
            max_hand_size: 10,
            starting_food: 10,
            starting_science: 0,
            starvation_damage: 5,
            era_costs: [20, 50, 100, 200, 500],
            structure_slots: 5,
            unit_slots: 5,
            shop_slots: 3,
            shop_refresh_cost: 2,
            shop_trash_cost: 3,
            previous_era_shop_chance: 0.2,
            crisis_cooldown_min: 2,
            crisis_cooldown_max: 5,
            log_cap: 50,
        }
    }
}

impl EngineConfig {
    /// Default balance with a pinned RNG seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// The crisis cooldown as a range.
    #[must_use]
    pub fn crisis_cooldown(&self) -> std::ops::RangeInclusive<i64> {
        self.crisis_cooldown_min..=self.crisis_cooldown_max
    }
}
