//! The resource ledger and player health pool.
//!
//! ## Resources
//!
//! Three civilization resources with different lifetimes:
//! - `food` and `science` persist and accumulate across turns
//! - `production` is volatile: reset to a base value every start phase
//!
//! Costs are a fixed-shape record over the same three fields rather than
//! a string-keyed map, so a typo'd resource name is a compile error.
//!
//! ## PlayerStats
//!
//! The capital's health pool. Health is clamped to `0..=max_health`;
//! reaching zero is terminal.

use serde::{Deserialize, Serialize};

/// The three resource kinds of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Food,
    Production,
    Science,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Food => write!(f, "food"),
            ResourceKind::Production => write!(f, "production"),
            ResourceKind::Science => write!(f, "science"),
        }
    }
}

/// Current resource amounts. Components never go below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub food: i64,
    pub production: i64,
    pub science: i64,
}

impl Resources {
    /// Create a ledger with the given amounts.
    #[must_use]
    pub const fn new(food: i64, production: i64, science: i64) -> Self {
        Self {
            food,
            production,
            science,
        }
    }

    /// Get the amount of a resource kind.
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> i64 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Production => self.production,
            ResourceKind::Science => self.science,
        }
    }

    /// Add to a single resource, clamping the result at zero.
    pub fn credit_kind(&mut self, kind: ResourceKind, amount: i64) {
        let slot = match kind {
            ResourceKind::Food => &mut self.food,
            ResourceKind::Production => &mut self.production,
            ResourceKind::Science => &mut self.science,
        };
        *slot = (*slot + amount).max(0);
    }

    /// Add a delta component-wise, clamping each result at zero.
    pub fn credit(&mut self, delta: &Resources) {
        self.food = (self.food + delta.food).max(0);
        self.production = (self.production + delta.production).max(0);
        self.science = (self.science + delta.science).max(0);
    }

    /// True iff every component of `cost` is covered.
    #[must_use]
    pub fn can_afford(&self, cost: &ResourceCost) -> bool {
        self.food >= cost.food && self.production >= cost.production && self.science >= cost.science
    }

    /// Subtract a cost component-wise.
    ///
    /// Refuses without mutating when the cost is not affordable.
    /// Returns whether the cost was paid.
    pub fn spend(&mut self, cost: &ResourceCost) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.food -= cost.food;
        self.production -= cost.production;
        self.science -= cost.science;
        true
    }
}

/// A card or action cost. Zero components are free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost {
    #[serde(default)]
    pub food: i64,
    #[serde(default)]
    pub production: i64,
    #[serde(default)]
    pub science: i64,
}

impl ResourceCost {
    /// A cost of nothing.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            food: 0,
            production: 0,
            science: 0,
        }
    }

    /// A production-only cost.
    #[must_use]
    pub const fn production(amount: i64) -> Self {
        Self {
            food: 0,
            production: amount,
            science: 0,
        }
    }

    /// A food-only cost.
    #[must_use]
    pub const fn food(amount: i64) -> Self {
        Self {
            food: amount,
            production: 0,
            science: 0,
        }
    }

    /// A science-only cost.
    #[must_use]
    pub const fn science(amount: i64) -> Self {
        Self {
            food: 0,
            production: 0,
            science: amount,
        }
    }

    /// Add a food component (builder pattern).
    #[must_use]
    pub const fn with_food(mut self, amount: i64) -> Self {
        self.food = amount;
        self
    }

    /// Add a production component (builder pattern).
    #[must_use]
    pub const fn with_production(mut self, amount: i64) -> Self {
        self.production = amount;
        self
    }

    /// True iff no component is required.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.food == 0 && self.production == 0 && self.science == 0
    }
}

impl std::fmt::Display for ResourceCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "food {}, production {}, science {}",
            self.food, self.production, self.science
        )
    }
}

/// The player's health pool (capital durability).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i64,
    pub max_health: i64,
}

impl PlayerStats {
    /// Create a full health pool.
    #[must_use]
    pub const fn new(max_health: i64) -> Self {
        Self {
            health: max_health,
            max_health,
        }
    }

    /// Subtract damage, clamping health at zero.
    ///
    /// Returns true when the damage was fatal (health reached zero).
    pub fn apply_damage(&mut self, amount: i64) -> bool {
        self.health = (self.health - amount).max(0);
        self.health == 0
    }

    /// Restore health, clamped at `max_health`.
    pub fn heal(&mut self, amount: i64) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// True when health has reached zero.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_afford() {
        let res = Resources::new(10, 3, 0);

        assert!(res.can_afford(&ResourceCost::free()));
        assert!(res.can_afford(&ResourceCost::production(3)));
        assert!(res.can_afford(&ResourceCost::food(10)));
        assert!(!res.can_afford(&ResourceCost::production(4)));
        assert!(!res.can_afford(&ResourceCost::science(1)));
    }

    #[test]
    fn test_spend_refuses_without_mutation() {
        let mut res = Resources::new(5, 2, 1);
        let before = res;

        assert!(!res.spend(&ResourceCost::production(3)));
        assert_eq!(res, before);

        assert!(res.spend(&ResourceCost::production(2).with_food(1)));
        assert_eq!(res, Resources::new(4, 0, 1));
    }

    #[test]
    fn test_credit_clamps_at_zero() {
        let mut res = Resources::new(3, 0, 0);
        res.credit(&Resources::new(-10, 5, -1));
        assert_eq!(res, Resources::new(0, 5, 0));
    }

    #[test]
    fn test_credit_kind() {
        let mut res = Resources::default();
        res.credit_kind(ResourceKind::Science, 4);
        res.credit_kind(ResourceKind::Science, -10);
        res.credit_kind(ResourceKind::Food, 2);

        assert_eq!(res.science, 0);
        assert_eq!(res.food, 2);
    }

    #[test]
    fn test_damage_clamps_and_signals_death() {
        let mut stats = PlayerStats::new(50);

        assert!(!stats.apply_damage(10));
        assert_eq!(stats.health, 40);

        assert!(stats.apply_damage(100));
        assert_eq!(stats.health, 0);
        assert!(stats.is_dead());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut stats = PlayerStats::new(50);
        stats.apply_damage(30);
        stats.heal(100);
        assert_eq!(stats.health, 50);
    }

    #[test]
    fn test_cost_serialization_defaults() {
        let cost: ResourceCost = serde_json::from_str(r#"{"production": 2}"#).unwrap();
        assert_eq!(cost, ResourceCost::production(2));
    }
}
