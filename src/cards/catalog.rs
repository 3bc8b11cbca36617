//! Card catalog - definition lookup and era pools.
//!
//! The `CardCatalog` stores every card and crisis template for a game.
//! It is built once at startup and read-only afterwards; all other
//! components consult it for stat lookups.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType};
use crate::core::Era;
use crate::crisis::Crisis;

/// Registry of card and crisis templates.
///
/// ## Example
///
/// ```
/// use civdeck::cards::{CardCatalog, CardDefinition, CardId, CardType};
/// use civdeck::core::Era;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(
///     CardId::new(1),
///     "Forage",
///     CardType::Action,
///     Era::Primitive,
/// ));
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Forage");
/// assert_eq!(catalog.era_pool(Era::Primitive), &[CardId::new(1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    crises: Vec<Crisis>,
    /// Purchasable templates per era, in registration order.
    era_pools: Vec<Vec<CardId>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: FxHashMap::default(),
            crises: Vec::new(),
            era_pools: vec![Vec::new(); Era::COUNT],
        }
    }

    /// Register a card template.
    ///
    /// Playable, non-crisis cards join their era's shop pool.
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        assert!(
            !self.cards.contains_key(&card.id),
            "card {} already registered",
            card.id
        );

        if !card.unplayable && card.card_type != CardType::Crisis {
            self.era_pools[card.era.index()].push(card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Register a crisis template.
    pub fn register_crisis(&mut self, crisis: Crisis) {
        self.crises.push(crisis);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Use for IDs that came from this catalog.
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("card not found in catalog")
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Purchasable templates introduced in the given era.
    #[must_use]
    pub fn era_pool(&self, era: Era) -> &[CardId] {
        &self.era_pools[era.index()]
    }

    /// The nearest non-empty pool at or below the given era.
    ///
    /// Late eras may introduce no cards of their own; the shop then
    /// keeps selling the latest stocked pool.
    #[must_use]
    pub fn nearest_stocked_pool(&self, era: Era) -> &[CardId] {
        let mut current = era;
        loop {
            let pool = self.era_pool(current);
            if !pool.is_empty() {
                return pool;
            }
            match current.previous() {
                Some(prev) => current = prev,
                None => return pool,
            }
        }
    }

    /// All crisis templates.
    #[must_use]
    pub fn crises(&self) -> &[Crisis] {
        &self.crises
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crisis::{CrisisId, CrisisPenalty, CrisisRequirement};

    fn card(id: u32, card_type: CardType, era: Era) -> CardDefinition {
        CardDefinition::new(CardId::new(id), format!("Card {id}"), card_type, era)
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(1, CardType::Action, Era::Primitive));

        assert!(catalog.contains(CardId::new(1)));
        assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Card 1");
        assert!(catalog.get(CardId::new(99)).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(1, CardType::Action, Era::Primitive));
        catalog.register(card(1, CardType::Unit, Era::Primitive));
    }

    #[test]
    fn test_era_pools_exclude_curses() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(1, CardType::Action, Era::Primitive));
        catalog.register(card(2, CardType::Structure, Era::Ancient));
        catalog.register(card(3, CardType::Crisis, Era::Primitive).unplayable());

        assert_eq!(catalog.era_pool(Era::Primitive), &[CardId::new(1)]);
        assert_eq!(catalog.era_pool(Era::Ancient), &[CardId::new(2)]);
        assert!(catalog.era_pool(Era::Medieval).is_empty());
    }

    #[test]
    fn test_nearest_stocked_pool_walks_down() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(1, CardType::Action, Era::Primitive));
        catalog.register(card(2, CardType::Structure, Era::Ancient));

        // Medieval and beyond have no pool of their own.
        assert_eq!(catalog.nearest_stocked_pool(Era::Space), &[CardId::new(2)]);
        assert_eq!(
            catalog.nearest_stocked_pool(Era::Primitive),
            &[CardId::new(1)]
        );
    }

    #[test]
    fn test_crisis_registration() {
        let mut catalog = CardCatalog::new();
        catalog.register_crisis(Crisis::new(
            CrisisId::new(1),
            "Famine",
            "",
            CrisisRequirement::ResourceCheck {
                resource: crate::core::ResourceKind::Food,
                amount: 5,
            },
            CrisisPenalty::DamageHp { amount: 8 },
        ));

        assert_eq!(catalog.crises().len(), 1);
        assert_eq!(catalog.crises()[0].name, "Famine");
    }
}
