//! The shop: era-weighted card offers and the acquisition economy.
//!
//! Offers regenerate free of charge every start phase and can be
//! re-rolled mid-turn for a production fee. Buying puts a fresh copy of
//! the offered template into the discard pile - purchased cards still
//! have to cycle into the hand before they do anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardCatalog, CardId, CardInstance, InstanceAllocator, InstanceId};
use crate::core::{Era, GameRng, ResourceCost, Resources};
use crate::deck::{DeckCycle, DeckError};

/// Shop command failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShopError {
    /// No offer with the requested instance ID.
    #[error("offer not found in shop")]
    OfferNotFound,
    /// Deck card targeted for trashing does not exist.
    #[error("card instance not found in deck")]
    CardNotFound,
    /// Not enough production for the purchase/refresh/trash fee.
    #[error("insufficient production")]
    InsufficientProduction,
}

impl From<DeckError> for ShopError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::NotFound => ShopError::CardNotFound,
        }
    }
}

/// The rotating set of purchasable offers.
///
/// Offers are fresh instances, never sharing identity with deck cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopGenerator {
    offers: Vec<CardInstance>,
    slots: usize,
    /// Chance per slot of offering a previous-era card.
    previous_era_chance: f64,
    refresh_cost: i64,
    trash_cost: i64,
}

impl ShopGenerator {
    /// Create an empty shop.
    #[must_use]
    pub fn new(slots: usize, previous_era_chance: f64, refresh_cost: i64, trash_cost: i64) -> Self {
        Self {
            offers: Vec::new(),
            slots,
            previous_era_chance,
            refresh_cost,
            trash_cost,
        }
    }

    /// Regenerate all offers for the given era, free of charge.
    ///
    /// Each slot rolls independently: with `previous_era_chance` (and
    /// only past the first era, with a stocked previous pool) the offer
    /// comes from the previous era's pool, otherwise from the current
    /// era's. Eras that introduce no cards fall back to the latest
    /// stocked pool.
    pub fn generate(
        &mut self,
        era: Era,
        catalog: &CardCatalog,
        alloc: &mut InstanceAllocator,
        rng: &mut GameRng,
    ) {
        self.offers.clear();

        for _ in 0..self.slots {
            let previous_pool = era.previous().map(|prev| catalog.nearest_stocked_pool(prev));
            let pool = match previous_pool {
                Some(prev) if !prev.is_empty() && rng.gen_bool(self.previous_era_chance) => prev,
                _ => catalog.nearest_stocked_pool(era),
            };

            if let Some(&card_id) = rng.choose(pool) {
                self.offers.push(alloc.instantiate(card_id));
            }
        }
    }

    /// Buy an offer.
    ///
    /// Validates the production cost, removes the offer, deducts, and
    /// puts a fresh copy of the template into the discard pile. Returns
    /// the purchased template.
    pub fn buy(
        &mut self,
        offer: InstanceId,
        catalog: &CardCatalog,
        resources: &mut Resources,
        deck: &mut DeckCycle,
        alloc: &mut InstanceAllocator,
    ) -> Result<CardId, ShopError> {
        let pos = self
            .offers
            .iter()
            .position(|c| c.instance_id == offer)
            .ok_or(ShopError::OfferNotFound)?;

        let card_id = self.offers[pos].card_id;
        let price = ResourceCost::production(catalog.get_unchecked(card_id).cost.production);

        if !resources.spend(&price) {
            return Err(ShopError::InsufficientProduction);
        }

        self.offers.remove(pos);
        deck.discard(alloc.instantiate(card_id));
        Ok(card_id)
    }

    /// Re-roll the offers for a production fee.
    pub fn refresh(
        &mut self,
        era: Era,
        catalog: &CardCatalog,
        resources: &mut Resources,
        alloc: &mut InstanceAllocator,
        rng: &mut GameRng,
    ) -> Result<(), ShopError> {
        if !resources.spend(&ResourceCost::production(self.refresh_cost)) {
            return Err(ShopError::InsufficientProduction);
        }
        self.generate(era, catalog, alloc, rng);
        Ok(())
    }

    /// Permanently remove a deck card for a production fee.
    ///
    /// The deck-thinning mechanism: the card disappears from the game.
    pub fn trash(
        &mut self,
        target: InstanceId,
        resources: &mut Resources,
        deck: &mut DeckCycle,
    ) -> Result<CardId, ShopError> {
        // Validate the target before taking payment.
        if !deck.iter_all().any(|c| c.instance_id == target) {
            return Err(ShopError::CardNotFound);
        }
        if !resources.spend(&ResourceCost::production(self.trash_cost)) {
            return Err(ShopError::InsufficientProduction);
        }
        let removed = deck.remove_permanently(target)?;
        Ok(removed.card_id)
    }

    /// Current offers.
    #[must_use]
    pub fn offers(&self) -> &[CardInstance] {
        &self.offers
    }

    /// Production fee for a refresh.
    #[must_use]
    pub fn refresh_cost(&self) -> i64 {
        self.refresh_cost
    }

    /// Production fee for trashing a card.
    #[must_use]
    pub fn trash_cost(&self) -> i64 {
        self.trash_cost
    }
}
