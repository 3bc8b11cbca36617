//! The deck cycle: draw pile, hand, discard pile.
//!
//! The three piles partition the player's entire card pool. Cards move
//! between piles but never leave the system except through
//! [`DeckCycle::remove_permanently`] - the deck-thinning operation.
//!
//! Drawing past an empty draw pile reshuffles the discard pile back in;
//! drawing past two empty piles simply yields fewer cards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardCatalog, CardId, CardInstance, InstanceAllocator, InstanceId};
use crate::core::GameRng;

/// Addressing failure inside the deck cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No card with the requested instance ID in the searched pile(s).
    #[error("card instance not found")]
    NotFound,
}

/// Result of a [`DeckCycle::draw`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Cards actually moved into the hand.
    pub drawn: usize,
    /// Whether the discard pile was reshuffled into the draw pile.
    pub reshuffled: bool,
}

/// Draw pile, hand, and discard pile of one game.
///
/// The top of the draw pile is the end of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCycle {
    draw_pile: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    discard_pile: Vec<CardInstance>,
}

impl DeckCycle {
    /// Create an empty cycle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cycle from instantiated cards, shuffled into the draw pile.
    #[must_use]
    pub fn from_instances(mut cards: Vec<CardInstance>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self {
            draw_pile: cards,
            hand: Vec::new(),
            discard_pile: Vec::new(),
        }
    }

    // === Drawing ===

    /// Draw up to `count` cards into the hand.
    ///
    /// When the draw pile runs dry the whole discard pile is shuffled
    /// in and drawing continues. When both piles are empty the draw
    /// stops early; that is not an error.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> DrawOutcome {
        let mut outcome = DrawOutcome::default();

        for _ in 0..count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.draw_pile.append(&mut self.discard_pile);
                rng.shuffle(&mut self.draw_pile);
                outcome.reshuffled = true;
            }

            if let Some(card) = self.draw_pile.pop() {
                self.hand.push(card);
                outcome.drawn += 1;
            }
        }

        outcome
    }

    // === Hand management ===

    /// Remove one card from the hand by instance identity.
    pub fn play_from_hand(&mut self, id: InstanceId) -> Result<CardInstance, DeckError> {
        match self.hand.iter().position(|c| c.instance_id == id) {
            Some(pos) => Ok(self.hand.remove(pos)),
            None => Err(DeckError::NotFound),
        }
    }

    /// Move one card from the hand to the discard pile.
    pub fn discard_from_hand(&mut self, id: InstanceId) -> Result<(), DeckError> {
        let card = self.play_from_hand(id)?;
        self.discard_pile.push(card);
        Ok(())
    }

    /// Move the entire hand to the discard pile. Returns how many moved.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        self.discard_pile.append(&mut self.hand);
        count
    }

    /// Put a card on the discard pile (purchases, played actions).
    pub fn discard(&mut self, card: CardInstance) {
        self.discard_pile.push(card);
    }

    // === Deck mutation ===

    /// Shuffle `count` fresh copies of a curse template into the draw pile.
    ///
    /// The draw pile is reshuffled afterwards so the curses are
    /// interspersed rather than stacked on top.
    pub fn inject_curse(
        &mut self,
        card_id: CardId,
        count: usize,
        alloc: &mut InstanceAllocator,
        rng: &mut GameRng,
    ) {
        for _ in 0..count {
            self.draw_pile.push(alloc.instantiate(card_id));
        }
        rng.shuffle(&mut self.draw_pile);
    }

    /// Permanently remove a card from anywhere in the cycle.
    ///
    /// Searches hand, then draw pile, then discard pile, deleting the
    /// first match. This is the only operation that shrinks the total
    /// card count.
    pub fn remove_permanently(&mut self, id: InstanceId) -> Result<CardInstance, DeckError> {
        for pile in [&mut self.hand, &mut self.draw_pile, &mut self.discard_pile] {
            if let Some(pos) = pile.iter().position(|c| c.instance_id == id) {
                return Ok(pile.remove(pos));
            }
        }
        Err(DeckError::NotFound)
    }

    /// Retemplate the first copy of `from` (hand, then draw, then
    /// discard order) into `to`, keeping its instance identity.
    ///
    /// Returns the retemplated instance ID, or `None` when no copy of
    /// `from` exists. `to` must be a registered template.
    pub fn transform_first(
        &mut self,
        from: CardId,
        to: CardId,
        catalog: &CardCatalog,
    ) -> Option<InstanceId> {
        debug_assert!(catalog.contains(to), "transform target must be registered");

        for pile in [&mut self.hand, &mut self.draw_pile, &mut self.discard_pile] {
            if let Some(card) = pile.iter_mut().find(|c| c.card_id == from) {
                card.card_id = to;
                return Some(card.instance_id);
            }
        }
        None
    }

    // === Accessors ===

    /// Cards currently in hand.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    /// Draw pile size.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Discard pile size.
    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards across all three piles.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len()
    }

    /// Iterate over every card in the cycle (hand, draw, discard order).
    pub fn iter_all(&self) -> impl Iterator<Item = &CardInstance> {
        self.hand
            .iter()
            .chain(self.draw_pile.iter())
            .chain(self.discard_pile.iter())
    }

    /// Count cards across all piles matching a predicate on the template.
    pub fn count_matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(CardId) -> bool,
    {
        self.iter_all().filter(|c| predicate(c.card_id)).count()
    }
}
