//! Deck cycling: draw pile, hand, and discard pile as a closed system.

pub mod cycle;

pub use cycle::{DeckCycle, DeckError, DrawOutcome};
