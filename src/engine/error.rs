//! Typed command errors.
//!
//! Every refusal is recoverable: the command is a no-op and the engine
//! state is untouched. The engine also appends a human-readable line to
//! the event log for each refusal.

use thiserror::Error;

use crate::deck::DeckError;
use crate::field::FieldError;
use crate::shop::ShopError;

/// Why a `play_card` command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Cards can only be played during the action phase of a running game.
    #[error("cards can only be played during the action phase")]
    WrongPhase,
    /// The instance ID does not match any card in the hand.
    #[error("card not found in hand")]
    CardNotFound,
    /// Crisis/curse cards can never be chosen by the player.
    #[error("card cannot be played")]
    Unplayable,
    /// The ledger cannot cover the card's cost.
    #[error("insufficient resources")]
    InsufficientResources,
    /// No free slot for this structure/unit.
    #[error("field slots are full")]
    FieldFull,
}

impl From<DeckError> for PlayError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::NotFound => PlayError::CardNotFound,
        }
    }
}

impl From<FieldError> for PlayError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::SlotFull => PlayError::FieldFull,
            // Routing guarantees only structures/units reach deploy.
            FieldError::NotDeployable => PlayError::Unplayable,
        }
    }
}

/// Why a shop command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShopCommandError {
    /// Shop commands only run during the action phase.
    #[error("the shop is only open during the action phase")]
    WrongPhase,
    #[error(transparent)]
    Shop(#[from] ShopError),
}

/// Why an `advance_era` command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EraError {
    /// Era advancement is an action-phase decision.
    #[error("eras can only be advanced during the action phase")]
    WrongPhase,
    /// Already at the final era.
    #[error("already at the final era")]
    FinalEra,
    /// Not enough science for the next transition.
    #[error("insufficient science")]
    InsufficientScience,
}

/// Why a phase-advancing command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PhaseError {
    /// `end_turn` is only valid during the action phase of a running game.
    #[error("the turn can only be ended from the action phase")]
    WrongPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_error_conversions() {
        assert_eq!(PlayError::from(DeckError::NotFound), PlayError::CardNotFound);
        assert_eq!(PlayError::from(FieldError::SlotFull), PlayError::FieldFull);

        let shop: ShopCommandError = ShopError::InsufficientProduction.into();
        assert_eq!(
            shop,
            ShopCommandError::Shop(ShopError::InsufficientProduction)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PlayError::InsufficientResources.to_string(),
            "insufficient resources"
        );
        assert_eq!(
            ShopCommandError::Shop(ShopError::OfferNotFound).to_string(),
            "offer not found in shop"
        );
    }
}
