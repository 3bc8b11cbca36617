//! The field: deployed structures and units.
//!
//! Two capped rows, distinct from the deck piles. Slot capacity is
//! checked before any cost is spent, so a full field is a clean refusal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::{CardCatalog, CardInstance, CardType, InstanceId};

/// Inline capacity matching the default slot limit.
type SlotRow = SmallVec<[CardInstance; 5]>;

/// Deployment failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The targeted row is at capacity.
    #[error("no free field slot")]
    SlotFull,
    /// Only structures and units can be deployed.
    #[error("card type cannot be deployed")]
    NotDeployable,
}

/// Deployed structures and units with fixed slot capacities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRegistry {
    structures: SlotRow,
    units: SlotRow,
    structure_slots: usize,
    unit_slots: usize,
}

impl FieldRegistry {
    /// Create an empty field with the given slot capacities.
    #[must_use]
    pub fn new(structure_slots: usize, unit_slots: usize) -> Self {
        Self {
            structures: SlotRow::new(),
            units: SlotRow::new(),
            structure_slots,
            unit_slots,
        }
    }

    /// Whether a card of this type currently has a free slot.
    #[must_use]
    pub fn has_slot(&self, card_type: CardType) -> bool {
        match card_type {
            CardType::Structure => self.structures.len() < self.structure_slots,
            CardType::Unit => self.units.len() < self.unit_slots,
            _ => false,
        }
    }

    /// Deploy a card to the row matching its type.
    ///
    /// Refuses with `SlotFull` when the row is at capacity; the caller
    /// must not have deducted the cost yet.
    pub fn deploy(&mut self, card: CardInstance, card_type: CardType) -> Result<(), FieldError> {
        let row = match card_type {
            CardType::Structure => &mut self.structures,
            CardType::Unit => &mut self.units,
            _ => return Err(FieldError::NotDeployable),
        };
        let cap = match card_type {
            CardType::Structure => self.structure_slots,
            _ => self.unit_slots,
        };

        if row.len() >= cap {
            return Err(FieldError::SlotFull);
        }
        row.push(card);
        Ok(())
    }

    /// Total attack across deployed units.
    #[must_use]
    pub fn total_attack(&self, catalog: &CardCatalog) -> i64 {
        self.units
            .iter()
            .map(|c| catalog.get(c.card_id).map_or(0, |def| def.attack()))
            .sum()
    }

    /// Total food upkeep across units and structures.
    ///
    /// Pure function of current field contents.
    #[must_use]
    pub fn total_upkeep(&self, catalog: &CardCatalog) -> i64 {
        self.units
            .iter()
            .chain(self.structures.iter())
            .map(|c| catalog.get(c.card_id).map_or(0, |def| def.upkeep()))
            .sum()
    }

    /// Demolish the most recently deployed structure, if any.
    pub fn destroy_newest_structure(&mut self) -> Option<CardInstance> {
        self.structures.pop()
    }

    /// Deployed structures, oldest first.
    #[must_use]
    pub fn structures(&self) -> &[CardInstance] {
        &self.structures
    }

    /// Deployed units, oldest first.
    #[must_use]
    pub fn units(&self) -> &[CardInstance] {
        &self.units
    }

    /// Total deployed cards.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.structures.len() + self.units.len()
    }

    /// Look up a deployed card by instance ID.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.structures
            .iter()
            .chain(self.units.iter())
            .find(|c| c.instance_id == id)
    }
}
