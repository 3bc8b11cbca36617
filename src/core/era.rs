//! Technological eras.
//!
//! Six tiers from Primitive to Space. The era gates which cards appear
//! in the shop and scales crisis difficulty; reaching the final era wins
//! the game.

use serde::{Deserialize, Serialize};

/// One of the six technological eras.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Era {
    Primitive = 0,
    Ancient = 1,
    Medieval = 2,
    Renaissance = 3,
    Industrial = 4,
    Space = 5,
}

impl Era {
    /// Number of eras.
    pub const COUNT: usize = 6;

    /// Zero-based index of this era.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Era for a zero-based index, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Era::Primitive),
            1 => Some(Era::Ancient),
            2 => Some(Era::Medieval),
            3 => Some(Era::Renaissance),
            4 => Some(Era::Industrial),
            5 => Some(Era::Space),
            _ => None,
        }
    }

    /// The following era, or `None` from the final era.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding era, or `None` from the first.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index() {
            0 => None,
            i => Self::from_index(i - 1),
        }
    }

    /// True for the final (Space) era.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Era::Space)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Era::Primitive => "Primitive",
            Era::Ancient => "Ancient",
            Era::Medieval => "Medieval",
            Era::Renaissance => "Renaissance",
            Era::Industrial => "Industrial",
            Era::Space => "Space",
        }
    }

    /// Iterate over all eras in ascending order.
    pub fn all() -> impl Iterator<Item = Era> {
        (0..Self::COUNT).filter_map(Era::from_index)
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
