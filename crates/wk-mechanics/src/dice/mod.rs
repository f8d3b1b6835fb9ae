//! Die kinds, pools, and roll results.
//!
//! Supports the standard polyhedral set (d4 through d100) and custom dice
//! with any number of faces from two up. Every value is drawn through
//! [`crate::uniform::roll_uniform`].

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult};

use serde::{Deserialize, Serialize};

/// The kind of die being rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieKind {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl DieKind {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Whether the kind can be rolled (at least two faces).
    pub fn is_valid(self) -> bool {
        self.sides() >= 2
    }

    /// The kind for a die with `sides` faces, preferring named variants.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Parse a tag such as `d20` or `D7`. Tags naming fewer than two faces
    /// are refused.
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let tag = s.trim();
        let digits = tag.strip_prefix(['d', 'D'])?;
        let sides = digits.parse::<u32>().ok()?;
        let kind = Self::from_sides(sides);
        kind.is_valid().then_some(kind)
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
