//! A die on the board: identity, face, rendering mode, and orientation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WkError;
use crate::orientation::Orientation;

/// Number of faces on a volumetric (cube) die.
pub const CUBE_FACES: u32 = 6;

/// How a die is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// A flat face glyph swapped in place. Any face count works.
    Flat,
    /// A 3D cube rotated to show the rolled face.
    #[default]
    Volumetric,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Volumetric => write!(f, "volumetric"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = WkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "2d" => Ok(Self::Flat),
            "volumetric" | "3d" => Ok(Self::Volumetric),
            other => Err(WkError::invalid(format!("unknown render mode '{other}'"))),
        }
    }
}

/// A single die on the board.
///
/// Dice are created when a board is built, mutated by every roll, and
/// dropped when the board is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Die {
    /// Position of the die on the board.
    pub index: usize,
    /// Number of faces.
    pub sides: u32,
    /// Face currently shown (1..=sides).
    pub face: u32,
    /// How the die is drawn.
    pub mode: RenderMode,
    /// Current orientation. Stays at identity for flat dice.
    pub orientation: Orientation,
}

impl Die {
    /// Create a die showing face 1 in its rest orientation.
    pub fn new(index: usize, sides: u32, mode: RenderMode) -> Self {
        Self {
            index,
            sides,
            face: 1,
            mode,
            orientation: Orientation::IDENTITY,
        }
    }

    /// Whether this die is drawn as a rotating cube.
    pub fn is_volumetric(&self) -> bool {
        self.mode == RenderMode::Volumetric
    }

    /// Unicode die glyph for six-sided faces, the number otherwise.
    pub fn glyph(&self) -> String {
        const PIPS: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];
        match (self.sides, self.face) {
            (CUBE_FACES, face @ 1..=6) => PIPS[(face - 1) as usize].to_string(),
            (_, face) => face.to_string(),
        }
    }
}
