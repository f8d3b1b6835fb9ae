use wk_core::{CUBE_FACES, RenderMode, Settings, WkError, WkResult};

use crate::mapper::{MAX_SAFE_JITTER_DEGREES, SpinOptions};

/// Most dice a board will hold.
pub const MAX_DICE: u32 = 32;

/// Configuration for building a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Number of dice.
    pub dice_count: u32,
    /// Faces per die.
    pub sides: u32,
    /// Flat or volumetric dice.
    pub mode: RenderMode,
    /// Spin and landing options for volumetric dice.
    pub spin: SpinOptions,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dice_count: 2,
            sides: CUBE_FACES,
            mode: RenderMode::Volumetric,
            spin: SpinOptions::default().with_spin_cycles(2),
            max_events: 256,
        }
    }
}

impl BoardConfig {
    /// Build a configuration from persisted settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::default()
            .with_dice_count(settings.dice_count)
            .with_sides(settings.sides)
            .with_mode(settings.mode)
            .with_spin(
                SpinOptions::default()
                    .with_spin_cycles(settings.spin_cycles)
                    .with_jitter_degrees(settings.jitter_degrees)
                    .with_free_stop(settings.free_stop),
            )
    }

    /// Set the number of dice.
    pub fn with_dice_count(mut self, count: u32) -> Self {
        self.dice_count = count;
        self
    }

    /// Set the faces per die.
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Set the render mode.
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the spin options.
    pub fn with_spin(mut self, spin: SpinOptions) -> Self {
        self.spin = spin;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Check the configuration before any die is built.
    pub fn validate(&self) -> WkResult<()> {
        if !(1..=MAX_DICE).contains(&self.dice_count) {
            return Err(WkError::invalid(format!(
                "dice count must be within 1..={MAX_DICE}, got {}",
                self.dice_count
            )));
        }
        if self.sides < 2 {
            return Err(WkError::invalid(format!(
                "a die needs at least 2 faces, got {}",
                self.sides
            )));
        }
        if self.mode == RenderMode::Volumetric && self.sides != CUBE_FACES {
            return Err(WkError::invalid(format!(
                "volumetric dice are cubes; use flat mode for {} faces",
                self.sides
            )));
        }
        self.spin.validate()?;
        if self.spin.jitter_degrees > MAX_SAFE_JITTER_DEGREES {
            return Err(WkError::invalid(format!(
                "jitter of {} degrees could show a neighbouring face (max {MAX_SAFE_JITTER_DEGREES})",
                self.spin.jitter_degrees
            )));
        }
        Ok(())
    }
}
