//! Face frequency tallies and a chi-square uniformity check.

use serde::{Deserialize, Serialize};

use wk_core::{WkError, WkResult};

use crate::dice::RollResult;

/// Most faces a tally will track.
pub const MAX_TALLY_SIDES: u32 = 1000;

/// Counts how often each face of an `n`-sided die came up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceTally {
    counts: Vec<u64>,
}

impl FaceTally {
    /// Create an empty tally for a die with `sides` faces.
    ///
    /// `sides` must lie within `2..=MAX_TALLY_SIDES`.
    pub fn new(sides: u32) -> WkResult<Self> {
        if sides < 2 {
            return Err(WkError::invalid(format!(
                "a die needs at least 2 faces, got {sides}"
            )));
        }
        if sides > MAX_TALLY_SIDES {
            return Err(WkError::invalid(format!(
                "cannot tally more than {MAX_TALLY_SIDES} faces, got {sides}"
            )));
        }
        Ok(Self {
            counts: vec![0; sides as usize],
        })
    }

    /// Number of faces.
    pub fn sides(&self) -> u32 {
        self.counts.len() as u32
    }

    /// Record one face value.
    pub fn record(&mut self, face: u32) -> WkResult<()> {
        let sides = self.sides();
        let slot = face
            .checked_sub(1)
            .and_then(|i| self.counts.get_mut(i as usize))
            .ok_or_else(|| WkError::invalid(format!("face {face} outside 1..={sides}")))?;
        *slot += 1;
        Ok(())
    }

    /// Record every value of a roll.
    pub fn record_roll(&mut self, roll: &RollResult) -> WkResult<()> {
        roll.values().try_for_each(|v| self.record(v))
    }

    /// How often `face` came up. Zero for faces outside the die.
    pub fn count(&self, face: u32) -> u64 {
        face.checked_sub(1)
            .and_then(|i| self.counts.get(i as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Counts in face order, starting at face 1.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of recorded values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Observed share of `face`, or 0 with nothing recorded.
    pub fn frequency(&self, face: u32) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(face) as f64 / total as f64,
        }
    }

    /// Pearson's chi-square statistic against the uniform distribution.
    pub fn chi_square(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let expected = total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    /// Degrees of freedom of the test: `sides - 1`.
    pub fn degrees_of_freedom(&self) -> u32 {
        self.sides() - 1
    }

    /// Upper critical value for a one-sided tail of `z` standard deviations
    /// (Wilson-Hilferty approximation).
    pub fn critical_value(&self, z: f64) -> f64 {
        let k = f64::from(self.degrees_of_freedom());
        let a = 2.0 / (9.0 * k);
        k * (1.0 - a + z * a.sqrt()).powi(3)
    }

    /// Whether the tally is consistent with a fair die at tail `z`.
    pub fn is_plausibly_uniform(&self, z: f64) -> bool {
        self.chi_square() <= self.critical_value(z)
    }
}
