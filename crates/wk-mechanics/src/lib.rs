//! Dice mechanics for Wuerfelwerk.
//!
//! Provides the unbiased roller (rejection sampling over a secure word
//! source), dice pools that roll through it, and face statistics.

pub mod dice;
pub mod entropy;
pub mod stats;
pub mod uniform;

pub use dice::{DicePool, DieKind, DieResult, RollResult};
pub use entropy::{EntropySource, OsEntropy, ScriptedEntropy, SeededEntropy};
pub use stats::{FaceTally, MAX_TALLY_SIDES};
pub use uniform::{rejection_limit, roll_uniform};
