//! Dice pool construction and rolling.

use wk_core::{WkError, WkResult};

use super::DieKind;
use super::roll::{DieResult, RollResult};
use crate::entropy::EntropySource;
use crate::uniform::roll_uniform;

/// A collection of dice rolled together as one roll event.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    /// The dice in this pool, in roll order.
    pub dice: Vec<DieKind>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given kind.
    pub fn add(mut self, kind: DieKind, count: u32) -> Self {
        self.dice.extend(std::iter::repeat_n(kind, count as usize));
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Check that every die can be rolled.
    pub fn validate(&self) -> WkResult<()> {
        match self.dice.iter().find(|kind| !kind.is_valid()) {
            Some(kind) => Err(WkError::invalid(format!(
                "{kind} cannot be rolled: a die needs at least 2 faces"
            ))),
            None => Ok(()),
        }
    }

    /// Roll every die in the pool.
    ///
    /// The pool is validated first, so an invalid die consumes no entropy.
    pub fn roll(&self, source: &mut dyn EntropySource) -> WkResult<RollResult> {
        self.validate()?;
        let dice = self
            .dice
            .iter()
            .map(|&kind| {
                roll_uniform(&mut *source, kind.sides()).map(|value| DieResult { kind, value })
            })
            .collect::<WkResult<Vec<_>>>()?;
        tracing::debug!(dice = dice.len(), "rolled pool");
        Ok(RollResult { dice })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{ScriptedEntropy, SeededEntropy};

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(DieKind::D20, 2).add(DieKind::D6, 3);
        assert_eq!(pool.count(), 5);
        assert_eq!(pool.dice[0], DieKind::D20);
        assert_eq!(pool.dice[4], DieKind::D6);
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut src = SeededEntropy::from_seed(42);
        let pool = DicePool::new().add(DieKind::D6, 10);
        let result = pool.roll(&mut src).unwrap();
        assert_eq!(result.count(), 10);
        for die_result in &result.dice {
            assert!((1..=6).contains(&die_result.value));
        }
    }

    #[test]
    fn roll_follows_scripted_words() {
        let mut src = ScriptedEntropy::new(vec![0, 1, 19]);
        let pool = DicePool::new().add(DieKind::D6, 2).add(DieKind::D20, 1);
        let result = pool.roll(&mut src).unwrap();
        assert_eq!(result.values().collect::<Vec<_>>(), vec![1, 2, 20]);
    }

    #[test]
    fn invalid_die_consumes_nothing() {
        let mut src = ScriptedEntropy::new(vec![0, 0]);
        let pool = DicePool::new().add(DieKind::D6, 1).add(DieKind::Custom(1), 1);
        assert!(matches!(
            pool.roll(&mut src),
            Err(WkError::InvalidArgument(_))
        ));
        assert_eq!(src.consumed(), 0);
    }

    #[test]
    fn unavailable_source_fails_whole_roll() {
        let mut src = ScriptedEntropy::new(vec![3]);
        let pool = DicePool::new().add(DieKind::D6, 2);
        assert!(matches!(
            pool.roll(&mut src),
            Err(WkError::RandomSourceUnavailable(_))
        ));
    }
}
