//! Roll results: the ordered face values of one roll event.

use serde::{Deserialize, Serialize};

use super::DieKind;

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The kind of die that was rolled.
    pub kind: DieKind,
    /// The value rolled (1 to `kind.sides()`).
    pub value: u32,
}

/// The result of one roll event, in die order. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Face values in die order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.dice.iter().map(|d| d.value)
    }

    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.values().sum()
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.values().max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.values().min().unwrap_or(0)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d6s(values: &[u32]) -> RollResult {
        RollResult {
            dice: values
                .iter()
                .map(|&value| DieResult {
                    kind: DieKind::D6,
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn total_highest_lowest() {
        let r = d6s(&[3, 6, 1]);
        assert_eq!(r.total(), 10);
        assert_eq!(r.highest(), 6);
        assert_eq!(r.lowest(), 1);
        assert_eq!(r.count(), 3);
    }

    #[test]
    fn values_keep_die_order() {
        let r = d6s(&[5, 2, 4]);
        assert_eq!(r.values().collect::<Vec<_>>(), vec![5, 2, 4]);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.highest(), 0);
        assert_eq!(r.lowest(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(d6s(&[3, 5]).to_string(), "[3, 5] = 8");
    }

    #[test]
    fn serializes_as_json() {
        let json = serde_json::to_string(&d6s(&[2])).unwrap();
        assert_eq!(json, r#"{"dice":[{"kind":"D6","value":2}]}"#);
    }
}
