//! Unbiased integers in `[1, n]` by rejection sampling.
//!
//! Reducing a 32-bit word with `% n` favours small results whenever `2^32`
//! is not a multiple of `n`. Words at or above the largest multiple of `n`
//! that fits in 32 bits are thrown away and redrawn instead. Fewer than
//! half of all words are rejected for any `n <= 2^31`, so the expected
//! number of draws stays below two.

use wk_core::{WkError, WkResult};

use crate::entropy::EntropySource;

const WORD_RANGE: u64 = 1 << 32;

/// The first rejected word for an `n`-sided die: `floor(2^32 / n) * n`.
///
/// Zero for `n = 0`, which rejects every word.
pub fn rejection_limit(n: u32) -> u64 {
    let n = u64::from(n);
    WORD_RANGE.checked_div(n).map_or(0, |q| q * n)
}

/// Roll a fair `n`-sided die, returning a value in `[1, n]`.
///
/// `n` is checked before any entropy is drawn. The loop has no fixed bound;
/// it terminates with probability 1.
pub fn roll_uniform(source: &mut dyn EntropySource, n: u32) -> WkResult<u32> {
    if n < 2 {
        return Err(WkError::invalid(format!(
            "a die needs at least 2 faces, got {n}"
        )));
    }

    let limit = rejection_limit(n);
    loop {
        let word = source.next_u32()?;
        if u64::from(word) < limit {
            return Ok(word % n + 1);
        }
        tracing::trace!(word, n, limit, "rejected biased draw");
    }
}
