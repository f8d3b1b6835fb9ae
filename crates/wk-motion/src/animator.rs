//! Per-die animation lifecycle and single-shot completion tickets.

use std::sync::atomic::{AtomicU64, Ordering};

use wk_core::Orientation;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// A generation number no other animation in the process has used.
pub(crate) fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Proof that one animation was started, handed to the renderer.
///
/// A ticket cannot be cloned and is consumed when returned to the board, so
/// each animation completes at most once. Tickets from an animation that
/// was cancelled or whose board was rebuilt are recognised as stale.
/// Generations are unique across the process, so a ticket never matches an
/// animation on another board.
#[derive(Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    die: usize,
    generation: u64,
}

impl TransitionTicket {
    pub(crate) fn new(die: usize, generation: u64) -> Self {
        Self { die, generation }
    }

    /// The die this ticket belongs to.
    pub fn die(&self) -> usize {
        self.die
    }

    /// The animation number this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a die is moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// At rest; the displayed orientation is final.
    Resting,
    /// Animating toward a target; will snap to `rest` on completion.
    InFlight {
        /// Animation number of the outstanding ticket.
        generation: u64,
        /// Exact orientation to snap to.
        rest: Orientation,
    },
}

/// Tracks the animation state of one die.
#[derive(Debug, Clone)]
pub struct DieAnimator {
    motion: Motion,
}

impl Default for DieAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl DieAnimator {
    /// Create an animator for a die at rest.
    pub fn new() -> Self {
        Self {
            motion: Motion::Resting,
        }
    }

    /// Current motion state.
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Whether an animation is outstanding.
    pub fn in_flight(&self) -> bool {
        matches!(self.motion, Motion::InFlight { .. })
    }

    /// Force any in-flight animation to rest.
    ///
    /// Returns the rest orientation the renderer must apply without a
    /// transition, or `None` if the die was already resting.
    pub fn interrupt(&mut self) -> Option<Orientation> {
        match std::mem::replace(&mut self.motion, Motion::Resting) {
            Motion::InFlight { rest, .. } => Some(rest),
            Motion::Resting => None,
        }
    }

    /// Mark a new animation as started.
    ///
    /// The die must be at rest; call [`DieAnimator::interrupt`] first.
    pub fn begin(&mut self, die: usize, generation: u64, rest: Orientation) -> TransitionTicket {
        debug_assert!(!self.in_flight(), "begin while in flight");
        self.motion = Motion::InFlight { generation, rest };
        TransitionTicket::new(die, generation)
    }

    /// Consume a completion ticket.
    ///
    /// Returns the rest orientation to snap to when the ticket matches the
    /// outstanding animation, or `None` for a stale ticket.
    pub fn complete(&mut self, ticket: TransitionTicket) -> Option<Orientation> {
        match self.motion {
            Motion::InFlight { generation, rest } if generation == ticket.generation => {
                self.motion = Motion::Resting;
                Some(rest)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REST: Orientation = Orientation::new(0.0, 180.0, 0.0);

    #[test]
    fn begin_then_complete() {
        let mut a = DieAnimator::new();
        let ticket = a.begin(0, 1, REST);
        assert!(a.in_flight());
        assert_eq!(ticket.die(), 0);
        assert_eq!(ticket.generation(), 1);
        assert_eq!(a.complete(ticket), Some(REST));
        assert_eq!(a.motion(), Motion::Resting);
    }

    #[test]
    fn interrupt_returns_rest_once() {
        let mut a = DieAnimator::new();
        let _ticket = a.begin(0, 1, REST);
        assert_eq!(a.interrupt(), Some(REST));
        assert_eq!(a.interrupt(), None);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut a = DieAnimator::new();
        let old = a.begin(0, 1, REST);
        a.interrupt();
        let fresh = a.begin(0, 2, Orientation::IDENTITY);
        assert_eq!(a.complete(old), None);
        assert!(a.in_flight());
        assert_eq!(a.complete(fresh), Some(Orientation::IDENTITY));
    }

    #[test]
    fn generations_never_repeat() {
        let a = next_generation();
        let b = next_generation();
        assert!(b > a);
    }

    #[test]
    fn completing_a_resting_die_is_stale() {
        let mut a = DieAnimator::new();
        assert_eq!(a.complete(TransitionTicket::new(0, 9)), None);
    }
}
