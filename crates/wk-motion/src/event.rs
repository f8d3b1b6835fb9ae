use wk_core::Orientation;

/// What happened to a die during a roll.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionEventKind {
    /// A die was given a new face and, if volumetric, a target orientation.
    Rolled {
        /// The die that rolled.
        die: usize,
        /// The face it will show.
        face: u32,
        /// Where the animation heads. `None` for flat dice.
        target: Option<Orientation>,
    },
    /// An in-flight animation was forced to rest by a newer roll.
    Cancelled {
        /// The interrupted die.
        die: usize,
        /// The rest orientation it was snapped to.
        rest: Orientation,
    },
    /// An animation completed and the die was snapped to rest.
    Settled {
        /// The die that settled.
        die: usize,
        /// The exact rest orientation.
        rest: Orientation,
    },
}

impl MotionEventKind {
    /// The die this event is about.
    pub fn die(&self) -> usize {
        match self {
            Self::Rolled { die, .. } | Self::Cancelled { die, .. } | Self::Settled { die, .. } => {
                *die
            }
        }
    }
}

/// A record of something that happened on the board.
#[derive(Debug, Clone)]
pub struct MotionEvent {
    /// Sequence number of the roll event this belongs to (first roll is 1).
    pub roll: u64,
    /// The specific kind of event.
    pub kind: MotionEventKind,
}

impl MotionEvent {
    /// Create an event for roll number `roll`.
    pub fn new(roll: u64, kind: MotionEventKind) -> Self {
        Self { roll, kind }
    }
}

/// Accumulates board events, optionally bounded.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<MotionEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: MotionEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[MotionEvent] {
        &self.events
    }

    /// Events that belong to roll number `roll`.
    pub fn events_for_roll(&self, roll: u64) -> Vec<&MotionEvent> {
        self.events.iter().filter(|e| e.roll == roll).collect()
    }

    /// Events about die `die`.
    pub fn events_for_die(&self, die: usize) -> Vec<&MotionEvent> {
        self.events.iter().filter(|e| e.kind.die() == die).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(roll: u64, die: usize) -> MotionEvent {
        MotionEvent::new(
            roll,
            MotionEventKind::Settled {
                die,
                rest: Orientation::IDENTITY,
            },
        )
    }

    #[test]
    fn push_and_query() {
        let mut log = EventLog::new(0);
        log.push(settled(1, 0));
        log.push(MotionEvent::new(
            2,
            MotionEventKind::Rolled {
                die: 1,
                face: 4,
                target: None,
            },
        ));
        assert_eq!(log.len(), 2);
        assert_eq!(log.events_for_roll(1).len(), 1);
        assert_eq!(log.events_for_die(1).len(), 1);
        assert!(log.events_for_roll(3).is_empty());
    }

    #[test]
    fn max_events_trims_oldest() {
        let mut log = EventLog::new(2);
        for roll in 0..5 {
            log.push(settled(roll, 0));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].roll, 3);
        assert_eq!(log.events()[1].roll, 4);
    }

    #[test]
    fn unlimited_capacity() {
        let mut log = EventLog::new(0);
        for roll in 0..1000 {
            log.push(settled(roll, 0));
        }
        assert_eq!(log.len(), 1000);
    }

    #[test]
    fn clear() {
        let mut log = EventLog::new(0);
        log.push(settled(1, 0));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn kind_reports_die() {
        let kind = MotionEventKind::Cancelled {
            die: 7,
            rest: Orientation::IDENTITY,
        };
        assert_eq!(kind.die(), 7);
    }
}
