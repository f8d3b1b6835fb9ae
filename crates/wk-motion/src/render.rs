//! The seam between the board and whatever draws it.

use wk_core::Orientation;

use crate::animator::TransitionTicket;

/// A rendering collaborator.
///
/// The board tells it what to show; it animates on its own schedule and
/// hands each ticket back through [`crate::Board::complete`] exactly once
/// when the transition finishes.
pub trait Renderer {
    /// Start an animated transition of volumetric die `die` toward `target`.
    fn begin_transition(&mut self, die: usize, target: Orientation, ticket: TransitionTicket);

    /// Apply `orientation` to die `die` immediately, with transitions off.
    fn snap(&mut self, die: usize, orientation: Orientation);

    /// Show `face` on flat die `die`.
    fn show_face(&mut self, die: usize, face: u32);
}

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// `begin_transition` was called.
    Transition {
        /// Target die.
        die: usize,
        /// Target orientation.
        target: Orientation,
    },
    /// `snap` was called.
    Snap {
        /// Target die.
        die: usize,
        /// Applied orientation.
        orientation: Orientation,
    },
    /// `show_face` was called.
    Face {
        /// Target die.
        die: usize,
        /// Shown face.
        face: u32,
    },
}

/// Records every call and parks tickets until the caller completes them.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Calls in the order received.
    pub calls: Vec<RenderCall>,
    tickets: Vec<TransitionTicket>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all parked tickets, oldest first.
    pub fn take_tickets(&mut self) -> Vec<TransitionTicket> {
        std::mem::take(&mut self.tickets)
    }
}

impl Renderer for RecordingRenderer {
    fn begin_transition(&mut self, die: usize, target: Orientation, ticket: TransitionTicket) {
        self.calls.push(RenderCall::Transition { die, target });
        self.tickets.push(ticket);
    }

    fn snap(&mut self, die: usize, orientation: Orientation) {
        self.calls.push(RenderCall::Snap { die, orientation });
    }

    fn show_face(&mut self, die: usize, face: u32) {
        self.calls.push(RenderCall::Face { die, face });
    }
}
