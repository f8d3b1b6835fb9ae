//! Terminal rendering collaborator.
//!
//! A terminal cannot animate, so transitions are recorded and their tickets
//! parked until the caller reports them finished.

use colored::{ColoredString, Colorize};

use wk_core::{Orientation, Theme};
use wk_motion::{Renderer, TransitionTicket};

/// What the terminal will show for one die.
#[derive(Debug, Clone, Default)]
pub struct DieView {
    pub face: Option<u32>,
    pub target: Option<Orientation>,
    pub rest: Option<Orientation>,
}

/// Collects render calls for printing once a roll has settled.
pub struct TerminalRenderer {
    theme: Theme,
    views: Vec<DieView>,
    tickets: Vec<TransitionTicket>,
}

impl TerminalRenderer {
    pub fn new(theme: Theme, dice: usize) -> Self {
        Self {
            theme,
            views: vec![DieView::default(); dice],
            tickets: Vec::new(),
        }
    }

    pub fn take_tickets(&mut self) -> Vec<TransitionTicket> {
        std::mem::take(&mut self.tickets)
    }

    pub fn views(&self) -> &[DieView] {
        &self.views
    }

    /// Paint a die glyph in the theme's colours.
    pub fn paint(&self, glyph: &str) -> ColoredString {
        let padded = format!(" {glyph} ");
        match self.theme {
            Theme::Light => padded.black().on_white(),
            Theme::Dark => padded.white().on_black(),
            Theme::Felt => padded.bright_white().on_green(),
        }
    }

    fn view(&mut self, die: usize) -> &mut DieView {
        if die >= self.views.len() {
            self.views.resize(die + 1, DieView::default());
        }
        &mut self.views[die]
    }
}

impl Renderer for TerminalRenderer {
    fn begin_transition(&mut self, die: usize, target: Orientation, ticket: TransitionTicket) {
        let view = self.view(die);
        view.target = Some(target);
        view.rest = None;
        self.tickets.push(ticket);
    }

    fn snap(&mut self, die: usize, orientation: Orientation) {
        self.view(die).rest = Some(orientation);
    }

    fn show_face(&mut self, die: usize, face: u32) {
        self.view(die).face = Some(face);
    }
}
