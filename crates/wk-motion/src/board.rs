//! The board: the dice currently on screen and their roll lifecycle.

use rand::Rng;

use wk_core::{Die, Orientation, RenderMode, WkResult};
use wk_mechanics::{DicePool, DieKind, EntropySource, RollResult};

use crate::animator::{DieAnimator, TransitionTicket, next_generation};
use crate::config::BoardConfig;
use crate::event::{EventLog, MotionEvent, MotionEventKind};
use crate::mapper::rotation_for_face;
use crate::render::Renderer;
use crate::table::rest_orientation;

/// A set of dice built from one [`BoardConfig`].
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    dice: Vec<Die>,
    animators: Vec<DieAnimator>,
    events: EventLog,
    rolls: u64,
}

impl Board {
    /// Build a board, creating every die at rest on face 1.
    pub fn new(config: BoardConfig) -> WkResult<Self> {
        config.validate()?;
        let events = EventLog::new(config.max_events);
        let mut board = Self {
            config,
            dice: Vec::new(),
            animators: Vec::new(),
            events,
            rolls: 0,
        };
        board.create_dice();
        Ok(board)
    }

    /// Throw away every die and build new ones from `config`.
    ///
    /// Tickets issued before the rebuild become stale. On error the board
    /// is left untouched.
    pub fn rebuild(&mut self, config: BoardConfig) -> WkResult<()> {
        config.validate()?;
        tracing::debug!(
            old = self.dice.len(),
            new = config.dice_count,
            "rebuilding board"
        );
        self.config = config;
        self.create_dice();
        Ok(())
    }

    fn create_dice(&mut self) {
        let count = self.config.dice_count as usize;
        self.dice = (0..count)
            .map(|i| Die::new(i, self.config.sides, self.config.mode))
            .collect();
        self.animators = vec![DieAnimator::new(); count];
    }

    /// The active configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The dice, in board order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Board events so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Number of completed roll events.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Number of dice still animating.
    pub fn in_flight(&self) -> usize {
        self.animators.iter().filter(|a| a.in_flight()).count()
    }

    /// Roll every die once.
    ///
    /// Face values come from `entropy`; `jitter` only shapes free-stop
    /// landings. All values and targets are computed before any die
    /// changes, so a failing entropy source leaves the board as it was.
    /// Dice still animating from an earlier roll are snapped to rest first.
    pub fn roll<R>(
        &mut self,
        entropy: &mut dyn EntropySource,
        jitter: &mut R,
        renderer: &mut dyn Renderer,
    ) -> WkResult<RollResult>
    where
        R: Rng + ?Sized,
    {
        let pool = DicePool::new().add(
            DieKind::from_sides(self.config.sides),
            self.config.dice_count,
        );
        let result = pool.roll(entropy)?;

        let targets = match self.config.mode {
            RenderMode::Volumetric => result
                .values()
                .map(|face| {
                    let target = rotation_for_face(face, &self.config.spin, &mut *jitter)?;
                    Ok(Some((target, rest_orientation(face)?)))
                })
                .collect::<WkResult<Vec<_>>>()?,
            RenderMode::Flat => vec![None; result.count()],
        };

        self.rolls += 1;
        let roll = self.rolls;

        for ((die, face), target) in self.dice.iter_mut().zip(result.values()).zip(targets) {
            let index = die.index;
            let animator = &mut self.animators[index];

            if let Some(rest) = animator.interrupt() {
                tracing::debug!(die = index, "cancelling in-flight animation");
                renderer.snap(index, rest);
                die.orientation = rest;
                self.events.push(MotionEvent::new(
                    roll,
                    MotionEventKind::Cancelled { die: index, rest },
                ));
            }

            die.face = face;
            match target {
                Some((target, rest)) => {
                    let ticket = animator.begin(index, next_generation(), rest);
                    die.orientation = target;
                    renderer.begin_transition(index, target, ticket);
                }
                None => renderer.show_face(index, face),
            }

            self.events.push(MotionEvent::new(
                roll,
                MotionEventKind::Rolled {
                    die: index,
                    face,
                    target: target.map(|(t, _)| t),
                },
            ));
        }

        tracing::debug!(roll, %result, "rolled board");
        Ok(result)
    }

    /// Handle a finished transition.
    ///
    /// Snaps the die to its exact rest orientation and returns `true`, or
    /// returns `false` for a stale ticket.
    pub fn complete(&mut self, ticket: TransitionTicket, renderer: &mut dyn Renderer) -> bool {
        let index = ticket.die();
        let Some(animator) = self.animators.get_mut(index) else {
            tracing::warn!(die = index, "completion for a die that no longer exists");
            return false;
        };
        let Some(rest) = animator.complete(ticket) else {
            tracing::debug!(die = index, "ignoring stale completion");
            return false;
        };

        renderer.snap(index, rest);
        self.dice[index].orientation = rest;
        self.events.push(MotionEvent::new(
            self.rolls,
            MotionEventKind::Settled { die: index, rest },
        ));
        true
    }

    /// Force every animating die to rest, returning how many were moving.
    pub fn settle_all(&mut self, renderer: &mut dyn Renderer) -> usize {
        let mut settled = 0;
        for (die, animator) in self.dice.iter_mut().zip(&mut self.animators) {
            if let Some(rest) = animator.interrupt() {
                renderer.snap(die.index, rest);
                die.orientation = rest;
                self.events.push(MotionEvent::new(
                    self.rolls,
                    MotionEventKind::Settled {
                        die: die.index,
                        rest,
                    },
                ));
                settled += 1;
            }
        }
        settled
    }

    /// The orientation each die will rest at once its animation ends.
    pub fn rest_orientations(&self) -> Vec<Orientation> {
        self.dice
            .iter()
            .map(|die| match die.mode {
                RenderMode::Volumetric => {
                    rest_orientation(die.face).unwrap_or(Orientation::IDENTITY)
                }
                RenderMode::Flat => Orientation::IDENTITY,
            })
            .collect()
    }
}
