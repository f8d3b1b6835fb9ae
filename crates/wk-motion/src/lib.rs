//! Face-to-rotation mapping and roll animation for Wuerfelwerk.
//!
//! Turns rolled face values into the orientations a renderer animates
//! toward, and tracks each die from roll to rest. Drawing is left to a
//! [`Renderer`]; this crate only decides what should be shown.

/// Per-die animation state and completion tickets.
pub mod animator;
/// The board of dice and its roll lifecycle.
pub mod board;
/// Configuration for building a board.
pub mod config;
/// Board events and the bounded event log.
pub mod event;
/// Face value to target rotation.
pub mod mapper;
/// The rendering collaborator trait.
pub mod render;
/// The static cube orientation table.
pub mod table;

/// Re-exports of [`animator::DieAnimator`], [`animator::Motion`], and [`animator::TransitionTicket`].
pub use animator::{DieAnimator, Motion, TransitionTicket};
/// Re-export of [`board::Board`].
pub use board::Board;
/// Re-exports of [`config::BoardConfig`] and [`config::MAX_DICE`].
pub use config::{BoardConfig, MAX_DICE};
/// Re-exports of [`event::EventLog`], [`event::MotionEvent`], and [`event::MotionEventKind`].
pub use event::{EventLog, MotionEvent, MotionEventKind};
/// Re-exports of the mapper entry point and its options.
pub use mapper::{MAX_SAFE_JITTER_DEGREES, SpinOptions, rotation_for_face};
/// Re-exports of [`render::Renderer`] and the recording implementation.
pub use render::{RecordingRenderer, RenderCall, Renderer};
/// Re-exports of the orientation table lookups.
pub use table::{CUBE_TABLE, base_angles, rest_orientation};
