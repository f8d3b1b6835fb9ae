//! Core types for Wuerfelwerk: dice, orientations, and settings.
//!
//! This crate holds the data model shared by the roller, the rotation
//! mapper, and the rendering front ends. It draws no randomness itself.

/// Dice on the board and how they are drawn.
pub mod die;
/// Error types used throughout the workspace.
pub mod error;
/// Three-axis orientation in degrees.
pub mod orientation;
/// Persisted user settings and themes.
pub mod settings;
/// Key-value stores for settings.
pub mod store;

/// Re-export die types.
pub use die::{CUBE_FACES, Die, RenderMode};
/// Re-export error types.
pub use error::{WkError, WkResult};
/// Re-export orientation types.
pub use orientation::{Orientation, normalize_degrees};
/// Re-export settings types.
pub use settings::{Settings, Theme};
/// Re-export store types.
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
