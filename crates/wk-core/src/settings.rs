//! User-facing settings, including the visual theme.
//!
//! Settings are a plain value handed to whoever needs them. They are loaded
//! from and saved to a [`SettingsStore`], never read from global state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::die::{CUBE_FACES, RenderMode};
use crate::error::{WkError, WkResult};
use crate::store::SettingsStore;

/// Key under which settings are persisted.
pub const SETTINGS_KEY: &str = "settings";

/// Visual theme for the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Dark pips on ivory dice.
    #[default]
    Light,
    /// Light pips on charcoal dice.
    Dark,
    /// Casino felt: white dice on green.
    Felt,
}

impl Theme {
    /// All built-in themes.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Felt];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
            Self::Felt => write!(f, "felt"),
        }
    }
}

impl FromStr for Theme {
    type Err = WkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "felt" => Ok(Self::Felt),
            other => Err(WkError::invalid(format!("unknown theme '{other}'"))),
        }
    }
}

/// Persisted preferences for building and rolling a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visual theme.
    pub theme: Theme,
    /// Flat or volumetric dice.
    pub mode: RenderMode,
    /// Number of dice on the board.
    pub dice_count: u32,
    /// Faces per die.
    pub sides: u32,
    /// Whole extra turns added to each animation.
    pub spin_cycles: u32,
    /// Total jitter span in degrees for free-stop landings.
    pub jitter_degrees: f64,
    /// End animations at a randomized offset instead of an exact snap.
    pub free_stop: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            mode: RenderMode::Volumetric,
            dice_count: 2,
            sides: CUBE_FACES,
            spin_cycles: 2,
            jitter_degrees: 8.0,
            free_stop: false,
        }
    }
}

impl Settings {
    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the render mode.
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the number of dice.
    pub fn with_dice_count(mut self, count: u32) -> Self {
        self.dice_count = count;
        self
    }

    /// Set the faces per die.
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Set the spin cycles.
    pub fn with_spin_cycles(mut self, cycles: u32) -> Self {
        self.spin_cycles = cycles;
        self
    }

    /// Set the jitter span in degrees.
    pub fn with_jitter_degrees(mut self, degrees: f64) -> Self {
        self.jitter_degrees = degrees;
        self
    }

    /// Enable or disable free-stop landings.
    pub fn with_free_stop(mut self, free_stop: bool) -> Self {
        self.free_stop = free_stop;
        self
    }

    /// Load settings from a store, falling back to defaults when absent.
    pub fn load(store: &dyn SettingsStore) -> WkResult<Self> {
        match store.get(SETTINGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| WkError::Storage(format!("malformed settings: {e}"))),
            None => {
                tracing::debug!("no stored settings, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save settings into a store.
    pub fn save(&self, store: &mut dyn SettingsStore) -> WkResult<()> {
        let raw = serde_json::to_string(self)
            .map_err(|e| WkError::Storage(format!("cannot encode settings: {e}")))?;
        store.put(SETTINGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.mode, RenderMode::Volumetric);
        assert_eq!(s.dice_count, 2);
        assert_eq!(s.sides, 6);
        assert_eq!(s.spin_cycles, 2);
        assert!((s.jitter_degrees - 8.0).abs() < f64::EPSILON);
        assert!(!s.free_stop);
    }

    #[test]
    fn builder_chain() {
        let s = Settings::default()
            .with_theme(Theme::Felt)
            .with_mode(RenderMode::Flat)
            .with_dice_count(5)
            .with_sides(20)
            .with_spin_cycles(0)
            .with_jitter_degrees(4.0)
            .with_free_stop(true);
        assert_eq!(s.theme, Theme::Felt);
        assert_eq!(s.mode, RenderMode::Flat);
        assert_eq!(s.dice_count, 5);
        assert_eq!(s.sides, 20);
        assert_eq!(s.spin_cycles, 0);
        assert!(s.free_stop);
    }

    #[test]
    fn load_missing_gives_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store).unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        let s = Settings::default().with_theme(Theme::Dark).with_dice_count(4);
        s.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store).unwrap(), s);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let mut store = MemoryStore::new();
        store.put(SETTINGS_KEY, r#"{"theme":"felt"}"#).unwrap();
        let s = Settings::load(&store).unwrap();
        assert_eq!(s.theme, Theme::Felt);
        assert_eq!(s.dice_count, 2);
    }

    #[test]
    fn malformed_json_is_storage_error() {
        let mut store = MemoryStore::new();
        store.put(SETTINGS_KEY, "{not json").unwrap();
        assert!(matches!(Settings::load(&store), Err(WkError::Storage(_))));
    }

    #[test]
    fn theme_parse() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
        assert!("neon".parse::<Theme>().is_err());
    }
}
