use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wk_core::{RenderMode, Settings, Theme};
use wk_motion::BoardConfig;

/// Requested settings changes. All `None` means "just show".
pub struct Changes {
    pub theme: Option<String>,
    pub mode: Option<String>,
    pub dice: Option<u32>,
    pub sides: Option<u32>,
    pub spin: Option<u32>,
    pub jitter: Option<f64>,
    pub free_stop: Option<bool>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.mode.is_none()
            && self.dice.is_none()
            && self.sides.is_none()
            && self.spin.is_none()
            && self.jitter.is_none()
            && self.free_stop.is_none()
    }

    fn apply(self, mut settings: Settings) -> Result<Settings, String> {
        if let Some(theme) = self.theme {
            settings.theme = theme.parse::<Theme>().map_err(|e| e.to_string())?;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode.parse::<RenderMode>().map_err(|e| e.to_string())?;
        }
        if let Some(dice) = self.dice {
            settings.dice_count = dice;
        }
        if let Some(sides) = self.sides {
            settings.sides = sides;
        }
        if let Some(spin) = self.spin {
            settings.spin_cycles = spin;
        }
        if let Some(jitter) = self.jitter {
            settings.jitter_degrees = jitter;
        }
        if let Some(free_stop) = self.free_stop {
            settings.free_stop = free_stop;
        }
        Ok(settings)
    }
}

pub fn run(config_path: &Path, changes: Changes) -> Result<(), String> {
    let (mut store, settings) = super::load_settings(config_path)?;

    let settings = if changes.is_empty() {
        settings
    } else {
        let updated = changes.apply(settings)?;
        // Refuse to store settings that could never build a board.
        BoardConfig::from_settings(&updated)
            .validate()
            .map_err(|e| e.to_string())?;
        updated.save(&mut store).map_err(|e| e.to_string())?;
        println!("  {} {}", "Saved".green().bold(), config_path.display());
        println!();
        updated
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["theme".to_string(), settings.theme.to_string()]);
    table.add_row(vec!["mode".to_string(), settings.mode.to_string()]);
    table.add_row(vec!["dice".to_string(), settings.dice_count.to_string()]);
    table.add_row(vec!["sides".to_string(), settings.sides.to_string()]);
    table.add_row(vec!["spin".to_string(), settings.spin_cycles.to_string()]);
    table.add_row(vec!["jitter".to_string(), settings.jitter_degrees.to_string()]);
    table.add_row(vec!["free_stop".to_string(), settings.free_stop.to_string()]);
    println!("{table}");

    Ok(())
}
