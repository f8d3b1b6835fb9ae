pub mod config;
pub mod faces;
pub mod roll;
pub mod stats;

use std::path::Path;

use wk_core::{JsonFileStore, Settings};

/// Open the settings file and load what it holds.
fn load_settings(path: &Path) -> Result<(JsonFileStore, Settings), String> {
    let store = JsonFileStore::new(path);
    let settings = Settings::load(&store).map_err(|e| e.to_string())?;
    Ok((store, settings))
}
