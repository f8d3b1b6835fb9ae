use std::path::Path;

use colored::Colorize;
use serde_json::json;

use wk_core::RenderMode;
use wk_mechanics::OsEntropy;
use wk_motion::{Board, BoardConfig};

use crate::render::TerminalRenderer;

/// One-off overrides of the stored settings.
pub struct Overrides {
    pub count: Option<u32>,
    pub sides: Option<u32>,
    pub flat: bool,
    pub spin: Option<u32>,
    pub jitter: Option<f64>,
    pub free_stop: bool,
}

pub fn run(config_path: &Path, overrides: Overrides, json: bool) -> Result<(), String> {
    let (_, mut settings) = super::load_settings(config_path)?;

    if let Some(count) = overrides.count {
        settings.dice_count = count;
    }
    if let Some(sides) = overrides.sides {
        settings.sides = sides;
    }
    if overrides.flat {
        settings.mode = RenderMode::Flat;
    }
    if let Some(spin) = overrides.spin {
        settings.spin_cycles = spin;
    }
    if let Some(jitter) = overrides.jitter {
        settings.jitter_degrees = jitter;
    }
    if overrides.free_stop {
        settings.free_stop = true;
    }

    let mut board = Board::new(BoardConfig::from_settings(&settings)).map_err(|e| e.to_string())?;
    let mut renderer = TerminalRenderer::new(settings.theme, board.dice().len());

    let result = board
        .roll(&mut OsEntropy, &mut rand::rng(), &mut renderer)
        .map_err(|e| e.to_string())?;

    // A terminal has nothing to animate: every transition ends at once.
    for ticket in renderer.take_tickets() {
        board.complete(ticket, &mut renderer);
    }

    if json {
        let dice: Vec<_> = board
            .dice()
            .iter()
            .zip(renderer.views())
            .map(|(die, view)| {
                json!({
                    "index": die.index,
                    "face": die.face,
                    "mode": die.mode.to_string(),
                    "target": view.target,
                    "rest": view.rest,
                })
            })
            .collect();
        let out = json!({
            "dice": dice,
            "total": result.total(),
        });
        let text = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Roll".bold(),
        format!(
            "({} x d{}, {}, theme {})",
            board.dice().len(),
            board.config().sides,
            board.config().mode,
            settings.theme
        )
        .dimmed()
    );
    println!();

    for (die, view) in board.dice().iter().zip(renderer.views()) {
        let glyph = renderer.paint(&die.glyph());
        let face = view.face.unwrap_or(die.face);
        match (view.target, view.rest) {
            (Some(target), Some(rest)) => {
                println!("  die {}  {glyph}  {face:>3}", die.index + 1);
                println!("         animate  {}", target.css_transform());
                println!("         rest     {}", rest.css_transform().dimmed());
            }
            _ => println!("  die {}  {glyph}  {face:>3}", die.index + 1),
        }
    }

    println!();
    println!("  total: {}", result.total().to_string().bold());
    Ok(())
}
