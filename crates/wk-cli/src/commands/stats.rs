use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wk_mechanics::{DicePool, DieKind, EntropySource, FaceTally, OsEntropy, SeededEntropy};

/// One-sided tail used for the fairness verdict (p ~ 0.001).
const VERDICT_Z: f64 = 3.09;

pub fn run(die: &str, rolls: u64, seed: Option<u64>) -> Result<(), String> {
    let kind = DieKind::from_str_tag(die).ok_or_else(|| format!("unknown die: \"{die}\""))?;
    if rolls == 0 {
        return Err("rolls must be at least 1".into());
    }

    let mut entropy: Box<dyn EntropySource> = match seed {
        Some(seed) => Box::new(SeededEntropy::from_seed(seed)),
        None => Box::new(OsEntropy),
    };

    let pool = DicePool::new().add(kind, 1);
    let mut tally = FaceTally::new(kind.sides()).map_err(|e| e.to_string())?;
    for _ in 0..rolls {
        let roll = pool.roll(entropy.as_mut()).map_err(|e| e.to_string())?;
        tally.record_roll(&roll).map_err(|e| e.to_string())?;
    }
    tracing::debug!(%kind, rolls, "tallied rolls");

    let source = match seed {
        Some(seed) => format!("seed={seed}"),
        None => "os entropy".to_string(),
    };
    println!(
        "  {} {}",
        "Statistics".bold(),
        format!("({rolls} x {kind}, {source})").dimmed()
    );
    println!();

    let expected = 1.0 / f64::from(kind.sides());
    let peak = tally.counts().iter().copied().max().unwrap_or(0).max(1);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Count", "Share", "Histogram"]);
    for face in 1..=kind.sides() {
        let count = tally.count(face);
        let width = (count * 30 / peak) as usize;
        table.add_row(vec![
            face.to_string(),
            count.to_string(),
            format!("{:.2}%", tally.frequency(face) * 100.0),
            "#".repeat(width),
        ]);
    }
    println!("{table}");
    println!();

    let chi = tally.chi_square();
    let critical = tally.critical_value(VERDICT_Z);
    println!(
        "  expected share {:.2}%, chi-square {chi:.2} (df {}, critical {critical:.2})",
        expected * 100.0,
        tally.degrees_of_freedom()
    );
    if tally.is_plausibly_uniform(VERDICT_Z) {
        println!("  {}", "consistent with a fair die".green());
    } else {
        println!("  {}", "NOT consistent with a fair die".red().bold());
    }

    Ok(())
}
