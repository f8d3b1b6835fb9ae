//! CLI frontend for the Wuerfelwerk dice roller.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wk",
    about = "Wuerfelwerk: fair dice and the rotations that show them",
    version,
    propagate_version = true
)]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = "wuerfelwerk.json")]
    config: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the board once and print each die's face and rotation
    Roll {
        /// Number of dice (default: from settings)
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Faces per die (default: from settings)
        #[arg(short, long)]
        sides: Option<u32>,

        /// Draw flat dice instead of cubes
        #[arg(long)]
        flat: bool,

        /// Whole extra turns per animation
        #[arg(long)]
        spin: Option<u32>,

        /// Jitter span in degrees for free-stop landings
        #[arg(long)]
        jitter: Option<f64>,

        /// Land at a randomized offset instead of the exact face angles
        #[arg(long)]
        free_stop: bool,

        /// Print the roll as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tally many rolls of one die and test them for fairness
    Stats {
        /// Die to roll (d4, d6, d8, d10, d12, d20, d100, or dN)
        #[arg(short, long, default_value = "d6")]
        die: String,

        /// Number of rolls
        #[arg(short, long, default_value = "6000")]
        rolls: u64,

        /// Seed a reproducible ChaCha stream instead of the OS source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the cube orientation table
    Faces,

    /// Show the stored settings, or change them
    Config {
        /// Theme: light, dark, felt
        #[arg(long)]
        theme: Option<String>,

        /// Render mode: flat or volumetric
        #[arg(long)]
        mode: Option<String>,

        /// Number of dice
        #[arg(long)]
        dice: Option<u32>,

        /// Faces per die
        #[arg(long)]
        sides: Option<u32>,

        /// Whole extra turns per animation
        #[arg(long)]
        spin: Option<u32>,

        /// Jitter span in degrees
        #[arg(long)]
        jitter: Option<f64>,

        /// Free-stop landings (true or false)
        #[arg(long)]
        free_stop: Option<bool>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            count,
            sides,
            flat,
            spin,
            jitter,
            free_stop,
            json,
        } => commands::roll::run(
            &cli.config,
            commands::roll::Overrides {
                count,
                sides,
                flat,
                spin,
                jitter,
                free_stop,
            },
            json,
        ),
        Commands::Stats { die, rolls, seed } => commands::stats::run(&die, rolls, seed),
        Commands::Faces => commands::faces::run(),
        Commands::Config {
            theme,
            mode,
            dice,
            sides,
            spin,
            jitter,
            free_stop,
        } => commands::config::run(
            &cli.config,
            commands::config::Changes {
                theme,
                mode,
                dice,
                sides,
                spin,
                jitter,
                free_stop,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
