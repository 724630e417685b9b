//! Workout report driver.
//!
//! Runs the built-in demo packages (or a JSON package file) through the
//! dispatcher and prints one summary per workout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use workout_core::cli::{run_packages, OutputFormat};
use workout_core::storage::{demo_packages, load_packages};

#[derive(Parser)]
#[command(name = "workout-report", version, about = "Print distance, speed and calories per workout")]
struct Args {
    /// JSON array of packages: [{"code": "RUN", "params": [15000, 1, 75]}, ...]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit one JSON object per summary instead of the text line
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let packages = match &args.input {
        Some(path) => load_packages(path)
            .with_context(|| format!("failed to read packages from {}", path.display()))?,
        None => demo_packages(),
    };

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_packages(&packages, format, &mut out)
}
