use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use lifegrid_common::{CellPos, SimConfig};
use lifegrid_input::{FrameInput, Intent};
use lifegrid_kernel::Pattern;
use lifegrid_render::{Renderer, TextRenderer, status_text};
use lifegrid_session::Session;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lifegrid-cli", about = "Headless driver for the lifegrid simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file with simulation settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the number of grid rows
    #[arg(long, global = true)]
    rows: Option<usize>,

    /// Override the number of grid columns
    #[arg(long, global = true)]
    cols: Option<usize>,

    /// Override the initial seconds between generations
    #[arg(long, global = true)]
    tick_delay: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the effective configuration
    Info,
    /// List the built-in patterns
    Patterns,
    /// Seed a pattern and run a fixed number of frames
    Run {
        /// Pattern to place before starting
        #[arg(short, long, default_value = "glider")]
        pattern: String,
        /// Row of the pattern's top-left cell (centered if omitted)
        #[arg(long)]
        row: Option<usize>,
        /// Column of the pattern's top-left cell (centered if omitted)
        #[arg(long)]
        col: Option<usize>,
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016")]
        dt: f64,
        /// Speed-up requests issued on the first frame
        #[arg(long, default_value = "0")]
        speed_up: u32,
        /// Slow-down requests issued on the first frame
        #[arg(long, default_value = "0")]
        slow_down: u32,
        /// Print the grid every N frames (only the final frame if omitted)
        #[arg(long)]
        print_every: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Info => {
            println!("lifegrid-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Patterns => {
            for p in Pattern::ALL {
                let (rows, cols) = p.extent();
                println!("{:<12} {rows}x{cols}, {} cells", p.name(), p.cells().len());
            }
        }
        Commands::Run {
            pattern,
            row,
            col,
            frames,
            dt,
            speed_up,
            slow_down,
            print_every,
        } => {
            let pattern = Pattern::from_name(&pattern)
                .with_context(|| format!("unknown pattern {pattern:?}"))?;
            let (p_rows, p_cols) = pattern.extent();
            let origin = CellPos::new(
                row.unwrap_or(config.rows.saturating_sub(p_rows) / 2),
                col.unwrap_or(config.cols.saturating_sub(p_cols) / 2),
            );

            let mut session = Session::new(&config)?;
            session
                .stamp(pattern, origin)
                .with_context(|| format!("placing {pattern} at {origin}"))?;
            tracing::info!(%pattern, %origin, frames, dt, "starting run");

            let mut input = FrameInput::new(dt).with(Intent::TogglePause);
            for _ in 0..speed_up {
                input.push(Intent::SpeedUp);
            }
            for _ in 0..slow_down {
                input.push(Intent::SlowDown);
            }

            let renderer = TextRenderer::new();
            for frame in 1..=frames {
                let report = session.run_frame(&input);
                if frame == 1 {
                    if report.ignored > 0 {
                        tracing::warn!(ignored = report.ignored, "some startup intents were dropped");
                    }
                    input.intents.clear();
                }
                if print_every.is_some_and(|n| n > 0 && frame % n == 0) {
                    println!("--- frame {frame} ---");
                    print!("{}", renderer.render(&session));
                }
            }

            if print_every.is_none() {
                print!("{}", renderer.render(&session));
            }
            let grid = session.grid();
            println!(
                "frames={frames} generation={} population={} status={} hash={:#x}",
                grid.generation(),
                grid.population(),
                status_text(session.clock()),
                grid.state_hash()
            );
        }
    }

    Ok(())
}

/// Defaults, then the optional JSON file, then command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(tick_delay) = cli.tick_delay {
        config.tick_delay = tick_delay;
    }
    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<SimConfig> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
