use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use snake_world::game::WorldConfig;
use snake_world::modes::{HeadlessMode, HumanMode, headless::parse_moves};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_world")]
#[command(version, about = "Grid snake simulation")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON world configuration; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width (the grid is square)
    #[arg(long)]
    width: Option<usize>,

    /// Cell index of the snake's head at start
    #[arg(long)]
    start_index: Option<usize>,

    /// Initial snake length
    #[arg(long)]
    start_length: Option<usize>,

    /// Seed for reward placement [default: random]
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks (human mode)
    #[arg(long, default_value = "200")]
    tick_ms: u64,

    /// Tick limit (headless mode)
    #[arg(long, default_value = "1000")]
    ticks: u64,

    /// Move script, one of u/d/l/r/. per tick (headless mode)
    #[arg(long, default_value = "")]
    moves: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file (human mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Run a scripted game and print the result
    Headless,
}

impl Cli {
    fn world_config(&self) -> Result<WorldConfig> {
        let mut config = match &self.config {
            Some(path) => WorldConfig::from_json_file(path)?,
            None => WorldConfig::default(),
        };

        if let Some(width) = self.width {
            // A new width recenters the head unless one is given
            config.width = width;
            config.start_index = WorldConfig::new(width).start_index;
        }
        if let Some(start_index) = self.start_index {
            config.start_index = start_index;
        }
        if let Some(start_length) = self.start_length {
            config.start_length = start_length;
        }
        // The host supplies the randomness unless a seed is pinned
        config.seed = match self.seed {
            Some(seed) => seed,
            None if self.config.is_some() => config.seed,
            None => rand::random(),
        };

        config.validate().context("Invalid world configuration")?;
        Ok(config)
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if to_stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        // The terminal belongs to the game screen
        None => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let headless = matches!(cli.mode, Mode::Headless);
    init_logging(cli.verbose, cli.log_file.as_deref(), headless)?;

    let config = cli.world_config()?;
    tracing::info!(?config, "starting");

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(&config, Duration::from_millis(cli.tick_ms))?;
            human_mode.run().await?;
        }
        Mode::Headless => {
            let moves = parse_moves(&cli.moves).context("Failed to parse move script")?;
            let mut headless_mode = HeadlessMode::new(&config, moves, cli.ticks)?;
            let world = headless_mode.run();

            println!("{}", world.status_info());
            println!(
                "ticks={} length={} head={} body={:?}",
                world.tick_count(),
                world.body_length(),
                world.head_index(),
                world.body_indices()
            );
        }
    }

    Ok(())
}
