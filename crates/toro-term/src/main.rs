use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toro_engine::{KeyListener, LifeConfig, RunSummary, Simulation};

mod cli;
mod events;
mod render;

use cli::Cli;
use events::CrosstermEvents;
use render::{preflight, TermGuard, TermRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.into_config().context("invalid command line")?;
    let summary = run(&config)?;
    tracing::info!(
        frames = summary.frames,
        generation = %summary.last_rendered,
        "done"
    );
    Ok(())
}

/// Log to `log_file` if given, else to stderr. `RUST_LOG` overrides the
/// default `warn` filter.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
    Ok(())
}

/// Build the grid, take over the terminal and run until a key is pressed.
///
/// A random grid that cannot fit is rejected before any cell is
/// generated. The terminal is restored when this returns, before any
/// error is printed.
fn run(config: &LifeConfig) -> Result<RunSummary> {
    preflight(&config.source).context("cannot display the grid")?;
    let grid = config.load_grid().context("failed to build the initial grid")?;
    let _term = TermGuard::enter(grid.dimension()).context("cannot display the grid")?;
    let listener = KeyListener::spawn(CrosstermEvents).context("failed to start input thread")?;

    Simulation::new(grid, TermRenderer::new(io::stdout()), listener)
        .with_frame_delay(config.frame_delay)
        .run()
        .context("simulation failed")
}
