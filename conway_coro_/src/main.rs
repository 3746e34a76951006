// main.rs - Cellular automaton driver: text dump or window, stepped by row coroutines

use anyhow::Context;
use clap::Parser;
use conway::Simulation;
use tracing::info;

mod config;    // CLI options and validated settings
mod coro;      // Row coroutines
mod driver;    // Text-mode loop
mod telemetry; // Tracing setup
mod ui;        // eframe window

use config::{Args, Mode};

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Args::parse().into_config()?;
    let mut rng = config.rng();
    let grid = config.initial_grid(&mut rng)?;
    let mut sim = Simulation::new(grid, config.engine);

    info!(
        mode = ?config.mode,
        rule = %config.engine.rule(),
        boundary = config.engine.policy().name(),
        interval_ms = config.interval.as_millis() as u64,
        "starting simulation"
    );

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    match config.mode {
        Mode::Text => {
            let mut stdout = std::io::stdout();
            runtime.block_on(driver::run_text(&config, &mut sim, &mut stdout))?;
            Ok(())
        }
        Mode::Window => ui::run_window(config, sim, runtime, rng),
    }
}
