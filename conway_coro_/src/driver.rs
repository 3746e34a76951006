// driver.rs - Text-mode loop: dump, wait, step, until quit

use std::io::Write;

use anyhow::Context;
use conway::Simulation;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::coro;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    GenerationLimit,
    Cycle,
}

/// Prints every generation to `out` until Ctrl-C, the generation limit, or
/// (with `stop_on_cycle`) a repeated state. Quitting only ever happens
/// between generations.
pub async fn run_text(
    config: &SimConfig,
    sim: &mut Simulation,
    out: &mut impl Write,
) -> anyhow::Result<StopReason> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let reason = loop {
        write_generation(sim, out)?;

        if config.generation_limit.is_some_and(|limit| sim.generation() >= limit) {
            break StopReason::GenerationLimit;
        }
        if config.stop_on_cycle && sim.is_cycling() {
            break StopReason::Cycle;
        }

        tokio::select! {
            res = &mut ctrl_c => {
                res.context("listening for ctrl-c")?;
                break StopReason::Quit;
            }
            _ = tokio::time::sleep(config.interval) => {}
        }

        let next = coro::step_rows(sim.engine(), sim.grid()).await?;
        sim.commit(next)?;
        debug!(generation = sim.generation(), population = sim.population(), "advanced");
    };

    info!(?reason, generation = sim.generation(), "simulation stopped");
    Ok(reason)
}

fn write_generation(sim: &Simulation, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "generation {} (population {})", sim.generation(), sim.population())?;
    writeln!(out, "{}", sim.grid())?;
    out.flush().context("flushing text dump")
}
