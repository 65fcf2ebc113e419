//! Drives a single jumping creatures run and writes the result as JSON.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use config::RunnerConfig;
use jumpsim_engine::RunRequest;
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    let config = RunnerConfig::load(std::env::args().nth(1))?;

    telemetry::init_telemetry(config.json_logs)?;

    info!(
        creature_count = config.creature_count,
        max_iterations = config.simulation.max_iterations,
        horizon_size = config.simulation.horizon_size,
        seed = config.simulation.seed,
        "Starting jumpsim runner"
    );

    let mut request = RunRequest::new(config.simulation.clone(), config.creature_count);
    if config.record_trajectory {
        request = request.with_trajectory();
    }

    let result = request.execute().context("simulation run failed")?;
    let json = result.to_json()?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing result to {}", path.display()))?;
            info!("Result written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
