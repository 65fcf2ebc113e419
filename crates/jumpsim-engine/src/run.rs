//! A complete simulation run, from request to serializable result.

use crate::engine::SimulationEngine;
use crate::jump::JumpPolicy;
use chrono::{DateTime, Utc};
use jumpsim_core::{PositionStats, Result, RunId, SimulationConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A run that any driver can execute to completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub run_id: RunId,
    pub config: SimulationConfig,
    pub creature_count: i64,
    /// Record position statistics after every iteration
    pub record_trajectory: bool,
}

impl RunRequest {
    pub fn new(config: SimulationConfig, creature_count: i64) -> Self {
        Self {
            run_id: RunId::new(),
            config,
            creature_count,
            record_trajectory: false,
        }
    }

    pub fn with_trajectory(mut self) -> Self {
        self.record_trajectory = true;
        self
    }

    /// Execute this run with the default uniform jump
    #[instrument(skip(self), fields(run_id = %self.run_id, creature_count = self.creature_count))]
    pub fn execute(self) -> Result<RunResult> {
        let engine = SimulationEngine::new(self.config.clone())?;
        self.drive(engine)
    }

    /// Execute this run with a caller-supplied jump policy
    #[instrument(skip(self, jump), fields(run_id = %self.run_id, creature_count = self.creature_count))]
    pub fn execute_with_policy(self, jump: impl JumpPolicy + 'static) -> Result<RunResult> {
        let engine = SimulationEngine::with_jump_policy(self.config.clone(), jump)?;
        self.drive(engine)
    }

    fn drive(self, mut engine: SimulationEngine) -> Result<RunResult> {
        let started_at = Utc::now();
        engine.initialize(self.creature_count)?;

        info!(
            "Starting run for {} iterations on horizon [0, {}]",
            engine.max_iterations(),
            engine.horizon_size()
        );

        let mut trajectory = Vec::new();
        loop {
            let progress = engine.advance_iteration();

            if self.record_trajectory {
                if let Some(stats) = engine.stats() {
                    trajectory.push(stats);
                }
            }

            if progress.is_finished() {
                break;
            }
        }

        let final_positions = engine.positions().map(<[f64]>::to_vec).unwrap_or_default();
        let final_stats = PositionStats::from_positions(&final_positions);

        let result = RunResult {
            run_id: self.run_id,
            config: self.config,
            creature_count: final_positions.len(),
            iterations: engine.iteration_count(),
            final_positions,
            final_stats,
            trajectory,
            started_at,
            finished_at: Utc::now(),
        };
        result.emit_summary();

        Ok(result)
    }
}

/// Outcome of a finished run, ready for a statistics or persistence consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub run_id: RunId,
    pub config: SimulationConfig,
    pub creature_count: usize,
    pub iterations: u64,
    pub final_positions: Vec<f64>,
    pub final_stats: Option<PositionStats>,
    /// Per-iteration statistics; empty unless recording was requested or
    /// when the population is empty
    pub trajectory: Vec<PositionStats>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunResult {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn emit_summary(&self) {
        let elapsed_ms = (self.finished_at - self.started_at).num_milliseconds();

        match &self.final_stats {
            Some(stats) => info!(
                event = "run_summary",
                run_id = %self.run_id,
                iterations = self.iterations,
                creature_count = self.creature_count,
                mean_position = stats.mean,
                min_position = stats.min,
                max_position = stats.max,
                std_dev = stats.std_dev,
                elapsed_ms,
                "Run complete"
            ),
            None => info!(
                event = "run_summary",
                run_id = %self.run_id,
                iterations = self.iterations,
                creature_count = 0,
                elapsed_ms,
                "Run complete with an empty population"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpsim_core::{Error, Placement};
    use rand_chacha::ChaCha8Rng;

    fn test_config() -> SimulationConfig {
        SimulationConfig {
            max_iterations: 50,
            seed: 7,
            jump_scale: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_execute_runs_to_limit() {
        let result = RunRequest::new(test_config(), 5).execute().unwrap();

        assert_eq!(result.iterations, 50);
        assert_eq!(result.creature_count, 5);
        assert_eq!(result.final_positions.len(), 5);
        assert!(result.trajectory.is_empty());
        assert!(result
            .final_positions
            .iter()
            .all(|x| (0.0..=100.0).contains(x)));
        assert!(result.finished_at >= result.started_at);
    }

    #[test]
    fn test_execute_records_trajectory() {
        let result = RunRequest::new(test_config(), 8)
            .with_trajectory()
            .execute()
            .unwrap();

        assert_eq!(result.trajectory.len(), 50);
        assert_eq!(result.trajectory.last(), result.final_stats.as_ref());
        assert!(result.trajectory.iter().all(|s| s.count == 8));
    }

    #[test]
    fn test_execute_rejects_negative_count() {
        let result = RunRequest::new(test_config(), -3).execute();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_execute_rejects_invalid_config() {
        let config = SimulationConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(RunRequest::new(config, 1).execute().is_err());
    }

    #[test]
    fn test_empty_population() {
        let result = RunRequest::new(test_config(), 0)
            .with_trajectory()
            .execute()
            .unwrap();

        assert_eq!(result.iterations, 50);
        assert_eq!(result.creature_count, 0);
        assert!(result.final_stats.is_none());
        assert!(result.trajectory.is_empty());
    }

    #[test]
    fn test_same_request_same_positions() {
        let config = SimulationConfig {
            initial_placement: Placement::Uniform,
            ..test_config()
        };
        let request = RunRequest::new(config, 12);

        let a = request.clone().execute().unwrap();
        let b = request.execute().unwrap();

        assert_eq!(a.run_id, b.run_id);
        assert_eq!(a.final_positions, b.final_positions);
    }

    #[test]
    fn test_execute_with_policy() {
        let drift = |_: usize, _: &[f64], _: &mut ChaCha8Rng| 1.0;
        let config = SimulationConfig {
            max_iterations: 10,
            initial_placement: Placement::Origin,
            ..Default::default()
        };

        let result = RunRequest::new(config, 3).execute_with_policy(drift).unwrap();

        assert_eq!(result.final_positions, vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_result_bytes() {
        let result = RunRequest::new(test_config(), 4)
            .with_trajectory()
            .execute()
            .unwrap();

        let bytes = result.to_bytes().unwrap();
        let restored = RunResult::from_bytes(&bytes).unwrap();

        assert_eq!(restored, result);
        assert!(RunResult::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn test_result_json() {
        let result = RunRequest::new(test_config(), 2).execute().unwrap();
        let json = result.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["iterations"], 50);
        assert_eq!(value["config"]["initial_placement"], "midpoint");
    }
}
