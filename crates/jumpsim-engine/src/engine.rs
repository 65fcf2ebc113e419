//! Simulation engine owning the creature population.

use crate::jump::{reflect, JumpPolicy, UniformJump};
use jumpsim_core::{EngineState, Error, PositionStats, Progress, Result, SimulationConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace, warn};

pub struct SimulationEngine {
    config: SimulationConfig,
    positions: Option<Vec<f64>>,
    iteration_count: u64,
    rng: ChaCha8Rng,
    jump: Box<dyn JumpPolicy>,
}

impl SimulationEngine {
    /// Create an engine that moves creatures with [`UniformJump`]
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let jump = UniformJump::new(config.jump_scale);
        Self::with_jump_policy(config, jump)
    }

    pub fn with_jump_policy(
        config: SimulationConfig,
        jump: impl JumpPolicy + 'static,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            positions: None,
            iteration_count: 0,
            jump: Box::new(jump),
        })
    }

    /// Replace the population with `count` creatures and reset the iteration counter.
    ///
    /// A negative count is rejected and leaves the engine untouched.
    #[instrument(skip(self), fields(horizon_size = self.config.horizon_size))]
    pub fn initialize(&mut self, count: i64) -> Result<()> {
        let count = usize::try_from(count).map_err(|_| {
            Error::InvalidArgument(format!("creature count must be >= 0, got {}", count))
        })?;

        if let Some(previous) = &self.positions {
            debug!(
                previous_count = previous.len(),
                iteration_count = self.iteration_count,
                "Re-initializing population"
            );
        }

        let positions = match self.config.fixed_start() {
            Some(start) => vec![start; count],
            None => {
                let horizon = self.config.horizon_size;
                (0..count).map(|_| self.rng.gen_range(0.0..=horizon)).collect()
            }
        };

        self.positions = Some(positions);
        self.iteration_count = 0;
        Ok(())
    }

    /// Overwrite the positions without any validation.
    ///
    /// Passing `None` returns the engine to [`EngineState::Uninitialized`].
    /// The iteration counter is left as it is.
    pub fn set_positions(&mut self, positions: Option<Vec<f64>>) {
        self.positions = positions;
    }

    /// Move every creature once and bump the iteration counter.
    ///
    /// # Panics
    ///
    /// Panics if no positions are present, or if a jump produces a
    /// non-finite position.
    pub fn advance_iteration(&mut self) -> Progress {
        let horizon = self.config.horizon_size;
        let snapshot = match self.positions.as_deref() {
            Some(positions) => positions,
            None => panic!(
                "advance_iteration called with no positions present; initialize the engine first"
            ),
        };

        if self.iteration_count >= self.config.max_iterations {
            warn!(
                iteration_count = self.iteration_count,
                max_iterations = self.config.max_iterations,
                "Advancing past the iteration limit"
            );
        }

        // All candidates come from the previous iteration's snapshot
        let jump = &mut self.jump;
        let rng = &mut self.rng;
        let next: Vec<f64> = (0..snapshot.len())
            .map(|i| {
                let candidate = snapshot[i] + jump.displacement(i, snapshot, rng);
                assert!(
                    candidate.is_finite(),
                    "creature {} jumped to non-finite position {}",
                    i,
                    candidate
                );
                reflect(candidate, horizon)
            })
            .collect();

        self.positions = Some(next);
        self.iteration_count += 1;

        trace!(iteration = self.iteration_count, "Iteration complete");

        if self.iteration_count >= self.config.max_iterations {
            Progress::Finished
        } else {
            Progress::Continue
        }
    }

    pub fn state(&self) -> EngineState {
        match self.positions {
            None => EngineState::Uninitialized,
            Some(_) if self.iteration_count >= self.config.max_iterations => EngineState::Finished,
            Some(_) => EngineState::Running,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == EngineState::Finished
    }

    pub fn positions(&self) -> Option<&[f64]> {
        self.positions.as_deref()
    }

    pub fn creature_count(&self) -> Option<usize> {
        self.positions.as_ref().map(Vec::len)
    }

    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    pub fn max_iterations(&self) -> u64 {
        self.config.max_iterations
    }

    pub fn horizon_size(&self) -> f64 {
        self.config.horizon_size
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Summary of the current positions, if any creatures exist
    pub fn stats(&self) -> Option<PositionStats> {
        self.positions().and_then(PositionStats::from_positions)
    }
}
