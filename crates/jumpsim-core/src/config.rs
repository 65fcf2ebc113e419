//! Configuration types for the simulation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest horizon or jump scale the engine accepts.
///
/// Reflection folds over `2 * horizon_size` and uniform jumps span
/// `2 * jump_scale`; both must stay finite.
pub const MAX_EXTENT: f64 = f64::MAX / 2.0;

/// Where creatures start when a population is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Every creature at `horizon_size / 2`
    #[default]
    Midpoint,
    /// Every creature at 0
    Origin,
    /// Uniform over `[0, horizon_size]`, drawn from the engine RNG
    Uniform,
}

/// Simulation parameters supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Iteration count at which a run is considered finished
    pub max_iterations: u64,
    /// Upper bound of the horizon `[0, horizon_size]`
    pub horizon_size: f64,
    /// Half-width of the uniform jump distribution
    pub jump_scale: f64,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Starting distribution of creatures
    pub initial_placement: Placement,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            horizon_size: 100.0,
            jump_scale: 1.0,
            seed: 0,
            initial_placement: Placement::Midpoint,
        }
    }
}

impl SimulationConfig {
    /// Reject parameters the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.horizon_size.is_finite() || self.horizon_size <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "horizon size must be a positive finite number, got {}",
                self.horizon_size
            )));
        }

        if self.horizon_size > MAX_EXTENT {
            return Err(Error::InvalidArgument(format!(
                "horizon size must not exceed {}, got {}",
                MAX_EXTENT, self.horizon_size
            )));
        }

        if self.max_iterations == 0 {
            return Err(Error::InvalidArgument(
                "max iterations must be at least 1".to_string(),
            ));
        }

        if !self.jump_scale.is_finite() || self.jump_scale < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "jump scale must be a non-negative finite number, got {}",
                self.jump_scale
            )));
        }

        if self.jump_scale > MAX_EXTENT {
            return Err(Error::InvalidArgument(format!(
                "jump scale must not exceed {}, got {}",
                MAX_EXTENT, self.jump_scale
            )));
        }

        Ok(())
    }

    /// Starting position for creatures under a deterministic placement
    pub fn fixed_start(&self) -> Option<f64> {
        match self.initial_placement {
            Placement::Midpoint => Some(self.horizon_size / 2.0),
            Placement::Origin => Some(0.0),
            Placement::Uniform => None,
        }
    }
}
