//! Summary statistics over creature positions.

use serde::{Deserialize, Serialize};

/// Distribution of positions at one point in a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl PositionStats {
    /// Summarize a positions slice. Returns `None` for an empty population.
    pub fn from_positions(positions: &[f64]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }

        let count = positions.len();
        let n = count as f64;
        let mean = positions.iter().sum::<f64>() / n;
        let variance = positions.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let min = positions.iter().copied().fold(f64::INFINITY, f64::min);
        let max = positions.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }

    /// Width of the occupied interval
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}
