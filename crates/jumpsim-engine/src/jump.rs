//! Movement rules applied to creatures each iteration.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Produces the displacement of one creature for one iteration.
///
/// `snapshot` holds every creature's position as of the previous iteration;
/// the creature being moved is `snapshot[index]`. The returned displacement
/// is added to that position and the result reflected into the horizon.
pub trait JumpPolicy: Send {
    fn displacement(&mut self, index: usize, snapshot: &[f64], rng: &mut ChaCha8Rng) -> f64;
}

impl<F> JumpPolicy for F
where
    F: FnMut(usize, &[f64], &mut ChaCha8Rng) -> f64 + Send,
{
    fn displacement(&mut self, index: usize, snapshot: &[f64], rng: &mut ChaCha8Rng) -> f64 {
        self(index, snapshot, rng)
    }
}

/// Displacement drawn uniformly from `[-scale, scale]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformJump {
    scale: f64,
}

impl UniformJump {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl JumpPolicy for UniformJump {
    fn displacement(&mut self, _index: usize, _snapshot: &[f64], rng: &mut ChaCha8Rng) -> f64 {
        if self.scale == 0.0 {
            return 0.0;
        }
        // Sampling on the unit interval keeps the range width finite for any scale
        self.scale * rng.gen_range(-1.0f64..=1.0)
    }
}

/// Bounce a candidate position off the edges of `[0, horizon]`.
///
/// A single overshoot is mirrored off the nearer edge. Anything further out
/// is folded with period `2 * horizon`, so a jump longer than the horizon
/// bounces as many times as it needs to.
pub fn reflect(candidate: f64, horizon: f64) -> f64 {
    if (0.0..=horizon).contains(&candidate) {
        return candidate;
    }

    let bounced = if candidate < 0.0 {
        -candidate
    } else {
        horizon - (candidate - horizon)
    };
    if (0.0..=horizon).contains(&bounced) {
        return bounced;
    }

    let period = 2.0 * horizon;
    let folded = candidate.rem_euclid(period);
    if folded <= horizon {
        folded
    } else {
        period - folded
    }
}
