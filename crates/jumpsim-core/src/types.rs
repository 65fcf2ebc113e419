//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of an engine.
///
/// `Finished` is observed, not enforced: an engine that has reached its
/// iteration limit can still be stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No positions present; stepping is a contract violation
    Uninitialized,
    /// Positions present and the iteration limit not yet reached
    Running,
    /// Positions present and the iteration limit reached
    Finished,
}

/// Signal returned from a single iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    Continue,
    Finished,
}

impl Progress {
    pub fn is_finished(&self) -> bool {
        matches!(self, Progress::Finished)
    }
}
