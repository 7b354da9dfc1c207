//! Pipeline phase tracking
//!
//! A run is a fixed sequence: ensure-tool -> generate -> rename. The state
//! rejects out-of-order transitions and records the failure message when a
//! run aborts. `completed` and `failed` are terminal; re-running the tool
//! is the only recovery path.

use std::time::{Duration, Instant};

use crate::error::PipelineError;

/// Discrete phases of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Tool archive presence check, fetching it if absent
    EnsureTool,

    /// Generator invocation against the grammar
    Generate,

    /// Renames to the canonical output names
    Rename,

    /// Run finished, canonical outputs installed
    Completed,

    /// Run aborted, error recorded
    Failed,
}

impl Phase {
    /// Get the human-readable name for this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::EnsureTool => "ensure-tool",
            Phase::Generate => "generate",
            Phase::Rename => "rename",
            Phase::Completed => "completed",
            Phase::Failed => "failed",
        }
    }

    /// Get all valid phase transitions FROM this phase.
    pub fn valid_next_phases(&self) -> Vec<Phase> {
        match self {
            Phase::EnsureTool => vec![Phase::Generate, Phase::Failed],
            Phase::Generate => vec![Phase::Rename, Phase::Failed],
            Phase::Rename => vec![Phase::Completed, Phase::Failed],
            // Terminal: no retries, no recovery transition.
            Phase::Completed => vec![],
            Phase::Failed => vec![],
        }
    }

    /// Check if a transition to the given phase is valid.
    pub fn can_transition_to(&self, next: Phase) -> bool {
        self.valid_next_phases().contains(&next)
    }

    /// Whether the run is over in this phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Completed | Phase::Failed)
    }
}

/// Execution state for a single run.
#[derive(Debug, Clone)]
pub struct PipelineState {
    phase: Phase,
    error: Option<String>,
    started: Instant,
}

impl PipelineState {
    /// Create the state for a fresh run, starting at the ensure-tool phase.
    pub fn new() -> Self {
        PipelineState {
            phase: Phase::EnsureTool,
            error: None,
            started: Instant::now(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Error recorded by a failed run, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Time elapsed since the run started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Attempt to transition to the next phase.
    pub fn transition_to(&mut self, next: Phase) -> Result<(), PipelineError> {
        if !self.phase.can_transition_to(next) {
            return Err(PipelineError::PhaseTransition {
                from: self.phase.as_str(),
                to: next.as_str(),
            });
        }
        self.phase = next;
        Ok(())
    }

    /// Record an error and mark the run failed.
    pub fn record_failure(&mut self, error: &PipelineError) {
        self.error = Some(error.to_string());
        self.phase = Phase::Failed;
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::new()
    }
}
