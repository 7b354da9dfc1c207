//! Sequential pipeline over the three generation steps
//!
//! Ensure the tool archive, run the generator, install the outputs, in
//! that order, with abort-on-first-failure semantics: the first failing
//! step ends the run, the error is recorded in the pipeline state, and
//! nothing is cleaned up. Re-running is the recovery path; every step
//! overwrites whatever a previous run left behind.

pub mod state;

use crate::error::Result;
use crate::fetch::{self, FetchOutcome};
use crate::generate;
use crate::outputs;
use crate::workspace::{Workspace, CANONICAL_LEXER, CANONICAL_PARSER, TOOL_ARCHIVE};

pub use state::{Phase, PipelineState};

/// Drives one generation run against a workspace.
pub struct Orchestrator {
    workspace: Workspace,
    state: PipelineState,
}

impl Orchestrator {
    /// Create an orchestrator for a fresh run, starting at the
    /// ensure-tool phase.
    pub fn new(workspace: Workspace) -> Self {
        Orchestrator {
            workspace,
            state: PipelineState::new(),
        }
    }

    /// Workspace the run operates on.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Phase and failure tracking for this run.
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Execute the full pipeline.
    pub async fn run(&mut self) -> Result<()> {
        log::info!(
            "Starting parser generation in {}",
            self.workspace.root().display()
        );
        match self.run_pipeline().await {
            Ok(()) => {
                log::info!(
                    "Parser generation finished in {:.1}s",
                    self.state.elapsed().as_secs_f64()
                );
                Ok(())
            }
            Err(e) => {
                let phase = self.state.phase();
                self.state.record_failure(&e);
                log::error!(
                    "Parser generation failed in the {} phase: {}",
                    phase.as_str(),
                    e
                );
                Err(e)
            }
        }
    }

    async fn run_pipeline(&mut self) -> Result<()> {
        match fetch::ensure_tool_archive(&self.workspace).await? {
            FetchOutcome::Cached => {
                log::info!(
                    "Tool archive {} already present, skipping download",
                    TOOL_ARCHIVE
                )
            }
            FetchOutcome::Downloaded => {}
        }

        self.state.transition_to(Phase::Generate)?;
        generate::run_generator(&self.workspace).await?;

        self.state.transition_to(Phase::Rename)?;
        outputs::install_outputs(&self.workspace)?;

        self.state.transition_to(Phase::Completed)?;
        log::info!("{} and {} are ready", CANONICAL_LEXER, CANONICAL_PARSER);
        Ok(())
    }
}
