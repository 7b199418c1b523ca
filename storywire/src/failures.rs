//! Failure strategies applied when a step reports an error.

use std::fmt;

use thiserror::Error;

/// A failed step, carrying the step text and the cause its body reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("step '{step}' failed: {cause}")]
pub struct StepFailure {
    step: String,
    cause: String,
}

impl StepFailure {
    /// Records a failure of `step` with the given `cause`.
    #[must_use]
    pub fn new(step: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            cause: cause.into(),
        }
    }

    /// The step text that failed.
    #[must_use]
    pub fn step(&self) -> &str {
        &self.step
    }

    /// The cause reported by the step body.
    #[must_use]
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Decides whether a step failure stops the run or is recorded and absorbed.
pub trait FailureStrategy: fmt::Debug {
    /// Handles `failure`, returning it when the run should stop.
    ///
    /// # Errors
    ///
    /// Returns the failure back to the caller when the strategy propagates
    /// it.
    fn handle_failure(&self, failure: StepFailure) -> Result<(), StepFailure>;
}

/// Propagates every failure to the caller. The built-in default.
#[derive(Debug, Default, Clone, Copy)]
pub struct RethrowingFailure;

impl FailureStrategy for RethrowingFailure {
    fn handle_failure(&self, failure: StepFailure) -> Result<(), StepFailure> {
        Err(failure)
    }
}

/// Absorbs every failure, recording it at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentlyAbsorbingFailure;

impl FailureStrategy for SilentlyAbsorbingFailure {
    fn handle_failure(&self, failure: StepFailure) -> Result<(), StepFailure> {
        tracing::debug!(
            step = failure.step(),
            cause = failure.cause(),
            "absorbed step failure"
        );
        Ok(())
    }
}
