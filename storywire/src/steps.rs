//! Steps objects and their candidate wrappers.
//!
//! A steps object is a user-defined collection of steps. The wiring builder
//! wraps each object resolved from a container in [`CandidateSteps`],
//! preserving the container's declaration order; matching and execution
//! belong to the step-matching pipeline, not to this crate.

use std::any::Any;
use std::fmt;

/// The step kinds a candidate can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// A precondition step.
    Given,
    /// An action step.
    When,
    /// An outcome step.
    Then,
}

/// One step a steps object offers to the matching pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCandidate {
    kind: StepKind,
    pattern: String,
}

impl StepCandidate {
    /// A candidate of the given kind matching `pattern`.
    #[must_use]
    pub fn new(kind: StepKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    /// The candidate's step kind.
    #[must_use]
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// The candidate's step pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// A user-defined collection of steps.
pub trait StepsObject: Any + fmt::Debug {
    /// The steps this object offers, in declaration order.
    fn candidates(&self) -> Vec<StepCandidate>;
}

/// Wraps one steps object resolved from wiring, preserving container order.
#[derive(Debug)]
pub struct CandidateSteps {
    object: Box<dyn StepsObject>,
}

impl CandidateSteps {
    /// Wraps `object`.
    #[must_use]
    pub fn new(object: Box<dyn StepsObject>) -> Self {
        Self { object }
    }

    /// The wrapped steps object.
    #[must_use]
    pub fn object(&self) -> &dyn StepsObject {
        self.object.as_ref()
    }

    /// The wrapped object downcast to its concrete type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let object: &dyn Any = self.object.as_ref();
        object.downcast_ref()
    }

    /// Candidates offered by the wrapped object, in declaration order.
    #[must_use]
    pub fn candidates(&self) -> Vec<StepCandidate> {
        self.object.candidates()
    }
}
