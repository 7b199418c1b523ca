//! Resolution of a story type's wiring attributes into configuration and
//! candidate steps.

use crate::annotations::WiredStory;
use crate::configuration::Configuration;
use crate::converters::ParameterConverters;
use crate::error::WiringError;
use crate::failures::FailureStrategy;
use crate::io::StoryLoader;
use crate::parsers::StepPatternParser;
use crate::registry::Registry;
use crate::reporters::ReporterBuilder;
use crate::steps::{CandidateSteps, StepsObject};
use crate::wiring::{TomlWiring, WiringLoader};

/// Resolves a story type's wiring attributes into a [`Configuration`] and a
/// list of [`CandidateSteps`].
///
/// A type that does not opt in — no configure marker, or no declared
/// locations — resolves to [`Configuration::most_useful`] and an empty
/// steps list. A type that does opt in has its locations bootstrapped into
/// a fresh [`Registry`] per call, and each configuration slot is resolved
/// independently: the container's declaration wins when present, the slot's
/// built-in default stands otherwise. Bootstrap failures propagate
/// untouched; defaults never paper over declared-but-broken wiring.
#[derive(Debug, Default)]
pub struct WiringBuilder<L = TomlWiring> {
    loader: L,
}

impl WiringBuilder<TomlWiring> {
    /// A builder over TOML wiring with no steps factories registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a steps factory on the underlying TOML wiring.
    #[must_use]
    pub fn with_steps<S, F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        S: StepsObject,
        F: Fn() -> S + 'static,
    {
        self.loader = self.loader.with_steps(name, factory);
        self
    }
}

impl<L: WiringLoader> WiringBuilder<L> {
    /// A builder over `loader`.
    #[must_use]
    pub fn with_loader(loader: L) -> Self {
        Self { loader }
    }

    /// The underlying wiring loader.
    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Builds the configuration declared by `S`'s wiring attributes.
    ///
    /// Every slot of the returned configuration is populated.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError`] only when declared wiring fails to
    /// bootstrap; absent declarations fall back to defaults silently.
    pub fn build_configuration<S: WiredStory>(&self) -> Result<Configuration, WiringError> {
        let Some(mut registry) = self.bootstrap::<S>()? else {
            return Ok(Configuration::most_useful());
        };
        let mut configuration = Configuration::most_useful();
        if let Some(strategy) = registry.take::<Box<dyn FailureStrategy>>() {
            configuration = configuration.with_failure_strategy(strategy);
        }
        if let Some(loader) = registry.take::<Box<dyn StoryLoader>>() {
            configuration = configuration.with_story_loader(loader);
        }
        if let Some(parser) = registry.take::<Box<dyn StepPatternParser>>() {
            configuration = configuration.with_step_pattern_parser(parser);
        }
        if let Some(converters) = registry.take::<ParameterConverters>() {
            configuration = configuration.with_parameter_converters(converters);
        }
        if let Some(reporter) = registry.take::<ReporterBuilder>() {
            configuration = configuration.with_story_reporter_builder(reporter);
        }
        Ok(configuration)
    }

    /// Builds the candidate steps declared by `S`'s wiring attributes, in
    /// container-declared order.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError`] only when declared wiring fails to
    /// bootstrap; a type that does not opt in yields an empty list.
    pub fn build_candidate_steps<S: WiredStory>(&self) -> Result<Vec<CandidateSteps>, WiringError> {
        let Some(mut registry) = self.bootstrap::<S>()? else {
            return Ok(Vec::new());
        };
        Ok(registry
            .take_all::<Box<dyn StepsObject>>()
            .into_iter()
            .map(CandidateSteps::new)
            .collect())
    }

    /// Bootstraps the container, or `None` when `S` does not opt in.
    ///
    /// The marker alone is not sufficient: a container only exists when the
    /// marker is present *and* at least one location is declared.
    fn bootstrap<S: WiredStory>(&self) -> Result<Option<Registry>, WiringError> {
        let locations = S::wiring_locations();
        if !S::configure() || locations.is_empty() {
            return Ok(None);
        }
        self.loader.load(locations).map(Some)
    }
}
