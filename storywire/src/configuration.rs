//! The configuration aggregate consumed by a story run.

use crate::converters::ParameterConverters;
use crate::failures::{FailureStrategy, RethrowingFailure};
use crate::io::{LoadFromFs, StoryLoader};
use crate::parsers::{RegexPrefixCapturingParser, StepPatternParser};
use crate::reporters::ReporterBuilder;

/// Aggregates every collaborator a story run needs.
///
/// Every slot is always populated. [`Configuration::most_useful`] supplies
/// the built-in defaults and the wiring builder overrides slots
/// independently, so a partially wired container still yields a complete
/// configuration.
#[derive(Debug)]
pub struct Configuration {
    failure_strategy: Box<dyn FailureStrategy>,
    story_loader: Box<dyn StoryLoader>,
    step_pattern_parser: Box<dyn StepPatternParser>,
    parameter_converters: ParameterConverters,
    story_reporter_builder: ReporterBuilder,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::most_useful()
    }
}

impl Configuration {
    /// The built-in defaults used when nothing is declared: rethrowing
    /// failures, filesystem story loading, `$`-prefixed step patterns, the
    /// standard converter chain, and the default reporter settings.
    #[must_use]
    pub fn most_useful() -> Self {
        Self {
            failure_strategy: Box::new(RethrowingFailure),
            story_loader: Box::new(LoadFromFs),
            step_pattern_parser: Box::new(RegexPrefixCapturingParser::default()),
            parameter_converters: ParameterConverters::new(),
            story_reporter_builder: ReporterBuilder::default(),
        }
    }

    /// Replaces the failure strategy.
    #[must_use]
    pub fn with_failure_strategy(mut self, failure_strategy: Box<dyn FailureStrategy>) -> Self {
        self.failure_strategy = failure_strategy;
        self
    }

    /// Replaces the story loader.
    #[must_use]
    pub fn with_story_loader(mut self, story_loader: Box<dyn StoryLoader>) -> Self {
        self.story_loader = story_loader;
        self
    }

    /// Replaces the step pattern parser.
    #[must_use]
    pub fn with_step_pattern_parser(
        mut self,
        step_pattern_parser: Box<dyn StepPatternParser>,
    ) -> Self {
        self.step_pattern_parser = step_pattern_parser;
        self
    }

    /// Replaces the parameter converter chain.
    #[must_use]
    pub fn with_parameter_converters(mut self, parameter_converters: ParameterConverters) -> Self {
        self.parameter_converters = parameter_converters;
        self
    }

    /// Replaces the reporter settings.
    #[must_use]
    pub fn with_story_reporter_builder(mut self, story_reporter_builder: ReporterBuilder) -> Self {
        self.story_reporter_builder = story_reporter_builder;
        self
    }

    /// The failure strategy in effect.
    #[must_use]
    pub fn failure_strategy(&self) -> &dyn FailureStrategy {
        self.failure_strategy.as_ref()
    }

    /// The story loader in effect.
    #[must_use]
    pub fn story_loader(&self) -> &dyn StoryLoader {
        self.story_loader.as_ref()
    }

    /// The step pattern parser in effect.
    #[must_use]
    pub fn step_pattern_parser(&self) -> &dyn StepPatternParser {
        self.step_pattern_parser.as_ref()
    }

    /// The parameter converter chain in effect.
    #[must_use]
    pub fn parameter_converters(&self) -> &ParameterConverters {
        &self.parameter_converters
    }

    /// The reporter settings in effect.
    #[must_use]
    pub fn story_reporter_builder(&self) -> &ReporterBuilder {
        &self.story_reporter_builder
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use crate::failures::{SilentlyAbsorbingFailure, StepFailure};
    use crate::reporters::ReporterBuilder;

    #[test]
    fn most_useful_populates_every_slot() {
        let configuration = Configuration::most_useful();
        let debug = format!("{configuration:?}");
        assert!(debug.contains("RethrowingFailure"), "got: {debug}");
        assert!(debug.contains("LoadFromFs"), "got: {debug}");
        assert!(
            debug.contains("RegexPrefixCapturingParser"),
            "got: {debug}"
        );
        assert_eq!(
            configuration.story_reporter_builder(),
            &ReporterBuilder::default()
        );
    }

    #[test]
    fn slots_override_independently() {
        let configuration =
            Configuration::most_useful().with_failure_strategy(Box::new(SilentlyAbsorbingFailure));
        assert!(
            configuration
                .failure_strategy()
                .handle_failure(StepFailure::new("Given a step", "boom"))
                .is_ok()
        );
        // Untouched slots keep their defaults.
        assert_eq!(
            configuration.story_reporter_builder(),
            &ReporterBuilder::default()
        );
    }
}
