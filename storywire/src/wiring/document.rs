//! Wiring document sections and their materialization into a registry.

use camino::Utf8PathBuf;
use figment::Figment;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::StepsFactory;
use crate::converters::{DateConverter, ParameterConverters};
use crate::error::WiringError;
use crate::failures::{FailureStrategy, RethrowingFailure, SilentlyAbsorbingFailure};
use crate::io::{LoadFromDir, LoadFromFs, StoryLoader};
use crate::parsers::{RegexPrefixCapturingParser, StepPatternParser};
use crate::registry::Registry;
use crate::reporters::{Format, ReporterBuilder};

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum FailureStrategySpec {
    Rethrowing,
    SilentlyAbsorbing,
}

impl FailureStrategySpec {
    fn materialize(self) -> Box<dyn FailureStrategy> {
        match self {
            Self::Rethrowing => Box::new(RethrowingFailure),
            Self::SilentlyAbsorbing => Box::new(SilentlyAbsorbingFailure),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StoryLoaderSpec {
    FromFs,
    FromDir { base: Utf8PathBuf },
}

impl StoryLoaderSpec {
    fn materialize(self) -> Box<dyn StoryLoader> {
        match self {
            Self::FromFs => Box::new(LoadFromFs),
            Self::FromDir { base } => Box::new(LoadFromDir::new(base)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StepPatternParserSpec {
    RegexPrefixCapturing { prefix: Option<String> },
}

impl StepPatternParserSpec {
    fn materialize(self) -> Box<dyn StepPatternParser> {
        match self {
            Self::RegexPrefixCapturing { prefix } => Box::new(
                prefix.map_or_else(RegexPrefixCapturingParser::default, |p| {
                    RegexPrefixCapturingParser::new(p)
                }),
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ParameterConvertersSpec {
    date_format: String,
}

impl ParameterConvertersSpec {
    fn materialize(self) -> ParameterConverters {
        ParameterConverters::new().with(Box::new(DateConverter::new(self.date_format)))
    }
}

#[derive(Debug, Deserialize)]
struct ReporterSpec {
    #[serde(default)]
    formats: Vec<Format>,
    output_directory: Option<Utf8PathBuf>,
    #[serde(default)]
    view_resources: IndexMap<String, String>,
    report_failure_trace: Option<bool>,
}

impl ReporterSpec {
    fn materialize(self) -> ReporterBuilder {
        let mut builder = ReporterBuilder::default();
        if !self.formats.is_empty() {
            builder = builder.with_formats(self.formats);
        }
        if let Some(directory) = self.output_directory {
            builder = builder.with_output_directory(directory);
        }
        for (key, value) in self.view_resources {
            builder = builder.with_view_resource(key, value);
        }
        if let Some(report_failure_trace) = self.report_failure_trace {
            builder = builder.with_report_failure_trace(report_failure_trace);
        }
        builder
    }
}

#[derive(Debug, Deserialize)]
struct StepsEntry {
    provider: String,
}

/// Materializes every declared section of `figment` into `registry`.
///
/// Singleton sections append in document order, so the registry's
/// latest-wins lookup gives later locations precedence. `[[steps]]`
/// entries resolve their provider names against `factories`; an
/// unregistered name is a declared-but-broken reference and fails loudly.
pub(super) fn materialize(
    figment: &Figment,
    location: &str,
    factories: &IndexMap<String, StepsFactory>,
    registry: &mut Registry,
) -> Result<(), WiringError> {
    if let Some(spec) = section::<FailureStrategySpec>(figment, location, "failure_strategy") {
        registry.insert(spec.materialize());
    }
    if let Some(spec) = section::<StoryLoaderSpec>(figment, location, "story_loader") {
        registry.insert(spec.materialize());
    }
    if let Some(spec) = section::<StepPatternParserSpec>(figment, location, "step_pattern_parser") {
        registry.insert(spec.materialize());
    }
    if let Some(spec) = section::<ParameterConvertersSpec>(figment, location, "parameter_converters")
    {
        registry.insert(spec.materialize());
    }
    if let Some(spec) = section::<ReporterSpec>(figment, location, "reporter") {
        registry.insert(spec.materialize());
    }
    for entry in section::<Vec<StepsEntry>>(figment, location, "steps").unwrap_or_default() {
        let factory =
            factories
                .get(&entry.provider)
                .ok_or_else(|| WiringError::UnknownStepsProvider {
                    name: entry.provider.clone(),
                    location: location.to_owned(),
                })?;
        registry.insert(factory());
    }
    Ok(())
}

/// Extracts `key` from the document, treating a malformed section as
/// absent.
fn section<T: DeserializeOwned>(figment: &Figment, location: &str, key: &str) -> Option<T> {
    match figment.extract_inner::<T>(key) {
        Ok(value) => Some(value),
        Err(err) if err.missing() => None,
        Err(err) => {
            tracing::warn!(
                %location,
                key,
                error = %err,
                "ignoring wiring section with unexpected shape"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use figment::{
        Figment,
        providers::{Format as _, Toml},
    };
    use indexmap::IndexMap;

    use super::materialize;
    use crate::converters::ParameterConverters;
    use crate::failures::FailureStrategy;
    use crate::registry::Registry;
    use crate::reporters::ReporterBuilder;

    fn materialize_str(data: &str) -> Registry {
        let figment = Figment::from(Toml::string(data));
        let factories = IndexMap::new();
        let mut registry = Registry::new();
        materialize(&figment, "inline.toml", &factories, &mut registry)
            .expect("document materializes");
        registry
    }

    #[test]
    fn empty_documents_declare_nothing() {
        let registry = materialize_str("");
        assert!(registry.is_empty());
    }

    #[test]
    fn declared_sections_materialize_into_capabilities() {
        let registry = materialize_str(
            "[failure_strategy]\nkind = \"silently_absorbing\"\n\n\
             [parameter_converters]\ndate_format = \"%Y-%m-%d\"\n",
        );
        assert!(registry.contains::<Box<dyn FailureStrategy>>());
        assert!(registry.contains::<ParameterConverters>());
        assert!(!registry.contains::<ReporterBuilder>());
    }

    #[test]
    fn malformed_sections_are_skipped_not_fatal() {
        let registry = materialize_str("[failure_strategy]\nkind = \"bogus\"\n");
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_steps_providers_fail_loudly() {
        let figment = Figment::from(Toml::string("[[steps]]\nprovider = \"missing\"\n"));
        let factories = IndexMap::new();
        let mut registry = Registry::new();
        let err = materialize(&figment, "inline.toml", &factories, &mut registry)
            .expect_err("unregistered provider fails");
        assert!(err.to_string().contains("missing"), "got: {err}");
    }

    #[test]
    fn reporter_fields_override_defaults_independently() {
        let mut registry = materialize_str("[reporter]\nreport_failure_trace = true\n");
        let builder = registry
            .take::<ReporterBuilder>()
            .expect("reporter materializes");
        assert!(builder.report_failure_trace());
        assert_eq!(builder.formats(), ReporterBuilder::default().formats());
    }
}
