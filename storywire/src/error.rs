//! Error types produced while bootstrapping wiring and loading stories.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while bootstrapping a wiring container or loading
/// story sources.
///
/// Absent declarations are never errors — the builder falls back to
/// defaults for those. These variants cover declared-but-broken wiring
/// only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WiringError {
    /// A declared wiring document or story file could not be read or parsed.
    #[error("wiring file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A `[[steps]]` entry referenced a provider with no registered factory.
    #[error("no steps factory registered for provider '{name}' (declared in '{location}')")]
    UnknownStepsProvider {
        /// Provider name the wiring document asked for.
        name: String,
        /// Location of the document containing the entry.
        location: String,
    },

    /// A step pattern could not be compiled into a matcher.
    #[error("invalid step pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern text.
        pattern: String,
        /// Compilation error reported by the regex engine.
        #[source]
        source: Box<regex::Error>,
    },
}

impl WiringError {
    /// Builds a [`WiringError::File`] for `path`.
    pub(crate) fn file(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::File {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Builds a [`WiringError::Pattern`] for `pattern`.
    pub(crate) fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WiringError;

    #[test]
    fn file_errors_name_the_offending_path() {
        let err = WiringError::file(
            "wiring/missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("wiring/missing.toml"), "got: {message}");
    }

    #[test]
    fn unknown_steps_provider_names_both_provider_and_location() {
        let err = WiringError::UnknownStepsProvider {
            name: String::from("foo_steps"),
            location: String::from("wiring/steps.toml"),
        };
        let message = err.to_string();
        assert!(message.contains("foo_steps"), "got: {message}");
        assert!(message.contains("wiring/steps.toml"), "got: {message}");
    }
}
