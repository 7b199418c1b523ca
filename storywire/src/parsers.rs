//! Step pattern parsing.
//!
//! Patterns mark parameters with a configurable literal prefix, `$` by
//! default: `"the user $name logs in"` compiles to an anchored matcher
//! capturing `name`. Parameter names run over alphanumerics and
//! underscores; a prefix occurrence with no name following it is treated as
//! literal text.

use std::fmt;

use regex::Regex;

use crate::error::WiringError;

/// Compiles step patterns into matchers.
pub trait StepPatternParser: fmt::Debug {
    /// Compiles `pattern` into a [`StepMatcher`].
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::Pattern`] when the pattern cannot be compiled.
    fn parse_step(&self, pattern: &str) -> Result<StepMatcher, WiringError>;
}

/// Marks parameters with a literal prefix and captures them non-greedily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexPrefixCapturingParser {
    prefix: String,
}

impl Default for RegexPrefixCapturingParser {
    fn default() -> Self {
        Self::new("$")
    }
}

impl RegexPrefixCapturingParser {
    /// A parser whose parameters are introduced by `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The parameter prefix this parser recognises.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn compile(&self, pattern: &str) -> (String, Vec<String>) {
        let mut source = String::from("^");
        let mut names = Vec::new();
        let mut rest = pattern;
        while !self.prefix.is_empty() {
            let Some(at) = rest.find(self.prefix.as_str()) else {
                break;
            };
            let (literal, tail) = rest.split_at(at);
            source.push_str(&regex::escape(literal));
            let (_, after) = tail.split_at(self.prefix.len());
            let name: String = after
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if name.is_empty() {
                // A bare prefix is part of the step text, not a parameter.
                source.push_str(&regex::escape(&self.prefix));
                rest = after;
            } else {
                source.push_str("(.*?)");
                let (_, remainder) = after.split_at(name.len());
                names.push(name);
                rest = remainder;
            }
        }
        source.push_str(&regex::escape(rest));
        source.push('$');
        (source, names)
    }
}

impl StepPatternParser for RegexPrefixCapturingParser {
    fn parse_step(&self, pattern: &str) -> Result<StepMatcher, WiringError> {
        let (source, parameter_names) = self.compile(pattern);
        let regex = Regex::new(&source).map_err(|err| WiringError::pattern(pattern, err))?;
        Ok(StepMatcher {
            pattern: pattern.to_owned(),
            regex,
            parameter_names,
        })
    }
}

/// A compiled step pattern.
#[derive(Debug, Clone)]
pub struct StepMatcher {
    pattern: String,
    regex: Regex,
    parameter_names: Vec<String>,
}

impl StepMatcher {
    /// The source pattern this matcher was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parameter names in pattern order.
    #[must_use]
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    /// Whether `step` matches the whole pattern.
    #[must_use]
    pub fn matches(&self, step: &str) -> bool {
        self.regex.is_match(step)
    }

    /// Captured parameter values by name, or `None` when `step` does not
    /// match.
    #[must_use]
    pub fn extract(&self, step: &str) -> Option<Vec<(String, String)>> {
        let captures = self.regex.captures(step)?;
        Some(
            self.parameter_names
                .iter()
                .zip(captures.iter().skip(1))
                .map(|(name, capture)| {
                    let value = capture.map_or_else(String::new, |m| m.as_str().to_owned());
                    (name.clone(), value)
                })
                .collect(),
        )
    }
}
