//! Step parameter conversion.
//!
//! Textual step parameters are converted through an ordered chain of
//! converters; the first converter accepting the target type wins. Custom
//! converters are prepended, so a wiring-supplied date converter overrides
//! the built-in one while the rest of the chain stays intact.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Target types a textual step parameter can convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamType {
    /// A numeric value.
    Number,
    /// A boolean flag.
    Flag,
    /// A calendar date.
    Date,
    /// A comma-separated list of values.
    List,
    /// Plain text, the fallback target.
    Text,
}

/// A converted parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A numeric value.
    Number(f64),
    /// A boolean flag.
    Flag(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// A comma-separated list of values.
    List(Vec<String>),
    /// Plain text.
    Text(String),
}

/// Error converting a step parameter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// No converter in the chain accepts the target type.
    #[error("no converter accepts {target:?}")]
    Unsupported {
        /// The requested target type.
        target: ParamType,
    },

    /// A converter accepted the target but could not parse the value.
    #[error("cannot convert '{value}' to {target:?}: {reason}")]
    Invalid {
        /// The textual value that failed to convert.
        value: String,
        /// The requested target type.
        target: ParamType,
        /// Why the conversion failed.
        reason: String,
    },
}

impl ConvertError {
    fn invalid(value: &str, target: ParamType, reason: impl Into<String>) -> Self {
        Self::Invalid {
            value: value.to_owned(),
            target,
            reason: reason.into(),
        }
    }
}

/// Converts one textual value into a [`ParamValue`].
pub trait ParameterConverter: fmt::Debug {
    /// Whether this converter handles `target`.
    fn accepts(&self, target: ParamType) -> bool;

    /// Converts `value` for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Invalid`] when the value cannot be parsed.
    fn convert(&self, value: &str, target: ParamType) -> Result<ParamValue, ConvertError>;
}

/// Parses numbers into [`ParamValue::Number`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberConverter;

impl ParameterConverter for NumberConverter {
    fn accepts(&self, target: ParamType) -> bool {
        target == ParamType::Number
    }

    fn convert(&self, value: &str, target: ParamType) -> Result<ParamValue, ConvertError> {
        value
            .trim()
            .parse::<f64>()
            .map(ParamValue::Number)
            .map_err(|err| ConvertError::invalid(value, target, err.to_string()))
    }
}

/// Parses `true`/`false` into [`ParamValue::Flag`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FlagConverter;

impl ParameterConverter for FlagConverter {
    fn accepts(&self, target: ParamType) -> bool {
        target == ParamType::Flag
    }

    fn convert(&self, value: &str, target: ParamType) -> Result<ParamValue, ConvertError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(ParamValue::Flag(true)),
            "false" => Ok(ParamValue::Flag(false)),
            _ => Err(ConvertError::invalid(value, target, "expected true or false")),
        }
    }
}

/// Splits comma-separated values into [`ParamValue::List`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ListConverter;

impl ParameterConverter for ListConverter {
    fn accepts(&self, target: ParamType) -> bool {
        target == ParamType::List
    }

    fn convert(&self, value: &str, _target: ParamType) -> Result<ParamValue, ConvertError> {
        let items = value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(ParamValue::List(items))
    }
}

/// Parses dates with a chrono format string, `%d/%m/%Y` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateConverter {
    format: String,
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new("%d/%m/%Y")
    }
}

impl DateConverter {
    /// A converter parsing dates with `format`.
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// The chrono format string in use.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl ParameterConverter for DateConverter {
    fn accepts(&self, target: ParamType) -> bool {
        target == ParamType::Date
    }

    fn convert(&self, value: &str, target: ParamType) -> Result<ParamValue, ConvertError> {
        NaiveDate::parse_from_str(value.trim(), &self.format)
            .map(ParamValue::Date)
            .map_err(|err| ConvertError::invalid(value, target, err.to_string()))
    }
}

/// Passes text through untouched. The chain's fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextConverter;

impl ParameterConverter for TextConverter {
    fn accepts(&self, target: ParamType) -> bool {
        target == ParamType::Text
    }

    fn convert(&self, value: &str, _target: ParamType) -> Result<ParamValue, ConvertError> {
        Ok(ParamValue::Text(value.to_owned()))
    }
}

/// Ordered converter chain; the first converter accepting the target wins.
pub struct ParameterConverters {
    chain: Vec<Box<dyn ParameterConverter>>,
}

impl Default for ParameterConverters {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterConverters {
    /// The built-in chain: numbers, flags, lists, dates (`%d/%m/%Y`), and
    /// text as the fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: vec![
                Box::new(NumberConverter),
                Box::new(FlagConverter),
                Box::new(ListConverter),
                Box::new(DateConverter::default()),
                Box::new(TextConverter),
            ],
        }
    }

    /// Prepends `converter` so it wins over the built-in chain.
    #[must_use]
    pub fn with(mut self, converter: Box<dyn ParameterConverter>) -> Self {
        self.chain.insert(0, converter);
        self
    }

    /// Converts `value` into `target` using the first converter accepting
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Unsupported`] when no converter accepts
    /// `target`, or the converter's own [`ConvertError::Invalid`] when the
    /// value cannot be parsed.
    pub fn convert(&self, value: &str, target: ParamType) -> Result<ParamValue, ConvertError> {
        self.chain
            .iter()
            .find(|converter| converter.accepts(target))
            .ok_or(ConvertError::Unsupported { target })?
            .convert(value, target)
    }
}

impl fmt::Debug for ParameterConverters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.chain).finish()
    }
}
