//! Story report configuration.
//!
//! Rendering is owned by the view layer; this module only accumulates the
//! settings a run's reporters are built from.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::Deserialize;

/// Output formats a story run can report in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Format {
    /// Plain console output.
    Console,
    /// Plain-text report files.
    Txt,
    /// HTML report files.
    Html,
    /// XML report files.
    Xml,
    /// Aggregate run statistics.
    Stats,
}

/// Accumulates the report settings consumed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterBuilder {
    formats: Vec<Format>,
    output_directory: Utf8PathBuf,
    view_resources: IndexMap<String, String>,
    report_failure_trace: bool,
}

impl Default for ReporterBuilder {
    fn default() -> Self {
        let mut view_resources = IndexMap::new();
        view_resources.insert(String::from("index"), String::from("reports-index.html"));
        view_resources.insert(String::from("decorate_non_html"), String::from("false"));
        Self {
            formats: vec![Format::Console, Format::Stats],
            output_directory: Utf8PathBuf::from("reports"),
            view_resources,
            report_failure_trace: false,
        }
    }
}

impl ReporterBuilder {
    /// The built-in report settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the output formats.
    #[must_use]
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = Format>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Replaces the report output directory.
    #[must_use]
    pub fn with_output_directory(mut self, directory: impl Into<Utf8PathBuf>) -> Self {
        self.output_directory = directory.into();
        self
    }

    /// Sets one view resource, overriding any default under the same key.
    #[must_use]
    pub fn with_view_resource(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.view_resources.insert(key.into(), value.into());
        self
    }

    /// Sets whether failure traces are included in reports.
    #[must_use]
    pub fn with_report_failure_trace(mut self, report_failure_trace: bool) -> Self {
        self.report_failure_trace = report_failure_trace;
        self
    }

    /// The output formats, in declaration order.
    #[must_use]
    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    /// The report output directory.
    #[must_use]
    pub fn output_directory(&self) -> &Utf8Path {
        &self.output_directory
    }

    /// View resources keyed by resource name, in declaration order.
    #[must_use]
    pub fn view_resources(&self) -> &IndexMap<String, String> {
        &self.view_resources
    }

    /// Whether failure traces are included in reports.
    #[must_use]
    pub fn report_failure_trace(&self) -> bool {
        self.report_failure_trace
    }
}
