//! Canonical wiring document fixtures.

use figment::Jail;

/// A configuration document overriding every singleton slot.
pub const CONFIGURATION: &str = r#"[failure_strategy]
kind = "silently_absorbing"

[story_loader]
kind = "from_dir"
base = "stories"

[step_pattern_parser]
kind = "regex_prefix_capturing"
prefix = "MyPrefix"

[parameter_converters]
date_format = "%Y-%m-%d"

[reporter]
formats = ["console", "html", "txt", "xml", "stats"]
output_directory = "my-output-directory"
report_failure_trace = true

[reporter.view_resources]
index = "my-reports-index.ftl"
decorate_non_html = "true"
"#;

/// A document declaring a single `[[steps]]` entry for `provider`.
#[must_use]
pub fn steps_document(provider: &str) -> String {
    format!("[[steps]]\nprovider = \"{provider}\"\n")
}

/// Creates the canonical wiring layout inside `jail`: a `wiring/` directory
/// holding the full configuration document and one steps document per
/// provider, in the given order.
///
/// # Errors
///
/// Returns a [`figment::Error`] when the jail cannot create the files.
pub fn create_layout(jail: &mut Jail, providers: &[&str]) -> Result<(), figment::Error> {
    jail.create_dir("wiring")?;
    jail.create_file("wiring/configuration.toml", CONFIGURATION)?;
    for provider in providers {
        jail.create_file(
            format!("wiring/{provider}.toml"),
            &steps_document(provider),
        )?;
    }
    Ok(())
}
