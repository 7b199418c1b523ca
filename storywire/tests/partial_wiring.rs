//! Partial-override behaviour: declared slots win, undeclared slots keep
//! their defaults, and later locations take precedence over earlier ones.

use anyhow::{Result, ensure};
use rstest::rstest;
use storywire::reporters::ReporterBuilder;
use storywire::{WiredStory, WiringBuilder};
use test_helpers::with_jail;

#[derive(WiredStory)]
#[wired(configure, locations("wiring/parser_only.toml"))]
struct ParserOnly;

#[derive(WiredStory)]
#[wired(configure, locations("wiring/first.toml", "wiring/second.toml"))]
struct Layered;

#[derive(WiredStory)]
#[wired(configure, locations("wiring/malformed_section.toml"))]
struct MalformedSection;

#[rstest]
fn declared_slots_override_while_the_rest_default() -> Result<()> {
    with_jail(|j| {
        j.create_dir("wiring")?;
        j.create_file(
            "wiring/parser_only.toml",
            "[step_pattern_parser]\nkind = \"regex_prefix_capturing\"\nprefix = \"%\"\n",
        )?;

        let configuration = WiringBuilder::new().build_configuration::<ParserOnly>()?;
        let parser = format!("{:?}", configuration.step_pattern_parser());
        ensure!(parser.contains('%'), "unexpected parser: {parser}");
        // Every other slot keeps its default.
        let strategy = format!("{:?}", configuration.failure_strategy());
        ensure!(
            strategy.contains("RethrowingFailure"),
            "unexpected failure strategy: {strategy}"
        );
        ensure!(
            configuration.story_reporter_builder() == &ReporterBuilder::default(),
            "unexpected reporter settings: {:?}",
            configuration.story_reporter_builder()
        );
        Ok(())
    })
}

#[rstest]
fn later_locations_override_earlier_singleton_declarations() -> Result<()> {
    with_jail(|j| {
        j.create_dir("wiring")?;
        j.create_file(
            "wiring/first.toml",
            "[failure_strategy]\nkind = \"rethrowing\"\n",
        )?;
        j.create_file(
            "wiring/second.toml",
            "[failure_strategy]\nkind = \"silently_absorbing\"\n",
        )?;

        let configuration = WiringBuilder::new().build_configuration::<Layered>()?;
        let strategy = format!("{:?}", configuration.failure_strategy());
        ensure!(
            strategy.contains("SilentlyAbsorbingFailure"),
            "unexpected failure strategy: {strategy}"
        );
        Ok(())
    })
}

#[rstest]
fn malformed_sections_fall_back_to_the_slot_default() -> Result<()> {
    with_jail(|j| {
        j.create_dir("wiring")?;
        j.create_file(
            "wiring/malformed_section.toml",
            "[failure_strategy]\nkind = \"no_such_strategy\"\n\n\
             [reporter]\nreport_failure_trace = true\n",
        )?;

        let configuration = WiringBuilder::new().build_configuration::<MalformedSection>()?;
        // The malformed strategy section defaults; the well-formed reporter
        // section still applies.
        let strategy = format!("{:?}", configuration.failure_strategy());
        ensure!(
            strategy.contains("RethrowingFailure"),
            "unexpected failure strategy: {strategy}"
        );
        ensure!(
            configuration.story_reporter_builder().report_failure_trace(),
            "expected the reporter section to apply"
        );
        Ok(())
    })
}
