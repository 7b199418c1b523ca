//! Failure semantics: declared-but-broken wiring fails loudly, it never
//! degrades to defaults.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use storywire::{WiredStory, WiringBuilder, WiringError};
use test_helpers::with_jail;

#[derive(WiredStory)]
#[wired(configure, locations("wiring/nowhere.toml"))]
struct MissingLocation;

#[derive(WiredStory)]
#[wired(configure, locations("wiring/broken.toml"))]
struct BrokenDocument;

#[derive(WiredStory)]
#[wired(configure, locations("wiring/unregistered.toml"))]
struct UnregisteredProvider;

fn expect_wiring_error<T: std::fmt::Debug>(
    result: Result<T, WiringError>,
) -> Result<WiringError> {
    match result {
        Ok(value) => Err(anyhow!("expected a wiring error, got {value:?}")),
        Err(err) => Ok(err),
    }
}

#[rstest]
fn unreachable_locations_are_fatal() -> Result<()> {
    with_jail(|_j| {
        let err = expect_wiring_error(
            WiringBuilder::new().build_configuration::<MissingLocation>(),
        )?;
        ensure!(
            matches!(err, WiringError::File { .. }),
            "unexpected error: {err:?}"
        );
        ensure!(
            err.to_string().contains("nowhere.toml"),
            "error does not name the location: {err}"
        );
        Ok(())
    })
}

#[rstest]
fn malformed_documents_are_fatal() -> Result<()> {
    with_jail(|j| {
        j.create_dir("wiring")?;
        j.create_file("wiring/broken.toml", "this is not [valid toml")?;
        let err = expect_wiring_error(
            WiringBuilder::new().build_configuration::<BrokenDocument>(),
        )?;
        ensure!(
            matches!(err, WiringError::File { .. }),
            "unexpected error: {err:?}"
        );
        Ok(())
    })
}

#[rstest]
fn steps_resolution_shares_the_bootstrap_failure_mode() -> Result<()> {
    with_jail(|_j| {
        let err = expect_wiring_error(
            WiringBuilder::new().build_candidate_steps::<MissingLocation>(),
        )?;
        ensure!(
            matches!(err, WiringError::File { .. }),
            "unexpected error: {err:?}"
        );
        Ok(())
    })
}

#[rstest]
fn unregistered_steps_providers_are_fatal() -> Result<()> {
    with_jail(|j| {
        j.create_dir("wiring")?;
        j.create_file("wiring/unregistered.toml", "[[steps]]\nprovider = \"ghost\"\n")?;
        let err = expect_wiring_error(
            WiringBuilder::new().build_candidate_steps::<UnregisteredProvider>(),
        )?;
        match err {
            WiringError::UnknownStepsProvider { name, location } => {
                ensure!(name == "ghost", "unexpected provider name: {name}");
                ensure!(
                    location.contains("unregistered.toml"),
                    "unexpected location: {location}"
                );
            }
            other => return Err(anyhow!("unexpected error: {other:?}")),
        }
        Ok(())
    })
}
