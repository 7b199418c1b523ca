//! Test helpers shared across crates in the storywire workspace.
//!
//! This crate provides the jailed-filesystem harness used by the wiring
//! tests, plus canonical wiring document fixtures so behaviour tests across
//! crates agree on what a fully wired container looks like.

use std::cell::RefCell;

use anyhow::{Result, anyhow};
use figment::Jail;

pub mod wiring;

/// Runs `f` inside a [`figment::Jail`], returning any propagated error as
/// an [`anyhow::Result`].
///
/// The jail provides a fresh temporary directory as the working directory,
/// so tests can create wiring documents at the relative locations a story
/// type declares.
///
/// # Errors
///
/// Returns an error when either the inner closure fails or the jailed
/// execution cannot be initialised.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> Result<T>,
{
    let output = RefCell::new(None);
    let error: RefCell<Option<anyhow::Error>> = RefCell::new(None);
    Jail::try_with(|j| {
        match f(j) {
            Ok(result) => {
                output.replace(Some(result));
            }
            Err(err) => {
                error.replace(Some(err));
            }
        }
        Ok(())
    })
    .map_err(|err| anyhow!(err))?;

    error.into_inner().map_or_else(
        || {
            output
                .into_inner()
                .ok_or_else(|| anyhow!("jail closure did not produce a result"))
        },
        Err,
    )
}
