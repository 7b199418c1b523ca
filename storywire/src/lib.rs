//! Attribute-driven configuration wiring for story-based test harnesses.
//!
//! `storywire` inspects a story type's `#[wired(...)]` attributes and
//! resolves them into a fully-populated [`Configuration`] plus an ordered
//! list of [`CandidateSteps`]. A type that opts in names one or more TOML
//! wiring documents; those are bootstrapped into a [`Registry`] and each
//! configuration slot is looked up independently, falling back to its
//! built-in default when nothing was declared. A type that does not opt in
//! resolves to the all-defaults configuration and an empty steps list —
//! never an error.
//!
//! ```
//! use storywire::{WiredStory, WiringBuilder};
//!
//! #[derive(WiredStory)]
//! struct Unwired;
//!
//! let builder = WiringBuilder::new();
//! let configuration = builder.build_configuration::<Unwired>()?;
//! assert_eq!(
//!     configuration.story_reporter_builder().output_directory().as_str(),
//!     "reports",
//! );
//! assert!(builder.build_candidate_steps::<Unwired>()?.is_empty());
//! # Ok::<(), storywire::WiringError>(())
//! ```
//!
//! Declared wiring that turns out to be broken — an unreadable location,
//! invalid TOML, or a `[[steps]]` entry naming an unregistered provider —
//! fails loudly with a [`WiringError`]; defaults only ever stand in for
//! *absent* declarations.

pub use storywire_macros::WiredStory;

mod annotations;
mod builder;
mod configuration;
pub mod converters;
mod error;
pub mod failures;
pub mod io;
pub mod parsers;
mod registry;
pub mod reporters;
pub mod steps;
pub mod wiring;

pub use annotations::WiredStory;
pub use builder::WiringBuilder;
pub use configuration::Configuration;
pub use converters::{ConvertError, ParamType, ParamValue, ParameterConverters};
pub use error::WiringError;
pub use registry::Registry;
pub use steps::CandidateSteps;
pub use wiring::{TomlWiring, WiringLoader};
