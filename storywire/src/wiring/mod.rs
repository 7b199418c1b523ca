//! Bootstrap of a wiring container from declared document locations.
//!
//! A wiring document is a TOML file declaring which capability
//! implementations a story run should use. Every section is optional and
//! independent; `[[steps]]` entries reference steps factories registered on
//! the loader by name, since the container cannot instantiate arbitrary
//! types from text:
//!
//! ```toml
//! [failure_strategy]
//! kind = "silently_absorbing"
//!
//! [step_pattern_parser]
//! kind = "regex_prefix_capturing"
//! prefix = "MyPrefix"
//!
//! [[steps]]
//! provider = "trading_steps"
//! ```
//!
//! Locations load in declaration order into one [`Registry`]: singleton
//! capabilities resolve to the latest declaration, steps accumulate across
//! documents. A location that cannot be read or parsed fails loudly; a
//! section with an unexpected shape is skipped with a warning and the slot
//! falls back to its default.

mod document;
mod load;

use indexmap::IndexMap;

use crate::error::WiringError;
use crate::registry::Registry;
use crate::steps::StepsObject;

/// Factory producing a fresh steps object per resolution.
pub type StepsFactory = Box<dyn Fn() -> Box<dyn StepsObject>>;

/// Builds a [`Registry`] from wiring document locations.
pub trait WiringLoader {
    /// Loads every location, in order, into a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError`] when a location cannot be read or parsed,
    /// or when a `[[steps]]` entry names an unregistered provider.
    fn load(&self, locations: &[&str]) -> Result<Registry, WiringError>;
}

/// TOML-backed wiring with named steps factories.
#[derive(Default)]
pub struct TomlWiring {
    steps_factories: IndexMap<String, StepsFactory>,
}

impl TomlWiring {
    /// A loader with no steps factories registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a steps factory under `name` for `[[steps]]` entries to
    /// reference. Re-registering a name replaces the previous factory.
    #[must_use]
    pub fn with_steps<S, F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        S: StepsObject,
        F: Fn() -> S + 'static,
    {
        self.steps_factories.insert(
            name.into(),
            Box::new(move || Box::new(factory()) as Box<dyn StepsObject>),
        );
        self
    }

    /// Names of the registered steps factories, in registration order.
    #[must_use]
    pub fn steps_providers(&self) -> Vec<&str> {
        self.steps_factories.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for TomlWiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TomlWiring")
            .field("steps_providers", &self.steps_providers())
            .finish()
    }
}

impl WiringLoader for TomlWiring {
    fn load(&self, locations: &[&str]) -> Result<Registry, WiringError> {
        let mut registry = Registry::new();
        for location in locations {
            let figment = load::read_document(location)?;
            document::materialize(&figment, location, &self.steps_factories, &mut registry)?;
        }
        tracing::debug!(
            locations = locations.len(),
            entries = registry.len(),
            "wiring container bootstrapped"
        );
        Ok(registry)
    }
}
