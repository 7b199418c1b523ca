//! The marker trait read by the wiring builder.

/// Declares whether a story type opts in to externally wired configuration
/// and where its wiring documents live.
///
/// Both queries default to "not annotated": the marker is absent and no
/// locations are declared. The companion derive fills them in from
/// `#[wired(...)]` attributes:
///
/// ```
/// use storywire::WiredStory;
///
/// #[derive(WiredStory)]
/// #[wired(configure, locations("wiring/stories.toml"))]
/// struct Annotated;
///
/// assert!(Annotated::configure());
/// assert_eq!(Annotated::wiring_locations(), ["wiring/stories.toml"]);
/// ```
///
/// The marker alone is not enough to bootstrap a container; a type must
/// also declare at least one location. Either being absent resolves to the
/// built-in defaults.
pub trait WiredStory {
    /// Whether the configure marker is present on the type.
    #[must_use]
    fn configure() -> bool {
        false
    }

    /// Declared wiring document locations, in declaration order.
    #[must_use]
    fn wiring_locations() -> &'static [&'static str] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::WiredStory;

    struct Plain;

    impl WiredStory for Plain {}

    #[test]
    fn provided_defaults_mean_not_annotated() {
        assert!(!Plain::configure());
        assert!(Plain::wiring_locations().is_empty());
    }
}
