//! Reading and parsing wiring documents.

use std::path::Path;

use figment::{
    Figment,
    providers::{Format, Toml},
};

use crate::error::WiringError;

/// Reads `location` and returns its parsed document.
///
/// A declared location must exist and parse; absence is never defaulted.
/// The data is validated with the TOML parser up front so syntax errors
/// carry the offending location rather than a figment profile path.
///
/// # Errors
///
/// Returns [`WiringError::File`] when the document is unreadable or not
/// valid TOML.
pub(super) fn read_document(location: &str) -> Result<Figment, WiringError> {
    let path = Path::new(location);
    let data = std::fs::read_to_string(path).map_err(|err| WiringError::file(path, err))?;
    toml::from_str::<toml::Value>(&data).map_err(|err| WiringError::file(path, err))?;
    Ok(Figment::from(Toml::string(&data)))
}

#[cfg(test)]
mod tests {
    use super::read_document;
    use crate::error::WiringError;

    #[test]
    fn missing_locations_fail_with_the_offending_path() {
        let err = read_document("no-such-dir/wiring.toml").expect_err("missing location fails");
        match err {
            WiringError::File { path, .. } => {
                assert!(path.ends_with("wiring.toml"), "got: {path:?}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_fails_before_extraction() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "this is not [valid toml").expect("write document");

        let err = read_document(path.to_str().expect("utf-8 path"))
            .expect_err("invalid TOML fails");
        assert!(matches!(err, WiringError::File { .. }), "got: {err:?}");
    }
}
