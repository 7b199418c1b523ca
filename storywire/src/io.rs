//! Story source loading.

use std::fmt;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::WiringError;

/// Loads story text from an external source.
pub trait StoryLoader: fmt::Debug {
    /// Loads the story at `story_path`.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::File`] when the story cannot be read.
    fn load_story(&self, story_path: &str) -> Result<String, WiringError>;
}

/// Reads stories from the filesystem using the path exactly as given. The
/// built-in default.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadFromFs;

impl StoryLoader for LoadFromFs {
    fn load_story(&self, story_path: &str) -> Result<String, WiringError> {
        fs::read_to_string(story_path).map_err(|err| WiringError::file(story_path, err))
    }
}

/// Reads stories relative to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFromDir {
    base: Utf8PathBuf,
}

impl LoadFromDir {
    /// A loader resolving stories against `base`.
    #[must_use]
    pub fn new(base: impl Into<Utf8PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory stories resolve against.
    #[must_use]
    pub fn base(&self) -> &Utf8Path {
        &self.base
    }
}

impl StoryLoader for LoadFromDir {
    fn load_story(&self, story_path: &str) -> Result<String, WiringError> {
        let full = self.base.join(story_path);
        fs::read_to_string(&full).map_err(|err| WiringError::file(full, err))
    }
}
