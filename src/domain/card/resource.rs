// SPDX-License-Identifier: MPL-2.0
//! Opaque handle to a user photo and the outcome of picking one.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque reference to a photo returned by the media picker.
///
/// On desktop this is a file path; the card never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle(PathBuf);

impl ResourceHandle {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self(location.into())
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns the final path component, for logs and titles.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0
            .file_name()
            .map_or_else(|| self.0.to_string_lossy(), |name| name.to_string_lossy())
            .into_owned()
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// What the media picker returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user closed the picker without choosing anything.
    Cancelled,
    /// The user chose a photo.
    Picked(ResourceHandle),
}
