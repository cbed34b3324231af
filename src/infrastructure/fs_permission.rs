// SPDX-License-Identifier: MPL-2.0
//! Filesystem-backed media library permission.
//!
//! Desktop platforms have no photo library permission prompt. Access is
//! granted when the directory the picker opens in can actually be listed.

use crate::application::port::PermissionGate;
use crate::domain::permission::PermissionStatus;
use futures_util::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};

/// [`PermissionGate`] granting access when the user's pictures directory is listable.
#[derive(Debug, Clone)]
pub struct FsPermissionGate {
    library: Option<PathBuf>,
}

impl Default for FsPermissionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl FsPermissionGate {
    /// Checks the pictures directory, falling back to the home directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            library: dirs::picture_dir()
                .filter(|dir| dir.exists())
                .or_else(dirs::home_dir),
        }
    }

    /// Checks an explicit directory.
    #[must_use]
    pub fn with_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            library: Some(dir.into()),
        }
    }
}

fn check_listable(dir: Option<&Path>) -> PermissionStatus {
    match dir.map(std::fs::read_dir) {
        Some(Ok(_)) => PermissionStatus::Granted,
        Some(Err(err)) => {
            tracing::debug!(%err, "media library is not readable");
            PermissionStatus::Denied
        }
        None => PermissionStatus::Denied,
    }
}

impl PermissionGate for FsPermissionGate {
    fn request(&self) -> BoxFuture<'static, PermissionStatus> {
        let library = self.library.clone();
        async move { check_listable(library.as_deref()) }.boxed()
    }
}
