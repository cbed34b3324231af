// SPDX-License-Identifier: MPL-2.0
//! Media library permission port definition.

use crate::domain::permission::PermissionStatus;
use futures_util::future::BoxFuture;

/// Port for asking the platform whether the photo library may be read.
///
/// Called once when the screen appears. The answer is never cached by the
/// adapter; the caller records it in a
/// [`PermissionState`](crate::domain::permission::PermissionState).
pub trait PermissionGate: Send + Sync {
    fn request(&self) -> BoxFuture<'static, PermissionStatus>;
}
