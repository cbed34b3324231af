// SPDX-License-Identifier: MPL-2.0
//! Card composer use cases.
//!
//! These functions drive the collaborator ports and apply their answers to the
//! domain. The UI layer hands the returned futures to `Task::perform` and
//! applies the result when the completion message arrives; tests can await the
//! whole flow directly.

use crate::application::port::{MediaPicker, PermissionGate, PickOptions};
use crate::domain::card::{CardState, PickOutcome, ResourceHandle};
use crate::domain::error::ComposerError;
use crate::domain::permission::{PermissionState, PermissionStatus};
use futures_util::future::{BoxFuture, FutureExt};

/// Asks the platform for media library access.
pub fn request_permission(gate: &dyn PermissionGate) -> BoxFuture<'static, PermissionStatus> {
    gate.request()
        .map(|status| {
            tracing::info!(?status, "media library permission resolved");
            status
        })
        .boxed()
}

/// Records a permission answer.
///
/// Returns [`ComposerError::PermissionDenied`] when the user must be warned,
/// which happens at most once per screen lifetime.
pub fn resolve_permission(
    state: &mut PermissionState,
    status: PermissionStatus,
) -> Option<ComposerError> {
    if state.resolve(status) {
        tracing::warn!("media library access denied; photos can still be picked from files");
        Some(ComposerError::PermissionDenied)
    } else {
        None
    }
}

/// Opens the media picker.
pub fn launch_picker(
    picker: &dyn MediaPicker,
    options: PickOptions,
) -> BoxFuture<'static, PickOutcome> {
    tracing::debug!(?options, "launching media picker");
    picker
        .launch(options)
        .map(|outcome| {
            match &outcome {
                PickOutcome::Picked(handle) => {
                    tracing::info!(photo = %handle.display_name(), "photo picked");
                }
                PickOutcome::Cancelled => tracing::debug!("media picker cancelled"),
            }
            outcome
        })
        .boxed()
}

/// Lets the user pick a photo and attaches it to the card.
///
/// # Errors
///
/// Returns [`ComposerError::PickerCancelled`] when the user dismissed the
/// picker. The card is left untouched in that case.
pub async fn pick_image(
    picker: &dyn MediaPicker,
    options: PickOptions,
    card: &mut CardState,
) -> Result<ResourceHandle, ComposerError> {
    let outcome = launch_picker(picker, options).await;
    card.apply_pick(outcome).cloned()
}
