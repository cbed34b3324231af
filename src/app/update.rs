// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] with mutable access to the parts of
//! the application they may touch and return the follow-up [`Task`].

use super::Message;
use crate::application::composer as use_case;
use crate::application::port::{MediaPicker, PickOptions};
use crate::domain::card::{PickOutcome, ResourceHandle};
use crate::domain::error::ComposerError;
use crate::domain::permission::PermissionStatus;
use crate::error::Error;
use crate::media::{self, ImageData, TemplateSet};
use crate::ui::composer::{self, Event as ComposerEvent};
use crate::ui::notifications::{self, Notification, Topic};
use iced::Task;
use std::sync::Arc;

/// Mutable view of the application used by the handlers.
pub struct UpdateContext<'a> {
    pub composer: &'a mut composer::State,
    pub notifications: &'a mut notifications::Manager,
    pub picker: &'a Arc<dyn MediaPicker>,
    pub pick_options: PickOptions,
}

/// Forwards a message to the composer and performs the side effect it asks for.
pub fn handle_composer_message(
    ctx: &mut UpdateContext<'_>,
    message: composer::Message,
) -> Task<Message> {
    match ctx.composer.update(message) {
        ComposerEvent::None => Task::none(),
        ComposerEvent::PickImageRequested => Task::perform(
            use_case::launch_picker(ctx.picker.as_ref(), ctx.pick_options),
            Message::ImagePicked,
        ),
        ComposerEvent::Rejected(err) => {
            tracing::warn!(%err, "control value rejected");
            Task::none()
        }
    }
}

/// Records the permission answer; a denial is shown once and stays until
/// dismissed.
pub fn handle_permission_resolved(ctx: &mut UpdateContext<'_>, status: PermissionStatus) {
    if let Some(err) = ctx.composer.resolve_permission(status) {
        ctx.notifications
            .push(Notification::warning(Topic::Permission, err.i18n_key()).sticky());
    }
}

/// Applies the picker answer and starts decoding the new photo.
pub fn handle_image_picked(ctx: &mut UpdateContext<'_>, outcome: PickOutcome) -> Task<Message> {
    match ctx.composer.apply_pick(outcome) {
        Ok(handle) => {
            ctx.notifications.dismiss_topic(Topic::Photo);
            let options = ctx.pick_options;
            Task::perform(
                async move {
                    let source = handle.clone();
                    let result =
                        tokio::task::spawn_blocking(move || media::load_photo(&source, &options))
                            .await
                            .unwrap_or_else(|err| Err(Error::Io(err.to_string())));
                    (handle, result)
                },
                |(handle, result)| Message::PhotoLoaded { handle, result },
            )
        }
        Err(ComposerError::PickerCancelled) => Task::none(),
        Err(err) => {
            tracing::warn!(%err, "unexpected picker result");
            Task::none()
        }
    }
}

/// Stores decoded photo pixels or reports why the photo cannot be shown.
pub fn handle_photo_loaded(
    ctx: &mut UpdateContext<'_>,
    handle: &ResourceHandle,
    result: Result<ImageData, Error>,
) {
    match result {
        Ok(photo) => {
            if ctx.composer.set_photo(handle, photo) {
                tracing::debug!(photo = %handle, "photo ready");
            }
        }
        Err(err) => {
            tracing::warn!(photo = %handle, %err, "failed to load photo");
            if ctx.composer.card().image() == Some(handle) {
                ctx.notifications.push(
                    Notification::error(Topic::Photo, photo_error_key(&err))
                        .with_arg("name", handle.display_name()),
                );
            }
        }
    }
}

pub fn handle_templates_loaded(ctx: &mut UpdateContext<'_>, result: Result<TemplateSet, Error>) {
    match result {
        Ok(templates) => ctx.composer.set_templates(templates),
        Err(err) => {
            tracing::error!(%err, "failed to render templates");
            ctx.notifications
                .push(Notification::error(Topic::Templates, err.i18n_key()));
        }
    }
}

/// Notification key for a photo that could not be loaded.
fn photo_error_key(err: &Error) -> &'static str {
    match err {
        Error::Io(_) => "error-photo-read",
        _ => "error-photo-decode",
    }
}
