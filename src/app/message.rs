// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::card::{PickOutcome, ResourceHandle};
use crate::domain::permission::PermissionStatus;
use crate::error::Error;
use crate::media::{ImageData, TemplateSet};
use crate::ui::composer;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Composer(composer::Message),
    Notification(notifications::NotificationMessage),
    /// Answer of the startup permission request.
    PermissionResolved(PermissionStatus),
    /// Answer of the media picker.
    ImagePicked(PickOutcome),
    /// Result of decoding a picked photo.
    PhotoLoaded {
        handle: ResourceHandle,
        result: Result<ImageData, Error>,
    },
    /// Result of rasterizing the bundled templates.
    TemplatesLoaded(Result<TemplateSet, Error>),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CARD_COMPOSER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Template to start with, overriding the configured default.
    pub template: Option<usize>,
    /// Greeting to start with, overriding the configured default.
    pub text: Option<String>,
}
