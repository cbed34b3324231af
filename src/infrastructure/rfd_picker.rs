// SPDX-License-Identifier: MPL-2.0
//! Native file dialog media picker.

use crate::application::port::{MediaKind, MediaPicker, PickOptions};
use crate::domain::card::{PickOutcome, ResourceHandle};
use futures_util::future::{BoxFuture, FutureExt};
use std::path::PathBuf;

/// Image extensions offered by the dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

/// [`MediaPicker`] backed by the platform's native file dialog.
#[derive(Debug, Clone, Default)]
pub struct RfdMediaPicker {
    title: String,
    filter_name: String,
    start_directory: Option<PathBuf>,
}

impl RfdMediaPicker {
    /// Creates a picker that opens in the user's pictures directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Pick an Image".to_string(),
            filter_name: "Images".to_string(),
            start_directory: dirs::picture_dir(),
        }
    }

    /// Sets the localized dialog title and filter label.
    #[must_use]
    pub fn with_labels(mut self, title: impl Into<String>, filter_name: impl Into<String>) -> Self {
        self.title = title.into();
        self.filter_name = filter_name.into();
        self
    }
}

impl MediaPicker for RfdMediaPicker {
    fn launch(&self, options: PickOptions) -> BoxFuture<'static, PickOutcome> {
        let extensions = match options.media {
            MediaKind::Images => IMAGE_EXTENSIONS,
        };

        let title = self.title.clone();
        let filter_name = self.filter_name.clone();
        let start_directory = self.start_directory.clone();

        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, extensions);

            if let Some(dir) = start_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            match dialog.pick_file().await {
                Some(file) => PickOutcome::Picked(ResourceHandle::new(file.path())),
                None => PickOutcome::Cancelled,
            }
        }
        .boxed()
    }
}
