// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use std::fmt;

/// Errors raised by card composition operations.
///
/// Only [`ComposerError::PermissionDenied`] is ever shown to the user.
/// Cancellation is silent, and the remaining variants are caller contract
/// violations that the UI can never produce through normal interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    /// The media library permission was refused.
    PermissionDenied,

    /// The user dismissed the image picker without choosing a photo.
    PickerCancelled,

    /// A template index outside the bundled template list.
    TemplateOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of available templates.
        len: usize,
    },

    /// A font size that is not one of the offered sizes.
    UnsupportedFontSize(u16),
}

impl ComposerError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ComposerError::PermissionDenied => "notification-permission-denied",
            ComposerError::PickerCancelled => "notification-picker-cancelled",
            ComposerError::TemplateOutOfRange { .. } => "error-template-out-of-range",
            ComposerError::UnsupportedFontSize(_) => "error-font-size-unsupported",
        }
    }

    /// Returns whether this error must be surfaced to the user.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ComposerError::PermissionDenied)
    }
}

impl fmt::Display for ComposerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposerError::PermissionDenied => write!(f, "Media library permission denied"),
            ComposerError::PickerCancelled => write!(f, "Image picker cancelled"),
            ComposerError::TemplateOutOfRange { index, len } => {
                write!(f, "Template index {index} out of range (0..{len})")
            }
            ComposerError::UnsupportedFontSize(size) => {
                write!(f, "Unsupported font size: {size}")
            }
        }
    }
}

impl std::error::Error for ComposerError {}
