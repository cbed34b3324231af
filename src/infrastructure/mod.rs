// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`rfd_picker`]: Native file dialog (implements [`MediaPicker`])
//! - [`fs_permission`]: Pictures directory access check (implements [`PermissionGate`])
//!
//! [`MediaPicker`]: crate::application::port::MediaPicker
//! [`PermissionGate`]: crate::application::port::PermissionGate

pub mod fs_permission;
pub mod rfd_picker;

// Re-export main types for convenience
pub use fs_permission::FsPermissionGate;
pub use rfd_picker::RfdMediaPicker;
