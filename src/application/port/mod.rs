// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media_picker`]: Photo selection from the user's library
//! - [`permission`]: Media library permission requests
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `rfd` types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Methods return boxed `'static` futures so callers can hand them to
//!   `Task::perform` directly

pub mod media_picker;
pub mod permission;

// Re-export main types for convenience
pub use media_picker::{MediaKind, MediaPicker, PickOptions};
pub use permission::PermissionGate;
