// SPDX-License-Identifier: MPL-2.0
//! Toasts for outcomes that happen outside the card itself: a denied photo
//! library, an unreadable photo, templates that failed to render, a broken
//! configuration file.
//!
//! Each toast belongs to a [`Topic`]; a newer toast on the same topic
//! replaces the older one. Warnings leave after five seconds unless made
//! sticky, errors stay until dismissed.
//!
//! ```
//! use card_composer::ui::notifications::{Manager, Notification, Topic};
//!
//! let mut toasts = Manager::new();
//! toasts.push(Notification::error(Topic::Photo, "error-photo-read").with_arg("name", "a.png"));
//! toasts.push(Notification::error(Topic::Photo, "error-photo-decode").with_arg("name", "b.png"));
//! assert_eq!(toasts.len(), 1);
//!
//! toasts.dismiss_topic(Topic::Photo);
//! assert!(toasts.is_empty());
//! ```

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, Topic};
