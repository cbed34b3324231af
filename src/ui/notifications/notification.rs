// SPDX-License-Identifier: MPL-2.0
//! A single toast: what it is about, how serious it is and its message.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Warnings leave on their own after this long.
pub const WARNING_LIFETIME: Duration = Duration::from_secs(5);

/// Identifies a toast for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// What a toast reports on. At most one toast per topic is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Access to the photo library.
    Permission,
    /// The photo currently attached to the card.
    Photo,
    /// The bundled card templates.
    Templates,
    /// `settings.toml`.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something was skipped or degraded; composing still works.
    Warning,
    /// Part of the card cannot be shown.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Warning => "\u{26A0}",
            Severity::Error => "\u{2716}",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    topic: Topic,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    shown_at: Instant,
    sticky: bool,
}

impl Notification {
    fn new(topic: Topic, severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            topic,
            severity,
            key: key.into(),
            args: Vec::new(),
            shown_at: Instant::now(),
            sticky: severity == Severity::Error,
        }
    }

    #[must_use]
    pub fn warning(topic: Topic, key: impl Into<String>) -> Self {
        Self::new(topic, Severity::Warning, key)
    }

    /// Errors stay until the user dismisses them.
    #[must_use]
    pub fn error(topic: Topic, key: impl Into<String>) -> Self {
        Self::new(topic, Severity::Error, key)
    }

    /// Adds a Fluent argument to the message.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    /// Keeps a warning on screen until dismissed.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Fluent key of the message.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Whether the toast should be gone at `now`.
    #[must_use]
    pub fn has_expired(&self, now: Instant) -> bool {
        !self.sticky && now.saturating_duration_since(self.shown_at) >= WARNING_LIFETIME
    }
}
