// SPDX-License-Identifier: MPL-2.0
//! The set of toasts currently on screen.

use super::notification::{Notification, NotificationId, Severity, Topic};
use std::time::Instant;

/// Oldest toasts are dropped beyond this count.
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Toasts in display order, oldest first, one per [`Topic`].
#[derive(Debug, Default)]
pub struct Manager {
    toasts: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing any toast on the same topic.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(
                topic = ?notification.topic(),
                key = notification.key(),
                "notification"
            ),
            Severity::Error => tracing::error!(
                topic = ?notification.topic(),
                key = notification.key(),
                "notification"
            ),
        }

        self.dismiss_topic(notification.topic());
        self.toasts.push(notification);
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.toasts.retain(|toast| toast.id() != id);
    }

    /// Removes the toast about `topic`, if any.
    pub fn dismiss_topic(&mut self, topic: Topic) {
        self.toasts.retain(|toast| toast.topic() != topic);
    }

    /// Drops the warnings whose lifetime ended before `now`.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.has_expired(now));
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
