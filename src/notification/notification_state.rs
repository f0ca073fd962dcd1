//! Transient status message with an expiry time

use std::time::{Duration, Instant};

use crate::theme::{self, notification::NotificationColors};

/// Determines colors and how long the message stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Short-lived confirmation such as "Loaded 240 runners"
    #[default]
    Info,
    /// Longer-lived, e.g. an unreadable config file
    Warning,
}

impl NotificationType {
    pub fn lifetime(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    pub fn colors(self) -> &'static NotificationColors {
        match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationType,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationType, now: Instant) -> Self {
        Self {
            message: message.to_string(),
            kind,
            expires_at: now + kind.lifetime(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// At most one notification is visible; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_at(message, NotificationType::Info, Instant::now());
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_at(message, NotificationType::Warning, Instant::now());
    }

    pub fn show_at(&mut self, message: &str, kind: NotificationType, now: Instant) {
        self.current = Some(Notification::new(message, kind, now));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the message once its lifetime has passed; true if one was dropped
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|notification| notification.is_expired_at(now));
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
