// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used by the notification center.

use crate::error::PlayerError;
use std::time::{Duration, Instant};

/// i18n key of the single acknowledgement button.
pub const ACKNOWLEDGE_KEY: &str = "notification-acknowledge";

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the title and whether the user must acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (3s duration).
    #[default]
    Info,
    /// Warning that doesn't block playback (5s duration).
    Warning,
    /// Error requiring acknowledgement.
    Error,
}

impl Severity {
    /// Returns the i18n key of the notification title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Severity::Info => "notification-info-title",
            Severity::Warning => "notification-warning-title",
            Severity::Error => "notification-error-title",
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (acknowledgement required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Builds the error notification shown for a player failure.
    #[must_use]
    pub fn from_player_error(err: &PlayerError) -> Self {
        err.i18n_args()
            .into_iter()
            .fold(Self::error(err.i18n_key()), |n, (key, value)| {
                n.with_arg(key, value)
            })
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &'static str {
        self.severity.title_key()
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns true if the user has to acknowledge this notification.
    #[must_use]
    pub fn requires_acknowledgement(&self) -> bool {
        self.severity.auto_dismiss_duration().is_none()
    }

    /// Returns whether this notification should auto-dismiss.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| self.created_at.elapsed() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::AssetKey;
    use crate::error::ValidationFailure;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("test");
        let n2 = Notification::info("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn error_severity_requires_acknowledgement() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(Notification::error("x").requires_acknowledgement());
        assert!(!Notification::info("x").requires_acknowledgement());
    }

    #[test]
    fn warning_duration_is_longer_than_info() {
        let info = Severity::Info.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > info);
    }

    #[test]
    fn player_error_becomes_error_notification() {
        let err = PlayerError::AssetValidationFailed(ValidationFailure::KeyFailed(
            AssetKey::Playable,
        ));
        let notification = Notification::from_player_error(&err);

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.title_key(), "notification-error-title");
        assert_eq!(notification.message_key(), "error-asset-key-failed");
        assert_eq!(
            notification.message_args(),
            &[("key".to_string(), "playable".to_string())]
        );
    }

    #[test]
    fn engine_fault_reads_like_unplayable() {
        let notification = Notification::from_player_error(&PlayerError::EngineFault);
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "error-asset-unplayable");
        assert!(notification.message_args().is_empty());
    }
}
