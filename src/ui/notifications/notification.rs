// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum, and the
//! `Notify` capability components use to raise toasts without owning the
//! notification manager.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

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

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Failed action (red, 5s duration).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    ///
    /// Every severity is transient; failures simply linger a little longer.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(3),
            Severity::Warning | Severity::Error => Duration::from_secs(5),
        }
    }

    /// Returns the glyph shown in front of the toast message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification title.
    message_key: String,
    /// Optional i18n key for a secondary line under the title.
    description_key: Option<String>,
    /// When the toast became visible; queued toasts are restamped on promotion.
    shown_at: Instant,
    /// Custom auto-dismiss duration (overrides severity default).
    custom_dismiss_duration: Option<Duration>,
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
            description_key: None,
            shown_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a secondary line resolved from its own i18n key.
    #[must_use]
    pub fn with_description(mut self, description_key: impl Into<String>) -> Self {
        self.description_key = Some(description_key.into());
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
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
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn description_key(&self) -> Option<&str> {
        self.description_key.as_deref()
    }

    /// Starts the display clock from now.
    pub(super) fn mark_shown(&mut self) {
        self.shown_at = Instant::now();
    }

    /// Returns how long this notification has been on screen.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.shown_at.elapsed()
    }

    /// Returns whether this notification has outlived its display duration.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        let duration = self
            .custom_dismiss_duration
            .unwrap_or_else(|| self.severity.auto_dismiss_duration());
        self.age() >= duration
    }
}

/// Fire-and-forget sink for user-facing notifications.
///
/// Components raise toasts through this trait so tests can record what was
/// shown instead of rendering it.
pub trait Notify {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in memory.
impl Notify for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_notifications_are_transient() {
        assert!(Severity::Error.auto_dismiss_duration() > Duration::ZERO);
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        assert!(
            Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration()
        );
    }

    #[test]
    fn zero_custom_duration_dismisses_immediately() {
        let notification = Notification::success("test").auto_dismiss(Duration::ZERO);
        assert!(notification.should_auto_dismiss());
    }

    #[test]
    fn mark_shown_restarts_display_clock() {
        let mut notification = Notification::success("test").auto_dismiss(Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(30));
        assert!(notification.should_auto_dismiss());

        notification.mark_shown();
        assert!(!notification.should_auto_dismiss());
    }

    #[test]
    fn fresh_notification_is_not_dismissed() {
        assert!(!Notification::error("test").should_auto_dismiss());
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::success("notification-copy-success")
            .with_description("notification-copy-success-description");

        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message_key(), "notification-copy-success");
        assert_eq!(
            notification.description_key(),
            Some("notification-copy-success-description")
        );
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::success("first"));
        sink.notify(Notification::error("second"));

        let keys: Vec<&str> = sink.iter().map(Notification::message_key).collect();
        assert_eq!(keys, ["first", "second"]);
    }
}
