// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Notify};
use crate::app::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE_NOTIFICATIONS` are showing, it's displayed
    /// immediately. Otherwise, it's queued and shown when space frees up.
    pub fn push(&mut self, mut notification: Notification) {
        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            notification.mark_shown();
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that has expired.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            if let Some(mut notification) = self.queue.pop_front() {
                notification.mark_shown();
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}

impl Notify for Manager {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn visible_keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message_key).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_to_visible_newest_first() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::error("second"));

        assert_eq!(visible_keys(&manager), ["second", "first"]);
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert!(!visible_keys(&manager).contains(&"queued"));
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();

        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first_id));

        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert!(visible_keys(&manager).contains(&"queued"));
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_removes_expired_notifications_only() {
        let mut manager = Manager::new();
        manager.push(Notification::success("expired").auto_dismiss(Duration::ZERO));
        manager.push(Notification::error("fresh"));

        manager.tick();

        assert_eq!(visible_keys(&manager), ["fresh"]);
    }

    #[test]
    fn promoted_toast_gets_its_full_display_time() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("short-{i}")).auto_dismiss(Duration::ZERO));
        }
        manager.push(Notification::success("queued").auto_dismiss(Duration::from_millis(500)));

        // Longer than the queued toast would last if its clock started at creation.
        thread::sleep(Duration::from_millis(600));
        manager.tick();
        assert_eq!(visible_keys(&manager), ["queued"]);

        manager.tick();
        assert_eq!(visible_keys(&manager), ["queued"]);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn notify_pushes_through_trait() {
        let mut manager = Manager::new();
        let sink: &mut dyn Notify = &mut manager;
        sink.notify(Notification::error("notification-copy-error"));

        assert_eq!(manager.visible_count(), 1);
    }
}
