// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` presents one alert at a time, like a modal
//! dialog. Later notifications wait in a queue until the current one is
//! acknowledged or expires.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user pressed the acknowledgement button.
    Acknowledge(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Holds the presented notification and the ones waiting behind it.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    presented: Option<Notification>,
    queue: VecDeque<Notification>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presents `notification` now if nothing is showing, queues it otherwise.
    pub fn push(&mut self, notification: Notification) {
        if self.presented.is_none() {
            self.presented = Some(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn acknowledge(&mut self, id: NotificationId) -> bool {
        if self.presented.as_ref().is_some_and(|n| n.id() == id) {
            self.presented = self.queue.pop_front();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses the presented notification if it has expired.
    pub fn tick(&mut self) {
        if let Some(id) = self
            .presented
            .as_ref()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
        {
            self.acknowledge(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Acknowledge(id) => {
                self.acknowledge(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// The notification currently on screen.
    #[must_use]
    pub fn presented(&self) -> Option<&Notification> {
        self.presented.as_ref()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.presented.is_some() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.presented = None;
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_center_is_empty() {
        let center = NotificationCenter::new();
        assert!(center.presented().is_none());
        assert!(!center.has_notifications());
    }

    #[test]
    fn second_notification_waits_for_the_first() {
        let mut center = NotificationCenter::new();
        let first = Notification::error("first");
        let first_id = first.id();
        center.push(first);
        center.push(Notification::error("second"));

        assert_eq!(center.presented().map(Notification::message_key), Some("first"));
        assert_eq!(center.queued_count(), 1);

        assert!(center.acknowledge(first_id));
        assert_eq!(center.presented().map(Notification::message_key), Some("second"));
        assert_eq!(center.queued_count(), 0);
    }

    #[test]
    fn acknowledge_unknown_returns_false() {
        let mut center = NotificationCenter::new();
        let fake_id = Notification::info("temp").id();
        assert!(!center.acknowledge(fake_id));
    }

    #[test]
    fn acknowledge_twice_only_counts_once() {
        let mut center = NotificationCenter::new();
        let notification = Notification::error("once");
        let id = notification.id();
        center.push(notification);

        assert!(center.acknowledge(id));
        assert!(!center.acknowledge(id));
    }

    #[test]
    fn errors_do_not_auto_dismiss() {
        let mut center = NotificationCenter::new();
        let notification = Notification::error("test-error");
        let id = notification.id();
        center.push(notification);

        center.tick();
        assert!(center.presented().is_some());

        center.handle_message(&Message::Acknowledge(id));
        assert!(center.presented().is_none());
    }

    #[test]
    fn clear_removes_all() {
        let mut center = NotificationCenter::new();
        for i in 0..3 {
            center.push(Notification::warning(format!("test-{i}")));
        }
        center.clear();
        assert!(!center.has_notifications());
    }
}
