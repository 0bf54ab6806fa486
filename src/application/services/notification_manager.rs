use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::{Notification, NotificationLevel, NotificationPort};

/// Queue of popup notifications, shown one at a time.
///
/// Every notification can also be forwarded to an external
/// [`NotificationPort`] (desktop notifications).
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
    forward: Option<Arc<dyn NotificationPort>>,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl std::fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationManager")
            .field("queue", &self.queue)
            .field("default_duration", &self.default_duration)
            .field("forwarding", &self.forward.is_some())
            .finish()
    }
}

impl NotificationManager {
    /// Creates an empty queue whose notifications last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
            forward: None,
        }
    }

    /// Also sends every notification to `port`.
    #[must_use]
    pub fn with_forwarding(mut self, port: Arc<dyn NotificationPort>) -> Self {
        self.forward = Some(port);
        self
    }

    /// Queues a notification and forwards it when forwarding is on.
    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        debug!(level = ?notification.level, message = %notification.message, "Queued notification");
        if let Some(port) = &self.forward {
            port.send(&notification.title, &notification.message);
        }
        self.queue.push_back(notification);
    }

    /// Queues an info notification.
    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, NotificationLevel::Info.default_title(), message);
    }

    /// Queues a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(
            NotificationLevel::Success,
            NotificationLevel::Success.default_title(),
            message,
        );
    }

    /// Queues a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Warn, NotificationLevel::Warn.default_title(), message);
    }

    /// Queues an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, NotificationLevel::Error.default_title(), message);
    }

    /// Starts the front notification's timer and drops it once expired.
    /// Returns true when the visible notification changed.
    pub fn tick(&mut self) -> bool {
        let Some(front) = self.queue.front_mut() else {
            return false;
        };
        front.mark_displayed();
        if !front.is_expired() {
            return false;
        }
        self.queue.pop_front();
        if let Some(next) = self.queue.front_mut() {
            next.mark_displayed();
        }
        true
    }

    /// Returns the notification on screen.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Returns whether anything is queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of queued notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Iterates over queued notifications, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Drops the front notification early.
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }
}
