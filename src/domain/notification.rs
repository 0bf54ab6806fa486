use std::time::{Duration, Instant};

/// Severity of a notification; drives the popup colour and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// Something degraded but the app carried on.
    Warn,
    /// A request or action failed.
    Error,
}

impl NotificationLevel {
    /// Title used when the caller supplies none.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warn => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Transient message shown in a popup, one at a time.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Short heading shown in the popup border.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the popup was first drawn; `None` while queued.
    pub displayed_at: Option<Instant>,
    /// How long the popup stays up once displayed.
    pub duration: Duration,
}

impl Notification {
    /// Creates a notification with the default five second duration.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            displayed_at: None,
            duration: Duration::from_secs(5),
        }
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Only counts down once the popup has actually been shown.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|shown| shown.elapsed() > self.duration)
    }

    /// Starts the countdown. Later calls keep the first timestamp.
    pub fn mark_displayed(&mut self) {
        self.displayed_at.get_or_insert_with(Instant::now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_not_expired_before_display() {
        let n = Notification::new(NotificationLevel::Success, "Created", "Tropical Fizz")
            .with_duration(Duration::ZERO);
        assert!(!n.is_expired());
        assert_eq!(n.level.default_title(), "Success");
    }

    #[test]
    fn test_notification_expiry() {
        let mut n = Notification::new(NotificationLevel::Error, "Error", "Request failed")
            .with_duration(Duration::from_nanos(1));
        n.mark_displayed();
        std::thread::sleep(Duration::from_millis(1));
        assert!(n.is_expired());
    }
}
