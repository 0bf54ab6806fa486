//! Desktop notifications with conditional compilation.

use crate::domain::ports::NotificationPort;

#[cfg(feature = "notify")]
mod notify_impl {
    use super::NotificationPort;
    use notify_rust::Notification;

    /// Mirrors popups to the desktop notification daemon.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        enabled: bool,
    }

    impl DesktopNotificationService {
        /// Creates the service; `enabled = false` makes `send` a no-op.
        #[must_use]
        pub const fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        /// Returns whether notifications are shown.
        #[must_use]
        pub const fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, title: &str, body: &str) {
            if !self.enabled {
                return;
            }

            let title = title.to_string();
            let body = body.to_string();

            tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&title)
                    .body(&body)
                    .appname("FlavorForge")
                    .show()
                {
                    tracing::warn!(error = %e, "Failed to show desktop notification");
                }
            });
        }
    }
}

#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::NotificationPort;

    /// No-op stand-in when built without the `notify` feature.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService;

    impl DesktopNotificationService {
        /// Creates the stub; the flag is ignored.
        #[must_use]
        pub const fn new(_enabled: bool) -> Self {
            Self
        }

        /// Always false.
        #[must_use]
        pub const fn is_enabled(&self) -> bool {
            false
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, _title: &str, _body: &str) {}
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopNotificationService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopNotificationService;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_service_is_silent() {
        let service = DesktopNotificationService::new(false);
        assert!(!service.is_enabled());
        service.send("Success", "nothing is shown");
    }
}
