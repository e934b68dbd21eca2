//! User-visible notifications.
//!
//! Controllers never render toasts or modals themselves; they report through
//! an injected [`Notifier`], which keeps them deterministic under test. The
//! production CLI logs notifications through `tracing`; tests record them.

use std::sync::Mutex;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Success,
    Error,
}

/// A capability for surfacing notifications to the operator.
pub trait Notifier: Send + Sync {
    /// Surface one notification.
    fn notify(&self, level: NotifyLevel, title: &str, message: &str);

    /// Informational notification.
    fn info(&self, title: &str, message: &str) {
        self.notify(NotifyLevel::Info, title, message);
    }

    /// Success notification.
    fn success(&self, title: &str, message: &str) {
        self.notify(NotifyLevel::Success, title, message);
    }

    /// Failure notification.
    fn error(&self, title: &str, message: &str) {
        self.notify(NotifyLevel::Error, title, message);
    }
}

/// Notifier that reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NotifyLevel, title: &str, message: &str) {
        match level {
            NotifyLevel::Info | NotifyLevel::Success => tracing::info!("{title}: {message}"),
            NotifyLevel::Error => tracing::error!("{title}: {message}"),
        }
    }
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub title: String,
    pub message: String,
}

/// Notifier that collects notifications for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    recorded: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the lock panicked.
    #[must_use]
    pub fn recorded(&self) -> Vec<Notification> {
        self.recorded
            .lock()
            .expect("notification lock poisoned")
            .clone()
    }

    /// Recorded notifications at one severity.
    #[must_use]
    pub fn at_level(&self, level: NotifyLevel) -> Vec<Notification> {
        self.recorded()
            .into_iter()
            .filter(|notification| notification.level == level)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotifyLevel, title: &str, message: &str) {
        self.recorded
            .lock()
            .expect("notification lock poisoned")
            .push(Notification {
                level,
                title: title.to_string(),
                message: message.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_collects_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.success("Success", "Product added successfully");
        notifier.error("Error", "Failed to fetch orders");

        let recorded = notifier.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded.first().map(|n| n.level), Some(NotifyLevel::Success));
        assert_eq!(notifier.at_level(NotifyLevel::Error).len(), 1);
    }
}
