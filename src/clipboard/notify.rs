//! Outcome notifications for clipboard copies

use std::sync::Mutex;

use colored::*;

/// Capability to tell the user whether a copy succeeded
pub trait Notifier: Send + Sync {
    /// Report a successful copy
    fn success(&self, message: &str);

    /// Report a failed copy
    fn error(&self, message: &str);
}

/// Prints notifications to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        eprintln!("{} {}", "✔".green(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✘".red(), message.red());
    }
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Notifier that keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of success notifications
    pub fn success_count(&self) -> usize {
        self.count(|n| matches!(n, Notification::Success(_)))
    }

    /// Number of error notifications
    pub fn error_count(&self) -> usize {
        self.count(|n| matches!(n, Notification::Error(_)))
    }

    fn count(&self, pred: impl Fn(&Notification) -> bool) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|n| pred(n))
            .count()
    }

    fn push(&self, notification: Notification) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Notification::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_starts_empty() {
        let notifier = RecordingNotifier::new();
        assert!(notifier.notifications().is_empty());
        assert_eq!(notifier.success_count(), 0);
        assert_eq!(notifier.error_count(), 0);
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.success("已复制");
        notifier.error("复制失败，请手动复制");

        assert_eq!(
            notifier.notifications(),
            vec![
                Notification::Success("已复制".to_string()),
                Notification::Error("复制失败，请手动复制".to_string()),
            ]
        );
        assert_eq!(notifier.success_count(), 1);
        assert_eq!(notifier.error_count(), 1);
    }

    #[test]
    fn test_console_notifier_does_not_panic() {
        ConsoleNotifier.success("copied");
        ConsoleNotifier.error("copy failed");
    }
}
