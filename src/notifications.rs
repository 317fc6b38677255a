//! Transient user-facing notifications
//!
//! The activation controller and the quick actions report to a notification
//! sink: a fire-and-forget collaborator that surfaces short messages to the
//! user. Delivery is best-effort; a sink must never propagate failures back
//! into the caller.

use crate::constants::{NOTIFICATION_TIMEOUT_MS, NOTIFICATION_URGENT_TIMEOUT_MS};
use log::debug;

/// Severity marker attached to every notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Urgent,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Urgent => "urgent",
        }
    }
}

/// A single transient message: severity, title, and a short body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            severity: Severity::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn urgent(title: &str, message: &str) -> Self {
        Self {
            severity: Severity::Urgent,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// Destination for transient messages
///
/// Implementations must be infallible from the caller's point of view:
/// swallow delivery errors, never panic, never block for long.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Sink backed by the desktop notification center
pub struct DesktopSink;

impl NotificationSink for DesktopSink {
    fn notify(&self, notification: &Notification) {
        let timeout = match notification.severity {
            Severity::Urgent => NOTIFICATION_URGENT_TIMEOUT_MS,
            Severity::Info => NOTIFICATION_TIMEOUT_MS,
        };

        // Display failure must not reach the caller
        let _ = notify_rust::Notification::new()
            .summary(&notification.title)
            .body(&notification.message)
            .timeout(notify_rust::Timeout::Milliseconds(timeout))
            .show();

        debug!(
            "Notification ({}): {} - {}",
            notification.severity.as_str(),
            notification.title,
            notification.message
        );
    }
}

/// Sink that drops every notification (quiet mode)
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: &Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Urgent.as_str(), "urgent");
    }

    #[test]
    fn test_constructors_carry_severity() {
        let info = Notification::info("Title", "Body");
        assert_eq!(info.severity, Severity::Info);
        assert_eq!(info.title, "Title");

        let urgent = Notification::urgent("Alert", "Now");
        assert_eq!(urgent.severity, Severity::Urgent);
        assert_eq!(urgent.message, "Now");
    }

    #[test]
    fn test_null_sink_accepts_anything() {
        let sink = NullSink;
        sink.notify(&Notification::urgent("SOS Activated", "Emergency response initiated"));
        sink.notify(&Notification::info("", ""));
    }
}
