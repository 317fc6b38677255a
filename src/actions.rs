//! Quick-action stub handlers
//!
//! The emergency shortcuts on the SOS screen: calling the emergency number,
//! alerting the trusted contact group, and toggling evidence recording.
//! Each one mutates local state and raises a notification; none of them is
//! wired to the activation state machine, and `activate()` never invokes
//! them - they are triggered only by explicit user commands.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::notifications::{Notification, NotificationSink};
use log::info;

pub struct QuickActions {
    emergency_number: String,
    recording: Mutex<bool>,
    sink: Arc<dyn NotificationSink>,
}

impl QuickActions {
    pub fn new(emergency_number: String, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            emergency_number,
            recording: Mutex::new(false),
            sink,
        }
    }

    pub fn emergency_number(&self) -> &str {
        &self.emergency_number
    }

    /// Place a call to the configured emergency number
    pub fn place_emergency_call(&self) {
        info!("Emergency call requested: {}", self.emergency_number);
        self.sink.notify(&Notification::urgent(
            &format!("Calling {}", self.emergency_number),
            "Emergency call initiated with location sharing",
        ));
    }

    /// Send an emergency message to the trusted contact group
    pub fn alert_trusted_group(&self) {
        info!("Group alert requested");
        self.sink.notify(&Notification::urgent(
            "Group Alert Sent",
            "Emergency message sent to your trusted contacts",
        ));
    }

    /// Toggle evidence recording and return the new state
    pub fn toggle_evidence_recording(&self) -> bool {
        let now_recording = {
            let mut recording = self.recording.lock();
            *recording = !*recording;
            *recording
        };

        if now_recording {
            info!("Evidence recording started");
            self.sink.notify(&Notification::urgent(
                "Recording Started",
                "Audio and video recording started",
            ));
        } else {
            info!("Evidence recording stopped");
            self.sink.notify(&Notification::info(
                "Recording Stopped",
                "Evidence saved securely",
            ));
        }

        now_recording
    }

    pub fn is_recording(&self) -> bool {
        *self.recording.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NullSink;

    fn actions() -> QuickActions {
        QuickActions::new("112".to_string(), Arc::new(NullSink))
    }

    #[test]
    fn test_recording_starts_stopped() {
        assert!(!actions().is_recording());
    }

    #[test]
    fn test_toggle_flips_recording_state() {
        let actions = actions();
        assert!(actions.toggle_evidence_recording());
        assert!(actions.is_recording());
        assert!(!actions.toggle_evidence_recording());
        assert!(!actions.is_recording());
    }

    #[test]
    fn test_call_and_alert_do_not_touch_recording() {
        let actions = actions();
        actions.place_emergency_call();
        actions.alert_trusted_group();
        assert!(!actions.is_recording());
    }
}
