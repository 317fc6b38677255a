//! Emergency activation state machine
//!
//! Converts three independent raw input signals - rapid repeated taps, a
//! sustained press, and an external trigger such as a voice command - into a
//! single activation transition, then manages the countdown that
//! auto-deactivates the emergency state.
//!
//! The controller owns all timer bookkeeping itself. Instead of scheduling
//! callbacks it records deadlines (`tap_window_deadline`, `press_started_at`)
//! and observes them lazily: on the next input event and on each
//! `sweep_timers()` call from the host's sweep thread. Replacing a deadline
//! cancels the previous one, so at most one timer of each kind is pending.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::constants::{
    LONG_PRESS_DEFAULT_MS, SOS_COUNTDOWN_DEFAULT_SECONDS, TAP_ACTIVATION_COUNT,
    TAP_WINDOW_DEFAULT_MS,
};
use crate::notifications::{Notification, NotificationSink};
use log::{debug, info};

/// Mutable state owned exclusively by the controller
pub struct ActivationState {
    /// Whether the emergency state is currently active
    pub armed: bool,
    /// Seconds left until auto-deactivation (meaningful while armed)
    pub countdown_seconds_remaining: u32,
    /// Qualifying taps observed within the current tap window
    pub tap_count: u32,
    /// When the current tap-counting window expires (None = no window open)
    pub tap_window_deadline: Option<Instant>,
    /// When the pending press began (None = no press in progress)
    pub press_started_at: Option<Instant>,
    /// Tap window duration (see TAP_WINDOW_DEFAULT_MS)
    pub tap_window: Duration,
    /// Sustained-press threshold (see LONG_PRESS_DEFAULT_MS)
    pub long_press: Duration,
    /// Countdown loaded on each activation (see SOS_COUNTDOWN_DEFAULT_SECONDS)
    pub countdown_seconds: u32,
}

impl ActivationState {
    fn new() -> Self {
        Self {
            armed: false,
            countdown_seconds_remaining: 0,
            tap_count: 0,
            tap_window_deadline: None,
            press_started_at: None,
            tap_window: Duration::from_millis(TAP_WINDOW_DEFAULT_MS),
            long_press: Duration::from_millis(LONG_PRESS_DEFAULT_MS),
            countdown_seconds: SOS_COUNTDOWN_DEFAULT_SECONDS,
        }
    }
}

/// Read-only copy of the activation state for the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationSnapshot {
    pub armed: bool,
    pub countdown_seconds_remaining: u32,
    pub tap_count: u32,
}

/// Emergency activation controller shared across threads
///
/// Every transition runs to completion under the internal lock, so no
/// interleaving is observable. The notification for an activation is emitted
/// after the lock is released, still exactly once per activation.
#[derive(Clone)]
pub struct ActivationController {
    inner: Arc<Mutex<ActivationState>>,
    sink: Arc<dyn NotificationSink>,
}

impl ActivationController {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ActivationState::new())),
            sink,
        }
    }

    pub fn lock(&self) -> parking_lot::MutexGuard<'_, ActivationState> {
        self.inner.lock()
    }

    pub fn snapshot(&self) -> ActivationSnapshot {
        let state = self.inner.lock();
        ActivationSnapshot {
            armed: state.armed,
            countdown_seconds_remaining: state.countdown_seconds_remaining,
            tap_count: state.tap_count,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.inner.lock().armed
    }

    /// Set the tap window duration (called at startup)
    pub fn set_tap_window_ms(&self, window_ms: u64) {
        self.inner.lock().tap_window = Duration::from_millis(window_ms);
    }

    /// Set the sustained-press threshold (called at startup)
    pub fn set_long_press_ms(&self, press_ms: u64) {
        self.inner.lock().long_press = Duration::from_millis(press_ms);
    }

    /// Set the countdown loaded on each activation (called at startup)
    pub fn set_countdown_seconds(&self, seconds: u32) {
        self.inner.lock().countdown_seconds = seconds;
    }

    /// Register one discrete tap on the SOS control
    ///
    /// The first tap of a sequence opens a tap window; reaching
    /// TAP_ACTIVATION_COUNT taps inside it consumes the sequence and
    /// activates. A stale window is discarded before the tap is counted, so
    /// partial sequences never carry over.
    pub fn on_tap(&self) {
        let fired = {
            let mut state = self.inner.lock();
            let now = Instant::now();
            Self::expire_tap_window(&mut state, now);

            if state.tap_count == 0 {
                state.tap_window_deadline = Some(now + state.tap_window);
            }
            state.tap_count += 1;
            debug!("Tap registered ({}/{})", state.tap_count, TAP_ACTIVATION_COUNT);

            if state.tap_count >= TAP_ACTIVATION_COUNT {
                // Consume the sequence so a stray fourth tap starts a fresh count
                state.tap_count = 0;
                state.tap_window_deadline = None;
                Self::arm(&mut state);
                true
            } else {
                false
            }
        };

        if fired {
            self.notify_activated();
        }
    }

    /// Begin a sustained press
    ///
    /// A repeated press-start without an intervening release (duplicate
    /// events from overlapping input sources) restarts the hold timer, so at
    /// most one deferred firing is ever pending.
    pub fn on_press_start(&self) {
        let mut state = self.inner.lock();
        state.press_started_at = Some(Instant::now());
        debug!("Press started");
    }

    /// End a sustained press
    ///
    /// Cancels the deferred firing if it has not happened yet. Safe to call
    /// with no press in progress. If the press crossed the hold threshold but
    /// the sweep has not observed it yet, the activation fires here instead
    /// of being lost.
    pub fn on_press_end(&self) {
        let fired = {
            let mut state = self.inner.lock();
            match state.press_started_at.take() {
                Some(started) if started.elapsed() >= state.long_press => {
                    Self::arm(&mut state);
                    true
                }
                Some(_) => {
                    debug!("Press released before hold threshold");
                    false
                }
                None => false,
            }
        };

        if fired {
            self.notify_activated();
        }
    }

    /// Observe the gesture deadlines
    ///
    /// Called repeatedly by the host's sweep thread: expires the tap window
    /// once its deadline passes and fires the long press once it has been
    /// held long enough. Firing clears the press bookkeeping, so each press
    /// activates at most once.
    pub fn sweep_timers(&self) {
        let fired = {
            let mut state = self.inner.lock();
            let now = Instant::now();
            Self::expire_tap_window(&mut state, now);

            match state.press_started_at {
                Some(started) if now.duration_since(started) >= state.long_press => {
                    state.press_started_at = None;
                    Self::arm(&mut state);
                    true
                }
                _ => false,
            }
        };

        if fired {
            self.notify_activated();
        }
    }

    /// Advance the countdown by one elapsed second
    ///
    /// The host may tick unconditionally; this is a cheap no-op while
    /// unarmed. When the countdown reaches zero the emergency state
    /// auto-deactivates without a notification.
    pub fn on_tick(&self) {
        let mut state = self.inner.lock();
        if !state.armed {
            return;
        }
        if state.countdown_seconds_remaining > 0 {
            state.countdown_seconds_remaining -= 1;
        }
        if state.countdown_seconds_remaining == 0 {
            state.armed = false;
            info!("SOS countdown elapsed - emergency state deactivated");
        }
    }

    /// User-initiated deactivation
    ///
    /// Immediately disarms and zeroes the countdown regardless of current
    /// state. Tap and press bookkeeping is independent input-tracking state
    /// and is left untouched. Idempotent.
    pub fn cancel(&self) {
        let mut state = self.inner.lock();
        if state.armed {
            info!("SOS cancelled by user");
        }
        state.armed = false;
        state.countdown_seconds_remaining = 0;
    }

    /// Shared activation entry point
    ///
    /// Also serves external triggers (e.g. a voice command). Re-triggering
    /// while already armed restarts the countdown: any new qualifying
    /// trigger extends the emergency window.
    pub fn activate(&self) {
        {
            let mut state = self.inner.lock();
            Self::arm(&mut state);
        }
        self.notify_activated();
    }

    fn arm(state: &mut ActivationState) {
        state.armed = true;
        state.countdown_seconds_remaining = state.countdown_seconds;
        info!(
            "SOS activated - countdown {}s",
            state.countdown_seconds_remaining
        );
    }

    fn expire_tap_window(state: &mut ActivationState, now: Instant) {
        if let Some(deadline) = state.tap_window_deadline {
            if now >= deadline {
                debug!("Tap window expired with {} tap(s)", state.tap_count);
                state.tap_count = 0;
                state.tap_window_deadline = None;
            }
        }
    }

    fn notify_activated(&self) {
        self.sink
            .notify(&Notification::urgent("SOS Activated", "Emergency response initiated"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NullSink;

    fn controller() -> ActivationController {
        ActivationController::new(Arc::new(NullSink))
    }

    #[test]
    fn test_initial_state() {
        let ctl = controller();
        let snap = ctl.snapshot();
        assert!(!snap.armed);
        assert_eq!(snap.countdown_seconds_remaining, 0);
        assert_eq!(snap.tap_count, 0);
    }

    #[test]
    fn test_defaults_match_advertised_gestures() {
        let ctl = controller();
        let state = ctl.lock();
        assert_eq!(state.tap_window, Duration::from_millis(2000));
        assert_eq!(state.long_press, Duration::from_millis(1500));
        assert_eq!(state.countdown_seconds, 5);
    }

    #[test]
    fn test_activate_arms_and_loads_countdown() {
        let ctl = controller();
        ctl.activate();
        let snap = ctl.snapshot();
        assert!(snap.armed);
        assert_eq!(snap.countdown_seconds_remaining, 5);
    }

    #[test]
    fn test_tick_is_noop_while_unarmed() {
        let ctl = controller();
        ctl.on_tick();
        ctl.on_tick();
        assert!(!ctl.is_armed());
        assert_eq!(ctl.snapshot().countdown_seconds_remaining, 0);
    }

    #[test]
    fn test_cancel_clears_armed_state() {
        let ctl = controller();
        ctl.activate();
        ctl.cancel();
        let snap = ctl.snapshot();
        assert!(!snap.armed);
        assert_eq!(snap.countdown_seconds_remaining, 0);
    }

    #[test]
    fn test_tunables_are_applied() {
        let ctl = controller();
        ctl.set_tap_window_ms(250);
        ctl.set_long_press_ms(300);
        ctl.set_countdown_seconds(7);

        let state = ctl.lock();
        assert_eq!(state.tap_window, Duration::from_millis(250));
        assert_eq!(state.long_press, Duration::from_millis(300));
        drop(state);

        ctl.activate();
        assert_eq!(ctl.snapshot().countdown_seconds_remaining, 7);
    }
}
