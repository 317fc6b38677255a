//! Centralized constants for SecureSphere
//!
//! This module contains all configurable numerical values used throughout
//! the application. Each constant includes documentation on its purpose,
//! unit, and recommended value range.

// ============================================================================
// SOS ACTIVATION GESTURES
// ============================================================================

/// Number of taps on the SOS control that triggers activation.
/// Unit: taps
/// Range: Fixed, matches the advertised "triple tap" gesture
pub const TAP_ACTIVATION_COUNT: u32 = 3;

/// Default tap-counting window. Taps further apart than this start a fresh
/// sequence.
/// Unit: milliseconds
/// Recommended range: 500-10000
pub const TAP_WINDOW_DEFAULT_MS: u64 = 2000;

/// Minimum tap window allowed via configuration.
/// Unit: milliseconds
/// Range: Fixed minimum, do not change without updating setup validation
pub const TAP_WINDOW_MIN_MS: u64 = 500;

/// Maximum tap window allowed via configuration.
/// Unit: milliseconds
/// Range: Fixed maximum (10 seconds)
pub const TAP_WINDOW_MAX_MS: u64 = 10_000;

/// Default sustained-press duration that triggers activation.
/// Unit: milliseconds
/// Recommended range: 500-5000
pub const LONG_PRESS_DEFAULT_MS: u64 = 1500;

/// Minimum long-press duration allowed via configuration.
/// Unit: milliseconds
/// Range: Fixed minimum, prevents accidental instant activation
pub const LONG_PRESS_MIN_MS: u64 = 500;

/// Maximum long-press duration allowed via configuration.
/// Unit: milliseconds
/// Range: Fixed maximum (5 seconds)
pub const LONG_PRESS_MAX_MS: u64 = 5000;

// ============================================================================
// SOS COUNTDOWN
// ============================================================================

/// Default emergency countdown. The SOS state stays armed for this many
/// seconds after each qualifying trigger, then auto-deactivates.
/// Unit: seconds
/// Recommended range: 3-60
pub const SOS_COUNTDOWN_DEFAULT_SECONDS: u32 = 5;

/// Minimum countdown allowed via configuration.
/// Unit: seconds
/// Range: Fixed minimum
pub const SOS_COUNTDOWN_MIN_SECONDS: u32 = 3;

/// Maximum countdown allowed via configuration.
/// Unit: seconds
/// Range: Fixed maximum (1 minute)
pub const SOS_COUNTDOWN_MAX_SECONDS: u32 = 60;

// ============================================================================
// POLLING & THREAD INTERVALS
// ============================================================================

/// Gesture timer sweep interval. Bounds how late the tap-window expiry and
/// the long-press firing can be observed.
/// Unit: milliseconds
/// Recommended range: 50-250 (must stay well below LONG_PRESS_DEFAULT_MS)
pub const TIMER_SWEEP_INTERVAL_MS: u64 = 100;

/// Countdown tick interval. The countdown decrements once per tick.
/// Unit: seconds
/// Range: Fixed, the countdown is defined in whole seconds
pub const COUNTDOWN_TICK_INTERVAL_SECS: u64 = 1;

// ============================================================================
// NOTIFICATION TIMEOUTS
// ============================================================================

/// Standard notification display duration.
/// Unit: milliseconds
/// Recommended range: 2000-5000 (long enough to read, short enough to not annoy)
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// Urgent notification display duration (longer for emergency messages).
/// Unit: milliseconds
/// Recommended range: 4000-10000 (emergencies need more attention)
pub const NOTIFICATION_URGENT_TIMEOUT_MS: u32 = 5000;

// ============================================================================
// EMERGENCY DIALING
// ============================================================================

/// Default emergency number dialed by the "call" quick action.
/// Range: Overridable via config file (e.g. "911")
pub const DEFAULT_EMERGENCY_NUMBER: &str = "112";
