//! Emergency SOS screen

use std::fmt::Write;

use crate::activation::ActivationSnapshot;
use crate::feeds::StatusIndicator;

pub fn render(
    snapshot: &ActivationSnapshot,
    indicators: &[StatusIndicator],
    recording: bool,
    emergency_number: &str,
) -> String {
    let mut out = super::header("Emergency SOS");

    let _ = writeln!(out);
    if snapshot.armed {
        let _ = writeln!(out, "        (( {} ))", snapshot.countdown_seconds_remaining);
    } else {
        let _ = writeln!(out, "        (( SOS ))");
    }
    let _ = writeln!(out, "  Triple tap • Voice command • Long press");

    if snapshot.tap_count > 0 {
        let _ = writeln!(out, "  Taps registered: {}", snapshot.tap_count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Status:");
    for indicator in indicators {
        let _ = writeln!(out, "  {:<14} {}", indicator.label, indicator.detail);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Quick Actions:");
    let _ = writeln!(out, "  call    Call {}", emergency_number);
    let _ = writeln!(out, "  alert   Alert Group");
    let _ = writeln!(
        out,
        "  record  Record Evidence ({})",
        if recording { "Recording" } else { "Standby" }
    );

    if snapshot.armed {
        let _ = writeln!(out);
        let _ = writeln!(out, "*** EMERGENCY ALERT ACTIVE - Help is on the way ***");
        let _ = writeln!(out, "    (cancel to dismiss)");
    }

    out
}
