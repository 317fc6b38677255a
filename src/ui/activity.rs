//! Activity feed screen

use std::fmt::Write;

use crate::feeds::{ActivityEntry, SafetyScore, StatCard, SystemCheck};

pub fn render(
    entries: &[ActivityEntry],
    stats: &[StatCard],
    checks: &[SystemCheck],
    score: &SafetyScore,
) -> String {
    let mut out = super::header("Recent Activity");

    let _ = writeln!(out);
    let _ = writeln!(out, "Track your safety actions and system updates");

    let _ = writeln!(out);
    for entry in entries {
        let _ = writeln!(out, "[{}] {}", entry.status.label(), entry.title);
        let _ = writeln!(out, "    {}", entry.subtitle);
        let _ = writeln!(out, "    {}", entry.detail);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Security Statistics:");
    for stat in stats {
        let _ = writeln!(out, "  {:<4} {} ({})", stat.value, stat.label, stat.sublabel);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "System Status:");
    for check in checks {
        let _ = writeln!(out, "  {:<32} {}", check.label, check.state);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Your Safety Score: {}%", score.percent);
    let _ = writeln!(out, "  {}", score.summary);
    for (value, label) in &score.highlights {
        let _ = writeln!(out, "  {:<5} {}", value, label);
    }

    out
}
