//! Dashboard screen

use std::fmt::Write;

use crate::feeds::SafetyDataSource;

/// How many alert and activity entries the dashboard previews
const PREVIEW_ENTRIES: usize = 3;

pub fn render(source: &dyn SafetyDataSource) -> String {
    let mut out = super::header("Safety Dashboard");

    let alerts = source.community_alerts();
    let _ = writeln!(out);
    let _ = writeln!(out, "Community Alerts ({} active):", alerts.iter().filter(|a| a.active).count());
    for alert in alerts.iter().take(PREVIEW_ENTRIES) {
        let _ = writeln!(out, "  [{}] {}", alert.kind.severity_label(), alert.title);
        let _ = writeln!(out, "      {}", alert.description);
        let mut meta = format!("      {} • {}", alert.location, alert.age_label());
        if let Some(helpful) = alert.helpful {
            let _ = write!(meta, " • {} helpful", helpful);
        }
        let _ = writeln!(out, "{}", meta);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Emergency Contacts:");
    for contact in source.emergency_contacts() {
        let _ = writeln!(
            out,
            "  {:<20} {:<8} [{}] priority: {}",
            contact.name,
            contact.role,
            contact.status.as_str(),
            contact.priority.as_str()
        );
    }
    let _ = writeln!(out, "  Emergency Services - 911 (automatic location sharing enabled)");

    let battery = source.battery_status();
    let _ = writeln!(out);
    let _ = writeln!(out, "Power Status:");
    let _ = writeln!(out, "  {}% • {}", battery.percent, battery.time_remaining);
    let _ = writeln!(
        out,
        "  Power Save Mode: {}",
        if battery.power_save { "Enabled" } else { "Disabled • All features active" }
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Recent Activity:");
    for entry in source.recent_activity().into_iter().take(PREVIEW_ENTRIES) {
        let _ = writeln!(out, "  {} ({})", entry.title, entry.status.label());
        let _ = writeln!(out, "      {}", entry.subtitle);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Statistics:");
    for stat in source.security_stats() {
        let _ = writeln!(out, "  {:<4} {} ({})", stat.value, stat.label, stat.sublabel);
    }

    out
}
