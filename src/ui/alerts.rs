//! Community alerts screen

use std::fmt::Write;

use crate::feeds::{AlertKind, CommunityAlert, StatCard};

pub fn render(
    alerts: &[CommunityAlert],
    query: &str,
    kind: Option<AlertKind>,
    stats: &[StatCard],
) -> String {
    let mut out = super::header("Community Alerts");

    let active = alerts.iter().filter(|a| a.active).count();
    let _ = writeln!(out);
    let _ = writeln!(out, "{} alerts • {} active", alerts.len(), active);

    if !query.is_empty() || kind.is_some() {
        let kind_label = kind.map(|k| k.as_str()).unwrap_or("all");
        let _ = writeln!(out, "Filter: kind={} query=\"{}\"", kind_label, query);
    }

    if alerts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No alerts found");
        if !query.is_empty() || kind.is_some() {
            let _ = writeln!(out, "Try adjusting your search or filters");
        } else {
            let _ = writeln!(out, "No community alerts in your area");
        }
        return out;
    }

    for alert in alerts {
        let _ = writeln!(out);
        let mut badges = format!("[{}]", alert.kind.severity_label());
        if alert.active {
            badges.push_str(" [ACTIVE]");
        }
        let _ = writeln!(out, "{} {}", badges, alert.title);
        let _ = writeln!(out, "    {}", alert.description);
        let mut meta = format!("    {} • {}", alert.location, alert.age_label());
        if let Some(helpful) = alert.helpful {
            let _ = write!(meta, " • {} helpful", helpful);
        }
        let _ = writeln!(out, "{}", meta);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Community powered safety:");
    for stat in stats {
        let _ = writeln!(out, "  {:<4} {}", stat.value, stat.label);
    }

    out
}
