//! Read-only data sources for the presentational screens
//!
//! The dashboard, alert, SOS, and activity screens are thin views over
//! ordered sequences of records. The records come from a `SafetyDataSource`
//! so the view layer can be exercised against fixture data; the bundled
//! implementation is [`sample::SampleData`].

pub mod sample;

/// Alert category, ordered by urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Emergency,
    Warning,
    Safe,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Emergency => "emergency",
            AlertKind::Warning => "warning",
            AlertKind::Safe => "safe",
        }
    }

    /// Severity badge shown next to the alert title
    pub fn severity_label(&self) -> &'static str {
        match self {
            AlertKind::Emergency => "EMERGENCY",
            AlertKind::Warning => "MEDIUM",
            AlertKind::Safe => "LOW",
        }
    }

    pub fn parse(value: &str) -> Option<AlertKind> {
        match value.to_ascii_lowercase().as_str() {
            "emergency" => Some(AlertKind::Emergency),
            "warning" => Some(AlertKind::Warning),
            "safe" => Some(AlertKind::Safe),
            _ => None,
        }
    }
}

/// A community-reported alert
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityAlert {
    pub id: u64,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Age of the report in minutes (0 = just posted)
    pub age_minutes: u64,
    /// "N helpful" votes; emergency alerts carry no counter
    pub helpful: Option<u32>,
    /// Emergency still in progress
    pub active: bool,
}

impl CommunityAlert {
    pub fn age_label(&self) -> String {
        age_label(self.age_minutes)
    }
}

/// Render an age in minutes the way the feed displays it
pub fn age_label(minutes: u64) -> String {
    if minutes == 0 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if minutes < 120 {
        "1 hour ago".to_string()
    } else {
        format!("{} hours ago", minutes / 60)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Safe,
    Available,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Safe => "safe",
            ContactStatus::Available => "available",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPriority {
    High,
    Medium,
    Low,
}

impl ContactPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactPriority::High => "high",
            ContactPriority::Medium => "medium",
            ContactPriority::Low => "low",
        }
    }
}

/// One entry in the trusted contact list
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyContact {
    pub name: String,
    pub role: String,
    pub status: ContactStatus,
    pub priority: ContactPriority,
}

/// Status badge on an activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Safe,
    Secured,
    SafeZone,
    Updated,
    Healthy,
    Recorded,
}

impl ActivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Safe => "Safe",
            ActivityStatus::Secured => "Secured",
            ActivityStatus::SafeZone => "Safe Zone",
            ActivityStatus::Updated => "Updated",
            ActivityStatus::Healthy => "Healthy",
            ActivityStatus::Recorded => "Recorded",
        }
    }
}

/// One entry in the activity feed
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub title: String,
    pub subtitle: String,
    pub detail: String,
    pub status: ActivityStatus,
}

/// A headline statistic (value plus caption)
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub sublabel: String,
}

/// One of the status cards on the SOS screen
#[derive(Debug, Clone, PartialEq)]
pub struct StatusIndicator {
    pub label: String,
    pub detail: String,
}

/// A system health row on the activity screen
#[derive(Debug, Clone, PartialEq)]
pub struct SystemCheck {
    pub label: String,
    pub state: String,
}

/// Battery section of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryStatus {
    pub percent: u8,
    pub time_remaining: String,
    pub power_save: bool,
}

/// Safety-score summary at the bottom of the activity screen
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyScore {
    pub percent: u8,
    pub summary: String,
    pub highlights: Vec<(String, String)>,
}

/// Provider of the ordered record sequences behind the four screens
pub trait SafetyDataSource: Send + Sync {
    fn community_alerts(&self) -> Vec<CommunityAlert>;
    fn emergency_contacts(&self) -> Vec<EmergencyContact>;
    fn recent_activity(&self) -> Vec<ActivityEntry>;
    fn security_stats(&self) -> Vec<StatCard>;
    fn status_indicators(&self) -> Vec<StatusIndicator>;
    fn system_checks(&self) -> Vec<SystemCheck>;
    fn battery_status(&self) -> BatteryStatus;
    fn safety_score(&self) -> SafetyScore;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_label_buckets() {
        assert_eq!(age_label(0), "Just now");
        assert_eq!(age_label(2), "2 min ago");
        assert_eq!(age_label(59), "59 min ago");
        assert_eq!(age_label(60), "1 hour ago");
        assert_eq!(age_label(119), "1 hour ago");
        assert_eq!(age_label(120), "2 hours ago");
        assert_eq!(age_label(180), "3 hours ago");
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(AlertKind::Emergency.severity_label(), "EMERGENCY");
        assert_eq!(AlertKind::Warning.severity_label(), "MEDIUM");
        assert_eq!(AlertKind::Safe.severity_label(), "LOW");
    }

    #[test]
    fn test_alert_kind_parse() {
        assert_eq!(AlertKind::parse("emergency"), Some(AlertKind::Emergency));
        assert_eq!(AlertKind::parse("Warning"), Some(AlertKind::Warning));
        assert_eq!(AlertKind::parse("SAFE"), Some(AlertKind::Safe));
        assert_eq!(AlertKind::parse("unknown"), None);
    }
}
