//! Bundled sample records for the presentational screens

use super::{
    ActivityEntry, ActivityStatus, AlertKind, BatteryStatus, CommunityAlert, ContactPriority,
    ContactStatus, EmergencyContact, SafetyDataSource, SafetyScore, StatCard, StatusIndicator,
    SystemCheck,
};

/// The in-memory data set shipped with the app
pub struct SampleData;

impl SafetyDataSource for SampleData {
    fn community_alerts(&self) -> Vec<CommunityAlert> {
        vec![
            CommunityAlert {
                id: 1,
                kind: AlertKind::Emergency,
                title: "Active Emergency Nearby".to_string(),
                description: "Emergency services responding to incident at Park Avenue intersection"
                    .to_string(),
                location: "Park Avenue".to_string(),
                age_minutes: 2,
                helpful: None,
                active: true,
            },
            CommunityAlert {
                id: 2,
                kind: AlertKind::Warning,
                title: "Poor Lighting Reported".to_string(),
                description: "Multiple users report broken street lights in downtown area"
                    .to_string(),
                location: "Downtown Plaza".to_string(),
                age_minutes: 15,
                helpful: Some(8),
                active: false,
            },
            CommunityAlert {
                id: 3,
                kind: AlertKind::Safe,
                title: "Safety Tip: Well-Lit Routes".to_string(),
                description: "Use Main Street route after dark - well lit with security cameras"
                    .to_string(),
                location: "Main Street".to_string(),
                age_minutes: 60,
                helpful: Some(24),
                active: false,
            },
            CommunityAlert {
                id: 4,
                kind: AlertKind::Safe,
                title: "New Safe Zone Added".to_string(),
                description:
                    "Shopping center now designated as community safe zone with 24/7 security"
                        .to_string(),
                location: "City Center".to_string(),
                age_minutes: 120,
                helpful: Some(45),
                active: false,
            },
        ]
    }

    fn emergency_contacts(&self) -> Vec<EmergencyContact> {
        vec![
            EmergencyContact {
                name: "Sarah Chen".to_string(),
                role: "Family".to_string(),
                status: ContactStatus::Safe,
                priority: ContactPriority::High,
            },
            EmergencyContact {
                name: "Emergency Services".to_string(),
                role: "911".to_string(),
                status: ContactStatus::Available,
                priority: ContactPriority::High,
            },
            EmergencyContact {
                name: "Mike Johnson".to_string(),
                role: "Friend".to_string(),
                status: ContactStatus::Safe,
                priority: ContactPriority::Medium,
            },
        ]
    }

    fn recent_activity(&self) -> Vec<ActivityEntry> {
        vec![
            ActivityEntry {
                title: "Location shared with group".to_string(),
                subtitle: "Downtown Plaza • 3 minutes ago".to_string(),
                detail: "GPS coordinates automatically shared".to_string(),
                status: ActivityStatus::Safe,
            },
            ActivityEntry {
                title: "Evidence auto-backup completed".to_string(),
                subtitle: "3 files secured • 8 minutes ago".to_string(),
                detail: "All recordings safely encrypted".to_string(),
                status: ActivityStatus::Secured,
            },
            ActivityEntry {
                title: "Entered monitored safe zone".to_string(),
                subtitle: "City Center Mall • 15 minutes ago".to_string(),
                detail: "24/7 security monitoring active".to_string(),
                status: ActivityStatus::SafeZone,
            },
            ActivityEntry {
                title: "Emergency contact updated".to_string(),
                subtitle: "Sarah Chen added • 1 hour ago".to_string(),
                detail: "Contact verification completed".to_string(),
                status: ActivityStatus::Updated,
            },
            ActivityEntry {
                title: "System health check completed".to_string(),
                subtitle: "All systems operational • 2 hours ago".to_string(),
                detail: "GPS, emergency services, and backup systems verified".to_string(),
                status: ActivityStatus::Healthy,
            },
            ActivityEntry {
                title: "Evidence recording started".to_string(),
                subtitle: "Park Avenue • 3 hours ago".to_string(),
                detail: "5 minute recording automatically saved".to_string(),
                status: ActivityStatus::Recorded,
            },
        ]
    }

    fn security_stats(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                label: "Evidence Files Secured".to_string(),
                value: "15".to_string(),
                sublabel: "Auto-backup enabled".to_string(),
            },
            StatCard {
                label: "Community Guardians".to_string(),
                value: "247".to_string(),
                sublabel: "Active in your area".to_string(),
            },
            StatCard {
                label: "Safe Zones Nearby".to_string(),
                value: "12".to_string(),
                sublabel: "Within 2km radius".to_string(),
            },
        ]
    }

    fn status_indicators(&self) -> Vec<StatusIndicator> {
        vec![
            StatusIndicator {
                label: "Protected".to_string(),
                detail: "24/7 Active".to_string(),
            },
            StatusIndicator {
                label: "GPS Active".to_string(),
                detail: "Precise Location".to_string(),
            },
            StatusIndicator {
                label: "73% Normal".to_string(),
                detail: "6h Remaining".to_string(),
            },
            StatusIndicator {
                label: "3 Connected".to_string(),
                detail: "Group Members".to_string(),
            },
        ]
    }

    fn system_checks(&self) -> Vec<SystemCheck> {
        vec![
            SystemCheck {
                label: "Real-time Sync".to_string(),
                state: "Active".to_string(),
            },
            SystemCheck {
                label: "Emergency Services Connection".to_string(),
                state: "Connected".to_string(),
            },
            SystemCheck {
                label: "GPS Accuracy".to_string(),
                state: "High (±3m)".to_string(),
            },
            SystemCheck {
                label: "Backup Status".to_string(),
                state: "Up to date".to_string(),
            },
        ]
    }

    fn battery_status(&self) -> BatteryStatus {
        BatteryStatus {
            percent: 73,
            time_remaining: "21h remaining".to_string(),
            power_save: false,
        }
    }

    fn safety_score(&self) -> SafetyScore {
        SafetyScore {
            percent: 98,
            summary:
                "Excellent security coverage with active monitoring and up-to-date emergency contacts"
                    .to_string(),
            highlights: vec![
                ("100%".to_string(), "GPS Active".to_string()),
                ("24/7".to_string(), "Monitoring".to_string()),
                ("<30s".to_string(), "Response Time".to_string()),
            ],
        }
    }
}
