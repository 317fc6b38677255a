use std::sync::Arc;

use securesphere::config_file::Config;
use securesphere::feeds::sample::SampleData;
use securesphere::feeds::{AlertKind, SafetyDataSource};
use securesphere::notifications::NullSink;
use securesphere::{ui, SecureSphereCore};

fn core() -> SecureSphereCore {
    SecureSphereCore::with_sample_data(&Config::default(), Arc::new(NullSink))
}

#[test]
fn test_sos_screen_idle_shows_control_and_instructions() {
    let core = core();
    let screen = ui::sos::render(
        &core.activation.snapshot(),
        &core.data_source().status_indicators(),
        core.actions.is_recording(),
        core.actions.emergency_number(),
    );

    assert!(screen.contains("Emergency SOS"));
    assert!(screen.contains("(( SOS ))"));
    assert!(screen.contains("Triple tap • Voice command • Long press"));
    assert!(screen.contains("Call 112"));
    assert!(screen.contains("Standby"));
    assert!(!screen.contains("EMERGENCY ALERT ACTIVE"));
}

#[test]
fn test_sos_screen_armed_shows_countdown_and_banner() {
    let core = core();
    core.activation.activate();

    let screen = ui::sos::render(
        &core.activation.snapshot(),
        &core.data_source().status_indicators(),
        core.actions.is_recording(),
        core.actions.emergency_number(),
    );

    assert!(screen.contains("(( 5 ))"), "The countdown digit replaces the SOS label");
    assert!(screen.contains("EMERGENCY ALERT ACTIVE"));
}

#[test]
fn test_sos_screen_reflects_recording_state() {
    let core = core();
    core.actions.toggle_evidence_recording();

    let screen = ui::sos::render(
        &core.activation.snapshot(),
        &core.data_source().status_indicators(),
        core.actions.is_recording(),
        core.actions.emergency_number(),
    );

    assert!(screen.contains("(Recording)"));
}

#[test]
fn test_dashboard_screen_binds_all_sections() {
    let screen = ui::dashboard::render(&SampleData);

    assert!(screen.contains("Safety Dashboard"));
    assert!(screen.contains("Active Emergency Nearby"));
    assert!(screen.contains("Sarah Chen"));
    assert!(screen.contains("73%"));
    assert!(screen.contains("Location shared with group"));
    assert!(screen.contains("Community Guardians"));
}

#[test]
fn test_alerts_screen_lists_feed_with_badges() {
    let core = core();
    let screen = ui::alerts::render(
        &core.alerts.all(),
        "",
        None,
        &core.data_source().security_stats(),
    );

    assert!(screen.contains("[EMERGENCY] [ACTIVE] Active Emergency Nearby"));
    assert!(screen.contains("[MEDIUM] Poor Lighting Reported"));
    assert!(screen.contains("[LOW] New Safe Zone Added"));
    assert!(screen.contains("8 helpful"));
    assert!(screen.contains("2 min ago"));
}

#[test]
fn test_alerts_screen_empty_state() {
    let core = core();
    let filtered = core.alerts.filtered("nothing matches this", None);
    let screen = ui::alerts::render(
        &filtered,
        "nothing matches this",
        None,
        &core.data_source().security_stats(),
    );

    assert!(screen.contains("No alerts found"));
    assert!(screen.contains("Try adjusting your search or filters"));
}

#[test]
fn test_alerts_screen_shows_active_filter() {
    let core = core();
    let filtered = core.alerts.filtered("", Some(AlertKind::Safe));
    let screen = ui::alerts::render(
        &filtered,
        "",
        Some(AlertKind::Safe),
        &core.data_source().security_stats(),
    );

    assert!(screen.contains("kind=safe"));
    assert!(!screen.contains("[EMERGENCY]"));
}

#[test]
fn test_activity_screen_binds_feed_and_score() {
    let source = SampleData;
    let screen = ui::activity::render(
        &source.recent_activity(),
        &source.security_stats(),
        &source.system_checks(),
        &source.safety_score(),
    );

    assert!(screen.contains("Recent Activity"));
    assert!(screen.contains("[Safe Zone] Entered monitored safe zone"));
    assert!(screen.contains("Evidence Files Secured"));
    assert!(screen.contains("Real-time Sync"));
    assert!(screen.contains("Your Safety Score: 98%"));
}
