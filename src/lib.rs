// Library interface for SecureSphere
// This allows tests and the binary to access the crate's functionality

pub mod actions;
pub mod activation;
pub mod alerts;
pub mod config;
pub mod config_file;
pub mod constants;
pub mod feeds;
pub mod notifications;
pub mod ui;

use actions::QuickActions;
use activation::ActivationController;
use alerts::AlertBoard;
use config_file::Config;
use constants::{COUNTDOWN_TICK_INTERVAL_SECS, TIMER_SWEEP_INTERVAL_MS};
use feeds::{sample::SampleData, SafetyDataSource};
use log::info;
use notifications::NotificationSink;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Core SecureSphere state shared between the screens and the console
pub struct SecureSphereCore {
    pub activation: ActivationController,
    pub alerts: AlertBoard,
    pub actions: QuickActions,
    source: Arc<dyn SafetyDataSource>,
}

impl SecureSphereCore {
    /// Create a core instance bound to the given sink and data source
    pub fn new(
        config: &Config,
        sink: Arc<dyn NotificationSink>,
        source: Arc<dyn SafetyDataSource>,
    ) -> Self {
        let activation = ActivationController::new(sink.clone());
        activation.set_countdown_seconds(config.countdown_seconds);
        activation.set_tap_window_ms(config.tap_window_ms);
        activation.set_long_press_ms(config.long_press_ms);

        let alerts = AlertBoard::from_source(source.as_ref());
        let actions = QuickActions::new(config.emergency_number.clone(), sink);

        Self {
            activation,
            alerts,
            actions,
            source,
        }
    }

    /// Create a core instance backed by the bundled sample data
    pub fn with_sample_data(config: &Config, sink: Arc<dyn NotificationSink>) -> Self {
        Self::new(config, sink, Arc::new(SampleData))
    }

    pub fn data_source(&self) -> &dyn SafetyDataSource {
        self.source.as_ref()
    }

    /// Start the host timing facility (countdown tick + gesture timer sweep)
    pub fn start_background_threads(&self) {
        self.start_countdown_tick_thread();
        self.start_timer_sweep_thread();
        info!("Background threads started");
    }

    /// Background thread delivering one countdown tick per elapsed second
    fn start_countdown_tick_thread(&self) {
        let activation = self.activation.clone();
        thread::Builder::new()
            .name("countdown-tick".to_string())
            .spawn(move || loop {
                thread::sleep(Duration::from_secs(COUNTDOWN_TICK_INTERVAL_SECS));
                // Cheap no-op while unarmed
                activation.on_tick();
            })
            .expect("Failed to spawn countdown tick thread");
    }

    /// Background thread observing the tap-window and long-press deadlines
    fn start_timer_sweep_thread(&self) {
        let activation = self.activation.clone();
        thread::Builder::new()
            .name("timer-sweep".to_string())
            .spawn(move || loop {
                thread::sleep(Duration::from_millis(TIMER_SWEEP_INTERVAL_MS));
                activation.sweep_timers();
            })
            .expect("Failed to spawn timer sweep thread");
    }
}
