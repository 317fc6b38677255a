//! Community alert board
//!
//! Holds the alert feed in memory and supports the interactions the alerts
//! screen offers: search, kind filtering, reporting a new alert, and marking
//! an alert helpful. Nothing is persisted; the board lives for the session.

use anyhow::{anyhow, Result};
use parking_lot::Mutex;

use crate::feeds::{AlertKind, CommunityAlert, SafetyDataSource};
use log::info;

pub struct AlertBoard {
    alerts: Mutex<Vec<CommunityAlert>>,
}

impl AlertBoard {
    /// Seed the board from a data source, newest first
    pub fn from_source(source: &dyn SafetyDataSource) -> Self {
        Self {
            alerts: Mutex::new(source.community_alerts()),
        }
    }

    /// All alerts, newest first
    pub fn all(&self) -> Vec<CommunityAlert> {
        self.alerts.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.lock().is_empty()
    }

    /// Alerts matching a case-insensitive search query and an optional kind
    ///
    /// The query matches against title, description, and location; an empty
    /// query matches everything.
    pub fn filtered(&self, query: &str, kind: Option<AlertKind>) -> Vec<CommunityAlert> {
        let query = query.to_lowercase();
        self.alerts
            .lock()
            .iter()
            .filter(|alert| {
                let matches_query = query.is_empty()
                    || alert.title.to_lowercase().contains(&query)
                    || alert.description.to_lowercase().contains(&query)
                    || alert.location.to_lowercase().contains(&query);
                let matches_kind = kind.map_or(true, |k| alert.kind == k);
                matches_query && matches_kind
            })
            .cloned()
            .collect()
    }

    /// Post a new community alert
    ///
    /// All fields are required; the new alert is prepended with a fresh id
    /// and a "Just now" age.
    pub fn report(
        &self,
        kind: AlertKind,
        title: &str,
        description: &str,
        location: &str,
    ) -> Result<CommunityAlert> {
        if title.trim().is_empty() || description.trim().is_empty() || location.trim().is_empty() {
            return Err(anyhow!("Missing information: please fill in all required fields"));
        }

        let mut alerts = self.alerts.lock();
        let id = alerts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let alert = CommunityAlert {
            id,
            kind,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            location: location.trim().to_string(),
            age_minutes: 0,
            helpful: Some(0),
            active: kind == AlertKind::Emergency,
        };
        alerts.insert(0, alert.clone());
        info!("Community alert posted: [{}] {}", kind.severity_label(), alert.title);
        Ok(alert)
    }

    /// Vote an alert helpful and return the new count
    ///
    /// Emergency alerts carry no helpful counter (the screen hides the
    /// button), so voting one is an error, as is an unknown id.
    pub fn mark_helpful(&self, id: u64) -> Result<u32> {
        let mut alerts = self.alerts.lock();
        let alert = alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| anyhow!("No alert with id {}", id))?;

        match alert.helpful.as_mut() {
            Some(count) => {
                *count += 1;
                Ok(*count)
            }
            None => Err(anyhow!("Alert {} does not accept helpful votes", id)),
        }
    }
}
