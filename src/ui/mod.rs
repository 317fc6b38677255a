//! Plain-text screen renderers
//!
//! The four screens are thin data-binding views: each renderer takes a
//! snapshot of the state it displays and formats it into a String. No
//! screen mutates anything; commands flow the other way, from the console
//! to the controller and the stub action handlers.

pub mod activity;
pub mod alerts;
pub mod dashboard;
pub mod sos;

/// Shared screen header
pub(crate) fn header(screen: &str) -> String {
    let title = format!("SecureSphere - {}", screen);
    let rule = "=".repeat(title.len());
    format!("{}\n{}\n[Protected]\n", title, rule)
}
