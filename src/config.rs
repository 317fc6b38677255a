//! Configuration parsing for SecureSphere
//!
//! This module handles parsing of environment variables that can optionally
//! override settings from the config file. The primary configuration source
//! is the config.toml file (see config_file module).
//!
//! Environment variables (all optional):
//! - SECURESPHERE_COUNTDOWN_SECS: Override the SOS countdown from the config file
//! - SECURESPHERE_TAP_WINDOW_MS: Override the tap-counting window from the config file

use crate::constants::{
    SOS_COUNTDOWN_MAX_SECONDS, SOS_COUNTDOWN_MIN_SECONDS, TAP_WINDOW_MAX_MS, TAP_WINDOW_MIN_MS,
};
use log::{debug, info, warn};
use std::env;

/// Parse the SECURESPHERE_COUNTDOWN_SECS environment variable
///
/// Returns Some(seconds) if a valid countdown is configured (3-60 seconds)
/// Returns None if not set or invalid
pub fn parse_countdown_override() -> Option<u32> {
    match env::var("SECURESPHERE_COUNTDOWN_SECS") {
        Ok(val) => match val.parse::<u32>() {
            Ok(seconds)
                if (SOS_COUNTDOWN_MIN_SECONDS..=SOS_COUNTDOWN_MAX_SECONDS).contains(&seconds) =>
            {
                info!(
                    "SOS countdown set via environment variable: {} seconds",
                    seconds
                );
                Some(seconds)
            }
            Ok(seconds) => {
                warn!(
                    "Invalid SOS countdown: {} (must be {}-{} seconds). Using config file value.",
                    seconds, SOS_COUNTDOWN_MIN_SECONDS, SOS_COUNTDOWN_MAX_SECONDS
                );
                None
            }
            Err(e) => {
                warn!(
                    "Failed to parse SECURESPHERE_COUNTDOWN_SECS: {}. Using config file value.",
                    e
                );
                None
            }
        },
        Err(_) => {
            debug!("SECURESPHERE_COUNTDOWN_SECS not set.");
            None
        }
    }
}

/// Parse the SECURESPHERE_TAP_WINDOW_MS environment variable
///
/// Returns Some(milliseconds) if a valid tap window is configured (500-10000)
/// Returns None if not set or invalid
pub fn parse_tap_window_override() -> Option<u64> {
    match env::var("SECURESPHERE_TAP_WINDOW_MS") {
        Ok(val) => match val.parse::<u64>() {
            Ok(ms) if (TAP_WINDOW_MIN_MS..=TAP_WINDOW_MAX_MS).contains(&ms) => {
                info!("Tap window set via environment variable: {} ms", ms);
                Some(ms)
            }
            Ok(ms) => {
                warn!(
                    "Invalid tap window: {} (must be {}-{} ms). Using config file value.",
                    ms, TAP_WINDOW_MIN_MS, TAP_WINDOW_MAX_MS
                );
                None
            }
            Err(e) => {
                warn!(
                    "Failed to parse SECURESPHERE_TAP_WINDOW_MS: {}. Using config file value.",
                    e
                );
                None
            }
        },
        Err(_) => {
            debug!("SECURESPHERE_TAP_WINDOW_MS not set.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All assertions touching one environment variable live in one test
    // function: the environment is process-global and tests run in parallel.

    #[test]
    fn test_parse_countdown_override() {
        env::remove_var("SECURESPHERE_COUNTDOWN_SECS");
        assert_eq!(
            parse_countdown_override(),
            None,
            "Should return None when not set"
        );

        env::set_var("SECURESPHERE_COUNTDOWN_SECS", "3");
        assert_eq!(
            parse_countdown_override(),
            Some(3),
            "Should accept the minimum boundary"
        );

        env::set_var("SECURESPHERE_COUNTDOWN_SECS", "10");
        assert_eq!(
            parse_countdown_override(),
            Some(10),
            "Should accept a typical value"
        );

        env::set_var("SECURESPHERE_COUNTDOWN_SECS", "60");
        assert_eq!(
            parse_countdown_override(),
            Some(60),
            "Should accept the maximum boundary"
        );

        env::set_var("SECURESPHERE_COUNTDOWN_SECS", "2");
        assert_eq!(
            parse_countdown_override(),
            None,
            "Should reject a value below 3"
        );

        env::set_var("SECURESPHERE_COUNTDOWN_SECS", "61");
        assert_eq!(
            parse_countdown_override(),
            None,
            "Should reject a value above 60"
        );

        env::set_var("SECURESPHERE_COUNTDOWN_SECS", "invalid");
        assert_eq!(
            parse_countdown_override(),
            None,
            "Should reject a non-numeric value"
        );

        env::set_var("SECURESPHERE_COUNTDOWN_SECS", "-5");
        assert_eq!(
            parse_countdown_override(),
            None,
            "Should reject a negative value"
        );

        env::remove_var("SECURESPHERE_COUNTDOWN_SECS");
    }

    #[test]
    fn test_parse_tap_window_override() {
        env::remove_var("SECURESPHERE_TAP_WINDOW_MS");
        assert_eq!(
            parse_tap_window_override(),
            None,
            "Should return None when not set"
        );

        env::set_var("SECURESPHERE_TAP_WINDOW_MS", "500");
        assert_eq!(
            parse_tap_window_override(),
            Some(500),
            "Should accept the minimum boundary"
        );

        env::set_var("SECURESPHERE_TAP_WINDOW_MS", "2000");
        assert_eq!(
            parse_tap_window_override(),
            Some(2000),
            "Should accept the default window"
        );

        env::set_var("SECURESPHERE_TAP_WINDOW_MS", "10000");
        assert_eq!(
            parse_tap_window_override(),
            Some(10000),
            "Should accept the maximum boundary"
        );

        env::set_var("SECURESPHERE_TAP_WINDOW_MS", "499");
        assert_eq!(
            parse_tap_window_override(),
            None,
            "Should reject a value below 500"
        );

        env::set_var("SECURESPHERE_TAP_WINDOW_MS", "10001");
        assert_eq!(
            parse_tap_window_override(),
            None,
            "Should reject a value above 10000"
        );

        env::set_var("SECURESPHERE_TAP_WINDOW_MS", "2s");
        assert_eq!(
            parse_tap_window_override(),
            None,
            "Should reject a value with units"
        );

        env::remove_var("SECURESPHERE_TAP_WINDOW_MS");
    }
}
