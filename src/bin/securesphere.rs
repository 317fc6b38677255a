// SecureSphere CLI - terminal front end for the personal safety companion
// This binary provides the four screens and an interactive console that
// drives the emergency activation controller

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use securesphere::config;
use securesphere::config_file::Config;
use securesphere::constants::{
    LONG_PRESS_DEFAULT_MS, SOS_COUNTDOWN_DEFAULT_SECONDS, SOS_COUNTDOWN_MAX_SECONDS,
    SOS_COUNTDOWN_MIN_SECONDS, TAP_WINDOW_DEFAULT_MS,
};
use securesphere::feeds::{AlertKind, SafetyDataSource};
use securesphere::notifications::{DesktopSink, NotificationSink, NullSink};
use securesphere::{ui, SecureSphereCore};

/// Personal safety companion with multi-trigger emergency SOS activation
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Personal safety companion with multi-trigger emergency SOS activation",
    long_about = "Personal safety companion with multi-trigger emergency SOS activation.

The SOS control can be armed three ways:
 - triple tap (three 'tap' commands within the tap window)
 - long press ('press' held past the hold threshold, or 'hold <ms>')
 - voice command ('voice')

Arming starts a short countdown; when it reaches zero the emergency state
clears itself. Any new trigger while armed restarts the countdown. 'cancel'
clears it immediately.

SCREENS:
  dashboard   Safety overview: alerts, contacts, power, activity, statistics
  alerts      Community alert feed with search, filters, and reporting
  sos         Emergency SOS panel with live countdown
  activity    Activity feed, security statistics, and safety score

SETUP:
  Run 'securesphere --setup' to configure the emergency number and the
  gesture timings. Configuration is stored at:
    ~/.config/securesphere/config.toml (platform equivalent)"
)]
struct Args {
    /// Render a single screen (dashboard, alerts, sos, activity) and exit
    #[arg(short, long)]
    screen: Option<String>,

    /// SOS countdown in seconds (3-60, overrides config file)
    /// NOTE: Keep range/default values in sync with SOS_COUNTDOWN_* constants
    #[arg(long)]
    countdown: Option<u32>,

    /// Suppress desktop notifications
    #[arg(short, long)]
    quiet: bool,

    /// Run interactive setup to configure the emergency number and timings
    #[arg(long)]
    setup: bool,
}

/// Helper function to prompt for a line with a default value
fn prompt_line(prompt: &str, default: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Helper function to prompt for a number with a default value
fn prompt_number(prompt: &str, default: u64) -> Result<u64> {
    let input = prompt_line(prompt, &default.to_string())?;
    input
        .parse::<u64>()
        .with_context(|| format!("Invalid number: {}", input))
}

/// Run interactive setup to configure the emergency number and timings
fn run_setup() -> Result<()> {
    println!("SecureSphere Setup");
    println!("==================\n");

    let number = prompt_line("Emergency number (default: 112): ", "112")?;

    let countdown = prompt_number(
        &format!("SOS countdown in seconds (default: {}): ", SOS_COUNTDOWN_DEFAULT_SECONDS),
        SOS_COUNTDOWN_DEFAULT_SECONDS as u64,
    )?;

    let tap_window = prompt_number(
        &format!("Tap window in milliseconds (default: {}): ", TAP_WINDOW_DEFAULT_MS),
        TAP_WINDOW_DEFAULT_MS,
    )?;

    let long_press = prompt_number(
        &format!("Long-press threshold in milliseconds (default: {}): ", LONG_PRESS_DEFAULT_MS),
        LONG_PRESS_DEFAULT_MS,
    )?;

    let config = Config::new(&number, countdown as u32, tap_window, long_press)
        .context("Failed to create configuration")?;

    config.save().context("Failed to save configuration")?;

    println!("\nConfiguration saved to: {}", Config::config_path().display());
    println!("Setup complete!");
    println!("\nYou can now run 'securesphere' to start the application.");

    Ok(())
}

fn render_screen(core: &SecureSphereCore, screen: &str) -> Result<String> {
    let source = core.data_source();
    match screen {
        "dashboard" => Ok(ui::dashboard::render(source)),
        "alerts" => Ok(ui::alerts::render(
            &core.alerts.all(),
            "",
            None,
            &source.security_stats(),
        )),
        "sos" => Ok(ui::sos::render(
            &core.activation.snapshot(),
            &source.status_indicators(),
            core.actions.is_recording(),
            core.actions.emergency_number(),
        )),
        "activity" => Ok(ui::activity::render(
            &source.recent_activity(),
            &source.security_stats(),
            &source.system_checks(),
            &source.safety_score(),
        )),
        other => anyhow::bail!(
            "Unknown screen '{}' (expected dashboard, alerts, sos, or activity)",
            other
        ),
    }
}

fn print_status(core: &SecureSphereCore) {
    let snap = core.activation.snapshot();
    if snap.armed {
        println!("SOS: ARMED - {}s remaining", snap.countdown_seconds_remaining);
    } else if snap.tap_count > 0 {
        println!("SOS: idle ({} tap(s) counted)", snap.tap_count);
    } else {
        println!("SOS: idle");
    }
}

fn print_help() {
    println!("Gestures:");
    println!("  tap            Register one tap on the SOS control");
    println!("  press          Begin a sustained press");
    println!("  release        End the sustained press");
    println!("  hold <ms>      Press, hold for <ms> milliseconds, release");
    println!("  voice          Voice-command trigger");
    println!("  cancel         Deactivate the emergency state");
    println!("Quick actions:");
    println!("  call           Call the emergency number");
    println!("  alert          Alert the trusted contact group");
    println!("  record         Toggle evidence recording");
    println!("Screens:");
    println!("  dashboard | alerts | sos | activity");
    println!("Alert board:");
    println!("  find <query>   Search the community alerts");
    println!("  filter <kind>  Show alerts of one kind (emergency, warning, safe, all)");
    println!("  report         Post a community alert (prompts for details)");
    println!("  helpful <id>   Vote an alert helpful");
    println!("Other:");
    println!("  status | help | quit");
}

fn run_console(core: &SecureSphereCore) -> Result<()> {
    println!("SecureSphere console - type 'help' for commands, 'quit' to exit");
    print_status(core);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command {
            "" => {}
            "tap" => {
                core.activation.on_tap();
                print_status(core);
            }
            "press" => {
                core.activation.on_press_start();
                print_status(core);
            }
            "release" => {
                core.activation.on_press_end();
                print_status(core);
            }
            "hold" => match rest.parse::<u64>() {
                Ok(ms) => {
                    core.activation.on_press_start();
                    thread::sleep(Duration::from_millis(ms));
                    core.activation.on_press_end();
                    print_status(core);
                }
                Err(_) => println!("Usage: hold <milliseconds>"),
            },
            "voice" => {
                core.activation.activate();
                print_status(core);
            }
            "cancel" => {
                core.activation.cancel();
                print_status(core);
            }
            "call" => core.actions.place_emergency_call(),
            "alert" => core.actions.alert_trusted_group(),
            "record" => {
                let recording = core.actions.toggle_evidence_recording();
                println!(
                    "Evidence recording: {}",
                    if recording { "started" } else { "stopped" }
                );
            }
            "dashboard" | "alerts" | "sos" | "activity" => {
                print!("{}", render_screen(core, command)?);
            }
            "find" => {
                let screen = ui::alerts::render(
                    &core.alerts.filtered(rest, None),
                    rest,
                    None,
                    &core.data_source().security_stats(),
                );
                print!("{}", screen);
            }
            "filter" => {
                let kind = match rest {
                    "all" | "" => None,
                    other => match AlertKind::parse(other) {
                        Some(kind) => Some(kind),
                        None => {
                            println!("Unknown kind '{}' (expected emergency, warning, safe, or all)", other);
                            continue;
                        }
                    },
                };
                let screen = ui::alerts::render(
                    &core.alerts.filtered("", kind),
                    "",
                    kind,
                    &core.data_source().security_stats(),
                );
                print!("{}", screen);
            }
            "report" => {
                let kind_input = prompt_line("Alert type (emergency/warning/safe, default: warning): ", "warning")?;
                let Some(kind) = AlertKind::parse(&kind_input) else {
                    println!("Unknown alert type '{}'", kind_input);
                    continue;
                };
                let title = prompt_line("Title: ", "")?;
                let description = prompt_line("Description: ", "")?;
                let location = prompt_line("Location: ", "")?;

                match core.alerts.report(kind, &title, &description, &location) {
                    Ok(alert) => println!(
                        "Alert #{} posted: [{}] {}",
                        alert.id,
                        alert.kind.severity_label(),
                        alert.title
                    ),
                    Err(e) => println!("Could not post alert: {}", e),
                }
            }
            "helpful" => match rest.parse::<u64>() {
                Ok(id) => match core.alerts.mark_helpful(id) {
                    Ok(count) => println!("Alert #{} now has {} helpful vote(s)", id, count),
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Usage: helpful <alert id>"),
            },
            "status" => print_status(core),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}' - type 'help' for commands", other),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Handle setup command
    if args.setup {
        return run_setup();
    }

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting SecureSphere");

    // Load configuration (missing file falls back to defaults)
    let mut cfg = Config::load_or_default()?;

    // Environment variables may override the config file
    if let Some(seconds) = config::parse_countdown_override() {
        cfg.countdown_seconds = seconds;
    }
    if let Some(window_ms) = config::parse_tap_window_override() {
        cfg.tap_window_ms = window_ms;
    }

    // CLI argument takes precedence over env var and config file
    match args.countdown {
        Some(seconds)
            if (SOS_COUNTDOWN_MIN_SECONDS..=SOS_COUNTDOWN_MAX_SECONDS).contains(&seconds) =>
        {
            info!("SOS countdown set via --countdown argument: {} seconds", seconds);
            cfg.countdown_seconds = seconds;
        }
        Some(seconds) => {
            warn!(
                "Invalid --countdown value: {} (must be {}-{} seconds). Using configured value.",
                seconds, SOS_COUNTDOWN_MIN_SECONDS, SOS_COUNTDOWN_MAX_SECONDS
            );
        }
        None => {}
    }

    let sink: Arc<dyn NotificationSink> = if args.quiet {
        Arc::new(NullSink)
    } else {
        Arc::new(DesktopSink)
    };

    let core = SecureSphereCore::with_sample_data(&cfg, sink);

    // One-shot screen rendering
    if let Some(screen) = args.screen.as_deref() {
        print!("{}", render_screen(&core, screen)?);
        return Ok(());
    }

    // Start the host timing facility and hand over to the console
    core.start_background_threads();
    run_console(&core)?;

    info!("SecureSphere shutdown complete");
    Ok(())
}
