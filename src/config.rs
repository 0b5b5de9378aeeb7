//! Configuration and CLI argument handling.
//!
//! Upstream credentials are intentionally absent here: the proxy endpoints
//! read them from the process environment at request time.

use clap::Parser;

use crate::types::Settings;

/// CLI argument parsing structure.
#[derive(Parser, Debug)]
#[command(
    name = "focusd",
    version,
    about = "Focus timer server with ambient sound control and an AI consultant proxy"
)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8787")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Initial focus duration in minutes (1-120)
    #[arg(
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub focus: u32,

    /// Initial short break duration in minutes (1-60)
    #[arg(
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub short_break: u32,

    /// Initial long break duration in minutes (1-120)
    #[arg(
        long,
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub long_break: u32,

    /// Completed focus phases between long breaks
    #[arg(
        long,
        default_value = "4",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub long_break_interval: u32,

    /// Disable the completion cue
    #[arg(long)]
    pub no_sound: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Get the server address as a formatted string.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on the verbose flag.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Builds the initial settings from the duration flags.
    pub fn initial_settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.set_focus_minutes(f64::from(self.focus));
        settings.set_short_break_minutes(f64::from(self.short_break));
        settings.set_long_break_minutes(f64::from(self.long_break));
        settings
    }
}

// ============================================================================
// Tests
// ============================================================================
