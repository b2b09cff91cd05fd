//! Configuration and CLI argument handling
//!
//! Every option can come from a flag or from the environment, and a `.env`
//! file in the working directory is loaded first when present.

use std::time::Duration;

use clap::Parser;
use tracing::{debug, warn};

use crate::state::{clock::DEFAULT_LIMIT_SECONDS, ClockSettings};

/// Default firing interval in milliseconds
pub const DEFAULT_PERIOD_MS: u64 = 1000;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "clock-chime")]
#[command(about = "A console clock that chimes every second, minute and hour")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Message printed every second
    #[arg(long, env = "TICK_VALUE", default_value = "tick")]
    pub tick: String,

    /// Message printed every minute
    #[arg(long, env = "TOCK_VALUE", default_value = "tock")]
    pub tock: String,

    /// Message printed every hour
    #[arg(long, env = "BONG_VALUE", default_value = "bong")]
    pub bong: String,

    /// Seconds to run before stopping (defaults to 3 hours)
    #[arg(short, long, env = "CLOCK_LIMIT", allow_negative_numbers = true)]
    pub limit: Option<String>,

    /// Milliseconds between firings
    #[arg(long, env = "CLOCK_PERIOD_MS")]
    pub period_ms: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Load `.env` if present, then parse flags and environment
    pub fn load() -> Self {
        load_env_file();
        Parser::parse()
    }

    /// Run length in seconds
    ///
    /// A value that is not an integer falls back to the default. Zero and
    /// negative limits are kept as zero, so the clock completes on its first
    /// firing.
    pub fn limit_seconds(&self) -> u64 {
        let Some(raw) = self.limit.as_deref() else {
            return DEFAULT_LIMIT_SECONDS;
        };

        match raw.trim().parse::<i64>() {
            Ok(value) => u64::try_from(value).unwrap_or(0),
            Err(_) => {
                warn!(
                    "Invalid clock limit {:?}, it does not seem to be an integer; using default of {}",
                    raw, DEFAULT_LIMIT_SECONDS
                );
                DEFAULT_LIMIT_SECONDS
            }
        }
    }

    /// Interval between firings, falling back to the default on bad input
    pub fn period(&self) -> Duration {
        Duration::from_millis(parse_positive(
            "clock period",
            self.period_ms.as_deref(),
            DEFAULT_PERIOD_MS,
        ))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Settings for the clock engine
    pub fn clock_settings(&self) -> ClockSettings {
        ClockSettings {
            tick: self.tick.clone(),
            tock: self.tock.clone(),
            bong: self.bong.clone(),
            limit_seconds: self.limit_seconds(),
            period: self.period(),
        }
    }
}

/// Load variables from a `.env` file without overriding the real environment
pub fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}

fn parse_positive(name: &str, raw: Option<&str>, default: u64) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!(
                "Invalid {} {:?}, it must be a positive integer; using default of {}",
                name, raw, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(limit: Option<&str>) -> Config {
        Config {
            tick: "tick".into(),
            tock: "tock".into(),
            bong: "bong".into(),
            limit: limit.map(String::from),
            period_ms: None,
            verbose: false,
        }
    }

    #[test]
    fn limit_defaults_to_three_hours() {
        assert_eq!(config(None).limit_seconds(), 10800);
    }

    #[test]
    fn limit_accepts_integers() {
        assert_eq!(config(Some("3600")).limit_seconds(), 3600);
        assert_eq!(config(Some(" 130 ")).limit_seconds(), 130);
    }

    #[test]
    fn non_integer_limit_falls_back() {
        assert_eq!(config(Some("invalid")).limit_seconds(), 10800);
        assert_eq!(config(Some("1.5")).limit_seconds(), 10800);
        assert_eq!(config(Some("")).limit_seconds(), 10800);
    }

    #[test]
    fn zero_and_negative_limits_are_kept() {
        assert_eq!(config(Some("0")).limit_seconds(), 0);
        assert_eq!(config(Some("-5")).limit_seconds(), 0);

        let zero = Config::try_parse_from(["clock-chime", "--limit", "0"]).unwrap();
        assert_eq!(zero.limit_seconds(), 0);

        let negative = Config::try_parse_from(["clock-chime", "--limit", "-5"]).unwrap();
        assert_eq!(negative.clock_settings().limit_seconds, 0);
    }

    #[test]
    fn period_defaults_to_one_second() {
        assert_eq!(config(None).period(), Duration::from_secs(1));

        let mut fast = config(None);
        fast.period_ms = Some("10".into());
        assert_eq!(fast.period(), Duration::from_millis(10));

        fast.period_ms = Some("soon".into());
        assert_eq!(fast.period(), Duration::from_secs(1));
    }

    #[test]
    fn flags_feed_clock_settings() {
        let config = Config::try_parse_from([
            "clock-chime",
            "--tick",
            "hello world",
            "--tock",
            "clack",
            "--bong",
            "gong",
            "--limit",
            "130",
            "--period-ms",
            "250",
            "-v",
        ])
        .unwrap();

        let settings = config.clock_settings();
        assert_eq!(settings.tick, "hello world");
        assert_eq!(settings.tock, "clack");
        assert_eq!(settings.bong, "gong");
        assert_eq!(settings.limit_seconds, 130);
        assert_eq!(settings.period, Duration::from_millis(250));
        assert_eq!(config.log_level(), "debug");
    }
}
