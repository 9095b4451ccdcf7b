//! Configuration management for the address book.
//!
//! Settings are read from environment variables, with an optional `.env`
//! file loaded first. Every setting has a default, so an empty environment
//! yields `Config::default()`.

use crate::directory::LeapDayPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of days ahead the upcoming-birthday query looks.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Largest accepted window; anything longer wraps past a full year.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many days ahead a birthday may be to count as upcoming (default: 7)
    pub birthday_window_days: u32,

    /// Where Feb 29 birthdays land in non-leap years (default: Feb 28)
    pub leap_day_policy: LeapDayPolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthday window in days (default: 7)
    /// - `LEAP_DAY_POLICY`: `feb28` or `mar1` (default: `feb28`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let leap_day_policy = match env::var("LEAP_DAY_POLICY") {
            Ok(val) => val.parse::<LeapDayPolicy>().map_err(|reason| {
                ConfigError::InvalidValue {
                    var: "LEAP_DAY_POLICY".to_string(),
                    reason,
                }
            })?,
            Err(_) => LeapDayPolicy::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            leap_day_policy,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            leap_day_policy: LeapDayPolicy::default(),
            log_level: "error".to_string(),
        }
    }
}
