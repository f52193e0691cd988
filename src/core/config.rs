// src/core/config.rs
use std::env;

use log::LevelFilter;

// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Analysis
    // Cap on analyzed password length: the keyspace exponentiation grows
    // with length, so unbounded input would allocate unbounded integers.
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_password_length: 16,
            max_password_length: 256,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("MAX_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.max_password_length = length;
            }
        }

        if let Ok(val) = env::var("LOG_LEVEL") {
            match val.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using Info", val),
            }
        }

        config
    }
}
