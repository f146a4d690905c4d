//! Driver configuration.

use std::time::Duration;

use thiserror::Error;

use crate::engine::SessionConfig;

pub const ESC_TIMEOUT_VAR: &str = "TETRISRUN_ESC_TIMEOUT_MS";
pub const INITIAL_DROP_VAR: &str = "TETRISRUN_INITIAL_DROP_MS";
pub const FINAL_DROP_VAR: &str = "TETRISRUN_FINAL_DROP_US";
pub const DROP_STEP_VAR: &str = "TETRISRUN_DROP_STEP_MS";
pub const RAW_VAR: &str = "TETRISRUN_RAW";
pub const LOG_VAR: &str = "TETRISRUN_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
    #[error("gravity floor {floor:?} is above the initial interval {initial:?}")]
    FloorAboveInitial { floor: Duration, initial: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriverConfig {
    pub session: SessionConfig,
    pub raw_mode: bool,
    pub log_filter: Option<String>,
}

impl DriverConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`DriverConfig::from_env`] with an arbitrary variable source.
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = SessionConfig::default();

        let esc_timeout = match parse_u64(ESC_TIMEOUT_VAR, get(ESC_TIMEOUT_VAR))? {
            Some(0) => return Err(ConfigError::Zero { var: ESC_TIMEOUT_VAR }),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.esc_timeout,
        };
        let initial_drop = match parse_u64(INITIAL_DROP_VAR, get(INITIAL_DROP_VAR))? {
            Some(0) => return Err(ConfigError::Zero { var: INITIAL_DROP_VAR }),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.initial_drop,
        };
        let final_drop = parse_u64(FINAL_DROP_VAR, get(FINAL_DROP_VAR))?
            .map(Duration::from_micros)
            .unwrap_or(defaults.final_drop);
        let drop_step = parse_u64(DROP_STEP_VAR, get(DROP_STEP_VAR))?
            .map(Duration::from_millis)
            .unwrap_or(defaults.drop_step);

        if final_drop > initial_drop {
            return Err(ConfigError::FloorAboveInitial {
                floor: final_drop,
                initial: initial_drop,
            });
        }

        let raw_mode = get(RAW_VAR)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            session: SessionConfig {
                esc_timeout,
                initial_drop,
                final_drop,
                drop_step,
            },
            raw_mode,
            log_filter: get(LOG_VAR),
        })
    }
}

fn parse_u64(var: &'static str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    value
        .map(|v| {
            v.parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber { var, value: v })
        })
        .transpose()
}
