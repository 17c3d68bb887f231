//! Meter configuration
//!
//! Reads runtime settings for the async meter from the environment.

use std::env::VarError;
use std::time::Duration;
use thiserror::Error;

pub const DEBOUNCE_ENV: &str = "PWD_METER_DEBOUNCE_MS";
const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} is not a number of milliseconds")]
    InvalidDebounce { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterConfig {
    /// Delay between the last keystroke and the evaluation.
    pub debounce: Duration,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl MeterConfig {
    /// Builds the configuration from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_METER_DEBOUNCE_MS`
    /// 2. Default of 300 ms
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDebounce`] if the variable is set but is
    /// not valid UTF-8 or not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = match std::env::var(DEBOUNCE_ENV) {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => return Ok(Self::default()),
            Err(VarError::NotUnicode(value)) => {
                return Err(ConfigError::InvalidDebounce {
                    var: DEBOUNCE_ENV,
                    value: value.to_string_lossy().into_owned(),
                });
            }
        };

        let millis = raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidDebounce {
                var: DEBOUNCE_ENV,
                value: raw.clone(),
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Meter debounce set to {}ms from {}", millis, DEBOUNCE_ENV);

        Ok(Self {
            debounce: Duration::from_millis(millis),
        })
    }
}
