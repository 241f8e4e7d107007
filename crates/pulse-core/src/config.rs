//! Page-level configuration.
//!
//! Defaults come from `constants.rs`; a host page can override a few of them
//! through `data-*` attributes on the stage element.

use crate::constants::{
    ALERT_HIDE_DELAY_MS, DEFAULT_FFT_SIZE, DEFAULT_TRACKS_URL, MAX_FFT_SIZE, MIN_FFT_SIZE,
    UPLOAD_ACCEPT,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fft size {0} must be a power of two in 32..=32768")]
    FftSize(u32),
    #[error("alert delay {0}ms must be positive")]
    AlertDelay(i32),
    #[error("{key}: cannot parse {value:?}")]
    Parse { key: &'static str, value: String },
    #[error("tracks url must not be empty")]
    EmptyTracksUrl,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub tracks_url: String,
    pub fft_size: u32,
    pub alert_hide_delay_ms: i32,
    pub upload_accept: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracks_url: DEFAULT_TRACKS_URL.to_string(),
            fft_size: DEFAULT_FFT_SIZE,
            alert_hide_delay_ms: ALERT_HIDE_DELAY_MS,
            upload_accept: UPLOAD_ACCEPT,
        }
    }
}

pub const ATTR_TRACKS_URL: &str = "data-tracks-url";
pub const ATTR_FFT_SIZE: &str = "data-fft-size";
pub const ATTR_ALERT_MS: &str = "data-alert-ms";

impl Config {
    /// Apply overrides looked up by attribute name.
    ///
    /// Each override is validated on its own; a bad value leaves the default in
    /// place and is reported in the returned error list.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        if let Some(url) = lookup(ATTR_TRACKS_URL) {
            match url.trim() {
                "" => errors.push(ConfigError::EmptyTracksUrl),
                u => self.tracks_url = u.to_string(),
            }
        }

        if let Some(raw) = lookup(ATTR_FFT_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(n) => match validate_fft_size(n) {
                    Ok(n) => self.fft_size = n,
                    Err(e) => errors.push(e),
                },
                Err(_) => errors.push(ConfigError::Parse {
                    key: ATTR_FFT_SIZE,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(ATTR_ALERT_MS) {
            match raw.trim().parse::<i32>() {
                Ok(ms) if ms > 0 => self.alert_hide_delay_ms = ms,
                Ok(ms) => errors.push(ConfigError::AlertDelay(ms)),
                Err(_) => errors.push(ConfigError::Parse {
                    key: ATTR_ALERT_MS,
                    value: raw,
                }),
            }
        }

        (self, errors)
    }
}

/// WebAudio only accepts power-of-two FFT sizes within a fixed window.
pub fn validate_fft_size(n: u32) -> Result<u32, ConfigError> {
    if n.is_power_of_two() && (MIN_FFT_SIZE..=MAX_FFT_SIZE).contains(&n) {
        Ok(n)
    } else {
        Err(ConfigError::FftSize(n))
    }
}
