//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use crate::camera::Point;
use crate::color::{Color, ColorError};
use crate::consts::{DEFAULT_CANVAS_SIZE, DEFAULT_COOLDOWN_MS};
use crate::controller::SessionInit;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Parse { key: &'static str, value: String },
    #[error("invalid color in {key}: {source}")]
    Color {
        key: &'static str,
        #[source]
        source: ColorError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub service: ServiceConfig,
    pub session: SessionInit,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// All optional:
    /// - `PLACE_API_URL`: service base URL (default `http://127.0.0.1:3000`)
    /// - `PLACE_ENABLED`: whether the user may draw at all (default true)
    /// - `PLACE_COOLDOWN_MS`: wait after a successful draw (default 300000)
    /// - `PLACE_COLOR`: saved color, `#rgb` or `#rrggbb`
    /// - `PLACE_ZOOMED_IN`: saved zoom preset
    /// - `PLACE_PAN_X` / `PLACE_PAN_Y`: saved camera offset
    /// - `PLACE_CANVAS_WIDTH` / `PLACE_CANVAS_HEIGHT`: default 1000
    /// - `PLACE_REQUEST_TIMEOUT_SECS`: default 10
    /// - `PLACE_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value is malformed.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = get("PLACE_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let service = ServiceConfig {
            base_url,
            request_timeout: Duration::from_secs(parse_or(
                &get,
                "PLACE_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            connect_timeout: Duration::from_secs(parse_or(
                &get,
                "PLACE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
        };

        let color = match get("PLACE_COLOR") {
            Some(raw) if !raw.trim().is_empty() => {
                Some(Color::parse(&raw).map_err(|source| ConfigError::Color { key: "PLACE_COLOR", source })?)
            }
            _ => None,
        };
        let pan_x = parse_opt::<f64>(&get, "PLACE_PAN_X")?;
        let pan_y = parse_opt::<f64>(&get, "PLACE_PAN_Y")?;
        let pan = match (pan_x, pan_y) {
            (None, None) => None,
            (x, y) => Some(Point::new(x.unwrap_or(0.0), y.unwrap_or(0.0))),
        };

        let session = SessionInit {
            enabled: parse_bool_opt(&get, "PLACE_ENABLED")?.unwrap_or(true),
            cooldown: Duration::from_millis(parse_or(&get, "PLACE_COOLDOWN_MS", DEFAULT_COOLDOWN_MS)?),
            color,
            zoomed_in: parse_bool_opt(&get, "PLACE_ZOOMED_IN")?,
            pan,
        };

        Ok(Self {
            service,
            session,
            canvas_width: parse_or(&get, "PLACE_CANVAS_WIDTH", DEFAULT_CANVAS_SIZE)?,
            canvas_height: parse_or(&get, "PLACE_CANVAS_HEIGHT", DEFAULT_CANVAS_SIZE)?,
        })
    }
}

fn parse_opt<T: FromStr>(get: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    match get(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(ConfigError::Parse { key, value: raw }),
        },
    }
}

fn parse_or<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    Ok(parse_opt(get, key)?.unwrap_or(default))
}

fn parse_bool_opt(get: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = get(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::Parse { key, value: raw }),
    }
}
