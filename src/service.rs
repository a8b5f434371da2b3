//! Remote draw/cooldown service contract.
//!
//! The controller only ever calls two operations: ask how long the user must
//! still wait, and submit one tile. [`crate::http::HttpPlaceService`] is the
//! production implementation; tests supply their own.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::time::Duration;

use crate::color::Color;
use crate::consts::MAX_COOLDOWN;

/// Errors produced by remote service calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a response (connect, timeout, transport).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("service rejected request: status {status}")]
    Rejected {
        status: u16,
        /// Rate-limit hint from the response body, in seconds.
        wait_seconds: Option<f64>,
    },

    /// The response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ServiceError {
    /// The wait imposed by the service, when the failed response carried one.
    ///
    /// See [`wait_from_secs`] for how the raw value is bounded.
    #[must_use]
    pub fn wait_hint(&self) -> Option<Duration> {
        match self {
            Self::Rejected { wait_seconds: Some(secs), .. } => Some(wait_from_secs(*secs)),
            _ => None,
        }
    }
}

/// Convert a service-supplied wait in seconds to a schedulable duration.
///
/// Negative and NaN values mean no wait. Positive values too large to
/// represent, infinity included, become [`MAX_COOLDOWN`].
#[must_use]
pub fn wait_from_secs(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    match Duration::try_from_secs_f64(secs) {
        Ok(wait) => wait.min(MAX_COOLDOWN),
        Err(_) => MAX_COOLDOWN,
    }
}

/// The two remote calls the controller depends on.
#[async_trait::async_trait]
pub trait PlaceService: Send + Sync {
    /// How long the current user must still wait before drawing.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the service cannot be reached or answers
    /// with something other than a wait time.
    async fn remaining_cooldown(&self) -> Result<Duration, ServiceError>;

    /// Submit one tile write.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the draw was not accepted. A rate-limited
    /// rejection carries the wait in [`ServiceError::Rejected::wait_seconds`].
    async fn submit_draw(&self, x: u32, y: u32, color: &Color) -> Result<(), ServiceError>;
}
