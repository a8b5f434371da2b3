//! HTTP implementation of [`PlaceService`].
//!
//! Thin reqwest wrapper over two JSON endpoints. Response bodies are decoded
//! by pure functions so they can be tested without a server.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use crate::color::Color;
use crate::config::ServiceConfig;
use crate::service::{PlaceService, ServiceError, wait_from_secs};

const TIME_PATH: &str = "/api/place/time.json";
const DRAW_PATH: &str = "/api/place/draw.json";

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpPlaceService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPlaceService {
    /// # Errors
    ///
    /// Returns [`ServiceError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ServiceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl PlaceService for HttpPlaceService {
    async fn remaining_cooldown(&self) -> Result<Duration, ServiceError> {
        let response = self
            .http
            .get(self.url(TIME_PATH))
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(rejection(status, &text));
        }
        parse_wait_response(&text)
    }

    async fn submit_draw(&self, x: u32, y: u32, color: &Color) -> Result<(), ServiceError> {
        let body = DrawRequest { x, y, color };
        let response = self
            .http
            .post(self.url(DRAW_PATH))
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Err(rejection(status, &text))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct DrawRequest<'a> {
    x: u32,
    y: u32,
    color: &'a Color,
}

#[derive(serde::Deserialize)]
struct WaitBody {
    wait_seconds: f64,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    wait_seconds: Option<f64>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_wait_response(json: &str) -> Result<Duration, ServiceError> {
    let body: WaitBody = serde_json::from_str(json).map_err(|e| ServiceError::Parse(e.to_string()))?;
    Ok(wait_from_secs(body.wait_seconds))
}

/// Build the error for a non-success response, keeping any rate-limit hint.
fn rejection(status: u16, body: &str) -> ServiceError {
    let wait_seconds = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.wait_seconds,
        Err(_) => None,
    };
    ServiceError::Rejected { status, wait_seconds }
}
