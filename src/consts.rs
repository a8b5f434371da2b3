//! Shared numeric constants for the interaction controller.

use std::time::Duration;

// ── Camera smoothing ────────────────────────────────────────────

/// Fraction of the remaining zoom distance covered per tick.
pub const ZOOM_RATE: f64 = 0.2;

/// Fraction of the remaining pan distance covered per tick.
pub const PAN_RATE: f64 = 0.4;

/// Zoom preset used when the camera is toggled out.
pub const ZOOM_MIN_SCALE: f64 = 4.0;

/// Zoom preset used when the camera is toggled in.
pub const ZOOM_MAX_SCALE: f64 = 40.0;

// ── Cooldown ────────────────────────────────────────────────────

/// Longest wait the controller will schedule. Larger service hints are capped.
pub const MAX_COOLDOWN: Duration = Duration::from_secs(365 * 24 * 60 * 60);

// ── Driver ──────────────────────────────────────────────────────

/// Frame interval for the headless driver (60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

// ── Defaults ────────────────────────────────────────────────────

/// Cooldown after a successful draw when none is configured.
pub const DEFAULT_COOLDOWN_MS: u64 = 300_000;

/// Canvas edge length in tiles when none is configured.
pub const DEFAULT_CANVAS_SIZE: u32 = 1000;
