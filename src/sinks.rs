//! Output collaborators driven by the controller.
//!
//! Each trait is the narrow slice of a host subsystem the controller needs:
//! the camera transform, the tile canvas, the cursor color indicator, and the
//! feedback (sound) player. [`TracingSinks`] implements all four by logging,
//! which is what the headless driver uses.

use crate::color::Color;

/// Semantic feedback events, mapped to sounds by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Select,
    Place,
    Error,
    ZoomIn,
    ZoomOut,
}

impl Feedback {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Place => "place",
            Self::Error => "error",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }
}

/// Canvas dimensions in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

pub trait RenderSink {
    fn apply_scale(&mut self, scale: f64);
    fn apply_translate(&mut self, x: f64, y: f64);
}

pub trait CanvasSink {
    fn write_tile(&mut self, x: u32, y: u32, color: &Color);
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

pub trait CursorSink {
    fn set_indicator_color(&mut self, color: &Color);
    fn clear_indicator_color(&mut self);
}

pub trait FeedbackSink {
    fn play(&mut self, kind: Feedback);
}

/// The full set of collaborators handed to the controller.
pub struct Sinks {
    pub render: Box<dyn RenderSink>,
    pub canvas: Box<dyn CanvasSink>,
    pub cursor: Box<dyn CursorSink>,
    pub feedback: Box<dyn FeedbackSink>,
}

impl Sinks {
    /// Log-only sinks for a canvas of the given size.
    #[must_use]
    pub fn tracing(width: u32, height: u32) -> Self {
        let sink = TracingSinks { width, height };
        Self {
            render: Box::new(sink),
            canvas: Box::new(sink),
            cursor: Box::new(sink),
            feedback: Box::new(sink),
        }
    }
}

// =============================================================================
// TRACING SINKS
// =============================================================================

/// Sinks that emit a `tracing` event per effect.
#[derive(Debug, Clone, Copy)]
pub struct TracingSinks {
    pub width: u32,
    pub height: u32,
}

impl RenderSink for TracingSinks {
    fn apply_scale(&mut self, scale: f64) {
        tracing::trace!(scale, "camera scale");
    }

    fn apply_translate(&mut self, x: f64, y: f64) {
        tracing::trace!(x, y, "camera translate");
    }
}

impl CanvasSink for TracingSinks {
    fn write_tile(&mut self, x: u32, y: u32, color: &Color) {
        tracing::info!(x, y, %color, "tile committed");
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl CursorSink for TracingSinks {
    fn set_indicator_color(&mut self, color: &Color) {
        tracing::debug!(%color, "cursor color set");
    }

    fn clear_indicator_color(&mut self) {
        tracing::debug!("cursor color cleared");
    }
}

impl FeedbackSink for TracingSinks {
    fn play(&mut self, kind: Feedback) {
        tracing::debug!(kind = kind.as_str(), "feedback");
    }
}
