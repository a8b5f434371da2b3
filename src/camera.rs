//! Smoothed camera state: zoom and pan values that chase a target each frame.
//!
//! Every animated property is a [`Tween`], a `current`/`target` pair. Discrete
//! intents only move the target; [`Camera::step`] moves `current` a fixed
//! fraction of the remaining distance once per rendered frame.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{PAN_RATE, ZOOM_MAX_SCALE, ZOOM_MIN_SCALE, ZOOM_RATE};

/// A point in screen space (camera offset) or tile space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear interpolation toward another value of the same type.
pub trait Lerp: Copy + PartialEq {
    /// `self + (to - self) * t`, applied component-wise.
    #[must_use]
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, to: Self, t: f64) -> Self {
        Point { x: self.x.lerp(to.x, t), y: self.y.lerp(to.y, t) }
    }
}

/// The value last applied (`current`) and the value being moved toward (`target`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub current: T,
    pub target: T,
}

impl<T: Lerp> Tween<T> {
    /// A tween at rest on `value`.
    #[must_use]
    pub fn at(value: T) -> Self {
        Self { current: value, target: value }
    }

    /// Move both ends to `value`. Nothing is left to animate afterwards.
    pub fn snap(&mut self, value: T) {
        self.current = value;
        self.target = value;
    }

    /// Whether `current` still differs from `target`.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.current != self.target
    }

    /// Advance `current` toward `target` by `rate`.
    ///
    /// Returns the new current value, or `None` when already at rest.
    pub fn advance(&mut self, rate: f64) -> Option<T> {
        if !self.is_moving() {
            return None;
        }
        self.current = self.current.lerp(self.target, rate);
        Some(self.current)
    }
}

/// Direction of a preset zoom toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Values produced by one animation frame, ready for the render sink.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStep {
    pub scale: Option<f64>,
    pub translate: Option<Point>,
}

/// Pan/zoom camera with exponential smoothing.
///
/// `pan` is a screen offset. `zoom` is a scale factor and must stay positive.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub zoom: Tween<f64>,
    pub pan: Tween<Point>,
    pub zoomed_in: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: Tween::at(1.0), pan: Tween::at(Point::default()), zoomed_in: false }
    }
}

impl Camera {
    /// Run one frame of smoothing on both properties.
    pub fn step(&mut self) -> FrameStep {
        FrameStep { scale: self.zoom.advance(ZOOM_RATE), translate: self.pan.advance(PAN_RATE) }
    }

    /// Flip between the two zoom presets, moving only the target.
    pub fn toggle(&mut self) -> ZoomDirection {
        let direction = if self.zoomed_in {
            self.zoom.target = ZOOM_MIN_SCALE;
            ZoomDirection::Out
        } else {
            self.zoom.target = ZOOM_MAX_SCALE;
            ZoomDirection::In
        };
        self.zoomed_in = !self.zoomed_in;
        direction
    }

    /// The zoom preset matching the current toggle state.
    #[must_use]
    pub fn preset_scale(&self) -> f64 {
        if self.zoomed_in { ZOOM_MAX_SCALE } else { ZOOM_MIN_SCALE }
    }
}

/// Zoom factors must be finite and strictly positive.
#[must_use]
pub fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}
