//! The interaction controller: color gate, draw orchestration, cooldowns, and
//! camera smoothing for one user session.
//!
//! ARCHITECTURE
//! ============
//! The controller is the single writer of all session state. Anything
//! asynchronous (the startup cooldown query, a draw submission, a cooldown
//! timer) runs as a detached task that only posts a [`Completion`] back over a
//! channel. The driver loop owns the receiving [`Completions`] and hands each
//! message to [`InteractionController::apply`], so state is never touched from
//! inside a task.
//!
//! ```text
//!   intents ──► controller ──spawn──► service / timer
//!                   ▲                        │
//!                   └──── apply ◄── Completions
//! ```
//!
//! Phases: `Uninitialized → Querying → {Enabled, Cooldown}`, then
//! `Enabled ⇄ Cooldown` with a transient `Drawing` between them. A session
//! initialized as logged out stays in `LoggedOut`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::camera::{Camera, Point, Tween, ZoomDirection, is_valid_zoom};
use crate::color::Color;
use crate::consts::DEFAULT_COOLDOWN_MS;
use crate::cooldown::{CooldownHandle, Cooldowns};
use crate::service::{PlaceService, ServiceError};
use crate::sinks::{CanvasSize, Feedback, Sinks};

// =============================================================================
// TYPES
// =============================================================================

/// Static session configuration passed to [`InteractionController::initialize`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInit {
    /// Whether the user may draw at all (false when logged out).
    pub enabled: bool,
    /// Wait imposed after every successful draw.
    pub cooldown: Duration,
    /// Color restored from a previous visit.
    pub color: Option<Color>,
    /// Saved zoom preset. Defaults to zoomed in.
    pub zoomed_in: Option<bool>,
    /// Saved camera offset. Defaults to the origin.
    pub pan: Option<Point>,
}

impl Default for SessionInit {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            color: None,
            zoomed_in: None,
            pan: None,
        }
    }
}

/// Observable state of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    /// Logged out: permanently disabled for this session.
    LoggedOut,
    /// Waiting for the startup cooldown query.
    Querying,
    Enabled,
    /// Disabled by a direct [`InteractionController::disable`] call.
    Disabled,
    Cooldown,
    Drawing,
}

/// Result of an asynchronous operation, to be fed back through
/// [`InteractionController::apply`].
#[derive(Debug)]
pub enum Completion {
    CooldownQueried(Result<Duration, ServiceError>),
    DrawSettled { x: u32, y: u32, color: Color, result: Result<(), ServiceError> },
    CooldownElapsed { generation: u64 },
}

/// Receiving end of the controller's completion channel.
#[derive(Debug)]
pub struct Completions {
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl Completions {
    /// Wait for the next completion.
    pub async fn recv(&mut self) -> Option<Completion> {
        self.rx.recv().await
    }

    /// Take a completion if one is ready, without waiting.
    pub fn try_recv(&mut self) -> Option<Completion> {
        match self.rx.try_recv() {
            Ok(completion) => Some(completion),
            Err(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Uninitialized,
    LoggedOut,
    Querying,
    Active,
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct InteractionController {
    service: Arc<dyn PlaceService>,
    sinks: Sinks,
    tx: mpsc::UnboundedSender<Completion>,
    session: Session,
    enabled: bool,
    color: Option<Color>,
    saved_color: Option<Color>,
    cooldown: Duration,
    cooldowns: Cooldowns,
    draw_in_flight: bool,
    /// Tracked cooldown that elapsed while a draw was in flight.
    held_cooldown: Option<u64>,
    camera: Camera,
}

impl InteractionController {
    /// Create an uninitialized, disabled controller.
    #[must_use]
    pub fn new(service: Arc<dyn PlaceService>, sinks: Sinks) -> (Self, Completions) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            service,
            sinks,
            tx,
            session: Session::Uninitialized,
            enabled: false,
            color: None,
            saved_color: None,
            cooldown: Duration::ZERO,
            cooldowns: Cooldowns::new(),
            draw_in_flight: false,
            held_cooldown: None,
            camera: Camera::default(),
        };
        (controller, Completions { rx })
    }

    /// Apply session configuration and, when logged in, query the remaining wait.
    ///
    /// Must run inside a Tokio runtime. Only the first call has any effect.
    pub fn initialize(&mut self, init: SessionInit) {
        if self.session != Session::Uninitialized {
            tracing::warn!("controller already initialized");
            return;
        }

        self.disable();
        self.cooldown = init.cooldown;
        self.saved_color = init.color;
        self.camera.zoomed_in = init.zoomed_in.unwrap_or(true);
        self.set_zoom(self.camera.preset_scale());
        let pan = init.pan.unwrap_or_default();
        self.set_offset(pan.x, pan.y);

        if !init.enabled {
            self.session = Session::LoggedOut;
            tracing::info!("logged out; drawing disabled for this session");
            return;
        }

        self.session = Session::Querying;
        tracing::debug!(cooldown = ?init.cooldown, "querying remaining cooldown");
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = service.remaining_cooldown().await;
            post(&tx, Completion::CooldownQueried(result));
        });
    }

    /// Feed an asynchronous result back into the state machine.
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::CooldownQueried(result) => self.on_cooldown_queried(result),
            Completion::DrawSettled { x, y, color, result } => self.on_draw_settled(x, y, color, result),
            Completion::CooldownElapsed { generation } => self.finish_cooldown(generation),
        }
    }

    /// Apply every completion that is already waiting. Returns how many ran.
    pub fn apply_ready(&mut self, completions: &mut Completions) -> usize {
        let mut applied = 0;
        while let Some(completion) = completions.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    // --- Gate ---

    pub fn enable(&mut self) {
        if !self.enabled {
            tracing::trace!("controller enabled");
        }
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        if self.enabled {
            tracing::trace!("controller disabled");
        }
        self.enabled = false;
    }

    // --- Cooldown ---

    /// Disable now and re-enable after `duration`.
    ///
    /// The returned handle completes once the gate has reopened. A zero
    /// duration completes before this call returns.
    pub fn start_cooldown(&mut self, duration: Duration) -> CooldownHandle {
        let scheduled = self.cooldowns.begin(Instant::now(), duration);
        self.disable();

        if duration.is_zero() {
            self.finish_cooldown(scheduled.generation);
            return scheduled.handle;
        }

        tracing::info!(generation = scheduled.generation, wait = ?duration, "cooldown started");
        let tx = self.tx.clone();
        let generation = scheduled.generation;
        let deadline = scheduled.deadline;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            post(&tx, Completion::CooldownElapsed { generation });
        });
        scheduled.handle
    }

    /// Handle for the tracked cooldown; already complete when there is none.
    #[must_use]
    pub fn when_cooldown_ends(&self) -> CooldownHandle {
        self.cooldowns.handle()
    }

    #[must_use]
    pub fn remaining_cooldown(&self) -> Duration {
        self.cooldowns.remaining(Instant::now())
    }

    #[must_use]
    pub fn remaining_cooldown_ms(&self) -> u64 {
        u64::try_from(self.remaining_cooldown().as_millis()).unwrap_or(u64::MAX)
    }

    fn on_cooldown_queried(&mut self, result: Result<Duration, ServiceError>) {
        if self.session != Session::Querying {
            tracing::debug!("ignoring cooldown query result outside startup");
            return;
        }
        self.session = Session::Active;

        let wait = match result {
            Ok(wait) => wait,
            Err(e) => {
                tracing::warn!(error = %e, "cooldown query failed; assuming the user may draw");
                Duration::ZERO
            }
        };
        self.start_cooldown(wait);
    }

    fn finish_cooldown(&mut self, generation: u64) {
        if !self.cooldowns.is_tracked(generation) {
            tracing::debug!(generation, "superseded cooldown elapsed");
            self.cooldowns.resolve(generation);
            return;
        }
        if self.draw_in_flight {
            // Awaiters complete with whatever cooldown follows the draw.
            tracing::debug!(generation, "cooldown elapsed during a draw");
            self.held_cooldown = Some(generation);
            return;
        }
        self.enable();
        self.restore_saved_color();
        tracing::info!(generation, "cooldown ended");
        self.cooldowns.resolve(generation);
    }

    fn restore_saved_color(&mut self) {
        if let Some(color) = self.saved_color.take()
            && self.color.is_none()
        {
            self.select_color(color, false);
        }
    }

    // --- Color ---

    /// Select a color, or signal an error when the controller is disabled.
    ///
    /// `announce` controls feedback only; silent selection is used when
    /// restoring saved state.
    pub fn select_color(&mut self, color: Color, announce: bool) {
        if !self.enabled {
            tracing::debug!(%color, "color rejected while disabled");
            if announce {
                self.sinks.feedback.play(Feedback::Error);
            }
            return;
        }

        self.sinks.cursor.set_indicator_color(&color);
        self.color = Some(color);
        if announce {
            self.sinks.feedback.play(Feedback::Select);
        }
    }

    // --- Draw ---

    /// Submit the selected color at `(x, y)`.
    ///
    /// Without a color, or while disabled, this only plays error feedback.
    /// Otherwise the gate closes until the service answers.
    pub fn request_draw(&mut self, x: u32, y: u32) {
        let color = match (&self.color, self.enabled) {
            (Some(color), true) => color.clone(),
            (color, enabled) => {
                tracing::debug!(x, y, has_color = color.is_some(), enabled, "draw rejected");
                self.sinks.feedback.play(Feedback::Error);
                return;
            }
        };

        self.disable();
        self.draw_in_flight = true;
        tracing::info!(x, y, %color, "draw requested");

        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = service.submit_draw(x, y, &color).await;
            post(&tx, Completion::DrawSettled { x, y, color, result });
        });
    }

    fn on_draw_settled(&mut self, x: u32, y: u32, color: Color, result: Result<(), ServiceError>) {
        self.draw_in_flight = false;
        let wait = match result {
            Ok(()) => {
                self.sinks.canvas.write_tile(x, y, &color);
                self.sinks.feedback.play(Feedback::Place);
                self.sinks.cursor.clear_indicator_color();
                self.color = None;
                tracing::info!(x, y, %color, "draw accepted");
                self.cooldown
            }
            Err(e) => {
                self.sinks.feedback.play(Feedback::Error);
                // No hint means the service imposed no wait.
                let wait = e.wait_hint().unwrap_or_default();
                tracing::warn!(x, y, error = %e, wait = ?wait, "draw rejected by service");
                wait
            }
        };
        self.start_cooldown(wait);
        if let Some(generation) = self.held_cooldown.take() {
            self.cooldowns.hand_over(generation);
        }
    }

    // --- Camera ---

    /// Advance zoom and pan smoothing by one frame.
    pub fn tick(&mut self) {
        let step = self.camera.step();
        if let Some(scale) = step.scale {
            self.sinks.render.apply_scale(scale);
        }
        if let Some(offset) = step.translate {
            self.sinks.render.apply_translate(offset.x, offset.y);
        }
    }

    /// Jump to `zoom` with no animation.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !is_valid_zoom(zoom) {
            tracing::warn!(zoom, "ignoring non-positive zoom");
            return;
        }
        self.camera.zoom.snap(zoom);
        self.sinks.render.apply_scale(zoom);
    }

    /// Jump to offset `(x, y)` with no animation.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            tracing::warn!(x, y, "ignoring non-finite offset");
            return;
        }
        self.camera.pan.snap(Point::new(x, y));
        self.sinks.render.apply_translate(x, y);
    }

    /// Animate toward `zoom` over the following ticks.
    pub fn set_target_zoom(&mut self, zoom: f64) {
        if !is_valid_zoom(zoom) {
            tracing::warn!(zoom, "ignoring non-positive zoom target");
            return;
        }
        self.camera.zoom.target = zoom;
    }

    /// Animate toward offset `(x, y)` over the following ticks.
    pub fn set_target_offset(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            tracing::warn!(x, y, "ignoring non-finite offset target");
            return;
        }
        self.camera.pan.target = Point::new(x, y);
    }

    /// Switch between the zoomed-in and zoomed-out presets.
    pub fn toggle_zoom(&mut self) {
        let feedback = match self.camera.toggle() {
            ZoomDirection::In => Feedback::ZoomIn,
            ZoomDirection::Out => Feedback::ZoomOut,
        };
        self.sinks.feedback.play(feedback);
    }

    // --- Queries ---

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize { width: self.sinks.canvas.width(), height: self.sinks.canvas.height() }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.session {
            Session::Uninitialized => Phase::Uninitialized,
            Session::LoggedOut => Phase::LoggedOut,
            Session::Querying => Phase::Querying,
            Session::Active if self.draw_in_flight => Phase::Drawing,
            Session::Active if self.enabled => Phase::Enabled,
            Session::Active if self.cooldowns.is_outstanding() => Phase::Cooldown,
            Session::Active => Phase::Disabled,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.camera.zoomed_in
    }

    #[must_use]
    pub fn zoom(&self) -> Tween<f64> {
        self.camera.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Tween<Point> {
        self.camera.pan
    }
}

fn post(tx: &mpsc::UnboundedSender<Completion>, completion: Completion) {
    if tx.send(completion).is_err() {
        tracing::debug!("controller dropped; completion discarded");
    }
}
