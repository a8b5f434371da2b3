//! Cooldown bookkeeping: deadlines, generations, and completion events.
//!
//! DESIGN
//! ======
//! Each started cooldown gets a generation number and a `watch` channel. The
//! controller keeps every sender; callers only ever see a [`CooldownHandle`]
//! wrapping a receiver. At most one generation is *tracked* (the canonical
//! "current cooldown"). Starting another supersedes tracking but the older
//! generation keeps its sender until its own timer fires and resolves it, so
//! earlier awaiters are never cut short. A generation that must not complete
//! yet can hand its senders over to the tracked one instead.
//!
//! Time is passed in explicitly so the bookkeeping can be tested without a
//! runtime clock.

#[cfg(test)]
#[path = "cooldown_test.rs"]
mod cooldown_test;

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::consts::MAX_COOLDOWN;

/// Read-only subscription to one cooldown's completion.
#[derive(Debug, Clone)]
pub struct CooldownHandle {
    rx: watch::Receiver<bool>,
}

impl CooldownHandle {
    /// A handle that is already complete.
    #[must_use]
    pub fn resolved() -> Self {
        let (_tx, rx) = watch::channel(true);
        Self { rx }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the cooldown completes.
    ///
    /// Also returns if the controller is dropped first, since no completion
    /// can follow.
    pub async fn wait(mut self) {
        if self.rx.wait_for(|done| *done).await.is_err() {
            tracing::trace!("cooldown dropped before completion");
        }
    }
}

/// A newly registered cooldown, ready to be put on a timer.
#[derive(Debug)]
pub struct Scheduled {
    pub generation: u64,
    pub deadline: Instant,
    pub handle: CooldownHandle,
}

#[derive(Debug, Default)]
pub struct Cooldowns {
    end: Option<Instant>,
    tracked: Option<u64>,
    next_generation: u64,
    pending: HashMap<u64, Vec<watch::Sender<bool>>>,
}

impl Cooldowns {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cooldown of `duration` starting at `now` and track it.
    ///
    /// Durations beyond [`MAX_COOLDOWN`] are capped.
    pub fn begin(&mut self, now: Instant, duration: Duration) -> Scheduled {
        let generation = self.next_generation;
        self.next_generation += 1;

        let deadline = deadline_after(now, duration);
        self.end = Some(deadline);
        self.tracked = Some(generation);

        let (tx, rx) = watch::channel(false);
        self.pending.insert(generation, vec![tx]);
        Scheduled { generation, deadline, handle: CooldownHandle { rx } }
    }

    /// Whether `generation` is the cooldown currently tracked.
    #[must_use]
    pub fn is_tracked(&self, generation: u64) -> bool {
        self.tracked == Some(generation)
    }

    /// Whether a tracked cooldown is still outstanding.
    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.tracked.is_some()
    }

    /// Complete `generation`: wake its awaiters and stop tracking it.
    ///
    /// Resolving an unknown or already-resolved generation does nothing.
    pub fn resolve(&mut self, generation: u64) {
        if let Some(senders) = self.pending.remove(&generation) {
            complete(senders);
        }
        if self.tracked == Some(generation) {
            self.tracked = None;
        }
    }

    /// Move `generation`'s awaiters onto the tracked cooldown so they complete
    /// with it. With nothing tracked they complete now.
    pub fn hand_over(&mut self, generation: u64) {
        let Some(senders) = self.pending.remove(&generation) else {
            return;
        };
        match self.tracked.and_then(|tracked| self.pending.get_mut(&tracked)) {
            Some(current) => current.extend(senders),
            None => complete(senders),
        }
    }

    /// Handle for the tracked cooldown, or a completed one when none is tracked.
    #[must_use]
    pub fn handle(&self) -> CooldownHandle {
        match self.tracked.and_then(|generation| self.pending.get(&generation)?.first()) {
            Some(tx) => CooldownHandle { rx: tx.subscribe() },
            None => CooldownHandle::resolved(),
        }
    }

    /// Time left until the most recent deadline, never negative.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.end {
            Some(end) => end.saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }
}

fn complete(senders: Vec<watch::Sender<bool>>) {
    for tx in senders {
        tx.send_replace(true);
    }
}

fn deadline_after(now: Instant, duration: Duration) -> Instant {
    let capped = duration.min(MAX_COOLDOWN);
    if capped < duration {
        tracing::warn!(requested = ?duration, cap = ?MAX_COOLDOWN, "cooldown capped");
    }
    match now.checked_add(capped) {
        Some(deadline) => deadline,
        None => {
            tracing::error!(wait = ?capped, "cooldown deadline overflowed the clock; ending at now");
            now
        }
    }
}
