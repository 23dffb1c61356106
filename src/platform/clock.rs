//! Fixed frame-rate pacing

use std::time::{Duration, Instant};

/// Schedules frames at a fixed rate and timestamps input
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    start: Instant,
    next: Instant,
    /// A gameplay step is owed to the next redraw
    step_armed: bool,
}

impl FrameClock {
    /// Clock ticking `fps` times per second, first frame due at `now`
    pub fn new(fps: u32, now: Instant) -> Self {
        let period = Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)));
        Self {
            period,
            start: now,
            next: now,
            step_armed: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the next frame may start
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the frame after the one starting at `now`.
    ///
    /// Keeps a steady cadence, but a loop that fell more than one period
    /// behind restarts from `now` instead of bursting to catch up.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }

    /// Start a frame if one is due: schedule the next and arm one gameplay step.
    ///
    /// Returns true when a redraw should be requested.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.advance(now);
        self.step_armed = true;
        true
    }

    /// Consume the armed gameplay step. Redraws without one only re-render.
    pub fn take_step(&mut self) -> bool {
        std::mem::take(&mut self.step_armed)
    }

    /// Instant the event loop should sleep until
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Seconds since the clock was created
    pub fn seconds(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.start).as_secs_f64()
    }
}
