use crate::constants::STATS_WINDOW;
use instant::Instant;
use std::time::Duration;

/// Rolling frame-interval average, reported once per window.
#[derive(Debug)]
pub struct FrameStats {
    window: u32,
    frames: u32,
    accum: Duration,
    last: Option<Instant>,
}

impl FrameStats {
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            frames: 0,
            accum: Duration::ZERO,
            last: None,
        }
    }

    /// Record a frame at `now`; see `record_interval`.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let dt = self.last.map(|prev| now - prev);
        self.last = Some(now);
        dt.and_then(|dt| self.record_interval(dt))
    }

    /// Returns the mean interval when a window fills, then starts a new one.
    pub fn record_interval(&mut self, dt: Duration) -> Option<Duration> {
        self.accum += dt;
        self.frames += 1;
        if self.frames < self.window {
            return None;
        }
        let mean = self.accum / self.frames;
        self.frames = 0;
        self.accum = Duration::ZERO;
        Some(mean)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(STATS_WINDOW)
    }
}
