//! Frame timing shared by the game loop
//!
//! `FrameLimiter` caps the loop at the configured frame rate and `Ticker`
//! produces the once-per-second countdown timer events.

use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame to hold a fixed tick rate.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    frame_duration: Duration,
}

impl FrameLimiter {
    /// Limiter for `fps` frames per second (at least 1)
    pub fn new(fps: u64) -> Self {
        Self {
            frame_duration: Duration::from_micros(1_000_000 / fps.max(1)),
        }
    }

    #[cfg(test)]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left in the frame that began at `frame_start`, as of `now`
    pub fn remaining(&self, frame_start: Instant, now: Instant) -> Duration {
        self.frame_duration
            .saturating_sub(now.saturating_duration_since(frame_start))
    }

    /// Apply frame rate limiting to maintain consistent game speed.
    ///
    /// Call at the end of each game loop iteration with the `Instant` the
    /// frame began at. Sleeps only if the frame finished early.
    pub fn wait(&self, frame_start: Instant) {
        let remaining = self.remaining(frame_start, Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

/// Periodic timer polled from the frame loop
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// First firing one `period` after `start`
    pub fn every(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    /// Number of firings due by `now` (0 on most frames)
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next {
            self.next += self.period;
            fired += 1;
        }
        fired
    }
}
