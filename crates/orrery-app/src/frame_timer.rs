//! Fixed-interval tick driver.
//!
//! Host frame times go into an accumulator; every whole interval in it
//! produces one clock tick. Long frames are clamped so a stall does not
//! trigger a burst of catch-up ticks.

use std::time::{Duration, Instant};

use tracing::warn;

/// Default tick interval, matching a 16 ms host timer.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Longest frame time accepted before clamping, in seconds.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Converts variable frame times into fixed-interval ticks.
#[derive(Debug)]
pub struct FrameTimer {
    interval: f64,
    previous_time: Instant,
    accumulator: f64,
    tick_count: u64,
    frame_count: u64,
}

impl FrameTimer {
    /// A zero interval falls back to [`DEFAULT_TICK_INTERVAL`].
    pub fn new(interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            DEFAULT_TICK_INTERVAL
        } else {
            interval
        };
        Self {
            interval: interval.as_secs_f64(),
            previous_time: Instant::now(),
            accumulator: 0.0,
            tick_count: 0,
            frame_count: 0,
        }
    }

    /// Measures wall-clock time since the last call and advances by it.
    pub fn advance_now(&mut self, on_tick: impl FnMut()) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, on_tick)
    }

    /// Adds `frame_time` seconds and calls `on_tick` once per whole interval
    /// accumulated. Returns the number of ticks fired.
    pub fn advance(&mut self, frame_time: f64, mut on_tick: impl FnMut()) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }
        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.interval {
            on_tick();
            self.accumulator -= self.interval;
            ticks += 1;
        }
        self.tick_count += u64::from(ticks);
        self.frame_count += 1;
        ticks
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
