//! Simulated time.

use tracing::info;

/// Speed limits and the speed restored by [`AnimationClock::reset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockSettings {
    pub default_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            min_speed: 0.0,
            max_speed: 3.0,
        }
    }
}

/// Accumulates simulated time units, one `speed`-sized step per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClock {
    elapsed: f64,
    speed: f32,
    paused: bool,
    settings: ClockSettings,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(ClockSettings::default())
    }
}

impl AnimationClock {
    /// Creates a running clock at the default speed. A reversed speed range
    /// is swapped and the default speed is clamped into it.
    pub fn new(settings: ClockSettings) -> Self {
        let (min_speed, max_speed) = if settings.min_speed <= settings.max_speed {
            (settings.min_speed, settings.max_speed)
        } else {
            (settings.max_speed, settings.min_speed)
        };
        let settings = ClockSettings {
            default_speed: settings.default_speed.clamp(min_speed, max_speed),
            min_speed,
            max_speed,
        };
        Self {
            elapsed: 0.0,
            speed: settings.default_speed,
            paused: false,
            settings,
        }
    }

    /// Advances `elapsed` by `speed` unless paused.
    pub fn tick(&mut self) {
        if !self.paused {
            self.elapsed += f64::from(self.speed);
        }
    }

    /// Flips the pause flag and returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!(paused = self.paused, elapsed = self.elapsed, "Animation pause toggled");
        self.paused
    }

    /// Sets the speed, clamped to the configured range. Returns the speed
    /// actually applied.
    pub fn set_speed(&mut self, speed: f32) -> f32 {
        let speed = if speed.is_nan() {
            self.settings.default_speed
        } else {
            speed
        };
        self.speed = speed.clamp(self.settings.min_speed, self.settings.max_speed);
        self.speed
    }

    /// Shifts the speed by `delta`, clamped.
    pub fn adjust_speed(&mut self, delta: f32) -> f32 {
        self.set_speed(self.speed + delta)
    }

    /// Back to `elapsed = 0`, default speed, running.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.speed = self.settings.default_speed;
        self.paused = false;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn settings(&self) -> &ClockSettings {
        &self.settings
    }

    /// Speed range as `(min, max)`.
    pub fn speed_range(&self) -> (f32, f32) {
        (self.settings.min_speed, self.settings.max_speed)
    }
}
