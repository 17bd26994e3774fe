//! Engine configuration.

use std::time::Duration;

use rand::Rng;

/// Range the artificial "processing" delay is drawn from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DelayWindow {
    pub min: Duration,
    pub max: Duration,
}

impl DelayWindow {
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    /// No delay at all.
    pub const fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Uniform draw in `[min, max)`. A degenerate window returns `min` without touching the RNG.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let span = (self.max - self.min).as_secs_f64();
        self.min + Duration::from_secs_f64(span * rng.gen_range(0.0..1.0))
    }
}

/// Config for the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub text_delay: DelayWindow,
    pub image_delay: DelayWindow,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            text_delay: DelayWindow::from_millis(1200, 2000),
            image_delay: DelayWindow::from_millis(1500, 2500),
        }
    }
}

impl EngineConfig {
    /// Skip the artificial delays (tests, benchmarks, API smoke runs).
    pub fn instant() -> Self {
        Self {
            text_delay: DelayWindow::none(),
            image_delay: DelayWindow::none(),
        }
    }

    pub fn with_text_delay(mut self, window: DelayWindow) -> Self {
        self.text_delay = window;
        self
    }

    pub fn with_image_delay(mut self, window: DelayWindow) -> Self {
        self.image_delay = window;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.text_delay == DelayWindow::none() && self.image_delay == DelayWindow::none()
    }
}
