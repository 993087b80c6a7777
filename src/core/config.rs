//! Session and animation configuration.
//!
//! Both structs are plain serde types with builder-style setters, so an
//! embedder can build them in code or load them from whatever format it
//! already uses.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::die::{DEFAULT_FACE_COUNT, MAX_FACE_COUNT, MIN_FACE_COUNT};
use super::error::{DiceError, DiceResult};

/// Timing of the spinning animation played when a die is rolled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Number of draws per roll (default: 20).
    /// The last draw is the settled face.
    pub spin_count: u32,

    /// Delay after the first draw (default: 1 ms).
    pub base_delay: Duration,

    /// Factor applied to the delay after each draw (default: 1.4).
    /// Must be greater than 1 so the animation decelerates.
    pub growth_factor: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spin_count: 20,
            base_delay: Duration::from_millis(1),
            growth_factor: 1.4,
        }
    }
}

impl AnimationConfig {
    /// Set the number of draws per roll.
    pub fn with_spin_count(mut self, count: u32) -> Self {
        self.spin_count = count;
        self
    }

    /// Set the first delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Set the per-draw delay multiplier.
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Check that the animation has at least one draw, a non-zero start
    /// delay, strictly increasing delays and a total length that fits in a
    /// `Duration`.
    pub fn validate(&self) -> DiceResult<()> {
        if self.spin_count == 0 {
            return Err(DiceError::invalid("spin count", self.spin_count));
        }
        if self.base_delay.is_zero() {
            return Err(DiceError::invalid("base delay", format!("{:?}", self.base_delay)));
        }
        if !(self.growth_factor > 1.0 && self.growth_factor.is_finite()) {
            return Err(DiceError::invalid("growth factor", self.growth_factor));
        }

        // Geometric series: base * (f^n - 1) / (f - 1).
        let n = f64::from(self.spin_count);
        let f = self.growth_factor;
        let total_secs = self.base_delay.as_secs_f64() * (f.powf(n) - 1.0) / (f - 1.0);
        if Duration::try_from_secs_f64(total_secs).is_err() {
            return Err(DiceError::invalid(
                "animation length",
                format!("{} spins at x{}", self.spin_count, self.growth_factor),
            ));
        }
        Ok(())
    }

    /// Total time one roll animation takes, saturating at `Duration::MAX`.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        crate::session::DelaySchedule::new(self).fold(Duration::ZERO, Duration::saturating_add)
    }
}

/// Configuration of a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Faces on every die (default: 6, valid 2-100).
    pub face_count: u32,

    /// Seed for the dice RNG.
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,

    /// Roll animation timing.
    pub animation: AnimationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            face_count: DEFAULT_FACE_COUNT,
            seed: None,
            animation: AnimationConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Set the face count of every die.
    pub fn with_face_count(mut self, face_count: u32) -> Self {
        self.face_count = face_count;
        self
    }

    /// Use a fixed seed for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the animation timing.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Validate face count and animation timing.
    pub fn validate(&self) -> DiceResult<()> {
        if !(MIN_FACE_COUNT..=MAX_FACE_COUNT).contains(&self.face_count) {
            return Err(DiceError::invalid("face count", self.face_count));
        }
        self.animation.validate()
    }
}
