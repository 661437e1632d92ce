use std::time::Duration;

use thiserror::Error;

/// Configuration for a [`Race`](super::Race).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    initial_x: f64,
    delay: Duration,
}

/// Errors that can occur when validating a race config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_x must be finite")]
    InitialX,

    #[error("animation delay must be non-zero")]
    Delay,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, -7.5, Duration::from_millis(100)).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// A `max_iters` of zero is allowed; every step is then a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_x` is not finite or `delay` is zero.
    pub fn new(max_iters: usize, initial_x: f64, delay: Duration) -> Result<Self, ConfigError> {
        if !initial_x.is_finite() {
            return Err(ConfigError::InitialX);
        }
        if delay.is_zero() {
            return Err(ConfigError::Delay);
        }

        Ok(Self {
            max_iters,
            initial_x,
            delay,
        })
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different starting point.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_x` is not finite.
    pub fn with_initial_x(self, initial_x: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, initial_x, self.delay)
    }

    /// Returns a copy with a different animation delay.
    ///
    /// # Errors
    ///
    /// Returns an error if `delay` is zero.
    pub fn with_delay(self, delay: Duration) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, self.initial_x, delay)
    }

    /// Returns the number of iterations in a full race.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the point every optimizer starts from.
    #[must_use]
    pub fn initial_x(&self) -> f64 {
        self.initial_x
    }

    /// Returns the pause between animated steps.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
