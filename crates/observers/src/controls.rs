//! Learning-rate inputs for an interactive race.
//!
//! [`RateControls`] holds the three values behind the learning-rate sliders
//! and a lock flag. While locked, changing any one rate moves the other two
//! with it. The race reads the controls as a [`RateSource`] on every step, so
//! changes take effect mid-run.

use descent_solvers::{
    optimizer::Kind,
    race::{LearningRates, RateError, RateSource},
};

/// Slider values plus the lock that ties them together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateControls {
    rates: LearningRates,
    locked: bool,
}

impl RateControls {
    /// Creates controls at the default rate, locked.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rates: LearningRates::default(),
            locked: true,
        }
    }

    /// Sets one rate, and all three if locked.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving every rate unchanged, if `rate` is not
    /// positive and finite.
    pub fn set(&mut self, kind: Kind, rate: f64) -> Result<(), RateError> {
        LearningRates::check(kind, rate)?;
        if self.locked {
            self.rates = LearningRates::uniform(rate);
        } else {
            self.rates.set(kind, rate);
        }
        Ok(())
    }

    /// Locks or unlocks the rates.
    ///
    /// Locking does not equalize the current values; the next [`set`]
    /// does.
    ///
    /// [`set`]: Self::set
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Restores the default rate everywhere and re-locks.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn get(&self, kind: Kind) -> f64 {
        self.rates.get(kind)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn rates(&self) -> LearningRates {
        self.rates
    }
}

impl Default for RateControls {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for RateControls {
    fn learning_rates(&self) -> LearningRates {
        self.rates
    }
}
