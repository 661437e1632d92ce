use thiserror::Error;

use crate::optimizer::Kind;

/// One learning rate per optimizer.
///
/// The race does not validate rates; a non-positive or non-finite rate simply
/// produces a divergent or NaN trajectory. Callers that accept rates from
/// users should run [`LearningRates::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningRates {
    pub sgd: f64,
    pub momentum: f64,
    pub adam: f64,
}

/// Errors reported by [`LearningRates::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RateError {
    #[error("{0} learning rate must be finite")]
    NotFinite(Kind),

    #[error("{0} learning rate must be positive")]
    NotPositive(Kind),
}

impl LearningRates {
    /// The rate every optimizer starts with.
    pub const DEFAULT: f64 = 0.1;

    /// Uses the same rate for every optimizer.
    #[must_use]
    pub fn uniform(rate: f64) -> Self {
        Self {
            sgd: rate,
            momentum: rate,
            adam: rate,
        }
    }

    /// Returns the rate for the given optimizer.
    #[must_use]
    pub fn get(&self, kind: Kind) -> f64 {
        match kind {
            Kind::Sgd => self.sgd,
            Kind::Momentum => self.momentum,
            Kind::Adam => self.adam,
        }
    }

    /// Sets the rate for the given optimizer.
    pub fn set(&mut self, kind: Kind, rate: f64) {
        match kind {
            Kind::Sgd => self.sgd = rate,
            Kind::Momentum => self.momentum = rate,
            Kind::Adam => self.adam = rate,
        }
    }

    /// Checks that a single rate is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns the first problem found with `rate`.
    pub fn check(kind: Kind, rate: f64) -> Result<(), RateError> {
        if !rate.is_finite() {
            return Err(RateError::NotFinite(kind));
        }
        if rate <= 0.0 {
            return Err(RateError::NotPositive(kind));
        }
        Ok(())
    }

    /// Checks every rate, in [`Kind::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns the error for the first invalid rate.
    pub fn validate(&self) -> Result<(), RateError> {
        Kind::ALL
            .into_iter()
            .try_for_each(|kind| Self::check(kind, self.get(kind)))
    }
}

impl Default for LearningRates {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT)
    }
}

/// Supplies learning rates to a race.
///
/// A race reads its rates fresh on every step, so a source backed by live
/// controls can change them mid-run.
pub trait RateSource {
    /// Returns the rates to use for the next step.
    fn learning_rates(&self) -> LearningRates;
}

impl RateSource for LearningRates {
    fn learning_rates(&self) -> LearningRates {
        *self
    }
}

/// Blanket implementation for closures.
impl<F> RateSource for F
where
    F: Fn() -> LearningRates,
{
    fn learning_rates(&self) -> LearningRates {
        self()
    }
}
