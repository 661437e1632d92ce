//! First-order step rules over the shared objective.
//!
//! Every optimizer owns a [`Trajectory`]: its current iterate plus the full
//! history of visited points. The history is seeded with the starting point,
//! so after `n` steps it always holds `n + 1` entries.
//!
//! # Rules
//!
//! - [`Sgd`] — `x ← x − lr·g`
//! - [`Momentum`] — `v ← β·v − lr·g`, `x ← x + v`
//! - [`Adam`] — bias-corrected first and second moment estimates scale the
//!   step per iteration
//!
//! The [`Optimizer`] enum wraps the three so callers can step them through a
//! single entry point with exhaustive dispatch.

mod adam;
mod kind;
mod momentum;
mod sgd;
mod step;
mod trajectory;

pub use adam::{Adam, AdamParams, BiasCorrected, Moments};
pub use kind::Kind;
pub use momentum::{MOMENTUM_DECAY, Momentum};
pub use sgd::Sgd;
pub use step::Step;
pub use trajectory::Trajectory;

/// One optimizer of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Optimizer {
    Sgd(Sgd),
    Momentum(Momentum),
    Adam(Adam),
}

impl Optimizer {
    /// Creates an optimizer of the given kind seeded at `x0`.
    #[must_use]
    pub fn seed(kind: Kind, x0: f64) -> Self {
        match kind {
            Kind::Sgd => Self::Sgd(Sgd::seed(x0)),
            Kind::Momentum => Self::Momentum(Momentum::seed(x0)),
            Kind::Adam => Self::Adam(Adam::seed(x0)),
        }
    }

    /// Returns which algorithm this optimizer runs.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Sgd(_) => Kind::Sgd,
            Self::Momentum(_) => Kind::Momentum,
            Self::Adam(_) => Kind::Adam,
        }
    }

    /// Advances one iteration with the given learning rate.
    ///
    /// Momentum and Adam use their default decay constants.
    pub fn step(&mut self, learning_rate: f64) -> Step {
        match self {
            Self::Sgd(sgd) => sgd.step(learning_rate),
            Self::Momentum(momentum) => momentum.step(learning_rate),
            Self::Adam(adam) => adam.step(learning_rate),
        }
    }

    /// Returns the iterate and history shared by every kind.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        match self {
            Self::Sgd(sgd) => sgd.trajectory(),
            Self::Momentum(momentum) => momentum.trajectory(),
            Self::Adam(adam) => adam.trajectory(),
        }
    }
}
