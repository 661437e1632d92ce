use descent_core::objective;

use super::{Kind, Step, Trajectory};

/// Velocity decay used by [`Momentum::step`].
pub const MOMENTUM_DECAY: f64 = 0.9;

/// Gradient descent with an exponentially decayed velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Momentum {
    trajectory: Trajectory,
    velocity: f64,
}

impl Momentum {
    /// Creates an optimizer seeded at `x0` at rest.
    #[must_use]
    pub fn seed(x0: f64) -> Self {
        Self {
            trajectory: Trajectory::seed(x0),
            velocity: 0.0,
        }
    }

    /// Steps with the default decay of [`MOMENTUM_DECAY`].
    pub fn step(&mut self, learning_rate: f64) -> Step {
        self.step_with_decay(learning_rate, MOMENTUM_DECAY)
    }

    /// Applies `v ← β·v − lr·f'(x)`, `x ← x + v` and records the new point.
    ///
    /// With `decay = 0` this is exactly plain gradient descent.
    pub fn step_with_decay(&mut self, learning_rate: f64, decay: f64) -> Step {
        let x = self.trajectory.x();
        let gradient = objective::gradient(x);
        self.velocity = decay * self.velocity - learning_rate * gradient;
        let point = self.trajectory.record(x + self.velocity);

        Step {
            kind: Kind::Momentum,
            learning_rate,
            gradient,
            point,
        }
    }

    /// Returns the current velocity.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}
