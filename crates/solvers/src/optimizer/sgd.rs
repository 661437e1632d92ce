use descent_core::objective;

use super::{Kind, Step, Trajectory};

/// Plain gradient descent.
#[derive(Debug, Clone, PartialEq)]
pub struct Sgd {
    trajectory: Trajectory,
}

impl Sgd {
    /// Creates an optimizer seeded at `x0`.
    #[must_use]
    pub fn seed(x0: f64) -> Self {
        Self {
            trajectory: Trajectory::seed(x0),
        }
    }

    /// Applies `x ← x − lr·f'(x)` and records the new point.
    pub fn step(&mut self, learning_rate: f64) -> Step {
        let x = self.trajectory.x();
        let gradient = objective::gradient(x);
        let point = self.trajectory.record(x - learning_rate * gradient);

        Step {
            kind: Kind::Sgd,
            learning_rate,
            gradient,
            point,
        }
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}
