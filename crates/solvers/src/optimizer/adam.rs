use descent_core::objective;

use super::{Kind, Step, Trajectory};

/// Hyperparameters for [`Adam`] other than the learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdamParams {
    /// Decay rate for the first moment estimate.
    pub beta1: f64,

    /// Decay rate for the second moment estimate.
    pub beta2: f64,

    /// Added to the denominator to avoid division by zero.
    pub epsilon: f64,
}

impl Default for AdamParams {
    fn default() -> Self {
        Self {
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
        }
    }
}

/// Bias-corrected moment estimates for one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasCorrected {
    pub m_hat: f64,
    pub v_hat: f64,
}

/// Exponentially decayed first and second moments of the gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    m: f64,
    v: f64,
}

impl Moments {
    /// Returns the first moment (mean) estimate.
    #[must_use]
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Returns the second moment (uncentered variance) estimate.
    #[must_use]
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Folds in `gradient` and returns the bias-corrected estimates for step `t`.
    ///
    /// `t` is 1-based: the first update after seeding uses `t = 1`.
    pub fn update(&mut self, gradient: f64, t: usize, params: &AdamParams) -> BiasCorrected {
        self.m = params.beta1 * self.m + (1.0 - params.beta1) * gradient;
        self.v = params.beta2 * self.v + (1.0 - params.beta2) * gradient * gradient;

        let t = i32::try_from(t).unwrap_or(i32::MAX);
        BiasCorrected {
            m_hat: self.m / (1.0 - params.beta1.powi(t)),
            v_hat: self.v / (1.0 - params.beta2.powi(t)),
        }
    }
}

/// Adaptive moment estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct Adam {
    trajectory: Trajectory,
    moments: Moments,
}

impl Adam {
    /// Creates an optimizer seeded at `x0` with zeroed moments.
    #[must_use]
    pub fn seed(x0: f64) -> Self {
        Self {
            trajectory: Trajectory::seed(x0),
            moments: Moments::default(),
        }
    }

    /// Steps with [`AdamParams::default`].
    pub fn step(&mut self, learning_rate: f64) -> Step {
        self.step_with(learning_rate, &AdamParams::default())
    }

    /// Applies one bias-corrected Adam update and records the new point.
    ///
    /// The step index is the history length before the update, which is 1 on
    /// the first call after seeding since the history holds the seed point.
    pub fn step_with(&mut self, learning_rate: f64, params: &AdamParams) -> Step {
        let x = self.trajectory.x();
        let t = self.trajectory.history().len();
        let gradient = objective::gradient(x);

        let BiasCorrected { m_hat, v_hat } = self.moments.update(gradient, t, params);
        let next = x - learning_rate * m_hat / (v_hat.sqrt() + params.epsilon);
        let point = self.trajectory.record(next);

        Step {
            kind: Kind::Adam,
            learning_rate,
            gradient,
            point,
        }
    }

    /// Returns the current moment estimates.
    #[must_use]
    pub fn moments(&self) -> Moments {
        self.moments
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn seeds_with_zero_moments() {
        let adam = Adam::seed(-7.5);
        assert_eq!(adam.moments(), Moments::default());
        assert_eq!(adam.moments().m(), 0.0);
        assert_eq!(adam.moments().v(), 0.0);
    }

    #[test]
    fn first_step_moves_by_learning_rate() {
        // With t = 1 the bias correction undoes the zero start exactly:
        // m_hat = g, v_hat = g², so the step is lr·g/(|g| + ε) ≈ lr·sign(g).
        let mut adam = Adam::seed(-7.5);

        let step = adam.step(0.1);

        let g = objective::gradient(-7.5);
        let expected = -7.5 - 0.1 * g / (g.abs() + 1e-8);
        assert_relative_eq!(step.point.x, expected, epsilon = 1e-12);
        assert_relative_eq!(step.point.x, -7.4, epsilon = 1e-6);
    }

    #[test]
    fn first_update_uses_step_one() {
        let params = AdamParams::default();
        let mut moments = Moments::default();

        let corrected = moments.update(2.0, 1, &params);

        assert_relative_eq!(corrected.m_hat, 2.0, epsilon = 1e-12);
        assert_relative_eq!(corrected.v_hat, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn corrected_second_moment_is_never_negative() {
        let params = AdamParams::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let mut moments = Moments::default();
            let scale = 10f64.powi(rng.gen_range(-12..=6));
            for t in 1..=200 {
                let gradient = rng.gen_range(-1.0..=1.0) * scale;
                let corrected = moments.update(gradient, t, &params);
                assert!(corrected.v_hat >= 0.0, "v_hat = {}", corrected.v_hat);
                assert!(corrected.v_hat.sqrt().is_finite());
            }
        }
    }

    #[test]
    fn zero_gradient_does_not_divide_by_zero() {
        let mut adam = Adam::seed(0.0);

        let step = adam.step(0.1);

        assert_eq!(step.gradient, 0.0);
        assert_eq!(step.point.x, 0.0);
    }
}
