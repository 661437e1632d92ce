//! The objective every optimizer descends.
//!
//! ```text
//! f(x)  = (0.1·x)² + 0.05·cos(2π·x)
//! f'(x) = 0.02·x − 0.1π·sin(2π·x)
//! ```
//!
//! A shallow quadratic bowl centred on zero with a cosine ripple on top, so
//! the landscape has a local minimum near every integer. Plain gradient
//! descent started far from the origin tends to settle in one of the ripples;
//! momentum and Adam can carry through several of them.

use std::f64::consts::PI;

use crate::Point;

/// Evaluates `f(x)`.
#[must_use]
pub fn value(x: f64) -> f64 {
    (0.1 * x).powi(2) + 0.05 * (2.0 * PI * x).cos()
}

/// Evaluates the analytic derivative `f'(x)`.
#[must_use]
pub fn gradient(x: f64) -> f64 {
    0.02 * x - 0.1 * PI * (2.0 * PI * x).sin()
}

/// Samples the curve on `[min, max]` at a fixed spacing.
///
/// The first sample is at `min`; samples continue while `x <= max`. Each
/// sample is computed as `min + i * step` rather than by accumulation, so the
/// grid does not drift. Returns an empty curve if `step` is not a positive
/// finite number or if `max < min`.
#[must_use]
pub fn sample(min: f64, max: f64, step: f64) -> Vec<Point> {
    if !(step.is_finite() && step > 0.0) || max < min {
        return Vec::new();
    }

    // Absorb rounding so an endpoint that lands on the grid is included.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = ((max - min) / step + 1e-9).floor() as usize;

    (0..=count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = min + i as f64 * step;
            Point::on_curve(x)
        })
        .collect()
}
