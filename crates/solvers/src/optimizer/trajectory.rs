use descent_core::{Point, objective};

/// The current iterate of an optimizer and every point it has visited.
///
/// `history` and `losses` always have the same length, one entry per completed
/// step plus the seed entry. They are append-only between reseeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    x: f64,
    history: Vec<Point>,
    losses: Vec<f64>,
}

impl Trajectory {
    /// Creates a trajectory that starts, and so far ends, at `x0`.
    #[must_use]
    pub fn seed(x0: f64) -> Self {
        let start = Point::on_curve(x0);
        Self {
            x: x0,
            history: vec![start],
            losses: vec![start.y],
        }
    }

    /// Moves to `x` and appends it to the history.
    pub(super) fn record(&mut self, x: f64) -> Point {
        let point = Point::on_curve(x);
        self.x = x;
        self.history.push(point);
        self.losses.push(point.y);
        point
    }

    /// Returns the current iterate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns every visited point, starting with the seed.
    #[must_use]
    pub fn history(&self) -> &[Point] {
        &self.history
    }

    /// Returns the objective value at every visited point.
    #[must_use]
    pub fn losses(&self) -> &[f64] {
        &self.losses
    }

    /// Returns the most recent point.
    #[must_use]
    pub fn latest(&self) -> Point {
        self.history
            .last()
            .copied()
            .unwrap_or_else(|| Point::new(self.x, objective::value(self.x)))
    }

    /// Returns the most recent loss, or zero if none is recorded.
    #[must_use]
    pub fn latest_loss(&self) -> f64 {
        self.losses.last().copied().unwrap_or(0.0)
    }

    /// Returns the number of completed steps.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}
