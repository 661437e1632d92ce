use crate::objective;

/// An iterate paired with the objective value at that iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The iterate.
    pub x: f64,

    /// The objective value `f(x)`.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the point on the objective curve at `x`.
    #[must_use]
    pub fn on_curve(x: f64) -> Self {
        Self::new(x, objective::value(x))
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}
