use descent_core::Point;

use super::Kind;

/// What a single step rule application did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The optimizer that stepped.
    pub kind: Kind,

    /// The learning rate used for this step.
    pub learning_rate: f64,

    /// The gradient at the iterate before the step.
    pub gradient: f64,

    /// The new iterate and its objective value.
    pub point: Point,
}
