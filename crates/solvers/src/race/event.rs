use crate::optimizer::{Kind, Step};

/// Emitted after every completed race iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration just completed, starting at 1.
    pub iteration: usize,

    /// One step per optimizer, in [`Kind::ALL`] order.
    pub steps: [Step; 3],
}

impl Event {
    /// Returns the step taken by the given optimizer.
    #[must_use]
    pub fn step(&self, kind: Kind) -> &Step {
        &self.steps[kind.index()]
    }

    /// Returns each optimizer's loss after this iteration.
    #[must_use]
    pub fn losses(&self) -> [f64; 3] {
        self.steps.map(|step| step.point.y)
    }
}
