use descent_core::Observer;

use crate::traits::{CanStop, HasLosses};

/// Stops an animation once every optimizer's loss is at or below a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtLoss {
    threshold: f64,
}

impl StopAtLoss {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E: HasLosses, A: CanStop> Observer<E, A> for StopAtLoss {
    fn observe(&mut self, event: &E) -> Option<A> {
        event
            .losses()
            .iter()
            .all(|loss| *loss <= self.threshold)
            .then(A::stop)
    }
}
