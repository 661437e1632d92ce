//! Capability traits for cross-event observers.
//!
//! These traits abstract over event and action types so an observer can be
//! written once and reused wherever the capabilities line up.
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStop, HasLosses};
//!
//! struct AfterDivergence;
//!
//! impl<E: HasLosses, A: CanStop> Observer<E, A> for AfterDivergence {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         event
//!             .losses()
//!             .iter()
//!             .any(|loss| !loss.is_finite())
//!             .then(A::stop)
//!     }
//! }
//! ```

use descent_solvers::race;

/// An event that carries one loss per optimizer.
pub trait HasLosses {
    /// Returns the losses, in step order.
    fn losses(&self) -> [f64; 3];
}

/// An action type that can cancel a running animation.
pub trait CanStop {
    /// Returns the action that stops the animation.
    fn stop() -> Self;
}

impl HasLosses for race::Event {
    fn losses(&self) -> [f64; 3] {
        race::Event::losses(self)
    }
}

impl CanStop for race::Action {
    fn stop() -> Self {
        Self::Stop
    }
}
