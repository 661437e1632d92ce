//! Optimizers and the run controller that races them.
//!
//! - [`optimizer`] — per-algorithm state and the SGD, momentum, and Adam step
//!   rules, unified under the [`Optimizer`] sum type
//! - [`race`] — the controller that advances all three optimizers in lockstep,
//!   by manual steps or a cancellable animation timer
//!
//! [`Optimizer`]: optimizer::Optimizer

pub mod optimizer;
pub mod race;
