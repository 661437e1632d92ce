//! Core types shared by the descent optimizers.
//!
//! This crate defines the pieces every other crate in the workspace builds on:
//!
//! - [`objective`] — the fixed non-convex function being minimized and its
//!   analytic derivative
//! - [`Point`] — an `(x, f(x))` pair recorded in an optimizer's history
//! - [`Observer`] — receives events and optionally returns control actions

pub mod objective;

mod observer;
mod point;

pub use observer::Observer;
pub use point::Point;
