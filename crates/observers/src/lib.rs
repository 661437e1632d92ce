//! Reusable observers and the presentation layer for descent races.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasLosses`], [`CanStop`])
//! - [`trace`] — [`TraceObserver`], one formatted line per race iteration
//! - [`controls`] — [`RateControls`], learning-rate inputs with a lock that
//!   keeps all three rates equal
//! - [`StopAtLoss`] — stops an animation once every optimizer is good enough
//!
//! # Features
//!
//! - `plot` — Enables [`RaceApp`] for watching a race live via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasLosses`]: traits::HasLosses
//! [`CanStop`]: traits::CanStop
//! [`TraceObserver`]: trace::TraceObserver
//! [`RateControls`]: controls::RateControls

pub mod controls;
pub mod trace;
pub mod traits;

mod stop;

#[cfg(feature = "plot")]
mod plot;

pub use stop::StopAtLoss;

#[cfg(feature = "plot")]
pub use plot::{RaceApp, ShowConfig};
