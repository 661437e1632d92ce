//! Watch SGD, momentum, and Adam race down the objective.
//!
//! # Usage
//!
//! ```text
//! cargo run --example race --features plot
//! cargo run --example race --features plot -- -3.2
//! ```
//!
//! The optional argument moves the starting point (default −7.5). Use Run to
//! animate, Step to advance one iteration, and Reset to start over. With the
//! lock checked, moving any learning-rate slider moves all three.

use std::error::Error;

use descent_observers::{RaceApp, ShowConfig};
use descent_solvers::race::{Config, Race};

fn main() -> Result<(), Box<dyn Error>> {
    let initial_x = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid starting point: expected a number, e.g. -7.5");
            std::process::exit(1);
        });

    let config = match initial_x {
        Some(x) => Config::default().with_initial_x(x)?,
        None => Config::default(),
    };

    RaceApp::new(Race::new(config), ShowConfig::new()).show()?;

    Ok(())
}
