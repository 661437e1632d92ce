//! Run a race without a window and print every iteration.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trace
//! cargo run --example trace -- 0.05
//! ```
//!
//! The optional argument sets a shared learning rate (default 0.1).

use std::{error::Error, time::Duration};

use descent_observers::trace::TraceObserver;
use descent_solvers::{
    optimizer::Kind,
    race::{Config, LearningRates, Race},
};

fn main() -> Result<(), Box<dyn Error>> {
    let rate = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid learning rate: expected a number, e.g. 0.1");
            std::process::exit(1);
        })
        .unwrap_or(LearningRates::DEFAULT);

    let rates = LearningRates::uniform(rate);
    rates.validate()?;

    let config = Config::default().with_delay(Duration::from_millis(20))?;
    let mut race = Race::new(config);
    let mut tracer = TraceObserver::verbose();

    race.animate(&rates, &mut tracer, std::thread::sleep);

    println!("After {} iterations:", race.iteration());
    for kind in Kind::ALL {
        let trajectory = race.optimizer(kind).trajectory();
        println!(
            "  {:<8} x = {:>+9.5}  f(x) = {:.6}",
            kind.label(),
            trajectory.x(),
            trajectory.latest_loss()
        );
    }

    Ok(())
}
