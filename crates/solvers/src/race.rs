//! Runs SGD, momentum, and Adam in lockstep on the shared objective.
//!
//! A [`Race`] owns one optimizer of each [`Kind`], all seeded at the same
//! starting point. Each iteration reads learning rates from a [`RateSource`],
//! steps SGD, Momentum, then Adam exactly once, and emits an [`Event`].
//!
//! # Driving a race
//!
//! - [`Race::step`] — one manual iteration
//! - [`Race::run`] + [`Race::tick`] — timed animation driven by an external
//!   clock, such as a UI frame loop
//! - [`Race::animate`] — blocking animation that sleeps between iterations
//!
//! The animation is a single cancellable timer. [`Race::stop`] or an observer
//! returning [`Action::Stop`] cancels it; the step already in flight always
//! completes. Timing never affects the numbers: an animated race produces the
//! same trajectories as the same number of manual steps.
//!
//! # Lifecycle
//!
//! - [`Phase::Idle`] — after construction, [`Race::reset`], or an animation
//!   cancelled before the budget ran out
//! - [`Phase::Stepping`] — after a manual step
//! - [`Phase::Animating`] — while the animation timer is running
//! - [`Phase::Finished`] — once `max_iters` iterations have completed; further
//!   steps are no-ops until a reset
//!
//! [`Kind`]: crate::optimizer::Kind

mod action;
mod animation;
mod config;
mod event;
mod phase;
mod rates;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use phase::Phase;
pub use rates::{LearningRates, RateError, RateSource};

use std::time::{Duration, Instant};

use descent_core::Observer;

use crate::optimizer::{Kind, Optimizer};

use animation::Animation;

/// The outcome of asking a race to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// One iteration completed.
    Advanced,

    /// One iteration completed and the observer asked to stop animating.
    StoppedByObserver,

    /// Nothing happened because the iteration budget is exhausted.
    Exhausted,
}

/// Three optimizers advancing one shared iteration at a time.
#[derive(Debug, Clone)]
pub struct Race {
    config: Config,
    iteration: usize,
    phase: Phase,
    animation: Animation,
    optimizers: [Optimizer; 3],
}

impl Race {
    /// Creates a race with every optimizer seeded at `config.initial_x()`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            iteration: 0,
            phase: Phase::Idle,
            animation: Animation::new(config.delay()),
            optimizers: seed_all(config.initial_x()),
        }
    }

    /// Advances every optimizer by one iteration.
    ///
    /// Rates are read from `rates` on every call. If the budget is already
    /// exhausted this is a no-op that returns [`Status::Exhausted`]. A manual
    /// step during an animation leaves the animation running unless it uses up
    /// the budget or the observer asks to stop.
    pub fn step<R, Obs>(&mut self, rates: &R, mut observer: Obs) -> Status
    where
        R: RateSource + ?Sized,
        Obs: Observer<Event, Action>,
    {
        let status = self.advance(rates, &mut observer);

        if status == Status::Exhausted || self.is_exhausted() {
            self.animation.cancel();
            self.phase = Phase::Finished;
        } else if self.animation.is_active() {
            self.phase = Phase::Animating;
        } else {
            self.phase = Phase::Stepping;
        }
        status
    }

    /// Starts the animation timer.
    ///
    /// The first [`tick`](Self::tick) after this call steps immediately. Does
    /// nothing if the budget is already exhausted.
    pub fn run(&mut self) {
        if self.is_exhausted() {
            self.animation.cancel();
            self.phase = Phase::Finished;
            return;
        }
        self.animation.start();
        self.phase = Phase::Animating;
    }

    /// Cancels the animation, if one is running.
    pub fn stop(&mut self) {
        if self.animation.is_active() {
            self.animation.cancel();
            self.phase = Phase::Idle;
        }
    }

    /// Steps once if the animation is running and its next tick is due.
    ///
    /// Returns `None` when no step was attempted.
    pub fn tick<R, Obs>(&mut self, now: Instant, rates: &R, mut observer: Obs) -> Option<Status>
    where
        R: RateSource + ?Sized,
        Obs: Observer<Event, Action>,
    {
        if !self.animation.is_due(now) {
            return None;
        }
        let status = self.animate_once(rates, &mut observer);
        self.animation.schedule(now);
        Some(status)
    }

    /// Runs the animation to completion, blocking between iterations.
    ///
    /// `sleep` is called with the configured delay after every iteration that
    /// leaves the animation running. Returns the status of the last iteration.
    pub fn animate<R, Obs, S>(&mut self, rates: &R, mut observer: Obs, mut sleep: S) -> Status
    where
        R: RateSource + ?Sized,
        Obs: Observer<Event, Action>,
        S: FnMut(Duration),
    {
        self.run();

        let mut status = Status::Exhausted;
        while self.animation.is_active() {
            status = self.animate_once(rates, &mut observer);
            if self.animation.is_active() {
                sleep(self.animation.delay());
            }
        }
        status
    }

    /// Reseeds every optimizer, zeroes the iteration count, and cancels any
    /// animation.
    pub fn reset(&mut self) {
        self.iteration = 0;
        self.phase = Phase::Idle;
        self.animation.cancel();
        self.optimizers = seed_all(self.config.initial_x());
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns whether the animation timer is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Returns when the next animated step is due, if one is scheduled.
    #[must_use]
    pub fn next_tick(&self) -> Option<Instant> {
        self.animation.next_due()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the optimizer of the given kind.
    #[must_use]
    pub fn optimizer(&self, kind: Kind) -> &Optimizer {
        &self.optimizers[kind.index()]
    }

    /// Returns every optimizer, in [`Kind::ALL`] order.
    #[must_use]
    pub fn optimizers(&self) -> &[Optimizer; 3] {
        &self.optimizers
    }

    fn is_exhausted(&self) -> bool {
        self.iteration >= self.config.max_iters()
    }

    /// One animated iteration, updating the timer and phase but not the schedule.
    fn animate_once<R, Obs>(&mut self, rates: &R, observer: &mut Obs) -> Status
    where
        R: RateSource + ?Sized,
        Obs: Observer<Event, Action>,
    {
        let status = self.advance(rates, observer);

        if status == Status::Exhausted || self.is_exhausted() {
            self.animation.cancel();
            self.phase = Phase::Finished;
        } else if status == Status::StoppedByObserver {
            self.phase = Phase::Idle;
        }
        status
    }

    /// Steps all optimizers and notifies the observer.
    ///
    /// A stop request from the observer cancels the animation here, so every
    /// driver honours it the same way.
    fn advance<R, Obs>(&mut self, rates: &R, observer: &mut Obs) -> Status
    where
        R: RateSource + ?Sized,
        Obs: Observer<Event, Action>,
    {
        if self.is_exhausted() {
            self.animation.cancel();
            return Status::Exhausted;
        }

        let rates = rates.learning_rates();
        let [sgd, momentum, adam] = &mut self.optimizers;
        let steps = [
            sgd.step(rates.sgd),
            momentum.step(rates.momentum),
            adam.step(rates.adam),
        ];
        self.iteration += 1;

        let event = Event {
            iteration: self.iteration,
            steps,
        };
        match observer.observe(&event) {
            Some(Action::Stop) => {
                self.animation.cancel();
                Status::StoppedByObserver
            }
            None => Status::Advanced,
        }
    }
}

impl Default for Race {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn seed_all(x0: f64) -> [Optimizer; 3] {
    Kind::ALL.map(|kind| Optimizer::seed(kind, x0))
}
