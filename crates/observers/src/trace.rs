//! Line-per-iteration tracing for races.
//!
//! [`TraceObserver`] turns each race [`Event`] into a [`TraceRecord`], prints
//! it to stderr when verbose, and optionally keeps every record:
//!
//! ```text
//! [race] iter      1 | SGD x   -7.48500 f   5.105e-1 g  -1.500e-1 | Momentum ...
//! ```

use std::fmt::Write;

use descent_core::Observer;
use descent_solvers::{
    optimizer::Kind,
    race::{Action, Event},
};

/// One optimizer's state after a traced iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEntry {
    pub kind: Kind,
    pub x: f64,
    pub loss: f64,
    pub gradient: f64,
    pub learning_rate: f64,
}

/// Everything traced for one race iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord {
    pub iteration: usize,
    pub entries: [TraceEntry; 3],
}

impl TraceRecord {
    /// Formats the record as a single log line.
    #[must_use]
    pub fn format_line(&self) -> String {
        let mut line = format!("[race] iter {:>6}", self.iteration);
        for entry in &self.entries {
            let _ = write!(
                line,
                " | {} x {:>+10.5} f {:>10.3e} g {:>+10.3e}",
                entry.kind, entry.x, entry.loss, entry.gradient
            );
        }
        line
    }
}

impl From<&Event> for TraceRecord {
    fn from(event: &Event) -> Self {
        Self {
            iteration: event.iteration,
            entries: event.steps.map(|step| TraceEntry {
                kind: step.kind,
                x: step.point.x,
                loss: step.point.y,
                gradient: step.gradient,
                learning_rate: step.learning_rate,
            }),
        }
    }
}

/// Records race iterations and optionally prints them.
///
/// Never returns an action.
#[derive(Debug, Clone, Default)]
pub struct TraceObserver {
    verbose: bool,
    history: Option<Vec<TraceRecord>>,
}

impl TraceObserver {
    /// Creates a tracer that prints every iteration to stderr.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            history: None,
        }
    }

    /// Creates a silent tracer that keeps every record.
    #[must_use]
    pub fn with_history() -> Self {
        Self {
            verbose: false,
            history: Some(Vec::new()),
        }
    }

    /// Keeps every record in addition to any printing.
    #[must_use]
    pub fn keep_history(mut self) -> Self {
        self.history.get_or_insert_with(Vec::new);
        self
    }

    /// Returns the records kept so far; empty unless history is enabled.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        self.history.as_deref().unwrap_or_default()
    }

    /// Consumes the tracer and returns the kept records.
    #[must_use]
    pub fn into_history(self) -> Vec<TraceRecord> {
        self.history.unwrap_or_default()
    }

    fn emit(&mut self, record: TraceRecord) {
        if self.verbose {
            eprintln!("{}", record.format_line());
        }
        if let Some(history) = self.history.as_mut() {
            history.push(record);
        }
    }
}

impl Observer<Event, Action> for TraceObserver {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.emit(TraceRecord::from(event));
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to races that take an observer by
/// value, so the records can be read after the run.
impl Observer<Event, Action> for &mut TraceObserver {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
