//! Live chart for watching a race.
//!
//! See [`RaceApp`] and [`ShowConfig`] for usage.

use std::{ops::RangeInclusive, time::Instant};

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use descent_core::objective;
use descent_solvers::{optimizer::Kind, race::Race};

use crate::controls::RateControls;

/// Range offered by the learning-rate sliders.
const RATE_RANGE: RangeInclusive<f64> = 0.001..=1.0;

/// Spacing of the background curve samples.
const CURVE_STEP: f64 = 0.02;

/// Configuration for rendering a [`RaceApp`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// RaceApp::new(Race::default(), ShowConfig::new().title("Race")).show()?;
/// ```
#[derive(Debug, Clone)]
pub struct ShowConfig {
    title: String,
    x_range: [f64; 2],
    y_range: [f64; 2],
}

impl ShowConfig {
    /// Creates a config framing the interesting part of the objective.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "SGD vs. Momentum vs. Adam".to_owned(),
            x_range: [-8.0, 2.0],
            y_range: [-0.05, 0.7],
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the x-axis range; the objective curve is sampled across it.
    #[must_use]
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = [min, max];
        self
    }

    /// Sets the y-axis range.
    #[must_use]
    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = [min, max];
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An egui application that drives a [`Race`] and charts its trajectories.
///
/// The top panel has Run, Step, and Reset buttons, one slider per learning
/// rate with a lock checkbox, and the current iteration and losses. The chart
/// shows the objective curve with each optimizer's path on top of it, the
/// latest point drawn larger.
///
/// Animation runs off the frame clock: every frame calls [`Race::tick`], and
/// while animating the app asks egui to repaint when the next tick is due.
pub struct RaceApp {
    race: Race,
    controls: RateControls,
    config: ShowConfig,
    curve: Vec<[f64; 2]>,
    error: Option<String>,
}

impl RaceApp {
    #[must_use]
    pub fn new(race: Race, config: ShowConfig) -> Self {
        let [min, max] = config.x_range;
        let curve = objective::sample(min, max, CURVE_STEP)
            .into_iter()
            .map(Into::into)
            .collect();

        Self {
            race,
            controls: RateControls::new(),
            config,
            curve,
            error: None,
        }
    }

    /// Opens a blocking window running the race.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let title = self.config.title.clone();
        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Run").clicked() {
                self.race.run();
            }
            if ui.button("Step").clicked() {
                self.race.step(&self.controls, ());
            }
            if ui
                .add_enabled(self.race.is_animating(), egui::Button::new("Stop"))
                .clicked()
            {
                self.race.stop();
            }
            if ui.button("Reset").clicked() {
                self.race.reset();
                self.controls.reset();
                self.error = None;
            }
        });
    }

    fn sliders(&mut self, ui: &mut egui::Ui) {
        let mut locked = self.controls.is_locked();
        if ui.checkbox(&mut locked, "Lock learning rates").changed() {
            self.controls.set_locked(locked);
        }

        for kind in Kind::ALL {
            let mut rate = self.controls.get(kind);
            let slider = egui::Slider::new(&mut rate, RATE_RANGE).text(kind.label());
            if ui.add(slider).changed() {
                self.error = self.controls.set(kind, rate).err().map(|e| e.to_string());
            }
        }

        if let Some(error) = &self.error {
            ui.colored_label(Color32::RED, error.as_str());
        }
    }

    fn metrics(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Iteration: {}", self.race.iteration()));
            for optimizer in self.race.optimizers() {
                let loss = optimizer.trajectory().latest_loss();
                ui.label(format!("{}: {loss:.6}", optimizer.kind()));
            }
        });
    }

    fn chart(&self, ui: &mut egui::Ui) {
        let [x_min, x_max] = self.config.x_range;
        let [y_min, y_max] = self.config.y_range;

        Plot::new("race")
            .legend(Legend::default())
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_min)
            .include_y(y_max)
            .x_axis_label("Parameter x")
            .y_axis_label("Function value f(x)")
            .show(ui, |plot_ui| {
                let curve: PlotPoints = self.curve.iter().copied().collect();
                plot_ui.line(
                    Line::new(curve)
                        .name("f(x) = (0.1x)² + 0.05cos(2πx)")
                        .color(Color32::from_gray(75)),
                );

                for optimizer in self.race.optimizers() {
                    let kind = optimizer.kind();
                    let color = trace_color(kind);
                    let trajectory = optimizer.trajectory();

                    let path: Vec<[f64; 2]> =
                        trajectory.history().iter().map(|&point| point.into()).collect();
                    plot_ui.line(
                        Line::new(PlotPoints::from(path.clone()))
                            .name(kind.label())
                            .color(color),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(path))
                            .radius(1.0)
                            .color(color)
                            .name(kind.label()),
                    );

                    let latest = PlotPoints::from(vec![<[f64; 2]>::from(trajectory.latest())]);
                    plot_ui.points(
                        Points::new(latest)
                            .radius(4.0)
                            .color(color)
                            .name(kind.label()),
                    );
                }
            });
    }
}

/// Trace color for each optimizer.
fn trace_color(kind: Kind) -> Color32 {
    match kind {
        Kind::Sgd => Color32::from_rgb(255, 99, 132),
        Kind::Momentum => Color32::from_rgb(54, 162, 235),
        Kind::Adam => Color32::from_rgb(153, 102, 255),
    }
}

impl eframe::App for RaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.race.tick(Instant::now(), &self.controls, ());

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.buttons(ui);
            self.sliders(ui);
            self.metrics(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| self.chart(ui));

        if self.race.is_animating() {
            match self.race.next_tick() {
                Some(due) => {
                    ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
                }
                None => ctx.request_repaint(),
            }
        }
    }
}
