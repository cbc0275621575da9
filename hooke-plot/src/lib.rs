//! A small egui application for overlaying simulation time series.
//!
//! The core schemes return plain `[t, x]` samples; this crate turns any
//! number of named sample sets into a single labeled, zoomable plot with a
//! legend. Swapping in a different charting or export backend never touches
//! the core.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// A runnable egui application for plotting data.
#[derive(Default)]
pub struct PlotApp {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading shown above the plot.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the label for the horizontal axis.
    #[must_use]
    pub fn x_label(mut self, label: &str) -> Self {
        self.x_label = label.to_string();
        self
    }

    /// Sets the label for the vertical axis.
    #[must_use]
    pub fn y_label(mut self, label: &str) -> Self {
        self.y_label = label.to_string();
        self
    }

    /// Adds a named curve from `[x, y]` sample pairs.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.title.is_empty() {
                ui.heading(self.title.as_str());
            }

            Plot::new("plot-id")
                .legend(Legend::default())
                .x_axis_label(self.x_label.as_str())
                .y_axis_label(self.y_label.as_str())
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        plot_ui.line(Line::new(points).name(name));
                    }
                });
        });
    }
}
