//! Convergence plot for a root-finding run.
//!
//! Renders the function curve over the trace's sampling domain, every
//! intermediate estimate plotted against `f(x)`, and a horizontal reference
//! line at `y = 0`. Available behind the `plot` cargo feature.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoint, Points};

use crate::expr::Function;
use crate::root_finding::RootFindingReport;

/// Number of curve samples across the plot domain.
pub const CURVE_SAMPLES: usize = 500;

/// A runnable egui application showing one solver run.
pub struct ConvergencePlot {
    curve: Vec<PlotPoint>,
    iterates: Vec<PlotPoint>,
    title: String,
}

impl ConvergencePlot {
    /// Builds the plot from the solved function and its report.
    ///
    /// The curve is sampled at [`CURVE_SAMPLES`] points over
    /// `[min(trace) - 1, max(trace) + 1]`; each trace entry becomes one
    /// marker at `(x, f(x))`.
    #[must_use]
    pub fn new(function: &Function, report: &RootFindingReport) -> Self {
        // a report's trace is never empty, but a plot over nothing should
        // still open a window rather than panic
        let (lo, hi) = report.trace.plot_domain().unwrap_or((-1.0, 1.0));

        let xs = linspace(lo, hi, CURVE_SAMPLES);
        let ys = function.sample(&xs);
        let curve = xs
            .iter()
            .zip(&ys)
            .map(|(&x, &y)| PlotPoint::new(x, y))
            .collect();

        let iterates = report
            .trace
            .iter()
            .map(|x| PlotPoint::new(x, function.eval(x)))
            .collect();

        Self {
            curve,
            iterates,
            title: format!("{} convergence", report.algorithm_name),
        }
    }

    /// Overrides the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Opens a native window with the plot; blocks until it is closed.
    #[allow(clippy::missing_errors_doc)]
    pub fn show(self) -> Result<(), eframe::Error> {
        let name = self.title.clone();
        eframe::run_native(
            &name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for ConvergencePlot {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("convergence-plot")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.hline(HLine::new(0.0).name("y = 0"));
                    plot_ui.line(Line::new(self.curve.as_slice()).name("f(x)"));
                    plot_ui.points(
                        Points::new(self.iterates.as_slice())
                            .name("iterates")
                            .radius(3.0),
                    );
                });
        });
    }
}

fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![lo];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}
