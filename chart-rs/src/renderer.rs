use gnuplot::AlignType::{AlignBottom, AlignCenter};
use gnuplot::Coordinate::Graph;
use gnuplot::LegendOption::Placement;
use gnuplot::PlotOption::{LineWidth, PointSize, PointSymbol};
use gnuplot::{AxesCommon, Caption, Color, Figure};

use crate::errors::ViewError;
use crate::frame::ChartFrame;

const LINE_WIDTH: f64 = 2.0;
const SYMBOL_SIZE: f64 = 0.6;

/// Draws chart frames somewhere.
pub trait ChartRenderer: Send {
    fn render(&mut self, frame: &ChartFrame) -> Result<(), ViewError>;
}

/// Live gnuplot window with one line per axis.
pub struct GnuplotRenderer {
    figure: Figure,
}

impl GnuplotRenderer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
        }
    }
}

impl Default for GnuplotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for GnuplotRenderer {
    fn render(&mut self, frame: &ChartFrame) -> Result<(), ViewError> {
        self.figure.clear_axes();
        let axes = self.figure.axes2d();
        axes.set_title(&format!("{} - {}", frame.tag, frame.title), &[]);
        axes.set_x_label("Index", &[]);
        axes.set_legend(
            Graph(0.5),
            Graph(0.0),
            &[Placement(AlignCenter, AlignBottom)],
            &[],
        );

        for series in frame.series.iter().filter(|s| !s.is_empty()) {
            axes.lines_points(
                series.xs(),
                series.ys(),
                &[
                    Caption(series.axis.caption()),
                    Color(series.axis.color().into()),
                    LineWidth(LINE_WIDTH),
                    PointSymbol('O'),
                    PointSize(SYMBOL_SIZE),
                ],
            );
        }

        self.figure
            .show_and_keep_running()
            .map_err(|e| ViewError::Render(e.to_string()))?;
        Ok(())
    }
}

/// Writes the readout of every frame to the log.
#[derive(Default)]
pub struct TextRenderer {
    last_lines: Option<[String; 3]>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Readout of the last rendered frame
    pub fn last_lines(&self) -> Option<&[String; 3]> {
        self.last_lines.as_ref()
    }
}

impl ChartRenderer for TextRenderer {
    fn render(&mut self, frame: &ChartFrame) -> Result<(), ViewError> {
        let lines = frame.readout_lines();
        log::info!(
            "{} [{} samples] {} | {} | {}",
            frame.title,
            frame.len(),
            lines[0],
            lines[1],
            lines[2]
        );
        self.last_lines = Some(lines);
        Ok(())
    }
}
