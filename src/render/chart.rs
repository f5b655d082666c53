use std::fmt;
use std::fs;
use std::path::Path;

use plotters::prelude::*;

use crate::domain::movement::MovementPath;
use crate::error::{Error, Result};

pub const CHART_TITLE: &str = "Disk Head Movement (FCFS)";
pub const X_AXIS_LABEL: &str = "Cylinder Position";
pub const Y_AXIS_LABEL: &str = "Sequence of Operations";

/// Draws a movement path onto a render target owned by the renderer itself.
///
/// X is the cylinder position, Y the sequence index. Points are joined by
/// straight segments and each one is marked.
pub trait ChartRenderer {
    /// Discards everything drawn so far.
    fn reset(&mut self);

    /// Replaces the current drawing with `path`.
    fn render(&mut self, path: &MovementPath) -> Result<()>;
}

fn render_error<E: std::error::Error>(e: E) -> Error {
    Error::RenderError(e.to_string())
}

/// Cylinder axis range with a little padding so the outermost markers stay visible.
///
/// Computed in `f64`; the plotters integer coordinates overflow on spans close to the full `i64` range.
fn cylinder_range(path: &MovementPath) -> (f64, f64) {
    let min = path.min_cylinder() as f64;
    let max = path.max_cylinder() as f64;
    let pad = ((max - min) / 20.0).max(1.0);

    (min - pad, max + pad)
}

/// SVG line chart kept as an in-memory document.
#[derive(Debug, Clone)]
pub struct SvgChart {
    width: u32,
    height: u32,
    document: String,
}

impl Default for SvgChart {
    fn default() -> Self {
        SvgChart::new(900, 600)
    }
}

impl SvgChart {
    pub fn new(width: u32, height: u32) -> Self {
        SvgChart { width, height, document: String::new() }
    }

    /// The current SVG document, empty after a reset.
    pub fn svg(&self) -> &str {
        &self.document
    }

    pub fn save(&self, file_path: impl AsRef<Path>) -> Result<()> {
        let file_path = file_path.as_ref();
        if self.document.is_empty() {
            return Err(Error::RenderError("nothing has been rendered yet".to_string()));
        }

        fs::write(file_path, &self.document)?;
        log::info!("Chart written to '{}'.", file_path.display());
        Ok(())
    }
}

impl ChartRenderer for SvgChart {
    fn reset(&mut self) {
        log::trace!("Clearing SVG chart ({} bytes).", self.document.len());
        self.document.clear();
    }

    fn render(&mut self, path: &MovementPath) -> Result<()> {
        self.reset();

        let outcome = self.draw(path);
        self.keep_if_drawn(outcome)?;

        log::debug!("Rendered SVG chart with {} points ({} bytes).", path.len(), self.document.len());
        Ok(())
    }
}

impl SvgChart {
    /// Drops a partially written document when drawing failed, so `save` never writes it.
    fn keep_if_drawn(&mut self, outcome: Result<()>) -> Result<()> {
        if outcome.is_err() {
            self.reset();
        }
        outcome
    }

    /// Draws into the document buffer; may leave a partial document behind on error.
    fn draw(&mut self, path: &MovementPath) -> Result<()> {
        let (x_min, x_max) = cylinder_range(path);
        let last_index = path.len() as i64 - 1;
        let points: Vec<(f64, i64)> = path.positions().iter().enumerate().map(|(i, &p)| (p as f64, i as i64)).collect();

        let root = SVGBackend::with_string(&mut self.document, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, 0i64..last_index + 1)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .axis_desc_style(("sans-serif", 16))
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))
            .map_err(render_error)?
            .label(CHART_TITLE)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

        chart
            .draw_series(points.iter().map(|&point| Circle::new(point, 4, BLUE.filled())))
            .map_err(render_error)?;

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)
    }
}

/// Plain text chart for terminals: one row per sequence index, the marker
/// placed proportionally between the lowest and highest cylinder.
#[derive(Debug, Clone)]
pub struct TextChart {
    width: usize,
    lines: Vec<String>,
}

impl Default for TextChart {
    fn default() -> Self {
        TextChart::new(60)
    }
}

impl TextChart {
    pub fn new(width: usize) -> Self {
        TextChart { width: width.max(2), lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn column(&self, position: i64, min: i64, max: i64) -> usize {
        let span = max.abs_diff(min) as u128;
        if span == 0 {
            return 0;
        }
        let offset = position.abs_diff(min) as u128;
        (offset * (self.width as u128 - 1) / span) as usize
    }
}

impl ChartRenderer for TextChart {
    fn reset(&mut self) {
        log::trace!("Clearing text chart ({} lines).", self.lines.len());
        self.lines.clear();
    }

    fn render(&mut self, path: &MovementPath) -> Result<()> {
        self.reset();

        let min = path.min_cylinder();
        let max = path.max_cylinder();

        self.lines.push(format!("{} ({}: {} .. {})", CHART_TITLE, X_AXIS_LABEL, min, max));
        for (index, &position) in path.positions().iter().enumerate() {
            let column = self.column(position, min, max);
            self.lines.push(format!("{:>4} |{}o {}", index, " ".repeat(column), position));
        }

        Ok(())
    }
}

impl fmt::Display for TextChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
