// File: crates/graphcalc/src/app.rs
// Summary: Plotter: a session bound to a Skia surface, re-writing the PNG after every drawn curve.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use graph_core::{PlotReport, Session, SessionOptions};
use graph_render_skia::{RenderOptions, SkiaSurface};

pub struct Plotter {
    session: Session,
    surface: SkiaSurface,
    output: PathBuf,
}

impl Plotter {
    /// Validate origin and ratio, draw both axes and write the first PNG.
    pub fn new(
        origin: (f64, f64),
        ratio: i64,
        options: SessionOptions,
        render: &RenderOptions,
        output: PathBuf,
    ) -> Result<Self> {
        let session = Session::from_raw(origin.0, origin.1, ratio, options)?;
        let mut surface = SkiaSurface::new(render)?;
        session.draw_axes(&mut surface);
        let mut plotter = Self { session, surface, output };
        plotter.flush()?;
        Ok(plotter)
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Draw one expression; a recoverable failure leaves the canvas and PNG untouched.
    pub fn draw(&mut self, source: &str) -> Result<PlotReport> {
        let report = self.session.plot(&mut self.surface, source)?;
        tracing::info!(
            expr = source,
            color = %report.color,
            points = report.points,
            gaps = report.gaps.len(),
            "expression drawn"
        );
        for gap in &report.gaps {
            tracing::debug!(x = gap.x, error = %gap.error, "sample skipped");
        }
        self.flush()?;
        Ok(report)
    }

    fn flush(&mut self) -> Result<()> {
        self.surface
            .save_png(&self.output)
            .with_context(|| format!("failed to write '{}'", self.output.display()))
    }
}
