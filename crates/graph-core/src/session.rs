// File: crates/graph-core/src/session.rs
// Summary: Top-level session controller: validated setup, axis drawing, per-expression plotting, draw counter.

use crate::axis::{AxisKind, AxisLayout, VisibleDomain};
use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::expr::Expression;
use crate::sampler::{sample, OnEvalError, Polyline, SampleError, SampleGap};
use crate::scale::CoordinateMapper;
use crate::surface::DrawingSurface;
use crate::theme::{Palette, AXIS_COLOR};
use crate::types::{CanvasSize, Origin, Ratio, TICK_LENGTH};

/// Read-only settings of a session.
#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub canvas: CanvasSize,
    pub palette: Palette,
    pub axis_color: String,
    pub on_eval_error: OnEvalError,
    pub tick_length: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            palette: Palette::default(),
            axis_color: AXIS_COLOR.to_string(),
            on_eval_error: OnEvalError::default(),
            tick_length: TICK_LENGTH,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self {
            palette: config.palette()?,
            axis_color: config.axis_color.clone(),
            on_eval_error: config.on_eval_error,
            ..Self::default()
        })
    }
}

/// Outcome of one drawn expression.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotReport {
    /// Draw-counter value the color was chosen with.
    pub index: usize,
    pub color: String,
    pub points: usize,
    /// Samples skipped under the break policy.
    pub gaps: Vec<SampleGap>,
}

pub struct Session {
    mapper: CoordinateMapper,
    options: SessionOptions,
    x_axis: AxisLayout,
    y_axis: AxisLayout,
    draw_count: usize,
}

impl Session {
    /// Lay out both axes once; the x layout fixes the domain for every later curve.
    pub fn new(origin: Origin, ratio: Ratio, options: SessionOptions) -> Self {
        let x_axis = AxisLayout::compute(AxisKind::X, options.canvas, origin, ratio);
        let y_axis = AxisLayout::compute(AxisKind::Y, options.canvas, origin, ratio);
        let domain = x_axis.domain();
        tracing::info!(?origin, ratio = ratio.get(), xmin = domain.xmin, xmax = domain.xmax, "session configured");
        Self { mapper: CoordinateMapper::new(origin, ratio), options, x_axis, y_axis, draw_count: 0 }
    }

    /// Validate raw user input before anything is laid out or drawn.
    pub fn from_raw(origin_x: f64, origin_y: f64, ratio: i64, options: SessionOptions) -> Result<Self, GraphError> {
        let origin = Origin::new(origin_x, origin_y)?;
        let ratio = Ratio::new(ratio)?;
        Ok(Self::new(origin, ratio, options))
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn x_axis(&self) -> &AxisLayout {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &AxisLayout {
        &self.y_axis
    }

    pub fn domain(&self) -> VisibleDomain {
        self.x_axis.domain()
    }

    /// Expressions drawn so far.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn draw_axes<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_color(&self.options.axis_color);
        self.x_axis.draw(surface, self.options.tick_length);
        self.y_axis.draw(surface, self.options.tick_length);
    }

    /// Sample without drawing or touching the counter.
    pub fn rasterize(&self, expr: &Expression) -> Result<Polyline, SampleError> {
        sample(&self.mapper, self.domain(), expr, self.options.on_eval_error)
    }

    /// Parse `source` and draw it. On any error nothing is drawn and the counter is unchanged.
    pub fn plot<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, source: &str) -> Result<PlotReport, GraphError> {
        let expr = Expression::parse(source)?;
        self.plot_expression(surface, &expr)
    }

    pub fn plot_expression<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        expr: &Expression,
    ) -> Result<PlotReport, GraphError> {
        let polyline = self.rasterize(expr)?;
        let index = self.draw_count;
        let color = self.options.palette.color_for(index).to_string();

        surface.set_color(&color);
        polyline.stream_to(surface);
        self.draw_count += 1;

        if polyline.is_empty() {
            tracing::warn!(expr = %expr, "no sample of the expression is defined on the visible domain");
        }
        Ok(PlotReport { index, color, points: polyline.len(), gaps: polyline.gaps })
    }
}
