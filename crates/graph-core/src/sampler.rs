// File: crates/graph-core/src/sampler.rs
// Summary: Walks the visible domain at ten samples per unit and emits a pixel-space polyline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::axis::VisibleDomain;
use crate::expr::{EvalError, Expression};
use crate::geometry::PixelPoint;
use crate::scale::CoordinateMapper;
use crate::surface::DrawingSurface;

/// Samples per graph unit along x.
pub const SAMPLES_PER_UNIT: i64 = 10;

/// What to do when the expression has no value at a sample.
/// One policy applies to every expression of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnEvalError {
    /// Drop the whole curve and report the first failing sample.
    #[default]
    Abort,
    /// Skip the failing sample and lift the pen; the curve resumes at the next good sample.
    Break,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
}

impl PathCommand {
    pub fn point(&self) -> PixelPoint {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }
}

/// A sample skipped under [`OnEvalError::Break`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleGap {
    pub x: f64,
    pub error: EvalError,
}

/// Rasterized curve, ordered by strictly increasing x.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub commands: Vec<PathCommand>,
    pub gaps: Vec<SampleGap>,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = PixelPoint> + '_ {
        self.commands.iter().map(PathCommand::point)
    }

    /// Replay the pen instructions onto a surface.
    pub fn stream_to<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => surface.move_to(p.x, p.y),
                PathCommand::LineTo(p) => surface.line_to(p.x, p.y),
            }
        }
    }
}

/// First failing sample under [`OnEvalError::Abort`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot evaluate at x = {x}: {source}")]
pub struct SampleError {
    pub x: f64,
    #[source]
    pub source: EvalError,
}

/// Number of samples for a domain: `(xmax - xmin) * 10 + 1`.
pub fn sample_count(domain: VisibleDomain) -> usize {
    ((domain.xmax - domain.xmin) * SAMPLES_PER_UNIT + 1).max(0) as usize
}

/// Sample positions `k / 10` for `k` in `xmin*10 ..= xmax*10`; never accumulated.
pub fn sample_xs(domain: VisibleDomain) -> impl Iterator<Item = f64> {
    (domain.xmin * SAMPLES_PER_UNIT..=domain.xmax * SAMPLES_PER_UNIT)
        .map(|k| k as f64 / SAMPLES_PER_UNIT as f64)
}

/// Rasterize `expr` over `domain`. Pure: same inputs, same output.
pub fn sample(
    mapper: &CoordinateMapper,
    domain: VisibleDomain,
    expr: &Expression,
    policy: OnEvalError,
) -> Result<Polyline, SampleError> {
    let mut polyline = Polyline { commands: Vec::with_capacity(sample_count(domain)), gaps: Vec::new() };
    let mut pen_down = false;

    for x in sample_xs(domain) {
        match expr.eval(x) {
            Ok(y) => {
                let p = mapper.to_screen(x, y);
                polyline.commands.push(if pen_down { PathCommand::LineTo(p) } else { PathCommand::MoveTo(p) });
                pen_down = true;
            }
            Err(source) => match policy {
                OnEvalError::Abort => return Err(SampleError { x, source }),
                OnEvalError::Break => {
                    tracing::warn!(expr = %expr, x, error = %source, "skipping sample");
                    polyline.gaps.push(SampleGap { x, error: source });
                    pen_down = false;
                }
            },
        }
    }

    tracing::debug!(expr = %expr, points = polyline.len(), gaps = polyline.gaps.len(), "sampled");
    Ok(polyline)
}
