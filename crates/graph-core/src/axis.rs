// File: crates/graph-core/src/axis.rs
// Summary: Axis tick counting and layout (tick positions, labels, axis line, visible domain).

use crate::geometry::PixelPoint;
use crate::surface::DrawingSurface;
use crate::types::{CanvasSize, Origin, Ratio};

/// Vertical drop of an x-axis label below the tick end.
const X_LABEL_DROP: f64 = 8.0;
/// Horizontal gap of a y-axis label left of the tick end.
const Y_LABEL_GAP: f64 = 2.0;
/// Vertical drop of a y-axis label to center it on the tick.
const Y_LABEL_DROP: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

/// Whole-unit steps from the origin to each canvas edge.
///
/// Signed: an origin left of (or below) the canvas gives a negative
/// `negative`, one past the far edge a negative `positive`. Only counts
/// above zero produce ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCounts {
    pub negative: i64,
    pub positive: i64,
}

/// Count the ticks that fit entirely on the canvas along one axis.
///
/// A partially visible tick is excluded (floor, never round).
pub fn tick_counts(extent: f64, origin: f64, ratio: Ratio) -> TickCounts {
    let positive_span = extent - origin;
    let negative_span = extent - positive_span;
    let r = ratio.as_f64();
    TickCounts {
        negative: whole_steps(negative_span, r),
        positive: whole_steps(positive_span, r),
    }
}

/// Bound on step counts so `xmin * 10` cannot overflow for far-away origins.
const MAX_STEPS: i64 = 1 << 50;

#[inline]
fn whole_steps(span: f64, step: f64) -> i64 {
    ((span / step).floor() as i64).clamp(-MAX_STEPS, MAX_STEPS)
}

/// Inclusive integer x-range visible on the canvas.
///
/// Contains 0 only when the origin is on the canvas; `xmin > xmax` (empty)
/// when the ratio is wider than the canvas and the origin lies off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleDomain {
    pub xmin: i64,
    pub xmax: i64,
}

impl VisibleDomain {
    pub fn from_counts(counts: TickCounts) -> Self {
        Self { xmin: -counts.negative, xmax: counts.positive }
    }

    /// True when the domain holds at most one integer.
    pub fn is_degenerate(&self) -> bool {
        self.xmin >= self.xmax
    }
}

/// One tick: integer graph value, pixel offset along the axis, label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: i64,
    pub position: f64,
    pub label: String,
}

/// Pen geometry for a single tick and its label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    pub start: PixelPoint,
    pub end: PixelPoint,
    pub label_at: PixelPoint,
}

/// Layout of one axis, recomputed from inputs; owns no drawing state.
#[derive(Clone, Debug)]
pub struct AxisLayout {
    pub kind: AxisKind,
    pub counts: TickCounts,
    /// Origin coordinate perpendicular to this axis (where the axis line sits).
    pub cross: f64,
    pub line_start: PixelPoint,
    pub line_end: PixelPoint,
    /// Negative ticks (-1, -2, ...) first, then positive ticks (1, 2, ...).
    pub ticks: Vec<Tick>,
}

impl AxisLayout {
    pub fn compute(kind: AxisKind, canvas: CanvasSize, origin: Origin, ratio: Ratio) -> Self {
        let (extent, along, cross) = match kind {
            AxisKind::X => (f64::from(canvas.width), origin.x, origin.y),
            AxisKind::Y => (f64::from(canvas.height), origin.y, origin.x),
        };
        let counts = tick_counts(extent, along, ratio);
        let negative_span = extent - (extent - along);
        let r = ratio.as_f64();

        let (neg_ticks, pos_ticks) = (counts.negative.max(0), counts.positive.max(0));
        let mut ticks = Vec::with_capacity((neg_ticks + pos_ticks) as usize);
        for i in 1..=neg_ticks {
            ticks.push(Tick { value: -i, position: negative_span - r * i as f64, label: format!("-{i}") });
        }
        for i in 1..=pos_ticks {
            ticks.push(Tick { value: i, position: negative_span + r * i as f64, label: i.to_string() });
        }

        if neg_ticks == 0 || pos_ticks == 0 {
            tracing::debug!(?kind, ?counts, "axis has an empty side");
        }

        let (line_start, line_end) = match kind {
            AxisKind::X => (PixelPoint::new(0.0, cross), PixelPoint::new(extent, cross)),
            AxisKind::Y => (PixelPoint::new(cross, 0.0), PixelPoint::new(cross, extent)),
        };

        Self { kind, counts, cross, line_start, line_end, ticks }
    }

    /// Visible integer domain along this axis (`-negative ..= positive`).
    pub fn domain(&self) -> VisibleDomain {
        VisibleDomain::from_counts(self.counts)
    }

    /// Perpendicular tick segment centered on the axis plus the label anchor.
    pub fn tick_mark(&self, tick: &Tick, tick_length: f64) -> TickMark {
        let half = tick_length / 2.0;
        let (p, c) = (tick.position, self.cross);
        match self.kind {
            AxisKind::X => TickMark {
                start: PixelPoint::new(p, c - half),
                end: PixelPoint::new(p, c - half + tick_length),
                label_at: PixelPoint::new(p, c - tick_length - X_LABEL_DROP),
            },
            AxisKind::Y => TickMark {
                start: PixelPoint::new(c - half, p),
                end: PixelPoint::new(c - half + tick_length, p),
                label_at: PixelPoint::new(c - tick_length - Y_LABEL_GAP, p - Y_LABEL_DROP),
            },
        }
    }

    /// Emit the axis line, every tick and every label.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S, tick_length: f64) {
        surface.move_to(self.line_start.x, self.line_start.y);
        surface.line_to(self.line_end.x, self.line_end.y);
        for tick in &self.ticks {
            let mark = self.tick_mark(tick, tick_length);
            surface.move_to(mark.start.x, mark.start.y);
            surface.line_to(mark.end.x, mark.end.y);
            surface.place_label(mark.label_at.x, mark.label_at.y, &tick.label);
        }
    }
}
