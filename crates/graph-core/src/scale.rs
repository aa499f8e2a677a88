// File: crates/graph-core/src/scale.rs
// Summary: Graph <-> pixel transform driven by an origin and a pixels-per-unit ratio.

use crate::geometry::{GraphPoint, PixelPoint};
use crate::types::{Origin, Ratio};

/// Map a graph-space point to pixel space: `origin + ratio * (x, y)`.
#[inline]
pub fn to_screen(origin: Origin, ratio: Ratio, x: f64, y: f64) -> PixelPoint {
    let r = ratio.as_f64();
    PixelPoint::new(origin.x + r * x, origin.y + r * y)
}

/// Transform carried by a session; both axes share one ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub origin: Origin,
    pub ratio: Ratio,
}

impl CoordinateMapper {
    pub fn new(origin: Origin, ratio: Ratio) -> Self {
        Self { origin, ratio }
    }

    #[inline]
    pub fn to_screen(&self, x: f64, y: f64) -> PixelPoint {
        to_screen(self.origin, self.ratio, x, y)
    }

    #[inline]
    pub fn from_screen(&self, px: f64, py: f64) -> GraphPoint {
        let r = self.ratio.as_f64();
        GraphPoint::new((px - self.origin.x) / r, (py - self.origin.y) / r)
    }
}
