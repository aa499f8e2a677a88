// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (canvas extents, tick size, origin, ratio).

use crate::error::GraphError;

/// Canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Canvas height in pixels.
pub const HEIGHT: i32 = 600;
/// Full length of a tick mark, in pixels.
pub const TICK_LENGTH: f64 = 10.0;

/// Fixed canvas extents shared by the core and every surface.
/// Contract: both fields are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Pixel location of graph-space (0, 0). Pixel y grows upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    /// Build an origin, rejecting NaN and infinities.
    pub fn new(x: f64, y: f64) -> Result<Self, GraphError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GraphError::Configuration(format!(
                "origin must be finite, got ({x}, {y})"
            )));
        }
        Ok(Self { x, y })
    }
}

/// Pixels per graph unit, shared by both axes.
/// Contract: strictly positive (enforced by `Ratio::new`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio(u32);

impl Ratio {
    pub fn new(pixels_per_unit: i64) -> Result<Self, GraphError> {
        if pixels_per_unit <= 0 {
            return Err(GraphError::Configuration(format!(
                "ratio must be a positive integer, got {pixels_per_unit}"
            )));
        }
        u32::try_from(pixels_per_unit)
            .map(Self)
            .map_err(|_| GraphError::Configuration(format!("ratio {pixels_per_unit} is too large")))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}
