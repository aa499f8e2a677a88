// File: crates/graph-core/src/surface.rs
// Summary: Drawing-surface trait (the core's only output boundary) and a recording stub.

use crate::geometry::PixelPoint;

/// Addressable 2D surface receiving pixel-space pen instructions.
///
/// Coordinates are in pixel space with y growing upwards; implementations
/// with a top-left origin flip at their own boundary.
pub trait DrawingSurface {
    /// Relocate the pen without a visible stroke.
    fn move_to(&mut self, x: f64, y: f64);
    /// Stroke from the current pen position to `(x, y)` in the current color.
    fn line_to(&mut self, x: f64, y: f64);
    /// Select the stroke color for subsequent `line_to` calls.
    fn set_color(&mut self, color: &str);
    /// Render center-anchored text at `(x, y)`; no stroke, pen position is unspecified afterwards.
    fn place_label(&mut self, x: f64, y: f64, text: &str);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    SetColor(String),
    Label { at: PixelPoint, text: String },
}

/// Surface that keeps every call in order; used by tests and dry runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::LineTo(_))).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(PixelPoint::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(PixelPoint::new(x, y)));
    }

    fn set_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetColor(color.to_string()));
    }

    fn place_label(&mut self, x: f64, y: f64, text: &str) {
        self.commands.push(DrawCommand::Label { at: PixelPoint::new(x, y), text: text.to_string() });
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }
    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }
    fn set_color(&mut self, color: &str) {
        (**self).set_color(color)
    }
    fn place_label(&mut self, x: f64, y: f64, text: &str) {
        (**self).place_label(x, y, text)
    }
}
