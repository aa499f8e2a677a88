// File: crates/graph-render-skia/src/lib.rs
// Summary: Skia renderer crate; raster drawing surface, label shaping, PNG/RGBA export.

pub mod surface;
pub mod text;

pub use surface::{to_skia, RenderOptions, SkiaSurface};
pub use text::LabelShaper;
