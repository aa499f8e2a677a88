// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; coordinate transform, axis layout, expression sampling, session driver.

pub mod axis;
pub mod config;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod sampler;
pub mod scale;
pub mod session;
pub mod surface;
pub mod theme;
pub mod types;

pub use axis::{tick_counts, AxisKind, AxisLayout, Tick, TickCounts, VisibleDomain};
pub use config::GraphConfig;
pub use error::GraphError;
pub use expr::{EvalError, ExprError, Expression};
pub use geometry::{GraphPoint, PixelPoint};
pub use sampler::{sample, OnEvalError, PathCommand, Polyline, SampleError, SampleGap};
pub use scale::{to_screen, CoordinateMapper};
pub use session::{PlotReport, Session, SessionOptions};
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface};
pub use theme::{color_for, Palette};
pub use types::{CanvasSize, Origin, Ratio, HEIGHT, WIDTH};
