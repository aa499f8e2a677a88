// File: crates/graph-examples/src/bin/curves.rs
// Summary: Minimal example that plots a handful of curves around a centered origin to PNG.

use anyhow::Result;
use graph_core::{OnEvalError, Session, SessionOptions};
use graph_render_skia::{RenderOptions, SkiaSurface};

fn main() -> Result<()> {
    let options = SessionOptions { on_eval_error: OnEvalError::Break, ..SessionOptions::default() };
    let mut session = Session::from_raw(400.0, 300.0, 30, options)?;

    let mut surface = SkiaSurface::new(&RenderOptions::default())?;
    session.draw_axes(&mut surface);

    for src in ["x", "x^2 / 4 - 5", "3sin(x)", "1/x", "sqrt(x) - 2"] {
        let report = session.plot(&mut surface, src)?;
        println!("{src:>12}  {:<5} {} points, {} skipped", report.color, report.points, report.gaps.len());
    }

    let out = std::path::PathBuf::from("target/out/example_curves.png");
    surface.save_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
