// File: crates/graph-examples/src/bin/trace.rs
// Summary: Dry run; prints the pen commands a session emits for axes and one curve.

use anyhow::Result;
use graph_core::{DrawCommand, RecordingSurface, Session, SessionOptions};

fn main() -> Result<()> {
    let src = std::env::args().nth(1).unwrap_or_else(|| "x^2".to_string());
    let mut session = Session::from_raw(400.0, 300.0, 100, SessionOptions::default())?;

    let mut rec = RecordingSurface::new();
    session.draw_axes(&mut rec);
    session.plot(&mut rec, &src)?;

    for cmd in &rec.commands {
        match cmd {
            DrawCommand::MoveTo(p) => println!("move  {:8.2} {:8.2}", p.x, p.y),
            DrawCommand::LineTo(p) => println!("line  {:8.2} {:8.2}", p.x, p.y),
            DrawCommand::SetColor(c) => println!("color {c}"),
            DrawCommand::Label { at, text } => println!("label {:8.2} {:8.2} {text}", at.x, at.y),
        }
    }
    Ok(())
}
