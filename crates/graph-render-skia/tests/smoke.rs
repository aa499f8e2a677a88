// File: crates/graph-render-skia/tests/smoke.rs
// Purpose: End-to-end session render to PNG bytes and to a file.

use graph_core::{Session, SessionOptions};
use graph_render_skia::{RenderOptions, SkiaSurface};

#[test]
fn render_session_png() {
    let mut session = Session::from_raw(400.0, 300.0, 30, SessionOptions::default()).unwrap();
    let mut surface = SkiaSurface::new(&RenderOptions::default()).expect("surface");
    session.draw_axes(&mut surface);
    session.plot(&mut surface, "x^2 / 4 - 3").unwrap();
    session.plot(&mut surface, "sin(x)").unwrap();

    let bytes = surface.png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/graph.png");
    surface.save_png(&out).expect("save png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let img = image::open(&out).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (800, 600));
}

#[test]
fn unknown_color_does_not_fail() {
    use graph_core::DrawingSurface;
    let mut surface = SkiaSurface::new(&RenderOptions::default()).unwrap();
    surface.set_color("not-a-color");
    surface.move_to(0.0, 0.0);
    surface.line_to(10.0, 10.0);
    assert_eq!(surface.cursor().x, 10.0);
}
