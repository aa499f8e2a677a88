// File: crates/graph-render-skia/tests/rgba.rs
// Purpose: RGBA buffer shape, background, y flip, and curve color at known pixels.

use graph_core::{Session, SessionOptions};
use graph_render_skia::{RenderOptions, SkiaSurface};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let mut surface = SkiaSurface::new(&opts).unwrap();
    let mut session = Session::from_raw(400.0, 300.0, 30, SessionOptions::default()).unwrap();
    session.draw_axes(&mut surface);
    // horizontal line at graph y = 2 -> pixel y 360 -> canvas row 240
    session.plot(&mut surface, "2").unwrap();

    let (px, w, h, stride) = surface.rgba8().expect("rgba render");
    assert_eq!((w, h), (800, 600));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // white background in the top-left corner
    assert_eq!(pixel(&px, stride, 5, 5), [255, 255, 255, 255]);

    // x axis crosses the canvas middle
    let [r, g, b, _] = pixel(&px, stride, 200, 300);
    assert!(r < 128 && g < 128 && b < 128, "axis pixel should be dark: {r},{g},{b}");

    // first curve is red and sits above the x axis in the image
    let [r, g, b, _] = pixel(&px, stride, 600, 240);
    assert!(r > 200 && g < 60 && b < 60, "curve pixel should be red: {r},{g},{b}");
    assert_eq!(pixel(&px, stride, 600, 360), [255, 255, 255, 255]);
}
