// File: crates/graph-render-skia/src/surface.rs
// Summary: DrawingSurface backed by a Skia CPU raster surface; y-up pixel space flipped at the boundary.

use anyhow::Result;
use skia_safe as skia;

use graph_core::theme::{parse_color, Rgb, AXIS_COLOR, BACKGROUND};
use graph_core::{DrawingSurface, GraphConfig, PixelPoint, HEIGHT, WIDTH};

use crate::text::LabelShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub stroke_width: f32,
    pub font_size: f32,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: to_skia(parse_color(BACKGROUND).unwrap_or(Rgb(255, 255, 255))),
            stroke_width: 2.0,
            font_size: 12.0,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Background and label switch from a validated config; everything else keeps its default.
    pub fn from_config(config: &GraphConfig) -> Self {
        let mut opts = Self::default();
        if let Some(rgb) = parse_color(&config.background) {
            opts.background = to_skia(rgb);
        }
        opts.draw_labels = config.draw_labels;
        opts
    }
}

pub fn to_skia(Rgb(r, g, b): Rgb) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

pub struct SkiaSurface {
    surface: skia::Surface,
    paint: skia::Paint,
    color: skia::Color,
    cursor: PixelPoint,
    shaper: Option<LabelShaper>,
    width: i32,
    height: i32,
}

impl SkiaSurface {
    /// Raster surface cleared to the background, pen black at pixel (0, 0).
    pub fn new(opts: &RenderOptions) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        surface.canvas().clear(opts.background);

        let color = to_skia(parse_color(AXIS_COLOR).unwrap_or(Rgb(0, 0, 0)));
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(opts.stroke_width);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_color(color);

        let shaper = opts.draw_labels.then(|| LabelShaper::new(opts.font_size));
        tracing::debug!(width = opts.width, height = opts.height, labels = opts.draw_labels, "skia surface created");
        Ok(Self {
            surface,
            paint,
            color,
            cursor: PixelPoint::new(0.0, 0.0),
            shaper,
            width: opts.width,
            height: opts.height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pen position in y-up pixel space.
    pub fn cursor(&self) -> PixelPoint {
        self.cursor
    }

    fn canvas_point(&self, x: f64, y: f64) -> (f32, f32) {
        (x as f32, (self.height as f64 - y) as f32)
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode and write the current canvas, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "png written");
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels, top row first: (pixels, width, height, row stride).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl DrawingSurface for SkiaSurface {
    fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = PixelPoint::new(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let from = self.canvas_point(self.cursor.x, self.cursor.y);
        let to = self.canvas_point(x, y);
        self.surface.canvas().draw_line(from, to, &self.paint);
        self.cursor = PixelPoint::new(x, y);
    }

    fn set_color(&mut self, color: &str) {
        let rgb = parse_color(color).unwrap_or_else(|| {
            tracing::warn!(color, "unknown color; using black");
            Rgb(0, 0, 0)
        });
        self.color = to_skia(rgb);
        self.paint.set_color(self.color);
    }

    fn place_label(&mut self, x: f64, y: f64, text: &str) {
        let (cx, cy) = self.canvas_point(x, y);
        if let Some(shaper) = &self.shaper {
            shaper.draw_centered(self.surface.canvas(), text, cx, cy, self.color);
        }
    }
}
