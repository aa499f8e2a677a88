// File: crates/graph-render-skia/src/text.rs
// Summary: Tick-label shaping with Skia textlayout; center-anchored on the baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct LabelShaper {
    fonts: FontCollection,
    size: f32,
}

impl LabelShaper {
    pub fn new(size: f32) -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, size: size.max(1.0) }
    }

    fn layout(&self, text: &str, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);

        let mut style = TextStyle::new();
        style.set_font_size(self.size);
        style.set_color(color);
        // monospaced digits for numeric labels
        style.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        builder.push_style(&style);
        builder.add_text(text);

        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` horizontally centered on `x` with its baseline near `baseline_y` (canvas space).
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, baseline_y: f32, color: skia::Color) {
        let paragraph = self.layout(text, color);
        let left = x - paragraph.longest_line() / 2.0;
        // paragraph paints from its top-left corner
        paragraph.paint(canvas, (left, baseline_y - self.size * 0.8));
    }
}
