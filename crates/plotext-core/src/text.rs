// File: crates/plotext-core/src/text.rs
// Summary: Text shaping and measurement for labels, titles and tick labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

thread_local! {
    static SHAPER: TextShaper = TextShaper::new();
}

/// Run `f` with this thread's shared shaper.
pub fn with_shaper<R>(f: impl FnOnce(&TextShaper) -> R) -> R {
    SHAPER.with(f)
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn text_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Liberation Sans", "DejaVu Sans", "Arial", "Helvetica", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut style = ParagraphStyle::new();
        style.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&style, &self.fonts);
        builder.push_style(&Self::text_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line and total height. Empty text measures zero.
    pub fn measure(&self, text: &str, size: f32) -> (f64, f64) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line() as f64, p.height() as f64)
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
