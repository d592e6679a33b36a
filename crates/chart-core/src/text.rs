// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with weight control and anchored drawing.

use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Font weights used by the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    SemiBold,
    Bold,
}

impl FontWeight {
    fn to_skia(self) -> Weight {
        match self {
            FontWeight::Regular => Weight::NORMAL,
            FontWeight::SemiBold => Weight::SEMI_BOLD,
            FontWeight::Bold => Weight::BOLD,
        }
    }
}

/// Horizontal anchor for [`TextShaper::draw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, weight: FontWeight) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_style(skia::FontStyle::new(weight.to_skia(), Width::NORMAL, Slant::Upright));
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, weight: FontWeight) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, weight);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of `text` as laid out on a single line.
    pub fn measure(&self, text: &str, size: f32, weight: FontWeight) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, weight);
        // width of the longest line
        (p.longest_line(), p.height())
    }

    pub fn measure_width(&self, text: &str, size: f32, weight: FontWeight) -> f32 {
        self.measure(text, size, weight).0
    }

    /// Draw `text` horizontally anchored at `x`, vertically centred on `cy`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        cy: f32,
        size: f32,
        color: skia::Color,
        weight: FontWeight,
        anchor: Anchor,
    ) {
        let p = self.layout(text, size, color, weight);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        // Paragraph draws from top-left
        p.paint(canvas, (left, cy - p.height() * 0.5));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, centred on (`cx`, `cy`).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_vertical(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        color: skia::Color,
        weight: FontWeight,
    ) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
        self.draw(canvas, text, cx, cy, size, color, weight, Anchor::Center);
        canvas.restore();
    }
}
