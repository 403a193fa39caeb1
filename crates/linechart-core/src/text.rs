// File: crates/linechart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with the bundle's font families.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// One shaper per render; it is not shared between renders.
pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    pub fn new(families: &[&str]) -> Self {
        let mut fc = FontCollection::new();
        // System font manager; missing families fall back to whatever it resolves.
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, families: families.iter().map(|f| f.to_string()).collect() }
    }

    fn make_style(&self, size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(self.families.as_slice());
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&self.make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width, height) of the laid-out text; zero for empty text.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that its box is aligned on `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        halign: HAlign,
        valign: VAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        let left = match halign {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match valign {
            VAlign::Top => y,
            VAlign::Center => y - h * 0.5,
            VAlign::Bottom => y - h,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw `text` rotated a quarter turn counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        if text.is_empty() {
            return;
        }
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, 0.0, 0.0, size, color, HAlign::Center, VAlign::Center);
        canvas.restore();
    }
}
