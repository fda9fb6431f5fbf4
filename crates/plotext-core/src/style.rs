// File: crates/plotext-core/src/style.rs
// Summary: Shared drawing styles and default sizes.

use skia_safe as skia;

/// Default line width in page units.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Default font size for tick labels.
pub const DEFAULT_TICK_FONT_SIZE: f64 = 10.0;
/// Default font size for axis labels.
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 12.0;
/// Default font size for plot titles.
pub const DEFAULT_TITLE_FONT_SIZE: f64 = 12.0;
/// Length of the major tick marks.
pub const TICK_LENGTH: f64 = 5.0;

/// Color and width of a stroked line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f64,
}

impl LineStyle {
    pub const fn new(color: skia::Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(skia::Color::BLACK, DEFAULT_LINE_WIDTH)
    }
}

/// Font size and color of a piece of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: skia::Color,
}

impl TextStyle {
    pub const fn new(size: f64, color: skia::Color) -> Self {
        Self { size, color }
    }
}

/// Horizontal anchor of a text box relative to its reference point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text box relative to its reference point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YAlign {
    Bottom,
    Center,
    Top,
}

pub const fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> skia::Color {
    skia::Color::from_argb(a, r, g, b)
}
