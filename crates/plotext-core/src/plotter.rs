// File: crates/plotext-core/src/plotter.rs
// Summary: Plotter trait implemented by every data renderer, plus glyph boxes and data ranges.

use crate::draw::DrawArea;
use crate::geometry::Rect;
use crate::plot::Plot;

/// Data-space bounds of a plotter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataRange {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }
}

/// Space a glyph needs around a data position. `x`/`y` are normalized axis
/// positions (0 = axis min, 1 = axis max); `rect` is the glyph's extent in
/// page units relative to that position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBox {
    pub x: f64,
    pub y: f64,
    pub rect: Rect,
}

pub trait Plotter {
    /// Draw into `area`, which is the plot's data rectangle.
    fn plot(&self, area: &DrawArea<'_>, plot: &Plot);

    fn data_range(&self) -> DataRange;

    /// Glyphs that must fit inside the plot's outer rectangle.
    fn glyph_boxes(&self, _plot: &Plot) -> Vec<GlyphBox> { Vec::new() }
}
