// File: crates/plotext-core/src/vbars.rs
// Summary: Volume bar plotter: one vertical line from zero to the volume per record.

use skia_safe as skia;

use crate::draw::DrawArea;
use crate::geometry::{Point, Rect};
use crate::ohlc_bars::{BAR_DOWN, BAR_UP};
use crate::plot::Plot;
use crate::plotter::{DataRange, GlyphBox, Plotter};
use crate::style::LineStyle;
use crate::tohlcv::{copy_tohlcvs, DataError, Tohlcv, TohlcvSource};

pub struct VBars {
    pub data: Vec<Tohlcv>,
    pub color_up: skia::Color,
    pub color_down: skia::Color,
    pub line_style: LineStyle,
}

impl VBars {
    pub fn new<S: TohlcvSource + ?Sized>(data: &S) -> Result<Self, DataError> {
        Ok(Self {
            data: copy_tohlcvs(data)?,
            color_up: BAR_UP,
            color_down: BAR_DOWN,
            line_style: LineStyle::default(),
        })
    }
}

impl Plotter for VBars {
    fn plot(&self, area: &DrawArea<'_>, plot: &Plot) {
        let tr = plot.transforms(area);
        let y0 = tr.y(0.0);
        for bar in &self.data {
            let line = self.line_style.with_color(if bar.is_up() { self.color_up } else { self.color_down });
            let x = tr.x(bar.t);
            for seg in area.clip_lines_y(&[Point::new(x, y0), Point::new(x, tr.y(bar.v))]) {
                area.stroke_lines(&line, &seg);
            }
        }
    }

    fn data_range(&self) -> DataRange {
        let mut r = DataRange::new(f64::INFINITY, f64::NEG_INFINITY, 0.0, f64::NEG_INFINITY);
        for bar in &self.data {
            r.x_min = r.x_min.min(bar.t);
            r.x_max = r.x_max.max(bar.t);
            r.y_max = r.y_max.max(bar.v);
        }
        r
    }

    fn glyph_boxes(&self, plot: &Plot) -> Vec<GlyphBox> {
        let r = self.data_range();
        let half = self.line_style.width / 2.0;
        vec![
            GlyphBox {
                x: plot.x.norm(r.x_min),
                y: plot.y.norm(r.y_min),
                rect: Rect::from_min_max(-half, 0.0, 0.0, 0.0),
            },
            GlyphBox {
                x: plot.x.norm(r.x_max),
                y: plot.y.norm(r.y_max),
                rect: Rect::from_min_max(0.0, 0.0, half, 0.0),
            },
        ]
    }
}
