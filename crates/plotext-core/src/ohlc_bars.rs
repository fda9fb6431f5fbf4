// File: crates/plotext-core/src/ohlc_bars.rs
// Summary: OHLC bar plotter: high-low line with open tick to the left and close tick to the right.

use skia_safe as skia;

use crate::draw::DrawArea;
use crate::geometry::{Point, Rect};
use crate::plot::Plot;
use crate::plotter::{DataRange, GlyphBox, Plotter};
use crate::style::{rgb, LineStyle};
use crate::tohlcv::{copy_tohlcvs, price_range, DataError, Tohlcv, TohlcvSource};

/// Default length of the open and close ticks.
pub const DEFAULT_TICK_WIDTH: f64 = 2.0;

pub(crate) const BAR_UP: skia::Color = rgb(0, 128, 0);
pub(crate) const BAR_DOWN: skia::Color = rgb(196, 0, 0);

pub struct OhlcBars {
    pub data: Vec<Tohlcv>,
    pub color_up: skia::Color,
    pub color_down: skia::Color,
    /// Width of the bars; the color is replaced by `color_up`/`color_down`.
    pub line_style: LineStyle,
    pub tick_width: f64,
}

impl OhlcBars {
    pub fn new<S: TohlcvSource + ?Sized>(data: &S) -> Result<Self, DataError> {
        Ok(Self {
            data: copy_tohlcvs(data)?,
            color_up: BAR_UP,
            color_down: BAR_DOWN,
            line_style: LineStyle::default(),
            tick_width: DEFAULT_TICK_WIDTH,
        })
    }
}

impl Plotter for OhlcBars {
    fn plot(&self, area: &DrawArea<'_>, plot: &Plot) {
        let tr = plot.transforms(area);
        for bar in &self.data {
            let color = if bar.is_up() { self.color_up } else { self.color_down };
            let line = self.line_style.with_color(color);

            let x = tr.x(bar.t);
            let y_open = tr.y(bar.o);
            let y_close = tr.y(bar.c);

            for seg in area.clip_lines_y(&[Point::new(x, tr.y(bar.l)), Point::new(x, tr.y(bar.h))]) {
                area.stroke_lines(&line, &seg);
            }
            if area.contains(Point::new(x, y_open)) {
                area.stroke_line2(&line, x, y_open, x - self.tick_width, y_open);
            }
            if area.contains(Point::new(x, y_close)) {
                area.stroke_line2(&line, x, y_close, x + self.tick_width, y_close);
            }
        }
    }

    fn data_range(&self) -> DataRange {
        let (x_min, x_max, y_min, y_max) = price_range(self.data.iter().copied());
        DataRange::new(x_min, x_max, y_min, y_max)
    }

    /// Room for the first open tick and the last close tick.
    fn glyph_boxes(&self, plot: &Plot) -> Vec<GlyphBox> {
        let r = self.data_range();
        vec![
            GlyphBox {
                x: plot.x.norm(r.x_min),
                y: plot.y.norm(r.y_min),
                rect: Rect::from_min_max(-self.tick_width, 0.0, 0.0, 0.0),
            },
            GlyphBox {
                x: plot.x.norm(r.x_max),
                y: plot.y.norm(r.y_max),
                rect: Rect::from_min_max(0.0, 0.0, self.tick_width, 0.0),
            },
        ]
    }
}
