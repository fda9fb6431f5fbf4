// File: crates/plotext-core/src/candlesticks_ma.rs
// Summary: Candlesticks with a moving-average curve drawn over them.

use skia_safe as skia;

use crate::candlesticks::{candle_glyph_boxes, draw_candle, CANDLE_DOWN, CANDLE_UP, DEFAULT_CANDLE_WIDTH_FACTOR};
use crate::draw::DrawArea;
use crate::geometry::Point;
use crate::plot::Plot;
use crate::plotter::{DataRange, GlyphBox, Plotter};
use crate::style::{rgba, LineStyle};
use crate::tohlcv::{copy_tohlcvmas, price_range, DataError, TohlcvMa, TohlcvMaSource};

pub struct CandlesticksWithMovingAverage {
    pub data: Vec<TohlcvMa>,
    pub color_up: skia::Color,
    pub color_down: skia::Color,
    pub candle_line_style: LineStyle,
    pub candle_width: f64,
    pub fixed_line_color: bool,
    /// The first `window - 1` averages are incomplete and are not drawn.
    pub moving_average_window: usize,
    pub moving_average_line_style: LineStyle,
}

impl CandlesticksWithMovingAverage {
    pub fn new<S: TohlcvMaSource + ?Sized>(data: &S, moving_average_window: usize) -> Result<Self, DataError> {
        let candle_line_style = LineStyle::default();
        Ok(Self {
            data: copy_tohlcvmas(data)?,
            color_up: CANDLE_UP,
            color_down: CANDLE_DOWN,
            candle_line_style,
            candle_width: DEFAULT_CANDLE_WIDTH_FACTOR * candle_line_style.width,
            fixed_line_color: true,
            moving_average_window,
            moving_average_line_style: LineStyle::new(rgba(240, 240, 240, 50), 2.0),
        })
    }
}

impl Plotter for CandlesticksWithMovingAverage {
    fn plot(&self, area: &DrawArea<'_>, plot: &Plot) {
        let tr = plot.transforms(area);
        let skip = self.moving_average_window.saturating_sub(1);
        let mut curve = Vec::with_capacity(self.data.len().saturating_sub(skip));

        for (i, rec) in self.data.iter().enumerate() {
            let fill = if rec.is_up() { self.color_up } else { self.color_down };
            let line = if self.fixed_line_color {
                self.candle_line_style
            } else {
                self.candle_line_style.with_color(fill)
            };
            draw_candle(area, &tr, &rec.bar(), self.candle_width, &line, fill);

            if i >= skip {
                curve.push(Point::new(tr.x(rec.t), tr.y(rec.ma)));
            }
        }

        area.stroke_lines(&self.moving_average_line_style, &curve);
    }

    fn data_range(&self) -> DataRange {
        let (x_min, x_max, y_min, y_max) = price_range(self.data.iter().map(TohlcvMa::bar));
        DataRange::new(x_min, x_max, y_min, y_max)
    }

    fn glyph_boxes(&self, plot: &Plot) -> Vec<GlyphBox> {
        candle_glyph_boxes(self.data_range(), plot, self.candle_width, self.candle_line_style.width)
    }
}
