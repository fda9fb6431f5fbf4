// File: crates/plotext-core/src/candlesticks.rs
// Summary: Candlestick plotter: wicks from high/low to the body, filled body colored by direction.

use skia_safe as skia;

use crate::draw::DrawArea;
use crate::geometry::{Point, Rect};
use crate::plot::{Plot, Transform};
use crate::plotter::{DataRange, GlyphBox, Plotter};
use crate::style::{rgb, LineStyle};
use crate::tohlcv::{copy_tohlcvs, price_range, DataError, Tohlcv, TohlcvSource};

/// Default candle body width relative to the default line width.
pub const DEFAULT_CANDLE_WIDTH_FACTOR: f64 = 3.0;

pub(crate) const CANDLE_UP: skia::Color = rgb(128, 192, 128);
pub(crate) const CANDLE_DOWN: skia::Color = rgb(255, 128, 128);

pub struct Candlesticks {
    pub data: Vec<Tohlcv>,
    /// Fill for candles where close >= open.
    pub color_up: skia::Color,
    /// Fill for candles where close < open.
    pub color_down: skia::Color,
    /// Stroke for wicks and body outline.
    pub line_style: LineStyle,
    pub candle_width: f64,
    /// When true the wick and outline use `line_style.color`; when false they
    /// take the candle's fill color.
    pub fixed_line_color: bool,
}

impl Candlesticks {
    pub fn new<S: TohlcvSource + ?Sized>(data: &S) -> Result<Self, DataError> {
        let line_style = LineStyle::default();
        Ok(Self {
            data: copy_tohlcvs(data)?,
            color_up: CANDLE_UP,
            color_down: CANDLE_DOWN,
            line_style,
            candle_width: DEFAULT_CANDLE_WIDTH_FACTOR * line_style.width,
            fixed_line_color: true,
        })
    }
}

impl Plotter for Candlesticks {
    fn plot(&self, area: &DrawArea<'_>, plot: &Plot) {
        let tr = plot.transforms(area);
        for bar in &self.data {
            let fill = if bar.is_up() { self.color_up } else { self.color_down };
            let line = if self.fixed_line_color { self.line_style } else { self.line_style.with_color(fill) };
            draw_candle(area, &tr, bar, self.candle_width, &line, fill);
        }
    }

    fn data_range(&self) -> DataRange {
        let (x_min, x_max, y_min, y_max) = price_range(self.data.iter().copied());
        DataRange::new(x_min, x_max, y_min, y_max)
    }

    fn glyph_boxes(&self, plot: &Plot) -> Vec<GlyphBox> {
        candle_glyph_boxes(self.data_range(), plot, self.candle_width, self.line_style.width)
    }
}

/// Upper wick, lower wick and body of one candle.
pub(crate) fn draw_candle(
    area: &DrawArea<'_>,
    tr: &Transform,
    bar: &Tohlcv,
    candle_width: f64,
    line: &LineStyle,
    fill: skia::Color,
) {
    let x = tr.x(bar.t);
    let y_high = tr.y(bar.h);
    let y_low = tr.y(bar.l);
    let y_top = tr.y(bar.o.max(bar.c));
    let y_bottom = tr.y(bar.o.min(bar.c));

    for wick in area.clip_lines_y(&[Point::new(x, y_high), Point::new(x, y_top)]) {
        area.stroke_lines(line, &wick);
    }
    for wick in area.clip_lines_y(&[Point::new(x, y_low), Point::new(x, y_bottom)]) {
        area.stroke_lines(line, &wick);
    }

    let half = candle_width / 2.0;
    let body = Rect::from_min_max(x - half, y_bottom, x + half, y_top).outline();
    let body = area.clip_polygon_y(&body);
    area.fill_polygon(fill, &body);
    area.stroke_lines(line, &body);
}

/// Room for half a body (and half an outline) left of the first and right
/// of the last candle.
pub(crate) fn candle_glyph_boxes(r: DataRange, plot: &Plot, candle_width: f64, line_width: f64) -> Vec<GlyphBox> {
    let half = (candle_width + line_width) / 2.0;
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
