// File: crates/plotext-core/src/lib.rs
// Summary: Core library entry point; financial plotters, plot model, and aligned table layout.

pub mod axis;
pub mod candlesticks;
pub mod candlesticks_ma;
pub mod csv_data;
pub mod draw;
pub mod example_data;
pub mod geometry;
pub mod ohlc_bars;
pub mod page;
pub mod plot;
pub mod plotter;
pub mod style;
pub mod table;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod tohlcv;
pub mod vbars;

pub use axis::{unite_axis_ranges, Axis};
pub use candlesticks::Candlesticks;
pub use candlesticks_ma::CandlesticksWithMovingAverage;
pub use draw::DrawArea;
pub use geometry::{Point, Rect};
pub use ohlc_bars::OhlcBars;
pub use page::{Page, RenderError};
pub use plot::Plot;
pub use plotter::{DataRange, GlyphBox, Plotter};
pub use style::LineStyle;
pub use table::{DataArea, FnDataArea, Margins, Table, TableError};
pub use theme::Theme;
pub use ticks::Ticks;
pub use tohlcv::{DataError, Tohlcv, TohlcvMa};
pub use vbars::VBars;
