// File: crates/plotext-core/src/plot.rs
// Summary: Plot (title, axes, plotters) with data-area layout and headless PNG rendering.

use std::path::Path;

use tracing::debug;

use crate::axis::Axis;
use crate::draw::DrawArea;
use crate::geometry::{Point, Rect};
use crate::page::{Page, RenderError};
use crate::plotter::{GlyphBox, Plotter};
use crate::style::{TextStyle, XAlign, YAlign, DEFAULT_TITLE_FONT_SIZE, TICK_LENGTH};
use crate::table::DataArea;
use crate::text::with_shaper;
use crate::theme::Theme;
use crate::ticks::Tick;

/// Gap between the title and the plot body.
const TITLE_PADDING: f64 = 5.0;

pub struct Plot {
    pub title: String,
    pub title_style: TextStyle,
    pub x: Axis,
    pub y: Axis,
    pub theme: Theme,
    plotters: Vec<Box<dyn Plotter>>,
}

/// Maps data values to page coordinates inside a data rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    rect: Rect,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Transform {
    #[inline]
    pub fn x(&self, v: f64) -> f64 {
        self.rect.min.x + (v - self.x_min) / self.x_span * self.rect.width()
    }
    #[inline]
    pub fn y(&self, v: f64) -> f64 {
        self.rect.min.y + (v - self.y_min) / self.y_span * self.rect.height()
    }
    pub fn point(&self, x: f64, y: f64) -> Point {
        Point::new(self.x(x), self.y(y))
    }
}

/// Sizes of every text element around the data area.
struct Measures {
    title_h: f64,
    x_label_h: f64,
    y_label_h: f64,
    x_ticks: Vec<(Tick, f64, f64)>,
    y_ticks: Vec<(Tick, f64, f64)>,
}

impl Measures {
    fn x_tick_h(&self) -> f64 { self.x_ticks.iter().fold(0.0, |m, t| m.max(t.2)) }
    fn y_tick_w(&self) -> f64 { self.y_ticks.iter().fold(0.0, |m, t| m.max(t.1)) }
}

impl Plot {
    pub fn new() -> Self {
        let theme = Theme::default();
        let mut plot = Self {
            title: String::new(),
            title_style: TextStyle::new(DEFAULT_TITLE_FONT_SIZE, theme.title),
            x: Axis::default(),
            y: Axis::default(),
            theme,
            plotters: Vec::new(),
        };
        plot.apply_theme(theme);
        plot
    }

    /// Switch colors of title, axes and background to `theme`.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.title_style.color = theme.title;
        for axis in [&mut self.x, &mut self.y] {
            axis.label_style.color = theme.axis_label;
            axis.tick_style.color = theme.tick_label;
            axis.line_style.color = theme.axis_line;
        }
    }

    /// Add a plotter and grow both axes to cover its data.
    pub fn add(&mut self, plotter: impl Plotter + 'static) {
        let r = plotter.data_range();
        self.x.extend(r.x_min, r.x_max);
        self.y.extend(r.y_min, r.y_max);
        self.plotters.push(Box::new(plotter));
    }

    pub fn plotters(&self) -> &[Box<dyn Plotter>] { &self.plotters }

    /// Data-to-page mapping for a data area.
    pub fn transforms(&self, area: &DrawArea<'_>) -> Transform {
        let (x_min, x_max) = self.x.range();
        let (y_min, y_max) = self.y.range();
        Transform { rect: area.rect, x_min, x_span: x_max - x_min, y_min, y_span: y_max - y_min }
    }

    fn measure(&self) -> Measures {
        with_shaper(|s| {
            let size = |text: &str, style: &TextStyle| s.measure(text, style.size as f32);
            let ticks = |axis: &Axis| {
                axis.major_ticks()
                    .into_iter()
                    .map(|t| {
                        let (w, h) = size(&t.label, &axis.tick_style);
                        (t, w, h)
                    })
                    .collect::<Vec<_>>()
            };
            Measures {
                title_h: size(&self.title, &self.title_style).1,
                x_label_h: size(&self.x.label, &self.x.label_style).1,
                y_label_h: size(&self.y.label, &self.y.label_style).1,
                x_ticks: ticks(&self.x),
                y_ticks: ticks(&self.y),
            }
        })
    }

    fn data_rect_with(&self, outer: Rect, m: &Measures) -> Rect {
        let top = if self.title.is_empty() { 0.0 } else { m.title_h + TITLE_PADDING };
        let bottom = m.x_label_h + m.x_tick_h() + TICK_LENGTH + self.x.padding;
        let left = m.y_label_h + m.y_tick_w() + TICK_LENGTH + self.y.padding;
        let body = outer.inset(left, 0.0, bottom, top);

        let glyphs: Vec<GlyphBox> = self.plotters.iter().flat_map(|p| p.glyph_boxes(self)).collect();

        // Tick labels only count for the right and top ends; the axis
        // space on the left and bottom already holds them.
        let x_low: Vec<(f64, f64, f64)> = glyphs.iter().map(|g| (g.x, g.rect.min.x, g.rect.max.x)).collect();
        let mut x_high = x_low.clone();
        x_high.extend(m.x_ticks.iter().map(|(t, w, _)| (self.x.norm(t.value), -w / 2.0, w / 2.0)));
        let y_low: Vec<(f64, f64, f64)> = glyphs.iter().map(|g| (g.y, g.rect.min.y, g.rect.max.y)).collect();
        let mut y_high = y_low.clone();
        y_high.extend(m.y_ticks.iter().map(|(t, _, h)| (self.y.norm(t.value), -h / 2.0, h / 2.0)));

        let (xmin, xmax) = fit_glyphs(body.min.x, body.max.x, &x_low, &x_high);
        let (ymin, ymax) = fit_glyphs(body.min.y, body.max.y, &y_low, &y_high);
        Rect::from_min_max(xmin, ymin, xmax, ymax)
    }

    /// Draw the whole plot into `area`.
    pub fn draw(&self, area: &DrawArea<'_>) {
        let outer = area.rect;
        let m = self.measure();
        let data = self.data_rect_with(outer, &m);
        debug!(?outer, ?data, title = %self.title, "drawing plot");

        area.fill_rect(self.theme.background, outer);

        if !self.title.is_empty() {
            let at = Point::new((outer.min.x + outer.max.x) / 2.0, outer.max.y);
            area.draw_text(&self.title, at, &self.title_style, XAlign::Center, YAlign::Top, 0.0);
        }

        self.draw_x_axis(area, outer, data, &m);
        self.draw_y_axis(area, outer, data, &m);

        let data_area = area.with_rect(data);
        for p in &self.plotters {
            p.plot(&data_area, self);
        }
    }

    fn draw_x_axis(&self, area: &DrawArea<'_>, outer: Rect, data: Rect, m: &Measures) {
        let axis = &self.x;
        let y = data.min.y - axis.padding;
        let line = axis.line_style;
        area.stroke_line2(&line, data.min.x, y, data.max.x, y);

        let tick = line.with_color(self.theme.tick);
        for (t, _, _) in &m.x_ticks {
            let x = data.min.x + axis.norm(t.value) * data.width();
            area.stroke_line2(&tick, x, y, x, y - TICK_LENGTH);
            area.draw_text(&t.label, Point::new(x, y - TICK_LENGTH), &axis.tick_style, XAlign::Center, YAlign::Top, 0.0);
        }

        if !axis.label.is_empty() {
            let at = Point::new((data.min.x + data.max.x) / 2.0, outer.min.y);
            area.draw_text(&axis.label, at, &axis.label_style, XAlign::Center, YAlign::Bottom, 0.0);
        }
    }

    fn draw_y_axis(&self, area: &DrawArea<'_>, outer: Rect, data: Rect, m: &Measures) {
        let axis = &self.y;
        let x = data.min.x - axis.padding;
        let line = axis.line_style;
        area.stroke_line2(&line, x, data.min.y, x, data.max.y);

        let tick = line.with_color(self.theme.tick);
        for (t, _, _) in &m.y_ticks {
            let y = data.min.y + axis.norm(t.value) * data.height();
            area.stroke_line2(&tick, x, y, x - TICK_LENGTH, y);
            area.draw_text(&t.label, Point::new(x - TICK_LENGTH, y), &axis.tick_style, XAlign::Right, YAlign::Center, 0.0);
        }

        if !axis.label.is_empty() {
            let at = Point::new(outer.min.x, (data.min.y + data.max.y) / 2.0);
            area.draw_text(&axis.label, at, &axis.label_style, XAlign::Center, YAlign::Top, 90.0);
        }
    }

    /// Render this plot alone to a `width` x `height` PNG.
    pub fn save(&self, width: i32, height: i32, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let mut page = Page::new(width, height)?;
        page.clear(self.theme.background);
        self.draw(&page.draw_area());
        page.write_png(path)
    }
}

impl Default for Plot {
    fn default() -> Self { Self::new() }
}

impl DataArea for Plot {
    fn data_rect(&self, outer: Rect) -> Rect {
        self.data_rect_with(outer, &self.measure())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Shrink `[lo, hi]` so that glyphs `(norm, min_ext, max_ext)` placed at
/// `new_lo + norm * (new_hi - new_lo)` stay inside `[lo, hi]`. The leftmost
/// of `low` touches `lo` and the rightmost of `high` touches `hi`; an empty
/// side keeps its bound.
pub(crate) fn fit_glyphs(lo: f64, hi: f64, low: &[(f64, f64, f64)], high: &[(f64, f64, f64)]) -> (f64, f64) {
    let span = hi - lo;
    let left = |b: &&(f64, f64, f64)| lo + b.0 * span + b.1;
    let right = |b: &&(f64, f64, f64)| lo + b.0 * span + b.2;
    let l = low.iter().min_by(|a, b| left(a).total_cmp(&left(b))).copied().unwrap_or((0.0, 0.0, 0.0));
    let r = high.iter().max_by(|a, b| right(a).total_cmp(&right(b))).copied().unwrap_or((1.0, 0.0, 0.0));

    let (lx, rx) = (l.0, r.0);
    let d = rx - lx;
    if d.abs() < 1e-12 {
        return (lo, hi);
    }
    let a = lo - l.1;
    let b = hi - r.2;
    let new_lo = ((a * rx - b * lx) / d).max(lo);
    let new_hi = ((b * (1.0 - lx) - a * (1.0 - rx)) / d).min(hi);
    if new_hi <= new_lo {
        return (lo, hi);
    }
    (new_lo, new_hi)
}
