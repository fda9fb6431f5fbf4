// File: crates/plotext-core/src/draw.rs
// Summary: Y-up drawing area over a Skia canvas, with Y clipping helpers for plotters.

use skia_safe as skia;

use crate::geometry::{Point, Rect};
use crate::style::{LineStyle, TextStyle, XAlign, YAlign};
use crate::text::with_shaper;

/// A rectangle of a Skia canvas addressed in page coordinates
/// (origin bottom-left, Y up). Skia itself is Y-down, so every point is
/// flipped against the page height on the way out.
#[derive(Clone, Copy)]
pub struct DrawArea<'a> {
    canvas: &'a skia::Canvas,
    page_height: f64,
    pub rect: Rect,
}

impl<'a> DrawArea<'a> {
    pub fn new(canvas: &'a skia::Canvas, page_height: f64, rect: Rect) -> Self {
        Self { canvas, page_height, rect }
    }

    /// Same canvas, different rectangle.
    pub fn with_rect(&self, rect: Rect) -> DrawArea<'a> {
        DrawArea { rect, ..*self }
    }

    pub fn crop(&self, left: f64, right: f64, bottom: f64, top: f64) -> DrawArea<'a> {
        self.with_rect(self.rect.crop(left, right, bottom, top))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    fn to_skia(&self, p: Point) -> skia::Point {
        skia::Point::new(p.x as f32, (self.page_height - p.y) as f32)
    }

    fn stroke_paint(style: &LineStyle) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width as f32);
        paint.set_color(style.color);
        paint
    }

    fn path(&self, pts: &[Point]) -> Option<skia::Path> {
        let (first, rest) = pts.split_first()?;
        let mut path = skia::Path::new();
        path.move_to(self.to_skia(*first));
        for p in rest {
            path.line_to(self.to_skia(*p));
        }
        Some(path)
    }

    /// Stroke a polyline through `pts`.
    pub fn stroke_lines(&self, style: &LineStyle, pts: &[Point]) {
        if pts.len() < 2 || style.width <= 0.0 {
            return;
        }
        if let Some(path) = self.path(pts) {
            self.canvas.draw_path(&path, &Self::stroke_paint(style));
        }
    }

    pub fn stroke_line2(&self, style: &LineStyle, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.stroke_lines(style, &[Point::new(x1, y1), Point::new(x2, y2)]);
    }

    pub fn fill_polygon(&self, color: skia::Color, pts: &[Point]) {
        if pts.len() < 3 {
            return;
        }
        if let Some(mut path) = self.path(pts) {
            path.close();
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(color);
            self.canvas.draw_path(&path, &paint);
        }
    }

    pub fn fill_rect(&self, color: skia::Color, rect: Rect) {
        self.fill_polygon(color, &rect.outline());
    }

    /// Split the polyline `pts` into the pieces that lie within the area's
    /// Y range. X is left unclipped.
    pub fn clip_lines_y(&self, pts: &[Point]) -> Vec<Vec<Point>> {
        let (lo, hi) = (self.rect.min.y, self.rect.max.y);
        let mut out = Vec::new();
        let mut cur: Vec<Point> = Vec::new();
        for seg in pts.windows(2) {
            match clip_segment_y(seg[0], seg[1], lo, hi) {
                Some((a, b)) => {
                    if cur.last() != Some(&a) {
                        flush(&mut out, &mut cur);
                        cur.push(a);
                    }
                    cur.push(b);
                }
                None => flush(&mut out, &mut cur),
            }
        }
        flush(&mut out, &mut cur);
        out
    }

    /// Clip the closed polygon `pts` to the area's Y range. The result is
    /// closed again (first point repeated) unless it is empty.
    pub fn clip_polygon_y(&self, pts: &[Point]) -> Vec<Point> {
        let (lo, hi) = (self.rect.min.y, self.rect.max.y);
        let above = clip_polygon_edge(pts, |p| p.y >= lo, lo);
        let mut out = clip_polygon_edge(&above, |p| p.y <= hi, hi);
        if let (Some(&first), Some(&last)) = (out.first(), out.last()) {
            if first != last {
                out.push(first);
            }
        }
        out
    }

    /// Draw `text` anchored at `at`, rotated counter-clockwise by `degrees`
    /// around the anchor.
    pub fn draw_text(
        &self,
        text: &str,
        at: Point,
        style: &TextStyle,
        x_align: XAlign,
        y_align: YAlign,
        degrees: f64,
    ) {
        if text.is_empty() {
            return;
        }
        with_shaper(|shaper| {
            let mut paragraph = shaper.layout(text, style.size as f32, style.color);
            let w = paragraph.longest_line();
            let h = paragraph.height();
            let dx = match x_align {
                XAlign::Left => 0.0,
                XAlign::Center => -w * 0.5,
                XAlign::Right => -w,
            };
            // Skia paints from the top-left corner, Y down.
            let dy = match y_align {
                YAlign::Bottom => -h,
                YAlign::Center => -h * 0.5,
                YAlign::Top => 0.0,
            };
            self.canvas.save();
            self.canvas.translate(self.to_skia(at));
            if degrees != 0.0 {
                self.canvas.rotate(-degrees as f32, None);
            }
            paragraph.paint(self.canvas, (dx, dy));
            self.canvas.restore();
        });
    }
}

fn flush(out: &mut Vec<Vec<Point>>, cur: &mut Vec<Point>) {
    if cur.len() > 1 {
        out.push(std::mem::take(cur));
    } else {
        cur.clear();
    }
}

fn clip_segment_y(a: Point, b: Point, lo: f64, hi: f64) -> Option<(Point, Point)> {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return if a.y < lo || a.y > hi { None } else { Some((a, b)) };
    }
    let ta = (lo - a.y) / dy;
    let tb = (hi - a.y) / dy;
    let t0 = ta.min(tb).max(0.0);
    let t1 = ta.max(tb).min(1.0);
    if t0 > t1 {
        return None;
    }
    let at = |t: f64| {
        if t == 0.0 { a } else if t == 1.0 { b } else { Point::new(a.x + (b.x - a.x) * t, a.y + dy * t) }
    };
    Some((at(t0), at(t1)))
}

fn clip_polygon_edge(pts: &[Point], inside: impl Fn(Point) -> bool, y: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(pts.len() + 2);
    let Some(&last) = pts.last() else { return out };
    let cross = |p: Point, q: Point| {
        let t = (y - p.y) / (q.y - p.y);
        Point::new(p.x + (q.x - p.x) * t, y)
    };
    let mut prev = last;
    for &cur in pts {
        match (inside(prev), inside(cur)) {
            (true, true) => out.push(cur),
            (false, true) => {
                out.push(cross(prev, cur));
                out.push(cur);
            }
            (true, false) => out.push(cross(prev, cur)),
            (false, false) => {}
        }
        prev = cur;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_inside_is_kept() {
        let a = Point::new(0.0, 1.0);
        let b = Point::new(0.0, 2.0);
        assert_eq!(clip_segment_y(a, b, 0.0, 5.0), Some((a, b)));
    }

    #[test]
    fn segment_crossing_is_cut_at_bounds() {
        let (a, b) = clip_segment_y(Point::new(1.0, -5.0), Point::new(1.0, 15.0), 0.0, 10.0).unwrap();
        assert_eq!(a, Point::new(1.0, 0.0));
        assert_eq!(b, Point::new(1.0, 10.0));
    }

    #[test]
    fn segment_outside_is_dropped() {
        assert_eq!(clip_segment_y(Point::new(0.0, 11.0), Point::new(3.0, 12.0), 0.0, 10.0), None);
    }

    #[test]
    fn polygon_edge_clip_cuts_box() {
        let square = Rect::from_min_max(0.0, -5.0, 4.0, 5.0).outline();
        let clipped = clip_polygon_edge(&square, |p| p.y >= 0.0, 0.0);
        assert!(clipped.iter().all(|p| p.y >= 0.0));
        assert!(clipped.contains(&Point::new(0.0, 0.0)));
        assert!(clipped.contains(&Point::new(4.0, 0.0)));
    }
}
