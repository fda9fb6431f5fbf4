// File: crates/plotext-core/src/axis.rs
// Summary: Axis model with label, data range, tick marker, and range unification.

use tracing::warn;

use crate::style::{LineStyle, TextStyle, DEFAULT_LABEL_FONT_SIZE, DEFAULT_TICK_FONT_SIZE};
use crate::ticks::{Tick, Ticks};
use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    /// Data range. Starts empty (`+inf..-inf`) and grows as plotters are added.
    pub min: f64,
    pub max: f64,
    /// Gap between the axis line and the data area.
    pub padding: f64,
    pub label_style: TextStyle,
    pub tick_style: TextStyle,
    pub ticks: Ticks,
    pub line_style: LineStyle,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            padding: 5.0,
            label_style: TextStyle::new(DEFAULT_LABEL_FONT_SIZE, skia::Color::BLACK),
            tick_style: TextStyle::new(DEFAULT_TICK_FONT_SIZE, skia::Color::BLACK),
            ticks: Ticks::Default,
            line_style: LineStyle::default(),
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Grow the range to include `[min, max]`.
    pub fn extend(&mut self, min: f64, max: f64) {
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    /// Range used for drawing: falls back to `0..1` when nothing was added
    /// and widens a zero-width range by one unit.
    pub fn range(&self) -> (f64, f64) {
        if !self.min.is_finite() || !self.max.is_finite() || self.max < self.min {
            return (0.0, 1.0);
        }
        if (self.max - self.min).abs() < 1e-12 {
            warn!(value = self.min, axis = %self.label, "zero-width axis range, widening");
            return (self.min - 0.5, self.max + 0.5);
        }
        (self.min, self.max)
    }

    /// Map a data value to `[0, 1]` across the axis range.
    pub fn norm(&self, v: f64) -> f64 {
        let (min, max) = self.range();
        (v - min) / (max - min)
    }

    pub fn major_ticks(&self) -> Vec<Tick> {
        let (min, max) = self.range();
        self.ticks.ticks(min, max)
    }
}

impl Default for Axis {
    fn default() -> Self { Self::new("") }
}

/// Set every axis to the smallest range covering all of them.
pub fn unite_axis_ranges(axes: &mut [&mut Axis]) {
    let mut min = f64::MAX;
    let mut max = -f64::MAX;
    for a in axes.iter() {
        min = min.min(a.min);
        max = max.max(a.max);
    }
    for a in axes.iter_mut() {
        a.min = min;
        a.max = max;
    }
}
