// File: crates/plotext-core/src/tohlcv.rs
// Summary: Time/open/high/low/close/volume records, their sources, and validated copies.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("record {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },
}

/// One bar: time (unix seconds), open, high, low, close and volume.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tohlcv {
    pub t: f64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
}

impl Tohlcv {
    pub const fn new(t: f64, o: f64, h: f64, l: f64, c: f64, v: f64) -> Self {
        Self { t, o, h, l, c, v }
    }

    /// Close at or above open.
    pub fn is_up(&self) -> bool { self.c >= self.o }
}

/// A [`Tohlcv`] with a moving-average value attached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TohlcvMa {
    pub t: f64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
    pub ma: f64,
}

impl TohlcvMa {
    pub fn is_up(&self) -> bool { self.c >= self.o }

    pub fn bar(&self) -> Tohlcv {
        Tohlcv::new(self.t, self.o, self.h, self.l, self.c, self.v)
    }
}

/// Indexed access to TOHLCV data.
pub trait TohlcvSource {
    fn len(&self) -> usize;
    fn tohlcv(&self, i: usize) -> Tohlcv;

    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Indexed access to TOHLCV data with a moving average.
pub trait TohlcvMaSource {
    fn len(&self) -> usize;
    fn tohlcvma(&self, i: usize) -> TohlcvMa;

    fn is_empty(&self) -> bool { self.len() == 0 }
}

impl TohlcvSource for [Tohlcv] {
    fn len(&self) -> usize { <[Tohlcv]>::len(self) }
    fn tohlcv(&self, i: usize) -> Tohlcv { self[i] }
}

impl TohlcvSource for Vec<Tohlcv> {
    fn len(&self) -> usize { Vec::len(self) }
    fn tohlcv(&self, i: usize) -> Tohlcv { self[i] }
}

impl TohlcvMaSource for [TohlcvMa] {
    fn len(&self) -> usize { <[TohlcvMa]>::len(self) }
    fn tohlcvma(&self, i: usize) -> TohlcvMa { self[i] }
}

impl TohlcvMaSource for Vec<TohlcvMa> {
    fn len(&self) -> usize { Vec::len(self) }
    fn tohlcvma(&self, i: usize) -> TohlcvMa { self[i] }
}

fn check_finite(index: usize, fields: [(&'static str, f64); 5]) -> Result<(), DataError> {
    for (field, v) in fields {
        if !v.is_finite() {
            return Err(DataError::NonFinite { index, field });
        }
    }
    Ok(())
}

/// Copy `data` into an owned vector, rejecting NaN or infinite prices and volumes.
pub fn copy_tohlcvs<S: TohlcvSource + ?Sized>(data: &S) -> Result<Vec<Tohlcv>, DataError> {
    let mut out = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        let r = data.tohlcv(i);
        check_finite(i, [("open", r.o), ("high", r.h), ("low", r.l), ("close", r.c), ("volume", r.v)])?;
        out.push(r);
    }
    Ok(out)
}

pub fn copy_tohlcvmas<S: TohlcvMaSource + ?Sized>(data: &S) -> Result<Vec<TohlcvMa>, DataError> {
    let mut out = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        let r = data.tohlcvma(i);
        check_finite(i, [("open", r.o), ("high", r.h), ("low", r.l), ("close", r.c), ("volume", r.v)])?;
        out.push(r);
    }
    Ok(out)
}

/// Attach a simple moving average of closes over `window` bars.
/// The first `window - 1` records get the average of the bars seen so far.
pub fn with_moving_average(data: &[Tohlcv], window: usize) -> Vec<TohlcvMa> {
    let p = window.max(1);
    let mut out = Vec::with_capacity(data.len());
    let mut sum = 0.0f64;
    for (i, r) in data.iter().enumerate() {
        sum += r.c;
        if i >= p { sum -= data[i - p].c; }
        let n = (i + 1).min(p) as f64;
        out.push(TohlcvMa { t: r.t, o: r.o, h: r.h, l: r.l, c: r.c, v: r.v, ma: sum / n });
    }
    out
}

/// Smallest and largest time, and the low/high price envelope.
pub(crate) fn price_range(bars: impl Iterator<Item = Tohlcv>) -> (f64, f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for b in bars {
        x_min = x_min.min(b.t);
        x_max = x_max.max(b.t);
        y_min = y_min.min(b.l);
        y_max = y_max.max(b.h);
    }
    (x_min, x_max, y_min, y_max)
}
