// File: crates/plotext-core/src/example_data.rs
// Summary: Deterministic synthetic TOHLCV data for demos, tests and benches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tohlcv::Tohlcv;

/// 2000-01-02 03:04:05 at UTC-05:00, in unix seconds.
pub const EXAMPLE_START: i64 = 946_800_245;
/// Seconds between consecutive example bars.
pub const EXAMPLE_STEP: i64 = 60;

/// `n` one-minute bars from a fractal random walk around 100.
///
/// The walk has `4 * n` samples; bar `i` takes samples `4i..4i+4` as
/// open, (high/low envelope), close. Volume is
/// `(high - low + |close - open|) * 100`. The same `n` always yields the
/// same data.
pub fn tohlcv_example_data(n: usize) -> Vec<Tohlcv> {
    let mut rng = StdRng::seed_from_u64(1);
    let m = 4 * n;
    let mut fract = vec![100.0f64; m];

    // Sum of piecewise-linear noise at halving scales.
    let mut stat1 = 0.0f64;
    let mut stat2 = 0.0f64;
    let mut k = m;
    while k > 0 {
        let mut j = 0usize;
        for f in fract.iter_mut() {
            if j == 0 {
                j = k;
                stat2 = stat1;
                stat1 = 10.0 * (k as f64 / m as f64 + 0.02) * (2.0 * rng.random::<f64>() - 1.0);
            }
            *f += (k - j) as f64 / k as f64 * stat1 + j as f64 / k as f64 * stat2;
            j -= 1;
        }
        k /= 2;
    }

    (0..n)
        .map(|i| {
            let s = &fract[4 * i..4 * i + 4];
            let o = s[0];
            let c = s[3];
            let h = s.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let l = s.iter().copied().fold(f64::INFINITY, f64::min);
            let t = (EXAMPLE_START + i as i64 * EXAMPLE_STEP) as f64;
            Tohlcv { t, o, h, l, c, v: (h - l + (c - o).abs()) * 100.0 }
        })
        .collect()
}
