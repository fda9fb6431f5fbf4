// File: crates/plotext-core/tests/plotters.rs
// Purpose: Data ranges, input validation and axis growth for the financial plotters.

use plotext_core::example_data::tohlcv_example_data;
use plotext_core::tohlcv::with_moving_average;
use plotext_core::{
    unite_axis_ranges, Candlesticks, CandlesticksWithMovingAverage, DataError, DataRange, OhlcBars,
    Plot, Plotter, Tohlcv, VBars,
};

fn bars() -> Vec<Tohlcv> {
    vec![
        Tohlcv::new(10.0, 2.0, 3.0, 1.0, 2.5, 100.0),
        Tohlcv::new(20.0, 2.5, 3.5, 2.0, 2.0, 40.0),
        Tohlcv::new(30.0, 2.0, 4.0, 1.5, 3.0, 250.0),
    ]
}

#[test]
fn candlesticks_span_time_and_price_envelope() {
    let c = Candlesticks::new(&bars()).unwrap();
    assert_eq!(c.data_range(), DataRange::new(10.0, 30.0, 1.0, 4.0));
    assert_eq!(c.candle_width, 3.0);
    assert!(c.fixed_line_color);
}

#[test]
fn ohlc_bars_share_the_price_envelope() {
    let b = OhlcBars::new(&bars()[..]).unwrap();
    assert_eq!(b.data_range(), DataRange::new(10.0, 30.0, 1.0, 4.0));
    assert_eq!(b.tick_width, 2.0);
}

#[test]
fn vbars_start_at_zero_volume() {
    let v = VBars::new(&bars()).unwrap();
    assert_eq!(v.data_range(), DataRange::new(10.0, 30.0, 0.0, 250.0));
}

#[test]
fn moving_average_candles_range_ignores_average() {
    let mut data = with_moving_average(&bars(), 2);
    data[1].ma = 99.0;
    let c = CandlesticksWithMovingAverage::new(&data, 2).unwrap();
    assert_eq!(c.data_range(), DataRange::new(10.0, 30.0, 1.0, 4.0));
    assert_eq!(c.moving_average_window, 2);
}

#[test]
fn constructors_reject_non_finite_values() {
    let mut data = bars();
    data[2].h = f64::INFINITY;
    let want = DataError::NonFinite { index: 2, field: "high" };

    assert_eq!(Candlesticks::new(&data).err(), Some(want.clone()));
    assert_eq!(OhlcBars::new(&data).err(), Some(want.clone()));
    assert_eq!(VBars::new(&data).err(), Some(want));

    let err = CandlesticksWithMovingAverage::new(&with_moving_average(&data, 3), 3).err();
    assert_eq!(err, Some(DataError::NonFinite { index: 2, field: "high" }));
}

#[test]
fn constructors_copy_their_input() {
    let mut data = bars();
    let c = Candlesticks::new(&data).unwrap();
    data[0].o = 50.0;
    assert_eq!(c.data[0].o, 2.0);
}

#[test]
fn adding_plotters_grows_axes() {
    let data = bars();
    let mut plot = Plot::new();
    plot.add(Candlesticks::new(&data).unwrap());
    assert_eq!((plot.x.min, plot.x.max), (10.0, 30.0));
    assert_eq!((plot.y.min, plot.y.max), (1.0, 4.0));

    plot.add(OhlcBars::new(&[Tohlcv::new(40.0, 5.0, 6.0, 0.5, 5.5, 1.0)][..]).unwrap());
    assert_eq!((plot.x.min, plot.x.max), (10.0, 40.0));
    assert_eq!((plot.y.min, plot.y.max), (0.5, 6.0));
    assert_eq!(plot.plotters().len(), 2);
}

#[test]
fn united_x_axes_share_a_range() {
    let data = tohlcv_example_data(50);
    let mut prices = Plot::new();
    prices.add(Candlesticks::new(&data[10..]).unwrap());
    let mut volume = Plot::new();
    volume.add(VBars::new(&data[..30]).unwrap());

    unite_axis_ranges(&mut [&mut prices.x, &mut volume.x]);
    assert_eq!((prices.x.min, prices.x.max), (data[0].t, data[49].t));
    assert_eq!((volume.x.min, volume.x.max), (data[0].t, data[49].t));
}

#[test]
fn glyph_boxes_sit_at_range_ends() {
    let mut plot = Plot::new();
    let c = Candlesticks::new(&bars()).unwrap();
    plot.add(Candlesticks::new(&bars()).unwrap());

    let boxes = c.glyph_boxes(&plot);
    assert_eq!(boxes.len(), 2);
    assert_eq!((boxes[0].x, boxes[1].x), (0.0, 1.0));
    assert_eq!(boxes[0].rect.min.x, -2.0);
    assert_eq!(boxes[1].rect.max.x, 2.0);
}
