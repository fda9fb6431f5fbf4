// File: crates/plotext-examples/src/bin/align.rs
// Summary: Candlesticks above volume bars on one page, with aligned x axes.
//
// Usage: example-align [CSV] [OUT]
// Without a CSV the deterministic example data is used.

use anyhow::{Context, Result};
use plotext_core::csv_data::load_tohlcv_csv;
use plotext_core::example_data::tohlcv_example_data;
use plotext_core::{unite_axis_ranges, Candlesticks, Page, Plot, Table, Theme, Ticks, Tohlcv, VBars};
use plotext_examples::{init_logging, out_path};
use tracing::info;

const TIME_FORMAT: &str = "%Y-%m-%d\n%H:%M:%S";

fn main() -> Result<()> {
    init_logging();
    let mut args = std::env::args().skip(1);
    let data = load(args.next())?;
    let out = out_path(args.next(), "align.png");

    let mut prices = Plot::new();
    prices.title = "Candlesticks and Volume Bars".into();
    prices.y.label = "Price".into();
    prices.x.ticks = Ticks::time(TIME_FORMAT);
    let candlesticks = Candlesticks::new(&data)?;
    let candle_width = candlesticks.candle_width;
    prices.add(candlesticks);

    let mut volume = Plot::new();
    volume.x.label = "Time".into();
    volume.y.label = "Volume".into();
    volume.x.ticks = Ticks::time(TIME_FORMAT);
    let vbars = VBars::new(&data)?;
    // Line the y axes up despite candles being wider than volume bars.
    volume.y.padding += (candle_width - vbars.line_style.width) / 2.0;
    volume.add(vbars);

    unite_axis_ranges(&mut [&mut prices.x, &mut volume.x]);

    // 2/3 for candlesticks, 1/3 for volume
    let table = Table::new(vec![2.0, 1.0], vec![1.0]);
    let plots = vec![vec![Some(prices)], vec![Some(volume)]];

    let mut page = Page::new(450, 300)?;
    page.clear(Theme::default().background);
    let cells = table.align(&plots, page.bounds());
    {
        let area = page.draw_area();
        for (row, cell_row) in plots.iter().zip(&cells) {
            for (plot, cell) in row.iter().zip(cell_row) {
                if let Some(plot) = plot {
                    plot.draw(&area.with_rect(*cell));
                }
            }
        }
    }

    page.write_png(&out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    info!(path = %out.display(), bars = data.len(), "wrote aligned page");
    Ok(())
}

fn load(csv: Option<String>) -> Result<Vec<Tohlcv>> {
    let Some(path) = csv else {
        return Ok(tohlcv_example_data(60));
    };
    let data = load_tohlcv_csv(&path).with_context(|| format!("failed to load CSV '{path}'"))?;
    if data.is_empty() {
        anyhow::bail!("no bars loaded from '{path}'; check headers/delimiter");
    }
    info!(path = %path, bars = data.len(), "loaded csv");
    Ok(data)
}
