// File: crates/plotext-examples/src/bin/candlesticks.rs
// Summary: Render one hour of example candles to a 450x200 PNG.
//
// Usage: example-candlesticks [OUT] [THEME]

use anyhow::{Context, Result};
use plotext_core::example_data::tohlcv_example_data;
use plotext_core::{theme, Candlesticks, Plot, Ticks};
use plotext_examples::{init_logging, out_path};
use tracing::info;

fn main() -> Result<()> {
    init_logging();
    let mut args = std::env::args().skip(1);
    let out = out_path(args.next(), "candlesticks.png");
    let theme = theme::find(args.next().as_deref().unwrap_or("light"));

    let data = tohlcv_example_data(60);

    let mut plot = Plot::new();
    plot.title = "Candlesticks".into();
    plot.x.label = "Time".into();
    plot.y.label = "Price".into();
    plot.x.ticks = Ticks::time("%Y-%m-%d\n%H:%M:%S");
    plot.apply_theme(theme);
    plot.add(Candlesticks::new(&data)?);

    plot.save(450, 200, &out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    info!(path = %out.display(), bars = data.len(), theme = theme.name, "wrote candlesticks");
    Ok(())
}
