// File: crates/plotext-examples/src/bin/table.rs
// Summary: Frame every cell of a weighted table and cross it out, to show raw placement.

use anyhow::{Context, Result};
use plotext_core::style::LineStyle;
use plotext_core::{Page, Table, Theme};
use plotext_examples::{init_logging, out_path};
use tracing::{debug, info};

fn main() -> Result<()> {
    init_logging();
    let out = out_path(std::env::args().nth(1), "table.png");

    //    2     3    1
    // +----+------+--+
    // |    |      |  | 3
    // +----+------+--+
    // |    |      |  | 1
    // +----+------+--+
    // |    |      |  | 2
    // +----+------+--+ 0.5
    let table = Table {
        row_heights: vec![3.0, 1.0, 2.0, 0.5],
        col_widths: vec![2.0, 3.0, 1.0],
        pad_top: 1.0,
        pad_bottom: 2.0,
        pad_left: 4.0,
        pad_right: 3.0,
        pad_x: 5.0,
        pad_y: 6.0,
    };

    let mut page = Page::new(150, 175)?;
    page.clear(Theme::default().background);
    let bounds = page.bounds();
    {
        let area = page.draw_area();
        let line = LineStyle::default();
        for y in 0..table.rows() {
            for x in 0..table.cols() {
                let c = table.at(bounds, x, y);
                debug!(x, y, cell = ?c, "cell");
                area.stroke_lines(&line, &c.outline());
                area.stroke_line2(&line, c.min.x, c.min.y, c.max.x, c.max.y);
                area.stroke_line2(&line, c.min.x, c.max.y, c.max.x, c.min.y);
            }
        }
    }

    page.write_png(&out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    info!(path = %out.display(), "wrote table");
    Ok(())
}
