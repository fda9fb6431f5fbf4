// File: crates/plotext-core/tests/table.rs
// Purpose: Weighted cell placement and data-area alignment across rows and columns.

use plotext_core::{DataArea, FnDataArea, Margins, Rect, Table};

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64, what: &str) {
    assert!((a - b).abs() < EPS, "{what}: {a} != {b}");
}

fn padded(rows: Vec<f64>, cols: Vec<f64>) -> Table {
    let mut t = Table::new(rows, cols);
    t.pad_top = 1.0;
    t.pad_bottom = 2.0;
    t.pad_left = 4.0;
    t.pad_right = 3.0;
    t.pad_x = 5.0;
    t.pad_y = 6.0;
    t
}

#[test]
fn cells_tile_the_padded_canvas() {
    let t = padded(vec![3.0, 1.0, 2.0, 0.5], vec![2.0, 3.0, 1.0]);
    let canvas = Rect::from_size(150.0, 175.0);

    for y in 0..t.rows() {
        assert_close(t.at(canvas, 0, y).min.x, 4.0, "left pad");
        assert_close(t.at(canvas, 2, y).max.x, 147.0, "right pad");
        for x in 0..t.cols() - 1 {
            let gap = t.at(canvas, x + 1, y).min.x - t.at(canvas, x, y).max.x;
            assert_close(gap, 5.0, "column gap");
        }
    }
    for x in 0..t.cols() {
        assert_close(t.at(canvas, x, 0).max.y, 174.0, "top pad");
        assert_close(t.at(canvas, x, 3).min.y, 2.0, "bottom pad");
        for y in 0..t.rows() - 1 {
            let gap = t.at(canvas, x, y).min.y - t.at(canvas, x, y + 1).max.y;
            assert_close(gap, 6.0, "row gap");
        }
    }
}

#[test]
fn at_is_repeatable_and_inside_canvas() {
    let t = padded(vec![3.0, 1.0, 2.0, 0.5], vec![2.0, 3.0, 1.0]);
    let canvas = Rect::from_size(150.0, 175.0);
    for y in 0..t.rows() {
        for x in 0..t.cols() {
            let cell = t.at(canvas, x, y);
            assert_eq!(cell, t.at(canvas, x, y));
            assert!(canvas.encloses(&cell, 0.0), "cell ({x}, {y}) = {cell:?}");
        }
    }
}

#[test]
fn cell_sizes_follow_weights() {
    let t = padded(vec![3.0, 1.0, 2.0, 0.5], vec![2.0, 3.0, 1.0]);
    let canvas = Rect::from_size(150.0, 175.0);

    // (150 - 4 - 3 - 2*5) / 6 and (175 - 1 - 2 - 3*6) / 6.5
    let unit_w = 133.0 / 6.0;
    let unit_h = 154.0 / 6.5;
    for (x, w) in t.col_widths.iter().enumerate() {
        assert_close(t.at(canvas, x, 1).width(), w * unit_w, "width");
    }
    for (y, h) in t.row_heights.iter().enumerate() {
        assert_close(t.at(canvas, 2, y).height(), h * unit_h, "height");
    }
}

#[test]
fn cells_are_placed_relative_to_canvas_origin() {
    let t = Table::new(vec![1.0, 1.0], vec![1.0, 1.0]);
    let canvas = Rect::from_min_max(100.0, 200.0, 300.0, 400.0);
    assert_eq!(t.at(canvas, 0, 0), Rect::from_min_max(100.0, 300.0, 200.0, 400.0));
    assert_eq!(t.at(canvas, 1, 1), Rect::from_min_max(200.0, 200.0, 300.0, 300.0));
}

#[test]
#[should_panic(expected = "outside the 3x4 table")]
fn at_panics_outside_table() {
    let t = padded(vec![3.0, 1.0, 2.0, 0.5], vec![2.0, 3.0, 1.0]);
    t.at(Rect::from_size(150.0, 175.0), 3, 0);
}

/// Inner data rectangles and the frames around them that carry each
/// column's and row's largest margins.
fn frames(plots: &[Vec<Option<Margins>>], cells: &[Vec<Rect>]) -> (Vec<Vec<Rect>>, Vec<Vec<Rect>>) {
    let cols = plots[0].len();
    let mut left = vec![0.0f64; cols];
    let mut right = vec![0.0f64; cols];
    let mut bottom = vec![0.0f64; plots.len()];
    let mut top = vec![0.0f64; plots.len()];
    for (j, row) in plots.iter().enumerate() {
        for (i, m) in row.iter().enumerate() {
            let Some(m) = m else { continue };
            left[i] = left[i].max(m.left);
            right[i] = right[i].max(m.right);
            bottom[j] = bottom[j].max(m.bottom);
            top[j] = top[j].max(m.top);
        }
    }

    let mut inner = Vec::new();
    let mut outer = Vec::new();
    for (j, row) in plots.iter().enumerate() {
        let mut inner_row = Vec::new();
        let mut outer_row = Vec::new();
        for (i, m) in row.iter().enumerate() {
            let d = match m {
                Some(m) => m.data_rect(cells[j][i]),
                None => cells[j][i].inset(left[i], right[i], bottom[j], top[j]),
            };
            inner_row.push(d);
            outer_row.push(d.inset(-left[i], -right[i], -bottom[j], -top[j]));
        }
        inner.push(inner_row);
        outer.push(outer_row);
    }
    (inner, outer)
}

fn mixed_margins() -> Vec<Vec<Option<Margins>>> {
    vec![
        vec![Some(Margins::new(30.0, 2.0, 12.0, 8.0)), Some(Margins::new(10.0, 0.0, 20.0, 0.0))],
        vec![Some(Margins::new(12.0, 6.0, 4.0, 3.0)), Some(Margins::new(45.0, 1.0, 7.0, 15.0))],
        vec![Some(Margins::new(20.0, 0.0, 25.0, 0.0)), Some(Margins::new(5.0, 9.0, 0.0, 2.0))],
    ]
}

#[test]
fn aligned_data_areas_share_edges() {
    let t = padded(vec![2.0, 1.0, 1.0], vec![1.0, 2.0]);
    let plots = mixed_margins();
    let cells = t.align(&plots, Rect::from_size(450.0, 300.0));
    let (inner, _) = frames(&plots, &cells);

    for i in 0..t.cols() {
        for j in 1..t.rows() {
            assert_close(inner[j][i].min.x, inner[0][i].min.x, "column left edge");
            assert_close(inner[j][i].max.x, inner[0][i].max.x, "column right edge");
        }
    }
    for j in 0..t.rows() {
        assert_close(inner[j][1].min.y, inner[j][0].min.y, "row bottom edge");
        assert_close(inner[j][1].max.y, inner[j][0].max.y, "row top edge");
    }
}

#[test]
fn aligned_data_areas_follow_weights() {
    let t = padded(vec![2.0, 1.0, 1.0], vec![1.0, 2.0]);
    let plots = mixed_margins();
    let cells = t.align(&plots, Rect::from_size(450.0, 300.0));
    let (inner, _) = frames(&plots, &cells);

    let w0 = inner[0][0].width() / t.col_widths[0];
    let w1 = inner[0][1].width() / t.col_widths[1];
    assert_close(w0, w1, "width per unit");
    let h0 = inner[0][0].height() / t.row_heights[0];
    let h2 = inner[2][0].height() / t.row_heights[2];
    assert_close(h0, h2, "height per unit");
}

#[test]
fn aligned_frames_tile_the_canvas() {
    let t = padded(vec![2.0, 1.0, 1.0], vec![1.0, 2.0]);
    let plots = mixed_margins();
    let canvas = Rect::from_size(450.0, 300.0);
    let cells = t.align(&plots, canvas);
    let (_, outer) = frames(&plots, &cells);

    for row in &outer {
        assert_close(row[0].min.x, canvas.min.x + t.pad_left, "first frame");
        assert_close(row[1].min.x - row[0].max.x, t.pad_x, "frame gap");
        assert_close(row[1].max.x, canvas.max.x - t.pad_right, "last frame");
    }
    for i in 0..t.cols() {
        assert_close(outer[0][i].max.y, canvas.max.y - t.pad_top, "top frame");
        for j in 0..t.rows() - 1 {
            assert_close(outer[j][i].min.y - outer[j + 1][i].max.y, t.pad_y, "frame gap");
        }
        assert_close(outer[2][i].min.y, canvas.min.y + t.pad_bottom, "bottom frame");
    }
}

#[test]
fn narrower_left_margin_is_shifted_right() {
    let t = Table::new(vec![1.0, 1.0], vec![1.0]);
    let plots = vec![
        vec![Some(Margins::new(10.0, 0.0, 0.0, 0.0))],
        vec![Some(Margins::new(25.0, 0.0, 0.0, 0.0))],
    ];
    let cells = t.align(&plots, Rect::from_size(100.0, 100.0));

    assert_eq!(cells[0][0], Rect::from_min_max(15.0, 50.0, 100.0, 100.0));
    assert_eq!(cells[1][0], Rect::from_min_max(0.0, 0.0, 100.0, 50.0));
    let top = plots[0][0].unwrap().data_rect(cells[0][0]);
    let bottom = plots[1][0].unwrap().data_rect(cells[1][0]);
    assert_eq!((top.min.x, top.max.x), (25.0, 100.0));
    assert_eq!((bottom.min.x, bottom.max.x), (25.0, 100.0));
}

#[test]
fn taller_bottom_margin_lines_up_rows() {
    let t = Table::new(vec![1.0], vec![1.0, 1.0]);
    let plots = vec![vec![
        Some(Margins::new(0.0, 0.0, 10.0, 0.0)),
        Some(Margins::new(0.0, 0.0, 30.0, 0.0)),
    ]];
    let cells = t.align(&plots, Rect::from_size(200.0, 100.0));
    let a = plots[0][0].unwrap().data_rect(cells[0][0]);
    let b = plots[0][1].unwrap().data_rect(cells[0][1]);
    assert_eq!((a.min.y, a.max.y), (30.0, 100.0));
    assert_eq!((b.min.y, b.max.y), (30.0, 100.0));
}

#[test]
fn empty_slot_keeps_its_column() {
    let t = padded(vec![1.0, 1.0], vec![1.0, 1.0]);
    let plots = vec![
        vec![Some(Margins::new(10.0, 0.0, 5.0, 0.0)), Some(Margins::new(20.0, 4.0, 8.0, 2.0))],
        vec![None, Some(Margins::new(15.0, 0.0, 3.0, 1.0))],
    ];
    let canvas = Rect::from_size(300.0, 200.0);
    let cells = t.align(&plots, canvas);

    assert_close(cells[1][0].min.x, cells[0][0].min.x, "empty left");
    assert_close(cells[1][0].max.x, cells[0][0].max.x, "empty right");
    assert!(canvas.encloses(&cells[1][0], EPS));

    let (inner, outer) = frames(&plots, &cells);
    assert_close(inner[0][1].min.x, inner[1][1].min.x, "filled column left");
    assert_close(inner[0][1].max.x, inner[1][1].max.x, "filled column right");
    assert_close(outer[1][0].min.y, canvas.min.y + t.pad_bottom, "empty bottom");
}

#[test]
fn empty_row_and_column_get_no_margin() {
    let t = Table::new(vec![1.0, 1.0], vec![1.0, 1.0]);
    let plots: Vec<Vec<Option<Margins>>> = vec![
        vec![Some(Margins::new(10.0, 10.0, 10.0, 10.0)), None],
        vec![None, None],
    ];
    let cells = t.align(&plots, Rect::from_size(100.0, 100.0));
    assert_eq!(cells[1][1], Rect::from_min_max(60.0, 0.0, 100.0, 40.0));
    assert_eq!(cells[0][0], Rect::from_min_max(0.0, 40.0, 60.0, 100.0));
}

#[test]
fn align_is_idempotent() {
    let t = padded(vec![2.0, 1.0, 1.0], vec![1.0, 2.0]);
    let plots = mixed_margins();
    let canvas = Rect::from_size(450.0, 300.0);
    assert_eq!(t.align(&plots, canvas), t.align(&plots, canvas));
}

#[test]
fn boxed_data_areas_mix_kinds() {
    let t = Table::new(vec![1.0, 1.0], vec![1.0]);
    let plots: Vec<Vec<Option<Box<dyn DataArea>>>> = vec![
        vec![Some(Box::new(Margins::new(10.0, 0.0, 0.0, 0.0)) as Box<dyn DataArea>)],
        vec![Some(Box::new(FnDataArea(|r: Rect| r.inset(25.0, 0.0, 0.0, 0.0))) as Box<dyn DataArea>)],
    ];
    let cells = t.align(&plots, Rect::from_size(100.0, 100.0));
    assert_eq!(cells[0][0].min.x, 15.0);
    assert_eq!(cells[1][0].min.x, 0.0);
}

#[test]
#[should_panic(expected = "plot rows (1) != table rows (2)")]
fn align_panics_on_row_mismatch() {
    let t = Table::new(vec![1.0, 1.0], vec![1.0]);
    t.align(&[vec![Some(Margins::default())]], Rect::from_size(10.0, 10.0));
}

#[test]
fn try_align_reports_column_mismatch() {
    let t = Table::new(vec![1.0], vec![1.0, 1.0]);
    let err = t
        .try_align(&[vec![Some(Margins::default())]], Rect::from_size(10.0, 10.0))
        .unwrap_err();
    assert_eq!(err.to_string(), "plot row 0 columns (1) != table columns (2)");
}

#[test]
fn try_align_on_empty_table_is_empty() {
    let t = Table::default();
    let cells = t.try_align::<Margins>(&[], Rect::from_size(10.0, 10.0)).unwrap();
    assert!(cells.is_empty());
}
