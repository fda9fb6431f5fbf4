// File: crates/plotext-core/src/table.rs
// Summary: Table layout of sub-canvases with weighted rows/columns and data-area alignment.
//
// Index convention: column 0 is the leftmost column and row 0 is the topmost
// row. Page coordinates are Y-up, so row 0 owns the largest Y values and each
// following row sits below the previous one.

use thiserror::Error;
use tracing::debug;

use crate::geometry::Rect;

/// Configuration errors raised when a plot grid does not match the table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("plot rows ({got}) != table rows ({expected})")]
    RowCount { got: usize, expected: usize },
    #[error("plot row {row} columns ({got}) != table columns ({expected})")]
    ColumnCount { row: usize, got: usize, expected: usize },
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} table")]
    OutOfBounds { x: usize, y: usize, cols: usize, rows: usize },
}

/// Anything that can report its inner data rectangle for a given outer
/// rectangle. The answer must be deterministic for the same input.
pub trait DataArea {
    fn data_rect(&self, outer: Rect) -> Rect;
}

impl<T: DataArea + ?Sized> DataArea for &T {
    fn data_rect(&self, outer: Rect) -> Rect { (**self).data_rect(outer) }
}

impl<T: DataArea + ?Sized> DataArea for Box<T> {
    fn data_rect(&self, outer: Rect) -> Rect { (**self).data_rect(outer) }
}

/// Adapts a closure `Fn(Rect) -> Rect` into a [`DataArea`].
pub struct FnDataArea<F>(pub F);

impl<F: Fn(Rect) -> Rect> DataArea for FnDataArea<F> {
    fn data_rect(&self, outer: Rect) -> Rect { (self.0)(outer) }
}

/// Fixed insets between an outer rectangle and its data rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Margins {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }
}

impl DataArea for Margins {
    fn data_rect(&self, outer: Rect) -> Rect {
        outer.inset(self.left, self.right, self.bottom, self.top)
    }
}

/// A table of sub-canvases. Unlike evenly sized tiles, every row and column
/// carries its own relative weight.
///
/// `row_heights = [2.0, 1.0]` gives the first row 2/3 and the second row 1/3
/// of the height left after padding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Relative row heights, top to bottom. Must be positive.
    pub row_heights: Vec<f64>,
    /// Relative column widths, left to right. Must be positive.
    pub col_widths: Vec<f64>,
    pub pad_top: f64,
    pub pad_bottom: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    /// Padding between adjacent columns.
    pub pad_x: f64,
    /// Padding between adjacent rows.
    pub pad_y: f64,
}

/// Largest margins seen along one row or column.
/// For columns `neg` is the left and `pos` the right margin; for rows `neg`
/// is the bottom and `pos` the top margin.
#[derive(Clone, Copy, Debug, Default)]
struct Spacing {
    neg: f64,
    pos: f64,
}

impl Spacing {
    fn total(&self) -> f64 { self.neg + self.pos }
}

impl Table {
    pub fn new(row_heights: Vec<f64>, col_widths: Vec<f64>) -> Self {
        Self { row_heights, col_widths, ..Self::default() }
    }

    pub fn rows(&self) -> usize { self.row_heights.len() }
    pub fn cols(&self) -> usize { self.col_widths.len() }

    /// Cell at column `x`, row `y` of `canvas`, sized by weight alone.
    ///
    /// # Panics
    /// When `x` or `y` is outside the table.
    pub fn at(&self, canvas: Rect, x: usize, y: usize) -> Rect {
        match self.try_at(canvas, x, y) {
            Ok(r) => r,
            Err(e) => panic!("plotext: {e}"),
        }
    }

    pub fn try_at(&self, canvas: Rect, x: usize, y: usize) -> Result<Rect, TableError> {
        if x >= self.cols() || y >= self.rows() {
            return Err(TableError::OutOfBounds { x, y, cols: self.cols(), rows: self.rows() });
        }

        let sum_cols: f64 = self.col_widths.iter().sum();
        let sum_rows: f64 = self.row_heights.iter().sum();
        debug_assert!(sum_cols > 0.0 && sum_rows > 0.0, "table weights must be positive");

        let cols_left: f64 = self.col_widths[..x].iter().sum();
        let rows_above: f64 = self.row_heights[..y].iter().sum();

        let width_per_unit = (canvas.width()
            - self.pad_left
            - self.pad_right
            - (self.cols() - 1) as f64 * self.pad_x)
            / sum_cols;
        let height_per_unit = (canvas.height()
            - self.pad_top
            - self.pad_bottom
            - (self.rows() - 1) as f64 * self.pad_y)
            / sum_rows;

        let ymax = canvas.max.y - self.pad_top - y as f64 * self.pad_y - rows_above * height_per_unit;
        let ymin = ymax - self.row_heights[y] * height_per_unit;

        let xmin = canvas.min.x + self.pad_left + x as f64 * self.pad_x + cols_left * width_per_unit;
        let xmax = xmin + self.col_widths[x] * width_per_unit;

        Ok(Rect::from_min_max(xmin, ymin, xmax, ymax))
    }

    /// Row-major cells for `plots` whose data rectangles line up: equal
    /// widths and shared left/right edges down each column, equal heights
    /// and shared top/bottom edges along each row. `None` marks a blank cell.
    ///
    /// # Panics
    /// When the grid shape differs from `row_heights` x `col_widths`.
    pub fn align<P: DataArea>(&self, plots: &[Vec<Option<P>>], canvas: Rect) -> Vec<Vec<Rect>> {
        match self.try_align(plots, canvas) {
            Ok(cells) => cells,
            Err(e) => panic!("plotext: {e}"),
        }
    }

    pub fn try_align<P: DataArea>(
        &self,
        plots: &[Vec<Option<P>>],
        canvas: Rect,
    ) -> Result<Vec<Vec<Rect>>, TableError> {
        self.check_shape(plots)?;
        let (rows, cols) = (self.rows(), self.cols());
        debug!(rows, cols, width = canvas.width(), height = canvas.height(), "aligning table");

        // Initial cells by weight.
        let mut cells = Vec::with_capacity(rows);
        for y in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for x in 0..cols {
                row.push(self.try_at(canvas, x, y)?);
            }
            cells.push(row);
        }

        // Worst-case margins per column and per row.
        let mut x_spacing = vec![Spacing::default(); cols];
        let mut y_spacing = vec![Spacing::default(); rows];
        for (j, row) in plots.iter().enumerate() {
            for (i, p) in row.iter().enumerate() {
                let Some(p) = p else { continue };
                let c = cells[j][i];
                let d = p.data_rect(c);
                x_spacing[i].neg = x_spacing[i].neg.max(d.min.x - c.min.x);
                x_spacing[i].pos = x_spacing[i].pos.max(c.max.x - d.max.x);
                y_spacing[j].neg = y_spacing[j].neg.max(d.min.y - c.min.y);
                y_spacing[j].pos = y_spacing[j].pos.max(c.max.y - d.max.y);
            }
        }

        let x_total_space = self.pad_left
            + self.pad_right
            + cols.saturating_sub(1) as f64 * self.pad_x
            + x_spacing.iter().map(Spacing::total).sum::<f64>();
        let y_total_space = self.pad_top
            + self.pad_bottom
            + rows.saturating_sub(1) as f64 * self.pad_y
            + y_spacing.iter().map(Spacing::total).sum::<f64>();

        let sum_cols: f64 = self.col_widths.iter().sum();
        let sum_rows: f64 = self.row_heights.iter().sum();
        let width_per_unit = (canvas.width() - x_total_space) / sum_cols;
        let height_per_unit = (canvas.height() - y_total_space) / sum_rows;
        debug!(width_per_unit, height_per_unit, "data area per weight unit");

        // Bottom row first; each column carries its vertical shift upward.
        let mut move_vertical = vec![0.0f64; cols];
        for j in (0..rows).rev() {
            let mut move_horizontal = 0.0f64;
            for i in 0..cols {
                let mut c = cells[j][i];
                let (width, height) = match &plots[j][i] {
                    Some(p) => {
                        let d = p.data_rect(c);
                        // Put the data rectangle at the column/row worst-case offsets.
                        c = c.crop(
                            x_spacing[i].neg - (d.min.x - c.min.x),
                            (c.max.x - d.max.x) - x_spacing[i].pos,
                            y_spacing[j].neg - (d.min.y - c.min.y),
                            (c.max.y - d.max.y) - y_spacing[j].pos,
                        );
                        let d = p.data_rect(c);
                        (d.width(), d.height())
                    }
                    None => (
                        c.width() - x_spacing[i].total(),
                        c.height() - y_spacing[j].total(),
                    ),
                };

                let dw = width_per_unit * self.col_widths[i] - width;
                let dh = height_per_unit * self.row_heights[j] - height;
                cells[j][i] = c.crop(
                    move_horizontal,
                    move_horizontal + dw,
                    move_vertical[i],
                    move_vertical[i] + dh,
                );
                move_horizontal += dw;
                move_vertical[i] += dh;
            }
        }

        Ok(cells)
    }

    fn check_shape<P>(&self, plots: &[Vec<Option<P>>]) -> Result<(), TableError> {
        if plots.len() != self.rows() {
            return Err(TableError::RowCount { got: plots.len(), expected: self.rows() });
        }
        for (row, cols) in plots.iter().enumerate() {
            if cols.len() != self.cols() {
                return Err(TableError::ColumnCount { row, got: cols.len(), expected: self.cols() });
            }
        }
        Ok(())
    }
}
