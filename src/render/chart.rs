//! ASCII area chart of a numeric history.
//!
//! Row 0 is the top of the chart. Each row has a magnitude threshold
//! `(height - y - 1) * 100 / (height - 1)`, and a cell is lit when the
//! column's value reaches it, so larger values fill more rows from the
//! bottom. The newest sample is the rightmost column; while the history is
//! shorter than the chart, the missing columns on the left read as zero.

use std::fmt;

pub const ON_GLYPH: char = '\u{2588}';
pub const OFF_GLYPH: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    On,
    Off,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::On => ON_GLYPH,
            Cell::Off => OFF_GLYPH,
        }
    }
}

/// A `height x width` grid of cells, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl ChartGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, y: usize, x: usize) -> Option<Cell> {
        if y >= self.height || x >= self.width {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.cells.get(start..start + self.width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// One string per row.
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }
}

impl fmt::Display for ChartGrid {
    /// Rows joined by `\n`, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, line) in self.lines().iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Threshold for row `y`. A single-row chart is its own bottom row.
pub fn row_threshold(y: usize, height: usize) -> f64 {
    if height <= 1 {
        return 0.0;
    }
    (height - y - 1) as f64 * 100.0 / (height - 1) as f64
}

/// Value plotted in column `x`: the history is right-aligned to the chart.
fn column_value(history: &[f64], width: usize, x: usize) -> f64 {
    let idx = history.len() as isize - width as isize + x as isize;
    if idx < 0 {
        return 0.0;
    }
    history.get(idx as usize).copied().unwrap_or(0.0)
}

/// A zero width or height yields an empty grid with no rows.
pub fn render(history: &[f64], width: usize, height: usize) -> ChartGrid {
    if width == 0 || height == 0 {
        return ChartGrid {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
    }

    let mut cells = Vec::with_capacity(width * height);
    let values: Vec<f64> = (0..width).map(|x| column_value(history, width, x)).collect();

    for y in 0..height {
        let thresh = row_threshold(y, height);
        cells.extend(values.iter().map(|&v| if v >= thresh { Cell::On } else { Cell::Off }));
    }

    ChartGrid {
        width,
        height,
        cells,
    }
}

/// Convenience for text sinks: `height` lines of `width` glyphs.
pub fn render_text(history: &[f64], width: usize, height: usize) -> String {
    render(history, width, height).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn dotted(history: &[f64], width: usize, height: usize) -> String {
        render_text(history, width, height).replace(OFF_GLYPH, ".")
    }

    #[test]
    fn two_by_two_reference_case() {
        let grid = render(&[0.0, 100.0], 2, 2);
        assert_eq!(grid.row(1), Some(&[Cell::On, Cell::On][..]));
        assert_eq!(grid.row(0), Some(&[Cell::Off, Cell::On][..]));
    }

    #[test]
    fn thresholds_run_from_100_to_0() {
        assert_eq!(row_threshold(0, 10), 100.0);
        assert_eq!(row_threshold(9, 10), 0.0);
        assert!((row_threshold(1, 10) - 88.888_888).abs() < 1e-3);
        assert_eq!(row_threshold(0, 1), 0.0);
    }

    #[test]
    fn ties_render_on() {
        // height 3 -> thresholds 100, 50, 0
        let grid = render(&[50.0], 1, 3);
        assert_eq!(grid.cell(0, 0), Some(Cell::Off));
        assert_eq!(grid.cell(1, 0), Some(Cell::On));
        assert_eq!(grid.cell(2, 0), Some(Cell::On));
    }

    #[test]
    fn short_history_pads_left_with_zero() {
        let grid = render(&[100.0, 100.0], 5, 3);
        for y in 0..2 {
            assert_eq!(
                grid.row(y),
                Some(&[Cell::Off, Cell::Off, Cell::Off, Cell::On, Cell::On][..])
            );
        }
        // Zero still meets the bottom threshold.
        assert!(grid.row(2).unwrap().iter().all(|&c| c == Cell::On));
    }

    #[test]
    fn long_history_shows_most_recent_window() {
        let history: Vec<f64> = vec![100.0, 100.0, 100.0, 0.0, 0.0];
        let grid = render(&history, 2, 2);
        assert_eq!(grid.row(0), Some(&[Cell::Off, Cell::Off][..]));
    }

    #[test]
    fn single_row_chart_is_fully_lit() {
        let grid = render(&[0.0, 12.0, 99.0], 4, 1);
        assert_eq!(grid.to_string(), "\u{2588}".repeat(4));
    }

    #[test]
    fn degenerate_sizes_are_empty() {
        assert_eq!(render_text(&[10.0], 0, 5), "");
        assert_eq!(render_text(&[10.0], 5, 0), "");
        for grid in [render(&[10.0], 0, 5), render(&[10.0], 5, 0), render(&[], 0, 0)] {
            assert_eq!((grid.width(), grid.height()), (0, 0));
            assert!(grid.lines().is_empty());
            assert_eq!(grid.rows().count(), 0);
            assert_eq!(grid.row(0), None);
        }
    }

    #[test]
    fn out_of_grid_cell_is_none() {
        let grid = render(&[1.0], 3, 2);
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(0, 3), None);
    }

    #[test]
    fn out_of_grid_row_is_none() {
        let grid = render(&[1.0], 3, 2);
        assert_eq!(grid.row(1).map(<[Cell]>::len), Some(3));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.row(usize::MAX), None);
    }

    #[test]
    fn ramp_chart() {
        let history = [0.0, 25.0, 50.0, 75.0, 100.0];
        assert_snapshot!(dotted(&history, 6, 5), @r"
        .....█
        ....██
        ...███
        ..████
        ██████
        ");
    }

    #[test]
    fn spiky_chart() {
        let history = [90.0, 10.0, 60.0, 30.0];
        assert_snapshot!(dotted(&history, 4, 4), @r"
        ....
        █...
        █.█.
        ████
        ");
    }

    #[test]
    fn lines_have_requested_width() {
        let text = render_text(&[33.0; 10], 76, 10);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.chars().count() == 76));
    }
}
