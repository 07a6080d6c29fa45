//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::types::{CursorPosition, Region, TerminalSize};
use std::ops::RangeInclusive;

/// A row and the inclusive column span selected on it.
type Span = (usize, RangeInclusive<usize>);

/// Fixed size character grid with a cursor.
///
/// The grid is what the remote host currently shows. It is written by the
/// console decoder and read by conditions and the extractor.
///
/// Coordinates are zero based and inclusive. Reads and clears are not range
/// checked by the caller; cells outside the grid are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualScreen {
    size: TerminalSize,
    fill: char,
    cells: Vec<Vec<char>>,
    cursor: CursorPosition,
}

impl Default for VirtualScreen {
    fn default() -> Self {
        VirtualScreen::create(24, 80, ' ')
    }
}

impl VirtualScreen {
    /// Allocates a `rows` by `cols` grid with every cell set to `fill`.
    pub fn create(rows: usize, cols: usize, fill: char) -> Self {
        Self {
            size: TerminalSize::new(rows, cols),
            fill,
            cells: vec![vec![fill; cols]; rows],
            cursor: CursorPosition::default(),
        }
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Character the grid was created with.
    pub fn fill(&self) -> char {
        self.fill
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Places the cursor, clamping each axis to the grid.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = CursorPosition::new(row.min(self.size.last_row()), col.min(self.size.last_col()));
    }

    /// Moves the cursor by a signed delta per axis, clamping to the grid.
    pub fn move_cursor(&mut self, row_delta: isize, col_delta: isize) -> CursorPosition {
        let row = self.cursor.row.saturating_add_signed(row_delta);
        let col = self.cursor.col.saturating_add_signed(col_delta);
        self.set_cursor(row, col);
        self.cursor
    }

    /// Reads one cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    /// Writes one cell, ignoring coordinates outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = ch;
        }
    }

    /// Writes `ch` under the cursor without moving it.
    pub fn put_char(&mut self, ch: char) {
        let CursorPosition { row, col } = self.cursor;
        self.set_cell(row, col, ch);
    }

    /// Writes `text` along `row` starting at `col`, clipped at the right edge.
    ///
    /// The cursor does not move.
    pub fn put_str(&mut self, row: usize, col: usize, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.set_cell(row, col + offset, ch);
        }
    }

    /// Resets every cell to the fill character and homes the cursor.
    pub fn reset(&mut self) {
        for line in &mut self.cells {
            line.fill(self.fill);
        }
        self.cursor = CursorPosition::default();
    }

    /// Row major text selection.
    ///
    /// `row_end` defaults to `row_start` and the rows are swapped when given
    /// backwards. `col_end` defaults to the last column. On a single row the
    /// columns are swapped when given backwards and only `[col_start, col_end]`
    /// is read. Across several rows the first row is read from `col_start` to
    /// the edge, the last row from column 0 to `col_end`, and interior rows in
    /// full. Rows are joined with `separator`.
    pub fn string(&self, region: Region, separator: &str) -> String {
        self.join(self.string_spans(region), separator)
    }

    /// Rectangular selection.
    ///
    /// Every row is restricted to `[col_start, col_end]`, swapped if given
    /// backwards. When `row_end < row_start` rows are read in descending order.
    pub fn block(&self, region: Region, separator: &str) -> String {
        self.join(self.block_spans(region), separator)
    }

    /// Writes `fill` over the cells [`VirtualScreen::string`] would read.
    pub fn clear(&mut self, region: Region, fill: char) {
        for (row, cols) in self.string_spans(region) {
            for col in cols {
                self.set_cell(row, col, fill);
            }
        }
    }

    /// Writes `fill` over the cells [`VirtualScreen::block`] would read.
    pub fn clear_block(&mut self, region: Region, fill: char) {
        for (row, cols) in self.block_spans(region) {
            for col in cols {
                self.set_cell(row, col, fill);
            }
        }
    }

    /// Serializes the grid with rows joined by `separator`.
    ///
    /// With `rulers` a column ruler is drawn above and below and every row is
    /// framed by its index, with `+` marking every tenth row.
    pub fn render_full(&self, separator: &str, rulers: bool) -> String {
        if !rulers {
            let lines: Vec<String> = self.cells.iter().map(|line| line.iter().collect()).collect();
            return lines.join(separator);
        }

        let cols = self.size.cols;
        let units = cycle("0123456789", cols);
        let ticks = cycle("+---------", cols);
        let mut out = String::new();

        let mut decades = String::new();
        let mut skip = 0;
        for col in 0..cols {
            if col % 10 == 0 {
                let label = (col / 10).to_string();
                skip = label.len() - 1;
                decades.push_str(&label);
            } else if skip > 0 {
                skip -= 1;
            } else {
                decades.push(' ');
            }
        }
        out.push_str(&format!("  |{decades}|  {separator}"));
        out.push_str(&format!("  |{units}|  {separator}"));
        out.push_str(&format!("--|{ticks}|--{separator}"));
        for (row, line) in self.cells.iter().enumerate() {
            let marker = if row % 10 == 0 { '+' } else { '|' };
            let text: String = line.iter().collect();
            out.push_str(&format!(
                "{:>2}{marker}{text}{marker}{:>2}{separator}",
                row % 100,
                row % 100
            ));
        }
        out.push_str(&format!("--|{ticks}|--{separator}"));
        out.push_str(&format!("  |{units}|{separator}"));
        out
    }

    fn join(&self, spans: Vec<Span>, separator: &str) -> String {
        let lines: Vec<String> = spans
            .into_iter()
            .map(|(row, cols)| cols.filter_map(|col| self.cell(row, col)).collect())
            .collect();
        lines.join(separator)
    }

    fn string_spans(&self, region: Region) -> Vec<Span> {
        let last_col = self.size.last_col();
        let mut row_start = region.row_start;
        let mut row_end = region.row_end.unwrap_or(row_start);
        if row_end < row_start {
            std::mem::swap(&mut row_start, &mut row_end);
        }
        let mut col_start = region.col_start;
        let mut col_end = region.col_end.unwrap_or(last_col);
        if region.col_end.is_some() && row_start == row_end && col_end < col_start {
            std::mem::swap(&mut col_start, &mut col_end);
        }

        if row_start == row_end {
            return vec![(row_start, col_start..=col_end)];
        }
        (row_start..=row_end)
            .map(|row| {
                if row == row_start {
                    (row, col_start..=last_col)
                } else if row == row_end {
                    (row, 0..=col_end)
                } else {
                    (row, 0..=last_col)
                }
            })
            .collect()
    }

    fn block_spans(&self, region: Region) -> Vec<Span> {
        let row_start = region.row_start;
        let row_end = region.row_end.unwrap_or(row_start);
        let mut col_start = region.col_start;
        let mut col_end = region.col_end.unwrap_or(self.size.last_col());
        if region.col_end.is_some() && col_end < col_start {
            std::mem::swap(&mut col_start, &mut col_end);
        }

        let rows: Vec<usize> = if row_end >= row_start {
            (row_start..=row_end).collect()
        } else {
            (row_end..=row_start).rev().collect()
        };
        rows.into_iter()
            .map(|row| (row, col_start..=col_end))
            .collect()
    }
}

/// Repeats `pattern` until exactly `len` characters long.
fn cycle(pattern: &str, len: usize) -> String {
    pattern.chars().cycle().take(len).collect()
}
