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

/// Screen dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TerminalSize {
    pub rows: usize,
    pub cols: usize,
}

impl TerminalSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Index of the last row, zero when the screen has no rows.
    pub fn last_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Index of the last column, zero when the screen has no columns.
    pub fn last_col(&self) -> usize {
        self.cols.saturating_sub(1)
    }
}

/// Zero based cursor location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorPosition {
    pub row: usize,
    pub col: usize,
}

impl CursorPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Inclusive screen coordinates for reads and clears.
///
/// Omitted ends take the defaults of the operation they are passed to: a
/// missing `row_end` is `row_start`, a missing `col_end` is the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub row_start: usize,
    pub col_start: usize,
    pub row_end: Option<usize>,
    pub col_end: Option<usize>,
}

impl Region {
    /// Region starting at `(row, col)` with both ends left to their defaults.
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            row_start: row,
            col_start: col,
            row_end: None,
            col_end: None,
        }
    }

    /// Region with explicit start and end corners.
    pub fn new(row_start: usize, col_start: usize, row_end: usize, col_end: usize) -> Self {
        Self {
            row_start,
            col_start,
            row_end: Some(row_end),
            col_end: Some(col_end),
        }
    }

    pub fn with_row_end(mut self, row_end: usize) -> Self {
        self.row_end = Some(row_end);
        self
    }

    pub fn with_col_end(mut self, col_end: usize) -> Self {
        self.col_end = Some(col_end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size_last_indices() {
        let size = TerminalSize::new(24, 80);
        assert_eq!(size.last_row(), 23);
        assert_eq!(size.last_col(), 79);
        assert_eq!(TerminalSize::new(0, 0).last_col(), 0);
    }

    #[test]
    fn test_cursor_position_ordering() {
        assert!(CursorPosition::new(0, 5) < CursorPosition::new(1, 0));
        assert_eq!(CursorPosition::default(), CursorPosition::new(0, 0));
    }

    #[test]
    fn test_region_builders() {
        let region = Region::at(3, 4).with_col_end(9);
        assert_eq!(region.row_end, None);
        assert_eq!(region.col_end, Some(9));
        assert_eq!(Region::new(1, 2, 3, 4), Region::at(1, 2).with_row_end(3).with_col_end(4));
    }
}
