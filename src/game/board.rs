use std::fmt;

use tracing::debug;

use super::Player;
use crate::error::BoardError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// Length of a winning line. Also the smallest allowed board dimension.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// Discrete value used by exports and renderers: 0, 1 or 2.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Player1 => 1,
            Cell::Player2 => 2,
        }
    }

    pub fn from_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Player1),
            2 => Some(Cell::Player2),
            _ => None,
        }
    }
}

/// A Connect Four grid. Row 0 is the bottom row.
///
/// Cells are stored row-major. Pieces are only ever placed through
/// [`Board::drop_piece`], so no cell sits above an empty cell as long as
/// callers place at [`Board::next_open_row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must be at least four.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows < WIN_LENGTH || columns < WIN_LENGTH {
            return Err(BoardError::InvalidDimension { rows, columns });
        }
        debug!(rows, columns, "creating board");
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) is outside a {}x{} board",
            self.rows,
            self.columns
        );
        row * self.columns + column
    }

    fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.columns {
            return Err(BoardError::OutOfRange {
                column,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// True iff the top cell of the column is empty.
    pub fn is_column_playable(&self, column: usize) -> Result<bool, BoardError> {
        self.check_column(column)?;
        Ok(self.get(self.rows - 1, column) == Cell::Empty)
    }

    /// Lowest empty row in the column, scanning up from row 0.
    pub fn next_open_row(&self, column: usize) -> Result<usize, BoardError> {
        self.check_column(column)?;
        (0..self.rows)
            .find(|&row| self.get(row, column) == Cell::Empty)
            .ok_or(BoardError::ColumnFull { column })
    }

    /// Place the player's piece at `(row, column)`.
    ///
    /// No legality check is done here; callers pick the row with
    /// [`Board::next_open_row`]. Replaying exported data relies on this.
    pub fn drop_piece(&mut self, row: usize, column: usize, player: Player) {
        debug!(player = player.number(), row, column, "placing piece");
        let idx = self.index(row, column);
        self.cells[idx] = player.to_cell();
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.get(self.rows - 1, column) == Cell::Empty)
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.playable_columns().is_empty()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Row-major cell values, bottom row first.
    pub fn flatten(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.value()).collect()
    }

    /// Whether `player` owns four consecutive cells in any direction.
    pub fn check_win(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let last_row = self.rows - WIN_LENGTH;
        let last_col = self.columns - WIN_LENGTH;

        // Horizontal, vertical, rising diagonal, falling diagonal.
        self.any_window(0..self.rows, 0..=last_col, (0, 1), cell)
            || self.any_window(0..=last_row, 0..self.columns, (1, 0), cell)
            || self.any_window(0..=last_row, 0..=last_col, (1, 1), cell)
            || self.any_window(WIN_LENGTH - 1..self.rows, 0..=last_col, (-1, 1), cell)
    }

    /// Scan every window of length four whose first cell lies in
    /// `rows × cols` and that extends by `(d_row, d_col)` per step. The
    /// start ranges must keep the whole window on the board.
    fn any_window(
        &self,
        rows: impl Iterator<Item = usize> + Clone,
        mut cols: impl Iterator<Item = usize>,
        (d_row, d_col): (isize, usize),
        cell: Cell,
    ) -> bool {
        cols.any(|col| {
            rows.clone().any(|row| {
                (0..WIN_LENGTH).all(|step| {
                    let r = row.checked_add_signed(d_row * step as isize);
                    r.is_some_and(|r| self.get(r, col + d_col * step) == cell)
                })
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLUMNS],
        }
    }
}

impl fmt::Display for Board {
    /// Top row first, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            let line: Vec<String> = (0..self.columns)
                .map(|col| self.get(row, col).value().to_string())
                .collect();
            writeln!(f, "[{}]", line.join(" "))?;
        }
        Ok(())
    }
}
