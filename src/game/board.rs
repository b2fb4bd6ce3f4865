use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of the runs the win check and the heuristic look for.
pub const WINDOW_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// A Connect Four grid. Row 0 is the bottom row, so gravity means every
/// column's occupied cells form a contiguous run starting at row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff a piece can be dropped in this column. Fails closed for
    /// out-of-range columns.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// The lowest empty row in a column, or `None` if the column is full
    /// or out of range.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        match self.next_open_row(col) {
            Some(row) => {
                self.cells[row][col] = cell;
                Ok(row)
            }
            None => Err(MoveError::ColumnFull),
        }
    }

    /// Successor board with one piece dropped. The receiver is untouched,
    /// so sibling search branches never observe each other's moves.
    pub fn child(&self, col: usize, cell: Cell) -> Result<Board, MoveError> {
        let mut next = *self;
        next.drop_piece(col, cell)?;
        Ok(next)
    }

    /// All columns a piece can be dropped in, in ascending order. The
    /// search relies on this order for deterministic tie-breaking.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_move(col))
    }

    /// True iff this cell appears four in a row anywhere on the board,
    /// horizontally, vertically, or along either diagonal.
    pub fn has_won(&self, cell: Cell) -> bool {
        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.cells[row][col + i] == cell) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.cells[row + i][col] == cell) {
                    return true;
                }
            }
        }

        // Diagonal, rising left to right
        for row in 0..=ROWS - WINDOW_LENGTH {
            for col in 0..=COLS - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.cells[row + i][col + i] == cell) {
                    return true;
                }
            }
        }

        // Diagonal, falling left to right
        for row in WINDOW_LENGTH - 1..ROWS {
            for col in 0..=COLS - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.cells[row - i][col + i] == cell) {
                    return true;
                }
            }
        }

        false
    }

    /// True iff the game is over: a win for either side, or no legal
    /// moves remain.
    pub fn is_terminal(&self) -> bool {
        self.has_won(Cell::X) || self.has_won(Cell::O) || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let c = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, "{col} ")?;
        }
        Ok(())
    }
}
