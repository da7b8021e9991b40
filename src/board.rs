use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::outcome;
use crate::{HEIGHT, WIDTH};

/// The contents of a single tile, `EMPTY` or a player id
pub type Cell = u8;

/// The value of an unoccupied tile
pub const EMPTY: Cell = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The value this player's pieces take on the board
    pub fn id(self) -> Cell {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The opposing player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// A grid of tiles with gravity
///
/// # Notes
/// Rows are indexed from the top (row 0) to the bottom (row `rows - 1`), so
/// pieces fall towards the highest row index. Within a column the occupied
/// tiles are always contiguous from the bottom row upwards.
///
/// A `Board` is a value: playing a move produces a new `Board` and leaves the
/// original untouched.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    // cells are stored row by row, top to bottom
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the default size
    pub fn new() -> Self {
        Self::with_size(HEIGHT, WIDTH)
    }

    /// Creates an empty board with the given dimensions
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn with_size(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "board dimensions must be non-zero");
        Self {
            rows,
            columns,
            cells: vec![EMPTY; rows * columns],
        }
    }

    /// Creates a board from rows of cell values, top row first
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let columns = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if columns == 0 {
            return Err(BoardError::EmptyBoard);
        }

        let mut cells = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(BoardError::RaggedRows);
            }
            if let Some(&bad) = row.iter().find(|&&c| c != EMPTY && Player::from_id(c).is_none()) {
                return Err(BoardError::InvalidCell(bad));
            }
            cells.extend_from_slice(row);
        }

        let board = Self {
            rows: rows.len(),
            columns,
            cells,
        };

        // every piece must rest on the bottom or on another piece
        for column in 0..board.columns {
            for row in 0..board.rows - 1 {
                if board.get(row, column) != EMPTY && board.get(row + 1, column) == EMPTY {
                    return Err(BoardError::FloatingPiece { row, column });
                }
            }
        }
        Ok(board)
    }

    /// Builds a board straight from a grid, skipping the gravity check
    #[cfg(test)]
    pub(crate) fn from_grid(grid: Vec<Vec<Cell>>) -> Self {
        let rows = grid.len();
        let columns = grid[0].len();
        Self {
            rows,
            columns,
            cells: grid.into_iter().flatten().collect(),
        }
    }

    /// Creates a default-sized board by playing a string of column digits,
    /// alternating from player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, BoardError> {
        Self::new().play_moves(moves)
    }

    /// Plays a string of column digits onto a copy of this board
    ///
    /// Player one moves first on a board with an even number of pieces,
    /// player two otherwise.
    pub fn play_moves<S: AsRef<str>>(&self, moves: S) -> Result<Self, BoardError> {
        let mut board = self.clone();
        let mut player = if board.piece_count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };

        for column_char in moves.as_ref().chars() {
            // abort if the position was already won
            if outcome::player_won(&board, player.other()) {
                return Err(BoardError::GameOver);
            }
            match column_char.to_digit(10) {
                Some(column) => {
                    board = board.play_checked(column as usize, player)?;
                    player = player.other();
                }
                _ => return Err(BoardError::Parse(column_char)),
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Bounds-checked read of a single tile
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || column >= self.columns {
            return Err(BoardError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.get(row, column))
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    /// Whether a piece can still be dropped into `column`
    pub fn playable(&self, column: usize) -> bool {
        column < self.columns && self.get(0, column) == EMPTY
    }

    /// All columns that can still take a piece, left to right
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.columns).filter(|&c| self.playable(c)).collect()
    }

    /// The row a piece dropped into `column` would come to rest in
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, column) == EMPTY)
    }

    /// Returns a copy of this board with a piece of `player` dropped into `column`
    ///
    /// # Panics
    /// `column` must be playable. Use [`Board::play_checked`] for untrusted input.
    pub fn with_move(&self, column: usize, player: Player) -> Board {
        let row = self
            .landing_row(column)
            .expect("with_move called on a full column");
        let mut next = self.clone();
        next.cells[row * self.columns + column] = player.id();
        next
    }

    /// Like [`Board::with_move`], but reports unplayable columns as errors
    pub fn play_checked(&self, column: usize, player: Player) -> Result<Board, BoardError> {
        if column >= self.columns {
            return Err(BoardError::ColumnOutOfRange {
                column,
                max: self.columns - 1,
            });
        }
        if !self.playable(column) {
            return Err(BoardError::InvalidColumn(column));
        }
        Ok(self.with_move(column, player))
    }

    /// Whether every tile is occupied
    ///
    /// Pieces never float, so checking the top row is enough.
    pub fn is_full(&self) -> bool {
        self.cells[..self.columns].iter().all(|&c| c != EMPTY)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                match self.get(row, column) {
                    EMPTY => write!(f, ".")?,
                    id => write!(f, "{}", id)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses one line per row, top row first, with `.` or `0` for empty tiles
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Ok(EMPTY),
                        _ => c
                            .to_digit(10)
                            .map(|d| d as Cell)
                            .ok_or(BoardError::Parse(c)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }
}
