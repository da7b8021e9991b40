use thiserror::Error;

use crate::board::Player;

/// Errors raised when reading or changing a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Invalid move, column {column} out of range. Columns must be between 0 and {max}")]
    ColumnOutOfRange { column: usize, max: usize },

    #[error("Invalid move, column {0} full")]
    InvalidColumn(usize),

    #[error("invalid cell value {0}")]
    InvalidCell(u8),

    #[error("floating piece at ({row}, {column})")]
    FloatingPiece { row: usize, column: usize },

    #[error("rows have different lengths")]
    RaggedRows,

    #[error("board must have at least one row and one column")]
    EmptyBoard,

    #[error("could not parse '{0}' as a valid move")]
    Parse(char),

    #[error("Invalid move, game is over")]
    GameOver,
}

/// Errors raised when a search is started on a finished position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no legal moves, the board is full")]
    NoMoves,

    #[error("no search possible, {0} has already won")]
    GameOver(Player),
}
