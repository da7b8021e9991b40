//! Terminal and win detection
//!
//! Every check rescans the whole board. Boards are small and the search
//! depth is bounded, so no incremental state is kept between calls.

use crate::board::{Board, Player};

/// The length of a winning alignment
pub const WINDOW: usize = 4;

// (row step, column step): horizontal, vertical, diagonal \ and diagonal /
static DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A run of `WINDOW` adjacent tiles as (row, column) pairs
pub type Window = [(usize, usize); WINDOW];

/// Iterates over every run of `WINDOW` tiles along a row, a column or either
/// diagonal direction of a `rows` x `columns` board
///
/// Every diagonal long enough to hold a window is covered, not only the
/// main diagonals.
pub fn windows(rows: usize, columns: usize) -> impl Iterator<Item = Window> {
    (0..rows)
        .flat_map(move |row| (0..columns).map(move |column| (row, column)))
        .flat_map(move |(row, column)| {
            DIRECTIONS
                .iter()
                .filter_map(move |&step| window_from(rows, columns, (row, column), step))
        })
}

fn window_from(
    rows: usize,
    columns: usize,
    (row, column): (usize, usize),
    (row_step, column_step): (isize, isize),
) -> Option<Window> {
    let reach = (WINDOW - 1) as isize;
    let end_row = row as isize + row_step * reach;
    let end_column = column as isize + column_step * reach;
    if end_row < 0 || end_row >= rows as isize || end_column < 0 || end_column >= columns as isize {
        return None;
    }

    let mut window = [(0, 0); WINDOW];
    for (i, tile) in window.iter_mut().enumerate() {
        *tile = (
            (row as isize + row_step * i as isize) as usize,
            (column as isize + column_step * i as isize) as usize,
        );
    }
    Some(window)
}

/// Whether `player` has four or more pieces in a line anywhere on the board
pub fn player_won(board: &Board, player: Player) -> bool {
    let id = player.id();
    windows(board.rows(), board.columns())
        .any(|window| window.iter().all(|&(row, column)| board.get(row, column) == id))
}

/// Whether the game is over after `last_mover` played into `board`
///
/// Only the last mover can have created a new alignment, so only their
/// pieces are checked.
pub fn is_terminal(board: &Board, last_mover: Player) -> bool {
    board.is_full() || player_won(board, last_mover)
}

/// Returns the player holding an alignment, checking `last_mover` first
pub fn winner(board: &Board, last_mover: Player) -> Option<Player> {
    [last_mover, last_mover.other()]
        .iter()
        .copied()
        .find(|&player| player_won(board, player))
}
