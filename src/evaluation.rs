//! Static evaluation of positions
//!
//! # Scoring
//! Every window of four tiles (see [`outcome::windows`]) that holds pieces of
//! only one player is worth `n^6` points to that player, where `n` is the
//! number of their pieces in it. Windows holding pieces of both players are
//! dead and score nothing. A position scores the root player's points minus
//! the opponent's points, offset by `±WIN_SCORE` when someone has already
//! won.

use crate::board::{Board, Player};
use crate::outcome;

/// Magnitude of the offset given to won positions
pub const WIN_SCORE: f64 = 100_000.0;

/// Power applied to the piece count of each live window
pub const WINDOW_EXPONENT: u32 = 6;

/// Window points of (`player`, opponent) on `board`
pub fn window_points(board: &Board, player: Player) -> (u64, u64) {
    let (own_id, other_id) = (player.id(), player.other().id());
    let mut points = (0, 0);

    for window in outcome::windows(board.rows(), board.columns()) {
        let (mut own, mut other) = (0u64, 0u64);
        for &(row, column) in window.iter() {
            match board.get(row, column) {
                c if c == own_id => own += 1,
                c if c == other_id => other += 1,
                _ => {}
            }
        }
        if other == 0 {
            points.0 += own.pow(WINDOW_EXPONENT);
        }
        if own == 0 {
            points.1 += other.pow(WINDOW_EXPONENT);
        }
    }
    points
}

/// Scores `board` from the point of view of `root`
///
/// `root_to_move` tells whose turn it is: when true the position was reached
/// by the opponent's move, otherwise by `root`'s. The sign is always relative
/// to `root`, whoever is on move.
///
/// Drawn positions score exactly 0. Won positions score `±WIN_SCORE` plus
/// the window points.
pub fn evaluate(board: &Board, root: Player, root_to_move: bool) -> f64 {
    let last_mover = if root_to_move { root.other() } else { root };

    let offset = match outcome::winner(board, last_mover) {
        Some(player) if player == root => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None if board.is_full() => return 0.0,
        None => 0.0,
    };

    let (own, other) = window_points(board, root);
    offset + own as f64 - other as f64
}
