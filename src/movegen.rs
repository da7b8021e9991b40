//! Enumeration of the moves available in a position

use crate::board::{Board, Player};

/// A legal drop and the position it leads to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub board: Board,
}

/// Iterator over the legal moves of one player, in ascending column order
///
/// The column order is what breaks ties between equally scored moves at the
/// root of a search, so it must not be changed.
pub struct MoveGenerator<'a> {
    board: &'a Board,
    player: Player,
    column: usize,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board, player: Player) -> Self {
        Self {
            board,
            player,
            column: 0,
        }
    }
}

impl Iterator for MoveGenerator<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        while self.column < self.board.columns() {
            let column = self.column;
            self.column += 1;
            // full columns produce no move
            if self.board.playable(column) {
                return Some(Move {
                    column,
                    board: self.board.with_move(column, self.player),
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.columns() - self.column))
    }
}

/// Returns every move `player` can make on `board`, one per non-full column
pub fn enumerate_moves(board: &Board, player: Player) -> MoveGenerator<'_> {
    MoveGenerator::new(board, player)
}
