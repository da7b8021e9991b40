//! Fixed-depth game tree search
//!
//! Both strategies walk the same tree: moves come from [`enumerate_moves`],
//! a branch stops at the depth limit or at a terminal position, and leaves
//! are scored by [`evaluate`] from the engine player's point of view. They
//! differ only in how the opponent's replies are combined.

use log::{debug, info};

use crate::board::{Board, Player};
use crate::error::SearchError;
use crate::evaluation::evaluate;
use crate::movegen::{enumerate_moves, Move};
use crate::outcome::{is_terminal, winner};
use crate::MAX_DEPTH;

/// How the opponent's replies are combined
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The opponent plays the reply worst for us; branches are pruned with
    /// an alpha-beta window
    AlphaBeta,
    /// The opponent plays uniformly at random; every reply is visited and
    /// the mean is taken
    Expectimax,
}

impl Strategy {
    fn prunes(self) -> bool {
        self == Strategy::AlphaBeta
    }
}

/// The best root move found by a search
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub column: usize,
    pub score: f64,
}

/// A fixed-depth searcher playing for one player
///
/// # Depth
/// The root move counts as the first ply. With the default `MAX_DEPTH` of 3
/// the engine looks at its own move, every reply, and every answer to that
/// reply before evaluating.
///
/// # Cutoffs
/// When an alpha-beta node is cut off it returns an infinite score rather
/// than the best value seen so far: `+inf` from our nodes, `-inf` from the
/// opponent's. Such scores only mean "at least as good as the bound" (or "at
/// most"), so a root move scored `-inf` is simply not better than the
/// current best.
#[derive(Clone, Debug)]
pub struct Engine {
    player: Player,
    strategy: Strategy,
    max_depth: usize,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    pub fn new(player: Player, strategy: Strategy) -> Self {
        Self {
            player,
            strategy,
            max_depth: MAX_DEPTH,
            node_count: 0,
        }
    }

    /// Sets the number of plies searched, counting the root move
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the column of the best move on `board`
    pub fn choose_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        self.search(board).map(|result| result.column)
    }

    /// Searches every root move and returns the best one with its score
    ///
    /// Moves are tried left to right and a later move must score strictly
    /// higher to replace an earlier one, so ties go to the lower column.
    pub fn search(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        if let Some(player) = winner(board, self.player.other()) {
            return Err(SearchError::GameOver(player));
        }
        if board.is_full() {
            return Err(SearchError::NoMoves);
        }

        let start_count = self.node_count;
        let mut best: Option<SearchResult> = None;

        for (column, score) in self.root_scores(board) {
            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult { column, score });
            }
        }

        let best = best.ok_or(SearchError::NoMoves)?;
        debug!(
            "{}: searched {} nodes",
            self.player,
            self.node_count - start_count
        );
        info!("{} AI: {}", self.player, best.column);
        Ok(best)
    }

    /// Scores every root move in column order
    ///
    /// With alpha-beta a move that cannot beat an earlier one is cut off and
    /// scored `-inf`.
    pub(crate) fn root_scores(&mut self, board: &Board) -> Vec<(usize, f64)> {
        let mut scores = Vec::with_capacity(board.columns());
        let mut alpha = f64::NEG_INFINITY;

        for Move { column, board: child } in enumerate_moves(board, self.player) {
            // the root move itself is the first ply
            let score = self.value(&child, false, 1, alpha, f64::INFINITY);
            debug!("{}: column {} scored {}", self.player, column, score);

            // the best root score so far is the lower bound for the rest
            alpha = alpha.max(score);
            scores.push((column, score));
        }
        scores
    }

    fn mover(&self, root_to_move: bool) -> Player {
        if root_to_move {
            self.player
        } else {
            self.player.other()
        }
    }

    /// Scores `board` by searching from `depth` down to the depth limit
    ///
    /// `root_to_move` is true at our nodes and false at the opponent's.
    pub(crate) fn value(
        &mut self,
        board: &Board,
        root_to_move: bool,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.node_count += 1;

        if depth >= self.max_depth || is_terminal(board, self.mover(!root_to_move)) {
            return evaluate(board, self.player, root_to_move);
        }

        let mover = self.mover(root_to_move);
        let prunes = self.strategy.prunes();

        if root_to_move {
            let mut max = f64::NEG_INFINITY;
            for Move { board: child, .. } in enumerate_moves(board, mover) {
                let score = self.value(&child, false, depth + 1, alpha, beta);
                if score > max {
                    max = score;
                    alpha = alpha.max(max);
                }
                if prunes && score >= beta {
                    return f64::INFINITY;
                }
            }
            return max;
        }

        match self.strategy {
            Strategy::AlphaBeta => {
                let mut min = f64::INFINITY;
                for Move { board: child, .. } in enumerate_moves(board, mover) {
                    let score = self.value(&child, true, depth + 1, alpha, beta);
                    if score < min {
                        min = score;
                        beta = beta.min(min);
                    }
                    if score <= alpha {
                        return f64::NEG_INFINITY;
                    }
                }
                min
            }
            Strategy::Expectimax => {
                let (mut total, mut count) = (0.0, 0usize);
                for Move { board: child, .. } in enumerate_moves(board, mover) {
                    total += self.value(&child, true, depth + 1, alpha, beta);
                    count += 1;
                }
                total / count as f64
            }
        }
    }
}

/// Chooses a column for `player` with alpha-beta minimax at the default depth
pub fn choose_move_alpha_beta(board: &Board, player: Player) -> Result<usize, SearchError> {
    Engine::new(player, Strategy::AlphaBeta).choose_move(board)
}

/// Chooses a column for `player` with expectimax at the default depth
pub fn choose_move_expectimax(board: &Board, player: Player) -> Result<usize, SearchError> {
    Engine::new(player, Strategy::Expectimax).choose_move(board)
}
