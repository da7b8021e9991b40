//! A look-ahead agent for playing the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies ahead of the current
//! position and scores the leaves by counting open four-cell windows.
//! Two search strategies are available: alpha-beta minimax, which
//! assumes a perfect opponent, and expectimax, which assumes an opponent
//! choosing uniformly at random.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_lookahead::{board::Board, search::{Engine, Strategy}, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("3")?;
//! let mut engine = Engine::new(Player::Two, Strategy::AlphaBeta);
//! let column = engine.choose_move(&board)?;
//!
//! assert!(column < board.columns());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod movegen;

pub mod outcome;

pub mod evaluation;

pub mod search;

pub mod agent;

pub mod game;

pub mod arena;


pub use board::{Board, Cell, Player};
pub use error::{BoardError, SearchError};
pub use search::{choose_move_alpha_beta, choose_move_expectimax};

/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default number of plies searched, counting the root move
pub const MAX_DEPTH: usize = 3;

// move strings encode each column as a single digit
const_assert!(WIDTH <= 10);
const_assert!(MAX_DEPTH >= 1);
