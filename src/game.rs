//! Turn-by-turn play of a single game

use anyhow::Result;
use log::debug;

use crate::agent::Agent;
use crate::board::{Board, Player};
use crate::error::BoardError;
use crate::outcome;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// A board together with the side to move and the moves played so far
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    state: GameState,
    moves: Vec<usize>,
}

impl Game {
    /// Starts a game on `board` with player one to move
    pub fn new(board: Board) -> Self {
        Self::from_position(board, Player::One)
    }

    /// Starts a game on `board` with `to_move` to move
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let state = match outcome::winner(&board, to_move.other()) {
            Some(player) => GameState::Won(player),
            None if board.is_full() => GameState::Draw,
            None => GameState::Playing,
        };
        Self {
            board,
            to_move,
            state,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The columns played since the game started
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Drops a piece for the side to move and passes the turn
    pub fn play_checked(&mut self, column: usize) -> Result<GameState, BoardError> {
        if self.state != GameState::Playing {
            return Err(BoardError::GameOver);
        }

        self.board = self.board.play_checked(column, self.to_move)?;
        self.moves.push(column);

        self.state = if outcome::player_won(&self.board, self.to_move) {
            GameState::Won(self.to_move)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = self.to_move.other();

        Ok(self.state)
    }

    /// Plays until the game ends, asking `agents[0]` for player one's moves
    /// and `agents[1]` for player two's
    ///
    /// `on_move` is called after every move with the updated game and the
    /// column that was played.
    pub fn play_out<A: Agent + ?Sized>(
        &mut self,
        agents: &mut [Box<A>; 2],
        mut on_move: impl FnMut(&Game, usize),
    ) -> Result<GameState> {
        while self.state == GameState::Playing {
            let agent = match self.to_move {
                Player::One => &mut agents[0],
                Player::Two => &mut agents[1],
            };
            let column = agent.select_move(&self.board)?;
            debug!("{}: {}", agent.name(), column);

            self.play_checked(column)?;
            on_move(self, column);
        }
        Ok(self.state)
    }
}
