//! Sources of moves: the search engine, a random mover and a human at a prompt

use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use std::io::{BufRead, Write};

use crate::board::{Board, Player};
use crate::search::{Engine, Strategy};

/// Anything that can pick a column for the side to move
pub trait Agent {
    fn select_move(&mut self, board: &Board) -> Result<usize>;

    fn name(&self) -> String;
}

/// Plays the move chosen by a look-ahead search
pub struct AiAgent {
    engine: Engine,
}

impl AiAgent {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Agent for AiAgent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        Ok(self.engine.choose_move(board)?)
    }

    fn name(&self) -> String {
        match self.engine.strategy() {
            Strategy::AlphaBeta => format!("{} AI", self.engine.player()),
            Strategy::Expectimax => format!("{} Expectimax AI", self.engine.player()),
        }
    }
}

/// Chooses uniformly among the playable columns
pub struct RandomAgent<R: Rng> {
    player: Player,
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(player: Player, rng: R) -> Self {
        Self { player, rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        board
            .playable_columns()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("no playable columns left"))
    }

    fn name(&self) -> String {
        format!("{} Random", self.player)
    }
}

/// Reads moves typed by a person, asking again until a playable column is given
pub struct HumanAgent<I: BufRead, O: Write> {
    player: Player,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> HumanAgent<I, O> {
    pub fn new(player: Player, input: I, output: O) -> Self {
        Self {
            player,
            input,
            output,
        }
    }
}

impl<I: BufRead, O: Write> Agent for HumanAgent<I, O> {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        let valid_columns = board.playable_columns();

        loop {
            write!(self.output, "{} move: ", self.name())?;
            self.output.flush()?;

            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(anyhow!("input closed before {} moved", self.player));
            }

            match buffer.trim().parse::<usize>() {
                Ok(column) if valid_columns.contains(&column) => return Ok(column),
                _ => writeln!(self.output, "Choose a column from: {:?}", valid_columns)?,
            }
        }
    }

    fn name(&self) -> String {
        format!("{} Human", self.player)
    }
}
