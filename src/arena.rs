//! Batches of games between two kinds of agent
//!
//! Games run in parallel on the rayon thread pool. Each game and each
//! search inside it stays single-threaded.

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use std::io::{stdin, stdout, BufReader};

use crate::agent::{Agent, AiAgent, HumanAgent, RandomAgent};
use crate::board::{Board, Player};
use crate::game::{Game, GameState};
use crate::search::{Engine, Strategy};
use crate::{HEIGHT, MAX_DEPTH, WIDTH};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgentKind {
    AlphaBeta,
    Expectimax,
    Random,
    Human,
}

impl AgentKind {
    /// Builds an agent of this kind playing for `player`
    ///
    /// `seed` only affects random agents. Human agents read from stdin.
    pub fn build(self, player: Player, max_depth: usize, seed: u64) -> Box<dyn Agent + Send> {
        match self {
            AgentKind::AlphaBeta => Box::new(AiAgent::new(
                Engine::new(player, Strategy::AlphaBeta).with_max_depth(max_depth),
            )),
            AgentKind::Expectimax => Box::new(AiAgent::new(
                Engine::new(player, Strategy::Expectimax).with_max_depth(max_depth),
            )),
            AgentKind::Random => Box::new(RandomAgent::new(player, StdRng::seed_from_u64(seed))),
            AgentKind::Human => Box::new(HumanAgent::new(player, BufReader::new(stdin()), stdout())),
        }
    }
}

/// Settings for [`run_match`]
#[derive(Clone, Debug)]
pub struct MatchConfig {
    pub games: usize,
    pub rows: usize,
    pub columns: usize,
    pub max_depth: usize,
    /// Base seed, game `i` seeds its random agents with `seed + i`
    pub seed: u64,
    /// Draw a progress bar on the terminal
    pub progress: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            rows: HEIGHT,
            columns: WIDTH,
            max_depth: MAX_DEPTH,
            seed: 0,
            progress: true,
        }
    }
}

/// Tally of finished games, from player one's seat
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
}

impl MatchResult {
    pub fn games(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.draws
    }

    fn record(&mut self, state: GameState) {
        match state {
            GameState::Won(Player::One) => self.player_one_wins += 1,
            GameState::Won(Player::Two) => self.player_two_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::Playing => {}
        }
    }
}

/// Plays `config.games` games from an empty board, `kinds[0]` moving first
pub fn run_match(kinds: [AgentKind; 2], config: &MatchConfig) -> Result<MatchResult> {
    if kinds.contains(&AgentKind::Human) {
        return Err(anyhow!("human players cannot take part in a batch match"));
    }

    let progress = if config.progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let states = (0..config.games)
        .into_par_iter()
        .map(|i| -> Result<GameState> {
            let seed = config.seed.wrapping_add(i as u64);
            let mut agents = [
                kinds[0].build(Player::One, config.max_depth, seed),
                kinds[1].build(Player::Two, config.max_depth, seed.wrapping_add(1 << 32)),
            ];
            let mut game = Game::new(Board::with_size(config.rows, config.columns));
            let state = game.play_out(&mut agents, |_, _| {})?;
            progress.inc(1);
            Ok(state)
        })
        .collect::<Result<Vec<GameState>>>()?;

    progress.finish();

    let mut result = MatchResult::default();
    for state in states {
        result.record(state);
    }
    info!(
        "{:?} vs {:?}: {} wins, {} losses, {} draws",
        kinds[0], kinds[1], result.player_one_wins, result.player_two_wins, result.draws
    );
    Ok(result)
}
