use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};

use std::io::{stdout, Write};

use connect4_lookahead::arena::{run_match, AgentKind, MatchConfig};
use connect4_lookahead::game::{Game, GameState};
use connect4_lookahead::*;

mod display;
use display::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Controller {
    AlphaBeta,
    Expectimax,
    Random,
    Human,
}

impl From<Controller> for AgentKind {
    fn from(controller: Controller) -> Self {
        match controller {
            Controller::AlphaBeta => AgentKind::AlphaBeta,
            Controller::Expectimax => AgentKind::Expectimax,
            Controller::Random => AgentKind::Random,
            Controller::Human => AgentKind::Human,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "connect4_lookahead", about = "Play Connect 4 against a look-ahead AI")]
struct Args {
    /// Number of board rows
    #[arg(long, default_value_t = HEIGHT)]
    rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = WIDTH)]
    columns: usize,

    /// Plies searched by AI players, counting their own move
    #[arg(long, default_value_t = MAX_DEPTH)]
    depth: usize,

    /// Who controls player 1
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    player_one: Controller,

    /// Who controls player 2
    #[arg(long, value_enum, default_value_t = Controller::AlphaBeta)]
    player_two: Controller,

    /// Starting position as a string of 0-indexed columns
    #[arg(long)]
    moves: Option<String>,

    /// Play this many games without drawing the board and report the tally
    #[arg(long)]
    games: Option<usize>,

    /// Seed for random players
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Hide the progress bar of batch matches
    #[arg(long)]
    quiet: bool,

    /// Log every root move score
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if args.rows == 0 || args.columns == 0 {
        return Err(anyhow!("the board needs at least one row and one column"));
    }

    let kinds = [AgentKind::from(args.player_one), AgentKind::from(args.player_two)];

    if let Some(games) = args.games {
        let config = MatchConfig {
            games,
            rows: args.rows,
            columns: args.columns,
            max_depth: args.depth,
            seed: args.seed,
            progress: !args.quiet,
        };
        let result = run_match(kinds, &config)?;
        println!(
            "Player 1 ({:?}) wins: {}, Player 2 ({:?}) wins: {}, draws: {}",
            args.player_one, result.player_one_wins, args.player_two, result.player_two_wins, result.draws
        );
        return Ok(());
    }

    let mut game = match &args.moves {
        Some(moves) => {
            let board = Board::with_size(args.rows, args.columns).play_moves(moves)?;
            // player one moves first, so an odd number of pieces means player two is next
            let to_move = if board.piece_count() % 2 == 0 { Player::One } else { Player::Two };
            Game::from_position(board, to_move)
        }
        None => Game::new(Board::with_size(args.rows, args.columns)),
    };

    let mut agents = [
        kinds[0].build(Player::One, args.depth, args.seed),
        kinds[1].build(Player::Two, args.depth, args.seed.wrapping_add(1)),
    ];

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display(game.board())?;

        match game.state() {
            GameState::Playing => {
                let agent = match game.to_move() {
                    Player::One => &mut agents[0],
                    Player::Two => &mut agents[1],
                };

                if kinds[game.to_move() as usize] != AgentKind::Human {
                    println!("{} is thinking...", agent.name());
                    stdout().flush()?;
                }

                let column = agent.select_move(game.board())?;
                if let Err(err) = game.play_checked(column) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::Won(player) => {
                println!("{} wins!", player);
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
