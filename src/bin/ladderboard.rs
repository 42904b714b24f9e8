//! Terminal demo: autoplays the classic board.
//!
//! Options: --seed, --max-turns, --instant
//!
//! Build with `--features cli`.

use std::process::ExitCode;

use clap::Parser;
use ladderboard::render::describe;
use ladderboard::{present_turn, Board, BoardRenderer, GameEvent, Pacing, Phase, TurnEngine};

#[derive(Parser, Debug)]
#[command(name = "ladderboard")]
#[command(author, version, about = "Autoplay a game of snakes and ladders", long_about = None)]
struct Args {
    /// Seed for the die
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many turns even without a winner
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Skip presentation delays
    #[arg(long)]
    instant: bool,
}

/// Prints status lines as they happen.
struct Terminal;

impl BoardRenderer for Terminal {
    fn render(&mut self, board: &Board, event: &GameEvent) {
        for line in describe(event) {
            match board.layout().cell_of(event.position) {
                Some(cell) => {
                    println!(
                        "[{:>3} r{} c{}] {}",
                        event.position.number(),
                        cell.row,
                        cell.col,
                        line
                    );
                }
                None => println!("{}", line),
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let board = match Board::classic() {
        Ok(board) => board,
        Err(err) => {
            log::error!("invalid board: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let pacing = if args.instant { Pacing::instant() } else { Pacing::default() };
    let mut engine = TurnEngine::seeded(board, args.seed);
    let mut terminal = Terminal;

    let start = engine.reset();
    terminal.render(engine.board(), &start);
    while engine.state().turns < args.max_turns {
        match present_turn(&mut engine, &mut terminal, &pacing) {
            Ok(Phase::Won) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    log::warn!("no winner after {} turns", args.max_turns);
    ExitCode::SUCCESS
}
