use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use std::io::{stdin, stdout, Write};
use std::time::Instant;

use connectn_ai::search::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};
use connectn_ai::{Player, Rules, Searcher, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};

mod bench;
mod session;
use session::{GameSession, GameState};

/// Play a connect-N game against a depth-bounded tree search agent
#[derive(Parser)]
#[command(name = "connectn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board height in tiles (3 to 8)
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board width in tiles (3 to 8)
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Number of connected tiles needed to win
    #[arg(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Ignore diagonal runs when checking for a win
    #[arg(long)]
    no_diagonals: bool,

    /// Look-ahead depth in plies (1 to 12)
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: usize,

    /// Which side makes the first move
    #[arg(long, value_enum, default_value_t = FirstMove::Human)]
    first: FirstMove,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FirstMove {
    Human,
    Computer,
    Random,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the engine against itself and report the results
    Bench {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = Rules::new(cli.rows, cli.columns, cli.win_length).with_diagonal(!cli.no_diagonals);
    let depth = cli.depth.clamp(1, MAX_SEARCH_DEPTH);

    if let Some(Commands::Bench { games }) = cli.command {
        return bench::run(rules, depth, games);
    }

    let stdin = stdin();

    println!("Welcome to Connect {}\n", rules.win_length());

    let computer = match cli.first {
        FirstMove::Human => Player::Two,
        FirstMove::Computer => Player::One,
        FirstMove::Random => {
            if fastrand::bool() {
                Player::One
            } else {
                Player::Two
            }
        }
    };

    let mut searcher = Searcher::new(&rules);

    loop {
        let mut session = GameSession::new(&rules);

        // game loop
        loop {
            session.display()?;

            match session.state {
                GameState::Playing => {
                    let next_move = if session.to_move == computer {
                        // AI player
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        let start = Instant::now();
                        let result = searcher.decide(session.grid(), session.to_move, depth)?;
                        let elapsed = Instant::now() - start;

                        println!(
                            "Best move: {} (score {:.0}, {} nodes in {:.2}s)",
                            result.best_column + 1,
                            result.score,
                            searcher.node_count,
                            elapsed.as_secs_f64()
                        );
                        result.best_column + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                    if let Err(err) = session.play_checked(next_move) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }

                // end states
                GameState::PlayerOneWin | GameState::PlayerTwoWin => {
                    let winner = if session.state == GameState::PlayerOneWin {
                        Player::One
                    } else {
                        Player::Two
                    };
                    if winner == computer {
                        println!("You lose!");
                    } else {
                        println!("You won!");
                    }
                    break;
                }
                GameState::Draw => {
                    println!("Draw!");
                    break;
                }
            }
        }

        // play again?
        loop {
            let mut buffer = String::new();
            print!("Play again? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => break,
                Some(_letter @ 'n') => return Ok(()),
                _ => println!("Unknown answer given"),
            }
        }
    }
}
