use anyhow::Result;
use indicatif::*;
use rayon::prelude::*;

use std::sync::mpsc::channel;
use std::thread;
use std::time::{Duration, Instant};

use connectn_ai::{Player, Rules, Searcher, WinDetector};

// the plies played from the book of chance before the engines take over
const RANDOM_OPENING_PLIES: usize = 4;

struct GameReport {
    winner: Option<Player>,
    moves: usize,
    nodes: usize,
}

enum Message {
    Game(GameReport),
    Finish,
}

/// Plays the engine against itself and prints result and throughput
/// statistics
pub fn run(rules: Rules, depth: usize, games: usize) -> Result<()> {
    let start = Instant::now();
    let mut next_time = start;

    let (tx, rx) = channel();

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {msg} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    thread::spawn(move || {
        (0..games as u64)
            .into_par_iter()
            .for_each_with(tx.clone(), |tx, seed| {
                tx.send(Message::Game(play_game(&rules, depth, seed))).unwrap();
            });
        tx.send(Message::Finish).unwrap();
    });

    let mut reports = Vec::new();
    let mut running = true;
    let mut delta = 0;
    while running {
        match rx.recv()? {
            Message::Finish => running = false,
            Message::Game(report) => {
                reports.push(report);
                delta += 1;
            }
        }
        if Instant::now() > next_time {
            progress.inc(delta);
            delta = 0;
            progress.set_message(&format!(
                "({} / {})",
                progress.position(),
                progress.length()
            ));
            next_time += Duration::from_millis(100);
        }
    }
    progress.finish();

    if reports.is_empty() {
        return Ok(());
    }

    let time = Instant::now() - start;
    let one_wins = reports
        .iter()
        .filter(|report| report.winner == Some(Player::One))
        .count();
    let two_wins = reports
        .iter()
        .filter(|report| report.winner == Some(Player::Two))
        .count();
    let draws = reports.len() - one_wins - two_wins;
    let total_moves: usize = reports.iter().map(|report| report.moves).sum();
    let total_nodes: usize = reports.iter().map(|report| report.nodes).sum();

    println!("Self-play complete in {}", HumanDuration(time));
    println!(
        "Games: {}, player 1 wins: {}, player 2 wins: {}, draws: {}",
        reports.len(),
        one_wins,
        two_wins,
        draws
    );
    println!(
        "Mean moves: {:.1}, No. of positions: {}, kpos/s: {}",
        total_moves as f64 / reports.len() as f64,
        total_nodes,
        total_nodes as f64 / (1000.0 * time.as_secs_f64())
    );
    Ok(())
}

fn play_game(rules: &Rules, depth: usize, seed: u64) -> GameReport {
    let mut rng = fastrand::Rng::with_seed(seed);
    let detector = WinDetector::new(rules);
    let mut searcher = Searcher::new(rules);
    let mut grid = rules.grid();
    let mut to_move = Player::One;
    let mut moves = 0;
    let mut nodes = 0;

    // a few random plies so the games differ between seeds
    for _ in 0..RANDOM_OPENING_PLIES {
        let options = grid.possible_moves();
        if options.is_empty() {
            break;
        }
        let column = options[rng.usize(..options.len())];
        if grid.drop_piece(column, to_move).is_ok() {
            moves += 1;
            if detector.has_win(&grid, to_move) {
                return GameReport {
                    winner: Some(to_move),
                    moves,
                    nodes,
                };
            }
            to_move = to_move.opponent();
        }
    }

    loop {
        let result = match searcher.decide(&grid, to_move, depth) {
            Ok(result) => result,
            // the grid filled up without a winner
            Err(_) => {
                return GameReport {
                    winner: None,
                    moves,
                    nodes,
                }
            }
        };
        nodes += searcher.node_count;

        // decide only ever returns playable columns
        grid.drop_piece(result.best_column, to_move).unwrap();
        moves += 1;
        if detector.has_win(&grid, to_move) {
            return GameReport {
                winner: Some(to_move),
                moves,
                nodes,
            };
        }
        to_move = to_move.opponent();
    }
}
