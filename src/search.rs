//! A depth-bounded agent for connect-N positions

use std::error::Error;
use std::fmt;

use crate::evaluator::Evaluator;
use crate::grid::{Grid, Owner, Player};
use crate::win::WinDetector;
use crate::Rules;

/// The default look-ahead depth in plies
pub const DEFAULT_SEARCH_DEPTH: usize = 6;
/// The largest accepted look-ahead depth in plies
pub const MAX_SEARCH_DEPTH: usize = 12;

/// Failure of a [`Searcher::decide`] call
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SearchError {
    NoLegalMoves,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "no column can take another piece"),
        }
    }
}

impl Error for SearchError {}

/// A column choice and the score the search expects from it
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub best_column: usize,
    pub score: f32,
}

/// An agent choosing moves in connect-N positions
///
/// # Notes
/// This agent runs a classical fixed-depth game tree search with
/// alpha-beta pruning and scores the leaves with the positional
/// heuristic, trading perfect play for bounded decision time
///
/// # Position Scoring
/// A position's score is the heuristic sum of weighted window counts
/// from the deciding player's point of view. Positive scores favour the
/// deciding player; a completed winning run dominates every lesser
/// pattern, so scores near the top weight signal a (fore)seen win
#[derive(Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    win_detector: WinDetector,

    /// The number of nodes searched by the last decision (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` for the given rules
    pub fn new(rules: &Rules) -> Self {
        Self {
            evaluator: Evaluator::new(rules),
            win_detector: WinDetector::new(rules),
            node_count: 0,
        }
    }

    /// Chooses the best column for `player`, looking at most `max_depth`
    /// plies ahead
    ///
    /// The depth is clamped to `1..=MAX_SEARCH_DEPTH`. The passed grid is
    /// never modified; the search plays out moves on a scratch copy.
    /// Equal-scoring columns resolve to the leftmost one.
    pub fn decide(
        &mut self,
        grid: &Grid,
        player: Player,
        max_depth: usize,
    ) -> Result<SearchResult, SearchError> {
        let max_depth = max_depth.clamp(1, MAX_SEARCH_DEPTH);
        let moves = grid.possible_moves();
        let first = *moves.first().ok_or(SearchError::NoLegalMoves)?;

        self.node_count = 1;
        let mut scratch = grid.clone();

        let mut alpha = f32::NEG_INFINITY;
        let beta = f32::INFINITY;
        let mut best_column = first;
        let mut best_score = f32::NEG_INFINITY;

        // search every root move and keep track of the best column
        for column in moves {
            if let Some(row) = scratch.lowest_empty_row(column) {
                scratch.set_cell(column, row, player.into());
                // the search window is flipped for the other player
                let score =
                    -self.negamax(&mut scratch, player.opponent(), 1, max_depth, -beta, -alpha);
                scratch.set_cell(column, row, Owner::Empty);

                // only a strict improvement moves the choice, so ties keep
                // the earliest column
                if score > best_score {
                    best_score = score;
                    best_column = column;
                }
                if score > alpha {
                    alpha = score;
                }
            }
        }

        Ok(SearchResult {
            best_column,
            score: best_score,
        })
    }

    /// Performs the game tree search below the root
    ///
    /// Returns the score of the position from `side`'s point of view
    fn negamax(
        &mut self,
        grid: &mut Grid,
        side: Player,
        depth: usize,
        max_depth: usize,
        mut alpha: f32,
        beta: f32,
    ) -> f32 {
        self.node_count += 1;

        // stop at the horizon, on unplayable grids and as soon as either
        // side holds a winning run
        if depth == max_depth
            || !(0..grid.columns()).any(|column| grid.playable(column))
            || self.win_detector.has_win(grid, side)
            || self.win_detector.has_win(grid, side.opponent())
        {
            return self.evaluator.evaluate(grid, side);
        }

        let mut best = f32::NEG_INFINITY;
        for column in 0..grid.columns() {
            if let Some(row) = grid.lowest_empty_row(column) {
                grid.set_cell(column, row, side.into());
                // the search window is flipped for the other player
                let score =
                    -self.negamax(grid, side.opponent(), depth + 1, max_depth, -beta, -alpha);
                // take the move back before any pruning exit
                grid.set_cell(column, row, Owner::Empty);

                if score > best {
                    best = score;
                }
                if score > alpha {
                    alpha = score;
                }
                // a score above beta will never be allowed by the opponent,
                // so the remaining columns cannot matter
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    }
}
