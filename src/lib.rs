//! A heuristic agent for playing connect-N games on gravity boards
//!
//! This agent runs a depth-bounded game tree search over a configurable
//! board (3x3 up to 8x8, any win length the board can hold) and returns
//! the best column for the side to move.
//!
//! # Basic Usage
//!
//! ```
//! use connectn_ai::{Grid, Player, Rules, Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let rules = Rules::default();
//! let mut grid = Grid::new(rules.rows(), rules.columns());
//! grid.drop_piece(3, Player::One)?;
//!
//! let mut searcher = Searcher::new(&rules);
//! let result = searcher.decide(&grid, Player::Two, 4)?;
//!
//! assert!(result.best_column < rules.columns());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod evaluator;

pub mod grid;

pub mod patterns;

pub mod search;

pub mod win;


pub use evaluator::Evaluator;
pub use grid::{Grid, GridError, Owner, Player};
pub use search::{SearchError, SearchResult, Searcher};
pub use win::WinDetector;

/// The default height of the game board in tiles
pub const DEFAULT_ROWS: usize = 6;

/// The default width of the game board in tiles
pub const DEFAULT_COLUMNS: usize = 7;

/// The default number of connected tiles needed to win
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// The smallest supported board dimension
pub const MIN_SIZE: usize = 3;

/// The largest supported board dimension
pub const MAX_SIZE: usize = 8;

// ensure that the default geometry is inside the supported range
const_assert!(DEFAULT_ROWS >= MIN_SIZE && DEFAULT_ROWS <= MAX_SIZE);
const_assert!(DEFAULT_COLUMNS >= MIN_SIZE && DEFAULT_COLUMNS <= MAX_SIZE);
const_assert!(DEFAULT_WIN_LENGTH <= DEFAULT_ROWS && DEFAULT_WIN_LENGTH <= DEFAULT_COLUMNS);

/// Game configuration: board geometry, win length and diagonal rules.
///
/// Out-of-range values are clamped on construction, so a `Rules` is
/// always internally consistent: dimensions lie in
/// [`MIN_SIZE`]..=[`MAX_SIZE`] and the win length fits on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    rows: usize,
    columns: usize,
    win_length: usize,
    allow_diagonal: bool,
}

impl Rules {
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Self {
        let rows = rows.clamp(MIN_SIZE, MAX_SIZE);
        let columns = columns.clamp(MIN_SIZE, MAX_SIZE);
        // a win longer than the longest board line can never happen
        let win_length = win_length.clamp(2, rows.max(columns));
        Self {
            rows,
            columns,
            win_length,
            allow_diagonal: true,
        }
    }

    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    /// Creates an empty grid with this geometry
    pub fn grid(&self) -> Grid {
        Grid::new(self.rows, self.columns)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_WIN_LENGTH)
    }
}
