use anyhow::{anyhow, Result};

use std::error::Error;
use std::fmt;

use crate::{patterns, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// One of the two players. Cell contents are tracked separately as
/// [`Owner`] so that empty cells never masquerade as a player.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// The contents of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Owner {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Owner {
    pub fn is_empty(&self) -> bool {
        match self {
            Owner::Empty => true,
            _ => false,
        }
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Owner::PlayerOne,
            Player::Two => Owner::PlayerTwo,
        }
    }
}

/// Failures of checked cell access and gravity drops
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GridError {
    OutOfBounds { column: usize, row: usize },
    ColumnFull { column: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { column, row } => {
                write!(f, "cell ({}, {}) is outside the grid", column, row)
            }
            GridError::ColumnFull { column } => write!(f, "column {} is full", column),
        }
    }
}

impl Error for GridError {}

/// A gravity game board of fixed dimensions.
///
/// Row 0 is the entry row at the top of each column; a dropped piece
/// settles in the highest-indexed empty row of its column.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Owner>, // cells are stored column-major, top-to-bottom
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Owner::Empty; rows * columns],
        }
    }

    /// Replays a game record of 1-indexed columns, players alternating
    /// from player one.
    pub fn from_moves<S: AsRef<str>>(rows: usize, columns: usize, moves: S) -> Result<Self> {
        let mut grid = Self::new(rows, columns);
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            // only play available moves
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if (1..=columns).contains(&column) => {
                    if grid.drop_piece(column - 1, player).is_err() {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    pub(crate) fn at(&self, column: usize, row: usize) -> Owner {
        self.cells[self.index(column, row)]
    }

    pub(crate) fn set_cell(&mut self, column: usize, row: usize, owner: Owner) {
        let index = self.index(column, row);
        self.cells[index] = owner;
    }

    pub(crate) fn in_bounds(&self, column: isize, row: isize) -> bool {
        column >= 0 && column < self.columns as isize && row >= 0 && row < self.rows as isize
    }

    pub fn get(&self, column: usize, row: usize) -> Result<Owner, GridError> {
        if column >= self.columns || row >= self.rows {
            return Err(GridError::OutOfBounds { column, row });
        }
        Ok(self.at(column, row))
    }

    pub fn set(&mut self, column: usize, row: usize, owner: Owner) -> Result<(), GridError> {
        if column >= self.columns || row >= self.rows {
            return Err(GridError::OutOfBounds { column, row });
        }
        self.set_cell(column, row, owner);
        Ok(())
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Returns true if the column exists and its entry row is open
    pub fn playable(&self, column: usize) -> bool {
        column < self.columns && self.at(column, 0).is_empty()
    }

    /// The row a dropped piece settles in, `None` when the column is
    /// full or out of range
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if !self.playable(column) {
            return None;
        }
        for row in 1..self.rows {
            if !self.at(column, row).is_empty() {
                return Some(row - 1);
            }
        }
        Some(self.rows - 1)
    }

    /// Playable columns in ascending order
    pub fn possible_moves(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.playable(column))
            .collect()
    }

    /// Drops a piece for `player`, returning the row it settled in
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, GridError> {
        if column >= self.columns {
            return Err(GridError::OutOfBounds { column, row: 0 });
        }
        let row = self
            .lowest_empty_row(column)
            .ok_or(GridError::ColumnFull { column })?;
        self.set_cell(column, row, player.into());
        Ok(row)
    }

    /// Counts windows of exactly `length` consecutive cells holding
    /// `owner`. Overlapping windows count separately, so a long run
    /// contributes several shorter windows.
    pub fn count_runs(&self, owner: Owner, length: usize) -> usize {
        patterns::count_runs(self, owner, length)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}
