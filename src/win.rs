use crate::grid::{Grid, Owner, Player};
use crate::patterns;
use crate::Rules;

/// Detects finished games under a fixed set of rules
#[derive(Copy, Clone, Debug)]
pub struct WinDetector {
    win_length: usize,
    allow_diagonal: bool,
}

impl WinDetector {
    pub fn new(rules: &Rules) -> Self {
        Self {
            win_length: rules.win_length(),
            allow_diagonal: rules.allow_diagonal(),
        }
    }

    /// Returns true if `player` holds a connected run of at least the
    /// win length. Diagonal runs only count when the rules allow them.
    pub fn has_win(&self, grid: &Grid, player: Player) -> bool {
        let owner: Owner = player.into();
        // the first two directions are horizontal and vertical
        let scanned = if self.allow_diagonal { 4 } else { 2 };
        patterns::DIRECTIONS[..scanned]
            .iter()
            .any(|&step| patterns::has_run(grid, owner, self.win_length, step))
    }

    /// Returns true when the board is full and neither player has won
    pub fn is_draw(&self, grid: &Grid) -> bool {
        !grid.has_empty_cell()
            && !self.has_win(grid, Player::One)
            && !self.has_win(grid, Player::Two)
    }
}
