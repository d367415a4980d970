use crate::grid::{Grid, Player};
use crate::patterns;
use crate::Rules;

// each extra connected cell is worth ten times the previous tier
const WEIGHT_BASE: f32 = 10.0;

/// Positional heuristic: weighted window counts for a player minus the
/// same counts for the opponent.
#[derive(Clone, Debug)]
pub struct Evaluator {
    weights: Vec<f32>,
}

impl Evaluator {
    pub fn new(rules: &Rules) -> Self {
        // weights[k - 1] scores a window of k connected cells
        let weights = (0..rules.win_length())
            .map(|k| WEIGHT_BASE.powi(k as i32))
            .collect();
        Self { weights }
    }

    /// Scores `grid` from `player`'s point of view. Swapping the players
    /// negates the score exactly, counts and weights being integers.
    pub fn evaluate(&self, grid: &Grid, player: Player) -> f32 {
        let opponent = player.opponent();
        let mut score = 0.0;
        for (index, weight) in self.weights.iter().enumerate() {
            let length = index + 1;
            let own = patterns::count_runs(grid, player.into(), length) as f32;
            let theirs = patterns::count_runs(grid, opponent.into(), length) as f32;
            score += weight * (own - theirs);
        }
        score
    }
}
