use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connectn_ai::{Grid, Owner, Player, Rules, WinDetector};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// An interactive game in progress: the grid, whose turn it is and
/// whether the game has ended
pub struct GameSession {
    grid: Grid,
    win_detector: WinDetector,
    pub to_move: Player,
    pub state: GameState,
}

impl GameSession {
    pub fn new(rules: &Rules) -> Self {
        Self {
            grid: rules.grid(),
            win_detector: WinDetector::new(rules),
            to_move: Player::One,
            state: GameState::Playing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > self.grid.columns() {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.grid.columns()
            ));
        }
        let column = column_one_indexed - 1;
        if !self.grid.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        let player = self.to_move;
        self.grid.drop_piece(column, player)?;

        self.state = if self.win_detector.has_win(&self.grid, player) {
            match player {
                Player::One => GameState::PlayerOneWin,
                Player::Two => GameState::PlayerTwoWin,
            }
        } else if !self.grid.has_empty_cell() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = player.opponent();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let header: String = (1..=self.grid.columns()).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(header + "\n")))?;

        // row 0 is the entry row, so printing top-down shows the board
        // the right way up
        for row in 0..self.grid.rows() {
            for column in 0..self.grid.columns() {
                let cell = self.grid.get(column, row)?;
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Owner::PlayerOne => Color::Red,
                            Owner::PlayerTwo => Color::Yellow,
                            Owner::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
