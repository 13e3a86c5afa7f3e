//! Thin game state over a validated board: shot counting and end detection.

use crate::board::Board;
use crate::common::FireOutcome;
use log::info;

/// Progress of a single-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    FleetSunk,
}

/// One game against one fleet. Counts every shot, including repeats and
/// misses.
pub struct Game {
    board: Board,
    shots: usize,
}

impl Game {
    /// Start a game against an already validated board.
    pub fn new(board: Board) -> Self {
        Game { board, shots: 0 }
    }

    /// The board under fire.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of shots fired so far.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Fire at a cell and count the shot.
    pub fn fire(&mut self, row: usize, col: usize) -> FireOutcome {
        self.shots += 1;
        let outcome = self.board.fire(row, col);
        info!(
            "shot {} at ({}, {}): {:?}",
            self.shots, row, col, outcome
        );
        outcome
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::FleetSunk
        } else {
            GameStatus::InProgress
        }
    }
}
