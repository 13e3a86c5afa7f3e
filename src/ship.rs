//! Decks and ships: a ship is a straight inclusive run of decks between two
//! endpoints, and sinks once every deck is dead.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bitgrid::BitGrid;
use crate::common::PlacementError;
use crate::config::BOARD_SIZE;

/// Occupancy mask covering the full board.
pub type Mask = BitGrid<u128, BOARD_SIZE>;

/// One grid cell belonging to a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

impl Deck {
    fn new(row: usize, col: usize) -> Self {
        Deck {
            row,
            col,
            alive: true,
        }
    }
}

/// A straight contiguous run of decks between two board coordinates.
///
/// Created once at fleet setup and never resized. The sunk flag is
/// monotonic: once every deck is dead it latches and never clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    start: (usize, usize),
    end: (usize, usize),
    decks: Vec<Deck>,
    sunk: bool,
    mask: Mask,
}

impl Ship {
    /// Build a ship covering every cell between `start` and `end` inclusive.
    ///
    /// The endpoints must share a row or a column; `start == end` yields a
    /// single-deck ship. Endpoint order does not matter. Slanted pairs and
    /// endpoints off the board are rejected.
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Result<Self, PlacementError> {
        let (r1, c1) = start;
        let (r2, c2) = end;
        for &(row, col) in &[start, end] {
            if row >= BOARD_SIZE || col >= BOARD_SIZE {
                return Err(PlacementError::ShipOutOfBounds { row, col });
            }
        }

        let mut decks = Vec::new();
        let mut mask = Mask::new();
        if r1 == r2 {
            for col in c1.min(c2)..=c1.max(c2) {
                decks.push(Deck::new(r1, col));
                // endpoints bounds-checked above
                let _ = mask.set(r1, col);
            }
        } else if c1 == c2 {
            for row in r1.min(r2)..=r1.max(r2) {
                decks.push(Deck::new(row, c1));
                let _ = mask.set(row, c1);
            }
        } else {
            return Err(PlacementError::SlantedShip { start, end });
        }

        Ok(Ship {
            start,
            end,
            decks,
            sunk: false,
            mask,
        })
    }

    /// First endpoint as given at construction.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Second endpoint as given at construction.
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Number of decks (cells) the ship covers.
    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// All decks in order along the ship's axis.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// The deck at (row, col), or `None` if the ship does not cover that cell.
    pub fn deck(&self, row: usize, col: usize) -> Option<&Deck> {
        self.decks.iter().find(|d| d.row == row && d.col == col)
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Kill the deck at (row, col). Coordinates outside the ship are a no-op;
    /// a dead deck stays dead.
    pub fn apply_hit(&mut self, row: usize, col: usize) {
        if let Some(deck) = self.decks.iter_mut().find(|d| d.row == row && d.col == col) {
            deck.alive = false;
        }
    }

    /// Whether the ship has latched as sunk.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Re-evaluate and return sunk status, latching it once all decks are
    /// dead. Idempotent.
    pub(crate) fn check_sunk(&mut self) -> bool {
        if !self.sunk && self.decks.iter().all(|d| !d.alive) {
            self.sunk = true;
        }
        self.sunk
    }
}
