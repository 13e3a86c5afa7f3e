//! Fleet board: ship arena, cell ownership index, layout validation and
//! firing.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::{FireOutcome, PlacementError};
use crate::config::{FleetRules, BOARD_SIZE, MAX_SHIP_LEN};
use crate::ship::{Mask, Ship};
use core::fmt;
use log::debug;

/// Display classification of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// No ship occupies the cell.
    Water,
    /// Occupied, deck still alive.
    Intact,
    /// Deck dead but the owning ship is still afloat.
    Damaged,
    /// The owning ship is fully sunk.
    Sunk,
}

impl CellView {
    /// Single-character display glyph.
    pub fn symbol(&self) -> char {
        match self {
            CellView::Water => '~',
            CellView::Intact => '\u{25A1}',
            CellView::Damaged => '*',
            CellView::Sunk => 'x',
        }
    }
}

/// A validated fleet on an 11×11 board.
///
/// Owns the ships and a cell→ship index built once at construction; the
/// index maps each occupied cell to the owning ship's position in the arena
/// and never changes afterwards. Construction is atomic: any validation
/// failure returns an error and no board exists.
pub struct Board {
    ships: Vec<Ship>,
    owner: [[Option<u8>; BOARD_SIZE]; BOARD_SIZE],
    occupied: Mask,
    rules: FleetRules,
}

impl Board {
    /// Build and validate a board under the classic fleet rules.
    pub fn new(
        pairs: &[((usize, usize), (usize, usize))],
    ) -> Result<Self, PlacementError> {
        Self::with_rules(pairs, FleetRules::classic())
    }

    /// Build and validate a board under explicit fleet rules.
    ///
    /// One ship per endpoint pair, in input order. Checks run eagerly against
    /// the complete layout: ship construction, total count, count-per-length,
    /// overlap, then adjacency.
    pub fn with_rules(
        pairs: &[((usize, usize), (usize, usize))],
        rules: FleetRules,
    ) -> Result<Self, PlacementError> {
        let mut ships = Vec::with_capacity(pairs.len());
        for &(start, end) in pairs {
            ships.push(Ship::new(start, end)?);
        }

        if ships.len() != rules.ship_count() {
            return Err(PlacementError::WrongShipCount {
                expected: rules.ship_count(),
                found: ships.len(),
            });
        }

        let mut found = [0usize; MAX_SHIP_LEN];
        for ship in &ships {
            let length = ship.deck_count();
            if length > MAX_SHIP_LEN {
                return Err(PlacementError::WrongSizeCounts {
                    length,
                    expected: 0,
                    found: 1,
                });
            }
            found[length - 1] += 1;
        }
        for length in 1..=MAX_SHIP_LEN {
            let expected = rules.required(length);
            if found[length - 1] != expected {
                return Err(PlacementError::WrongSizeCounts {
                    length,
                    expected,
                    found: found[length - 1],
                });
            }
        }

        // Build the ownership index; a cell claimed twice is an overlap.
        let mut owner = [[None; BOARD_SIZE]; BOARD_SIZE];
        let mut occupied = Mask::new();
        for (idx, ship) in ships.iter().enumerate() {
            for deck in ship.decks() {
                if owner[deck.row][deck.col].is_some() {
                    return Err(PlacementError::ShipsOverlap {
                        row: deck.row,
                        col: deck.col,
                    });
                }
                owner[deck.row][deck.col] = Some(idx as u8);
                let _ = occupied.set(deck.row, deck.col);
            }
        }

        // Each ship's one-cell halo must not reach any other ship.
        for (i, ship) in ships.iter().enumerate() {
            let halo = ship.mask().dilated();
            for (j, other) in ships.iter().enumerate() {
                if i == j {
                    continue;
                }
                let contact = halo & other.mask();
                if let Some((row, col)) = contact.iter_set_cells().next() {
                    return Err(PlacementError::ShipsTouching { row, col });
                }
            }
        }

        debug!(
            "fleet layout accepted: {} ships covering {} cells",
            ships.len(),
            occupied.count_ones()
        );
        Ok(Board {
            ships,
            owner,
            occupied,
            rules,
        })
    }

    /// The ships in input order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The rules this board was validated against.
    pub fn rules(&self) -> FleetRules {
        self.rules
    }

    /// Mask of all occupied cells.
    pub fn occupied(&self) -> Mask {
        self.occupied
    }

    /// The ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.owner[row][col].map(|idx| &self.ships[idx as usize])
    }

    /// Returns true once every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Fire at a cell.
    ///
    /// Cells outside the board and unoccupied cells are a `Miss` with no
    /// state change. Otherwise the owning ship's deck is killed and the
    /// outcome is `Sunk` if the ship now has no live decks, else `Hit`.
    /// Firing again at a dead deck repeats the prior outcome.
    pub fn fire(&mut self, row: usize, col: usize) -> FireOutcome {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return FireOutcome::Miss;
        }
        let idx = match self.owner[row][col] {
            Some(idx) => idx as usize,
            None => return FireOutcome::Miss,
        };
        let ship = &mut self.ships[idx];
        ship.apply_hit(row, col);
        if ship.check_sunk() {
            debug!("ship {} sunk by shot at ({}, {})", idx, row, col);
            FireOutcome::Sunk
        } else {
            FireOutcome::Hit
        }
    }

    /// Classify every cell for display. Presentation only; no state change.
    pub fn render(&self) -> [[CellView; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[CellView::Water; BOARD_SIZE]; BOARD_SIZE];
        for (row, views) in grid.iter_mut().enumerate() {
            for (col, view) in views.iter_mut().enumerate() {
                if let Some(idx) = self.owner[row][col] {
                    let ship = &self.ships[idx as usize];
                    *view = if ship.is_sunk() {
                        CellView::Sunk
                    } else if ship.deck(row, col).map_or(false, |d| d.alive) {
                        CellView::Intact
                    } else {
                        CellView::Damaged
                    };
                }
            }
        }
        grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.render();
        for (row, views) in grid.iter().enumerate() {
            for view in views {
                write!(f, "{}", view.symbol())?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "  occupied: {:?},", self.occupied)?;
        writeln!(f, "  ships: {:?},", self.ships)?;
        writeln!(f, "  rules: {:?}", self.rules)?;
        write!(f, "}}")
    }
}
