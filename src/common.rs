//! Common types: fire outcomes and fleet layout errors.

/// Result of firing at a single cell.
///
/// Re-firing a cell whose deck is already dead repeats the prior outcome
/// rather than erroring; board state never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// No ship occupies the targeted cell.
    Miss,
    /// A deck of a still-afloat ship was hit.
    Hit,
    /// Every deck of the targeted ship is dead.
    Sunk,
}

/// Errors rejecting a fleet layout at construction time.
///
/// `WrongShipCount` and `WrongSizeCounts` are composition errors;
/// `ShipsOverlap` and `ShipsTouching` are errors between distinct ships.
/// Any of these aborts construction; no partially valid board is ever
/// observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship endpoints share neither a row nor a column.
    SlantedShip {
        start: (usize, usize),
        end: (usize, usize),
    },
    /// A ship endpoint lies outside the board extent.
    ShipOutOfBounds { row: usize, col: usize },
    /// Fleet has the wrong total number of ships.
    WrongShipCount { expected: usize, found: usize },
    /// Fleet has the wrong number of ships of one length.
    WrongSizeCounts {
        length: usize,
        expected: usize,
        found: usize,
    },
    /// Two ships claim the same cell.
    ShipsOverlap { row: usize, col: usize },
    /// Two distinct ships occupy cells within each other's 8-neighborhood.
    ShipsTouching { row: usize, col: usize },
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::SlantedShip { start, end } => {
                write!(
                    f,
                    "ship from ({}, {}) to ({}, {}) is not a straight line",
                    start.0, start.1, end.0, end.1
                )
            }
            PlacementError::ShipOutOfBounds { row, col } => {
                write!(f, "ship endpoint ({}, {}) is off the board", row, col)
            }
            PlacementError::WrongShipCount { expected, found } => {
                write!(f, "fleet must have {} ships, found {}", expected, found)
            }
            PlacementError::WrongSizeCounts {
                length,
                expected,
                found,
            } => {
                write!(
                    f,
                    "fleet must have {} ships of length {}, found {}",
                    expected, length, found
                )
            }
            PlacementError::ShipsOverlap { row, col } => {
                write!(f, "two ships overlap at ({}, {})", row, col)
            }
            PlacementError::ShipsTouching { row, col } => {
                write!(f, "ships are touching at ({}, {})", row, col)
            }
        }
    }
}
