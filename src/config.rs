//! Board extent and fleet composition rules.

/// Width and height of the board; valid coordinates are `0..BOARD_SIZE`.
pub const BOARD_SIZE: usize = 11;

/// Longest ship any rule set may require.
pub const MAX_SHIP_LEN: usize = 4;

/// Required number of ships per length in a legal fleet.
///
/// `counts[len - 1]` is how many ships of `len` decks the fleet must contain.
/// Kept as data rather than inline literals so tests can run alternate
/// compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetRules {
    counts: [usize; MAX_SHIP_LEN],
}

impl FleetRules {
    /// Classic composition: four singles, three 2-deck, two 3-deck, one
    /// 4-deck ship (20 decks total).
    pub const fn classic() -> Self {
        Self {
            counts: [4, 3, 2, 1],
        }
    }

    /// Custom composition from counts indexed by `length - 1`.
    pub const fn new(counts: [usize; MAX_SHIP_LEN]) -> Self {
        Self { counts }
    }

    /// Required number of ships of the given deck count. Lengths outside
    /// `1..=MAX_SHIP_LEN` are never required.
    pub fn required(&self, length: usize) -> usize {
        if length == 0 || length > MAX_SHIP_LEN {
            0
        } else {
            self.counts[length - 1]
        }
    }

    /// Total number of ships in a legal fleet.
    pub fn ship_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Total number of decks across a legal fleet.
    pub fn deck_count(&self) -> usize {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, n)| (i + 1) * n)
            .sum()
    }
}
