//! A fixed-size cell mask using const generics.
//!
//! An `N×N` grid packed into an unsigned integer `T`, `no_std` friendly and
//! allocation free. Used for ship occupancy masks and for the one-cell
//! dilation that drives the adjacency check.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};
use core::{any, fmt};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit-grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size N×N cell mask stored in the unsigned integer `T`.
///
/// `T` must provide at least `N * N` bits; constructing masks that do not fit
/// is a programming error caught by the `set`/`get` bounds checks.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create a new empty grid (all cells cleared).
    #[inline]
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        Self::check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        Self::check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the cell at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        Self::check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), BitGridError> {
        if row >= N || col >= N {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Creates a grid from `(row, col)` positions, failing on the first
    /// out-of-bounds cell.
    pub fn try_from_cells<I>(cells: I) -> Result<Self, BitGridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new();
        for (r, c) in cells {
            grid.set(r, c)?;
        }
        Ok(grid)
    }

    /// Returns this mask expanded by one cell in all eight directions,
    /// clamped at the board edges. The result still contains the original
    /// cells.
    pub fn dilated(&self) -> Self {
        let mut out = *self;
        for (r, c) in self.iter_set_cells() {
            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    let nr = r as isize + dr;
                    let nc = c as isize + dc;
                    if (0..N as isize).contains(&nr) && (0..N as isize).contains(&nc) {
                        // in bounds by construction
                        let _ = out.set(nr as usize, nc as usize);
                    }
                }
            }
        }
        out
    }

    /// Returns true if any cell is set in both grids.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Iterator over the set cells of the grid.
    #[inline]
    pub fn iter_set_cells(&self) -> SetCells<'_, T, N> {
        SetCells {
            grid: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let cell = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bit grid.
#[derive(Clone, Copy)]
pub struct SetCells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetCells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

/// Bitwise AND for intersecting two grids.
impl<T, const N: usize> BitAnd for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Bitwise OR for merging two grids.
impl<T, const N: usize> BitOr for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitAndAssign for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
