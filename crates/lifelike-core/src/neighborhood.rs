//! Packed 9-bit encoding of a cell's Moore neighborhood.
//!
//! Each of the nine cells of a 3×3 window maps to one bit:
//!
//! ```text
//!  8 5 2
//!  7 4 1
//!  6 3 0
//! ```
//!
//! Bit 4 is the center cell. The top row is the board row above the center
//! and the left column is the board column to its left. Bits are grouped by
//! column, rightmost column lowest, which lets [`Neighborhood::slide_right`]
//! move the window one column to the right with a mask and a shift: the
//! caller only has to read the three cells of the new right column.
//!
//! # Examples
//!
//! ```
//! use lifelike_core::{Board, Neighborhood, NeighborPosition};
//!
//! let board: Board = "
//! 100
//! 010
//! 001
//! ".parse()?;
//!
//! let n = Neighborhood::from_board(&board, 1, 1);
//! assert_eq!(n.bits(), 0b1_0001_0001);
//! assert!(n.center());
//! assert_eq!(n.live_neighbors(), 2);
//!
//! // Move one column right and refill the new right column (off the board).
//! let slid = n
//!     .slide_right()
//!     .with_cell(NeighborPosition::TopRight, board.get_or(0, 3, false))
//!     .with_cell(NeighborPosition::MiddleRight, board.get_or(1, 3, false))
//!     .with_cell(NeighborPosition::BottomRight, board.get_or(2, 3, false));
//! assert_eq!(slid, Neighborhood::from_board(&board, 1, 2));
//! # Ok::<(), lifelike_core::ParseBoardError>(())
//! ```

use std::fmt;

use crate::{Board, bits};

/// The nine cells of a Moore neighborhood, valued by their bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NeighborPosition {
    /// Row below, column right.
    BottomRight = 0,
    /// Same row, column right.
    MiddleRight = 1,
    /// Row above, column right.
    TopRight = 2,
    /// Row below, same column.
    BottomMiddle = 3,
    /// The center cell itself.
    Center = 4,
    /// Row above, same column.
    TopMiddle = 5,
    /// Row below, column left.
    BottomLeft = 6,
    /// Same row, column left.
    MiddleLeft = 7,
    /// Row above, column left.
    TopLeft = 8,
}

impl NeighborPosition {
    /// All positions in bit index order.
    pub const ALL: [Self; 9] = [
        Self::BottomRight,
        Self::MiddleRight,
        Self::TopRight,
        Self::BottomMiddle,
        Self::Center,
        Self::TopMiddle,
        Self::BottomLeft,
        Self::MiddleLeft,
        Self::TopLeft,
    ];

    /// Returns the bit index of this position (0-8).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Returns the `(row, column)` offset of this position from the center.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifelike_core::NeighborPosition;
    ///
    /// assert_eq!(NeighborPosition::TopLeft.offset(), (-1, -1));
    /// assert_eq!(NeighborPosition::BottomRight.offset(), (1, 1));
    /// assert_eq!(NeighborPosition::Center.offset(), (0, 0));
    /// ```
    #[must_use]
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        let index = self as isize;
        (1 - index % 3, 1 - index / 3)
    }
}

/// Errors raised when building a [`Neighborhood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NeighborhoodError {
    /// The source grid was not exactly 3×3.
    #[display("neighborhoods can only be built from 3x3 grids")]
    NotThreeByThree,
    /// The raw value had bits set beyond the nine neighborhood positions.
    #[display("neighborhood value must be less than 512, got {value}")]
    OutOfRange {
        /// The offending value.
        value: u16,
    },
}

/// The 3×3 Moore neighborhood of a cell packed into 9 bits.
///
/// The value is always in `0..512`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Neighborhood(u16);

impl Neighborhood {
    /// Number of distinct neighborhoods (2^9).
    pub const COUNT: usize = 512;

    /// The neighborhood with every cell dead.
    pub const EMPTY: Self = Self(0);

    /// Returns an iterator over all 512 neighborhoods in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..512).map(Self)
    }

    /// Returns the packed value (0-511).
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Encodes the neighborhood centered at `(row, column)` on `board`.
    ///
    /// Cells outside the board read as dead.
    #[must_use]
    pub fn from_board(board: &Board, row: isize, column: isize) -> Self {
        NeighborPosition::ALL
            .into_iter()
            .fold(Self::EMPTY, |n, position| {
                let (dr, dc) = position.offset();
                let alive = row
                    .checked_add(dr)
                    .zip(column.checked_add(dc))
                    .is_some_and(|(r, c)| board.get_or(r, c, false));
                n.with_cell(position, alive)
            })
    }

    /// Encodes a literal 3×3 grid given in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`NeighborhoodError::NotThreeByThree`] if `grid` does not have
    /// exactly three rows of three cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifelike_core::{Neighborhood, NeighborPosition};
    ///
    /// let n = Neighborhood::from_grid(&[
    ///     [true, false, false],
    ///     [false, false, false],
    ///     [false, false, true],
    /// ])?;
    /// assert!(n.cell(NeighborPosition::TopLeft));
    /// assert!(n.cell(NeighborPosition::BottomRight));
    /// assert_eq!(n.live_neighbors(), 2);
    /// # Ok::<(), lifelike_core::NeighborhoodError>(())
    /// ```
    pub fn from_grid<R>(grid: &[R]) -> Result<Self, NeighborhoodError>
    where
        R: AsRef<[bool]>,
    {
        if grid.len() != 3 || grid.iter().any(|row| row.as_ref().len() != 3) {
            return Err(NeighborhoodError::NotThreeByThree);
        }
        Ok(NeighborPosition::ALL
            .into_iter()
            .fold(Self::EMPTY, |n, position| {
                let (dr, dc) = position.offset();
                #[expect(clippy::cast_sign_loss)]
                let alive = grid[(1 + dr) as usize].as_ref()[(1 + dc) as usize];
                n.with_cell(position, alive)
            }))
    }

    /// Moves the window one column to the right.
    ///
    /// The old left column is dropped and the center and right columns move
    /// left. The new right column ([`TopRight`], [`MiddleRight`],
    /// [`BottomRight`]) is left dead; the caller fills it with
    /// [`with_cell`](Self::with_cell) from the board.
    ///
    /// [`TopRight`]: NeighborPosition::TopRight
    /// [`MiddleRight`]: NeighborPosition::MiddleRight
    /// [`BottomRight`]: NeighborPosition::BottomRight
    #[must_use]
    #[inline]
    pub const fn slide_right(self) -> Self {
        Self(bits::shift_left(bits::clear_from_bit(self.0, 6), 3))
    }

    /// Returns whether the cell at `position` is alive.
    #[must_use]
    #[inline]
    pub const fn cell(self, position: NeighborPosition) -> bool {
        bits::get_bit(self.0, position.index())
    }

    /// Returns a copy with the cell at `position` set to `value`.
    #[must_use]
    #[inline]
    pub const fn with_cell(self, position: NeighborPosition, value: bool) -> Self {
        Self(bits::set_bit(self.0, position.index(), value))
    }

    /// Returns whether the center cell is alive.
    #[must_use]
    #[inline]
    pub const fn center(self) -> bool {
        self.cell(NeighborPosition::Center)
    }

    /// Returns the number of live cells around the center (0-8).
    #[must_use]
    #[inline]
    pub const fn live_neighbors(self) -> u8 {
        let ring = self.with_cell(NeighborPosition::Center, false).0;
        #[expect(clippy::cast_possible_truncation)]
        let count = ring.count_ones() as u8;
        count
    }
}

impl TryFrom<u16> for Neighborhood {
    type Error = NeighborhoodError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if usize::from(value) >= Self::COUNT {
            return Err(NeighborhoodError::OutOfRange { value });
        }
        Ok(Self(value))
    }
}

impl From<Neighborhood> for u16 {
    fn from(n: Neighborhood) -> Self {
        n.bits()
    }
}

impl fmt::Debug for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neighborhood({:#011b})", self.0)
    }
}
