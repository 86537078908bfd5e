//! Finite two-dimensional grid of two-state cells.
//!
//! Indices are in `(row, column)` order and start at the top-left corner:
//!
//! ```text
//! | 0,0 | 0,1 | 0,2 |
//! | 1,0 | 1,1 | 1,2 |
//! | 2,0 | 2,1 | 2,2 |
//! ```
//!
//! Coordinates are signed so that off-board positions such as `(-1, 0)` can
//! be addressed. [`Board::get`] reports them as errors, while
//! [`Board::get_or`] substitutes a fallback value, which is how the simulator
//! treats cells beyond the edge as dead.
//!
//! # Examples
//!
//! ```
//! use lifelike_core::Board;
//!
//! let mut board = Board::from_size(3, 4, false)?;
//! board.set(1, 2, true)?;
//!
//! assert!(board.get(1, 2)?);
//! assert!(board.get(-1, 0).is_err());
//! assert!(board.get_or(-1, 0, true));
//! assert_eq!(board.live_count(), 1);
//! # Ok::<(), lifelike_core::BoardError>(())
//! ```
//!
//! Boards also have a plain text form, with `1` for live and `0` for dead
//! cells:
//!
//! ```
//! use lifelike_core::Board;
//!
//! let board: Board = "010\n010\n010".parse()?;
//! assert_eq!(board.to_string(), "0 1 0\n0 1 0\n0 1 0");
//! # Ok::<(), lifelike_core::ParseBoardError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

/// Errors raised when constructing or indexing a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A size-based constructor was given a zero dimension.
    #[display("a board must have at least 1 row and 1 column, got {rows}x{columns}")]
    EmptyDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        columns: usize,
    },
    /// The source data contained no rows.
    #[display("a board must have at least one row")]
    NoRows,
    /// A row of the source data contained no cells.
    #[display("all rows must have at least one cell, row {row} is empty")]
    EmptyRow {
        /// Index of the empty row.
        row: usize,
    },
    /// A row index was outside the board.
    #[display("row index out of bounds: expected 0 <= row < {rows}, got {row}")]
    RowOutOfRange {
        /// The offending row index.
        row: isize,
        /// Number of rows on the board.
        rows: usize,
    },
    /// A column index was outside its row.
    #[display(
        "column index out of bounds in row {row}: expected 0 <= column < {columns}, got {column}"
    )]
    ColumnOutOfRange {
        /// Row containing the column.
        row: isize,
        /// The offending column index.
        column: isize,
        /// Number of cells in the row.
        columns: usize,
    },
}

/// A finite grid of boolean cells, `true` meaning alive.
///
/// A board always has at least one row and every row has at least one cell.
/// Rows may differ in length, although boards are usually rectangular. The
/// shape is fixed at construction; only cell values change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<Box<[bool]>>,
}

impl Board {
    /// Creates a `rows` x `columns` board with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyDimensions`] if either dimension is zero.
    pub fn from_size(rows: usize, columns: usize, value: bool) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::EmptyDimensions { rows, columns });
        }
        Ok(Self {
            rows: (0..rows).map(|_| vec![value; columns].into()).collect(),
        })
    }

    /// Creates a board by copying explicit row data.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoRows`] if `rows` is empty, or
    /// [`BoardError::EmptyRow`] for the first row without cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifelike_core::{Board, BoardError};
    ///
    /// let board = Board::from_rows(&[[false, true], [true, false]])?;
    /// assert_eq!(board.row_count(), 2);
    ///
    /// let empty: [Vec<bool>; 0] = [];
    /// assert_eq!(Board::from_rows(&empty), Err(BoardError::NoRows));
    /// # Ok::<(), BoardError>(())
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[bool]>,
    {
        if rows.is_empty() {
            return Err(BoardError::NoRows);
        }
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cells = cells.as_ref();
                if cells.is_empty() {
                    return Err(BoardError::EmptyRow { row });
                }
                Ok(Box::<[bool]>::from(cells))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { rows })
    }

    /// Wraps rows produced from an existing board's shape.
    pub(crate) fn from_shaped_rows(rows: Vec<Box<[bool]>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|row| !row.is_empty()));
        Self { rows }
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells in `row`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowOutOfRange`] if `row` is not on the board.
    pub fn row_len(&self, row: isize) -> Result<usize, BoardError> {
        self.row(row).map(<[bool]>::len)
    }

    /// Returns the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowOutOfRange`] or [`BoardError::ColumnOutOfRange`]
    /// if the position is not on the board.
    pub fn get(&self, row: isize, column: isize) -> Result<bool, BoardError> {
        let cells = self.row(row)?;
        usize::try_from(column)
            .ok()
            .and_then(|c| cells.get(c))
            .copied()
            .ok_or(BoardError::ColumnOutOfRange {
                row,
                column,
                columns: cells.len(),
            })
    }

    /// Returns the cell at `(row, column)`, or `default` if the position is
    /// not on the board.
    #[must_use]
    #[inline]
    pub fn get_or(&self, row: isize, column: isize, default: bool) -> bool {
        let row = usize::try_from(row).ok().and_then(|r| self.rows.get(r));
        let column = usize::try_from(column).ok();
        match (row, column) {
            (Some(cells), Some(c)) => cells.get(c).copied().unwrap_or(default),
            _ => default,
        }
    }

    /// Sets the cell at `(row, column)` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowOutOfRange`] or [`BoardError::ColumnOutOfRange`]
    /// if the position is not on the board.
    pub fn set(&mut self, row: isize, column: isize, value: bool) -> Result<(), BoardError> {
        let rows = self.rows.len();
        let cells = usize::try_from(row)
            .ok()
            .and_then(|r| self.rows.get_mut(r))
            .ok_or(BoardError::RowOutOfRange { row, rows })?;
        let columns = cells.len();
        let cell = usize::try_from(column)
            .ok()
            .and_then(|c| cells.get_mut(c))
            .ok_or(BoardError::ColumnOutOfRange {
                row,
                column,
                columns,
            })?;
        *cell = value;
        Ok(())
    }

    /// Returns an iterator over the rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.rows.iter().map(AsRef::as_ref)
    }

    /// Returns the number of live cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.rows().map(|row| row.iter().filter(|&&c| c).count()).sum()
    }

    /// Returns an independent copy of the cells as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    fn row(&self, row: isize) -> Result<&[bool], BoardError> {
        usize::try_from(row)
            .ok()
            .and_then(|r| self.rows.get(r))
            .map(AsRef::as_ref)
            .ok_or(BoardError::RowOutOfRange {
                row,
                rows: self.rows.len(),
            })
    }
}

impl TryFrom<Vec<Vec<bool>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<&Board> for Vec<Vec<bool>> {
    fn from(board: &Board) -> Self {
        board.to_rows()
    }
}

/// Errors raised when parsing a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseBoardError {
    /// A character other than `0`, `1`, or blank space was found.
    #[display("invalid board: unexpected character {found:?} at line {line}, column {column}")]
    InvalidCell {
        /// 1-based line number.
        line: usize,
        /// 1-based character position within the line.
        column: usize,
        /// The offending character.
        found: char,
    },
    /// The parsed rows did not form a valid board.
    #[display("invalid board: {_0}")]
    Board(#[from] BoardError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses one row per non-blank line, `1` for live and `0` for dead cells.
    ///
    /// Spaces and tabs are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = vec![];
        for (line_index, line) in s.lines().enumerate() {
            let mut row = vec![];
            for (char_index, ch) in line.chars().enumerate() {
                match ch {
                    '0' => row.push(false),
                    '1' => row.push(true),
                    ' ' | '\t' | '\r' => {}
                    found => {
                        return Err(ParseBoardError::InvalidCell {
                            line: line_index + 1,
                            column: char_index + 1,
                            found,
                        });
                    }
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Ok(Self::from_rows(&rows)?)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for (j, &cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(if cell { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}
