//! Random board dimensions.

use std::str::FromStr;

/// Dimensions of a random board, written `ROWSxCOLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{rows}x{columns}")]
pub struct BoardSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
        }
    }
}

/// Errors raised when parsing a [`BoardSize`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSizeError {
    /// The separator `x` is missing.
    #[display("expected ROWSxCOLS, got {input:?}")]
    MissingSeparator {
        /// The rejected text.
        input: String,
    },
    /// A dimension is not a positive integer.
    #[display("invalid dimension {input:?}: expected a positive integer")]
    InvalidDimension {
        /// The rejected dimension.
        input: String,
    },
}

impl FromStr for BoardSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, columns) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| ParseSizeError::MissingSeparator {
                input: s.to_owned(),
            })?;
        Ok(Self {
            rows: parse_dimension(rows)?,
            columns: parse_dimension(columns)?,
        })
    }
}

fn parse_dimension(s: &str) -> Result<usize, ParseSizeError> {
    s.trim()
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ParseSizeError::InvalidDimension {
            input: s.to_owned(),
        })
}
