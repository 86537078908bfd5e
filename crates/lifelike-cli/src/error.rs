//! Errors of the command-line front end.

use std::{io, path::PathBuf};

use lifelike_core::{BoardError, ParseBoardError, RuleError};
use rand::distr::BernoulliError;

/// Errors reported by the `lifelike` command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The `--rule` argument is neither a preset name nor a valid rule string.
    #[display("{_0}")]
    Rule(#[from] RuleError),
    /// The board text could not be parsed.
    #[display("{_0}")]
    ParseBoard(#[from] ParseBoardError),
    /// The board could not be built.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// The `--density` argument is not a probability.
    #[display("invalid density {density}: {source}")]
    Density {
        /// The rejected density.
        density: f64,
        /// Why it was rejected.
        source: BernoulliError,
    },
    /// The board file or stdin could not be read.
    #[display("failed to read board from {}: {source}", path.display())]
    ReadBoard {
        /// The path that was read, `-` for stdin.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Writing to stdout failed.
    #[display("failed to write output: {_0}")]
    Output(#[from] io::Error),
}
