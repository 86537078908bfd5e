//! Where the initial board comes from.

use std::{
    fs,
    io::{self, Read as _},
    path::Path,
};

use lifelike_core::{Board, Preset, RuleTable};
use rand::{
    SeedableRng as _,
    distr::{Bernoulli, Distribution as _},
};
use rand_pcg::Pcg64;

use crate::{error::CliError, size::BoardSize};

/// Resolves a `--rule` argument: a preset name, otherwise a rule string.
pub fn resolve_rule(arg: &str) -> Result<RuleTable, CliError> {
    if let Some(preset) = Preset::from_name(arg) {
        log::debug!("using preset {preset}");
        return Ok(preset.into());
    }
    Ok(RuleTable::new(arg)?)
}

/// Reads a board in text form from `path`, or from stdin when `path` is `-`.
pub fn read_board(path: &Path) -> Result<Board, CliError> {
    let read = || -> io::Result<String> {
        if path == Path::new("-") {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        } else {
            fs::read_to_string(path)
        }
    };
    let text = read().map_err(|source| CliError::ReadBoard {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text.parse()?)
}

/// Generates a board whose cells are alive with probability `density`.
///
/// The same `seed` always produces the same board.
pub fn random_board(size: BoardSize, density: f64, seed: u64) -> Result<Board, CliError> {
    let alive = Bernoulli::new(density).map_err(|source| CliError::Density { density, source })?;
    let mut rng = Pcg64::seed_from_u64(seed);
    let rows = (0..size.rows)
        .map(|_| {
            (0..size.columns)
                .map(|_| alive.sample(&mut rng))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    Ok(Board::from_rows(&rows)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use lifelike_core::{BoardError, ParseBoardError};
    use tempfile::NamedTempFile;

    use super::*;

    const SIZE: BoardSize = BoardSize {
        rows: 6,
        columns: 9,
    };

    #[test]
    fn test_resolve_rule() {
        assert_eq!(
            resolve_rule("replicator").unwrap(),
            RuleTable::from_preset(Preset::Replicator)
        );
        assert_eq!(resolve_rule("LIFE").unwrap(), RuleTable::default());
        assert_eq!(resolve_rule("B36S23").unwrap().to_string(), "B36S23");
        assert!(matches!(resolve_rule("B3/S23"), Err(CliError::Rule(_))));
    }

    #[test]
    fn test_rule_error_message() {
        let err = resolve_rule("B3/S23").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid rule: unexpected character '/' at position 2, \
             rules may only contain B, S, and digits"
        );
        assert_eq!(
            resolve_rule("").unwrap_err().to_string(),
            "invalid rule: the rule string is empty"
        );
    }

    #[test]
    fn test_random_board_is_reproducible() {
        let a = random_board(SIZE, 0.5, 42).unwrap();
        let b = random_board(SIZE, 0.5, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.row_count(), 6);
        assert_eq!(a.row_len(0), Ok(9));
    }

    #[test]
    fn test_random_board_density_bounds() {
        assert_eq!(random_board(SIZE, 0.0, 7).unwrap().live_count(), 0);
        assert_eq!(random_board(SIZE, 1.0, 7).unwrap().live_count(), 54);
        assert!(matches!(
            random_board(SIZE, 1.5, 7),
            Err(CliError::Density { .. })
        ));
    }

    fn board_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_board_file() {
        let file = board_file("010\n010\n010\n");
        let board = read_board(file.path()).unwrap();
        assert_eq!(board, "010\n010\n010".parse::<Board>().unwrap());
        assert_eq!(board.live_count(), 3);
    }

    #[test]
    fn test_read_invalid_board_file() {
        let file = board_file("010\n0?0\n");
        let err = read_board(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::ParseBoard(ParseBoardError::InvalidCell {
                line: 2,
                column: 2,
                found: '?'
            })
        ));

        let file = board_file("\n\n");
        assert!(matches!(
            read_board(file.path()),
            Err(CliError::ParseBoard(ParseBoardError::Board(BoardError::NoRows)))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_board(Path::new("/nonexistent/board.txt")).unwrap_err();
        assert!(matches!(err, CliError::ReadBoard { .. }));
    }
}
