//! Generation-by-generation simulation with a sliding neighborhood window.
//!
//! Each row is scanned left to right. The first cell's neighborhood is
//! encoded from the board; every following one is derived from its left
//! neighbor with [`Neighborhood::slide_right`] and three fresh reads, so a
//! cell costs three board reads instead of nine.
//!
//! Cells beyond the board are dead, as if the board were surrounded by an
//! infinite dead border. Every generation reads only the previous one and
//! writes a newly allocated board.
//!
//! # Examples
//!
//! ```
//! use lifelike_core::{Board, RuleTable, Simulator};
//!
//! let blinker: Board = "
//! 000
//! 111
//! 000
//! ".parse()?;
//!
//! let simulator = Simulator::new(RuleTable::default());
//! let next = simulator.step(&blinker);
//! assert_eq!(next.to_string(), "0 1 0\n0 1 0\n0 1 0");
//! assert_eq!(simulator.run(&blinker, 2), blinker);
//! # Ok::<(), lifelike_core::ParseBoardError>(())
//! ```

use crate::{Board, NeighborPosition, Neighborhood, RuleTable};

/// Applies a [`RuleTable`] to whole boards.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    rule: RuleTable,
}

impl Simulator {
    /// Creates a simulator for `rule`.
    #[must_use]
    pub fn new(rule: RuleTable) -> Self {
        Self { rule }
    }

    /// Returns the rule this simulator applies.
    #[must_use]
    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// Simulates `generations` generations starting from `board`.
    ///
    /// Returns a copy of `board` when `generations` is zero. The input is
    /// never modified.
    #[must_use]
    pub fn run(&self, board: &Board, generations: usize) -> Board {
        let mut current = board.clone();
        for _ in 0..generations {
            current = self.step(&current);
        }
        current
    }

    /// Computes the generation following `board`.
    #[must_use]
    pub fn step(&self, board: &Board) -> Board {
        let rows = (0..)
            .zip(board.rows())
            .map(|(row, cells)| self.step_row(board, row, cells.len()))
            .collect();
        Board::from_shaped_rows(rows)
    }

    /// Returns an endless iterator over the generations after `board`.
    ///
    /// The first item is the generation following `board`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifelike_core::{Board, RuleTable, Simulator};
    ///
    /// let block: Board = "11\n11".parse()?;
    /// let simulator = Simulator::new(RuleTable::default());
    /// assert!(simulator.generations(&block).take(5).all(|b| b == block));
    /// # Ok::<(), lifelike_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn generations(&self, board: &Board) -> Generations<'_> {
        Generations {
            simulator: self,
            current: board.clone(),
        }
    }

    fn step_row(&self, board: &Board, row: isize, len: usize) -> Box<[bool]> {
        let mut neighborhood = Neighborhood::from_board(board, row, 0);
        let mut cells = Vec::with_capacity(len);
        cells.push(self.rule.evaluate(neighborhood));
        for column in (1..).take(len.saturating_sub(1)) {
            let right = column + 1;
            neighborhood = neighborhood
                .slide_right()
                .with_cell(
                    NeighborPosition::TopRight,
                    board.get_or(row - 1, right, false),
                )
                .with_cell(NeighborPosition::MiddleRight, board.get_or(row, right, false))
                .with_cell(
                    NeighborPosition::BottomRight,
                    board.get_or(row + 1, right, false),
                );
            cells.push(self.rule.evaluate(neighborhood));
        }
        cells.into()
    }
}

/// Iterator over successive generations, created by [`Simulator::generations`].
#[derive(Debug, Clone)]
pub struct Generations<'a> {
    simulator: &'a Simulator,
    current: Board,
}

impl Iterator for Generations<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.simulator.step(&self.current);
        self.current = next.clone();
        Some(next)
    }
}
