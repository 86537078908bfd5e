//! Core engine for two-state, life-like cellular automata.
//!
//! This crate simulates automata such as Conway's Game of Life on finite
//! boards. Cells beyond the edge of a board are always dead.
//!
//! # Overview
//!
//! The crate is organized from leaves up:
//!
//! 1. **Bit primitives** - [`bits`]: set/test/shift/clear on a `u16` bit vector.
//! 2. **Boards** - [`board`]: a finite grid of cells with bounds-checked and
//!    fallback reads, plus a `0`/`1` text form.
//! 3. **Neighborhoods** - [`neighborhood`]: the 3×3 window around a cell
//!    packed into 9 bits, with an O(1) slide to the next column.
//! 4. **Rules** - [`rule`]: `B`/`S` rule strings compiled into a 512-entry
//!    lookup table.
//! 5. **Simulation** - [`simulator`]: row-major sweeps that combine the
//!    above to compute new generations.
//!
//! # Examples
//!
//! ```
//! use lifelike_core::{Board, Preset, RuleTable, Simulator};
//!
//! let board: Board = "
//! 001
//! 001
//! 001
//! ".parse()?;
//!
//! let simulator = Simulator::new(RuleTable::from_preset(Preset::Life));
//! let next = simulator.step(&board);
//! assert_eq!(
//!     next.to_rows(),
//!     vec![
//!         vec![false, false, false],
//!         vec![false, true, true],
//!         vec![false, false, false],
//!     ]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bits;
pub mod board;
pub mod neighborhood;
pub mod rule;
pub mod simulator;

pub use self::{
    board::{Board, BoardError, ParseBoardError},
    neighborhood::{NeighborPosition, Neighborhood, NeighborhoodError},
    rule::{NeighborCounts, Preset, RuleError, RuleTable},
    simulator::{Generations, Simulator},
};
