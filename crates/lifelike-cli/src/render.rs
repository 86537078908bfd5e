//! Terminal output of successive generations.

use std::io::{self, Write};

use lifelike_core::{Board, RuleTable};

/// Writes generations to a terminal, optionally redrawing in place.
#[derive(Debug)]
pub struct Renderer<W> {
    out: W,
    animate: bool,
    drawn_lines: usize,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    ///
    /// With `animate`, each frame overwrites the previous one using ANSI
    /// cursor movement.
    pub fn new(out: W, animate: bool) -> Self {
        Self {
            out,
            animate,
            drawn_lines: 0,
        }
    }

    /// Writes the run header.
    pub fn header(
        &mut self,
        rule: &RuleTable,
        generations: usize,
        delay_ms: u64,
    ) -> io::Result<()> {
        writeln!(self.out, "[{rule}] for {generations} generations @ {delay_ms}ms")
    }

    /// Writes one generation.
    pub fn frame(&mut self, generation: usize, board: &Board) -> io::Result<()> {
        if self.animate && self.drawn_lines > 0 {
            // Move to the first line of the previous frame.
            write!(self.out, "\x1b[{}A", self.drawn_lines)?;
        }
        let clear = if self.animate { "\x1b[2K" } else { "" };
        writeln!(self.out, "{clear}Generation: {generation}")?;
        for line in board.to_string().lines() {
            writeln!(self.out, "{clear}{line}")?;
        }
        self.drawn_lines = board.row_count() + 1;
        self.out.flush()
    }
}
