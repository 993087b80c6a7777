//! Terminal rendering of the dice board.
//!
//! The board is redrawn in place on one line:
//!
//! ```text
//! Player 1 [3] [5] [?]   Player 2 [ ] [ ] [ ]   rolling...
//! ```
//!
//! `[?]` is an enabled unrolled die, `[ ]` a disabled one. Outcome messages
//! go on their own line.

use std::io::Write;

use crate::core::{DieSlot, PlayerId, DICE_PER_PLAYER, PLAYER_COUNT};
use crate::session::Outcome;

use super::DiceView;

#[derive(Clone, Copy, Debug)]
struct Cell {
    face: Option<u32>,
    enabled: bool,
}

/// Renders the board to any writer (stdout by default).
pub struct ConsoleView<W: Write = std::io::Stdout> {
    out: W,
    board: [[Cell; DICE_PER_PLAYER]; PLAYER_COUNT],
    controls_enabled: bool,
}

impl ConsoleView<std::io::Stdout> {
    /// A view drawing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    /// A view drawing to `out`, starting from an empty enabled board.
    pub fn new(out: W) -> Self {
        Self {
            out,
            board: [[Cell { face: None, enabled: true }; DICE_PER_PLAYER]; PLAYER_COUNT],
            controls_enabled: true,
        }
    }

    /// Consume the view and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_line(&self) -> String {
        let mut line = String::new();
        for player in PlayerId::all() {
            if player.index() > 0 {
                line.push_str("   ");
            }
            line.push_str(&player.to_string());
            for cell in &self.board[player.index()] {
                match (cell.face, cell.enabled) {
                    (Some(face), _) => line.push_str(&format!(" [{}]", face)),
                    (None, true) => line.push_str(" [?]"),
                    (None, false) => line.push_str(" [ ]"),
                }
            }
        }
        if !self.controls_enabled {
            line.push_str("   rolling...");
        }
        line
    }

    fn redraw(&mut self) {
        let line = self.render_line();
        let result = write!(self.out, "\r{:<72}", line).and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::warn!("console redraw failed: {}", e);
        }
    }

    fn cell_mut(&mut self, slot: DieSlot) -> &mut Cell {
        &mut self.board[slot.player().index()][slot.die_index()]
    }
}

impl<W: Write> DiceView for ConsoleView<W> {
    fn show_face(&mut self, slot: DieSlot, face: Option<u32>) {
        self.cell_mut(slot).face = face;
        self.redraw();
    }

    fn set_die_enabled(&mut self, slot: DieSlot, enabled: bool) {
        self.cell_mut(slot).enabled = enabled;
        self.redraw();
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
        self.redraw();
    }

    fn show_outcome(&mut self, outcome: Option<&Outcome>) {
        let Some(outcome) = outcome else {
            return;
        };
        if let Err(e) = writeln!(self.out, "\n{}", outcome) {
            log::warn!("console message failed: {}", e);
        }
    }
}
