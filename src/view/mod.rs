//! UI boundary.
//!
//! The game core never touches widgets. It reports everything the player
//! should see through `DiceView`:
//! - `show_face`: every intermediate and final face, or a cleared display
//! - `set_die_enabled`: a die's roll control
//! - `set_controls_enabled`: the evaluate and reset triggers
//! - `show_outcome`: the result message surface
//!
//! `NullView` discards reports, `RecordingView` keeps them for inspection,
//! `ConsoleView` draws a one-line board on a terminal.

pub mod console;
pub mod recording;

pub use console::ConsoleView;
pub use recording::{RecordingView, ViewEvent};

use crate::core::DieSlot;
use crate::session::Outcome;

/// Receiver of everything the session wants displayed.
pub trait DiceView {
    /// Display a die's face, or clear it with `None`.
    fn show_face(&mut self, slot: DieSlot, face: Option<u32>);

    /// Enable or disable a die's roll control.
    fn set_die_enabled(&mut self, slot: DieSlot, enabled: bool);

    /// Enable or disable the evaluate and reset controls together.
    fn set_controls_enabled(&mut self, enabled: bool);

    /// Show an evaluation result, or clear the message with `None`.
    fn show_outcome(&mut self, outcome: Option<&Outcome>);
}

/// A view that ignores every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl DiceView for NullView {
    fn show_face(&mut self, _slot: DieSlot, _face: Option<u32>) {}
    fn set_die_enabled(&mut self, _slot: DieSlot, _enabled: bool) {}
    fn set_controls_enabled(&mut self, _enabled: bool) {}
    fn show_outcome(&mut self, _outcome: Option<&Outcome>) {}
}

impl<V: DiceView + ?Sized> DiceView for &mut V {
    fn show_face(&mut self, slot: DieSlot, face: Option<u32>) {
        (**self).show_face(slot, face)
    }

    fn set_die_enabled(&mut self, slot: DieSlot, enabled: bool) {
        (**self).set_die_enabled(slot, enabled)
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        (**self).set_controls_enabled(enabled)
    }

    fn show_outcome(&mut self, outcome: Option<&Outcome>) {
        (**self).show_outcome(outcome)
    }
}
