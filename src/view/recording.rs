//! A view that records every report in order.

use crate::core::DieSlot;
use crate::session::Outcome;

use super::DiceView;

/// One report received by a `RecordingView`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Face(DieSlot, Option<u32>),
    DieEnabled(DieSlot, bool),
    ControlsEnabled(bool),
    Message(Option<Outcome>),
}

/// Keeps an ordered log of reports.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
}

impl RecordingView {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Drop the recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Faces shown for `slot`, in order. Cleared displays are skipped.
    #[must_use]
    pub fn faces_for(&self, slot: DieSlot) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Face(s, Some(face)) if *s == slot => Some(*face),
                _ => None,
            })
            .collect()
    }

    /// Most recent enabled state reported for `slot`.
    #[must_use]
    pub fn die_enabled(&self, slot: DieSlot) -> Option<bool> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::DieEnabled(s, enabled) if *s == slot => Some(*enabled),
            _ => None,
        })
    }

    /// Most recent enabled state of the evaluate/reset controls.
    #[must_use]
    pub fn controls_enabled(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::ControlsEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// Most recent message state; `Some(None)` means the message was cleared.
    #[must_use]
    pub fn message(&self) -> Option<Option<Outcome>> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::Message(outcome) => Some(*outcome),
            _ => None,
        })
    }
}

impl DiceView for RecordingView {
    fn show_face(&mut self, slot: DieSlot, face: Option<u32>) {
        self.events.push(ViewEvent::Face(slot, face));
    }

    fn set_die_enabled(&mut self, slot: DieSlot, enabled: bool) {
        self.events.push(ViewEvent::DieEnabled(slot, enabled));
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.events.push(ViewEvent::ControlsEnabled(enabled));
    }

    fn show_outcome(&mut self, outcome: Option<&Outcome>) {
        self.events.push(ViewEvent::Message(outcome.copied()));
    }
}
