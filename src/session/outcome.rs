//! Result of evaluating a session.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Outcome of comparing both players' dice totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one die is unset; no winner yet.
    InProgress,
    /// First player has the strictly higher total.
    Player1Wins { sum: u32 },
    /// Second player has the strictly higher total.
    Player2Wins { sum: u32 },
    /// Both totals are equal.
    Tie { sum: u32 },
}

impl Outcome {
    /// Compare two player totals. `None` means that player still has an
    /// unset die.
    #[must_use]
    pub fn from_sums(first: Option<u32>, second: Option<u32>) -> Self {
        match (first, second) {
            (Some(a), Some(b)) if a > b => Outcome::Player1Wins { sum: a },
            (Some(a), Some(b)) if b > a => Outcome::Player2Wins { sum: b },
            (Some(a), Some(_)) => Outcome::Tie { sum: a },
            _ => Outcome::InProgress,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Player1Wins { .. } => Some(PlayerId::new(0)),
            Outcome::Player2Wins { .. } => Some(PlayerId::new(1)),
            Outcome::Tie { .. } | Outcome::InProgress => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    /// Whether all dice were settled when this outcome was computed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// The message shown on the result surface.
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "Roll all dice before evaluating."),
            Outcome::Player1Wins { sum } => write!(f, "{} wins with {}!", PlayerId::new(0), sum),
            Outcome::Player2Wins { sum } => write!(f, "{} wins with {}!", PlayerId::new(1), sum),
            Outcome::Tie { sum } => write!(f, "Tie at {}!", sum),
        }
    }
}
