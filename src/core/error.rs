//! Error type shared by dice and session operations.

use std::fmt;

/// Errors raised by dice construction, configuration and roll requests.
///
/// `reset` and `evaluate` never fail, so only argument and index checks
/// appear here.
#[derive(Clone, Debug, PartialEq)]
pub enum DiceError {
    /// A construction or configuration argument is outside its valid range.
    InvalidArgument {
        /// Name of the offending argument.
        what: &'static str,
        /// The rejected value, rendered for display.
        value: String,
    },
    /// A roll was requested for a player or die that does not exist.
    OutOfRange {
        player_index: usize,
        dice_index: usize,
    },
}

impl DiceError {
    pub(crate) fn invalid(what: &'static str, value: impl fmt::Display) -> Self {
        DiceError::InvalidArgument {
            what,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for DiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceError::InvalidArgument { what, value } => {
                write!(f, "invalid {}: {}", what, value)
            }
            DiceError::OutOfRange {
                player_index,
                dice_index,
            } => write!(
                f,
                "no die at player {} / dice {} (players 0-1, dice 0-2)",
                player_index, dice_index
            ),
        }
    }
}

impl std::error::Error for DiceError {}

/// Result alias for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DiceError::invalid("face count", 101);
        assert_eq!(err.to_string(), "invalid face count: 101");

        let err = DiceError::OutOfRange {
            player_index: 2,
            dice_index: 0,
        };
        assert!(err.to_string().contains("player 2"));
    }
}
