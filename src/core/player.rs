//! Players and die addressing.
//!
//! ## PlayerId
//!
//! A session always seats exactly two players, `PlayerId(0)` and
//! `PlayerId(1)`. A player has no identity beyond this index.
//!
//! ## DieSlot
//!
//! Validated `(player, die)` coordinates. Building a slot is the single
//! place where roll indices are checked, so everything downstream can index
//! without bounds failures.

use serde::{Deserialize, Serialize};

use super::die::Die;
use super::error::{DiceError, DiceResult};

/// Number of players in a session.
pub const PLAYER_COUNT: usize = 2;
/// Number of dice each player holds.
pub const DICE_PER_PLAYER: usize = 3;

/// Player identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Both players, in seating order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

/// Players are shown 1-based, the way the game announces them.
impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Position of one die within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieSlot {
    player: PlayerId,
    die: u8,
}

impl DieSlot {
    /// Validate raw indices into a slot.
    ///
    /// Fails with `OutOfRange` unless `player_index < 2` and
    /// `dice_index < 3`.
    pub fn new(player_index: usize, dice_index: usize) -> DiceResult<Self> {
        if player_index >= PLAYER_COUNT || dice_index >= DICE_PER_PLAYER {
            return Err(DiceError::OutOfRange {
                player_index,
                dice_index,
            });
        }

        Ok(Self {
            player: PlayerId(player_index as u8),
            die: dice_index as u8,
        })
    }

    /// Owning player.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        self.player
    }

    /// Position of the die within its player (0 = first).
    #[must_use]
    pub const fn die_index(self) -> usize {
        self.die as usize
    }

    /// All six slots, player by player.
    pub fn all() -> impl Iterator<Item = DieSlot> {
        PlayerId::all().flat_map(|player| {
            (0..DICE_PER_PLAYER as u8).map(move |die| DieSlot { player, die })
        })
    }
}

impl std::fmt::Display for DieSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = ["first", "second", "third"][self.die_index()];
        write!(f, "{} {} die", self.player, name)
    }
}

/// One player's ordered set of three dice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Player {
    dice: [Die; DICE_PER_PLAYER],
}

impl Player {
    /// Create a player whose dice all have `face_count` faces.
    pub fn new(face_count: i64) -> DiceResult<Self> {
        Ok(Self {
            dice: [
                Die::new(face_count)?,
                Die::new(face_count)?,
                Die::new(face_count)?,
            ],
        })
    }

    /// The player's dice in order.
    #[must_use]
    pub fn dice(&self) -> &[Die; DICE_PER_PLAYER] {
        &self.dice
    }

    pub(crate) fn die(&self, index: usize) -> &Die {
        &self.dice[index]
    }

    pub(crate) fn die_mut(&mut self, index: usize) -> &mut Die {
        &mut self.dice[index]
    }

    /// Sum of all three faces, or `None` while any die is unset.
    #[must_use]
    pub fn sum(&self) -> Option<u32> {
        self.dice.iter().map(Die::face_value).sum()
    }

    /// Clear every die.
    pub fn reset(&mut self) {
        for die in &mut self.dice {
            die.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(PlayerId::all().count(), 2);
    }

    #[test]
    fn test_slot_validation() {
        assert!(DieSlot::new(0, 0).is_ok());
        assert!(DieSlot::new(1, 2).is_ok());
        assert_eq!(
            DieSlot::new(2, 0),
            Err(DiceError::OutOfRange {
                player_index: 2,
                dice_index: 0
            })
        );
        assert!(DieSlot::new(0, 3).is_err());
    }

    #[test]
    fn test_all_slots() {
        let slots: Vec<_> = DieSlot::all().collect();
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0], DieSlot::new(0, 0).unwrap());
        assert_eq!(slots[5], DieSlot::new(1, 2).unwrap());
        assert_eq!(slots[4].to_string(), "Player 2 second die");
    }

    #[test]
    fn test_sum_unset_until_all_rolled() {
        let mut rng = GameRng::new(42);
        let mut player = Player::default();
        assert_eq!(player.sum(), None);

        player.die_mut(0).roll(&mut rng);
        player.die_mut(1).roll(&mut rng);
        assert_eq!(player.sum(), None);

        player.die_mut(2).roll(&mut rng);
        let expected: u32 = player.dice().iter().filter_map(Die::face_value).sum();
        assert_eq!(player.sum(), Some(expected));
    }

    #[test]
    fn test_reset_clears_all_dice() {
        let mut rng = GameRng::new(1);
        let mut player = Player::new(12).unwrap();
        for i in 0..DICE_PER_PLAYER {
            player.die_mut(i).roll(&mut rng);
        }
        player.reset();
        assert!(player.dice().iter().all(|d| !d.is_settled()));
        assert_eq!(player.die(0).face_count(), 12);
    }
}
