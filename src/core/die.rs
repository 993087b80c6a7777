//! A single die with a configurable face count.
//!
//! A die is either unset (not rolled since the last reset) or settled on a
//! face in `1..=face_count`. The randomness source is passed in on every
//! roll, so tests can drive dice with a seeded `GameRng`.
//!
//! ```
//! use dice_duel::core::{Die, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut die = Die::new(6).unwrap();
//! assert_eq!(die.face_value(), None);
//!
//! let face = die.roll(&mut rng);
//! assert_eq!(die.face_value(), Some(face));
//!
//! die.reset();
//! assert!(!die.is_settled());
//! ```

use rand::{Rng, RngCore};

use super::error::{DiceError, DiceResult};

/// Smallest allowed face count.
pub const MIN_FACE_COUNT: u32 = 2;
/// Largest allowed face count.
pub const MAX_FACE_COUNT: u32 = 100;
/// Face count of a standard die.
pub const DEFAULT_FACE_COUNT: u32 = 6;

/// A randomizable die.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Die {
    face_count: u32,
    face_value: Option<u32>,
}

impl Die {
    /// Create an unset die with `face_count` faces.
    ///
    /// Fails with `InvalidArgument` unless `2 <= face_count <= 100`.
    pub fn new(face_count: i64) -> DiceResult<Self> {
        if face_count < i64::from(MIN_FACE_COUNT) || face_count > i64::from(MAX_FACE_COUNT) {
            return Err(DiceError::invalid("face count", face_count));
        }

        Ok(Self {
            face_count: face_count as u32,
            face_value: None,
        })
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Current face, or `None` if the die has not been rolled since the
    /// last reset.
    #[must_use]
    pub fn face_value(&self) -> Option<u32> {
        self.face_value
    }

    /// Whether the die holds a drawn value.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.face_value.is_some()
    }

    /// Draw a uniform face in `1..=face_count`, store it and return it.
    pub fn roll<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let face = rng.gen_range(1..=self.face_count);
        self.face_value = Some(face);
        face
    }

    /// Clear the face back to unset.
    pub fn reset(&mut self) {
        self.face_value = None;
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            face_count: DEFAULT_FACE_COUNT,
            face_value: None,
        }
    }
}
