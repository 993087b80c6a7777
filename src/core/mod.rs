//! Core game types: dice, players, RNG, configuration, errors.
//!
//! Nothing in here knows about animation or the UI; the session layer
//! builds on these types.

pub mod error;
pub mod rng;
pub mod die;
pub mod player;
pub mod config;

pub use error::{DiceError, DiceResult};
pub use rng::GameRng;
pub use die::{Die, DEFAULT_FACE_COUNT, MAX_FACE_COUNT, MIN_FACE_COUNT};
pub use player::{DieSlot, Player, PlayerId, DICE_PER_PLAYER, PLAYER_COUNT};
pub use config::{AnimationConfig, SessionConfig};
