//! Game session: two players, animated rolls, reset and evaluation.

pub mod animation;
pub mod game;
pub mod outcome;

pub use animation::{roll_die, DelaySchedule, RollAnimation, RollStep};
pub use game::GameSession;
pub use outcome::Outcome;
