//! # dice-duel
//!
//! Core of a two-player dice game. Each player rolls three dice; the higher
//! total wins.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The core never touches widgets. Everything visible is
//!    reported through the `DiceView` trait.
//!
//! 2. **Injected Randomness**: Sessions draw from any `RngCore`. The default
//!    `GameRng` is seedable, so whole games replay deterministically.
//!
//! 3. **Explicit Ownership**: A `GameSession` is built and owned by the
//!    embedder. There is no global game state.
//!
//! ## Rolling
//!
//! A roll is a decelerating animation: a fixed number of draws separated by
//! growing pauses. `RollAnimation` is the step-by-step state machine;
//! `roll_die` runs it on Tokio timers. Rolls on different dice can run
//! concurrently on a single thread.
//!
//! ## Modules
//!
//! - `core`: Dice, players, RNG, configuration, errors
//! - `session`: Game session, roll animation, evaluation outcome
//! - `view`: UI boundary trait and the bundled views

pub mod core;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    AnimationConfig, DiceError, DiceResult, Die, DieSlot, GameRng, Player, PlayerId,
    SessionConfig,
};

pub use crate::session::{roll_die, DelaySchedule, GameSession, Outcome, RollAnimation, RollStep};

pub use crate::view::{ConsoleView, DiceView, NullView, RecordingView, ViewEvent};
