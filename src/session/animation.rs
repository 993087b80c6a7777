//! Roll animation.
//!
//! A roll draws `spin_count` faces with a growing pause after each one, so
//! the die appears to spin and slow down. Only the last draw counts.
//!
//! `RollAnimation` is the animation as a state machine with no notion of
//! time: each `step` draws one face and says how long to wait. `roll_die`
//! drives it with Tokio timers. Session borrows are released before every
//! pause, so several dice can roll concurrently on one thread.
//!
//! ```
//! use std::cell::RefCell;
//! use dice_duel::core::SessionConfig;
//! use dice_duel::session::{roll_die, GameSession};
//! use dice_duel::view::NullView;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let session = RefCell::new(GameSession::new(&SessionConfig::default().with_seed(7), NullView).unwrap());
//! let (a, b) = tokio::join!(roll_die(&session, 0, 0), roll_die(&session, 1, 0));
//! assert!(a.is_ok() && b.is_ok());
//! # });
//! ```

use std::cell::RefCell;
use std::time::Duration;

use rand::RngCore;

use crate::core::{AnimationConfig, DiceResult, DieSlot};
use crate::view::DiceView;

use super::game::GameSession;

/// Pauses between draws: `base, base·f, base·f², …`, `spin_count` items.
///
/// Each delay is strictly longer than the previous one, even when the
/// multiplication rounds to the same nanosecond. Delays saturate at
/// `Duration::MAX` instead of overflowing.
#[derive(Clone, Debug)]
pub struct DelaySchedule {
    next: Duration,
    factor: f64,
    remaining: u32,
}

impl DelaySchedule {
    /// Schedule for one roll under `config`.
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            next: config.base_delay,
            factor: config.growth_factor,
            remaining: config.spin_count,
        }
    }
}

impl Iterator for DelaySchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.next;
        let grown = Duration::try_from_secs_f64(current.as_secs_f64() * self.factor)
            .unwrap_or(Duration::MAX);
        self.next = grown.max(current.saturating_add(Duration::from_nanos(1)));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DelaySchedule {}

/// What a single animation step produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollStep {
    /// A face was drawn and shown; wait `delay` before the next step.
    Spin { face: u32, delay: Duration },
    /// The animation is over and the die rests on `face`.
    Settled { face: u32 },
}

/// One die's roll in progress.
///
/// Created by `GameSession::start_roll`. Cancellation is not supported:
/// an animation dropped before it settles leaves the session controls
/// disabled.
#[derive(Clone, Debug)]
pub struct RollAnimation {
    slot: DieSlot,
    schedule: DelaySchedule,
    last_face: Option<u32>,
    finished: bool,
}

impl RollAnimation {
    pub(crate) fn new(slot: DieSlot, config: &AnimationConfig) -> Self {
        Self {
            slot,
            schedule: DelaySchedule::new(config),
            last_face: None,
            finished: false,
        }
    }

    /// The die being rolled.
    #[must_use]
    pub fn slot(&self) -> DieSlot {
        self.slot
    }

    /// Whether `Settled` has been returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance the animation by one draw.
    ///
    /// After the last spin the next call settles the die and releases the
    /// session controls. Stepping a settled animation returns the same
    /// `Settled` again without touching the session.
    pub fn step<V: DiceView, R: RngCore>(&mut self, session: &mut GameSession<V, R>) -> RollStep {
        if self.finished {
            if let Some(face) = self.last_face {
                return RollStep::Settled { face };
            }
        }

        if let Some(delay) = self.schedule.next() {
            let face = session.draw(self.slot);
            self.last_face = Some(face);
            log::debug!("{} spins to {}, next in {:?}", self.slot, face, delay);
            return RollStep::Spin { face, delay };
        }

        let face = match self.last_face {
            Some(face) => face,
            None => session.draw(self.slot),
        };
        self.last_face = Some(face);
        self.finished = true;
        session.finish_roll(self.slot, face);
        RollStep::Settled { face }
    }
}

/// Roll a die with its full animation and return the settled face.
///
/// Fails with `OutOfRange` for `player_index >= 2` or `dice_index >= 3`
/// before anything is shown.
pub async fn roll_die<V: DiceView, R: RngCore>(
    session: &RefCell<GameSession<V, R>>,
    player_index: usize,
    dice_index: usize,
) -> DiceResult<u32> {
    let mut animation = session.borrow_mut().start_roll(player_index, dice_index)?;

    loop {
        let step = {
            let mut guard = session.borrow_mut();
            animation.step(&mut *guard)
        };
        match step {
            RollStep::Spin { delay, .. } => tokio::time::sleep(delay).await,
            RollStep::Settled { face } => return Ok(face),
        }
    }
}
