//! The two-player game session.
//!
//! `GameSession` owns both players' dice, the randomness source and the UI
//! view. It is created once by whatever embeds the game and lives until the
//! embedder drops it.
//!
//! ## Control flow
//!
//! - `start_roll` claims a die and returns a `RollAnimation`; stepping the
//!   animation draws faces until it settles (see `roll_die` for the timed
//!   driver).
//! - `reset_all` clears every die and re-enables all controls.
//! - `evaluate` compares totals without touching any die.
//!
//! Per die: `Unset -> roll -> Settled -> reset -> Unset`.

use rand::RngCore;

use crate::core::{
    AnimationConfig, DiceResult, Die, DieSlot, GameRng, Player, PlayerId, SessionConfig,
    DICE_PER_PLAYER, PLAYER_COUNT,
};
use crate::view::DiceView;

use super::animation::RollAnimation;
use super::outcome::Outcome;

/// Both players' dice plus everything needed to roll and report them.
pub struct GameSession<V: DiceView, R: RngCore = GameRng> {
    players: [Player; PLAYER_COUNT],
    rng: R,
    view: V,
    animation: AnimationConfig,
    /// Running roll animations per die.
    in_flight: [[u32; DICE_PER_PLAYER]; PLAYER_COUNT],
    last_outcome: Option<Outcome>,
}

impl<V: DiceView> GameSession<V, GameRng> {
    /// Create a session using `GameRng`, seeded from the config or from
    /// system entropy.
    pub fn new(config: &SessionConfig, view: V) -> DiceResult<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, view, rng)
    }
}

impl<V: DiceView, R: RngCore> GameSession<V, R> {
    /// Create a session drawing from an injected RNG. `config.seed` is
    /// ignored.
    pub fn with_rng(config: &SessionConfig, view: V, rng: R) -> DiceResult<Self> {
        config.validate()?;
        let face_count = i64::from(config.face_count);

        Ok(Self {
            players: [Player::new(face_count)?, Player::new(face_count)?],
            rng,
            view,
            animation: config.animation.clone(),
            in_flight: [[0; DICE_PER_PLAYER]; PLAYER_COUNT],
            last_outcome: None,
        })
    }

    /// A player's dice.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// The die at `slot`.
    #[must_use]
    pub fn die(&self, slot: DieSlot) -> &Die {
        self.players[slot.player().index()].die(slot.die_index())
    }

    /// The view receiving reports.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, e.g. to clear a recording.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Animation timing used by `start_roll`.
    #[must_use]
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Whether `slot` has a roll animation in flight.
    #[must_use]
    pub fn is_rolling(&self, slot: DieSlot) -> bool {
        self.in_flight[slot.player().index()][slot.die_index()] > 0
    }

    /// Whether any die in the session is animating.
    #[must_use]
    pub fn any_rolling(&self) -> bool {
        self.in_flight.iter().flatten().any(|&count| count > 0)
    }

    /// The outcome shown by the last `evaluate`, cleared by `reset_all`.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Begin rolling a die.
    ///
    /// Fails with `OutOfRange` unless `player_index < 2` and
    /// `dice_index < 3`; nothing changes on failure. On success the die's
    /// control and the evaluate/reset controls are reported disabled, and
    /// the returned animation must be stepped until it settles.
    pub fn start_roll(
        &mut self,
        player_index: usize,
        dice_index: usize,
    ) -> DiceResult<RollAnimation> {
        let slot = DieSlot::new(player_index, dice_index)?;

        if self.is_rolling(slot) {
            log::warn!("{} rolled while already rolling; last draw wins", slot);
        }
        self.in_flight[slot.player().index()][slot.die_index()] += 1;

        self.view.set_die_enabled(slot, false);
        self.view.set_controls_enabled(false);
        log::debug!("{} starts rolling", slot);

        Ok(RollAnimation::new(slot, &self.animation))
    }

    /// Roll the die once and show the face.
    pub(crate) fn draw(&mut self, slot: DieSlot) -> u32 {
        let die = self.players[slot.player().index()].die_mut(slot.die_index());
        let face = die.roll(&mut self.rng);
        self.view.show_face(slot, Some(face));
        face
    }

    /// Close one animation on `slot`.
    ///
    /// The die stays disabled until the next reset. Evaluate/reset come
    /// back once no animation is left anywhere.
    pub(crate) fn finish_roll(&mut self, slot: DieSlot, face: u32) {
        let count = &mut self.in_flight[slot.player().index()][slot.die_index()];
        *count = count.saturating_sub(1);
        log::debug!("{} settled on {}", slot, face);

        if !self.any_rolling() {
            self.view.set_controls_enabled(true);
        }
    }

    /// Clear every die and the last outcome, and re-enable controls.
    ///
    /// Dice still animating keep their disabled control and will settle
    /// after the reset.
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.last_outcome = None;

        for slot in DieSlot::all() {
            self.view.show_face(slot, None);
            if !self.is_rolling(slot) {
                self.view.set_die_enabled(slot, true);
            }
        }
        self.view.show_outcome(None);

        if self.any_rolling() {
            log::warn!("dice reset while rolls are in flight");
        } else {
            self.view.set_controls_enabled(true);
        }
        log::info!("all dice reset");
    }

    /// Compute the outcome from the current dice without reporting it.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_sums(self.players[0].sum(), self.players[1].sum())
    }

    /// Compare both players' totals and show the result.
    ///
    /// Dice are never modified, including on a tie.
    pub fn evaluate(&mut self) -> Outcome {
        let outcome = self.outcome();
        log::info!("evaluated: {:?}", outcome);

        self.view.show_outcome(Some(&outcome));
        self.last_outcome = Some(outcome);
        outcome
    }
}

impl<V: DiceView, R: RngCore> std::fmt::Debug for GameSession<V, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("players", &self.players)
            .field("animation", &self.animation)
            .field("in_flight", &self.in_flight)
            .field("last_outcome", &self.last_outcome)
            .finish_non_exhaustive()
    }
}
