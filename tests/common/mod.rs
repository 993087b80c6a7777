//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use dice_duel::{AnimationConfig, GameSession, RecordingView, RollStep, SessionConfig};
use rand_chacha::rand_core::impls;
use rand::RngCore;

/// RNG that makes six-sided dice land on chosen faces.
///
/// Each face is encoded as the 32-bit word that uniform range sampling
/// maps to it: the word `w` with `w * 6 / 2^32 == face - 1` and a tiny
/// low product, so no draw is rejected.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    words: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn faces(faces: &[u32]) -> Self {
        Self {
            words: faces.iter().map(|&face| face_word(face, 6)).collect(),
        }
    }
}

pub fn face_word(face: u32, face_count: u32) -> u32 {
    let numerator = u64::from(face - 1) << 32;
    numerator.div_ceil(u64::from(face_count)) as u32
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.words.pop_front().expect("scripted faces exhausted")
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A session whose dice settle after a single draw each, on the given
/// faces in roll order.
pub fn scripted_session(faces: &[u32]) -> GameSession<RecordingView, ScriptedRng> {
    let config = SessionConfig::default()
        .with_animation(AnimationConfig::default().with_spin_count(1));
    GameSession::with_rng(&config, RecordingView::new(), ScriptedRng::faces(faces))
        .expect("default config is valid")
}

/// Step a roll to completion without waiting and return the settled face.
pub fn settle<R: RngCore>(
    session: &mut GameSession<RecordingView, R>,
    player_index: usize,
    dice_index: usize,
) -> u32 {
    let mut animation = session
        .start_roll(player_index, dice_index)
        .expect("valid slot");
    loop {
        if let RollStep::Settled { face } = animation.step(session) {
            return face;
        }
    }
}

/// Roll all six dice in slot order.
pub fn settle_all<R: RngCore>(session: &mut GameSession<RecordingView, R>) {
    for player in 0..2 {
        for die in 0..3 {
            settle(session, player, die);
        }
    }
}
