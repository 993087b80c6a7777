//! Terminal front end: rolls all six dice at once and announces the winner.
//!
//! Set `DICE_DUEL_SEED` for a reproducible game and `RUST_LOG=debug` to
//! trace every animation frame.

use std::cell::RefCell;

use anyhow::{Context, Result};
use dice_duel::core::DieSlot;
use dice_duel::{roll_die, ConsoleView, GameSession, SessionConfig};

const SEED_VAR: &str = "DICE_DUEL_SEED";

fn config_from_env() -> Result<SessionConfig> {
    let config = SessionConfig::default();
    match std::env::var(SEED_VAR) {
        Ok(raw) => {
            let seed = raw
                .parse::<u64>()
                .with_context(|| format!("{} must be an unsigned integer, got `{}`", SEED_VAR, raw))?;
            Ok(config.with_seed(seed))
        }
        Err(_) => Ok(config),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let config = config_from_env()?;
    let session = GameSession::new(&config, ConsoleView::stdout())
        .context("invalid session configuration")?;
    let session = RefCell::new(session);
    session.borrow_mut().reset_all();

    let (a, b, c, d, e, f) = tokio::join!(
        roll_die(&session, 0, 0),
        roll_die(&session, 0, 1),
        roll_die(&session, 0, 2),
        roll_die(&session, 1, 0),
        roll_die(&session, 1, 1),
        roll_die(&session, 1, 2),
    );
    for (slot, result) in DieSlot::all().zip([a, b, c, d, e, f]) {
        let face = result.with_context(|| format!("rolling {}", slot))?;
        log::info!("{} settled on {}", slot, face);
    }

    session.borrow_mut().evaluate();
    Ok(())
}
