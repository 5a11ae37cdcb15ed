//! Deal a single round and show it face up, for inspecting seeds.

use std::io::Write;

use bjlite_engine::engine::Phase;

use crate::commands::session_engine;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_outcome};

pub fn handle_deal_command(
    seed: Option<u64>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut engine = session_engine(seed, cfg);
    engine.start_new_round()?;

    if let Some(s) = engine.seed() {
        writeln!(out, "Seed: {}", s)?;
    }
    writeln!(out, "Player: {}", format_hand(engine.player_hand()))?;
    writeln!(out, "Dealer: {}", format_hand(engine.dealer_hand()))?;
    writeln!(out, "Deck: {} cards remaining", engine.deck_remaining())?;
    // a player natural is settled on the deal
    if engine.phase() == Phase::Resolved {
        let outcome = engine.determine_winner()?;
        writeln!(
            out,
            "{}",
            format_outcome(outcome, engine.player_value(), engine.dealer_value())
        )?;
    }
    Ok(())
}
