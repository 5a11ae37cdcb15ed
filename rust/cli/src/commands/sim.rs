//! Automated rounds with a fixed player policy.
//!
//! The simulated player hits while its hand is below `stand_on` and stands
//! otherwise. The session summary (totals, win rate and per-outcome counts) is
//! printed as JSON; `--output` additionally records every round as JSONL.

use std::io::Write;

use bjlite_engine::engine::{Engine, Phase};
use bjlite_engine::logger::RoundLogger;
use bjlite_engine::rules::Outcome;
use tracing::info;

use crate::commands::{OutcomeCounts, session_engine, summary_json};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    stand_on: Option<u8>,
    output: Option<String>,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let stand_on = stand_on.unwrap_or(cfg.stand_on);
    if let Err(e) = config::validate_stand_on(stand_on) {
        ui::write_error(err, &e.to_string())?;
        return Err(e.into());
    }

    let mut logger = match output.as_deref() {
        Some(path) => match RoundLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file {}: {}", path, e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let mut engine = session_engine(seed, cfg);
    let mut counts = OutcomeCounts::default();

    for _ in 0..rounds {
        let outcome = play_fixed_policy(&mut engine, stand_on)?;
        counts.add(outcome);
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            if let Some(record) = engine.round_record(id) {
                logger.write(&record)?;
            }
        }
    }

    let stats = engine.statistics();
    info!(
        rounds,
        stand_on,
        wins = stats.wins,
        losses = stats.losses,
        pushes = stats.pushes,
        "simulation complete"
    );

    let mut summary = summary_json(&stats, &counts);
    summary["seed"] = engine.seed().into();
    summary["stand_on"] = stand_on.into();
    let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Play one round: hit below `stand_on`, then stand and let the dealer finish.
pub(crate) fn play_fixed_policy(engine: &mut Engine, stand_on: u8) -> Result<Outcome, CliError> {
    engine.start_new_round()?;
    while matches!(engine.phase(), Phase::Dealt | Phase::PlayerTurn)
        && engine.player_value() < stand_on
    {
        engine.player_hit()?;
    }
    if engine.phase() != Phase::Resolved {
        engine.player_stand()?;
        engine.dealer_play()?;
    }
    Ok(engine.determine_winner()?)
}
