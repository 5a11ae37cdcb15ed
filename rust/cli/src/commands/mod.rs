//! Command handlers for the `bjlite` CLI.
//!
//! Each subcommand lives in its own module and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams (and
//! stdin for `play`) are injected so handlers run the same under tests.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use std::collections::HashMap;

use bjlite_engine::engine::Engine;
use bjlite_engine::rules::Outcome;
use bjlite_engine::stats::StatisticsSnapshot;

use crate::config::Config;

/// Engine for one session. A `--seed` flag beats the configured seed.
pub(crate) fn session_engine(seed: Option<u64>, cfg: &Config) -> Engine {
    Engine::new(seed.or(cfg.seed)).with_reshuffle_threshold(cfg.reshuffle_threshold)
}

/// Per-outcome tallies, reported alongside the win/loss/push totals.
#[derive(Debug, Default, Clone)]
pub(crate) struct OutcomeCounts(HashMap<Outcome, u32>);

impl OutcomeCounts {
    pub(crate) fn add(&mut self, outcome: Outcome) {
        *self.0.entry(outcome).or_insert(0) += 1;
    }

    pub(crate) fn get(&self, outcome: Outcome) -> u32 {
        self.0.get(&outcome).copied().unwrap_or(0)
    }

    /// Every outcome tag in resolution order, zeros included.
    pub(crate) fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = Outcome::ALL
            .iter()
            .map(|&o| (o.as_str().to_string(), self.get(o).into()))
            .collect();
        serde_json::Value::Object(map)
    }
}

/// `{"rounds", "wins", "losses", "pushes", "win_rate", "outcomes"}` with the
/// win rate rounded to one decimal.
pub(crate) fn summary_json(
    stats: &StatisticsSnapshot,
    counts: &OutcomeCounts,
) -> serde_json::Value {
    serde_json::json!({
        "rounds": stats.total,
        "wins": stats.wins,
        "losses": stats.losses,
        "pushes": stats.pushes,
        "win_rate": (stats.win_rate * 10.0).round() / 10.0,
        "outcomes": counts.to_json(),
    })
}
