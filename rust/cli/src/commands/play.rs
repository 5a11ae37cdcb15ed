//! # Play Command
//!
//! Interactive rounds against the dealer. Each round shows the dealer up-card
//! and the player hand, then reads `h`/`s`/`q` from stdin until the round is
//! resolved. After each round the running record and win rate are printed.
//!
//! With `--rounds N` the session ends after N rounds; otherwise the player is
//! asked whether to continue. `q` or EOF ends the session at once; a round
//! left unfinished that way is not counted.

use std::io::{BufRead, Write};

use bjlite_engine::engine::{Engine, Phase};
use bjlite_engine::logger::RoundLogger;
use tracing::{debug, info};

use crate::commands::session_engine;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_outcome, format_record, format_win_rate};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{TurnInput, parse_turn_input, parse_yes};

const RULE: &str = "==================================================";

/// How a single interactive round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Resolved,
    Quit,
}

pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    history: Option<String>,
    cfg: &Config,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut engine = session_engine(seed, cfg);
    let mut logger = match history.or_else(|| cfg.history.clone()) {
        Some(path) => match RoundLogger::append(&path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open history {}: {}", path, e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  BLACKJACK LITE")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Get as close to 21 as you can without going over.")?;
    writeln!(out, "Face cards are worth 10, Aces are 1 or 11.")?;
    writeln!(out, "Dealer stands on 17.")?;
    if let Some(s) = engine.seed() {
        writeln!(out, "Seed: {}", s)?;
    }

    let mut played = 0u32;
    loop {
        if rounds.is_some_and(|n| played >= n) {
            break;
        }
        writeln!(out)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Round {}", engine.round_number() + 1)?;

        if play_round(&mut engine, stdin, out, err)? == RoundEnd::Quit {
            info!(rounds = played, "player left the session");
            break;
        }
        played += 1;

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            if let Some(record) = engine.round_record(id) {
                logger.write(&record)?;
            }
        }

        let stats = engine.statistics();
        writeln!(out)?;
        writeln!(out, "{}", format_record(&stats))?;
        writeln!(out, "{}", format_win_rate(&stats))?;

        if rounds.is_none() {
            ui::prompt(out, "\nPlay another round? (y/n): ")?;
            let again = read_stdin_line(stdin).is_some_and(|answer| parse_yes(&answer));
            if !again {
                writeln!(out)?;
                break;
            }
        }
    }

    let stats = engine.statistics();
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  FINAL STATISTICS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Rounds: {}", stats.total)?;
    writeln!(out, "Wins: {}", stats.wins)?;
    writeln!(out, "Losses: {}", stats.losses)?;
    writeln!(out, "Pushes: {}", stats.pushes)?;
    writeln!(out, "{}", format_win_rate(&stats))?;
    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

/// Deal one round and drive it to resolution from stdin.
fn play_round(
    engine: &mut Engine,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RoundEnd, CliError> {
    engine.start_new_round()?;
    if let Some(up) = engine.dealer_upcard() {
        writeln!(out, "Dealer shows: {}", format_card(&up))?;
    }
    writeln!(out, "Your hand: {}", format_hand(engine.player_hand()))?;

    while engine.phase() != Phase::Resolved {
        ui::prompt(out, "\n(H)it or (S)tand? ")?;
        let Some(line) = read_stdin_line(stdin) else {
            debug!("stdin closed mid-round");
            writeln!(out)?;
            return Ok(RoundEnd::Quit);
        };
        match parse_turn_input(&line) {
            TurnInput::Hit => {
                engine.player_hit()?;
                writeln!(out, "Your hand: {}", format_hand(engine.player_hand()))?;
            }
            TurnInput::Stand => {
                engine.player_stand()?;
                writeln!(out, "\nDealer's hand: {}", format_hand(engine.dealer_hand()))?;
                engine.dealer_play()?;
            }
            TurnInput::Quit => return Ok(RoundEnd::Quit),
            TurnInput::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    let outcome = engine.determine_winner()?;
    writeln!(out, "Dealer's final hand: {}", format_hand(engine.dealer_hand()))?;
    writeln!(
        out,
        "{}",
        format_outcome(outcome, engine.player_value(), engine.dealer_value())
    )?;
    Ok(RoundEnd::Resolved)
}
