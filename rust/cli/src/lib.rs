//! # Blackjack Lite CLI
//!
//! Command-line front end for the `bjlite-engine` round engine: interactive
//! play, automated simulation, single deals, history statistics and a
//! configuration dump.
//!
//! The entry points take their output streams (and stdin) as arguments so the
//! whole CLI can be driven from tests.
//!
//! ```
//! use std::io;
//! let args = vec!["bjlite", "deal", "--seed", "42"];
//! let code = bjlite_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play [--rounds N] [--seed S] [--history FILE]`
//! - `sim --rounds N [--seed S] [--stand-on T] [--output FILE]`
//! - `deal [--seed S]`
//! - `stats --input FILE`
//! - `cfg`

use std::io::{BufRead, Write};

use clap::Parser;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BjliteCli, Commands};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "stats", "cfg"];

/// Parse `args` and run the subcommand, reading player input from the
/// process stdin. Returns the process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    run_with_input(args, &mut lock, out, err)
}

/// Like [`run`] with an explicit input stream for `play`.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BjliteCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: bjlite <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: bjlite --help");
            return exit_code::ERROR;
        }
    };

    match dispatch(cli.cmd, stdin, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            // handlers report input and file problems themselves
            if matches!(e, CliError::Engine(_)) {
                write_or_exit!(err, "Error: {}", e);
            }
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Play {
            rounds,
            seed,
            history,
        } => {
            let cfg = load_config(err)?;
            handle_play_command(rounds, seed, history, &cfg, stdin, out, err)
        }
        Commands::Sim {
            rounds,
            seed,
            stand_on,
            output,
        } => {
            let cfg = load_config(err)?;
            handle_sim_command(rounds, seed, stand_on, output, &cfg, out, err)
        }
        Commands::Deal { seed } => {
            let cfg = load_config(err)?;
            handle_deal_command(seed, &cfg, out)
        }
    }
}

fn load_config(err: &mut dyn Write) -> Result<config::Config, CliError> {
    match config::load() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(Vec::new());
        let code = run_with_input(args.iter().copied(), &mut stdin, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, _) = run_args(&["bjlite", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Usage"));
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["bjlite", "split"]);
        assert_eq!(code, exit_code::ERROR);
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}", c)), "{}", c);
        }
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        let (code, _, err) = run_args(&["bjlite"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("For full help"));
    }
}
