//! Aggregate a JSONL round history into session statistics.
//!
//! Lines that do not parse as round records are skipped and reported. A final
//! line without a trailing newline is treated as an interrupted write and
//! discarded rather than counted as corrupt.

use std::io::Write;

use bjlite_engine::logger::parse_record;
use bjlite_engine::stats::Statistics;
use tracing::warn;

use crate::commands::{OutcomeCounts, summary_json};
use crate::error::CliError;
use crate::io_utils::read_text;
use crate::ui;

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text(&input) {
        Ok(s) => s,
        Err(e) => {
            ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
            return Err(CliError::Io(e));
        }
    };

    let mut stats = Statistics::new();
    let mut counts = OutcomeCounts::default();
    let mut corrupted = 0u64;
    let mut discarded = 0u64;

    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    for (i, (line_no, line)) in lines.iter().enumerate() {
        match parse_record(line) {
            Ok(record) => {
                stats.record(record.outcome);
                counts.add(record.outcome);
            }
            Err(e) => {
                if i == lines.len() - 1 && !has_trailing_nl {
                    discarded += 1;
                } else {
                    warn!(line = line_no + 1, error = %e, "corrupted round record");
                    corrupted += 1;
                }
            }
        }
    }

    if corrupted > 0 {
        ui::display_warning(err, &format!("Skipped {} corrupted record(s)", corrupted))?;
    }
    if discarded > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", discarded),
        )?;
    }
    if stats.total() == 0 && (corrupted > 0 || discarded > 0) {
        ui::write_error(err, "No valid round records")?;
        return Err(CliError::InvalidInput("No valid round records".to_string()));
    }

    let summary = summary_json(&stats.snapshot(), &counts);
    let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
