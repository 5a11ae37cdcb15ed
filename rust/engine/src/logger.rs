use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::Outcome;

/// Complete record of one resolved round.
/// Serialized to JSONL format for round history storage and later aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed of the session deck (enables deterministic replay)
    pub seed: Option<u64>,
    /// Round number within the session
    #[serde(default)]
    pub round: u32,
    /// Player cards in the order received
    pub player: Vec<Card>,
    /// Dealer cards in the order received, up-card first
    pub dealer: Vec<Card>,
    pub player_value: u8,
    pub dealer_value: u8,
    pub outcome: Outcome,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file, one object per LF-terminated line.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Truncates `path` and starts a new history.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open_with(path, OpenOptions::new().write(true).create(true).truncate(true))
    }

    /// Keeps existing lines in `path` and appends after them.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open_with(path, OpenOptions::new().append(true).create(true))
    }

    fn open_with<P: AsRef<Path>>(path: P, options: &OpenOptions) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = options.open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that numbers rounds but writes nothing.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// Parses one JSONL history line.
pub fn parse_record(line: &str) -> serde_json::Result<RoundRecord> {
    serde_json::from_str(line)
}
