use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bjlite",
    version,
    about = "Blackjack Lite: one player against a dealer who stands on 17"
)]
pub struct BjliteCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively against the dealer
    Play {
        /// Stop after this many rounds instead of asking to continue
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append each resolved round to this JSONL file
        #[arg(long)]
        history: Option<String>,
    },
    /// Play rounds automatically with a fixed stand-on total
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Keep hitting while the hand is below this total (12-21)
        #[arg(long, value_parser = clap::value_parser!(u8).range(12..=21))]
        stand_on: Option<u8>,
        /// Write every round to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal a single round and show both hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarize a JSONL round history
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
