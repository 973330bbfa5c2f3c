//! Command-line interface for mindcaps.

pub mod render;

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, BREATHING_CYCLES, BREATHING_DWELL_SECS, DEFAULT_INTENSITY,
    LOG_FORMAT_JSON, LOG_FORMAT_TEXT, MEDITATION_MINUTES,
};
use crate::db::aggregate::GroupBy;
use crate::errors::AppResult;
use crate::journal_core::SleepQuality;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A small mood journal with gratitude, sleep and breathing tools
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Data directory (overrides MINDCAPS_DIR)
    #[clap(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Log output format
    #[clap(long, global = true, value_name = "FORMAT", default_value = LOG_FORMAT_TEXT,
           value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Log filter, e.g. "debug" or "mindcaps=trace" (overrides RUST_LOG)
    #[clap(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a mood entry and get feedback
    Log(LogArgs),

    /// Note something you are grateful for
    Gratitude {
        /// What you are grateful for
        text: String,
    },

    /// Log last night's sleep
    Sleep {
        /// Hours slept (0-24)
        #[clap(long)]
        hours: f64,

        /// great, good, fair or poor
        #[clap(long, default_value = "good")]
        quality: SleepQuality,
    },

    /// Show stored entries, newest last
    List {
        #[clap(value_enum)]
        kind: ListKind,

        /// Only show the most recent N entries
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Write every entry to a JSON file
    Export {
        /// Destination file; asked for interactively when omitted
        #[clap(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Chart how often each value occurs
    Analytics {
        /// mood, sentiment, intensity or quality
        #[clap(long, default_value = "mood")]
        by: GroupBy,

        #[clap(long, value_enum, default_value = "bar")]
        chart: ChartStyle,
    },

    /// Streak, recent intensity and sleep trend
    Summary,

    /// Guided breathing: inhale, hold, exhale
    Breathe {
        #[clap(long, default_value_t = BREATHING_CYCLES)]
        cycles: u32,

        /// Seconds per phase
        #[clap(long, default_value_t = BREATHING_DWELL_SECS)]
        dwell: u64,
    },

    /// Meditation countdown
    Meditate {
        #[clap(long, default_value_t = MEDITATION_MINUTES)]
        minutes: u64,
    },
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Mood label from the configured set
    #[clap(short = 'm', long)]
    pub mood: Option<String>,

    /// How strong the mood is, 1-10
    #[clap(short = 'i', long, default_value_t = DEFAULT_INTENSITY, allow_hyphen_values = true)]
    pub intensity: i64,

    /// A few words about how you feel
    #[clap(short = 'n', long)]
    pub note: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Moods,
    Gratitude,
    Sleep,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    Bar,
    Pie,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

/// Asks for an export destination, suggesting `suggested`.
///
/// A blank answer or end of input cancels and yields `None`.
///
/// # Errors
///
/// Returns `AppError::Io` if the prompt cannot be written or the answer read.
pub fn prompt_export_destination<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    suggested: &str,
) -> AppResult<Option<PathBuf>> {
    write!(
        output,
        "Save export as (e.g. {}, leave blank to cancel): ",
        suggested
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(answer)))
    }
}
