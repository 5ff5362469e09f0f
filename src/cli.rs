//! Command-line interface definition using clap.
//!
//! [`Args`] holds the raw flags; the `*Arg` enums are the CLI spellings of
//! library types and convert into them with `From`.
//!
//! ```rust
//! use chatstat::cli::Args;
//! use chatstat::config::DateOrder;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstat", "chat.txt", "--user", "Alice", "--date-order", "month-first"]);
//! assert_eq!(args.parser_config().date_order, DateOrder::MonthFirst);
//! assert_eq!(args.filter().to_string(), "Alice");
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::analysis::{SenderFilter, StopWords};
use crate::config::{AnalysisConfig, DateOrder, ParserConfig};
use crate::error::Result;
use crate::format::{RecordFormat, ReportFormat};

/// Statistics for WhatsApp chat exports (.txt or .zip).
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat 'WhatsApp Chat with Bob.txt'
    chatstat export.zip --user Alice
    chatstat chat.txt --report json > report.json
    chatstat chat.txt --records messages.csv
    chatstat chat.txt --records out.data --records-format jsonl
    chatstat chat.txt --date-order month-first --top 20 -v")]
pub struct Args {
    /// Path to the export (.txt, or .zip containing one)
    pub input: PathBuf,

    /// Restrict statistics to one sender, matched by exact name (default: everyone)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// How to print the report on stdout
    #[arg(long, value_enum, default_value = "text")]
    pub report: ReportFormatArg,

    /// Also write the parsed records to this file
    #[arg(long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Format for --records (default: from the file extension)
    #[arg(long, value_enum, requires = "records")]
    pub records_format: Option<RecordFormatArg>,

    /// Leave group notifications out of --records
    #[arg(long, requires = "records")]
    pub no_system: bool,

    /// Stopword list, one word per line (default: built-in English list)
    #[arg(long, value_name = "FILE", conflicts_with = "no_stopwords")]
    pub stopwords: Option<PathBuf>,

    /// Count every word, stopwords included
    #[arg(long)]
    pub no_stopwords: bool,

    /// Body text that marks an attachment
    #[arg(long, value_name = "TEXT", default_value = "<Media omitted>")]
    pub media_placeholder: String,

    /// How to read ambiguous dates such as 01/02/23
    #[arg(long, value_enum, default_value = "auto")]
    pub date_order: DateOrderArg,

    /// Rows in the word and emoji tables
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Print the distinct senders and exit
    #[arg(long)]
    pub list_senders: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn filter(&self) -> SenderFilter {
        match &self.user {
            Some(name) => SenderFilter::sender(name.trim()),
            None => SenderFilter::All,
        }
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_media_placeholder(self.media_placeholder.clone())
            .with_date_order(self.date_order.into())
    }

    /// Builds the analysis config, reading `--stopwords` if given.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let stopwords = if self.no_stopwords {
            StopWords::empty()
        } else if let Some(path) = &self.stopwords {
            StopWords::from_text(&fs::read_to_string(path)?)
        } else {
            StopWords::english()
        };

        Ok(AnalysisConfig::new()
            .with_stopwords(stopwords)
            .with_top_words(self.top)
            .with_top_emojis(self.top))
    }

    /// Record format from `--records-format`, else from the `--records` extension.
    pub fn records_format(&self) -> Result<Option<RecordFormat>> {
        match (&self.records, self.records_format) {
            (None, _) => Ok(None),
            (Some(_), Some(format)) => Ok(Some(format.into())),
            (Some(path), None) => RecordFormat::from_path(path).map(Some),
        }
    }

    /// Default `EnvFilter` directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Report presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormatArg {
    #[default]
    Text,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RecordFormatArg {
    /// Semicolon-delimited CSV
    Csv,
    /// JSON array
    Json,
    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<RecordFormatArg> for RecordFormat {
    fn from(arg: RecordFormatArg) -> Self {
        match arg {
            RecordFormatArg::Csv => RecordFormat::Csv,
            RecordFormatArg::Json => RecordFormat::Json,
            RecordFormatArg::Jsonl => RecordFormat::Jsonl,
        }
    }
}

/// Date field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateOrderArg {
    /// Decide from the whole file, day-first when undecidable
    #[default]
    Auto,
    /// DD/MM/YY
    DayFirst,
    /// MM/DD/YY
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> Self {
        match arg {
            DateOrderArg::Auto => DateOrder::Auto,
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}
