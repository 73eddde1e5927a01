//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sieve::TextEncoding;

/// Sieve: split delimited data into loadable rows and corrupted rows
#[derive(Parser)]
#[command(name = "sieve")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a data file and write its clean rows
    Scan {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for clean rows (default: <file>_clean.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the dirty rows, unmodified, to this path
        #[arg(long)]
        dirty_output: Option<PathBuf>,

        /// Write the full JSON report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Print the JSON report instead of a summary
        #[arg(long)]
        json: bool,

        /// Exit with an error when any row is dirty
        #[arg(long)]
        fail_on_dirty: bool,

        /// Field delimiter (comma, tab, semicolon, pipe, auto)
        #[arg(short, long, default_value = "comma")]
        delimiter: DelimiterChoice,

        /// Text encoding of the file (utf-8, latin-1)
        #[arg(short, long, default_value = "utf-8")]
        encoding: TextEncoding,

        /// Maximum number of data rows to read
        #[arg(long)]
        max_rows: Option<usize>,
    },

    /// List the cleanable and uncleanable character rules
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the cleaning endpoint over HTTP
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "7071")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: std::net::IpAddr,
    },
}

/// Field delimiter choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DelimiterChoice {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
    /// Detect from the first lines of the file
    Auto,
}

impl DelimiterChoice {
    /// The delimiter byte, or `None` to auto-detect.
    pub fn as_byte(self) -> Option<u8> {
        match self {
            DelimiterChoice::Comma => Some(b','),
            DelimiterChoice::Tab => Some(b'\t'),
            DelimiterChoice::Semicolon => Some(b';'),
            DelimiterChoice::Pipe => Some(b'|'),
            DelimiterChoice::Auto => None,
        }
    }
}

impl std::str::FromStr for DelimiterChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(DelimiterChoice::Comma),
            "tab" | "\\t" | "\t" => Ok(DelimiterChoice::Tab),
            "semicolon" | ";" => Ok(DelimiterChoice::Semicolon),
            "pipe" | "|" => Ok(DelimiterChoice::Pipe),
            "auto" => Ok(DelimiterChoice::Auto),
            _ => Err(format!(
                "Unknown delimiter: {}. Use comma, tab, semicolon, pipe, or auto.",
                s
            )),
        }
    }
}

impl std::fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelimiterChoice::Comma => write!(f, "comma"),
            DelimiterChoice::Tab => write!(f, "tab"),
            DelimiterChoice::Semicolon => write!(f, "semicolon"),
            DelimiterChoice::Pipe => write!(f, "pipe"),
            DelimiterChoice::Auto => write!(f, "auto"),
        }
    }
}
