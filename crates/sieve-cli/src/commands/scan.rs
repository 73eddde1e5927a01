//! Scan command - split a data file into clean and dirty rows.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use sieve::{ParserConfig, ProcessReport, Sieve, SieveConfig, TextEncoding};

use crate::cli::DelimiterChoice;

/// Options for a scan run.
pub struct ScanOptions {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub dirty_output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub json: bool,
    pub fail_on_dirty: bool,
    pub delimiter: DelimiterChoice,
    pub encoding: TextEncoding,
    pub max_rows: Option<usize>,
    pub verbose: bool,
}

/// Rows shown in the dirty-row table before eliding.
const MAX_LISTED_ROWS: usize = 20;

pub fn run(opts: ScanOptions) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !opts.file.exists() {
        return Err(format!("File not found: {}", opts.file.display()).into());
    }

    if !opts.json {
        println!(
            "{} {}",
            "Scanning".cyan().bold(),
            opts.file.display().to_string().white()
        );
    }

    let config = SieveConfig {
        parser: ParserConfig {
            delimiter: opts.delimiter.as_byte(),
            encoding: opts.encoding,
            max_rows: opts.max_rows,
            ..ParserConfig::default()
        },
        ..SieveConfig::default()
    };

    let report = Sieve::with_config(config).process_file(&opts.file)?;

    // Determine output path
    let output_path = opts
        .output
        .clone()
        .unwrap_or_else(|| default_clean_path(&opts.file));

    write_file(&output_path, &report.clean_csv()?)?;

    if let Some(ref dirty_path) = opts.dirty_output {
        write_file(dirty_path, &report.dirty_csv()?)?;
    }

    if let Some(ref report_path) = opts.report {
        report.save(report_path)?;
    }

    if opts.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_summary(&report, &output_path, &opts);
    }

    if opts.fail_on_dirty && report.outcome.has_dirty_rows() {
        return Err(format!(
            "{} dirty rows found in {}",
            report.outcome.dirty_row_count(),
            opts.file.display()
        )
        .into());
    }

    Ok(())
}

/// `<dir>/<stem>_clean.csv` next to the input.
fn default_clean_path(file: &Path) -> PathBuf {
    let stem = file.file_stem().unwrap_or_default().to_string_lossy();
    file.with_file_name(format!("{}_clean.csv", stem))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e).into())
}

fn print_summary(report: &ProcessReport, output_path: &Path, opts: &ScanOptions) {
    let outcome = &report.outcome;

    if opts.verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for (name, analysis) in &outcome.columns {
            let status = match analysis.had_unclenable_chars {
                Some(true) => "at risk".red().to_string(),
                Some(false) => "clean".green().to_string(),
                None => "not checked".dimmed().to_string(),
            };
            println!(
                "  {:20} {:10} {}",
                name,
                analysis.value_kind.label(),
                status
            );
        }
    }

    println!();
    println!(
        "Read {} rows: {} clean, {} dirty",
        outcome.original_row_count().to_string().white().bold(),
        outcome.clean_row_count().to_string().green(),
        outcome.dirty_row_count().to_string().red()
    );

    if outcome.has_dirty_rows() {
        println!();
        println!("{}", "Dirty rows:".yellow().bold());
        for problem in outcome.problems.iter().take(MAX_LISTED_ROWS) {
            let details: Vec<String> = problem
                .problems
                .iter()
                .map(|p| {
                    let rules: Vec<&str> = p.issues.iter().map(|i| i.rule.as_str()).collect();
                    format!("{} ({})", p.column, rules.join(", "))
                })
                .collect();
            println!(
                "  row {:>6}  {}",
                problem.row_number.to_string().white(),
                details.join("; ")
            );
        }
        if outcome.problems.len() > MAX_LISTED_ROWS {
            println!(
                "  ... and {} more",
                outcome.problems.len() - MAX_LISTED_ROWS
            );
        }
    }

    println!();
    println!(
        "{} {}",
        "Clean rows saved to".green().bold(),
        output_path.display().to_string().white()
    );
    if let Some(ref dirty_path) = opts.dirty_output {
        println!(
            "{} {}",
            "Dirty rows saved to".yellow().bold(),
            dirty_path.display().to_string().white()
        );
    }
    if let Some(ref report_path) = opts.report {
        println!(
            "{} {}",
            "Report saved to".cyan().bold(),
            report_path.display().to_string().white()
        );
    }

    if !outcome.has_dirty_rows() {
        println!("{}", "No uncleanable characters found - data looks clean!".green());
    } else if opts.report.is_none() {
        println!(
            "Run {} for full diagnostics",
            format!("sieve scan {} --report report.json", opts.file.display())
                .cyan()
                .bold()
        );
    }
}
