//! Phone number finder CLI application.
//!
//! This binary provides a command-line interface for the phonefinder library:
//! it reads a text file (or stdin), lists the phone numbers it contains, and can
//! alternatively print the text with those numbers masked.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use phonefinder::redaction::DEFAULT_MASK;
use phonefinder::{
    find_numbers, redact_matches, Leniency, Metadata, NumberingPlan, PhoneNumberMatch,
    SearchOptions,
};

/// Phone number finder
///
/// Locate, validate and optionally mask phone numbers in free text.
/// Reads from stdin when no file is given.
#[derive(Parser)]
#[command(name = "phonefinder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input text file (defaults to stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Region assumed for numbers written without a + prefix (e.g. US)
    #[arg(short, long, value_name = "REGION")]
    country: Option<String>,

    /// Validation strictness: possible (length only) or valid (full pattern)
    #[arg(short, long, default_value_t = Leniency::Valid)]
    leniency: Leniency,

    /// Accept a wider set of separators between digits
    #[arg(long)]
    extended: bool,

    /// Numbering plan JSON file to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    metadata: Option<PathBuf>,

    /// Print matches as a JSON array
    #[arg(long, conflicts_with = "redact")]
    json: bool,

    /// Print the input with every phone number masked
    #[arg(long)]
    redact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// How matches are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Lines,
    Json,
    Redact,
}

/// Search command handler.
struct SearchHandler {
    options: SearchOptions,
    metadata: Option<Metadata>,
    mode: OutputMode,
}

impl SearchHandler {
    fn new(cli: &Cli) -> Result<Self> {
        let metadata = cli
            .metadata
            .as_deref()
            .map(|path| {
                Metadata::from_path(path)
                    .with_context(|| format!("Failed to load numbering plan {}", path.display()))
            })
            .transpose()?;

        let mut options = SearchOptions::new()
            .with_leniency(cli.leniency)
            .with_extended(cli.extended);
        if let Some(country) = &cli.country {
            options = options.with_default_country(country.to_ascii_uppercase());
        }

        Ok(Self {
            options,
            metadata,
            mode: output_mode(cli.json, cli.redact),
        })
    }

    fn plan(&self) -> &dyn NumberingPlan {
        match &self.metadata {
            Some(metadata) => metadata,
            None => Metadata::builtin(),
        }
    }

    /// Searches `text` and writes the result to `out`.
    fn run(&self, text: &str, out: &mut dyn Write) -> Result<()> {
        let matches = find_numbers(text, &self.options, self.plan())
            .with_context(|| "Phone number search failed")?;
        log::info!("{} phone number(s) found", matches.len());

        match self.mode {
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut *out, &matches)?;
                writeln!(out)?;
            }
            OutputMode::Redact => {
                let result = redact_matches(text, &matches, DEFAULT_MASK);
                write!(out, "{}", result.text)?;
            }
            OutputMode::Lines => {
                for found in &matches {
                    writeln!(out, "{}", format_line(text, found))?;
                }
            }
        }

        Ok(())
    }
}

fn output_mode(json: bool, redact: bool) -> OutputMode {
    if json {
        OutputMode::Json
    } else if redact {
        OutputMode::Redact
    } else {
        OutputMode::Lines
    }
}

/// Formats one match as `start..end<TAB>country<TAB>phone[<TAB>ext=N]<TAB>span`.
fn format_line(text: &str, found: &PhoneNumberMatch) -> String {
    let mut fields = vec![
        format!("{}..{}", found.starts_at, found.ends_at),
        found.country.clone().unwrap_or_else(|| "-".to_string()),
        found.phone.clone(),
    ];
    if let Some(ext) = &found.ext {
        fields.push(format!("ext={}", ext));
    }
    fields.push(found.as_str(text).to_string());
    fields.join("\t")
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .with_context(|| "Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let handler = SearchHandler::new(&cli)?;
    let text = read_input(cli.input.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handler.run(&text, &mut out)?;

    Ok(())
}
