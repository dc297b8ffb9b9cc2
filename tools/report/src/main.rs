//! CLI tool that prints reports about a reservation file.
//!
//! # Usage
//!
//! ```bash
//! # All five report sections for reservations.txt in the current directory
//! reservation_report
//!
//! # One report for another file
//! reservation_report --file data/reservations.txt revenue
//!
//! # Keep going past invalid lines
//! RUST_LOG=warn reservation_report --skip-invalid table
//! ```

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reservations::prelude::*;
use tracing::debug;

/// Print reports about reservations stored in a pipe-delimited file.
#[derive(Parser, Debug)]
#[command(name = "reservation_report")]
#[command(version, about)]
struct Args {
    /// Reservation file path.
    #[arg(short, long, env = "RESERVATIONS_FILE", default_value = "reservations.txt")]
    file: PathBuf,

    /// Skip lines that cannot be converted instead of stopping at the first one.
    #[arg(long)]
    skip_invalid: bool,

    /// Keep surrounding whitespace in text fields and reject it around dates
    /// and times.
    #[arg(long)]
    keep_whitespace: bool,

    /// Report to print. Defaults to all five sections.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// All five report sections with titles.
    All,
    /// Confirmed reservations.
    Confirmed,
    /// Reservations longer than three hours.
    Long,
    /// Confirmation status of every reservation.
    Statuses,
    /// Number of confirmed and not confirmed reservations.
    Summary,
    /// Total revenue from confirmed reservations.
    Revenue,
    /// Full details of every reservation.
    Details,
    /// Every field with its type.
    Table,
    /// Reservations as a JSON array.
    Json,
}

impl Command {
    fn report(self) -> Option<Report> {
        match self {
            Self::Confirmed => Some(Report::Confirmed),
            Self::Long => Some(Report::Long),
            Self::Statuses => Some(Report::Statuses),
            Self::Summary => Some(Report::Summary),
            Self::Revenue => Some(Report::Revenue),
            Self::Details => Some(Report::Details),
            Self::Table => Some(Report::Table),
            Self::All | Self::Json => None,
        }
    }
}

impl From<&Args> for LoadOptions {
    fn from(args: &Args) -> Self {
        Self {
            trim: if args.keep_whitespace { TrimPolicy::Preserve } else { TrimPolicy::Edges },
            on_error: if args.skip_invalid { ErrorPolicy::Skip } else { ErrorPolicy::Abort },
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        debug!(error = ?e, "run failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let options = LoadOptions::from(&args);

    let loaded = load_reservations_with(&args.file, &options).map_err(|e| describe(e, &args))?;
    if !loaded.skipped.is_empty() {
        eprintln!("Skipped {} invalid line(s)", loaded.skipped.len());
    }
    debug!(count = loaded.reservations.len(), "reservations ready");

    let lines = render(args.command.unwrap_or(Command::All), &loaded.reservations)?;
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

/// Builds the output lines for a command.
fn render(command: Command, reservations: &[Reservation]) -> Result<Vec<String>> {
    match (command, command.report()) {
        (Command::Json, _) => {
            let json = serde_json::to_string_pretty(reservations)
                .context("Failed to serialize reservations")?;
            Ok(vec![json])
        }
        (_, Some(report)) => Ok(report.render(reservations)),
        (_, None) => Ok(report::sections(reservations)),
    }
}

/// Turns a load error into the message shown to the user.
fn describe(err: ParseError, args: &Args) -> anyhow::Error {
    let path = args.file.display();
    let message = match &err {
        ParseError::SourceUnavailable { source, .. } => match source.kind() {
            io::ErrorKind::NotFound => format!("File not found – check the path: {path}"),
            io::ErrorKind::PermissionDenied => format!("No permission to read the file: {path}"),
            _ => format!("Failed to open reservation file: {path}"),
        },
        _ => format!("Failed to load reservations from '{path}'"),
    };
    anyhow::Error::new(err).context(message)
}
