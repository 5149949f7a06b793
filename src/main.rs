//! Cardex CLI
//!
//! Command-line interface for cardex operations:
//! - Count records and show index statistics
//! - Query by sender, receiver, or date range
//! - Merge extra sources and export the result
//! - Generate a default config file

use anyhow::Context;
use cardex::config::{self, Config};
use cardex::store::PostcardArchive;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Indexed postcard archive")]
#[command(long_about = "Cardex keeps a shoebox of postcards queryable.\nLoad semicolon-delimited records and look them up by date, sender, or receiver.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Postcard source file (overrides config)
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    /// Output format (plain, json)
    #[arg(short, long, default_value = "plain", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the records in the source
    Count,

    /// Show index statistics
    Stats,

    /// List postcards sent by a sender
    Sender {
        /// Sender identifier (exact, case-sensitive)
        name: String,
    },

    /// List postcards addressed to a receiver
    Receiver {
        /// Receiver identifier (exact, case-sensitive)
        name: String,
    },

    /// List postcards dated within [start, end] inclusive
    Dates {
        /// Start date (YYYY-MM-DD)
        start: NaiveDate,
        /// End date (YYYY-MM-DD)
        end: NaiveDate,
    },

    /// Append extra sources after the main source and export the result
    Merge {
        /// Extra source files, appended in order
        extra: Vec<PathBuf>,
        /// Destination file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Append to the destination instead of overwriting it
        #[arg(long)]
        append_output: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    // Config generation needs no source file
    if let Commands::Config { output } = &cli.command {
        let content = config::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {:?}", path))?;
                tracing::info!("Wrote default config to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let source = cli
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.store.source));

    let mut archive = PostcardArchive::new();
    archive
        .load_from(&source)
        .with_context(|| format!("loading postcards from {:?}", source))?;

    match cli.command {
        Commands::Count => {
            println!("{}", archive.count());
        }

        Commands::Stats => {
            let stats = archive.stats();
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", stats);
            }
        }

        Commands::Sender { name } => {
            print_records(&archive.by_sender(&name), &cli.format)?;
        }

        Commands::Receiver { name } => {
            print_records(&archive.by_receiver(&name), &cli.format)?;
        }

        Commands::Dates { start, end } => {
            print_records(&archive.by_date_range(start, end), &cli.format)?;
        }

        Commands::Merge {
            extra,
            output,
            append_output,
        } => {
            for path in &extra {
                archive
                    .append_from(path)
                    .with_context(|| format!("appending postcards from {:?}", path))?;
            }

            match output {
                Some(path) if append_output => archive
                    .append_to(&path)
                    .with_context(|| format!("appending to {:?}", path))?,
                Some(path) => archive
                    .write_to(&path)
                    .with_context(|| format!("writing to {:?}", path))?,
                None => print_records(archive.records(), &cli.format)?,
            }
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Print records as raw lines or as a JSON array
fn print_records<S: AsRef<str>>(records: &[S], format: &str) -> anyhow::Result<()> {
    if format == "json" {
        let lines: Vec<&str> = records.iter().map(AsRef::as_ref).collect();
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    for record in records {
        let record = record.as_ref();
        // Records usually carry their own terminator
        print!("{}", record);
        if !record.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

/// Initialize tracing from the logging config (RUST_LOG wins when set)
fn init_logging(logging: &cardex::config::LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("cardex={}", logging.level)),
    );

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
