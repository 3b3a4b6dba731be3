//! `timetable` CLI — build a conflict-free weekly timetable from instructor files.
//!
//! ## Usage
//!
//! ```sh
//! # Admit every *.txt in the configured input dir and list what was rejected
//! timetable check
//!
//! # Check specific files (the instructor is the file name up to its first '.')
//! timetable check "Alice Smith.txt" "Bob Jones.txt"
//!
//! # Export to resources/output/schedule.csv
//! timetable export
//!
//! # Export as Markdown to stdout, earlier slot winning inside a file
//! timetable export --format markdown --stdout --policy first-seen
//!
//! # Use a config file other than ./timetable.toml
//! timetable --config ci.toml export
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use timetable_engine::source::discover_sources;
use timetable_engine::{AdmissionPolicy, Config, LoadReport, OutputFormat, Session};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "Build a conflict-free weekly timetable from instructor slot files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./timetable.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log every admission decision
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Admit the sources and report accepted and rejected slots
    Check {
        /// Source files (defaults to every *.txt in the input dir)
        files: Vec<PathBuf>,
        /// Admission policy: forward-scan (default, the later of two clashing
        /// slots in one file wins) or first-seen (the earlier one wins)
        #[arg(long)]
        policy: Option<String>,
    },
    /// Admit the sources and write the timetable document
    Export {
        /// Source files (defaults to every *.txt in the input dir)
        files: Vec<PathBuf>,
        /// Output format: csv, json, markdown or text
        #[arg(short, long)]
        format: Option<String>,
        /// Directory the document is written to
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Document file name, without extension
        #[arg(long)]
        output_name: Option<String>,
        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
        /// Admission policy: forward-scan (default, the later of two clashing
        /// slots in one file wins) or first-seen (the earlier one wins)
        #[arg(long)]
        policy: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Check { files, policy } => {
            if let Some(policy) = policy {
                config.policy = parse_policy(&policy)?;
            }
            let sources = resolve_sources(files, &config)?;
            let mut session = Session::new(config.policy);
            let report = session.select(&sources);
            print_report(&report);
        }
        Commands::Export {
            files,
            format,
            output_dir,
            output_name,
            stdout,
            policy,
        } => {
            if let Some(policy) = policy {
                config.policy = parse_policy(&policy)?;
            }
            if let Some(format) = format {
                config.format = format
                    .parse::<OutputFormat>()
                    .with_context(|| format!("Invalid --format '{}'", format))?;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if let Some(name) = output_name {
                config.output_name = name;
            }

            let sources = resolve_sources(files, &config)?;
            debug!(sources = sources.len(), format = %config.format, policy = %config.policy, "exporting");
            let mut session = Session::new(config.policy);
            let report = session.select(&sources);
            let renderer = config.format.renderer();

            if stdout {
                let document = session
                    .export(renderer.as_ref())
                    .context("Failed to render timetable")?;
                print!("{}", document);
            } else {
                print_report(&report);
                let path = config.output_path();
                session
                    .export_to(renderer.as_ref(), &path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{} file {} created successfully.", config.format, path.display());
            }
        }
    }

    Ok(())
}

fn parse_policy(raw: &str) -> Result<AdmissionPolicy> {
    raw.parse::<AdmissionPolicy>()
        .with_context(|| format!("Invalid --policy '{}'", raw))
}

/// Explicit files win; otherwise every source in the configured input dir.
fn resolve_sources(files: Vec<PathBuf>, config: &Config) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files);
    }
    let found = discover_sources(&config.input_dir)
        .with_context(|| format!("Failed to scan {}", config.input_dir.display()))?;
    if found.is_empty() {
        bail!(
            "No input files: pass files explicitly or put *.txt files in {}",
            config.input_dir.display()
        );
    }
    Ok(found)
}

fn print_report(report: &LoadReport) {
    println!(
        "Loaded {} source(s): {} slot(s) admitted, {} rejected, {} malformed line(s)",
        report.sources.len(),
        report.admitted(),
        report.rejected(),
        report.malformed()
    );
    for source in &report.sources {
        println!(
            "  {} ({}): {}/{} admitted",
            source.source_id, source.instructor, source.admitted, source.candidates
        );
        for rejection in &source.rejected {
            println!("    rejected {}", rejection);
        }
        for err in &source.malformed {
            println!("    {}", err);
        }
    }
    for err in &report.unreadable {
        println!("  {}", err);
    }
}
