mod display;
mod input;

use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lexdraft_core::layout::DEFAULT_EXPORT_BASE;
use lexdraft_core::pipeline::DEFAULT_MAX_DROP_RATIO;
use lexdraft_core::{ExportFormat, draft};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lexdraft",
    version,
    about = "Clean, format, and extract fields from generated legal drafts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip filler, trim to the document, and normalise markdown
    Clean {
        /// Input file (omit or "-" for stdin)
        input: Option<PathBuf>,
        /// Print a cleaning summary to stderr
        #[arg(long)]
        report: bool,
        /// Print every pipeline stage instead of only the final text
        #[arg(long)]
        stages: bool,
        /// Drop ratio above which the summary suggests a review
        #[arg(long, env = "LEXDRAFT_MAX_DROP_RATIO", default_value_t = DEFAULT_MAX_DROP_RATIO)]
        max_drop_ratio: f64,
    },
    /// Render numbered headings and indented paragraphs
    Format {
        /// Input file (omit or "-" for stdin)
        input: Option<PathBuf>,
    },
    /// Extract parties, effective date, term, and jurisdiction
    Extract {
        /// Input file (omit or "-" for stdin)
        input: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Print only this field (party_a, party_b, effective_date, term, jurisdiction)
        #[arg(long, conflicts_with = "json")]
        field: Option<String>,
    },
    /// Classify lines as title, section, or body for export
    Layout {
        /// Input file (omit or "-" for stdin)
        input: Option<PathBuf>,
        /// Split body lines into one row per sentence
        #[arg(long)]
        sentences: bool,
    },
    /// Print a timestamped export filename
    Filename {
        #[arg(long, default_value = DEFAULT_EXPORT_BASE)]
        base: String,
        /// pdf or docx
        #[arg(long, default_value = "pdf")]
        format: ExportFormat,
    },
    /// Pull the finished draft out of an agent reply
    Draft {
        /// Input file (omit or "-" for stdin)
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("lexdraft v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            report,
            stages,
            max_drop_ratio,
        } => {
            let raw = input::read_input(input.as_deref())?;
            let report = report.then(|| lexdraft_core::clean_with_report(&raw));
            let mut out = String::new();
            if stages {
                display::write_stages(&mut out, &lexdraft_core::clean_stages(&raw))?;
            } else if let Some(report) = &report {
                writeln!(out, "{}", report.cleaned)?;
            } else {
                writeln!(out, "{}", lexdraft_core::strip_and_clean(&raw))?;
            }
            print!("{out}");
            if let Some(report) = &report {
                let mut summary = String::new();
                display::write_report(&mut summary, report, max_drop_ratio)?;
                eprint!("{summary}");
            }
        }
        Commands::Format { input } => {
            let text = input::read_input(input.as_deref())?;
            print!("{}", lexdraft_core::format_structured(&text));
        }
        Commands::Extract { input, json, field } => {
            let text = input::read_input(input.as_deref())?;
            let fields = lexdraft_core::extract_fields(&text);
            if let Some(key) = field {
                let value = fields
                    .get(&key)
                    .with_context(|| format!("unknown field: {key}"))?;
                println!("{value}");
            } else if json {
                println!("{}", serde_json::to_string_pretty(&fields)?);
            } else {
                let mut out = String::new();
                display::write_fields(&mut out, &fields)?;
                print!("{out}");
            }
        }
        Commands::Layout { input, sentences } => {
            let text = input::read_input(input.as_deref())?;
            let lines = if sentences {
                lexdraft_core::layout_sentences(&text)
            } else {
                lexdraft_core::layout_lines(&text)
            };
            let mut out = String::new();
            display::write_layout(&mut out, &lines)?;
            print!("{out}");
        }
        Commands::Filename { base, format } => {
            println!(
                "{}",
                lexdraft_core::export_filename(&base, format, chrono::Utc::now())
            );
        }
        Commands::Draft { input } => {
            let reply = input::read_input(input.as_deref())?;
            match draft::take_completed_draft(&reply) {
                Some(text) => println!("{text}"),
                None => {
                    eprintln!("no {} marker in reply", draft::DRAFT_COMPLETE_MARKER);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
