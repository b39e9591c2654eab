use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use keyalign::{
    loader, report, AlignConfig, AlignerBuilder, AlignmentInput,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "keyalign",
    about = "Align a timestamped key-press log with its plain-text transcript",
    version
)]
struct Args {
    /// Key-event log ("<timestamp> <char code>" lines, "#"-prefixed section markers)
    logfile: PathBuf,

    /// Transcript file(s), concatenated in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Only use log events from the section with this title
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Minimum equal-run length worth recording
    #[arg(long, default_value_t = AlignConfig::DEFAULT_MIN_RUN)]
    min_run: usize,

    /// Largest combined gap bridged when merging adjacent matches
    #[arg(long)]
    max_gap: Option<usize>,

    /// Set logging level to WARN
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.quiet {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let events = loader::read_key_log(&args.logfile, args.title.as_deref())?;
    let text = loader::read_transcripts(&args.files)?;
    let input = AlignmentInput { events, text };

    let config = AlignConfig {
        min_run: args.min_run,
        max_gap: args.max_gap,
    };
    let output = AlignerBuilder::new(config).build().align(&input)?;
    let rows = report::mapped_rows(&input, &output.mapping);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match args.format {
        OutputFormat::Text => report::write_text_report(&mut handle, &rows)?,
        OutputFormat::Json => report::write_json_report(&mut handle, &rows)?,
    }
    handle.flush()?;
    Ok(())
}
