use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pagesim::common::config::DEFAULT_LOG_FILTER;
use pagesim::{Comparison, Policy, Result, Workload};

#[derive(Parser)]
#[command(
    name = "pagesim",
    version,
    about = "Compare FIFO, LRU and Optimal page replacement"
)]
struct Cli {
    /// Space-separated reference string, e.g. "7 0 1 2 0 3"
    #[arg(long, conflicts_with = "input")]
    pages: Option<String>,

    /// Number of memory frames
    #[arg(long, requires = "pages")]
    frames: Option<String>,

    /// File holding the reference string on line one and the frame count on line two
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print the resident set after each reference for this policy
    #[arg(long, value_name = "POLICY")]
    show_frames: Option<Policy>,

    /// Run the three policies on separate threads
    #[arg(long)]
    parallel: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        if e.is_input_error() {
            eprintln!("{e}");
        } else {
            eprintln!("error: {e}");
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let workload = match (&cli.pages, &cli.input) {
        (Some(pages), _) => Workload::parse(pages, cli.frames.as_deref().unwrap_or_default())?,
        (None, Some(path)) => Workload::from_path(path)?,
        (None, None) => prompt()?,
    };

    let config = workload
        .config()?
        .with_verbose(cli.show_frames.is_some())
        .with_parallel(cli.parallel);
    debug!(?config, "starting comparison");

    let comparison = Comparison::run(&workload.pages, &config)?;
    println!();
    println!("{comparison}");

    if let Some(states) = cli
        .show_frames
        .and_then(|policy| comparison.render_frame_states(policy))
    {
        println!();
        print!("{states}");
    }
    Ok(())
}

/// Ask for the two input lines on stdin.
fn prompt() -> Result<Workload> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    let pages_line = ask(&mut lines, "Enter pages (space separated): ")?;
    let frames_line = ask(&mut lines, "Enter number of frames: ")?;
    Workload::parse(&pages_line, &frames_line)
}

fn ask<R: BufRead>(reader: &mut R, question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}
