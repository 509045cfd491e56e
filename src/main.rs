//! import-graph-layout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use import_graph_layout::renderers::{PositionsRenderer, Renderer};
use import_graph_layout::{DegeneratePolicy, InputFormat, layout_graph, load_config};

/// Lay out a module import graph for the dependency visualizer.
#[derive(Parser, Debug)]
#[command(
    name = "import-graph-layout",
    version = env!("IMPORT_GRAPH_LAYOUT_VERSION"),
    about = "Lay out a module import graph as a positions-and-adjacency file"
)]
struct Cli {
    /// Input graph (.gexf or .json); reads stdin if omitted or '-'
    input: Option<PathBuf>,

    /// Input format
    #[arg(short = 'f', long = "format", value_enum, default_value = "auto")]
    format: InputFormat,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// JSON config file (topic table, windows, radius range)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Override the number of vertical levels tracked per bucket
    #[arg(long = "slot-window")]
    slot_window: Option<usize>,

    /// Fail instead of falling back when all weights are equal
    #[arg(long = "strict-radius")]
    strict_radius: bool,

    /// Print graph statistics to stderr
    #[arg(long = "stats")]
    stats: bool,

    /// Log pass-by-pass progress
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(window) = cli.slot_window {
        config.slot_window = window;
    }
    if cli.strict_radius {
        config.degenerate_policy = DegeneratePolicy::Strict;
    }

    let text = read_input(cli.input.as_deref())?;
    let result = layout_graph(&text, cli.format, cli.input.as_deref(), &config)?;
    if cli.stats {
        eprintln!("{}", result.stats);
    }

    // Rendered in full before anything is written, so a failed run leaves no file.
    let rendered = PositionsRenderer.render(&result);
    match cli.output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("cannot write '{}'", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("cannot write stdout")?;
            stdout.flush().context("cannot flush stdout")?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
