use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use deptree::export::{export, OutputFormat, Report};
use deptree::parser::parse_file;

#[derive(Parser)]
#[command(name = "deptree")]
#[command(version)]
#[command(about = "Render declared package dependency trees from a JSON mapping", long_about = None)]
struct Cli {
    /// JSON document mapping package names to dependency lists
    file: PathBuf,

    /// Only render these packages (defaults to every declared package)
    #[arg(short, long = "root", value_name = "NAME")]
    roots: Vec<String>,

    /// Output format: text or json
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Append a report of circular dependency groups
    #[arg(long)]
    cycles: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = parse_file(&cli.file)
        .with_context(|| format!("Failed to load dependency document {}", cli.file.display()))?;
    debug!(
        packages = store.len(),
        edges = store.edge_count(),
        "loaded dependency graph"
    );

    let mut report = if cli.roots.is_empty() {
        Report::all(&store)
    } else {
        for root in cli.roots.iter().filter(|root| !store.contains(root)) {
            warn!(package = %root, "root is not declared, rendering as a leaf");
        }
        Report::for_roots(&store, &cli.roots)
    };
    if cli.cycles {
        report = report.with_cycles(&store);
    }
    debug!(trees = report.trees.len(), lines = report.line_count(), "rendered trees");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    export(cli.format, &report, &mut out).context("Failed to write output")?;
    out.flush().context("Failed to write output")?;

    Ok(())
}
