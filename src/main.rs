//! commesse - CLI to derive and print order job sheets.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use commesse::{parse_order_file, render_order_file, validate_order, ReportConfig, View};

/// Derive plates, sheets and hours for a print-shop order.
#[derive(Parser, Debug)]
#[command(name = "commesse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input order document (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// View to render
    #[arg(long, value_enum, ignore_case = true, default_value_t = View::Stampa)]
    view: View,

    /// Shop name printed in the header
    #[arg(long, default_value = "Tipografia")]
    shop: String,

    /// Leave processing hours out of the print view
    #[arg(long)]
    no_hours: bool,

    /// Validate only, don't render
    #[arg(long)]
    validate: bool,

    /// Output the parsed order as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    if args.validate || args.debug {
        return check_order(&args);
    }

    let mut config = ReportConfig::new(args.shop);
    config.show_hours = !args.no_hours;

    let rendered = render_order_file(&args.input, args.view, &config)
        .with_context(|| format!("Failed to render {}", args.input.display()))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {} ({} view)", path.display(), args.view);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// `--validate` and `--debug`: check the order without rendering a view.
fn check_order(args: &Args) -> Result<()> {
    let order = parse_order_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let validation = validate_order(&order);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    if args.debug {
        let json = serde_json::to_string_pretty(&order)?;
        println!("{}", json);
        return Ok(());
    }

    info!("Validation passed");
    Ok(())
}
