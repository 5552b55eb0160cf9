use anyhow::bail;
use clap::{Parser, Subcommand};
use mirror_axis::config::{load_config_or_default, Config};
use mirror_axis::logging::{init_logging, new_correlation_id};
use mirror_axis::visualization::{find_disagreement, print_comparison_table, JsonReport, OutputFormat, TextReport};
use mirror_axis::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mirror-axis")]
#[command(about = "Find the vertical mirror-symmetry axis of a square grayscale photo")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a photo and report its best mirror axis
    Scan {
        /// Path to the photo (defaults to the configured input path)
        path: Option<PathBuf>,

        /// Scanning strategy
        #[arg(short, long, value_enum)]
        strategy: Option<ScanStrategy>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Run every scanning strategy on the same photo and check they agree
    Compare {
        /// Path to the photo (defaults to the configured input path)
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_or_default(cli.config.as_deref());
    config.logging.apply_verbosity(cli.verbose);
    let _logging = init_logging(&config.logging)?;

    let run_id = new_correlation_id();
    tracing::debug!(%run_id, "Starting run");

    match cli.command {
        Commands::Scan { path, strategy, format } => {
            handle_scan(&config, path, strategy, format)?;
        }
        Commands::Compare { path } => {
            handle_compare(&config, path)?;
        }
    }

    Ok(())
}

fn handle_scan(
    config: &Config,
    path: Option<PathBuf>,
    strategy: Option<ScanStrategy>,
    format: Option<OutputFormat>,
) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| config.input.path.clone());
    let strategy = strategy.unwrap_or(config.scan.strategy);
    let pipeline = SymmetryPipeline::new(strategy);

    match format.unwrap_or(config.report.format) {
        OutputFormat::Text => {
            let mut report = TextReport::stdout(&config.report);
            pipeline.run(&path, &mut report)?;
        }
        OutputFormat::Json => {
            let mut report = JsonReport::new(&config.report);
            pipeline.run(&path, &mut report)?;
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}

fn handle_compare(config: &Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| config.input.path.clone());

    let mut report = TextReport::stdout(&config.report);
    let (_, matrix) = SymmetryPipeline::new(config.scan.strategy).load(&path, &mut report)?;

    let mut results = Vec::new();
    for strategy in ScanStrategy::ALL {
        println!("Running {} scanner...", strategy);
        results.push(strategy.scanner().scan(&matrix)?);
    }

    print_comparison_table(&results);

    if let Some((expected, found)) = find_disagreement(&results) {
        bail!(
            "{} and {} scanners disagree: axis {} (loss {:?}) vs axis {} (loss {:?})",
            expected.scanner_used,
            found.scanner_used,
            expected.axis,
            expected.loss,
            found.axis,
            found.loss
        );
    }

    println!("All scanners agree on axis {}.", results[0].axis);
    Ok(())
}
