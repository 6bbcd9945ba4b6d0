//! forward-bench CLI
//!
//! Runs the framework-path or accelerated-runtime-path harness over a
//! synthetic data source with the software reference backends, printing and
//! optionally saving the throughput report. Real deployments plug their own
//! `Predictor`/`AccelRuntime` implementations into the library instead.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use forward_bench::backend::{CpuRuntime, LookupPredictor};
use forward_bench::config::ForwardConfig;
use forward_bench::data::SyntheticSource;
use forward_bench::harness::engine::engine_forward;
use forward_bench::harness::framework::model_forward;
use forward_bench::harness::ForwardOutcome;
use forward_bench::logging::{init_logging, LogConfig};
use forward_bench::metrics::Top1Evaluator;

/// Inference throughput/accuracy benchmark harness
#[derive(Parser, Debug)]
#[command(name = "forward-bench")]
#[command(version)]
#[command(about = "Benchmark image-classification inference paths", long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging, including per-step progress
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Number of full passes over the data
    #[arg(short, long, default_value = "2")]
    repeat: usize,

    /// Log progress every N steps
    #[arg(long, default_value = "30")]
    log_freq: usize,

    /// Samples per batch
    #[arg(short, long, default_value = "32")]
    batch_size: usize,

    /// Number of batches per pass
    #[arg(short = 'n', long, default_value = "64")]
    num_batches: usize,

    /// Square image size of the synthetic inputs
    #[arg(long, default_value = "16")]
    image_size: usize,

    /// Mispredicted samples per batch (controls the accuracy signal)
    #[arg(long, default_value = "0")]
    misses: usize,

    /// RNG seed for the synthetic data
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Save the throughput report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Benchmark the framework path (direct model invocation)
    Framework {
        #[command(flatten)]
        run: RunArgs,

        /// Framework label for the report
        #[arg(long, default_value = "reference-cpu")]
        framework: String,
    },

    /// Benchmark the accelerated-runtime path (vendor toolkit)
    Engine {
        #[command(flatten)]
        run: RunArgs,

        /// Vendor label for the report
        #[arg(long, default_value = "reference-cpu")]
        vendor: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    init_logging(&log_config).map_err(|e| anyhow::anyhow!(e))?;

    let outcome = match cli.command {
        Commands::Framework { run, framework } => {
            let config = ForwardConfig {
                repeat: run.repeat,
                log_freq: run.log_freq,
                batch_size: run.batch_size,
                framework,
                ..ForwardConfig::default()
            };
            let source =
                SyntheticSource::new(run.num_batches, run.batch_size, run.seed)
                    .with_image_size(run.image_size);
            let model = LookupPredictor::with_misses(run.misses);

            info!("Benchmarking framework path over {} batches", run.num_batches);
            let outcome = model_forward(&model, &source, &Top1Evaluator, &config)?;
            finish(&outcome, run.output.as_deref())?;
            outcome
        }
        Commands::Engine { run, vendor } => {
            let config = ForwardConfig {
                repeat: run.repeat,
                log_freq: run.log_freq,
                batch_size: run.batch_size,
                vendor,
                ..ForwardConfig::default()
            };
            let source =
                SyntheticSource::new(run.num_batches, run.batch_size, run.seed)
                    .with_image_size(run.image_size);
            let runtime = CpuRuntime::new(3 * run.image_size * run.image_size, run.batch_size)
                .with_misses(run.misses);

            info!("Benchmarking engine path over {} batches", run.num_batches);
            let outcome = engine_forward(&runtime, &source, &Top1Evaluator, &config)?;
            finish(&outcome, run.output.as_deref())?;
            outcome
        }
    };

    // Accuracy summary after the throughput lines.
    for (pass, acc) in outcome.accuracies.iter().enumerate() {
        println!("  repeat {}: top-1 accuracy {:.4}", pass + 1, acc);
    }

    Ok(())
}

fn finish(outcome: &ForwardOutcome, output: Option<&std::path::Path>) -> Result<()> {
    println!("{}", outcome.report.summary().green().bold());

    if let Some(path) = output {
        outcome.report.save(path)?;
        println!("  Saved report to: {}", path.display());
    }

    Ok(())
}
