//! Measurement Harness Module
//!
//! Both execution paths share one control structure: an outer repeat loop,
//! an inner batch loop with periodic progress logging, a core-timed
//! prediction step, per-batch evaluation, a per-repeat mean, and a final
//! dual-throughput report. The shared skeleton lives here, parameterized by
//! the single step that differs between the paths: producing a prediction
//! from a batch.
//!
//! - `framework`: drives a [`Predictor`] directly (native framework path)
//! - `engine`: drives an [`engine::AccelRuntime`] toolkit (vendor path)

pub mod engine;
pub mod framework;

use std::time::{Duration, Instant};

use ndarray::{Array2, ArrayD};
use tracing::{debug, info};

use crate::config::ForwardConfig;
use crate::data::{Batch, DataSource};
use crate::error::{BenchError, Result};
use crate::metrics::{mean, Evaluator};
use crate::report::ThroughputReport;

/// A model callable: maps one input batch to a batch of class logits.
///
/// Device transfer and the forward pass both happen inside `predict`; the
/// harness times the whole call as the core region.
pub trait Predictor {
    /// Run one forward pass over an NCHW input batch
    fn predict(&self, input: &ArrayD<f32>) -> Result<Array2<f32>>;
}

/// Result of one harness run.
#[derive(Debug, Clone)]
pub struct ForwardOutcome {
    /// Mean top-1 accuracy per repeat, in pass order (length == `repeat`)
    pub accuracies: Vec<f64>,
    /// Wall/core throughput figures for the whole run
    pub report: ThroughputReport,
}

/// Whether a progress line is due at `step` (0-based). Fires at step 0 and
/// every `log_freq` steps after, i.e. `ceil(n / log_freq)` times per pass.
pub(crate) fn should_log_progress(step: usize, log_freq: usize) -> bool {
    step % log_freq == 0
}

/// Shared repeat/batch/timing/accumulation skeleton.
///
/// `produce` maps a batch to its prediction and the core duration spent
/// producing it; everything else (data fetch, scoring, accumulation) counts
/// only toward wall-clock time.
pub(crate) fn run_passes<D, E, F>(
    label: String,
    source: &D,
    evaluator: &E,
    config: &ForwardConfig,
    mut produce: F,
) -> Result<ForwardOutcome>
where
    D: DataSource + ?Sized,
    E: Evaluator + ?Sized,
    F: FnMut(&Batch) -> Result<(Array2<f32>, Duration)>,
{
    config.validate()?;
    if source.is_empty() {
        return Err(BenchError::Data("data source yields no batches".to_string()));
    }

    let num_batches = source.num_batches();
    let start = Instant::now();
    let mut core_time = Duration::ZERO;
    let mut accuracies = Vec::with_capacity(config.repeat);

    for pass in 0..config.repeat {
        debug!("Repeat: {}/{}", pass + 1, config.repeat);

        let mut indicators: Vec<f32> = Vec::new();
        for step in 0..num_batches {
            if should_log_progress(step, config.log_freq) {
                debug!("Step: {} / {}", step, num_batches);
            }

            let batch = source.batch(step)?;
            let (prediction, core) = produce(&batch)?;
            core_time += core;

            indicators.extend(evaluator.score(&prediction, &batch.labels)?);
        }

        accuracies.push(mean(&indicators));
    }

    let wall = start.elapsed();
    let images = config.repeat * num_batches * config.batch_size;
    let report = ThroughputReport::new(label, images, wall, core_time);

    info!("{} Perf: {:.3} ips", report.label, report.ips);
    info!("{} core Perf: {:.3} ips", report.label, report.core_ips);

    Ok(ForwardOutcome { accuracies, report })
}
