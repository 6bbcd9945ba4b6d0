//! Accelerated-runtime-path harness
//!
//! Drives a vendor-style inference toolkit: an execution context is created
//! and device buffers are allocated once per run, then every batch is
//! flattened into the pre-allocated input buffer, the inference invocation
//! is core-timed (including its synchronous wait), and the raw output is
//! postprocessed into a `(batch, 1000)` prediction for scoring. Buffers are
//! reused across all batches and repeats; single-threaded, so no
//! synchronization applies.

use std::time::Instant;

use ndarray::Array2;

use crate::config::ForwardConfig;
use crate::data::DataSource;
use crate::error::Result;
use crate::harness::{run_passes, ForwardOutcome};
use crate::metrics::Evaluator;
use crate::NUM_CLASSES;

/// Capability interface over a vendor inference runtime.
///
/// Covers the full toolkit: execution-context creation, one-time buffer
/// allocation, per-batch input staging, the synchronous inference call, and
/// output postprocessing.
pub trait AccelRuntime {
    /// Execution context acquired once per run
    type Context;
    /// Input/output/bindings/stream resources, allocated once per run
    type Buffers;

    /// Acquire an execution context from the engine
    fn create_execution_context(&self) -> Result<Self::Context>;

    /// Allocate the run-lifetime input/output buffer set
    fn allocate_buffers(&self, context: &Self::Context) -> Result<Self::Buffers>;

    /// Write one flattened host batch into the pre-allocated input buffer
    fn write_input(&self, buffers: &mut Self::Buffers, input: &[f32]) -> Result<()>;

    /// Execute inference and wait for the raw output (the core-timed step)
    fn infer(&self, context: &mut Self::Context, buffers: &mut Self::Buffers) -> Result<Vec<f32>>;

    /// Reshape raw output into a `(batch, classes)` prediction
    fn postprocess(&self, raw: Vec<f32>, shape: (usize, usize)) -> Result<Array2<f32>>;
}

/// Run `config.repeat` full passes of `runtime` over `source`, scoring each
/// batch with `evaluator`.
///
/// Same accumulation and reporting as the framework path, logged under the
/// `config.vendor` label; only the prediction-producing step differs.
pub fn engine_forward<R, D, E>(
    runtime: &R,
    source: &D,
    evaluator: &E,
    config: &ForwardConfig,
) -> Result<ForwardOutcome>
where
    R: AccelRuntime,
    D: DataSource + ?Sized,
    E: Evaluator + ?Sized,
{
    let mut context = runtime.create_execution_context()?;
    let mut buffers = runtime.allocate_buffers(&context)?;

    let label = format!("Vendor Inference({})", config.vendor);

    run_passes(label, source, evaluator, config, move |batch| {
        let host: Vec<f32> = batch.input.iter().copied().collect();
        runtime.write_input(&mut buffers, &host)?;
        let output_shape = (batch.num_samples(), NUM_CLASSES);

        let core_start = Instant::now();
        let raw = runtime.infer(&mut context, &mut buffers)?;
        let core = core_start.elapsed();

        let prediction = runtime.postprocess(raw, output_shape)?;
        Ok((prediction, core))
    })
}
