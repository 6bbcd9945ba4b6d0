//! Reference Backend Module
//!
//! Software stand-ins for the two execution paths, used by the CLI and the
//! tests. Neither carries real model weights: both decode the label a
//! [`SyntheticSource`](crate::data::SyntheticSource) encodes into element
//! `[i, 0, 0, 0]` of each sample and emit one-hot logits, optionally
//! mispredicting a fixed number of samples per batch so accuracy figures
//! are controllable.

use ndarray::{Array2, ArrayD};

use crate::error::{BenchError, Result};
use crate::harness::engine::AccelRuntime;
use crate::harness::Predictor;
use crate::NUM_CLASSES;

/// Framework-path stand-in: decodes the encoded label from the input.
#[derive(Debug, Clone)]
pub struct LookupPredictor {
    classes: usize,
    miss_per_batch: usize,
}

impl LookupPredictor {
    /// Predictor that always emits the encoded label (accuracy 1.0)
    pub fn exact() -> Self {
        Self {
            classes: NUM_CLASSES,
            miss_per_batch: 0,
        }
    }

    /// Predictor mispredicting the first `miss_per_batch` samples per batch
    pub fn with_misses(miss_per_batch: usize) -> Self {
        Self {
            classes: NUM_CLASSES,
            miss_per_batch,
        }
    }

    fn one_hot(&self, decoded: &[usize]) -> Array2<f32> {
        let mut logits = Array2::zeros((decoded.len(), self.classes));
        for (i, &label) in decoded.iter().enumerate() {
            let class = if i < self.miss_per_batch {
                (label + 1) % self.classes
            } else {
                label
            };
            logits[[i, class]] = 1.0;
        }
        logits
    }
}

impl Predictor for LookupPredictor {
    fn predict(&self, input: &ArrayD<f32>) -> Result<Array2<f32>> {
        let n = input.shape().first().copied().unwrap_or(0);
        if n == 0 || input.len() % n != 0 {
            return Err(BenchError::Inference(format!(
                "malformed input batch of shape {:?}",
                input.shape()
            )));
        }

        let stride = input.len() / n;
        let decoded: Vec<usize> = input
            .iter()
            .step_by(stride)
            .take(n)
            .map(|&v| (v.round() as usize).min(self.classes - 1))
            .collect();

        Ok(self.one_hot(&decoded))
    }
}

/// Execution context of the [`CpuRuntime`]
#[derive(Debug, Default)]
pub struct CpuContext;

/// Host-memory input/output buffer set of the [`CpuRuntime`]
#[derive(Debug)]
pub struct HostBuffers {
    input: Vec<f32>,
    output: Vec<f32>,
}

/// Vendor-path stand-in: an [`AccelRuntime`] executing entirely in host
/// memory. Context creation and buffer allocation happen once per run, the
/// inference step fills the output buffer with one-hot logits decoded from
/// the staged input.
#[derive(Debug, Clone)]
pub struct CpuRuntime {
    sample_elems: usize,
    batch_size: usize,
    predictor: LookupPredictor,
}

impl CpuRuntime {
    /// Create a runtime for inputs of `sample_elems` elements per sample
    pub fn new(sample_elems: usize, batch_size: usize) -> Self {
        Self {
            sample_elems,
            batch_size,
            predictor: LookupPredictor::exact(),
        }
    }

    /// Mispredict the first `miss_per_batch` samples of every batch
    pub fn with_misses(mut self, miss_per_batch: usize) -> Self {
        self.predictor = LookupPredictor::with_misses(miss_per_batch);
        self
    }
}

impl AccelRuntime for CpuRuntime {
    type Context = CpuContext;
    type Buffers = HostBuffers;

    fn create_execution_context(&self) -> Result<Self::Context> {
        Ok(CpuContext)
    }

    fn allocate_buffers(&self, _context: &Self::Context) -> Result<Self::Buffers> {
        Ok(HostBuffers {
            input: vec![0.0; self.batch_size * self.sample_elems],
            output: vec![0.0; self.batch_size * NUM_CLASSES],
        })
    }

    fn write_input(&self, buffers: &mut Self::Buffers, input: &[f32]) -> Result<()> {
        if input.len() != buffers.input.len() {
            return Err(BenchError::Inference(format!(
                "staged input has {} elements, buffer holds {}",
                input.len(),
                buffers.input.len()
            )));
        }
        buffers.input.copy_from_slice(input);
        Ok(())
    }

    fn infer(&self, _context: &mut Self::Context, buffers: &mut Self::Buffers) -> Result<Vec<f32>> {
        buffers.output.iter_mut().for_each(|v| *v = 0.0);

        for i in 0..self.batch_size {
            let encoded = buffers.input[i * self.sample_elems];
            let label = (encoded.round() as usize).min(NUM_CLASSES - 1);
            let class = if i < self.predictor.miss_per_batch {
                (label + 1) % NUM_CLASSES
            } else {
                label
            };
            buffers.output[i * NUM_CLASSES + class] = 1.0;
        }

        Ok(buffers.output.clone())
    }

    fn postprocess(&self, raw: Vec<f32>, shape: (usize, usize)) -> Result<Array2<f32>> {
        if raw.len() != shape.0 * shape.1 {
            return Err(BenchError::Shape {
                expected: shape,
                got: raw.len(),
            });
        }
        Array2::from_shape_vec(shape, raw).map_err(|e| BenchError::Inference(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, SyntheticSource};
    use crate::metrics::{Evaluator, Top1Evaluator};

    #[test]
    fn test_lookup_predictor_decodes_labels() {
        let source = SyntheticSource::new(1, 6, 17);
        let batch = source.batch(0).unwrap();

        let logits = LookupPredictor::exact().predict(&batch.input).unwrap();
        let indicators = Top1Evaluator.score(&logits, &batch.labels).unwrap();
        assert_eq!(indicators, vec![1.0; 6]);
    }

    #[test]
    fn test_lookup_predictor_misses_lower_accuracy() {
        let source = SyntheticSource::new(1, 6, 17);
        let batch = source.batch(0).unwrap();

        let logits = LookupPredictor::with_misses(3)
            .predict(&batch.input)
            .unwrap();
        let indicators = Top1Evaluator.score(&logits, &batch.labels).unwrap();
        assert_eq!(indicators.iter().sum::<f32>(), 3.0);
    }

    #[test]
    fn test_cpu_runtime_buffer_sizes() {
        let runtime = CpuRuntime::new(12, 4);
        let context = runtime.create_execution_context().unwrap();
        let buffers = runtime.allocate_buffers(&context).unwrap();
        assert_eq!(buffers.input.len(), 48);
        assert_eq!(buffers.output.len(), 4 * NUM_CLASSES);
    }

    #[test]
    fn test_cpu_runtime_rejects_wrong_input_length() {
        let runtime = CpuRuntime::new(12, 4);
        let context = runtime.create_execution_context().unwrap();
        let mut buffers = runtime.allocate_buffers(&context).unwrap();
        assert!(runtime.write_input(&mut buffers, &[0.0; 47]).is_err());
    }

    #[test]
    fn test_postprocess_shape_mismatch() {
        let runtime = CpuRuntime::new(12, 4);
        let result = runtime.postprocess(vec![0.0; 10], (4, NUM_CLASSES));
        assert!(matches!(result, Err(BenchError::Shape { .. })));
    }
}
