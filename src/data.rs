//! Data Source Module
//!
//! Defines the batch type consumed by the harnesses and the data-source
//! capability they iterate over. A data source exposes indexed access to a
//! finite, known-length sequence of batches, which makes it restartable:
//! each repeat of the benchmark walks indices `0..num_batches()` again.

use ndarray::{ArrayD, IxDyn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::NUM_CLASSES;

/// One (input, label) pair of tensors, consumed once per loop iteration.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Input tensor in NCHW layout
    pub input: ArrayD<f32>,
    /// Ground-truth class index per sample
    pub labels: Vec<usize>,
}

impl Batch {
    /// Number of samples in this batch (leading input dimension)
    pub fn num_samples(&self) -> usize {
        self.input.shape().first().copied().unwrap_or(0)
    }
}

/// A finite, known-length, restartable sequence of batches.
pub trait DataSource {
    /// Number of batches per full pass
    fn num_batches(&self) -> usize;

    /// Fetch the batch at `index` (0-based, `index < num_batches()`)
    fn batch(&self, index: usize) -> Result<Batch>;

    /// Whether the source yields no batches at all
    fn is_empty(&self) -> bool {
        self.num_batches() == 0
    }
}

/// Data source backed by pre-built batches, mainly for tests and mocks.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    batches: Vec<Batch>,
}

impl InMemorySource {
    /// Create a source from pre-built batches
    pub fn new(batches: Vec<Batch>) -> Self {
        Self { batches }
    }
}

impl DataSource for InMemorySource {
    fn num_batches(&self) -> usize {
        self.batches.len()
    }

    fn batch(&self, index: usize) -> Result<Batch> {
        Ok(self.batches[index].clone())
    }
}

/// Deterministic pseudo-random data source.
///
/// Inputs are uniform noise in `[-1, 1]` except that element `[i, 0, 0, 0]`
/// of each sample carries its label as a float. A reference predictor can
/// decode that element to produce a controllable accuracy signal without
/// any real model weights, the same trick the random-input latency
/// benchmark uses to avoid shipping a dataset.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    num_batches: usize,
    batch_size: usize,
    image_size: usize,
    seed: u64,
}

impl SyntheticSource {
    /// Create a synthetic source with the default 16x16 image size
    pub fn new(num_batches: usize, batch_size: usize, seed: u64) -> Self {
        Self {
            num_batches,
            batch_size,
            image_size: 16,
            seed,
        }
    }

    /// Override the square image size
    pub fn with_image_size(mut self, image_size: usize) -> Self {
        self.image_size = image_size;
        self
    }
}

impl DataSource for SyntheticSource {
    fn num_batches(&self) -> usize {
        self.num_batches
    }

    fn batch(&self, index: usize) -> Result<Batch> {
        // Per-index seeding keeps batches stable across repeats.
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));

        let shape = IxDyn(&[self.batch_size, 3, self.image_size, self.image_size]);
        let mut input = ArrayD::zeros(shape);
        for value in input.iter_mut() {
            *value = rng.gen_range(-1.0f32..1.0f32);
        }

        let labels: Vec<usize> = (0..self.batch_size)
            .map(|_| rng.gen_range(0..NUM_CLASSES))
            .collect();

        for (i, &label) in labels.iter().enumerate() {
            input[[i, 0, 0, 0]] = label as f32;
        }

        Ok(Batch { input, labels })
    }
}
