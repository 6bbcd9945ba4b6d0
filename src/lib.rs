//! # forward-bench
//!
//! A benchmark harness measuring inference throughput and top-1 accuracy of
//! an image-classification model under two execution paths:
//!
//! - **Framework path**: a model object (anything implementing
//!   [`Predictor`]) is driven directly over a data source.
//! - **Accelerated-runtime path**: a vendor-style inference toolkit
//!   (anything implementing [`AccelRuntime`]) is driven over the same data,
//!   with one-time buffer allocation and per-batch buffer fill.
//!
//! Both paths run `repeat` full passes over the data source, record a mean
//! top-1 accuracy per pass, and report images/second twice: once against
//! wall-clock time and once against "core" time (the prediction-producing
//! step only, excluding data loading and scoring).
//!
//! ## Modules
//!
//! - `config`: benchmark configuration and validation
//! - `data`: batch type and data-source capability
//! - `metrics`: evaluator capability and top-1 scoring
//! - `harness`: the two measurement routines and their shared loop
//! - `backend`: software reference implementations for testing and demos
//! - `report`: serializable throughput report
//! - `logging`: tracing subscriber setup
//!
//! ## Quick start
//!
//! ```rust
//! use forward_bench::backend::{CpuRuntime, LookupPredictor};
//! use forward_bench::config::ForwardConfig;
//! use forward_bench::data::SyntheticSource;
//! use forward_bench::harness::framework::model_forward;
//! use forward_bench::metrics::Top1Evaluator;
//!
//! let config = ForwardConfig::default();
//! let source = SyntheticSource::new(4, config.batch_size, 42);
//! let model = LookupPredictor::exact();
//! let outcome = model_forward(&model, &source, &Top1Evaluator, &config).unwrap();
//! assert_eq!(outcome.accuracies.len(), config.repeat);
//! ```

pub mod backend;
pub mod config;
pub mod data;
pub mod error;
pub mod harness;
pub mod logging;
pub mod metrics;
pub mod report;

pub use config::ForwardConfig;
pub use data::{Batch, DataSource};
pub use error::{BenchError, Result};
pub use harness::engine::{engine_forward, AccelRuntime};
pub use harness::framework::model_forward;
pub use harness::{ForwardOutcome, Predictor};
pub use metrics::{Evaluator, Top1Evaluator};
pub use report::ThroughputReport;

/// Number of output classes (ImageNet-1k / ResNet-50 head).
pub const NUM_CLASSES: usize = 1000;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
