//! Framework-path harness
//!
//! Drives a model object directly over a data source. The core-timed region
//! is the `predict` call, which covers device transfer plus the forward
//! pass; data fetch and evaluation count only toward wall-clock time.

use std::time::Instant;

use crate::config::ForwardConfig;
use crate::data::DataSource;
use crate::error::Result;
use crate::harness::{run_passes, ForwardOutcome, Predictor};
use crate::metrics::Evaluator;

/// Run `config.repeat` full passes of `model` over `source`, scoring each
/// batch with `evaluator`.
///
/// Returns the per-repeat mean accuracy sequence together with the dual
/// throughput report (images/second against wall and core time), which is
/// also logged under the `config.framework` label.
pub fn model_forward<M, D, E>(
    model: &M,
    source: &D,
    evaluator: &E,
    config: &ForwardConfig,
) -> Result<ForwardOutcome>
where
    M: Predictor + ?Sized,
    D: DataSource + ?Sized,
    E: Evaluator + ?Sized,
{
    let label = format!("Model Forward({})", config.framework);

    run_passes(label, source, evaluator, config, |batch| {
        let core_start = Instant::now();
        let prediction = model.predict(&batch.input)?;
        Ok((prediction, core_start.elapsed()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LookupPredictor;
    use crate::data::SyntheticSource;
    use crate::metrics::Top1Evaluator;

    #[test]
    fn test_exact_predictor_scores_perfectly() {
        let config = ForwardConfig {
            repeat: 2,
            log_freq: 1,
            batch_size: 4,
            ..ForwardConfig::default()
        };
        let source = SyntheticSource::new(3, config.batch_size, 11);
        let outcome =
            model_forward(&LookupPredictor::exact(), &source, &Top1Evaluator, &config).unwrap();

        assert_eq!(outcome.accuracies, vec![1.0, 1.0]);
        assert!(outcome.report.label.contains(&config.framework));
    }

    #[test]
    fn test_miss_rate_shows_in_accuracy() {
        // 2 misses out of every 4-sample batch -> exactly 0.5 accuracy
        let config = ForwardConfig {
            repeat: 1,
            log_freq: 2,
            batch_size: 4,
            ..ForwardConfig::default()
        };
        let source = SyntheticSource::new(5, config.batch_size, 11);
        let outcome = model_forward(
            &LookupPredictor::with_misses(2),
            &source,
            &Top1Evaluator,
            &config,
        )
        .unwrap();

        assert_eq!(outcome.accuracies, vec![0.5]);
    }
}
