//! Metrics Module
//!
//! Defines the evaluator capability used by both harnesses and the standard
//! top-1 implementation: a prediction counts as correct when the
//! highest-scoring logit index matches the ground-truth label.

use ndarray::Array2;

use crate::error::{BenchError, Result};

/// Maps one batch of predictions to per-sample correctness indicators.
pub trait Evaluator {
    /// Score a prediction against its labels.
    ///
    /// Returns one indicator per sample; for top-1 scoring these are 1.0
    /// (correct) or 0.0 (incorrect).
    fn score(&self, prediction: &Array2<f32>, labels: &[usize]) -> Result<Vec<f32>>;
}

/// Top-1 accuracy evaluator: argmax over logits vs. ground-truth label.
#[derive(Debug, Clone, Copy, Default)]
pub struct Top1Evaluator;

impl Evaluator for Top1Evaluator {
    fn score(&self, prediction: &Array2<f32>, labels: &[usize]) -> Result<Vec<f32>> {
        if prediction.nrows() != labels.len() {
            return Err(BenchError::Inference(format!(
                "prediction has {} rows but {} labels were given",
                prediction.nrows(),
                labels.len()
            )));
        }

        let indicators = prediction
            .rows()
            .into_iter()
            .zip(labels.iter())
            .map(|(row, &label)| {
                let argmax = row
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.total_cmp(b))
                    .map(|(idx, _)| idx)
                    .unwrap_or(0);
                if argmax == label {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();

        Ok(indicators)
    }
}

/// Arithmetic mean of the collected indicators, NaN-free for empty input.
pub fn mean(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_top1_scores_argmax() {
        let prediction = array![[0.1f32, 0.9, 0.0], [0.8, 0.1, 0.1]];
        let evaluator = Top1Evaluator;

        let indicators = evaluator.score(&prediction, &[1, 2]).unwrap();
        assert_eq!(indicators, vec![1.0, 0.0]);
    }

    #[test]
    fn test_top1_rejects_label_mismatch() {
        let prediction = array![[0.1f32, 0.9]];
        let evaluator = Top1Evaluator;
        assert!(evaluator.score(&prediction, &[0, 1]).is_err());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 0.0, 1.0, 0.0]), 0.5);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 1.0]), 1.0);
    }
}
