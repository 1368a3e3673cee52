//! Evaluation metrics over (score, label) pairs
//!
//! Offline evaluation collaborator: consumes the ordered (score, label)
//! sequence a trained model produces. Never used inside the training loop.

/// Binary classification metrics from raw decision scores
///
/// Scores are thresholded at zero; labels are treated as positive when
/// strictly greater than zero, so both {0, 1} and {-1, +1} conventions work.
#[derive(Debug, Clone)]
pub struct BinaryMetrics {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    scores: Vec<(f64, f64)>,
}

impl BinaryMetrics {
    /// Compute metrics from (score, label) pairs
    pub fn from_scores(pairs: &[(f64, f64)]) -> Self {
        let mut tp = 0;
        let mut tn = 0;
        let mut fp = 0;
        let mut fn_ = 0;

        for &(score, label) in pairs {
            match (score > 0.0, label > 0.0) {
                (true, true) => tp += 1,
                (false, false) => tn += 1,
                (true, false) => fp += 1,
                (false, true) => fn_ += 1,
            }
        }

        Self {
            true_positives: tp,
            true_negatives: tn,
            false_positives: fp,
            false_negatives: fn_,
            scores: pairs.to_vec(),
        }
    }

    /// Calculate accuracy: (TP + TN) / total
    pub fn accuracy(&self) -> f64 {
        let total =
            self.true_positives + self.true_negatives + self.false_positives + self.false_negatives;
        if total == 0 {
            0.0
        } else {
            (self.true_positives + self.true_negatives) as f64 / total as f64
        }
    }

    /// Calculate precision: TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        let denominator = self.true_positives + self.false_positives;
        if denominator == 0 {
            0.0
        } else {
            self.true_positives as f64 / denominator as f64
        }
    }

    /// Calculate recall (sensitivity): TP / (TP + FN)
    pub fn recall(&self) -> f64 {
        let denominator = self.true_positives + self.false_negatives;
        if denominator == 0 {
            0.0
        } else {
            self.true_positives as f64 / denominator as f64
        }
    }

    /// Calculate F1 score: 2 * (precision * recall) / (precision + recall)
    pub fn f1_score(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * (p * r) / (p + r)
        }
    }

    /// Calculate specificity: TN / (TN + FP)
    pub fn specificity(&self) -> f64 {
        let denominator = self.true_negatives + self.false_positives;
        if denominator == 0 {
            0.0
        } else {
            self.true_negatives as f64 / denominator as f64
        }
    }

    /// Area under the ROC curve via the rank statistic
    ///
    /// Tied scores receive averaged ranks. Returns `None` when either class
    /// is absent, since the curve is undefined there.
    pub fn roc_auc(&self) -> Option<f64> {
        let n_pos = self.scores.iter().filter(|&&(_, l)| l > 0.0).count();
        let n_neg = self.scores.len() - n_pos;
        if n_pos == 0 || n_neg == 0 {
            return None;
        }

        let mut indexed: Vec<(f64, f64)> = self.scores.clone();
        indexed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        // Average ranks over runs of tied scores
        let mut rank_sum_pos = 0.0;
        let mut i = 0;
        while i < indexed.len() {
            let mut j = i;
            while j < indexed.len() && indexed[j].0 == indexed[i].0 {
                j += 1;
            }
            let avg_rank = (i + 1 + j) as f64 / 2.0;
            for entry in &indexed[i..j] {
                if entry.1 > 0.0 {
                    rank_sum_pos += avg_rank;
                }
            }
            i = j;
        }

        let n_pos_f = n_pos as f64;
        let auc = (rank_sum_pos - n_pos_f * (n_pos_f + 1.0) / 2.0) / (n_pos_f * n_neg as f64);
        Some(auc)
    }
}

/// Regression metrics from (prediction, target) pairs
#[derive(Debug, Clone)]
pub struct RegressionMetrics {
    pub mean_squared_error: f64,
    pub mean_absolute_error: f64,
    pub r_squared: f64,
}

impl RegressionMetrics {
    /// Compute metrics from (prediction, target) pairs
    ///
    /// Returns `None` on an empty input. R² is 0.0 when the targets have no
    /// variance.
    pub fn from_scores(pairs: &[(f64, f64)]) -> Option<Self> {
        if pairs.is_empty() {
            return None;
        }

        let n = pairs.len() as f64;
        let mse = pairs.iter().map(|(p, t)| (t - p).powi(2)).sum::<f64>() / n;
        let mae = pairs.iter().map(|(p, t)| (t - p).abs()).sum::<f64>() / n;

        let mean_target = pairs.iter().map(|(_, t)| t).sum::<f64>() / n;
        let total_variance = pairs
            .iter()
            .map(|(_, t)| (t - mean_target).powi(2))
            .sum::<f64>();
        let r_squared = if total_variance == 0.0 {
            0.0
        } else {
            1.0 - mse * n / total_variance
        };

        Some(Self {
            mean_squared_error: mse,
            mean_absolute_error: mae,
            r_squared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confusion_counts() {
        let pairs = [
            (1.0, 1.0),   // TP
            (-1.0, -1.0), // TN
            (1.0, -1.0),  // FP
            (-1.0, 1.0),  // FN
            (0.5, 1.0),   // TP
        ];
        let metrics = BinaryMetrics::from_scores(&pairs);

        assert_eq!(metrics.true_positives, 2);
        assert_eq!(metrics.true_negatives, 1);
        assert_eq!(metrics.false_positives, 1);
        assert_eq!(metrics.false_negatives, 1);
        assert_relative_eq!(metrics.accuracy(), 0.6);
    }

    #[test]
    fn test_derived_rates() {
        let metrics = BinaryMetrics::from_scores(&[
            (1.0, 1.0),
            (1.0, 1.0),
            (1.0, -1.0),
            (-1.0, -1.0),
            (-1.0, 1.0),
        ]);

        assert_relative_eq!(metrics.precision(), 2.0 / 3.0);
        assert_relative_eq!(metrics.recall(), 2.0 / 3.0);
        assert_relative_eq!(metrics.f1_score(), 2.0 / 3.0);
        assert_relative_eq!(metrics.specificity(), 0.5);
    }

    #[test]
    fn test_zero_label_counts_as_negative() {
        let metrics = BinaryMetrics::from_scores(&[(-1.0, 0.0)]);
        assert_eq!(metrics.true_negatives, 1);
    }

    #[test]
    fn test_empty_metrics_are_zero() {
        let metrics = BinaryMetrics::from_scores(&[]);
        assert_eq!(metrics.accuracy(), 0.0);
        assert_eq!(metrics.precision(), 0.0);
        assert!(metrics.roc_auc().is_none());
    }

    #[test]
    fn test_perfect_separation_auc() {
        let metrics = BinaryMetrics::from_scores(&[
            (2.0, 1.0),
            (1.0, 1.0),
            (-1.0, -1.0),
            (-2.0, -1.0),
        ]);
        assert_relative_eq!(metrics.roc_auc().unwrap(), 1.0);
    }

    #[test]
    fn test_inverted_scores_auc() {
        let metrics = BinaryMetrics::from_scores(&[(-1.0, 1.0), (1.0, -1.0)]);
        assert_relative_eq!(metrics.roc_auc().unwrap(), 0.0);
    }

    #[test]
    fn test_tied_scores_auc() {
        // All scores equal: AUC must be exactly 0.5 with averaged ranks
        let metrics =
            BinaryMetrics::from_scores(&[(0.5, 1.0), (0.5, -1.0), (0.5, 1.0), (0.5, -1.0)]);
        assert_relative_eq!(metrics.roc_auc().unwrap(), 0.5);
    }

    #[test]
    fn test_single_class_auc_is_none() {
        let metrics = BinaryMetrics::from_scores(&[(1.0, 1.0), (2.0, 1.0)]);
        assert!(metrics.roc_auc().is_none());
    }

    #[test]
    fn test_regression_metrics_exact_fit() {
        let metrics =
            RegressionMetrics::from_scores(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
        assert_eq!(metrics.mean_squared_error, 0.0);
        assert_eq!(metrics.mean_absolute_error, 0.0);
        assert_relative_eq!(metrics.r_squared, 1.0);
    }

    #[test]
    fn test_regression_metrics_known_errors() {
        let metrics = RegressionMetrics::from_scores(&[(1.0, 2.0), (3.0, 2.0)]).unwrap();
        assert_relative_eq!(metrics.mean_squared_error, 1.0);
        assert_relative_eq!(metrics.mean_absolute_error, 1.0);
        // Targets have zero variance
        assert_eq!(metrics.r_squared, 0.0);
    }

    #[test]
    fn test_regression_metrics_empty_input() {
        assert!(RegressionMetrics::from_scores(&[]).is_none());
    }
}
