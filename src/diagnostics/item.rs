//! Per-question difficulty and discrimination statistics.

use crate::primitives::Vector;
use crate::response::ResponseMatrix;
use crate::stats::point_biserial;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Difficulty band derived from a question's p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// p-value > 0.7
    Easy,
    /// 0.3 <= p-value <= 0.7
    Medium,
    /// p-value < 0.3
    Hard,
}

impl Difficulty {
    /// All bands in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Band name as used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality band derived from a question's discrimination index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscriminationQuality {
    /// discrimination > 0.4
    Excellent,
    /// 0.3 < discrimination <= 0.4
    Good,
    /// 0.2 < discrimination <= 0.3
    Fair,
    /// discrimination <= 0.2
    Poor,
}

impl DiscriminationQuality {
    /// Band name as used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DiscriminationQuality::Excellent => "Excellent",
            DiscriminationQuality::Good => "Good",
            DiscriminationQuality::Fair => "Fair",
            DiscriminationQuality::Poor => "Poor",
        }
    }
}

impl fmt::Display for DiscriminationQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics for a single MCQ question.
///
/// `p_value` is the classical difficulty index (proportion correct, not a
/// significance level); `discrimination` is the point-biserial correlation
/// against the rest-of-test score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStatistics {
    /// Question identifier.
    pub question_id: String,
    /// Difficulty index in [0, 1]; lower is harder. 0.0 when unattempted.
    pub p_value: f32,
    /// Point-biserial correlation with the adjusted total; 0.0 when the
    /// question column has no variance.
    pub discrimination: f32,
    /// Number of correct responses.
    pub num_correct: usize,
    /// Number of scored responses (matrix rows).
    pub num_attempts: usize,
}

impl ItemStatistics {
    /// Difficulty band: Easy (p > 0.7), Hard (p < 0.3), else Medium.
    #[must_use]
    pub fn difficulty_level(&self) -> Difficulty {
        if self.p_value > 0.7 {
            Difficulty::Easy
        } else if self.p_value < 0.3 {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        }
    }

    /// Discrimination band: Excellent (> 0.4), Good (> 0.3), Fair (> 0.2),
    /// else Poor.
    #[must_use]
    pub fn discrimination_quality(&self) -> DiscriminationQuality {
        if self.discrimination > 0.4 {
            DiscriminationQuality::Excellent
        } else if self.discrimination > 0.3 {
            DiscriminationQuality::Good
        } else if self.discrimination > 0.2 {
            DiscriminationQuality::Fair
        } else {
            DiscriminationQuality::Poor
        }
    }
}

fn item_statistic(matrix: &ResponseMatrix, col: usize) -> ItemStatistics {
    let scores = matrix.question_scores(col);
    let num_attempts = scores.len();
    let num_correct = scores.sum() as usize;

    let p_value = if num_attempts == 0 {
        0.0
    } else {
        num_correct as f32 / num_attempts as f32
    };

    // Subtract the question's own contribution from each total so the
    // correlation is against the rest of the test (no part-whole inflation).
    let adjusted: Vec<f32> = matrix
        .totals()
        .iter()
        .zip(scores.iter())
        .map(|(&total, &score)| total - score)
        .collect();
    let discrimination = point_biserial(&scores, &Vector::from_vec(adjusted));

    ItemStatistics {
        question_id: matrix.question_ids()[col].clone(),
        p_value,
        discrimination,
        num_correct,
        num_attempts,
    }
}

/// Computes [`ItemStatistics`] for every question column.
///
/// Pure computation over the already-validated matrix; degenerate columns
/// (unattempted, zero variance) get the defined fallbacks (p-value 0.0,
/// discrimination 0.0) rather than errors.
#[must_use]
pub fn item_statistics(matrix: &ResponseMatrix) -> BTreeMap<String, ItemStatistics> {
    log::debug!("Computing item statistics for {} questions", matrix.n_questions());

    #[cfg(feature = "parallel")]
    {
        (0..matrix.n_questions())
            .into_par_iter()
            .map(|col| {
                let stat = item_statistic(matrix, col);
                (stat.question_id.clone(), stat)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..matrix.n_questions())
            .map(|col| {
                let stat = item_statistic(matrix, col);
                (stat.question_id.clone(), stat)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
