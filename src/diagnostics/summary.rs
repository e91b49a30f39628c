//! Class-level summary statistics.

use super::item::ItemStatistics;
use crate::response::ResponseMatrix;
use crate::stats::sample_std;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Summary statistics for an entire cohort.
///
/// Score fields are over the derived total-score column; all are 0.0 for
/// an empty cohort (degenerate, not an error). `std_score` is the sample
/// standard deviation (n − 1), 0.0 for fewer than two students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Number of students analyzed.
    pub num_students: usize,
    /// Number of questions in the assessment.
    pub num_questions: usize,
    /// Mean total score.
    pub avg_score: f32,
    /// Sample standard deviation of total scores.
    pub std_score: f32,
    /// Lowest total score.
    pub min_score: f32,
    /// Highest total score.
    pub max_score: f32,
    /// Up to 5 questions with class p-value below 0.5, hardest first.
    pub hardest_questions: Vec<String>,
    /// Up to 5 questions with the highest p-values, easiest first.
    pub easiest_questions: Vec<String>,
}

/// Questions where class performance falls below `threshold`, hardest
/// (lowest p-value) first. Ties keep question-ID order.
#[must_use]
pub fn weak_items(
    item_stats: &BTreeMap<String, ItemStatistics>,
    threshold: f32,
) -> Vec<String> {
    let mut items: Vec<&ItemStatistics> = item_stats
        .values()
        .filter(|stat| stat.p_value < threshold)
        .collect();
    items.sort_by(|a, b| {
        a.p_value
            .partial_cmp(&b.p_value)
            .unwrap_or(Ordering::Equal)
    });
    items.into_iter().map(|s| s.question_id.clone()).collect()
}

/// Builds the class summary from the response matrix and item statistics.
#[must_use]
pub fn class_summary(
    matrix: &ResponseMatrix,
    item_stats: &BTreeMap<String, ItemStatistics>,
) -> ClassSummary {
    let totals = matrix.totals();

    let hardest_questions: Vec<String> =
        weak_items(item_stats, 0.5).into_iter().take(5).collect();

    let mut by_p_desc: Vec<&ItemStatistics> = item_stats.values().collect();
    by_p_desc.sort_by(|a, b| {
        b.p_value
            .partial_cmp(&a.p_value)
            .unwrap_or(Ordering::Equal)
    });
    let easiest_questions: Vec<String> = by_p_desc
        .into_iter()
        .take(5)
        .map(|s| s.question_id.clone())
        .collect();

    ClassSummary {
        num_students: matrix.n_students(),
        num_questions: matrix.n_questions(),
        avg_score: totals.mean(),
        std_score: sample_std(totals),
        min_score: totals.min(),
        max_score: totals.max(),
        hardest_questions,
        easiest_questions,
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
