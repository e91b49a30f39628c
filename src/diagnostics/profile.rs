//! Per-student weakness profiling.

use super::item::{Difficulty, ItemStatistics};
use crate::dataset::{ClassDataset, StudentRecord};
use crate::response::ResponseMatrix;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Individual student's weakness analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentWeaknessProfile {
    /// Student identifier.
    pub student_id: String,
    /// Missed questions (answered 0 or not attempted), ordered by how easy
    /// each was for the class (descending p-value).
    pub weak_questions: Vec<String>,
    /// Percent correct within each difficulty band, over attempted
    /// questions; 0.0 for a band with no attempted questions.
    pub performance_by_difficulty: BTreeMap<Difficulty, f32>,
    /// Percent correct over the entire question list, in [0, 100].
    pub overall_mcq_percentage: f32,
    /// Student total relative to the class mean total; 1.0 (neutral) when
    /// the class mean is 0.
    pub relative_performance: f32,
    /// Up to 5 missed questions the class mostly got right (p > 0.5) —
    /// the highest-value remediation targets.
    pub suggested_focus_areas: Vec<String>,
}

impl StudentWeaknessProfile {
    /// First `n` weak questions, in remediation-priority order.
    #[must_use]
    pub fn priority_questions(&self, n: usize) -> &[String] {
        &self.weak_questions[..self.weak_questions.len().min(n)]
    }
}

fn class_p_value(item_stats: &BTreeMap<String, ItemStatistics>, question_id: &str) -> f32 {
    item_stats.get(question_id).map_or(0.0, |s| s.p_value)
}

fn student_profile(
    student: &StudentRecord,
    row: usize,
    matrix: &ResponseMatrix,
    dataset: &ClassDataset,
    item_stats: &BTreeMap<String, ItemStatistics>,
    class_mean_total: f32,
) -> StudentWeaknessProfile {
    let total = matrix.total(row);

    // Missed = scored 0 or skipped entirely; both count as "not correct".
    let mut weak_questions: Vec<String> = dataset
        .questions()
        .iter()
        .filter(|q| student.response(q).unwrap_or(0) == 0)
        .cloned()
        .collect();

    // Easiest-for-class first; stable sort keeps canonical order on ties.
    weak_questions.sort_by(|a, b| {
        class_p_value(item_stats, b)
            .partial_cmp(&class_p_value(item_stats, a))
            .unwrap_or(Ordering::Equal)
    });

    let mut band_sums: BTreeMap<Difficulty, (f32, usize)> = Difficulty::ALL
        .iter()
        .map(|&band| (band, (0.0, 0)))
        .collect();
    for (question_id, &score) in student.responses() {
        if let Some(stat) = item_stats.get(question_id) {
            let entry = band_sums
                .entry(stat.difficulty_level())
                .or_insert((0.0, 0));
            entry.0 += f32::from(score);
            entry.1 += 1;
        }
    }
    let performance_by_difficulty: BTreeMap<Difficulty, f32> = band_sums
        .into_iter()
        .map(|(band, (sum, count))| {
            let pct = if count == 0 {
                0.0
            } else {
                sum / count as f32 * 100.0
            };
            (band, pct)
        })
        .collect();

    let overall_mcq_percentage = if dataset.num_questions() == 0 {
        0.0
    } else {
        total / dataset.num_questions() as f32 * 100.0
    };

    let relative_performance = if class_mean_total > 0.0 {
        total / class_mean_total
    } else {
        1.0
    };

    let suggested_focus_areas: Vec<String> = weak_questions
        .iter()
        .filter(|q| class_p_value(item_stats, q) > 0.5)
        .take(5)
        .cloned()
        .collect();

    StudentWeaknessProfile {
        student_id: student.student_id().to_string(),
        weak_questions,
        performance_by_difficulty,
        overall_mcq_percentage,
        relative_performance,
        suggested_focus_areas,
    }
}

/// Computes a [`StudentWeaknessProfile`] for every student.
///
/// Requires the completed item statistics (profiles read class-wide
/// p-values); this is the second phase of the two-phase pipeline.
#[must_use]
pub fn student_profiles(
    matrix: &ResponseMatrix,
    dataset: &ClassDataset,
    item_stats: &BTreeMap<String, ItemStatistics>,
) -> BTreeMap<String, StudentWeaknessProfile> {
    log::debug!("Profiling {} students", dataset.num_students());

    let class_mean_total = matrix.class_mean_total();

    #[cfg(feature = "parallel")]
    {
        dataset
            .students()
            .par_iter()
            .enumerate()
            .map(|(row, student)| {
                let profile =
                    student_profile(student, row, matrix, dataset, item_stats, class_mean_total);
                (profile.student_id.clone(), profile)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        dataset
            .students()
            .iter()
            .enumerate()
            .map(|(row, student)| {
                let profile =
                    student_profile(student, row, matrix, dataset, item_stats, class_mean_total);
                (profile.student_id.clone(), profile)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
