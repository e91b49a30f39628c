//! Synthetic cohort generation for demos and tests.
//!
//! Produces datasets with per-question difficulty so item statistics come
//! out non-degenerate: easy questions are answered correctly by most of
//! the cohort, hard ones by few.

use super::{ClassDataset, StudentRecord};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Generates a random cohort of binary MCQ responses.
///
/// Question IDs are `q1..qN`, student IDs `S001..`. Each question draws a
/// difficulty in [0.15, 0.95] and each student answers it correctly with
/// that probability. Pass a seed for reproducible datasets.
///
/// # Errors
///
/// Construction errors cannot occur for generated values; the `Result`
/// only propagates the dataset validation it shares with real ingestion.
///
/// # Examples
///
/// ```
/// use evaluar::dataset::synthetic::sample_dataset;
///
/// let dataset = sample_dataset(10, 5, Some(42)).expect("generated data is valid");
/// assert_eq!(dataset.num_students(), 10);
/// assert_eq!(dataset.num_questions(), 5);
/// ```
pub fn sample_dataset(
    n_students: usize,
    n_questions: usize,
    seed: Option<u64>,
) -> Result<ClassDataset> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let questions: Vec<String> = (1..=n_questions).map(|j| format!("q{j}")).collect();
    let difficulties: Vec<f64> = (0..n_questions)
        .map(|_| rng.gen_range(0.15_f64..0.95_f64))
        .collect();

    let mut students = Vec::with_capacity(n_students);
    for i in 1..=n_students {
        let mut responses = BTreeMap::new();
        for (question_id, &p_correct) in questions.iter().zip(difficulties.iter()) {
            let score = u8::from(rng.gen_bool(p_correct));
            responses.insert(question_id.clone(), score);
        }
        let student = StudentRecord::new(&format!("S{i:03}"), responses)?
            .with_assignment_total(rng.gen_range(60.0_f32..100.0))
            .with_participation_avg(rng.gen_range(1.0_f32..5.0));
        students.push(student);
    }

    ClassDataset::new(questions, students)
}

#[cfg(test)]
#[path = "synthetic_tests.rs"]
mod tests;
