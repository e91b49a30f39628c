//! Dense response matrix construction.
//!
//! Densifies a [`ClassDataset`](crate::dataset::ClassDataset) into a
//! row-major 0/1 matrix (rows = students in dataset order, columns =
//! questions in canonical order) plus a derived total-score vector of row
//! sums. Two lookup tables map identifiers to indices for O(1) access.
//! Questions absent from a student's response map densify to 0.

use crate::dataset::ClassDataset;
use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dense student × question score table with derived totals.
///
/// Built once per analysis run and never mutated afterwards; the item
/// statistics and profiling stages only read it.
///
/// # Examples
///
/// ```
/// use evaluar::dataset::{ClassDataset, StudentRecord};
/// use evaluar::response::ResponseMatrix;
/// use std::collections::BTreeMap;
///
/// let responses: BTreeMap<String, u8> =
///     [("q1", 1), ("q2", 0)].iter().map(|(q, s)| (q.to_string(), *s)).collect();
/// let student = StudentRecord::new("S001", responses).expect("binary responses");
/// let dataset = ClassDataset::new(
///     vec!["q1".to_string(), "q2".to_string()],
///     vec![student],
/// ).expect("consistent dataset");
///
/// let matrix = ResponseMatrix::build(&dataset);
/// assert_eq!(matrix.n_students(), 1);
/// assert_eq!(matrix.total(0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMatrix {
    scores: Matrix<f32>,
    totals: Vector<f32>,
    student_ids: Vec<String>,
    question_ids: Vec<String>,
    student_index: HashMap<String, usize>,
    question_index: HashMap<String, usize>,
}

impl ResponseMatrix {
    /// Builds the dense matrix from a validated dataset.
    ///
    /// Zero students yields a zero-row matrix; zero questions yields a
    /// matrix whose totals are 0 for every student. Neither is an error.
    #[must_use]
    pub fn build(dataset: &ClassDataset) -> Self {
        let n_students = dataset.num_students();
        let n_questions = dataset.num_questions();

        let question_ids: Vec<String> = dataset.questions().to_vec();
        let question_index: HashMap<String, usize> = question_ids
            .iter()
            .enumerate()
            .map(|(j, q)| (q.clone(), j))
            .collect();

        let mut student_ids = Vec::with_capacity(n_students);
        let mut scores = Matrix::zeros(n_students, n_questions);

        for (i, student) in dataset.students().iter().enumerate() {
            student_ids.push(student.student_id().to_string());
            for (j, question_id) in question_ids.iter().enumerate() {
                // Absent responses stay 0 (treated as "not correct").
                if let Some(score) = student.response(question_id) {
                    scores.set(i, j, f32::from(score));
                }
            }
        }

        let student_index: HashMap<String, usize> = student_ids
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();

        let totals = scores.row_sums();

        Self {
            scores,
            totals,
            student_ids,
            question_ids,
            student_index,
            question_index,
        }
    }

    /// Number of student rows.
    #[must_use]
    pub fn n_students(&self) -> usize {
        self.scores.n_rows()
    }

    /// Number of question columns (excluding the derived totals).
    #[must_use]
    pub fn n_questions(&self) -> usize {
        self.scores.n_cols()
    }

    /// Score at (student row, question column).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn score(&self, row: usize, col: usize) -> f32 {
        self.scores.get(row, col)
    }

    /// Row index for a student ID.
    #[must_use]
    pub fn student_row(&self, student_id: &str) -> Option<usize> {
        self.student_index.get(student_id).copied()
    }

    /// Column index for a question ID.
    #[must_use]
    pub fn question_column(&self, question_id: &str) -> Option<usize> {
        self.question_index.get(question_id).copied()
    }

    /// One question's scores across all students.
    #[must_use]
    pub fn question_scores(&self, col: usize) -> Vector<f32> {
        self.scores.column(col)
    }

    /// One student's scores across all questions.
    #[must_use]
    pub fn student_scores(&self, row: usize) -> Vector<f32> {
        self.scores.row(row)
    }

    /// Derived total score (row sum) for one student row.
    ///
    /// # Panics
    ///
    /// Panics if the row is out of bounds.
    #[must_use]
    pub fn total(&self, row: usize) -> f32 {
        self.totals[row]
    }

    /// Derived total scores for all students, in row order.
    #[must_use]
    pub fn totals(&self) -> &Vector<f32> {
        &self.totals
    }

    /// Class mean of the total scores (0.0 for an empty cohort).
    #[must_use]
    pub fn class_mean_total(&self) -> f32 {
        self.totals.mean()
    }

    /// Student IDs in row order.
    #[must_use]
    pub fn student_ids(&self) -> &[String] {
        &self.student_ids
    }

    /// Question IDs in column order.
    #[must_use]
    pub fn question_ids(&self) -> &[String] {
        &self.question_ids
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
