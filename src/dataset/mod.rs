//! Validated assessment datasets.
//!
//! The diagnostic pipeline assumes fully validated inputs: binary response
//! values, unique non-empty student identifiers, response keys drawn from
//! the canonical question list. All of that is enforced once, here, at
//! construction time. Downstream stages never re-check.

pub mod synthetic;

use crate::error::{EvaluarError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One student's raw scores for a single assessment.
///
/// Response values are validated to be 0 or 1 at construction; the record
/// is immutable afterwards. Questions a student did not attempt are simply
/// absent from the response map.
///
/// # Examples
///
/// ```
/// use evaluar::dataset::StudentRecord;
/// use std::collections::BTreeMap;
///
/// let mut responses = BTreeMap::new();
/// responses.insert("q1".to_string(), 1);
/// responses.insert("q2".to_string(), 0);
///
/// let record = StudentRecord::new("S001", responses).expect("binary responses");
/// assert_eq!(record.num_correct(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    student_id: String,
    responses: BTreeMap<String, u8>,
    mcq_total: f32,
    assignment_total: f32,
    participation_avg: f32,
}

impl StudentRecord {
    /// Creates a validated student record.
    ///
    /// The MCQ total is derived from the responses; auxiliary scores
    /// default to 0 and can be attached with the `with_*` builders.
    ///
    /// # Errors
    ///
    /// Returns an error if the student ID is empty or any response value
    /// is outside {0, 1}.
    pub fn new(student_id: &str, responses: BTreeMap<String, u8>) -> Result<Self> {
        if student_id.is_empty() {
            return Err(EvaluarError::EmptyStudentId);
        }
        for (question_id, &value) in &responses {
            if value > 1 {
                return Err(EvaluarError::NonBinaryResponse {
                    student_id: student_id.to_string(),
                    question_id: question_id.clone(),
                    value,
                });
            }
        }
        let mcq_total = responses.values().map(|&v| f32::from(v)).sum();
        Ok(Self {
            student_id: student_id.to_string(),
            responses,
            mcq_total,
            assignment_total: 0.0,
            participation_avg: 0.0,
        })
    }

    /// Attaches an assignment total (carried, unused by the diagnostics).
    #[must_use]
    pub fn with_assignment_total(mut self, total: f32) -> Self {
        self.assignment_total = total;
        self
    }

    /// Attaches a participation average (carried, unused by the diagnostics).
    #[must_use]
    pub fn with_participation_avg(mut self, avg: f32) -> Self {
        self.participation_avg = avg;
        self
    }

    /// The student's unique identifier.
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// The validated question → score map (values are 0 or 1).
    #[must_use]
    pub fn responses(&self) -> &BTreeMap<String, u8> {
        &self.responses
    }

    /// Score for one question, if attempted.
    #[must_use]
    pub fn response(&self, question_id: &str) -> Option<u8> {
        self.responses.get(question_id).copied()
    }

    /// Number of questions answered correctly.
    #[must_use]
    pub fn num_correct(&self) -> usize {
        self.responses.values().filter(|&&v| v == 1).count()
    }

    /// Total MCQ score (sum of the response values).
    #[must_use]
    pub fn mcq_total(&self) -> f32 {
        self.mcq_total
    }

    /// Assignment total carried from ingestion.
    #[must_use]
    pub fn assignment_total(&self) -> f32 {
        self.assignment_total
    }

    /// Participation average carried from ingestion.
    #[must_use]
    pub fn participation_avg(&self) -> f32 {
        self.participation_avg
    }
}

/// A whole cohort's records plus the canonical ordered question list.
///
/// Construction validates the cross-record invariants: student IDs are
/// unique, question IDs are unique, and every response key appears in the
/// question list. Once built the dataset is read-only; the diagnostic
/// pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDataset {
    questions: Vec<String>,
    students: Vec<StudentRecord>,
}

impl ClassDataset {
    /// Creates a validated dataset.
    ///
    /// Student order is preserved and defines response-matrix row order;
    /// question order defines column order.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate student or question IDs, or on a
    /// response key that is not in `questions`.
    pub fn new(questions: Vec<String>, students: Vec<StudentRecord>) -> Result<Self> {
        let mut seen_questions = BTreeSet::new();
        for question_id in &questions {
            if !seen_questions.insert(question_id.as_str()) {
                return Err(EvaluarError::DuplicateQuestion {
                    question_id: question_id.clone(),
                });
            }
        }

        let mut seen_students = BTreeSet::new();
        for student in &students {
            if !seen_students.insert(student.student_id()) {
                return Err(EvaluarError::DuplicateStudent {
                    student_id: student.student_id().to_string(),
                });
            }
            for question_id in student.responses().keys() {
                if !seen_questions.contains(question_id.as_str()) {
                    return Err(EvaluarError::UnknownQuestion {
                        student_id: student.student_id().to_string(),
                        question_id: question_id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            questions,
            students,
        })
    }

    /// The canonical ordered question list.
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// All student records in insertion order.
    #[must_use]
    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Looks up a student record by ID.
    #[must_use]
    pub fn student(&self, student_id: &str) -> Option<&StudentRecord> {
        self.students
            .iter()
            .find(|s| s.student_id() == student_id)
    }

    /// Number of students in the cohort.
    #[must_use]
    pub fn num_students(&self) -> usize {
        self.students.len()
    }

    /// Number of questions in the assessment.
    #[must_use]
    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
