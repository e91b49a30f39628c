//! Weakness diagnostics over binary assessment responses.
//!
//! Three cooperating stages with a strict ordering dependency:
//!
//! 1. [`ResponseMatrix`](crate::response::ResponseMatrix) densifies the
//!    dataset (rows = students, columns = questions, plus row totals).
//! 2. [`item_statistics`] computes per-question difficulty and
//!    discrimination.
//! 3. [`student_profiles`] derives per-student weakness profiles, which
//!    read the class-wide item statistics.
//!
//! [`analyze`] runs all three and returns an immutable [`Analysis`]; there
//! is no incrementally populated analyzer state to get out of order.
//!
//! With the `parallel` feature, the per-question and per-student maps run
//! on rayon; the two-phase barrier (all item statistics before any
//! profile) is preserved and results are identical to the sequential path.

mod item;
mod profile;
mod summary;

pub use item::{item_statistics, Difficulty, DiscriminationQuality, ItemStatistics};
pub use profile::{student_profiles, StudentWeaknessProfile};
pub use summary::{class_summary, weak_items, ClassSummary};

use crate::dataset::ClassDataset;
use crate::response::ResponseMatrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete result of one analysis run.
///
/// Keyed collections use `BTreeMap` so iteration order (and any serialized
/// form) is deterministic: re-running [`analyze`] on an unchanged dataset
/// yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Per-question statistics, keyed by question ID.
    pub item_stats: BTreeMap<String, ItemStatistics>,
    /// Per-student weakness profiles, keyed by student ID.
    pub student_profiles: BTreeMap<String, StudentWeaknessProfile>,
    /// Class-level summary.
    pub summary: ClassSummary,
}

/// Runs the full diagnostic pipeline on a validated dataset.
///
/// Pure batch computation: no I/O, no retained state. Degenerate inputs
/// (no students, no questions, zero-variance columns) produce defined
/// fallback values rather than errors; see the stage functions for the
/// exact contracts.
///
/// # Examples
///
/// ```
/// use evaluar::dataset::synthetic::sample_dataset;
/// use evaluar::diagnostics::analyze;
///
/// let dataset = sample_dataset(20, 8, Some(3)).expect("generated data is valid");
/// let analysis = analyze(&dataset);
/// assert_eq!(analysis.item_stats.len(), 8);
/// assert_eq!(analysis.student_profiles.len(), 20);
/// ```
#[must_use]
pub fn analyze(dataset: &ClassDataset) -> Analysis {
    log::info!(
        "Starting weakness analysis: {} students, {} questions",
        dataset.num_students(),
        dataset.num_questions()
    );

    let matrix = ResponseMatrix::build(dataset);
    let item_stats = item_statistics(&matrix);
    let student_profiles = student_profiles(&matrix, dataset, &item_stats);
    let summary = class_summary(&matrix, &item_stats);

    log::info!(
        "Analysis complete for {} students",
        student_profiles.len()
    );

    Analysis {
        item_stats,
        student_profiles,
        summary,
    }
}

#[cfg(test)]
#[path = "tests_diagnostics_contract.rs"]
mod contract_tests;
