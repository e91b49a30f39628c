// =========================================================================
// FALSIFY-DG: diagnostic pipeline contract (evaluar diagnostics)
//
// References:
//   - Crocker & Algina (1986), classical item analysis (p-value bounds,
//     discrimination as point-biserial against rest-of-test score)
// =========================================================================

use super::*;
use crate::dataset::synthetic::sample_dataset;

/// FALSIFY-DG-001: p-values bounded in [0, 1] and consistent with counts
#[test]
fn falsify_dg_001_p_value_bounds() {
    let dataset = sample_dataset(25, 10, Some(101)).expect("generated data is valid");
    let analysis = analyze(&dataset);

    for stat in analysis.item_stats.values() {
        assert!(
            (0.0..=1.0).contains(&stat.p_value),
            "FALSIFIED DG-001: p_value={} out of [0, 1]",
            stat.p_value
        );
        assert!(
            stat.num_correct <= stat.num_attempts,
            "FALSIFIED DG-001: correct={} > attempts={}",
            stat.num_correct,
            stat.num_attempts
        );
        if stat.num_attempts > 0 {
            let expected = stat.num_correct as f32 / stat.num_attempts as f32;
            assert!(
                (stat.p_value - expected).abs() < 1e-6,
                "FALSIFIED DG-001: p_value={} != correct/attempts={}",
                stat.p_value,
                expected
            );
        }
    }
}

/// FALSIFY-DG-002: overall percentage bounded in [0, 100] and equal to
/// (row total / question count) * 100
#[test]
fn falsify_dg_002_overall_percentage() {
    let dataset = sample_dataset(25, 10, Some(102)).expect("generated data is valid");
    let analysis = analyze(&dataset);

    for (student_id, profile) in &analysis.student_profiles {
        assert!(
            (0.0..=100.0).contains(&profile.overall_mcq_percentage),
            "FALSIFIED DG-002: {student_id} overall={} out of [0, 100]",
            profile.overall_mcq_percentage
        );

        let record = dataset.student(student_id).expect("profiled student exists");
        let expected = record.num_correct() as f32 / dataset.num_questions() as f32 * 100.0;
        assert!(
            (profile.overall_mcq_percentage - expected).abs() < 1e-4,
            "FALSIFIED DG-002: {student_id} overall={}, expected {expected}",
            profile.overall_mcq_percentage
        );
    }
}

/// FALSIFY-DG-003: weak_questions ordered by non-increasing class p-value
#[test]
fn falsify_dg_003_weak_question_ordering() {
    let dataset = sample_dataset(30, 12, Some(103)).expect("generated data is valid");
    let analysis = analyze(&dataset);

    for (student_id, profile) in &analysis.student_profiles {
        let p_values: Vec<f32> = profile
            .weak_questions
            .iter()
            .map(|q| analysis.item_stats[q].p_value)
            .collect();
        for pair in p_values.windows(2) {
            assert!(
                pair[0] >= pair[1],
                "FALSIFIED DG-003: {student_id} weak questions out of order: {p_values:?}"
            );
        }
    }
}

/// FALSIFY-DG-004: re-running the pipeline is bit-identical
#[test]
fn falsify_dg_004_idempotent() {
    let dataset = sample_dataset(15, 8, Some(104)).expect("generated data is valid");

    let first = analyze(&dataset);
    let second = analyze(&dataset);

    assert_eq!(
        first, second,
        "FALSIFIED DG-004: repeated analysis of an unchanged dataset diverged"
    );
}

/// FALSIFY-DG-005: focus areas are missed questions with class p > 0.5,
/// at most 5, never padded
#[test]
fn falsify_dg_005_focus_areas() {
    let dataset = sample_dataset(30, 12, Some(105)).expect("generated data is valid");
    let analysis = analyze(&dataset);

    for (student_id, profile) in &analysis.student_profiles {
        assert!(
            profile.suggested_focus_areas.len() <= 5,
            "FALSIFIED DG-005: {student_id} has more than 5 focus areas"
        );
        for question_id in &profile.suggested_focus_areas {
            assert!(
                analysis.item_stats[question_id].p_value > 0.5,
                "FALSIFIED DG-005: {student_id} focus area {question_id} has p <= 0.5"
            );
            assert!(
                profile.weak_questions.contains(question_id),
                "FALSIFIED DG-005: {student_id} focus area {question_id} was not missed"
            );
        }
    }
}

/// FALSIFY-DG-006: discrimination is exactly 0.0 for zero-variance columns
#[test]
fn falsify_dg_006_zero_variance_columns() {
    // q1 all correct, q2 all wrong: both zero variance.
    let questions: Vec<String> = ["q1", "q2"].iter().map(|q| q.to_string()).collect();
    let students: Vec<_> = (1..=4)
        .map(|i| {
            let responses = [("q1".to_string(), 1), ("q2".to_string(), 0)]
                .into_iter()
                .collect();
            crate::dataset::StudentRecord::new(&format!("S{i:03}"), responses)
                .expect("binary responses")
        })
        .collect();
    let dataset = ClassDataset::new(questions, students).expect("consistent dataset");

    let analysis = analyze(&dataset);
    for stat in analysis.item_stats.values() {
        assert_eq!(
            stat.discrimination, 0.0,
            "FALSIFIED DG-006: zero-variance column {} has discrimination {}",
            stat.question_id, stat.discrimination
        );
        assert_eq!(stat.discrimination_quality(), DiscriminationQuality::Poor);
    }
}
