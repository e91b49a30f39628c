pub(crate) use super::*;
use crate::diagnostics::item_statistics;
use std::collections::BTreeMap as Map;

fn record(id: &str, scores: [u8; 5]) -> StudentRecord {
    let responses = ["q1", "q2", "q3", "q4", "q5"]
        .iter()
        .zip(scores.iter())
        .map(|(q, s)| (q.to_string(), *s))
        .collect();
    StudentRecord::new(id, responses).expect("binary responses")
}

fn fixture() -> ClassDataset {
    let questions = ["q1", "q2", "q3", "q4", "q5"]
        .iter()
        .map(|q| q.to_string())
        .collect();
    let students = vec![
        record("S001", [1, 1, 1, 0, 0]),
        record("S002", [1, 1, 0, 0, 0]),
        record("S003", [1, 0, 0, 0, 0]),
        record("S004", [1, 1, 1, 1, 0]),
        record("S005", [0, 0, 0, 0, 0]),
    ];
    ClassDataset::new(questions, students).expect("consistent dataset")
}

fn profiles_for(
    dataset: &ClassDataset,
) -> Map<String, StudentWeaknessProfile> {
    let matrix = ResponseMatrix::build(dataset);
    let item_stats = item_statistics(&matrix);
    student_profiles(&matrix, dataset, &item_stats)
}

#[test]
fn test_all_students_profiled() {
    let dataset = fixture();
    let profiles = profiles_for(&dataset);
    assert_eq!(profiles.len(), 5);
}

#[test]
fn test_overall_percentage() {
    let dataset = fixture();
    let profiles = profiles_for(&dataset);

    assert!((profiles["S001"].overall_mcq_percentage - 60.0).abs() < 1e-4);
    assert_eq!(profiles["S005"].overall_mcq_percentage, 0.0);
    assert!((profiles["S004"].overall_mcq_percentage - 80.0).abs() < 1e-4);
}

#[test]
fn test_weak_questions_easiest_for_class_first() {
    let dataset = fixture();
    let profiles = profiles_for(&dataset);

    // S001 missed q4 (p=0.2) and q5 (p=0.0).
    assert_eq!(profiles["S001"].weak_questions, vec!["q4", "q5"]);

    // S005 missed everything; class p-values descend q1..q5.
    assert_eq!(
        profiles["S005"].weak_questions,
        vec!["q1", "q2", "q3", "q4", "q5"]
    );
}

#[test]
fn test_suggested_focus_areas_only_above_half() {
    let dataset = fixture();
    let profiles = profiles_for(&dataset);

    // S001's misses were hard for the class too (p <= 0.5): nothing to suggest.
    assert!(profiles["S001"].suggested_focus_areas.is_empty());

    // S005 missed q1 (p=0.8) and q2 (p=0.6), both class-easy.
    assert_eq!(profiles["S005"].suggested_focus_areas, vec!["q1", "q2"]);

    // S003 missed q2..q5; only q2 qualifies.
    assert_eq!(profiles["S003"].suggested_focus_areas, vec!["q2"]);
}

#[test]
fn test_relative_performance() {
    let dataset = fixture();
    let profiles = profiles_for(&dataset);

    // Class mean total is 2.0.
    assert!((profiles["S001"].relative_performance - 1.5).abs() < 1e-5);
    assert!((profiles["S004"].relative_performance - 2.0).abs() < 1e-5);
    assert_eq!(profiles["S005"].relative_performance, 0.0);
}

#[test]
fn test_relative_performance_neutral_for_zero_mean() {
    let questions: Vec<String> = ["q1", "q2"].iter().map(|q| q.to_string()).collect();
    let students = vec![
        record_2("S001", [0, 0]),
        record_2("S002", [0, 0]),
    ];
    let dataset = ClassDataset::new(questions, students).expect("consistent dataset");
    let profiles = profiles_for(&dataset);

    for profile in profiles.values() {
        assert_eq!(profile.relative_performance, 1.0);
    }
}

fn record_2(id: &str, scores: [u8; 2]) -> StudentRecord {
    let responses = ["q1", "q2"]
        .iter()
        .zip(scores.iter())
        .map(|(q, s)| (q.to_string(), *s))
        .collect();
    StudentRecord::new(id, responses).expect("binary responses")
}

#[test]
fn test_performance_by_difficulty() {
    let dataset = fixture();
    let profiles = profiles_for(&dataset);

    // Bands: q1 Easy (0.8); q2, q3 Medium (0.6, 0.4); q4, q5 Hard (0.2, 0.0).
    let s001 = &profiles["S001"];
    assert!((s001.performance_by_difficulty[&Difficulty::Easy] - 100.0).abs() < 1e-4);
    assert!((s001.performance_by_difficulty[&Difficulty::Medium] - 100.0).abs() < 1e-4);
    assert_eq!(s001.performance_by_difficulty[&Difficulty::Hard], 0.0);

    let s002 = &profiles["S002"];
    assert!((s002.performance_by_difficulty[&Difficulty::Medium] - 50.0).abs() < 1e-4);
}

#[test]
fn test_all_bands_present_even_when_empty() {
    let questions: Vec<String> = vec!["q1".to_string()];
    let students = vec![StudentRecord::new(
        "S001",
        [("q1".to_string(), 1)].into_iter().collect(),
    )
    .expect("binary responses")];
    let dataset = ClassDataset::new(questions, students).expect("consistent dataset");
    let profiles = profiles_for(&dataset);

    let profile = &profiles["S001"];
    assert_eq!(profile.performance_by_difficulty.len(), 3);
    assert_eq!(profile.performance_by_difficulty[&Difficulty::Medium], 0.0);
    assert_eq!(profile.performance_by_difficulty[&Difficulty::Hard], 0.0);
}

#[test]
fn test_skipped_question_counts_as_missed() {
    let questions: Vec<String> = ["q1", "q2"].iter().map(|q| q.to_string()).collect();
    // S001 attempted only q1.
    let students = vec![StudentRecord::new(
        "S001",
        [("q1".to_string(), 1)].into_iter().collect(),
    )
    .expect("binary responses")];
    let dataset = ClassDataset::new(questions, students).expect("consistent dataset");
    let profiles = profiles_for(&dataset);

    assert_eq!(profiles["S001"].weak_questions, vec!["q2"]);
}

#[test]
fn test_priority_questions() {
    let dataset = fixture();
    let profiles = profiles_for(&dataset);

    let s005 = &profiles["S005"];
    assert_eq!(s005.priority_questions(3), &["q1", "q2", "q3"]);
    assert_eq!(s005.priority_questions(10).len(), 5);
}

#[test]
fn test_no_questions_is_degenerate_not_fatal() {
    let students = vec![StudentRecord::new("S001", Map::new().into_iter().collect())
        .expect("binary responses")];
    let dataset = ClassDataset::new(vec![], students).expect("consistent dataset");
    let profiles = profiles_for(&dataset);

    let profile = &profiles["S001"];
    assert_eq!(profile.overall_mcq_percentage, 0.0);
    assert_eq!(profile.relative_performance, 1.0);
    assert!(profile.weak_questions.is_empty());
}
