pub(crate) use super::*;
use crate::dataset::{ClassDataset, StudentRecord};
use crate::diagnostics::item_statistics;

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

fn summary_for(dataset: &ClassDataset) -> ClassSummary {
    let matrix = ResponseMatrix::build(dataset);
    let item_stats = item_statistics(&matrix);
    class_summary(&matrix, &item_stats)
}

#[test]
fn test_summary_counts_and_scores() {
    let summary = summary_for(&fixture());

    assert_eq!(summary.num_students, 5);
    assert_eq!(summary.num_questions, 5);
    // Totals are 3, 2, 1, 4, 0.
    assert!((summary.avg_score - 2.0).abs() < 1e-5);
    assert!((summary.std_score - 2.5_f32.sqrt()).abs() < 1e-5);
    assert_eq!(summary.min_score, 0.0);
    assert_eq!(summary.max_score, 4.0);
}

#[test]
fn test_summary_question_rankings() {
    let summary = summary_for(&fixture());

    // p-values: q1=0.8, q2=0.6, q3=0.4, q4=0.2, q5=0.0.
    assert_eq!(summary.hardest_questions, vec!["q5", "q4", "q3"]);
    assert_eq!(
        summary.easiest_questions,
        vec!["q1", "q2", "q3", "q4", "q5"]
    );
}

#[test]
fn test_weak_items_threshold() {
    let matrix = ResponseMatrix::build(&fixture());
    let item_stats = item_statistics(&matrix);

    assert_eq!(weak_items(&item_stats, 0.5), vec!["q5", "q4", "q3"]);
    assert_eq!(weak_items(&item_stats, 0.1), vec!["q5"]);
    assert!(weak_items(&item_stats, 0.0).is_empty());
}

#[test]
fn test_summary_empty_cohort() {
    let dataset = ClassDataset::new(vec!["q1".to_string()], vec![]).expect("consistent dataset");
    let summary = summary_for(&dataset);

    assert_eq!(summary.num_students, 0);
    assert_eq!(summary.avg_score, 0.0);
    assert_eq!(summary.std_score, 0.0);
    assert_eq!(summary.min_score, 0.0);
    assert_eq!(summary.max_score, 0.0);
    // One unattempted question: p-value 0, so it ranks as hardest.
    assert_eq!(summary.hardest_questions, vec!["q1"]);
}

#[test]
fn test_summary_single_student_std_is_zero() {
    let students = vec![record("S001", [1, 0, 1, 0, 1])];
    let questions = ["q1", "q2", "q3", "q4", "q5"]
        .iter()
        .map(|q| q.to_string())
        .collect();
    let dataset = ClassDataset::new(questions, students).expect("consistent dataset");
    let summary = summary_for(&dataset);

    assert_eq!(summary.num_students, 1);
    assert_eq!(summary.std_score, 0.0);
    assert_eq!(summary.min_score, 3.0);
    assert_eq!(summary.max_score, 3.0);
}
