pub(crate) use super::*;

#[test]
fn test_point_biserial_positive() {
    // Students who scored high overall also got the item right.
    let item = Vector::from_slice(&[1.0, 1.0, 1.0, 0.0, 0.0]);
    let criterion = Vector::from_slice(&[4.0, 3.0, 3.5, 1.0, 0.5]);
    let r = point_biserial(&item, &criterion);
    assert!(r > 0.8, "expected strong positive correlation, got {r}");
}

#[test]
fn test_point_biserial_negative() {
    // Inverted: low scorers got the item right.
    let item = Vector::from_slice(&[0.0, 0.0, 0.0, 1.0, 1.0]);
    let criterion = Vector::from_slice(&[4.0, 3.0, 3.5, 1.0, 0.5]);
    let r = point_biserial(&item, &criterion);
    assert!(r < -0.8, "expected strong negative correlation, got {r}");
}

#[test]
fn test_point_biserial_zero_item_variance() {
    let item = Vector::from_slice(&[1.0, 1.0, 1.0]);
    let criterion = Vector::from_slice(&[3.0, 2.0, 1.0]);
    assert_eq!(point_biserial(&item, &criterion), 0.0);
}

#[test]
fn test_point_biserial_zero_criterion_variance() {
    let item = Vector::from_slice(&[0.0, 1.0, 0.0]);
    let criterion = Vector::from_slice(&[2.0, 2.0, 2.0]);
    assert_eq!(point_biserial(&item, &criterion), 0.0);
}

#[test]
fn test_point_biserial_empty() {
    let empty = Vector::<f32>::from_vec(vec![]);
    assert_eq!(point_biserial(&empty, &empty), 0.0);
}

#[test]
fn test_point_biserial_known_value() {
    // Hand-computed: x = [1,1,1,1,0], y = [2,1,0,3,0]
    // r = 1.2 / sqrt(0.8 * 6.8) ≈ 0.514496
    let item = Vector::from_slice(&[1.0, 1.0, 1.0, 1.0, 0.0]);
    let criterion = Vector::from_slice(&[2.0, 1.0, 0.0, 3.0, 0.0]);
    let r = point_biserial(&item, &criterion);
    assert!((r - 0.514_496).abs() < 1e-4, "got {r}");
}

#[test]
#[should_panic(expected = "same length")]
fn test_point_biserial_length_mismatch_panics() {
    let item = Vector::from_slice(&[1.0, 0.0]);
    let criterion = Vector::from_slice(&[1.0]);
    let _ = point_biserial(&item, &criterion);
}

#[test]
fn test_sample_std() {
    // Totals 3, 2, 1, 4, 0: sample variance 2.5
    let values = Vector::from_slice(&[3.0, 2.0, 1.0, 4.0, 0.0]);
    let std = sample_std(&values);
    assert!((std - 2.5_f32.sqrt()).abs() < 1e-5, "got {std}");
}

#[test]
fn test_sample_std_degenerate() {
    assert_eq!(sample_std(&Vector::from_slice(&[5.0])), 0.0);
    assert_eq!(sample_std(&Vector::<f32>::from_vec(vec![])), 0.0);
}
