// =========================================================================
// FALSIFY-PB: point-biserial correlation contract (evaluar stats)
//
// References:
//   - Crocker & Algina (1986), "Introduction to Classical and Modern
//     Test Theory" (point-biserial as discrimination index)
// =========================================================================

use super::*;

/// FALSIFY-PB-001: Result is bounded in [-1, 1]
#[test]
fn falsify_pb_001_bounded() {
    let item = Vector::from_slice(&[1.0, 0.0, 1.0, 0.0, 1.0]);
    let criterion = Vector::from_slice(&[5.0, 1.0, 4.0, 2.0, 3.0]);
    let r = point_biserial(&item, &criterion);

    assert!(
        (-1.0..=1.0).contains(&r),
        "FALSIFIED PB-001: r={r}, expected within [-1, 1]"
    );
}

/// FALSIFY-PB-002: Zero variance yields exactly 0.0, never NaN
#[test]
fn falsify_pb_002_zero_variance_is_zero() {
    let constant = Vector::from_slice(&[0.0, 0.0, 0.0, 0.0]);
    let criterion = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let r = point_biserial(&constant, &criterion);

    assert!(
        r == 0.0 && !r.is_nan(),
        "FALSIFIED PB-002: r={r}, expected exactly 0.0"
    );
}

/// FALSIFY-PB-003: Symmetric under swapping the binary coding (1 - x)
#[test]
fn falsify_pb_003_coding_antisymmetry() {
    let item = Vector::from_slice(&[1.0, 0.0, 1.0, 1.0, 0.0]);
    let flipped = Vector::from_vec(item.iter().map(|&v| 1.0 - v).collect());
    let criterion = Vector::from_slice(&[3.0, 1.0, 4.0, 2.0, 0.0]);

    let r = point_biserial(&item, &criterion);
    let r_flipped = point_biserial(&flipped, &criterion);

    assert!(
        (r + r_flipped).abs() < 1e-5,
        "FALSIFIED PB-003: r={r}, flipped={r_flipped}, expected negation"
    );
}

mod pb_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-PB-004-prop: Bounded in [-1, 1] for random binary/criterion data
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_pb_004_prop_bounded(
            bits in proptest::collection::vec(0u8..=1, 2..40),
            extra in proptest::collection::vec(0.0_f32..10.0, 2..40),
        ) {
            let n = bits.len().min(extra.len());
            let item = Vector::from_vec(bits[..n].iter().map(|&b| f32::from(b)).collect());
            let criterion = Vector::from_slice(&extra[..n]);

            let r = point_biserial(&item, &criterion);

            prop_assert!(
                (-1.0 - 1e-5..=1.0 + 1e-5).contains(&r) && !r.is_nan(),
                "FALSIFIED PB-004: r={} out of bounds", r
            );
        }
    }
}
