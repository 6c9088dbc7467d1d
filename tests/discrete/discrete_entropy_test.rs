// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use rstest::rstest;
use tripid::estimators::entropy::Entropy;
use tripid::estimators::{GlobalValue, LocalValues};

use crate::test_helpers::generate_random_data;

#[test]
fn discrete_entropy_known_example() {
    // [1,1,2,3,3,4,5]: two symbols with p = 2/7, three with p = 1/7
    let data = Array1::from(vec![1, 1, 2, 3, 3, 4, 5]);
    let est = Entropy::new_discrete(data);

    let expected_h = 7f64.log2() - (4.0 / 7.0) * 2f64.log2();
    assert_abs_diff_eq!(est.global_value(), expected_h, epsilon = 1e-12);

    let l_2_7 = -(2.0f64 / 7.0).log2();
    let l_1_7 = -(1.0f64 / 7.0).log2();
    let expected_locals = [l_2_7, l_2_7, l_1_7, l_2_7, l_2_7, l_1_7, l_1_7];
    for (val, expected) in est.local_values().iter().zip(expected_locals) {
        assert_abs_diff_eq!(*val, expected, epsilon = 1e-12);
    }
}

#[test]
fn constant_series_has_zero_entropy() {
    let est = Entropy::new_discrete(Array1::from(vec![3; 50]));
    assert_eq!(est.global_value(), 0.0);
    assert!(est.local_values().iter().all(|&v| v == 0.0));
}

#[test]
fn uniform_binary_is_one_bit() {
    let est = Entropy::new_discrete(Array1::from(vec![0, 1, 1, 0, 1, 0]));
    assert_abs_diff_eq!(est.global_value(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(est.global_from_local(), 1.0, epsilon = 1e-12);
}

#[rstest]
#[case(200, 2, 1)]
#[case(200, 5, 2)]
#[case(1000, 16, 3)]
#[case(30, 64, 4)]
fn entropy_is_bounded_by_support(#[case] size: usize, #[case] k: i32, #[case] seed: u64) {
    let data = generate_random_data(size, k, seed);
    let est = Entropy::new_discrete(data);
    let h = est.global_value();
    let support = est.distribution().support_size() as f64;
    assert!(h >= 0.0);
    assert!(h <= support.log2() + 1e-12, "H = {h} exceeds log2({support})");
    assert_abs_diff_eq!(h, est.global_from_local(), epsilon = 1e-10);
}

#[test]
fn joint_entropy_of_independent_bits_adds_up() {
    let a = Array1::from(vec![0, 0, 1, 1]);
    let b = Array1::from(vec![0, 1, 0, 1]);
    let est = Entropy::new_discrete_joint(&[a.view(), b.view()]).unwrap();
    assert_abs_diff_eq!(est.global_value(), 2.0, epsilon = 1e-12);
}
