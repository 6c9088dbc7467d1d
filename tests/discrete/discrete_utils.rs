// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use rstest::*;
use tripid::PidError;
use tripid::estimators::approaches::discrete::discrete_utils::{
    EmpiricalDistribution, reduce_joint_space_compact,
};

#[rstest]
#[case(
    vec![vec![10, 20, 10, 30]],
    vec![10, 20, 10, 30]
)]
#[case(
    vec![
        vec![1, 1, 2, 2],
        vec![1, 2, 1, 2]
    ],
    vec![0, 1, 2, 3]
)]
#[case(
    vec![
        vec![1, 1, 1, 1],
        vec![2, 2, 2, 2]
    ],
    vec![0, 0, 0, 0]
)]
#[case(
    vec![
        vec![1, 2, 3],
        vec![4, 5, 6],
        vec![7, 8, 9]
    ],
    vec![0, 1, 2]
)]
fn test_reduce_joint_space_compact(#[case] inputs: Vec<Vec<i32>>, #[case] expected: Vec<i32>) {
    let arrays: Vec<Array1<i32>> = inputs.into_iter().map(Array1::from).collect();
    let views: Vec<ArrayView1<i32>> = arrays.iter().map(|a| a.view()).collect();
    let result = reduce_joint_space_compact(&views).unwrap();
    assert_eq!(result, Array1::from(expected));
}

#[test]
fn distribution_covers_only_realized_symbols() {
    let data = Array1::from(vec![0, 0, 0, 2]);
    let dist = EmpiricalDistribution::from_codes(data);
    assert_eq!(dist.n, 4);
    assert_eq!(dist.support_size(), 2);
    assert_eq!(dist.probability(0), 0.75);
    assert_eq!(dist.probability(2), 0.25);
    // Symbol 1 lies inside the alphabet but was never observed.
    assert_eq!(dist.probability(1), 0.0);
    assert!(!dist.dist.contains_key(&1));
    let total: f64 = dist.dist.values().sum();
    assert!((total - 1.0).abs() < 1e-15);
}

#[test]
fn joint_distribution_treats_rows_as_symbols() {
    let a = Array1::from(vec![0, 1, 0, 1]);
    let b = Array1::from(vec![0, 0, 0, 1]);
    let dist = EmpiricalDistribution::from_components(&[a.view(), b.view()]).unwrap();
    assert_eq!(dist.support_size(), 3);
    let mut probs: Vec<f64> = dist.dist.values().copied().collect();
    probs.sort_by(|x, y| x.partial_cmp(y).unwrap());
    assert_eq!(probs, vec![0.25, 0.25, 0.5]);
}

#[test]
fn unequal_lengths_are_a_validation_error() {
    let a = Array1::from(vec![0, 1, 0, 1]);
    let b = Array1::from(vec![0, 0, 0]);
    let err = EmpiricalDistribution::from_components(&[a.view(), b.view()]).unwrap_err();
    assert_eq!(
        err,
        PidError::LengthMismatch {
            expected: 4,
            found: 3
        }
    );
    assert_eq!(err.kind(), tripid::ErrorKind::Validation);
}
