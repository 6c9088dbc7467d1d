// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rstest::rstest;
use tripid::PidError;
use tripid::estimators::utils::te_slicing::{check_delay, delay_split};

use crate::test_helpers::generate_random_data;

#[rstest]
#[case(10, 1)]
#[case(10, 3)]
#[case(50, 7)]
#[case(2, 1)]
fn split_aligns_past_and_future(#[case] len: usize, #[case] delay: usize) {
    let src = generate_random_data(len, 10, 42);
    let dest = generate_random_data(len, 10, 43);
    let split = delay_split(&[src.view()], &[dest.view()], delay).unwrap();

    let future = split.target_future[0];
    let past = split.target_past[0];
    let src_past = split.source_past[0];
    assert_eq!(future.len(), len - delay);
    assert_eq!(past.len(), len - delay);
    assert_eq!(src_past.len(), len - delay);
    for i in 0..len - delay {
        assert_eq!(future[i], dest[i + delay]);
        assert_eq!(past[i], dest[i]);
        assert_eq!(src_past[i], src[i]);
    }
}

#[test]
fn split_keeps_every_component_of_a_joint_source() {
    let a = Array1::from(vec![1, 2, 3, 4, 5]);
    let b = Array1::from(vec![6, 7, 8, 9, 10]);
    let y = Array1::from(vec![0, 1, 0, 1, 0]);
    let split = delay_split(&[a.view(), b.view()], &[y.view()], 2).unwrap();
    assert_eq!(split.source_past.len(), 2);
    assert_eq!(split.source_past[1], Array1::from(vec![6, 7, 8]));
    assert_eq!(split.target_future[0], Array1::from(vec![0, 1, 0]));
}

#[rstest]
#[case(0, 5, PidError::ZeroDelay)]
#[case(5, 5, PidError::InvalidDelay { delay: 5, len: 5 })]
fn invalid_delays_are_rejected(#[case] delay: usize, #[case] len: usize, #[case] expected: PidError) {
    assert_eq!(check_delay(delay, len).unwrap_err(), expected);
}
