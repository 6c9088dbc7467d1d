// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, array};
use tripid::config::PidConfig;
use tripid::dataset::Dataset;
use tripid::orchestrator::{MemorySink, TripletOrchestrator, TripletSelection};
use tripid::{ErrorKind, PidError};

use crate::test_helpers::spike_matrix;

/// Run a request that must fail and check that nothing reached the sink.
fn rejected(config: PidConfig, dataset: &Dataset, selection: &TripletSelection) -> PidError {
    let mut sink = MemorySink::new();
    let err = TripletOrchestrator::new(config)
        .and_then(|o| o.run(dataset, selection, &mut sink))
        .unwrap_err();
    assert!(sink.records.is_empty(), "partial output on error: {:?}", sink.records);
    err
}

#[test]
fn zero_delay_is_a_configuration_error() {
    let err = rejected(
        PidConfig::new(0),
        &Dataset::from(spike_matrix(50, 3, 0.5, 1)),
        &TripletSelection::All,
    );
    assert_eq!(err, PidError::ZeroDelay);
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn zero_threads_is_a_configuration_error() {
    assert_eq!(
        PidConfig::new(1).with_threads(0).validate().unwrap_err(),
        PidError::ZeroThreads
    );
}

#[test]
fn delay_longer_than_series_is_rejected() {
    let err = rejected(
        PidConfig::new(50),
        &Dataset::from(spike_matrix(50, 3, 0.5, 1)),
        &TripletSelection::All,
    );
    assert_eq!(err, PidError::InvalidDelay { delay: 50, len: 50 });
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn malformed_triplet_list_is_rejected() {
    let err = rejected(
        PidConfig::new(1),
        &Dataset::from(spike_matrix(50, 3, 0.5, 1)),
        &TripletSelection::Shared(array![[0, 1], [1, 2]]),
    );
    assert_eq!(err, PidError::MalformedTriplets { found: 2 });
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn out_of_range_triplet_is_rejected() {
    let err = rejected(
        PidConfig::new(1),
        &Dataset::from(spike_matrix(50, 3, 0.5, 1)),
        &TripletSelection::Shared(array![[0, 1, 2], [3, 1, 2]]),
    );
    assert_eq!(
        err,
        PidError::TripletOutOfRange {
            row: 1,
            neuron: 3,
            n_neurons: 3
        }
    );
}

#[test]
fn repeated_triplet_member_is_rejected() {
    let err = rejected(
        PidConfig::new(1),
        &Dataset::from(spike_matrix(50, 3, 0.5, 1)),
        &TripletSelection::Shared(array![[0, 1, 2], [0, 0, 1]]),
    );
    assert_eq!(err, PidError::RepeatedTripletMember { row: 1, neuron: 0 });
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn bad_list_in_a_later_trial_prevents_any_output() {
    let trials = vec![spike_matrix(50, 3, 0.5, 1), spike_matrix(50, 3, 0.5, 2)];
    let err = rejected(
        PidConfig::new(1),
        &Dataset::from(trials),
        &TripletSelection::PerTrial(vec![array![[0, 1, 2]], array![[0, 1, 9]]]),
    );
    assert_eq!(
        err,
        PidError::TripletOutOfRange {
            row: 0,
            neuron: 9,
            n_neurons: 3
        }
    );
}

#[test]
fn per_trial_lists_must_match_trial_count() {
    let trials = vec![spike_matrix(50, 3, 0.5, 1), spike_matrix(50, 3, 0.5, 2)];
    let err = rejected(
        PidConfig::new(1),
        &Dataset::from(trials),
        &TripletSelection::PerTrial(vec![array![[0, 1, 2]]]),
    );
    assert_eq!(err, PidError::TripletListCount { trials: 2, found: 1 });
}

#[test]
fn single_trial_without_its_list_is_rejected() {
    let m = spike_matrix(100, 4, 0.5, 3);
    let orchestrator = TripletOrchestrator::new(PidConfig::new(1)).unwrap();
    let selection = TripletSelection::PerTrial(vec![array![[0, 1, 2]]]);

    let err = orchestrator.run_trial(3, m.t(), &selection).unwrap_err();
    assert_eq!(err, PidError::TripletListCount { trials: 4, found: 1 });

    let first = orchestrator.run_trial(0, m.t(), &selection).unwrap();
    assert_eq!(first.pids.len(), 1);
}

#[test]
fn trials_must_share_one_shape() {
    let trials = vec![spike_matrix(50, 3, 0.5, 1), spike_matrix(40, 3, 0.5, 2)];
    let err = rejected(PidConfig::new(1), &Dataset::from(trials), &TripletSelection::All);
    assert_eq!(
        err,
        PidError::TrialShape {
            trial: 1,
            expected: (50, 3),
            found: (40, 3)
        }
    );
}

#[test]
fn empty_multi_trial_dataset_is_rejected() {
    let err = rejected(
        PidConfig::new(1),
        &Dataset::MultiTrial(Vec::<Array2<i32>>::new()),
        &TripletSelection::All,
    );
    assert_eq!(err, PidError::EmptyDataset);
}
