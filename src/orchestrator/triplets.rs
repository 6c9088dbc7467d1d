// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::fmt;

use ndarray::Array2;

use crate::error::{PidError, Result};

/// A (target, source1, source2) neuron index triple.
///
/// The decomposition identity does not depend on source order, but `unique1`/`unique2`
/// follow `source1`/`source2` as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triplet {
    pub target: usize,
    pub source1: usize,
    pub source2: usize,
}

impl Triplet {
    pub fn new(target: usize, source1: usize, source2: usize) -> Self {
        Self {
            target,
            source1,
            source2,
        }
    }

    pub fn members(&self) -> [usize; 3] {
        [self.target, self.source1, self.source2]
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.target, self.source1, self.source2)
    }
}

/// Which triplets to decompose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TripletSelection {
    /// Every 3-subset of active neurons, each member once as target.
    #[default]
    All,
    /// One (rows x 3) list shared by all trials.
    Shared(Array2<usize>),
    /// One (rows x 3) list per trial.
    PerTrial(Vec<Array2<usize>>),
}

impl TripletSelection {
    /// Check list shapes and index ranges for a dataset of `n_trials` trials with
    /// `n_neurons` neurons each.
    pub fn validate(&self, n_trials: usize, n_neurons: usize) -> Result<()> {
        match self {
            TripletSelection::All => Ok(()),
            TripletSelection::Shared(list) => parse_triplets(list, n_neurons).map(drop),
            TripletSelection::PerTrial(lists) => {
                if lists.len() != n_trials {
                    return Err(PidError::TripletListCount {
                        trials: n_trials,
                        found: lists.len(),
                    });
                }
                lists
                    .iter()
                    .try_for_each(|list| parse_triplets(list, n_neurons).map(drop))
            }
        }
    }

    /// The explicit list that applies to `trial`, `None` for automatic enumeration.
    ///
    /// A `PerTrial` selection without a list for `trial` is an error, never a fallback
    /// to enumeration.
    pub fn for_trial(&self, trial: usize) -> Result<Option<&Array2<usize>>> {
        match self {
            TripletSelection::All => Ok(None),
            TripletSelection::Shared(list) => Ok(Some(list)),
            TripletSelection::PerTrial(lists) => {
                lists
                    .get(trial)
                    .map(Some)
                    .ok_or(PidError::TripletListCount {
                        trials: trial + 1,
                        found: lists.len(),
                    })
            }
        }
    }
}

/// Convert a (rows x 3) index matrix into triplets, checking shape, range and that each
/// row names three distinct neurons.
pub fn parse_triplets(list: &Array2<usize>, n_neurons: usize) -> Result<Vec<Triplet>> {
    if list.ncols() != 3 {
        return Err(PidError::MalformedTriplets {
            found: list.ncols(),
        });
    }
    list.rows()
        .into_iter()
        .enumerate()
        .map(|(row, r)| {
            if let Some(&neuron) = r.iter().find(|&&i| i >= n_neurons) {
                return Err(PidError::TripletOutOfRange {
                    row,
                    neuron,
                    n_neurons,
                });
            }
            if r[0] == r[1] || r[0] == r[2] {
                return Err(PidError::RepeatedTripletMember { row, neuron: r[0] });
            }
            if r[1] == r[2] {
                return Err(PidError::RepeatedTripletMember { row, neuron: r[1] });
            }
            Ok(Triplet::new(r[0], r[1], r[2]))
        })
        .collect()
}

/// Every 3-subset of `active` (ascending), rotated so each member is target once.
/// Sources keep ascending order.
pub fn enumerate_triplets(active: &[usize]) -> Vec<Triplet> {
    let mut out = Vec::with_capacity(triplet_count(active.len()));
    for (a, &i) in active.iter().enumerate() {
        for (b, &j) in active.iter().enumerate().skip(a + 1) {
            for &k in &active[b + 1..] {
                out.push(Triplet::new(i, j, k));
                out.push(Triplet::new(j, i, k));
                out.push(Triplet::new(k, i, j));
            }
        }
    }
    out
}

/// n(n-1)(n-2)/2: three rotations of each of the C(n, 3) subsets.
pub fn triplet_count(n: usize) -> usize {
    if n < 3 {
        return 0;
    }
    n * (n - 1) * (n - 2) / 2
}

/// Distinct (source, target) pairs whose pairwise TE the triplets need, in sorted order.
pub fn required_pairs(triplets: &[Triplet]) -> Vec<(usize, usize)> {
    let pairs: BTreeSet<(usize, usize)> = triplets
        .iter()
        .flat_map(|t| [(t.source1, t.target), (t.source2, t.target)])
        .collect();
    pairs.into_iter().collect()
}
