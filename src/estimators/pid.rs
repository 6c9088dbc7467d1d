// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Partial information decomposition of the transfer entropy from two sources.

use ndarray::ArrayView1;

use crate::error::Result;
use crate::estimators::approaches::discrete::DiscreteTransferEntropy;
use crate::estimators::approaches::discrete::min_information::MinimumInformation;
use crate::estimators::traits::GlobalValue;

/// The four PID terms, in bits.
///
/// `unique1 + unique2 + redundancy + synergy` equals the joint-source TE by construction.
/// Nothing is clamped, so terms that are zero in theory may carry rounding noise of
/// either sign.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PidDecomposition {
    pub synergy: f64,
    pub redundancy: f64,
    pub unique1: f64,
    pub unique2: f64,
}

impl PidDecomposition {
    /// Decompose from TE(source1 -> target), TE(source2 -> target),
    /// TE((source1, source2) -> target) and the redundancy term.
    pub fn from_components(te1: f64, te2: f64, te12: f64, redundancy: f64) -> Self {
        let unique1 = te1 - redundancy;
        let unique2 = te2 - redundancy;
        let synergy = te12 - redundancy - unique1 - unique2;
        Self {
            synergy,
            redundancy,
            unique1,
            unique2,
        }
    }

    /// Sum of all four terms, i.e. the joint-source transfer entropy.
    pub fn total(&self) -> f64 {
        self.unique1 + self.unique2 + self.redundancy + self.synergy
    }
}

/// Joint-source TE and redundancy, the two triplet-specific quantities of a PID.
pub fn joint_terms<'a>(
    target: ArrayView1<'a, i32>,
    source1: ArrayView1<'a, i32>,
    source2: ArrayView1<'a, i32>,
    delay: usize,
) -> Result<(f64, f64)> {
    let te12 = DiscreteTransferEntropy::new(&[source1, source2], &[target], delay)?.global_value();
    let redundancy =
        MinimumInformation::new(&[target], &[source1], &[source2], delay)?.global_value();
    Ok((te12, redundancy))
}

/// Decompose a single (target, source1, source2) triplet from scratch.
pub fn decompose_triplet<'a>(
    target: ArrayView1<'a, i32>,
    source1: ArrayView1<'a, i32>,
    source2: ArrayView1<'a, i32>,
    delay: usize,
) -> Result<PidDecomposition> {
    let te1 = DiscreteTransferEntropy::new(&[source1], &[target], delay)?.global_value();
    let te2 = DiscreteTransferEntropy::new(&[source2], &[target], delay)?.global_value();
    let (te12, redundancy) = joint_terms(target, source1, source2, delay)?;
    Ok(PidDecomposition::from_components(te1, te2, te12, redundancy))
}
