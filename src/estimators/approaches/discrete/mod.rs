// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups all discrete-related submodules
// and exposes them to the parent approaches module.

pub mod discrete_utils;
pub mod min_information;
pub mod mle;
pub mod specific_information;

use std::collections::HashMap;

use ndarray::{Array1, ArrayView1};

use crate::error::{PidError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{
    aligned_len, reduce_joint_space_compact,
};
use crate::estimators::approaches::discrete::mle::DiscreteEntropy;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::te_slicing::delay_split;

/// Discrete Conditional Mutual Information I(X; Y | Z) from plug-in frequencies.
///
/// I(X;Y|Z) = Σ p(x,y,z) log2( p(x,y,z) p(z) / (p(x,z) p(y,z)) ), summed over the
/// realized (x, y, z) triples only. A term whose denominator probability is zero is
/// discarded rather than evaluated; no smoothing or pseudo-counts are applied.
///
/// Each of X, Y, Z may be vector-valued, given as a slice of aligned component series.
pub struct DiscreteConditionalMutualInformation {
    x: Array1<i32>,
    y: Array1<i32>,
    z: Array1<i32>,
    n: usize,
    counts_xyz: HashMap<(i32, i32, i32), usize>,
    counts_xz: HashMap<(i32, i32), usize>,
    counts_yz: HashMap<(i32, i32), usize>,
    counts_z: HashMap<i32, usize>,
}

impl DiscreteConditionalMutualInformation {
    pub fn new<'a>(
        x: &[ArrayView1<'a, i32>],
        y: &[ArrayView1<'a, i32>],
        z: &[ArrayView1<'a, i32>],
    ) -> Result<Self> {
        let n = aligned_len(x)?;
        for other in [y, z] {
            let found = aligned_len(other)?;
            if found != n {
                return Err(PidError::LengthMismatch { expected: n, found });
            }
        }

        let x = reduce_joint_space_compact(x)?;
        let y = reduce_joint_space_compact(y)?;
        let z = reduce_joint_space_compact(z)?;

        let mut counts_xyz = HashMap::new();
        let mut counts_xz = HashMap::new();
        let mut counts_yz = HashMap::new();
        let mut counts_z = HashMap::new();
        for i in 0..n {
            let (xi, yi, zi) = (x[i], y[i], z[i]);
            *counts_xyz.entry((xi, yi, zi)).or_insert(0) += 1;
            *counts_xz.entry((xi, zi)).or_insert(0) += 1;
            *counts_yz.entry((yi, zi)).or_insert(0) += 1;
            *counts_z.entry(zi).or_insert(0) += 1;
        }

        Ok(Self {
            x,
            y,
            z,
            n,
            counts_xyz,
            counts_xz,
            counts_yz,
            counts_z,
        })
    }

    /// Number of samples the estimate is built on.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// log2( p(x,y,z) p(z) / (p(x,z) p(y,z)) ), or `None` when a conditioning
    /// probability is zero and the term is discarded.
    fn log_ratio(&self, x: i32, y: i32, z: i32) -> Option<f64> {
        // Unobserved marginals have no entry; `?` discards the term.
        let c_xyz = *self.counts_xyz.get(&(x, y, z))? as f64;
        let c_xz = *self.counts_xz.get(&(x, z))? as f64;
        let c_yz = *self.counts_yz.get(&(y, z))? as f64;
        let c_z = *self.counts_z.get(&z)? as f64;
        // The 1/n factors cancel.
        Some((c_xyz * c_z / (c_xz * c_yz)).log2())
    }
}

impl GlobalValue for DiscreteConditionalMutualInformation {
    fn global_value(&self) -> f64 {
        let n_f = self.n as f64;
        self.counts_xyz
            .iter()
            .filter_map(|(&(x, y, z), &cnt)| {
                self.log_ratio(x, y, z)
                    .map(|ratio| (cnt as f64 / n_f) * ratio)
            })
            .sum()
    }
}

impl LocalValues for DiscreteConditionalMutualInformation {
    fn local_values(&self) -> Array1<f64> {
        (0..self.n)
            .map(|i| {
                self.log_ratio(self.x[i], self.y[i], self.z[i])
                    .unwrap_or(0.0)
            })
            .collect()
    }
}

/// Discrete Transfer Entropy at a single time delay, evaluated as a CMI.
///
/// TE(X -> Y) = I(X[0..N-d]; Y[d..N] | Y[0..N-d]). Source and target may both be
/// vector-valued; a joint source of two neurons gives the TE used as the PID total.
pub struct DiscreteTransferEntropy {
    inner: DiscreteConditionalMutualInformation,
    future_entropy: f64,
}

impl DiscreteTransferEntropy {
    pub fn new<'a>(
        source: &[ArrayView1<'a, i32>],
        target: &[ArrayView1<'a, i32>],
        delay: usize,
    ) -> Result<Self> {
        let split = delay_split(source, target, delay)?;
        let inner = DiscreteConditionalMutualInformation::new(
            &split.source_past,
            &split.target_future,
            &split.target_past,
        )?;
        let future_entropy = DiscreteEntropy::from_components(&split.target_future)?.global_value();
        Ok(Self {
            inner,
            future_entropy,
        })
    }

    /// Entropy of the delay-truncated target future.
    pub fn target_future_entropy(&self) -> f64 {
        self.future_entropy
    }

    /// TE divided by H(target future). With a zero-entropy future the raw TE is returned.
    pub fn normalized(&self) -> f64 {
        let te = self.inner.global_value();
        if self.future_entropy == 0.0 {
            te
        } else {
            te / self.future_entropy
        }
    }
}

impl GlobalValue for DiscreteTransferEntropy {
    fn global_value(&self) -> f64 {
        self.inner.global_value()
    }
}

impl LocalValues for DiscreteTransferEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.inner.local_values()
    }
}
