// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use ndarray::ArrayView2;

use crate::error::Result;
use crate::estimators::transfer_entropy::{TransferEntropy, TransferEntropyValue};
use crate::orchestrator::parallel::parallel_map;

/// Pairwise transfer entropies at one delay, keyed by (source, target).
///
/// Built once before the triplet pass and read-only afterwards; there is no way to
/// insert into a built cache.
#[derive(Debug, Clone, Default)]
pub struct PairwiseTeCache {
    delay: usize,
    values: HashMap<(usize, usize), TransferEntropyValue>,
}

impl PairwiseTeCache {
    /// Compute TE for every (source, target) pair in `pairs`, each exactly once.
    ///
    /// `neurons` is neuron-major: row `i` is the series of neuron `i`.
    pub fn build(
        neurons: ArrayView2<'_, i32>,
        pairs: &[(usize, usize)],
        delay: usize,
        workers: usize,
    ) -> Result<Self> {
        let computed = parallel_map(pairs, workers, |&(source, target)| {
            TransferEntropy::pairwise(neurons.row(source), neurons.row(target), delay)
        });

        let mut values = HashMap::with_capacity(pairs.len());
        for (&pair, te) in pairs.iter().zip(computed) {
            values.insert(pair, te?);
        }
        Ok(Self { delay, values })
    }

    pub fn delay(&self) -> usize {
        self.delay
    }

    pub fn get(&self, source: usize, target: usize) -> Option<TransferEntropyValue> {
        self.values.get(&(source, target)).copied()
    }

    /// Raw TE(source -> target).
    ///
    /// # Panics
    ///
    /// If the pair was not part of the build set.
    pub fn te(&self, source: usize, target: usize) -> f64 {
        self.values[&(source, target)].te
    }

    pub fn contains(&self, source: usize, target: usize) -> bool {
        self.values.contains_key(&(source, target))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All cached entries as ((source, target), value), sorted by pair.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), TransferEntropyValue)> + '_ {
        let mut keys: Vec<_> = self.values.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter().map(move |k| (k, self.values[&k]))
    }
}
