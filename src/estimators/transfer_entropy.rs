use ndarray::{Array1, ArrayView1};

use crate::error::Result;
use crate::estimators::approaches::discrete::DiscreteTransferEntropy;
use crate::estimators::traits::GlobalValue;

/// Transfer entropy and its normalisation by the target-future entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferEntropyValue {
    pub te: f64,
    pub normalized: f64,
}

pub struct TransferEntropy;

impl TransferEntropy {
    /// Create a discrete transfer entropy estimator for scalar series at `delay`.
    pub fn new_discrete(
        source: &Array1<i32>,
        target: &Array1<i32>,
        delay: usize,
    ) -> Result<DiscreteTransferEntropy> {
        DiscreteTransferEntropy::new(&[source.view()], &[target.view()], delay)
    }

    /// Create a discrete transfer entropy estimator for a vector-valued source, e.g. two
    /// neurons taken jointly.
    pub fn new_discrete_joint<'a>(
        sources: &[ArrayView1<'a, i32>],
        target: ArrayView1<'a, i32>,
        delay: usize,
    ) -> Result<DiscreteTransferEntropy> {
        DiscreteTransferEntropy::new(sources, &[target], delay)
    }

    /// Compute (TE, normalized TE) for a scalar source/target pair.
    pub fn pairwise<'a>(
        source: ArrayView1<'a, i32>,
        target: ArrayView1<'a, i32>,
        delay: usize,
    ) -> Result<TransferEntropyValue> {
        let est = DiscreteTransferEntropy::new(&[source], &[target], delay)?;
        Ok(TransferEntropyValue {
            te: est.global_value(),
            normalized: est.normalized(),
        })
    }
}
