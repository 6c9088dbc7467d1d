use ndarray::{Array1, ArrayView1};

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::EmpiricalDistribution;
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Shannon entropy of a discrete variable from plug-in (maximum likelihood) probabilities.
///
/// H = -Σ p(x) log2 p(x), summed over the realized support only; unobserved symbols
/// never enter the sum, so no `0 log 0` is ever evaluated. A constant sequence yields 0.
/// Local values are the per-sample surprisals -log2 p(x).
pub struct DiscreteEntropy {
    dist: EmpiricalDistribution,
}

impl DiscreteEntropy {
    pub fn new(data: Array1<i32>) -> Self {
        Self {
            dist: EmpiricalDistribution::from_codes(data),
        }
    }

    /// Joint entropy of aligned component series (a vector-valued variable).
    pub fn from_components(components: &[ArrayView1<'_, i32>]) -> Result<Self> {
        Ok(Self {
            dist: EmpiricalDistribution::from_components(components)?,
        })
    }

    pub fn from_distribution(dist: EmpiricalDistribution) -> Self {
        Self { dist }
    }

    pub fn distribution(&self) -> &EmpiricalDistribution {
        &self.dist
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> f64 {
        entropy_bits(&self.dist)
    }
}

impl LocalValues for DiscreteEntropy {
    fn local_values(&self) -> Array1<f64> {
        -self.dist.map_probs().mapv(f64::log2)
    }
}

/// Entropy in bits of an empirical distribution.
pub fn entropy_bits(dist: &EmpiricalDistribution) -> f64 {
    dist.dist.values().map(|&p| -p * p.log2()).sum()
}
