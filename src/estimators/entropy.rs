use ndarray::{Array1, ArrayView1};

use crate::error::Result;
use crate::estimators::approaches::discrete;
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation entry points.
pub struct Entropy;

impl Entropy {
    /// Creates a discrete (plug-in, bits) entropy estimator for 1D integer data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of discrete symbols
    pub fn new_discrete(data: Array1<i32>) -> discrete::mle::DiscreteEntropy {
        discrete::mle::DiscreteEntropy::new(data)
    }

    /// Creates a joint entropy estimator over aligned component series
    ///
    /// # Errors
    ///
    /// `LengthMismatch` when the components differ in length, `EmptyVariable` for an
    /// empty slice.
    pub fn new_discrete_joint(
        components: &[ArrayView1<'_, i32>],
    ) -> Result<discrete::mle::DiscreteEntropy> {
        discrete::mle::DiscreteEntropy::from_components(components)
    }
}
