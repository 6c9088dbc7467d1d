use ndarray::{Array1, ArrayView1};

use crate::error::Result;
use crate::estimators::approaches::discrete::DiscreteConditionalMutualInformation;

pub struct MutualInformation;

impl MutualInformation {
    /// Create a discrete conditional mutual information estimator I(X; Y | Z).
    pub fn new_cmi_discrete(
        x: &Array1<i32>,
        y: &Array1<i32>,
        cond: &Array1<i32>,
    ) -> Result<DiscreteConditionalMutualInformation> {
        DiscreteConditionalMutualInformation::new(&[x.view()], &[y.view()], &[cond.view()])
    }

    /// Create a discrete CMI estimator for vector-valued variables.
    pub fn new_cmi_discrete_joint<'a>(
        x: &[ArrayView1<'a, i32>],
        y: &[ArrayView1<'a, i32>],
        cond: &[ArrayView1<'a, i32>],
    ) -> Result<DiscreteConditionalMutualInformation> {
        DiscreteConditionalMutualInformation::new(x, y, cond)
    }

    /// Create a discrete mutual information estimator I(X; Y).
    ///
    /// Evaluated as a CMI against a constant condition, which leaves the sum unchanged.
    pub fn new_discrete(
        x: &Array1<i32>,
        y: &Array1<i32>,
    ) -> Result<DiscreteConditionalMutualInformation> {
        let cond = Array1::<i32>::zeros(x.len());
        DiscreteConditionalMutualInformation::new(&[x.view()], &[y.view()], &[cond.view()])
    }
}
