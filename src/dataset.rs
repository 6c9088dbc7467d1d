// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView2};

use crate::config::Orientation;
use crate::error::{PidError, Result};

/// Discretized spike-train input: one matrix, or several equally shaped trials that are
/// processed independently with the same parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    SingleTrial(Array2<i32>),
    MultiTrial(Vec<Array2<i32>>),
}

impl Dataset {
    /// All trials in order; a single trial is a one-element slice.
    pub fn trials(&self) -> &[Array2<i32>] {
        match self {
            Dataset::SingleTrial(m) => std::slice::from_ref(m),
            Dataset::MultiTrial(ms) => ms,
        }
    }

    pub fn n_trials(&self) -> usize {
        self.trials().len()
    }

    /// Check that there is at least one trial and that all trials share one shape.
    pub fn validate(&self) -> Result<()> {
        let trials = self.trials();
        let first = trials.first().ok_or(PidError::EmptyDataset)?;
        let expected = first.dim();
        for (trial, m) in trials.iter().enumerate().skip(1) {
            if m.dim() != expected {
                return Err(PidError::TrialShape {
                    trial,
                    expected,
                    found: m.dim(),
                });
            }
        }
        Ok(())
    }
}

impl From<Array2<i32>> for Dataset {
    fn from(m: Array2<i32>) -> Self {
        Dataset::SingleTrial(m)
    }
}

impl From<Vec<Array2<i32>>> for Dataset {
    fn from(ms: Vec<Array2<i32>>) -> Self {
        Dataset::MultiTrial(ms)
    }
}

/// Copy a trial into neuron-major standard layout (rows = neurons, contiguous in time).
pub fn neuron_major(trial: ArrayView2<'_, i32>, orientation: Orientation) -> Array2<i32> {
    match orientation {
        Orientation::TimeByNeuron => trial.t().as_standard_layout().into_owned(),
        Orientation::NeuronByTime => trial.as_standard_layout().into_owned(),
    }
}
