// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::num::NonZeroUsize;

use crate::error::{PidError, Result};

/// Layout of an input matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Rows are time steps, columns are neurons.
    #[default]
    TimeByNeuron,
    /// Rows are neurons, columns are time steps.
    NeuronByTime,
}

/// Parameters shared by every trial of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PidConfig {
    /// Time delay d between source past and target future.
    pub delay: usize,
    pub orientation: Orientation,
    /// Worker threads for the pairwise and triplet phases; `None` uses all cores.
    pub threads: Option<usize>,
}

impl Default for PidConfig {
    fn default() -> Self {
        Self {
            delay: 1,
            orientation: Orientation::TimeByNeuron,
            threads: None,
        }
    }
}

impl PidConfig {
    pub fn new(delay: usize) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Reject parameters that are invalid for any dataset. The upper bound of the delay
    /// depends on the series length and is checked per trial.
    pub fn validate(&self) -> Result<()> {
        if self.delay == 0 {
            return Err(PidError::ZeroDelay);
        }
        if self.threads == Some(0) {
            return Err(PidError::ZeroThreads);
        }
        Ok(())
    }

    /// Number of worker threads to use.
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(4)
        })
    }
}
