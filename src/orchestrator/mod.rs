// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Batch PID over neuron triplets.
//!
//! A run goes through these stages for every trial:
//!
//! 1. validate the configuration, every trial shape and every triplet list
//! 2. compute the future-series entropy of each neuron and drop degenerate ones
//! 3. enumerate triplets (or filter the explicit list)
//! 4. build the [`PairwiseTeCache`] for all (source, target) pairs the triplets use
//! 5. decompose each triplet with cached pairwise TEs plus its own joint TE and redundancy
//! 6. emit diagnostics, entropy records and PID records to a [`RecordSink`]
//!
//! Stages 4 and 5 fan out over scoped threads; the cache is complete and frozen before
//! stage 5 begins. All validation happens before the first record is emitted, so a
//! rejected request produces no output.

pub mod cache;
pub mod parallel;
pub mod sink;
pub mod triplets;

use ndarray::{Array2, ArrayView2};

use crate::config::PidConfig;
use crate::dataset::{Dataset, neuron_major};
use crate::error::Result;
use crate::estimators::approaches::discrete::mle::DiscreteEntropy;
use crate::estimators::pid::{PidDecomposition, joint_terms};
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::te_slicing::{check_delay, future_view};

pub use cache::PairwiseTeCache;
pub use sink::{Diagnostic, EntropyRecord, MemorySink, OutputRecord, PidRecord, RecordSink};
pub use triplets::{Triplet, TripletSelection, enumerate_triplets, triplet_count};

/// Counts describing a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub trials: usize,
    pub active_neurons: usize,
    pub excluded_neurons: usize,
    pub cached_pairs: usize,
    pub pid_records: usize,
}

/// Everything one trial contributes to the output stream.
#[derive(Debug, Clone, Default)]
pub struct TrialOutput {
    pub diagnostics: Vec<Diagnostic>,
    pub entropies: Vec<EntropyRecord>,
    pub pids: Vec<PidRecord>,
    pub cache: PairwiseTeCache,
}

pub struct TripletOrchestrator {
    config: PidConfig,
}

impl TripletOrchestrator {
    pub fn new(config: PidConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PidConfig {
        &self.config
    }

    /// Run the decomposition over every trial of `dataset`, streaming records to `sink`.
    pub fn run<S: RecordSink>(
        &self,
        dataset: &Dataset,
        selection: &TripletSelection,
        sink: &mut S,
    ) -> Result<RunSummary> {
        let trials = self.prepare(dataset, selection)?;

        let mut summary = RunSummary::default();
        for (trial, neurons) in trials.iter().enumerate() {
            let output = self.run_trial(trial, neurons.view(), selection)?;
            summary.trials += 1;
            summary.active_neurons += output.entropies.len();
            summary.excluded_neurons += neurons.nrows() - output.entropies.len();
            summary.cached_pairs += output.cache.len();
            summary.pid_records += output.pids.len();
            emit(trial, output, sink);
        }
        Ok(summary)
    }

    /// Validate the whole request and return every trial in neuron-major layout.
    fn prepare(&self, dataset: &Dataset, selection: &TripletSelection) -> Result<Vec<Array2<i32>>> {
        dataset.validate()?;
        let trials: Vec<Array2<i32>> = dataset
            .trials()
            .iter()
            .map(|m| neuron_major(m.view(), self.config.orientation))
            .collect();

        // All trials share one shape after `validate`.
        let (n_neurons, n_steps) = trials[0].dim();
        check_delay(self.config.delay, n_steps)?;
        selection.validate(trials.len(), n_neurons)?;
        Ok(trials)
    }

    /// Decompose a single trial given in neuron-major layout.
    ///
    /// Unlike [`run`](Self::run) this checks only what the trial itself needs: the delay
    /// against its length and the list that applies to `trial`. A `PerTrial` selection
    /// without a list for `trial` fails with `TripletListCount`.
    pub fn run_trial(
        &self,
        trial: usize,
        neurons: ArrayView2<'_, i32>,
        selection: &TripletSelection,
    ) -> Result<TrialOutput> {
        let delay = self.config.delay;
        check_delay(delay, neurons.ncols())?;
        let mut output = TrialOutput::default();

        let mut active = Vec::with_capacity(neurons.nrows());
        let mut degenerate = vec![false; neurons.nrows()];
        for (neuron, series) in neurons.rows().into_iter().enumerate() {
            let entropy = DiscreteEntropy::new(future_view(series, delay).to_owned()).global_value();
            if entropy == 0.0 {
                degenerate[neuron] = true;
                output
                    .diagnostics
                    .push(Diagnostic::DegenerateNeuron { trial, neuron });
            } else {
                active.push(neuron);
                output.entropies.push(EntropyRecord { neuron, entropy });
            }
        }

        let triplets = match selection.for_trial(trial)? {
            None => enumerate_triplets(&active),
            Some(list) => {
                let mut kept = Vec::with_capacity(list.nrows());
                for triplet in triplets::parse_triplets(list, neurons.nrows())? {
                    match triplet.members().into_iter().find(|&i| degenerate[i]) {
                        Some(neuron) => output.diagnostics.push(Diagnostic::TripletSkipped {
                            trial,
                            triplet,
                            neuron,
                        }),
                        None => kept.push(triplet),
                    }
                }
                kept
            }
        };

        let workers = self.config.worker_count();
        let pairs = triplets::required_pairs(&triplets);
        let cache = PairwiseTeCache::build(neurons, &pairs, delay, workers)?;

        let decomposed = parallel::parallel_map(&triplets, workers, |&t| -> Result<PidRecord> {
            let (te12, redundancy) = joint_terms(
                neurons.row(t.target),
                neurons.row(t.source1),
                neurons.row(t.source2),
                delay,
            )?;
            let pid = PidDecomposition::from_components(
                cache.te(t.source1, t.target),
                cache.te(t.source2, t.target),
                te12,
                redundancy,
            );
            Ok(PidRecord::new(t, pid))
        });
        output.pids = decomposed.into_iter().collect::<Result<_>>()?;
        output.cache = cache;
        Ok(output)
    }
}

fn emit<S: RecordSink>(trial: usize, output: TrialOutput, sink: &mut S) {
    sink.begin_trial(trial);
    for d in output.diagnostics {
        sink.diagnostic(d);
    }
    for e in output.entropies {
        sink.entropy(e);
    }
    for p in output.pids {
        sink.pid(p);
    }
}
