// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::estimators::pid::PidDecomposition;
use crate::orchestrator::triplets::Triplet;

/// Entropy (bits) of one active neuron's delay-truncated future series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntropyRecord {
    pub neuron: usize,
    pub entropy: f64,
}

/// PID of one triplet, all terms in bits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PidRecord {
    pub target: usize,
    pub source1: usize,
    pub source2: usize,
    pub synergy: f64,
    pub redundancy: f64,
    pub unique1: f64,
    pub unique2: f64,
}

impl PidRecord {
    pub fn new(triplet: Triplet, pid: PidDecomposition) -> Self {
        Self {
            target: triplet.target,
            source1: triplet.source1,
            source2: triplet.source2,
            synergy: pid.synergy,
            redundancy: pid.redundancy,
            unique1: pid.unique1,
            unique2: pid.unique2,
        }
    }

    pub fn triplet(&self) -> Triplet {
        Triplet::new(self.target, self.source1, self.source2)
    }

    pub fn decomposition(&self) -> PidDecomposition {
        PidDecomposition {
            synergy: self.synergy,
            redundancy: self.redundancy,
            unique1: self.unique1,
            unique2: self.unique2,
        }
    }
}

/// Non-fatal conditions reported alongside the data records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// The neuron's future series takes a single value; it is left out of all triplets.
    DegenerateNeuron { trial: usize, neuron: usize },
    /// A requested triplet was dropped because `neuron` is degenerate.
    TripletSkipped {
        trial: usize,
        triplet: Triplet,
        neuron: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DegenerateNeuron { trial, neuron } => write!(
                f,
                "trial {trial}: neuron {neuron} has zero entropy and is excluded"
            ),
            Diagnostic::TripletSkipped {
                trial,
                triplet,
                neuron,
            } => write!(
                f,
                "trial {trial}: triplet {triplet} skipped, neuron {neuron} has zero entropy"
            ),
        }
    }
}

/// Consumer of the orchestrator's output stream.
///
/// Per trial the stream is: `begin_trial`, diagnostics, entropy records of the active
/// neurons, then PID records in triplet order.
pub trait RecordSink {
    fn begin_trial(&mut self, _trial: usize) {}
    fn entropy(&mut self, record: EntropyRecord);
    fn pid(&mut self, record: PidRecord);
    fn diagnostic(&mut self, diagnostic: Diagnostic);
}

/// One element of the output stream, as stored by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputRecord {
    TrialStart(usize),
    Entropy(EntropyRecord),
    Pid(PidRecord),
    Diagnostic(Diagnostic),
}

/// Sink that keeps every record in memory, in stream order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySink {
    pub records: Vec<OutputRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entropies(&self) -> impl Iterator<Item = &EntropyRecord> {
        self.records.iter().filter_map(|r| match r {
            OutputRecord::Entropy(e) => Some(e),
            _ => None,
        })
    }

    pub fn pids(&self) -> impl Iterator<Item = &PidRecord> {
        self.records.iter().filter_map(|r| match r {
            OutputRecord::Pid(p) => Some(p),
            _ => None,
        })
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter_map(|r| match r {
            OutputRecord::Diagnostic(d) => Some(d),
            _ => None,
        })
    }
}

impl RecordSink for MemorySink {
    fn begin_trial(&mut self, trial: usize) {
        self.records.push(OutputRecord::TrialStart(trial));
    }

    fn entropy(&mut self, record: EntropyRecord) {
        self.records.push(OutputRecord::Entropy(record));
    }

    fn pid(&mut self, record: PidRecord) {
        self.records.push(OutputRecord::Pid(record));
    }

    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        self.records.push(OutputRecord::Diagnostic(diagnostic));
    }
}
