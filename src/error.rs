// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Coarse classification of a [`PidError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter of the request is invalid regardless of the data.
    Configuration,
    /// The data (or the triplet list) does not fit the request.
    Validation,
}

/// Errors raised while validating a request. Both kinds abort the call before
/// any record is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PidError {
    #[error("delay must be a positive integer")]
    ZeroDelay,

    #[error("delay {delay} leaves no samples: series length is {len}")]
    InvalidDelay { delay: usize, len: usize },

    #[error("thread count must be at least 1")]
    ZeroThreads,

    #[error("series length mismatch: expected {expected} observations, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("a variable needs at least one component series")]
    EmptyVariable,

    #[error("triplet list has {found} columns, expected 3")]
    MalformedTriplets { found: usize },

    #[error("triplet {row} references neuron {neuron}, but only {n_neurons} neurons are present")]
    TripletOutOfRange {
        row: usize,
        neuron: usize,
        n_neurons: usize,
    },

    #[error("triplet {row} names neuron {neuron} more than once")]
    RepeatedTripletMember { row: usize, neuron: usize },

    #[error("expected one triplet list per trial ({trials}), found {found}")]
    TripletListCount { trials: usize, found: usize },

    #[error("trial {trial} has shape {found:?}, expected {expected:?}")]
    TrialShape {
        trial: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("dataset contains no trials")]
    EmptyDataset,
}

impl PidError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PidError::ZeroDelay | PidError::ZeroThreads => ErrorKind::Configuration,
            _ => ErrorKind::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, PidError>;
