// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # tripid
//!
//! Partial information decomposition (PID) of the transfer entropy that two source
//! neurons send into a target neuron, for discretized spike trains.
//!
//! The transfer entropy TE((X1, X2) -> Y) at a delay d is split into four terms in bits:
//! synergy, redundancy and the unique contributions of X1 and X2, following Williams &
//! Beer with the minimum-information redundancy of Timme et al. (2016).
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use tripid::config::PidConfig;
//! use tripid::dataset::Dataset;
//! use tripid::orchestrator::{MemorySink, TripletOrchestrator, TripletSelection};
//!
//! // rows = time steps, columns = neurons
//! let spikes = array![
//!     [0, 1, 0], [1, 0, 1], [1, 1, 0], [0, 0, 1],
//!     [1, 0, 0], [0, 1, 1], [0, 0, 0], [1, 1, 1],
//! ];
//! let orchestrator = TripletOrchestrator::new(PidConfig::new(1)).unwrap();
//! let mut sink = MemorySink::new();
//! let summary = orchestrator
//!     .run(&Dataset::from(spikes), &TripletSelection::All, &mut sink)
//!     .unwrap();
//! assert_eq!(summary.pid_records, 3);
//! ```
//!
//! ## Architecture
//!
//! 1. **Estimators** (`estimators`): empirical distributions, entropy, conditional mutual
//!    information, transfer entropy, specific information, minimum information and the
//!    PID itself. All of them work on borrowed `ndarray` views.
//! 2. **Orchestration** (`orchestrator`): triplet enumeration, the shared pairwise TE
//!    cache, the parallel triplet pass and the record stream.
//!
//! Zero-probability conditioning terms are discarded, never smoothed; values that are
//! zero in theory can therefore come out as tiny positive or negative numbers.

pub mod config;
pub mod dataset;
pub mod error;
pub mod estimators;
pub mod orchestrator;

pub use error::{ErrorKind, PidError, Result};
