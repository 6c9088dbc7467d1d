// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use ndarray::{Array1, ArrayView1};

use crate::error::{PidError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{
    EmpiricalDistribution, count_frequencies, reduce_joint_space_compact,
};
use crate::estimators::traits::GlobalValue;

/// Specific information of each target realization about a source variable.
///
/// For a realized target value t:
///
/// I_spec(t; S) = Σ_s p(s|t) [ log2 1/p(t) - log2 1/p(t|s) ]
///
/// summed over realized source values with p(s|t) > 0. Pairs (t, s) that never occur
/// together carry no term. The expectation over t is the mutual information I(T; S),
/// which is what [`GlobalValue`] returns.
pub struct SpecificInformation {
    target: EmpiricalDistribution,
    values: HashMap<i32, f64>,
}

impl SpecificInformation {
    pub fn new<'a>(target: &[ArrayView1<'a, i32>], source: &[ArrayView1<'a, i32>]) -> Result<Self> {
        let target = reduce_joint_space_compact(target)?;
        let source = reduce_joint_space_compact(source)?;
        Self::from_codes(target, &source)
    }

    /// Build from already encoded target and source codes of equal length.
    pub fn from_codes(target: Array1<i32>, source: &Array1<i32>) -> Result<Self> {
        if target.len() != source.len() {
            return Err(PidError::LengthMismatch {
                expected: target.len(),
                found: source.len(),
            });
        }
        let target = EmpiricalDistribution::from_codes(target);
        let counts_s = count_frequencies(&source.view());

        let mut counts_ts: HashMap<(i32, i32), usize> = HashMap::new();
        for (&t, &s) in target.codes.iter().zip(source.iter()) {
            *counts_ts.entry((t, s)).or_insert(0) += 1;
        }

        let mut values: HashMap<i32, f64> =
            target.counts.keys().map(|&t| (t, 0.0)).collect();
        for (&(t, s), &c_ts) in &counts_ts {
            let c_t = target.counts[&t] as f64;
            let c_s = counts_s[&s] as f64;
            let c_ts = c_ts as f64;

            let p_s_given_t = c_ts / c_t;
            let p_t = target.dist[&t];
            let p_t_given_s = c_ts / c_s;
            let term = p_s_given_t * ((1.0 / p_t).log2() - (1.0 / p_t_given_s).log2());
            if let Some(v) = values.get_mut(&t) {
                *v += term;
            }
        }

        Ok(Self { target, values })
    }

    /// I_spec(t; S) for a realized target code, `None` for unobserved codes.
    pub fn value(&self, t: i32) -> Option<f64> {
        self.values.get(&t).copied()
    }

    pub fn target_distribution(&self) -> &EmpiricalDistribution {
        &self.target
    }

    /// (target code, specific information) for every realized target value.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values.iter().map(|(&t, &v)| (t, v))
    }
}

impl GlobalValue for SpecificInformation {
    fn global_value(&self) -> f64 {
        self.values
            .iter()
            .map(|(t, v)| self.target.dist[t] * v)
            .sum()
    }
}
