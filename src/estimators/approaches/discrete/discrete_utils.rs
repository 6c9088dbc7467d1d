use ndarray::{Array1, ArrayView1};
use std::collections::HashMap;

use crate::error::{PidError, Result};

/// Value range up to which counting uses a dense vector instead of a hash map.
const MAX_DENSE_RANGE: i32 = 4096;

/// Empirical probability distribution of one (possibly vector-valued) discrete variable.
///
/// Every sample is mapped to an integer code; for vector-valued variables each distinct
/// row-tuple gets its own code. Probabilities are plain `count / n` over the realized
/// support, unobserved symbols have no entry at all.
#[derive(Debug, Clone)]
pub struct EmpiricalDistribution {
    /// Per-sample symbol code
    pub codes: Array1<i32>,
    /// Counts per realized code
    pub counts: HashMap<i32, usize>,
    /// Total number of observations
    pub n: usize,
    /// p(x) for each realized code
    pub dist: HashMap<i32, f64>,
}

impl EmpiricalDistribution {
    /// Build the distribution of an already encoded sequence.
    pub fn from_codes(codes: Array1<i32>) -> Self {
        let n = codes.len();
        let counts = count_frequencies(&codes.view());
        let n_f = n as f64;
        let dist = counts
            .iter()
            .map(|(&code, &cnt)| (code, cnt as f64 / n_f))
            .collect();
        Self {
            codes,
            counts,
            n,
            dist,
        }
    }

    /// Build the joint distribution of aligned component series, treating each row-tuple
    /// as one symbol.
    pub fn from_components(components: &[ArrayView1<'_, i32>]) -> Result<Self> {
        let codes = reduce_joint_space_compact(components)?;
        Ok(Self::from_codes(codes))
    }

    /// Number of distinct realized symbols.
    pub fn support_size(&self) -> usize {
        self.counts.len()
    }

    /// Probability of `code`, zero when it was never observed.
    pub fn probability(&self, code: i32) -> f64 {
        self.dist.get(&code).copied().unwrap_or(0.0)
    }

    /// Map each sample to the probability of its symbol.
    pub fn map_probs(&self) -> Array1<f64> {
        self.codes.mapv(|v| self.dist[&v])
    }
}

/// Count the occurrences of each value in a (possibly strided) view.
pub fn count_frequencies(data: &ArrayView1<'_, i32>) -> HashMap<i32, usize> {
    match data.as_slice() {
        Some(slice) => count_frequencies_slice(slice),
        None => count_frequencies_slice(&data.to_vec()),
    }
}

/// Count frequencies from a raw slice, using a dense tally for small non-negative ranges.
pub fn count_frequencies_slice(data: &[i32]) -> HashMap<i32, usize> {
    let Some((&min_v, &max_v)) = data.iter().min().zip(data.iter().max()) else {
        return HashMap::new();
    };

    if min_v >= 0 && max_v - min_v <= MAX_DENSE_RANGE {
        let mut dense = vec![0usize; (max_v - min_v) as usize + 1];
        for &v in data {
            dense[(v - min_v) as usize] += 1;
        }
        return dense
            .into_iter()
            .enumerate()
            .filter(|&(_, cnt)| cnt != 0)
            .map(|(i, cnt)| (min_v + i as i32, cnt))
            .collect();
    }

    let mut frequency_map = HashMap::new();
    for &value in data {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

/// Check that all components share one length and return it.
pub fn aligned_len(components: &[ArrayView1<'_, i32>]) -> Result<usize> {
    let first = components.first().ok_or(PidError::EmptyVariable)?;
    let expected = first.len();
    for c in &components[1..] {
        if c.len() != expected {
            return Err(PidError::LengthMismatch {
                expected,
                found: c.len(),
            });
        }
    }
    Ok(expected)
}

/// Reduce aligned component series into a single compact joint code per sample.
///
/// A single component is passed through unchanged. For several components each distinct
/// tuple is assigned the next free id in first-occurrence order, so the result is
/// deterministic.
pub fn reduce_joint_space_compact(components: &[ArrayView1<'_, i32>]) -> Result<Array1<i32>> {
    let len = aligned_len(components)?;
    if let [single] = components {
        return Ok(single.to_owned());
    }

    let mut map: HashMap<Vec<i32>, i32> = HashMap::new();
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let key: Vec<i32> = components.iter().map(|c| c[i]).collect();
        let next_id = map.len() as i32;
        out.push(*map.entry(key).or_insert(next_id));
    }
    Ok(Array1::from(out))
}
