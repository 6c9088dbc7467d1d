// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayView1, s};

use crate::error::{PidError, Result};
use crate::estimators::approaches::discrete::discrete_utils::aligned_len;

/// Time-delayed views of a source and a target variable.
///
/// For series of length N and delay d:
/// - `target_future`: Y[d..N]
/// - `target_past`: Y[0..N-d]
/// - `source_past`: X[0..N-d]
///
/// All three have N-d samples and borrow the caller's data.
#[derive(Debug, Clone)]
pub struct DelaySplit<'a> {
    pub target_future: Vec<ArrayView1<'a, i32>>,
    pub target_past: Vec<ArrayView1<'a, i32>>,
    pub source_past: Vec<ArrayView1<'a, i32>>,
}

/// Check `delay` against a series length: 1 <= d <= N-1.
pub fn check_delay(delay: usize, len: usize) -> Result<()> {
    if delay == 0 {
        return Err(PidError::ZeroDelay);
    }
    if delay >= len {
        return Err(PidError::InvalidDelay { delay, len });
    }
    Ok(())
}

/// The last N-d observations of a series.
pub fn future_view(series: ArrayView1<'_, i32>, delay: usize) -> ArrayView1<'_, i32> {
    series.slice_move(s![delay..])
}

/// The first N-d observations of a series.
pub fn past_view(series: ArrayView1<'_, i32>, delay: usize) -> ArrayView1<'_, i32> {
    let n = series.len();
    series.slice_move(s![..n - delay])
}

/// Split source and target components into past/future views at `delay`.
pub fn delay_split<'a>(
    source: &[ArrayView1<'a, i32>],
    target: &[ArrayView1<'a, i32>],
    delay: usize,
) -> Result<DelaySplit<'a>> {
    let n = aligned_len(target)?;
    let n_src = aligned_len(source)?;
    if n_src != n {
        return Err(PidError::LengthMismatch {
            expected: n,
            found: n_src,
        });
    }
    check_delay(delay, n)?;

    Ok(DelaySplit {
        target_future: target.iter().map(|&y| future_view(y, delay)).collect(),
        target_past: target.iter().map(|&y| past_view(y, delay)).collect(),
        source_past: source.iter().map(|&x| past_view(x, delay)).collect(),
    })
}
