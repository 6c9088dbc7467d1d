// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::reduce_joint_space_compact;
use crate::estimators::approaches::discrete::specific_information::SpecificInformation;
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::te_slicing::delay_split;

/// Minimum-information redundancy of two sources about a delayed target.
///
/// With the target future Y[d..N] and source pasts X1[0..N-d], X2[0..N-d]:
///
/// I_min = Σ_t p(t) min( I_spec(t; X1_past), I_spec(t; X2_past) )
///
/// over the realized support of the target future (Timme et al., 2016). It never exceeds
/// either source's mutual information I(Xi_past; Y_future). The specific information is
/// not conditioned on the target's past, so the bound does not carry over to the transfer
/// entropy: with an autocorrelated target, I_min can exceed min(TE1, TE2) and the unique
/// terms come out negative.
pub struct MinimumInformation {
    first: SpecificInformation,
    second: SpecificInformation,
}

impl MinimumInformation {
    pub fn new<'a>(
        target: &[ArrayView1<'a, i32>],
        source1: &[ArrayView1<'a, i32>],
        source2: &[ArrayView1<'a, i32>],
        delay: usize,
    ) -> Result<Self> {
        let split1 = delay_split(source1, target, delay)?;
        let split2 = delay_split(source2, target, delay)?;

        let target_codes = reduce_joint_space_compact(&split1.target_future)?;
        let s1_codes = reduce_joint_space_compact(&split1.source_past)?;
        let s2_codes = reduce_joint_space_compact(&split2.source_past)?;

        let first = SpecificInformation::from_codes(target_codes.clone(), &s1_codes)?;
        let second = SpecificInformation::from_codes(target_codes, &s2_codes)?;
        Ok(Self { first, second })
    }

    /// min(I_spec(t; X1), I_spec(t; X2)) for a realized target code.
    pub fn min_information(&self, t: i32) -> Option<f64> {
        Some(self.first.value(t)?.min(self.second.value(t)?))
    }

    pub fn specific_information(&self) -> (&SpecificInformation, &SpecificInformation) {
        (&self.first, &self.second)
    }
}

impl GlobalValue for MinimumInformation {
    fn global_value(&self) -> f64 {
        self.first
            .target_distribution()
            .dist
            .iter()
            .filter_map(|(&t, &p)| self.min_information(t).map(|i_min| p * i_min))
            .sum()
    }
}
