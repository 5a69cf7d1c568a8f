// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer percentage shares for segment weights.
//!
//! Every segment except the last is rounded independently. The last segment takes whatever is
//! left of 100, so it absorbs all rounding slack. This is order dependent: reordering the weights
//! changes which segment absorbs the slack.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Converts weights into whole-number percentages that sum to exactly 100.
///
/// `total` must be the (positive) sum of `weights`. Leading shares are rounded half away from
/// zero. If those rounded shares already exceed 100, the excess is taken back from the segments
/// just before the last, walking backwards, so the trailing segments keep absorbing the slack.
///
/// Returns an empty vector for empty input.
pub fn reconcile_proportions(weights: &[f64], total: f64) -> Vec<f64> {
    let Some((_, leading)) = weights.split_last() else {
        return Vec::new();
    };

    let mut out: Vec<f64> = leading
        .iter()
        .map(|w| (w / total * 100.0).round().max(0.0))
        .collect();

    let mut excess = out.iter().sum::<f64>() - 100.0;
    for pct in out.iter_mut().rev() {
        if excess <= 0.0 {
            break;
        }
        let take = pct.min(excess);
        *pct -= take;
        excess -= take;
    }

    let used: f64 = out.iter().sum();
    out.push((100.0 - used).max(0.0));
    out
}
