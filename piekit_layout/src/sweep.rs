// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular bookkeeping.
//!
//! Angles here are in degrees and run *downwards* from 360: the first segment starts at 360 and
//! each segment ends where the next one starts. Point placement flips this to `360 - angle`
//! (see the `wedge` module), which turns the decreasing sweep into a clockwise one on screen.

extern crate alloc;

use alloc::vec::Vec;

/// The angular extent of one segment, in bookkeeping degrees (`start_deg >= end_deg`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularSpan {
    /// The larger angle, where the segment begins.
    pub start_deg: f64,
    /// The smaller angle, where the segment ends and the next one begins.
    pub end_deg: f64,
}

impl AngularSpan {
    /// Creates a span from its two bounding angles.
    pub const fn new(start_deg: f64, end_deg: f64) -> Self {
        Self { start_deg, end_deg }
    }

    /// Angular width in degrees.
    pub fn width_deg(&self) -> f64 {
        self.start_deg - self.end_deg
    }

    /// The angular midpoint, in bookkeeping degrees.
    pub fn bisector_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) * 0.5
    }
}

/// Lays integral percentages out around the circle, starting at 360 and decreasing.
///
/// Each end angle is derived from the cumulative percentage rather than by repeated subtraction,
/// so a set of shares summing to 100 ends at exactly `0.0` and neighbors share their boundary
/// angle bit for bit. Zero shares still get a (zero-width) slot.
pub fn angular_sweep(proportions: &[f64]) -> Vec<AngularSpan> {
    let mut spans = Vec::with_capacity(proportions.len());
    let mut cumulative = 0.0;
    let mut start = 360.0;
    for pct in proportions {
        cumulative += pct;
        let end = (360.0 - 360.0 * cumulative / 100.0).max(0.0);
        spans.push(AngularSpan::new(start, end));
        start = end;
    }
    spans
}
