// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full layout pass: guard, reconcile, sweep, then one outline and anchor per segment.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::anchor::label_anchor;
use crate::chart_spec::ChartSpec;
use crate::proportion::reconcile_proportions;
use crate::sweep::{AngularSpan, angular_sweep};
use crate::wedge::{WedgeShape, WedgeSpec, fill_collapses, wedge_radius};

/// Layout output for one input segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentDescriptor {
    /// Position of the segment in the input lists.
    pub index: usize,
    /// Where the segment begins, in bookkeeping degrees (decreasing from 360).
    pub start_angle_deg: f64,
    /// Where the segment ends; equal to the next segment's `start_angle_deg`.
    pub end_angle_deg: f64,
    /// Integral share of the circle; all descriptors of a pass sum to 100.
    pub proportion_pct: f64,
    /// The input fill ratio.
    pub fill_ratio: f64,
    /// Rim radius after fill clamping and squeeze.
    pub outer_radius: f64,
    /// Which outline construction was used.
    pub shape: WedgeShape,
    /// Closed outline, already pushed out along the bisector.
    pub outline: BezPath,
    /// Top-left position for the segment's label.
    pub label_anchor: Point,
    /// Whether the wedge is painted (non-zero share, and a fill that is neither zero nor NaN).
    pub fill_visible: bool,
    /// Whether the label is shown (non-zero share).
    pub label_visible: bool,
}

impl SegmentDescriptor {
    /// The segment's angular extent.
    pub fn span(&self) -> AngularSpan {
        AngularSpan::new(self.start_angle_deg, self.end_angle_deg)
    }

    /// Whether the wedge belongs to the rendered set.
    pub fn is_visible(&self) -> bool {
        self.fill_visible
    }
}

/// Runs one full layout pass.
///
/// Returns one descriptor per input segment, in input order, or an empty vector if
/// [`ChartSpec::validate`] rejects the spec. The pass is pure: identical specs produce identical
/// output, bit for bit.
pub fn recompute(spec: &ChartSpec) -> Vec<SegmentDescriptor> {
    if spec.validate().is_err() {
        return Vec::new();
    }

    let proportions = reconcile_proportions(&spec.segments, spec.total());
    let spans = angular_sweep(&proportions);
    let center = spec.center();
    let base_radius = spec.base_radius();

    spans
        .into_iter()
        .zip(proportions)
        .zip(&spec.fill_ratios)
        .enumerate()
        .map(|(index, ((span, pct), &fill_ratio))| {
            let wedge = WedgeSpec {
                center,
                span,
                proportion_pct: pct,
                radius: wedge_radius(base_radius, fill_ratio, pct, spec.offset),
                inner_corner_radius: spec.inner_corner_radius,
                outer_corner_radius: spec.outer_corner_radius,
                offset: spec.offset,
                tolerance: spec.tolerance,
            };
            SegmentDescriptor {
                index,
                start_angle_deg: span.start_deg,
                end_angle_deg: span.end_deg,
                proportion_pct: pct,
                fill_ratio,
                outer_radius: wedge.radius,
                shape: wedge.shape(),
                outline: wedge.outline(),
                label_anchor: label_anchor(spec.bounds, span.bisector_deg()),
                fill_visible: pct != 0.0 && !fill_collapses(fill_ratio),
                label_visible: pct != 0.0,
            }
        })
        .collect()
}

/// Iterates over the descriptors whose wedge is painted.
pub fn visible_segments(
    descriptors: &[SegmentDescriptor],
) -> impl Iterator<Item = &SegmentDescriptor> + '_ {
    descriptors.iter().filter(|d| d.is_visible())
}
