// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label anchor placement.
//!
//! Anchors live in their own reference frame: a circle of radius `0.9 * max(w, h) / 2` centered
//! at `(R, R)`, not at the chart center. Labels are positioned with their top-left corner on the
//! anchor, so this frame is what keeps them roughly over their wedge.

use kurbo::{Point, Size};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Fraction of the half-extent used as the anchor reference radius.
pub const LABEL_RADIUS_SCALE: f64 = 0.9;

/// Computes the label anchor for a segment whose bisector is `bisector_deg` (bookkeeping degrees).
///
/// The anchor is the midpoint between the reference center and the point on the reference circle
/// at the bisector.
pub fn label_anchor(bounds: Size, bisector_deg: f64) -> Point {
    let r = bounds.width.max(bounds.height) * 0.5 * LABEL_RADIUS_SCALE;
    let center = Point::new(r, r);
    let angle = bisector_deg.to_radians();
    let on_arc = Point::new(center.x + r * angle.cos(), center.y - r * angle.sin());
    center.midpoint(on_arc)
}
