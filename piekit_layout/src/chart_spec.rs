// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout inputs for a pie chart.
//!
//! A [`ChartSpec`] is immutable for the duration of one layout pass. Hosts mutate their own copy
//! and call [`recompute`](crate::recompute) again; nothing is carried over between passes.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use peniko::Color;
use smallvec::{SmallVec, smallvec};

/// Gradient stop colors for one segment, evenly spaced along the gradient axis.
pub type GradientStops = SmallVec<[Color; 4]>;

/// The minimum number of segments (and fill ratios, and style groups) a chart needs to render.
pub const MIN_SEGMENTS: usize = 3;

/// Reasons a [`ChartSpec`] is rejected before any geometry is computed.
///
/// A rejected spec renders nothing; [`recompute`](crate::recompute) returns an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecError {
    /// Fewer than [`MIN_SEGMENTS`] segment weights.
    TooFewSegments(usize),
    /// Fewer than [`MIN_SEGMENTS`] fill ratios.
    TooFewFillRatios(usize),
    /// Fewer than [`MIN_SEGMENTS`] style groups.
    TooFewStyleGroups(usize),
    /// Some segments have no matching fill ratio.
    MissingFillRatios {
        /// Number of segment weights.
        segments: usize,
        /// Number of fill ratios supplied.
        fill_ratios: usize,
    },
    /// Some segments have no matching style group.
    MissingStyleGroups {
        /// Number of segment weights.
        segments: usize,
        /// Number of style groups supplied.
        style_groups: usize,
    },
    /// The weights sum to zero, a negative value, or NaN.
    NonPositiveTotal(f64),
    /// The curve flattening tolerance is zero, negative, or NaN.
    NonPositiveTolerance(f64),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSegments(n) => {
                write!(f, "expected at least {MIN_SEGMENTS} segments, got {n}")
            }
            Self::TooFewFillRatios(n) => {
                write!(f, "expected at least {MIN_SEGMENTS} fill ratios, got {n}")
            }
            Self::TooFewStyleGroups(n) => {
                write!(f, "expected at least {MIN_SEGMENTS} style groups, got {n}")
            }
            Self::MissingFillRatios {
                segments,
                fill_ratios,
            } => write!(f, "{segments} segments but only {fill_ratios} fill ratios"),
            Self::MissingStyleGroups {
                segments,
                style_groups,
            } => write!(f, "{segments} segments but only {style_groups} style groups"),
            Self::NonPositiveTotal(total) => {
                write!(f, "segment weights must sum to a positive value, got {total}")
            }
            Self::NonPositiveTolerance(tolerance) => {
                write!(f, "curve tolerance must be positive, got {tolerance}")
            }
        }
    }
}

impl core::error::Error for SpecError {}

/// Everything the layout engine needs to lay out one pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    /// Segment weights in drawing order (clockwise from the reference angle).
    pub segments: Vec<f64>,
    /// Per-segment radial fill, in `0..=1`.
    ///
    /// `0` collapses the wedge entirely; any other value is clamped to `0.3..=1`.
    pub fill_ratios: Vec<f64>,
    /// Per-segment gradient stops. Only the view layer reads the colors.
    pub style_groups: Vec<GradientStops>,
    /// Gap pushed between neighboring wedges, in drawing units.
    pub offset: f64,
    /// Distance from the chart center at which the hub corner of each wedge is rounded.
    pub inner_corner_radius: f64,
    /// Angle in degrees trimmed from each end of the rim arc for rounding.
    pub outer_corner_radius: f64,
    /// The drawing area. The chart is centered in it.
    pub bounds: Size,
    /// Curve flattening tolerance used when converting arcs to cubic segments.
    ///
    /// Must be positive; smaller values produce more curve segments.
    pub tolerance: f64,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            segments: alloc::vec![40.0, 30.0, 30.0],
            fill_ratios: alloc::vec![0.0, 0.0, 0.0],
            style_groups: alloc::vec![
                solid(Color::from_rgba8(255, 0, 0, 255)),
                solid(Color::from_rgba8(0, 255, 255, 255)),
                solid(Color::from_rgba8(0, 255, 0, 255)),
            ],
            offset: 5.0,
            inner_corner_radius: 10.0,
            outer_corner_radius: 5.0,
            bounds: Size::ZERO,
            tolerance: 0.1,
        }
    }
}

fn solid(color: Color) -> GradientStops {
    smallvec![color, color]
}

impl ChartSpec {
    /// Creates a spec with default styling for the given drawing area.
    pub fn new(bounds: impl Into<Size>) -> Self {
        Self {
            bounds: bounds.into(),
            ..Self::default()
        }
    }

    /// Sets the segment weights.
    pub fn with_segments(mut self, segments: impl Into<Vec<f64>>) -> Self {
        self.segments = segments.into();
        self
    }

    /// Sets the per-segment fill ratios.
    pub fn with_fill_ratios(mut self, fill_ratios: impl Into<Vec<f64>>) -> Self {
        self.fill_ratios = fill_ratios.into();
        self
    }

    /// Sets the per-segment gradient stops.
    pub fn with_style_groups(mut self, style_groups: impl Into<Vec<GradientStops>>) -> Self {
        self.style_groups = style_groups.into();
        self
    }

    /// Sets the inter-segment gap.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the hub-side and rim-side corner radii.
    pub fn with_corner_radii(mut self, inner: f64, outer: f64) -> Self {
        self.inner_corner_radius = inner;
        self.outer_corner_radius = outer;
        self
    }

    /// Sets the drawing area.
    pub fn with_bounds(mut self, bounds: impl Into<Size>) -> Self {
        self.bounds = bounds.into();
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sum of all segment weights.
    pub fn total(&self) -> f64 {
        self.segments.iter().sum()
    }

    /// Checks the preconditions for rendering anything at all.
    pub fn validate(&self) -> Result<(), SpecError> {
        let segments = self.segments.len();
        if segments < MIN_SEGMENTS {
            return Err(SpecError::TooFewSegments(segments));
        }
        if self.fill_ratios.len() < MIN_SEGMENTS {
            return Err(SpecError::TooFewFillRatios(self.fill_ratios.len()));
        }
        if self.style_groups.len() < MIN_SEGMENTS {
            return Err(SpecError::TooFewStyleGroups(self.style_groups.len()));
        }
        if self.fill_ratios.len() < segments {
            return Err(SpecError::MissingFillRatios {
                segments,
                fill_ratios: self.fill_ratios.len(),
            });
        }
        if self.style_groups.len() < segments {
            return Err(SpecError::MissingStyleGroups {
                segments,
                style_groups: self.style_groups.len(),
            });
        }
        let total = self.total();
        if total.is_nan() || total <= 0.0 {
            return Err(SpecError::NonPositiveTotal(total));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(SpecError::NonPositiveTolerance(self.tolerance));
        }
        Ok(())
    }

    /// The chart center in drawing coordinates.
    pub fn center(&self) -> kurbo::Point {
        kurbo::Point::new(self.bounds.width * 0.5, self.bounds.height * 0.5)
    }

    /// Wedge radius before fill scaling and squeeze: half the shorter side, minus two gaps.
    pub fn base_radius(&self) -> f64 {
        self.bounds.width.min(self.bounds.height) * 0.5 - 2.0 * self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ChartSpec {
        ChartSpec::new((300.0, 300.0)).with_fill_ratios([1.0, 1.0, 1.0])
    }

    #[test]
    fn default_spec_is_valid() {
        assert_eq!(spec().validate(), Ok(()));
    }

    #[test]
    fn rejects_short_lists() {
        let s = spec().with_segments([50.0, 50.0]);
        assert_eq!(s.validate(), Err(SpecError::TooFewSegments(2)));

        let s = spec().with_fill_ratios([1.0, 1.0]);
        assert_eq!(s.validate(), Err(SpecError::TooFewFillRatios(2)));

        let mut s = spec();
        s.style_groups.truncate(1);
        assert_eq!(s.validate(), Err(SpecError::TooFewStyleGroups(1)));
    }

    #[test]
    fn rejects_lists_shorter_than_segments() {
        let s = spec().with_segments([10.0, 20.0, 30.0, 40.0]);
        assert_eq!(
            s.validate(),
            Err(SpecError::MissingFillRatios {
                segments: 4,
                fill_ratios: 3
            })
        );
    }

    #[test]
    fn rejects_non_positive_and_nan_totals() {
        let s = spec().with_segments([0.0, 0.0, 0.0]);
        assert_eq!(s.validate(), Err(SpecError::NonPositiveTotal(0.0)));

        let s = spec().with_segments([f64::NAN, 1.0, 1.0]);
        assert!(
            matches!(s.validate(), Err(SpecError::NonPositiveTotal(t)) if t.is_nan()),
            "NaN total should be rejected"
        );
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let s = spec().with_tolerance(0.0);
        assert_eq!(s.validate(), Err(SpecError::NonPositiveTolerance(0.0)));

        let s = spec().with_tolerance(-0.5);
        assert_eq!(s.validate(), Err(SpecError::NonPositiveTolerance(-0.5)));

        let s = spec().with_tolerance(f64::NAN);
        assert!(
            matches!(s.validate(), Err(SpecError::NonPositiveTolerance(t)) if t.is_nan()),
            "NaN tolerance should be rejected"
        );

        assert_eq!(spec().with_tolerance(0.01).validate(), Ok(()));
    }

    #[test]
    fn base_radius_uses_shorter_side() {
        let s = ChartSpec::new((400.0, 300.0)).with_offset(5.0);
        assert_eq!(s.base_radius(), 140.0);
        assert_eq!(s.center(), kurbo::Point::new(200.0, 150.0));
    }
}
