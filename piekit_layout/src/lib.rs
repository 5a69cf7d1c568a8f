// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment layout engine for rounded-wedge pie charts.
//!
//! Given ordered segment weights and per-segment fill ratios, the engine computes for each
//! segment:
//! - its integral share of the circle (shares always sum to 100),
//! - its angular span,
//! - a closed [`kurbo::BezPath`] outline with rounded rim and hub corners, pushed outward along
//!   its bisector to open a gap to its neighbors, and
//! - a label anchor point.
//!
//! The engine is a pure function of a [`ChartSpec`]: call [`recompute`] whenever any input
//! changes. Painting, text and touch handling are left to the caller (see `piekit_view`).
//!
//! ```
//! use piekit_layout::{ChartSpec, recompute};
//!
//! let spec = ChartSpec::new((300.0, 300.0))
//!     .with_segments([40.0, 30.0, 30.0])
//!     .with_fill_ratios([1.0, 0.6, 0.8]);
//! let segments = recompute(&spec);
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments.iter().map(|s| s.proportion_pct).sum::<f64>(), 100.0);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod anchor;
mod chart_spec;
mod engine;
#[cfg(not(feature = "std"))]
mod float;
mod proportion;
mod sweep;
mod wedge;

pub use anchor::{LABEL_RADIUS_SCALE, label_anchor};
pub use chart_spec::{ChartSpec, GradientStops, MIN_SEGMENTS, SpecError};
pub use engine::{SegmentDescriptor, recompute, visible_segments};
pub use proportion::reconcile_proportions;
pub use sweep::{AngularSpan, angular_sweep};
pub use wedge::{
    MIN_FILL_SCALE, WedgeShape, WedgeSpec, fill_collapses, screen_angle, wedge_radius,
};
