// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render items, gradient fills, labels and touch highlighting for `piekit_layout` charts.
//!
//! This crate sits between the layout engine and a host renderer:
//! - [`render_items`] pairs each segment outline with its gradient brush and label.
//! - [`hit_test`] and [`HighlightState`] implement touch highlighting.
//! - [`PieChartView`] bundles inputs, styling, the last layout and highlight state, recomputing
//!   only when an input changed.
//!
//! Painting and text shaping stay with the host; labels carry unshaped strings.

#![no_std]

extern crate alloc;

mod gradient;
mod highlight;
mod label;
mod render;
mod view;

pub use gradient::{GradientDirection, wedge_brush};
pub use highlight::{DIMMED_OPACITY, HighlightState, hit_test};
pub use label::{LabelItem, LabelMode, LabelStyle};
pub use render::{RenderItem, render_items};
pub use view::{PieChartView, TouchResponse};
