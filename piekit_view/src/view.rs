// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host-side adapter that owns chart inputs and the last layout.
//!
//! Hosts change inputs through the setters, which only mark the view dirty; the next call to
//! [`PieChartView::layout`] runs a full [`recompute`] and rebuilds every render item. Layout also
//! resets the touch highlight, since the items it referred to were rebuilt.

use alloc::vec::Vec;

use kurbo::Point;
use piekit_layout::{ChartSpec, SegmentDescriptor, recompute};

use crate::gradient::GradientDirection;
use crate::highlight::{HighlightState, hit_test};
use crate::label::LabelStyle;
use crate::render::{RenderItem, render_items};

/// Outcome of forwarding a touch to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchResponse {
    /// Highlight-on-touch is disabled; nothing changed.
    Ignored,
    /// The touch landed on this segment, which is now highlighted.
    Hit(usize),
    /// The touch missed every segment; the highlight was cleared.
    Miss,
}

/// A pie chart's inputs, styling, last layout and highlight state.
#[derive(Clone, Debug)]
pub struct PieChartView {
    spec: ChartSpec,
    labels: LabelStyle,
    direction: GradientDirection,
    highlight_on_touch: bool,
    highlight: HighlightState,
    segments: Vec<SegmentDescriptor>,
    items: Vec<RenderItem>,
    needs_layout: bool,
}

impl PieChartView {
    /// Creates a view for `spec` with default label and gradient styling.
    pub fn new(spec: ChartSpec) -> Self {
        Self {
            spec,
            labels: LabelStyle::default(),
            direction: GradientDirection::default(),
            highlight_on_touch: false,
            highlight: HighlightState::new(),
            segments: Vec::new(),
            items: Vec::new(),
            needs_layout: true,
        }
    }

    /// Sets the label style.
    pub fn with_label_style(mut self, labels: LabelStyle) -> Self {
        self.set_label_style(labels);
        self
    }

    /// Sets the gradient direction.
    pub fn with_gradient_direction(mut self, direction: GradientDirection) -> Self {
        self.set_gradient_direction(direction);
        self
    }

    /// Enables or disables highlight-on-touch.
    pub fn with_highlight_on_touch(mut self, enabled: bool) -> Self {
        self.highlight_on_touch = enabled;
        self
    }

    /// The current chart inputs.
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Replaces the chart inputs.
    pub fn set_spec(&mut self, spec: ChartSpec) {
        self.spec = spec;
        self.needs_layout = true;
    }

    /// Edits the chart inputs in place, e.g. to change one segment weight.
    pub fn update_spec(&mut self, f: impl FnOnce(&mut ChartSpec)) {
        f(&mut self.spec);
        self.needs_layout = true;
    }

    /// The current label style.
    pub fn label_style(&self) -> &LabelStyle {
        &self.labels
    }

    /// Replaces the label style.
    pub fn set_label_style(&mut self, labels: LabelStyle) {
        self.labels = labels;
        self.needs_layout = true;
    }

    /// Replaces the gradient direction.
    pub fn set_gradient_direction(&mut self, direction: GradientDirection) {
        self.direction = direction;
        self.needs_layout = true;
    }

    /// Enables or disables highlight-on-touch.
    pub fn set_highlight_on_touch(&mut self, enabled: bool) {
        self.highlight_on_touch = enabled;
    }

    /// Whether inputs changed since the last layout.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Recomputes the layout if any input changed, and returns the render items.
    pub fn layout(&mut self) -> &[RenderItem] {
        if self.needs_layout {
            self.segments = recompute(&self.spec);
            self.items = render_items(&self.spec, &self.segments, &self.labels, self.direction);
            self.highlight.clear();
            self.needs_layout = false;
        }
        &self.items
    }

    /// Render items from the last layout.
    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    /// Layout descriptors from the last layout.
    pub fn segments(&self) -> &[SegmentDescriptor] {
        &self.segments
    }

    /// Handles a touch at `point` (in drawing coordinates) against the last layout.
    pub fn touch(&mut self, point: Point) -> TouchResponse {
        if !self.highlight_on_touch {
            return TouchResponse::Ignored;
        }
        let hit = hit_test(&self.items, point);
        self.highlight.apply_hit(hit, self.items.len());
        match hit {
            Some(index) => TouchResponse::Hit(index),
            None => TouchResponse::Miss,
        }
    }

    /// Highlights a segment programmatically, regardless of highlight-on-touch.
    ///
    /// Indices past the last laid-out item are ignored.
    pub fn highlight(&mut self, index: usize) {
        self.highlight.highlight(index, self.items.len());
    }

    /// The highlight state to read opacities from.
    pub fn highlight_state(&self) -> &HighlightState {
        &self.highlight
    }

    /// Opacity for one segment.
    pub fn opacity(&self, index: usize) -> f32 {
        self.highlight.opacity(index)
    }
}

impl Default for PieChartView {
    fn default() -> Self {
        Self::new(ChartSpec::default())
    }
}
