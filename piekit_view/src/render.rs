// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-facing output.
//!
//! One [`RenderItem`] per input segment, in input order. Hidden segments are kept (flagged not
//! visible) so indices line up with the chart's input lists.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Line, Rect, Shape};
use peniko::Brush;
use piekit_layout::{ChartSpec, GradientStops, SegmentDescriptor};

use crate::gradient::{GradientDirection, wedge_brush};
use crate::label::{LabelItem, LabelStyle};

/// Everything a renderer needs to draw one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    /// Position of the segment in the input lists.
    pub index: usize,
    /// The wedge outline; used as the mask for the gradient fill.
    pub outline: BezPath,
    /// Bounds of the outline, the rectangle the gradient is stretched over.
    pub mask_bounds: Rect,
    /// Paint for the masked area.
    pub fill: Brush,
    /// Gradient stops behind `fill`, for renderers that build their own gradients.
    pub stops: GradientStops,
    /// Gradient axis in drawing coordinates.
    pub gradient_line: Line,
    /// The segment's label.
    pub label: LabelItem,
    /// Whether the wedge is painted.
    pub is_visible: bool,
}

/// Turns layout output into render items.
///
/// `descriptors` must come from [`piekit_layout::recompute`] on the same `spec`.
pub fn render_items(
    spec: &ChartSpec,
    descriptors: &[SegmentDescriptor],
    labels: &LabelStyle,
    direction: GradientDirection,
) -> Vec<RenderItem> {
    descriptors
        .iter()
        .map(|d| {
            let mask_bounds = d.outline.bounding_box();
            let gradient_line = direction.line_in(mask_bounds);
            let stops = spec.style_groups.get(d.index).cloned().unwrap_or_default();
            let weight = spec.segments.get(d.index).copied().unwrap_or(0.0);

            RenderItem {
                index: d.index,
                outline: d.outline.clone(),
                mask_bounds,
                fill: wedge_brush(&stops, gradient_line),
                stops,
                gradient_line,
                label: LabelItem {
                    anchor: d.label_anchor,
                    frame: Rect::from_origin_size(d.label_anchor, labels.frame_size),
                    text: labels.text(weight, d.fill_ratio),
                    font_size: labels.font_size,
                    color: labels.color,
                    is_visible: d.label_visible,
                    hidden: !labels.visible,
                },
                is_visible: d.is_visible(),
            }
        })
        .collect()
}
