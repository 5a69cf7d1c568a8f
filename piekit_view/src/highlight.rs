// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch highlighting.
//!
//! Hit testing runs against the finished outlines; the result only drives per-segment opacity.
//! None of this feeds back into layout.

use hashbrown::HashMap;
use kurbo::{Point, Shape};

use crate::render::RenderItem;

/// Opacity applied to every segment except the highlighted one.
pub const DIMMED_OPACITY: f32 = 0.3;

/// Returns the index of the first painted segment whose outline contains `point`.
pub fn hit_test(items: &[RenderItem], point: Point) -> Option<usize> {
    items
        .iter()
        .find(|item| item.is_visible && item.outline.contains(point))
        .map(|item| item.index)
}

/// Per-segment opacity, keyed by segment index.
///
/// Segments without an entry are fully opaque.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightState {
    opacity: HashMap<usize, f32>,
}

impl HighlightState {
    /// Creates a state with every segment fully opaque.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights `index` and dims the other `count - 1` segments.
    ///
    /// An `index` outside `0..count` is ignored and leaves the state unchanged.
    pub fn highlight(&mut self, index: usize, count: usize) {
        if index >= count {
            return;
        }
        self.opacity.clear();
        for i in (0..count).filter(|&i| i != index) {
            self.opacity.insert(i, DIMMED_OPACITY);
        }
    }

    /// Restores every segment to full opacity.
    pub fn clear(&mut self) {
        self.opacity.clear();
    }

    /// Applies a hit-test result: a hit highlights that segment, a miss clears the highlight.
    pub fn apply_hit(&mut self, hit: Option<usize>, count: usize) {
        match hit {
            Some(index) => self.highlight(index, count),
            None => self.clear(),
        }
    }

    /// Opacity for one segment.
    pub fn opacity(&self, index: usize) -> f32 {
        self.opacity.get(&index).copied().unwrap_or(1.0)
    }

    /// Whether any segment is currently dimmed.
    pub fn is_active(&self) -> bool {
        !self.opacity.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use kurbo::{Line, Rect};
    use peniko::{Brush, Color};
    use piekit_layout::GradientStops;

    use super::*;
    use crate::label::LabelItem;

    fn square(index: usize, bounds: Rect) -> RenderItem {
        RenderItem {
            index,
            outline: bounds.to_path(0.1),
            mask_bounds: bounds,
            fill: Brush::Solid(Color::TRANSPARENT),
            stops: GradientStops::new(),
            gradient_line: Line::new(bounds.origin(), bounds.origin()),
            label: LabelItem {
                anchor: bounds.origin(),
                frame: bounds,
                text: String::new(),
                font_size: 12.0,
                color: Color::TRANSPARENT,
                is_visible: true,
                hidden: false,
            },
            is_visible: true,
        }
    }

    #[test]
    fn overlapping_outlines_go_to_the_first_painted_item() {
        let mut items: Vec<RenderItem> = [
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rect::new(10.0, 10.0, 30.0, 30.0),
            Rect::new(5.0, 5.0, 25.0, 25.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, r)| square(i, r))
        .collect();

        let shared = Point::new(15.0, 15.0);
        assert_eq!(hit_test(&items, shared), Some(0));

        items[0].is_visible = false;
        assert_eq!(hit_test(&items, shared), Some(1));

        assert_eq!(hit_test(&items, Point::new(28.0, 28.0)), Some(1));
        assert_eq!(hit_test(&items, Point::new(40.0, 40.0)), None);
    }

    #[test]
    fn highlight_dims_everything_else() {
        let mut state = HighlightState::new();
        assert!(!state.is_active());
        state.highlight(1, 3);
        assert_eq!(state.opacity(0), DIMMED_OPACITY);
        assert_eq!(state.opacity(1), 1.0);
        assert_eq!(state.opacity(2), DIMMED_OPACITY);
        assert!(state.is_active());
    }

    #[test]
    fn out_of_range_highlight_is_ignored() {
        let mut state = HighlightState::new();
        state.highlight(3, 3);
        assert!(!state.is_active());

        state.highlight(0, 3);
        state.highlight(7, 3);
        assert_eq!(state.opacity(0), 1.0);
        assert_eq!(state.opacity(1), DIMMED_OPACITY);
    }

    #[test]
    fn a_new_hit_moves_the_highlight() {
        let mut state = HighlightState::new();
        state.apply_hit(Some(0), 3);
        state.apply_hit(Some(2), 3);
        assert_eq!(state.opacity(0), DIMMED_OPACITY);
        assert_eq!(state.opacity(2), 1.0);
    }

    #[test]
    fn a_miss_restores_full_opacity() {
        let mut state = HighlightState::new();
        state.apply_hit(Some(0), 3);
        state.apply_hit(None, 3);
        assert!(!state.is_active());
        for i in 0..3 {
            assert_eq!(state.opacity(i), 1.0);
        }
    }
}
