// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient fills for wedges.
//!
//! Each wedge is painted with a linear gradient stretched over the wedge's own bounding box, so
//! the gradient direction is expressed in unit coordinates of that box.

use kurbo::{Line, Point, Rect};
use peniko::{Brush, Color, Gradient};

/// Direction of a wedge's linear gradient, in unit coordinates of the wedge bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientDirection {
    /// Left edge to right edge.
    LeftRight,
    /// Right edge to left edge.
    RightLeft,
    /// Top edge to bottom edge.
    #[default]
    TopBottom,
    /// Bottom edge to top edge.
    BottomTop,
    /// Top-left corner to bottom-right corner.
    TopLeftBottomRight,
    /// Bottom-right corner to top-left corner.
    BottomRightTopLeft,
    /// Top-right corner to bottom-left corner.
    TopRightBottomLeft,
    /// Bottom-left corner to top-right corner.
    BottomLeftTopRight,
}

impl GradientDirection {
    /// Start and end points in the unit square (`(0, 0)` is top-left).
    pub fn unit_points(self) -> (Point, Point) {
        let (start, end) = match self {
            Self::LeftRight => ((0.0, 0.5), (1.0, 0.5)),
            Self::RightLeft => ((1.0, 0.5), (0.0, 0.5)),
            Self::TopBottom => ((0.5, 0.0), (0.5, 1.0)),
            Self::BottomTop => ((0.5, 1.0), (0.5, 0.0)),
            Self::TopLeftBottomRight => ((0.0, 0.0), (1.0, 1.0)),
            Self::BottomRightTopLeft => ((1.0, 1.0), (0.0, 0.0)),
            Self::TopRightBottomLeft => ((1.0, 0.0), (0.0, 1.0)),
            Self::BottomLeftTopRight => ((0.0, 1.0), (1.0, 0.0)),
        };
        (start.into(), end.into())
    }

    /// The gradient axis mapped onto `bounds`.
    pub fn line_in(self, bounds: Rect) -> Line {
        let (start, end) = self.unit_points();
        let map = |p: Point| {
            Point::new(
                bounds.x0 + p.x * bounds.width(),
                bounds.y0 + p.y * bounds.height(),
            )
        };
        Line::new(map(start), map(end))
    }
}

/// Builds the paint for one wedge.
///
/// Two or more stops become an evenly spaced linear gradient along `line`; a single stop is a
/// solid fill, and no stops at all paint nothing.
pub fn wedge_brush(stops: &[Color], line: Line) -> Brush {
    match stops {
        [] => Brush::Solid(Color::TRANSPARENT),
        [color] => Brush::Solid(*color),
        _ => Gradient::new_linear(line.p0, line.p1)
            .with_stops(stops)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn default_direction_runs_top_to_bottom() {
        let line = GradientDirection::default().line_in(Rect::new(10.0, 20.0, 110.0, 220.0));
        assert_eq!(line.p0, Point::new(60.0, 20.0));
        assert_eq!(line.p1, Point::new(60.0, 220.0));
    }

    #[test]
    fn diagonal_directions_use_corners() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 20.0);
        let line = GradientDirection::BottomLeftTopRight.line_in(bounds);
        assert_eq!(line.p0, Point::new(0.0, 20.0));
        assert_eq!(line.p1, Point::new(40.0, 0.0));
    }

    #[test]
    fn brush_depends_on_stop_count() {
        let line = Line::new((0.0, 0.0), (0.0, 10.0));
        assert_eq!(wedge_brush(&[], line), Brush::Solid(Color::TRANSPARENT));
        assert_eq!(wedge_brush(&[css::GOLD], line), Brush::Solid(css::GOLD));
        assert!(matches!(
            wedge_brush(&[css::GOLD, css::TOMATO], line),
            Brush::Gradient(_)
        ));
    }
}
