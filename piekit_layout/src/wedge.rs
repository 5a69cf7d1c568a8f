// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounded wedge outlines.
//!
//! A wedge is a pie slice whose rim corners are rounded with quadratic curves and whose hub
//! corner is pulled in to `inner_corner_radius` and rounded through the chart center. After the
//! outline is closed it is pushed outward along its bisector by the chart offset, which opens the
//! gaps between neighbors.
//!
//! Points are placed at `center + r * (cos θ, sin θ)` with `θ = 360° - angle`, where `angle` is in
//! the decreasing bookkeeping convention of the `sweep` module. In a y-down coordinate system this
//! makes increasing `θ` (and so decreasing bookkeeping angles) run clockwise.

use kurbo::{Affine, Arc, BezPath, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::sweep::AngularSpan;

/// Fill ratios above zero are clamped to at least this fraction of the base radius.
pub const MIN_FILL_SCALE: f64 = 0.3;

/// Which outline construction a wedge uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WedgeShape {
    /// Too narrow for rim rounding: straight radial edges and a plain rim arc.
    Narrow,
    /// The only non-empty segment: a single full-circle arc.
    FullCircle,
    /// Rim corners trimmed by the outer corner radius and rounded.
    Rounded,
}

/// Whether a fill ratio collapses its wedge entirely: exactly zero, or NaN.
pub fn fill_collapses(fill_ratio: f64) -> bool {
    fill_ratio == 0.0 || fill_ratio.is_nan()
}

/// Effective rim radius of a wedge.
///
/// The base radius is scaled by the fill ratio clamped to `0.3..=1` (a fill of exactly zero, or
/// NaN, collapses the wedge to zero instead), then squeezed by `offset * 3 * (1 - pct / 100)` so
/// that small segments shrink a little more. The result never goes below zero.
pub fn wedge_radius(base_radius: f64, fill_ratio: f64, proportion_pct: f64, offset: f64) -> f64 {
    let mut radius = if fill_collapses(fill_ratio) {
        0.0
    } else {
        base_radius * fill_ratio.clamp(MIN_FILL_SCALE, 1.0)
    };
    radius -= offset * 3.0 * (1.0 - proportion_pct / 100.0);
    radius.max(0.0)
}

/// Maps a bookkeeping angle (degrees) to the screen angle used for point placement (radians).
pub fn screen_angle(angle_deg: f64) -> f64 {
    (360.0 - angle_deg).to_radians()
}

fn polar(center: Point, radius: f64, theta: f64) -> Point {
    Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
}

/// Geometry inputs for a single wedge outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeSpec {
    /// Chart center, before the gap translation.
    pub center: Point,
    /// Angular extent in bookkeeping degrees.
    pub span: AngularSpan,
    /// The segment's integral share of the circle.
    pub proportion_pct: f64,
    /// Rim radius, see [`wedge_radius`].
    pub radius: f64,
    /// Hub-side rounding distance from the center.
    pub inner_corner_radius: f64,
    /// Rim-side rounding, in degrees trimmed from each end of the arc.
    pub outer_corner_radius: f64,
    /// Distance the finished outline is pushed along its bisector.
    pub offset: f64,
    /// Curve flattening tolerance for the rim arc.
    pub tolerance: f64,
}

impl WedgeSpec {
    /// Picks the outline construction.
    ///
    /// Width is compared first, so a full circle with an outer corner radius of 180° or more is
    /// still drawn as [`WedgeShape::Narrow`].
    pub fn shape(&self) -> WedgeShape {
        if self.span.width_deg() <= self.outer_corner_radius * 2.0 {
            WedgeShape::Narrow
        } else if self.proportion_pct == 100.0 {
            WedgeShape::FullCircle
        } else {
            WedgeShape::Rounded
        }
    }

    /// The translation applied to the closed outline to separate it from its neighbors.
    pub fn gap_translation(&self) -> Vec2 {
        let bisector = self.span.bisector_deg().to_radians();
        Vec2::new(bisector.cos() * self.offset, -bisector.sin() * self.offset)
    }

    /// Builds the closed, gap-translated outline.
    pub fn outline(&self) -> BezPath {
        let c = self.center;
        let r = self.radius;
        let inner = self.inner_corner_radius;
        let start = screen_angle(self.span.start_deg);
        let end = screen_angle(self.span.end_deg);

        let mut path = BezPath::new();
        path.move_to(polar(c, inner, start));

        match self.shape() {
            WedgeShape::Narrow => {
                path.line_to(polar(c, r, start));
                self.append_arc(&mut path, start, end - start);
                path.line_to(polar(c, inner, end));
                path.quad_to(c, polar(c, inner, start));
            }
            WedgeShape::FullCircle => {
                path.line_to(polar(c, r, start));
                self.append_arc(&mut path, start, end - start);
            }
            WedgeShape::Rounded => {
                // Arc length of one degree of rim, times the corner angle.
                let corner_len = core::f64::consts::TAU * r / 360.0 * self.outer_corner_radius;
                let trim = self.outer_corner_radius.to_radians();

                path.line_to(polar(c, r - corner_len, start));
                path.quad_to(polar(c, r, start), polar(c, r, start + trim));
                self.append_arc(&mut path, start + trim, end - start - 2.0 * trim);
                path.quad_to(polar(c, r, end), polar(c, r - corner_len, end));
                path.line_to(polar(c, inner, end));
                path.quad_to(c, polar(c, inner, start));
            }
        }
        path.close_path();

        path.apply_affine(Affine::translate(self.gap_translation()));
        path
    }

    fn append_arc(&self, path: &mut BezPath, start_angle: f64, sweep_angle: f64) {
        if sweep_angle <= 0.0 {
            return;
        }
        let arc = Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle,
            sweep_angle,
            x_rotation: 0.0,
        };
        path.extend(arc.append_iter(self.tolerance));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{PathEl, Shape};

    use super::*;

    const CENTER: Point = Point::new(150.0, 150.0);

    fn wedge(start_deg: f64, end_deg: f64, pct: f64) -> WedgeSpec {
        WedgeSpec {
            center: CENTER,
            span: AngularSpan::new(start_deg, end_deg),
            proportion_pct: pct,
            radius: 100.0,
            inner_corner_radius: 10.0,
            outer_corner_radius: 5.0,
            offset: 5.0,
            tolerance: 0.1,
        }
    }

    /// A point at `fraction * radius` along the wedge bisector, after the gap translation.
    fn along_bisector(w: &WedgeSpec, fraction: f64) -> Point {
        polar(
            w.center,
            w.radius * fraction,
            screen_angle(w.span.bisector_deg()),
        ) + w.gap_translation()
    }

    #[test]
    fn zero_fill_collapses_the_radius() {
        assert_eq!(wedge_radius(140.0, 0.0, 40.0, 5.0), 0.0);
        assert_eq!(wedge_radius(140.0, f64::NAN, 40.0, 5.0), 0.0);
    }

    #[test]
    fn only_zero_and_nan_fills_collapse() {
        assert!(fill_collapses(0.0));
        assert!(fill_collapses(-0.0));
        assert!(fill_collapses(f64::NAN));
        assert!(!fill_collapses(0.01));
        assert!(!fill_collapses(-1.0));
    }

    #[test]
    fn fill_is_clamped_and_squeezed() {
        // Full share, no squeeze.
        assert_eq!(wedge_radius(140.0, 1.0, 100.0, 5.0), 140.0);
        // Fill above 1 clamps to 1; 40% squeezes by 5 * 3 * 0.6 = 9.
        assert!((wedge_radius(140.0, 2.0, 40.0, 5.0) - 131.0).abs() < 1e-9);
        // Small fills clamp up to 0.3.
        assert!((wedge_radius(140.0, 0.1, 100.0, 5.0) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn radius_never_goes_negative() {
        assert_eq!(wedge_radius(140.0, 0.0, 10.0, 5.0), 0.0);
        assert_eq!(wedge_radius(-20.0, 1.0, 50.0, 5.0), 0.0);
    }

    #[test]
    fn shape_selection() {
        assert_eq!(wedge(360.0, 216.0, 40.0).shape(), WedgeShape::Rounded);
        assert_eq!(wedge(360.0, 0.0, 100.0).shape(), WedgeShape::FullCircle);
        // 10 degrees wide, rounding would need more than 2 * 5.
        assert_eq!(wedge(360.0, 350.0, 3.0).shape(), WedgeShape::Narrow);
        assert_eq!(wedge(180.0, 180.0, 0.0).shape(), WedgeShape::Narrow);

        let mut huge_corners = wedge(360.0, 0.0, 100.0);
        huge_corners.outer_corner_radius = 180.0;
        assert_eq!(huge_corners.shape(), WedgeShape::Narrow);
    }

    #[test]
    fn gap_translation_points_along_the_bisector() {
        // Bisector at 90 degrees (bookkeeping) is straight up on screen.
        let w = wedge(135.0, 45.0, 25.0);
        let t = w.gap_translation();
        assert!(t.x.abs() < 1e-9, "{t:?}");
        assert!((t.y + 5.0).abs() < 1e-9, "{t:?}");
    }

    #[test]
    fn rounded_outline_is_closed_and_contains_its_bisector() {
        let w = wedge(360.0, 216.0, 40.0);
        let path = w.outline();
        assert!(matches!(path.elements().first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
        assert!(path.contains(along_bisector(&w, 0.5)));
        assert!(path.contains(along_bisector(&w, 0.95)));
        assert!(!path.contains(along_bisector(&w, 1.05)));

        // A point on the opposite side of the chart is outside.
        let opposite = wedge(216.0, 0.0, 60.0);
        assert!(!path.contains(along_bisector(&opposite, 0.5)));
    }

    #[test]
    fn rounded_outline_stays_inside_the_rim() {
        let w = wedge(360.0, 216.0, 40.0);
        let bbox = w.outline().bounding_box();
        let t = w.gap_translation();
        // Cubic arc approximation may overshoot the true rim by up to the tolerance.
        let reach = w.radius + w.tolerance;
        assert!(bbox.x0 >= CENTER.x + t.x - reach, "{bbox:?}");
        assert!(bbox.x1 <= CENTER.x + t.x + reach, "{bbox:?}");
        assert!(bbox.y0 >= CENTER.y + t.y - reach, "{bbox:?}");
        assert!(bbox.y1 <= CENTER.y + t.y + reach, "{bbox:?}");
    }

    #[test]
    fn full_circle_covers_the_whole_disc() {
        let w = wedge(360.0, 0.0, 100.0);
        let path = w.outline();
        let bbox = path.bounding_box();
        assert!((bbox.width() - 200.0).abs() < 1e-3, "{bbox:?}");
        assert!((bbox.height() - 200.0).abs() < 1e-3, "{bbox:?}");
        let t = w.gap_translation();
        assert!(path.contains(CENTER + t + Vec2::new(0.0, 50.0)));
        assert!(path.contains(CENTER + t + Vec2::new(-50.0, -20.0)));
        // No quadratic corners in a full circle.
        assert!(
            !path.elements().iter().any(|el| matches!(el, PathEl::QuadTo(..))),
            "full circle should not round corners"
        );
    }

    #[test]
    fn narrow_outline_has_a_single_hub_corner() {
        let w = wedge(360.0, 352.8, 2.0);
        assert_eq!(w.shape(), WedgeShape::Narrow);
        let quads = w
            .outline()
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::QuadTo(..)))
            .count();
        assert_eq!(quads, 1);
    }

    #[test]
    fn outline_is_deterministic() {
        let w = wedge(216.0, 108.0, 30.0);
        assert_eq!(w.outline(), w.outline());
    }
}
