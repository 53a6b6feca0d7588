// src/edge/mod.rs

//! Edge segments: the curve pieces contours are built from.
//!
//! An [`EdgeSegment`] is a closed sum over the three supported curve kinds.
//! Each variant is a plain value carrying its control points and the
//! [`EdgeColor`] that selects which MSDF channels take it into account.
//! Per-variant geometry lives in the `linear`, `quadratic` and `cubic`
//! submodules; this module dispatches and holds the shared pseudo-distance
//! extension.

pub mod cubic;
pub mod linear;
pub mod quadratic;

pub use cubic::CubicSegment;
pub use linear::LinearSegment;
pub use quadratic::QuadraticSegment;

use crate::geometry::{Bounds, Point2, Vector2};
use crate::signed_distance::SignedDistance;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Channel mask of an edge. An MSDF channel only measures distance to
    /// edges whose colour contains that channel's bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EdgeColor: u8 {
        const BLACK   = 0;
        const RED     = 1 << 0;
        const GREEN   = 1 << 1;
        const YELLOW  = Self::RED.bits() | Self::GREEN.bits();
        const BLUE    = 1 << 2;
        const MAGENTA = Self::RED.bits() | Self::BLUE.bits();
        const CYAN    = Self::GREEN.bits() | Self::BLUE.bits();
        const WHITE   = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
    }
}

impl Default for EdgeColor {
    /// Uncoloured edges take part in every channel.
    fn default() -> Self {
        EdgeColor::WHITE
    }
}

/// A linear, quadratic or cubic Bézier edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EdgeSegment {
    Linear(LinearSegment),
    Quadratic(QuadraticSegment),
    Cubic(CubicSegment),
}

impl EdgeSegment {
    pub fn linear(p0: Point2, p1: Point2) -> Self {
        EdgeSegment::Linear(LinearSegment::new(p0, p1, EdgeColor::WHITE))
    }

    pub fn quadratic(p0: Point2, p1: Point2, p2: Point2) -> Self {
        EdgeSegment::Quadratic(QuadraticSegment::new(p0, p1, p2, EdgeColor::WHITE))
    }

    pub fn cubic(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        EdgeSegment::Cubic(CubicSegment::new(p0, p1, p2, p3, EdgeColor::WHITE))
    }

    /// Builder-style colour assignment.
    pub fn with_color(mut self, color: EdgeColor) -> Self {
        self.set_color(color);
        self
    }

    pub fn color(&self) -> EdgeColor {
        match self {
            EdgeSegment::Linear(e) => e.color,
            EdgeSegment::Quadratic(e) => e.color,
            EdgeSegment::Cubic(e) => e.color,
        }
    }

    pub fn set_color(&mut self, color: EdgeColor) {
        match self {
            EdgeSegment::Linear(e) => e.color = color,
            EdgeSegment::Quadratic(e) => e.color = color,
            EdgeSegment::Cubic(e) => e.color = color,
        }
    }

    /// Control points, start to end.
    pub fn control_points(&self) -> &[Point2] {
        match self {
            EdgeSegment::Linear(e) => &e.p,
            EdgeSegment::Quadratic(e) => &e.p,
            EdgeSegment::Cubic(e) => &e.p,
        }
    }

    pub fn start(&self) -> Point2 {
        self.control_points()[0]
    }

    pub fn end(&self) -> Point2 {
        let points = self.control_points();
        points[points.len() - 1]
    }

    /// Position at parameter `t`. Values outside `[0, 1]` extrapolate the curve.
    pub fn point(&self, t: f64) -> Point2 {
        match self {
            EdgeSegment::Linear(e) => e.point(t),
            EdgeSegment::Quadratic(e) => e.point(t),
            EdgeSegment::Cubic(e) => e.point(t),
        }
    }

    /// Unnormalized tangent at parameter `t`.
    pub fn direction(&self, t: f64) -> Vector2 {
        match self {
            EdgeSegment::Linear(e) => e.direction(t),
            EdgeSegment::Quadratic(e) => e.direction(t),
            EdgeSegment::Cubic(e) => e.direction(t),
        }
    }

    /// Signed distance from `origin` to the edge, together with the curve
    /// parameter of the nearest point. The parameter lies outside `[0, 1]`
    /// when an endpoint is nearest and the query sits beyond it.
    pub fn signed_distance(&self, origin: Point2) -> (SignedDistance, f64) {
        match self {
            EdgeSegment::Linear(e) => e.signed_distance(origin),
            EdgeSegment::Quadratic(e) => e.signed_distance(origin),
            EdgeSegment::Cubic(e) => e.signed_distance(origin),
        }
    }

    /// Tight axis-aligned bounds of the curve (not of its control polygon).
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::EMPTY;
        match self {
            EdgeSegment::Linear(e) => e.extend_bounds(&mut bounds),
            EdgeSegment::Quadratic(e) => e.extend_bounds(&mut bounds),
            EdgeSegment::Cubic(e) => e.extend_bounds(&mut bounds),
        }
        bounds
    }

    /// Relocates the start point, keeping the curve's shape as well as possible.
    pub fn move_start_point(&mut self, to: Point2) {
        match self {
            EdgeSegment::Linear(e) => e.move_start_point(to),
            EdgeSegment::Quadratic(e) => e.move_start_point(to),
            EdgeSegment::Cubic(e) => e.move_start_point(to),
        }
    }

    /// Relocates the end point, keeping the curve's shape as well as possible.
    pub fn move_end_point(&mut self, to: Point2) {
        match self {
            EdgeSegment::Linear(e) => e.move_end_point(to),
            EdgeSegment::Quadratic(e) => e.move_end_point(to),
            EdgeSegment::Cubic(e) => e.move_end_point(to),
        }
    }

    /// Three same-kind pieces covering `[0, 1/3]`, `[1/3, 2/3]` and `[2/3, 1]`.
    pub fn split_in_thirds(&self) -> [EdgeSegment; 3] {
        match self {
            EdgeSegment::Linear(e) => e.split_in_thirds().map(EdgeSegment::Linear),
            EdgeSegment::Quadratic(e) => e.split_in_thirds().map(EdgeSegment::Quadratic),
            EdgeSegment::Cubic(e) => e.split_in_thirds().map(EdgeSegment::Cubic),
        }
    }

    /// Reverses the traversal direction, keeping the same curve.
    pub fn reverse(&mut self) {
        match self {
            EdgeSegment::Linear(e) => e.p.reverse(),
            EdgeSegment::Quadratic(e) => e.p.reverse(),
            EdgeSegment::Cubic(e) => e.p.reverse(),
        }
    }

    /// True when every control point coincides, i.e. the edge has no length.
    pub fn is_degenerate(&self) -> bool {
        let points = self.control_points();
        points.iter().all(|p| *p == points[0])
    }

    /// Extends `distance` past the edge's endpoints along their tangent lines.
    ///
    /// When `param` places the nearest point before the start (or after the
    /// end) and the query lies behind (or ahead of) that endpoint along its
    /// tangent, the perpendicular distance to the tangent line replaces
    /// `distance` if it is not larger. Does nothing for `0 <= param <= 1`.
    pub fn distance_to_pseudo_distance(
        &self,
        distance: &mut SignedDistance,
        origin: Point2,
        param: f64,
    ) {
        if param < 0.0 {
            let dir = self.direction(0.0).normalize();
            let aq = origin - self.point(0.0);
            if aq.dot(dir) < 0.0 {
                let pseudo = aq.cross(dir);
                if pseudo.abs() <= distance.distance.abs() {
                    distance.distance = pseudo;
                    distance.dot = 0.0;
                }
            }
        } else if param > 1.0 {
            let dir = self.direction(1.0).normalize();
            let bq = origin - self.point(1.0);
            if bq.dot(dir) > 0.0 {
                let pseudo = bq.cross(dir);
                if pseudo.abs() <= distance.distance.abs() {
                    distance.distance = pseudo;
                    distance.dot = 0.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
