// src/edge/linear.rs

use super::EdgeColor;
use crate::geometry::{mix, non_zero_sign, Bounds, Point2, Vector2};
use crate::signed_distance::SignedDistance;
use serde::{Deserialize, Serialize};

/// A straight edge from `p[0]` to `p[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearSegment {
    pub p: [Point2; 2],
    #[serde(default)]
    pub color: EdgeColor,
}

impl LinearSegment {
    pub fn new(p0: Point2, p1: Point2, color: EdgeColor) -> Self {
        Self { p: [p0, p1], color }
    }

    pub fn point(&self, t: f64) -> Point2 {
        mix(self.p[0], self.p[1], t)
    }

    pub fn direction(&self, _t: f64) -> Vector2 {
        self.p[1] - self.p[0]
    }

    pub fn signed_distance(&self, origin: Point2) -> (SignedDistance, f64) {
        let aq = origin - self.p[0];
        let ab = self.p[1] - self.p[0];
        let param = aq.dot(ab) / ab.dot(ab);
        let eq = self.p[usize::from(param > 0.5)] - origin;
        let endpoint_distance = eq.length();
        if param > 0.0 && param < 1.0 {
            let ortho_distance = ab.orthonormal(false).dot(aq);
            if ortho_distance.abs() < endpoint_distance {
                return (SignedDistance::new(ortho_distance, 0.0), param);
            }
        }
        (
            SignedDistance::new(
                non_zero_sign(aq.cross(ab)) * endpoint_distance,
                ab.normalize().dot(eq.normalize()).abs(),
            ),
            param,
        )
    }

    pub(super) fn extend_bounds(&self, bounds: &mut Bounds) {
        bounds.include_point(self.p[0]);
        bounds.include_point(self.p[1]);
    }

    pub fn move_start_point(&mut self, to: Point2) {
        self.p[0] = to;
    }

    pub fn move_end_point(&mut self, to: Point2) {
        self.p[1] = to;
    }

    pub fn split_in_thirds(&self) -> [LinearSegment; 3] {
        let a = self.point(1.0 / 3.0);
        let b = self.point(2.0 / 3.0);
        [
            Self::new(self.p[0], a, self.color),
            Self::new(a, b, self.color),
            Self::new(b, self.p[1], self.color),
        ]
    }
}
