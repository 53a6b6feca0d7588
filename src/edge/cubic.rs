// src/edge/cubic.rs

use super::EdgeColor;
use crate::equation::solve_quadratic;
use crate::geometry::{mix, non_zero_sign, Bounds, Point2, Vector2};
use crate::signed_distance::SignedDistance;
use serde::{Deserialize, Serialize};

/// Evenly spaced starting parameters for the nearest-point search are
/// `i / CUBIC_SEARCH_STARTS` for `i` in `0..=CUBIC_SEARCH_STARTS`.
///
/// Together with [`CUBIC_SEARCH_STEPS`] this keeps the nearest-point distance
/// within 1e-4 shape units of a dense brute-force search, including hairpins,
/// self-intersecting loops and near-cusps.
pub const CUBIC_SEARCH_STARTS: u32 = 8;

/// Newton refinement steps run from each starting parameter.
pub const CUBIC_SEARCH_STEPS: u32 = 6;

/// A cubic Bézier edge with control points `p[1]` and `p[2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub p: [Point2; 4],
    #[serde(default)]
    pub color: EdgeColor,
}

impl CubicSegment {
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2, color: EdgeColor) -> Self {
        Self {
            p: [p0, p1, p2, p3],
            color,
        }
    }

    pub fn point(&self, t: f64) -> Point2 {
        let p12 = mix(self.p[1], self.p[2], t);
        mix(
            mix(mix(self.p[0], self.p[1], t), p12, t),
            mix(p12, mix(self.p[2], self.p[3], t), t),
            t,
        )
    }

    pub fn direction(&self, t: f64) -> Vector2 {
        let tangent = mix(
            mix(self.p[1] - self.p[0], self.p[2] - self.p[1], t),
            mix(self.p[2] - self.p[1], self.p[3] - self.p[2], t),
            t,
        );
        if tangent.is_zero() {
            if t == 0.0 {
                return self.p[2] - self.p[0];
            }
            if t == 1.0 {
                return self.p[3] - self.p[1];
            }
        }
        tangent
    }

    /// Nearest point by bounded Newton iteration on `(P(t) - origin)·P'(t) = 0`.
    /// The closed-form quintic is too unstable to be worth solving directly.
    pub fn signed_distance(&self, origin: Point2) -> (SignedDistance, f64) {
        let qa = self.p[0] - origin;
        let ab = self.p[1] - self.p[0];
        let br = self.p[2] - self.p[1] - ab;
        let as_ = (self.p[3] - self.p[2]) - (self.p[2] - self.p[1]) - br;

        let start_dir = self.direction(0.0);
        let mut min_distance = non_zero_sign(start_dir.cross(qa)) * qa.length();
        let mut param = -qa.dot(start_dir) / start_dir.dot(start_dir);
        {
            let end_dir = self.direction(1.0);
            let bq = self.p[3] - origin;
            let distance = non_zero_sign(end_dir.cross(bq)) * bq.length();
            if distance.abs() < min_distance.abs() {
                min_distance = distance;
                param = 1.0 - bq.dot(end_dir) / end_dir.dot(end_dir);
            }
        }

        for i in 0..=CUBIC_SEARCH_STARTS {
            let mut t = f64::from(i) / f64::from(CUBIC_SEARCH_STARTS);
            let mut step = 0;
            loop {
                let qpt = self.point(t) - origin;
                let distance = non_zero_sign(self.direction(t).cross(qpt)) * qpt.length();
                if distance.abs() < min_distance.abs() {
                    min_distance = distance;
                    param = t;
                }
                if step == CUBIC_SEARCH_STEPS {
                    break;
                }
                let d1 = 3.0 * t * t * as_ + 6.0 * t * br + 3.0 * ab;
                let d2 = 6.0 * t * as_ + 6.0 * br;
                t -= qpt.dot(d1) / (d1.dot(d1) + qpt.dot(d2));
                if !(0.0..=1.0).contains(&t) {
                    break;
                }
                step += 1;
            }
        }

        let dot = if (0.0..=1.0).contains(&param) {
            0.0
        } else if param < 0.5 {
            start_dir.normalize().dot(qa.normalize()).abs()
        } else {
            let bq = self.p[3] - origin;
            self.direction(1.0).normalize().dot(bq.normalize()).abs()
        };
        (SignedDistance::new(min_distance, dot), param)
    }

    pub(super) fn extend_bounds(&self, bounds: &mut Bounds) {
        bounds.include_point(self.p[0]);
        bounds.include_point(self.p[3]);
        // Extrema are roots of the derivative, a quadratic per axis.
        let a0 = self.p[1] - self.p[0];
        let a1 = 2.0 * (self.p[2] - self.p[1] - a0);
        let a2 = self.p[3] - 3.0 * self.p[2] + 3.0 * self.p[1] - self.p[0];
        let x_roots = solve_quadratic(a2.x, a1.x, a0.x);
        let y_roots = solve_quadratic(a2.y, a1.y, a0.y);
        for &t in x_roots.as_slice().iter().chain(y_roots.as_slice()) {
            if t > 0.0 && t < 1.0 {
                bounds.include_point(self.point(t));
            }
        }
    }

    /// Moves `p[0]`, dragging the first control point along by the same offset.
    pub fn move_start_point(&mut self, to: Point2) {
        self.p[1] += to - self.p[0];
        self.p[0] = to;
    }

    /// Moves `p[3]`, dragging the second control point along by the same offset.
    pub fn move_end_point(&mut self, to: Point2) {
        self.p[2] += to - self.p[3];
        self.p[3] = to;
    }

    /// de Casteljau subdivision at `t`.
    pub fn split_at(&self, t: f64) -> (CubicSegment, CubicSegment) {
        let p01 = mix(self.p[0], self.p[1], t);
        let p12 = mix(self.p[1], self.p[2], t);
        let p23 = mix(self.p[2], self.p[3], t);
        let p012 = mix(p01, p12, t);
        let p123 = mix(p12, p23, t);
        let m = mix(p012, p123, t);
        (
            Self::new(self.p[0], p01, p012, m, self.color),
            Self::new(m, p123, p23, self.p[3], self.color),
        )
    }

    pub fn split_in_thirds(&self) -> [CubicSegment; 3] {
        let (first, rest) = self.split_at(1.0 / 3.0);
        let (second, third) = rest.split_at(0.5);
        [first, second, third]
    }
}
