// src/edge/quadratic.rs

use super::EdgeColor;
use crate::equation::solve_cubic;
use crate::geometry::{mix, non_zero_sign, Bounds, Point2, Vector2};
use crate::signed_distance::SignedDistance;
use serde::{Deserialize, Serialize};

/// A quadratic Bézier edge with control point `p[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticSegment {
    pub p: [Point2; 3],
    #[serde(default)]
    pub color: EdgeColor,
}

impl QuadraticSegment {
    pub fn new(p0: Point2, p1: Point2, p2: Point2, color: EdgeColor) -> Self {
        Self {
            p: [p0, p1, p2],
            color,
        }
    }

    pub fn point(&self, t: f64) -> Point2 {
        mix(mix(self.p[0], self.p[1], t), mix(self.p[1], self.p[2], t), t)
    }

    pub fn direction(&self, t: f64) -> Vector2 {
        let tangent = mix(self.p[1] - self.p[0], self.p[2] - self.p[1], t);
        if tangent.is_zero() {
            return self.p[2] - self.p[0];
        }
        tangent
    }

    pub fn signed_distance(&self, origin: Point2) -> (SignedDistance, f64) {
        let qa = self.p[0] - origin;
        let ab = self.p[1] - self.p[0];
        let br = self.p[2] - self.p[1] - ab;

        // d/dt |P(t) - origin|² / 2 = a·t³ + b·t² + c·t + d
        let a = br.dot(br);
        let b = 3.0 * ab.dot(br);
        let c = 2.0 * ab.dot(ab) + qa.dot(br);
        let d = qa.dot(ab);
        let roots = solve_cubic(a, b, c, d);

        let start_dir = self.direction(0.0);
        let mut min_distance = non_zero_sign(start_dir.cross(qa)) * qa.length();
        let mut param = -qa.dot(start_dir) / start_dir.dot(start_dir);
        {
            let end_dir = self.direction(1.0);
            let bq = self.p[2] - origin;
            let distance = non_zero_sign(end_dir.cross(bq)) * bq.length();
            if distance.abs() < min_distance.abs() {
                min_distance = distance;
                param = 1.0 - bq.dot(end_dir) / end_dir.dot(end_dir);
            }
        }
        for &t in roots.as_slice() {
            if t > 0.0 && t < 1.0 {
                let qe = self.p[0] + 2.0 * t * ab + t * t * br - origin;
                let distance = non_zero_sign(self.direction(t).cross(qe)) * qe.length();
                if distance.abs() <= min_distance.abs() {
                    min_distance = distance;
                    param = t;
                }
            }
        }

        let dot = if (0.0..=1.0).contains(&param) {
            0.0
        } else if param < 0.5 {
            start_dir.normalize().dot(qa.normalize()).abs()
        } else {
            let bq = self.p[2] - origin;
            self.direction(1.0).normalize().dot(bq.normalize()).abs()
        };
        (SignedDistance::new(min_distance, dot), param)
    }

    pub(super) fn extend_bounds(&self, bounds: &mut Bounds) {
        bounds.include_point(self.p[0]);
        bounds.include_point(self.p[2]);
        let bot = (self.p[1] - self.p[0]) - (self.p[2] - self.p[1]);
        if bot.x != 0.0 {
            let t = (self.p[1].x - self.p[0].x) / bot.x;
            if t > 0.0 && t < 1.0 {
                bounds.include_point(self.point(t));
            }
        }
        if bot.y != 0.0 {
            let t = (self.p[1].y - self.p[0].y) / bot.y;
            if t > 0.0 && t < 1.0 {
                bounds.include_point(self.point(t));
            }
        }
    }

    /// Moves `p[0]` and slides the control point along the end tangent line
    /// so that both tangent directions keep their orientation.
    pub fn move_start_point(&mut self, to: Point2) {
        let orig_start_dir = self.p[0] - self.p[1];
        let orig_p1 = self.p[1];
        let denominator = (self.p[0] - self.p[1]).cross(self.p[2] - self.p[1]);
        if denominator != 0.0 {
            self.p[1] += (self.p[0] - self.p[1]).cross(to - self.p[0]) / denominator
                * (self.p[2] - self.p[1]);
        }
        self.p[0] = to;
        if orig_start_dir.dot(self.p[0] - self.p[1]) < 0.0 {
            self.p[1] = orig_p1;
        }
    }

    /// Mirror of [`move_start_point`](Self::move_start_point) for `p[2]`.
    pub fn move_end_point(&mut self, to: Point2) {
        let orig_end_dir = self.p[2] - self.p[1];
        let orig_p1 = self.p[1];
        let denominator = (self.p[2] - self.p[1]).cross(self.p[0] - self.p[1]);
        if denominator != 0.0 {
            self.p[1] += (self.p[2] - self.p[1]).cross(to - self.p[2]) / denominator
                * (self.p[0] - self.p[1]);
        }
        self.p[2] = to;
        if orig_end_dir.dot(self.p[2] - self.p[1]) < 0.0 {
            self.p[1] = orig_p1;
        }
    }

    /// de Casteljau subdivision at `t`.
    pub fn split_at(&self, t: f64) -> (QuadraticSegment, QuadraticSegment) {
        let q0 = mix(self.p[0], self.p[1], t);
        let q1 = mix(self.p[1], self.p[2], t);
        let m = mix(q0, q1, t);
        (
            Self::new(self.p[0], q0, m, self.color),
            Self::new(m, q1, self.p[2], self.color),
        )
    }

    pub fn split_in_thirds(&self) -> [QuadraticSegment; 3] {
        let (first, rest) = self.split_at(1.0 / 3.0);
        let (second, third) = rest.split_at(0.5);
        [first, second, third]
    }
}
