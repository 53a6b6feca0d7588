// src/signed_distance.rs

//! The `SignedDistance` value returned by every edge distance query.

use std::cmp::Ordering;

/// Signed distance from a query point to an edge, with an angular tie-breaker.
///
/// Ordering compares `|distance|` first (smaller is closer); when magnitudes are
/// equal the larger `dot` is considered closer, so "less than" always means
/// "nearer". Equality follows the same key, which means two values on opposite
/// sides of an edge at the same range and angle compare equal.
#[derive(Debug, Clone, Copy)]
pub struct SignedDistance {
    /// Negative on one side of the edge, positive on the other.
    pub distance: f64,
    /// `|cos|` of the angle between the edge tangent at the nearest point and
    /// the direction to the query point. Zero for an orthogonal hit.
    pub dot: f64,
}

impl SignedDistance {
    /// The "infinitely far" value. Loses every comparison.
    pub const INFINITE: Self = Self {
        distance: f64::INFINITY,
        dot: 1.0,
    };

    #[inline]
    pub const fn new(distance: f64, dot: f64) -> Self {
        Self { distance, dot }
    }

    /// Ordering by closeness. NaN magnitudes sort as farthest.
    pub fn closeness_cmp(&self, other: &Self) -> Ordering {
        let a = self.distance.abs();
        let b = other.distance.abs();
        match a.partial_cmp(&b) {
            Some(Ordering::Equal) => other
                .dot
                .partial_cmp(&self.dot)
                .unwrap_or(Ordering::Equal),
            Some(ord) => ord,
            None => b.is_nan().cmp(&a.is_nan()).reverse(),
        }
    }
}

impl Default for SignedDistance {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl PartialEq for SignedDistance {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for SignedDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.distance.abs().partial_cmp(&other.distance.abs())? {
            Ordering::Equal => other.dot.partial_cmp(&self.dot),
            ord => Some(ord),
        }
    }
}
