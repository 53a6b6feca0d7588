// src/equation.rs

//! Closed-form real-root finders for quadratic and cubic polynomials.
//!
//! Used by the curve distance routines (nearest point on a quadratic Bézier is a
//! cubic in the curve parameter) and by the curve bounds routines (extrema of a
//! cubic Bézier are roots of its quadratic derivative).

use std::f64::consts::PI;

/// Coefficients with magnitude below this are treated as zero.
pub const EPSILON: f64 = 1e-14;

/// Result of a polynomial root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// The polynomial is identically zero: every real number is a root.
    Infinite,
    /// Zero to three real roots. Only the first `len` entries of `values` are set.
    Real { values: [f64; 3], len: usize },
}

impl Roots {
    pub const NONE: Self = Roots::Real {
        values: [0.0; 3],
        len: 0,
    };

    fn one(x0: f64) -> Self {
        Roots::Real {
            values: [x0, 0.0, 0.0],
            len: 1,
        }
    }

    fn two(x0: f64, x1: f64) -> Self {
        Roots::Real {
            values: [x0, x1, 0.0],
            len: 2,
        }
    }

    fn three(x0: f64, x1: f64, x2: f64) -> Self {
        Roots::Real {
            values: [x0, x1, x2],
            len: 3,
        }
    }

    /// Root count with the classic sentinel: `-1` when every value is a root.
    pub fn count(&self) -> i32 {
        match self {
            Roots::Infinite => -1,
            Roots::Real { len, .. } => *len as i32,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Roots::Infinite)
    }

    /// The real roots found. Empty for [`Roots::Infinite`], which has no
    /// finite list of candidates.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Roots::Infinite => &[],
            Roots::Real { values, len } => &values[..*len],
        }
    }
}

/// Solves `a·x² + b·x + c = 0`.
///
/// Degenerates to the linear equation `b·x + c = 0` when `|a| < EPSILON`; if
/// `|b|` is also negligible the result is [`Roots::Infinite`] for `c == 0` and no
/// roots otherwise.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    if a.abs() < EPSILON {
        if b.abs() < EPSILON {
            if c == 0.0 {
                return Roots::Infinite;
            }
            return Roots::NONE;
        }
        return Roots::one(-c / b);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let root = discriminant.sqrt();
        Roots::two((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
    } else if discriminant == 0.0 {
        Roots::one(-b / (2.0 * a))
    } else {
        Roots::NONE
    }
}

/// Solves the monic cubic `x³ + a·x² + b·x + c = 0`.
fn solve_cubic_normed(a: f64, b: f64, c: f64) -> Roots {
    let a2 = a * a;
    let q = (a2 - 3.0 * b) / 9.0;
    let r = (a * (2.0 * a2 - 9.0 * b) + 27.0 * c) / 54.0;
    let r2 = r * r;
    let q3 = q * q * q;
    let shift = a / 3.0;
    if r2 < q3 {
        // Three real roots, trigonometric form.
        let t = (r / q3.sqrt()).clamp(-1.0, 1.0).acos();
        let m = -2.0 * q.sqrt();
        Roots::three(
            m * (t / 3.0).cos() - shift,
            m * ((t + 2.0 * PI) / 3.0).cos() - shift,
            m * ((t - 2.0 * PI) / 3.0).cos() - shift,
        )
    } else {
        // Cardano. The remaining pair is real only when its imaginary part vanishes.
        let mut big_a = -(r.abs() + (r2 - q3).sqrt()).cbrt();
        if r < 0.0 {
            big_a = -big_a;
        }
        let big_b = if big_a == 0.0 { 0.0 } else { q / big_a };
        let x0 = (big_a + big_b) - shift;
        let x1 = -0.5 * (big_a + big_b) - shift;
        let imaginary = 0.5 * 3f64.sqrt() * (big_a - big_b);
        if imaginary.abs() < EPSILON {
            Roots::two(x0, x1)
        } else {
            Roots::one(x0)
        }
    }
}

/// Solves `a·x³ + b·x² + c·x + d = 0`, falling back to [`solve_quadratic`]
/// when the leading coefficient is negligible.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Roots {
    if a.abs() < EPSILON {
        return solve_quadratic(b, c, d);
    }
    solve_cubic_normed(b / a, c / a, d / a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(roots: &Roots) -> Vec<f64> {
        let mut v = roots.as_slice().to_vec();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test_log::test]
    fn quadratic_two_distinct_roots() {
        let roots = solve_quadratic(1.0, -3.0, 2.0);
        assert_eq!(roots.count(), 2);
        assert_close(&sorted(&roots), &[1.0, 2.0]);
    }

    #[test_log::test]
    fn quadratic_double_root() {
        let roots = solve_quadratic(1.0, -2.0, 1.0);
        assert_eq!(roots.count(), 1);
        assert_close(roots.as_slice(), &[1.0]);
    }

    #[test_log::test]
    fn quadratic_no_real_roots() {
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0).count(), 0);
    }

    #[test_log::test]
    fn quadratic_degenerate_cases() {
        let all = solve_quadratic(0.0, 0.0, 0.0);
        assert!(all.is_infinite());
        assert_eq!(all.count(), -1);
        assert!(all.as_slice().is_empty());

        assert_eq!(solve_quadratic(0.0, 0.0, 5.0).count(), 0);

        let linear = solve_quadratic(0.0, 2.0, -4.0);
        assert_close(linear.as_slice(), &[2.0]);
    }

    #[test_log::test]
    fn cubic_three_real_roots() {
        // (x - 1)(x - 2)(x - 3)
        let roots = solve_cubic(1.0, -6.0, 11.0, -6.0);
        assert_eq!(roots.count(), 3);
        assert_close(&sorted(&roots), &[1.0, 2.0, 3.0]);
    }

    #[test_log::test]
    fn cubic_single_real_root() {
        // (x - 2)(x² + 1)
        let roots = solve_cubic(1.0, -2.0, 1.0, -2.0);
        assert_eq!(roots.count(), 1);
        assert_close(roots.as_slice(), &[2.0]);
    }

    #[test_log::test]
    fn cubic_scaled_leading_coefficient() {
        // 2(x + 1)(x - 1)(x - 4)
        let roots = solve_cubic(2.0, -8.0, -2.0, 8.0);
        assert_close(&sorted(&roots), &[-1.0, 1.0, 4.0]);
    }

    #[test_log::test]
    fn cubic_delegates_to_quadratic() {
        let roots = solve_cubic(0.0, 1.0, -3.0, 2.0);
        assert_close(&sorted(&roots), &[1.0, 2.0]);
        assert!(solve_cubic(0.0, 0.0, 0.0, 0.0).is_infinite());
    }
}
