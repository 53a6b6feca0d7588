// src/edge/tests.rs

//! Unit tests for edge geometry and distance queries.

use super::*;
use crate::geometry::Vector2;
use crate::signed_distance::SignedDistance;
use test_log::test;

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn assert_point_near(actual: Vector2, expected: Vector2, tolerance: f64) {
    assert!(
        (actual - expected).length() <= tolerance,
        "expected {expected:?}, got {actual:?}"
    );
}

/// Dense sampling reference for the unsigned distance to a curve.
fn brute_force_distance(edge: &EdgeSegment, origin: Vector2) -> f64 {
    const SAMPLES: u32 = 200_000;
    (0..=SAMPLES)
        .map(|i| (edge.point(f64::from(i) / f64::from(SAMPLES)) - origin).length())
        .fold(f64::INFINITY, f64::min)
}

// --- Linear ---

#[test]
fn linear_orthogonal_hit() {
    let edge = EdgeSegment::linear(v(0.0, 0.0), v(10.0, 0.0));
    let (distance, param) = edge.signed_distance(v(5.0, 5.0));
    assert_eq!(param, 0.5);
    assert_eq!(distance.distance.abs(), 5.0);
    // Left of a rightward edge is the negative side.
    assert!(distance.distance < 0.0);
    assert_eq!(distance.dot, 0.0);

    let (below, _) = edge.signed_distance(v(5.0, -5.0));
    assert_eq!(below.distance, 5.0);
}

#[test]
fn linear_beyond_endpoint() {
    let edge = EdgeSegment::linear(v(0.0, 0.0), v(10.0, 0.0));
    let (distance, param) = edge.signed_distance(v(13.0, 4.0));
    assert_near(param, 1.3, 1e-12);
    assert_near(distance.distance.abs(), 5.0, 1e-12);
    assert_near(distance.dot, 0.6, 1e-12);
}

#[test]
fn linear_bounds_and_split() {
    let edge = EdgeSegment::linear(v(0.0, 0.0), v(10.0, 10.0));
    assert_eq!(edge.bounds(), Bounds::new(0.0, 0.0, 10.0, 10.0));

    let [a, b, c] = edge.split_in_thirds();
    assert_eq!(a.start(), edge.start());
    assert_eq!(a.end(), b.start());
    assert_eq!(b.end(), c.start());
    assert_eq!(c.end(), edge.end());
    assert_point_near(b.point(0.5), v(5.0, 5.0), 1e-12);
}

// --- Pseudo-distance ---

#[test]
fn pseudo_distance_is_noop_inside_parameter_range() {
    let edge = EdgeSegment::linear(v(0.0, 0.0), v(10.0, 0.0));
    for param in [0.0, 0.25, 0.5, 1.0] {
        let mut distance = SignedDistance::new(-3.5, 0.7);
        edge.distance_to_pseudo_distance(&mut distance, v(4.0, 8.0), param);
        assert_eq!(distance.distance, -3.5);
        assert_eq!(distance.dot, 0.7);
    }
}

#[test]
fn pseudo_distance_extends_past_end() {
    let edge = EdgeSegment::linear(v(0.0, 0.0), v(10.0, 0.0));
    let origin = v(12.0, 3.0);
    let (mut distance, param) = edge.signed_distance(origin);
    assert!(param > 1.0);
    assert_near(distance.distance, -(13f64).sqrt(), 1e-12);

    edge.distance_to_pseudo_distance(&mut distance, origin, param);
    assert_near(distance.distance, -3.0, 1e-12);
    assert_eq!(distance.dot, 0.0);
}

#[test]
fn pseudo_distance_extends_before_start() {
    let edge = EdgeSegment::linear(v(0.0, 0.0), v(10.0, 0.0));
    let origin = v(-2.0, -1.0);
    let (mut distance, param) = edge.signed_distance(origin);
    assert!(param < 0.0);
    edge.distance_to_pseudo_distance(&mut distance, origin, param);
    assert_near(distance.distance, 1.0, 1e-12);
}

// --- Quadratic ---

fn arch() -> EdgeSegment {
    EdgeSegment::quadratic(v(0.0, 0.0), v(5.0, 10.0), v(10.0, 0.0))
}

#[test]
fn quadratic_apex_distance() {
    let edge = arch();
    assert_point_near(edge.point(0.5), v(5.0, 5.0), 1e-12);
    let (distance, param) = edge.signed_distance(v(5.0, 7.0));
    assert_near(param, 0.5, 1e-9);
    assert_near(distance.distance, -2.0, 1e-9);
    assert_eq!(distance.dot, 0.0);
}

#[test]
fn quadratic_matches_brute_force() {
    let edge = arch();
    for origin in [v(2.0, 1.0), v(8.0, 6.0), v(5.0, -3.0), v(1.0, 4.0)] {
        let (distance, _) = edge.signed_distance(origin);
        assert_near(
            distance.distance.abs(),
            brute_force_distance(&edge, origin),
            1e-4,
        );
    }
}

#[test]
fn quadratic_nearest_start_point() {
    let edge = arch();
    let (distance, param) = edge.signed_distance(v(-3.0, -4.0));
    assert!(param < 0.0);
    assert_near(distance.distance.abs(), 5.0, 1e-12);
    assert!(distance.dot > 0.9);
}

#[test]
fn quadratic_bounds_include_apex() {
    assert_eq!(arch().bounds(), Bounds::new(0.0, 0.0, 10.0, 5.0));
}

#[test]
fn quadratic_move_start_keeps_tangents() {
    let mut edge = arch();
    edge.move_start_point(v(1.0, 0.0));
    let points = edge.control_points();
    assert_eq!(points[0], v(1.0, 0.0));
    assert_near((points[1] - points[0]).cross(v(5.0, 10.0)), 0.0, 1e-9);
    assert_near((points[2] - points[1]).cross(v(5.0, -10.0)), 0.0, 1e-9);
}

#[test]
fn quadratic_move_end_keeps_tangents() {
    let mut edge = arch();
    edge.move_end_point(v(9.0, 0.0));
    let points = edge.control_points();
    assert_eq!(points[2], v(9.0, 0.0));
    assert_near((points[1] - points[0]).cross(v(5.0, 10.0)), 0.0, 1e-9);
    assert_near((points[2] - points[1]).cross(v(5.0, -10.0)), 0.0, 1e-9);
}

#[test]
fn quadratic_split_is_exact() {
    let edge = arch();
    let pieces = edge.split_in_thirds();
    for (k, piece) in pieces.iter().enumerate() {
        assert!(matches!(piece, EdgeSegment::Quadratic(_)));
        for s in [0.0, 0.3, 0.5, 1.0] {
            let t = (k as f64 + s) / 3.0;
            assert_point_near(piece.point(s), edge.point(t), 1e-12);
        }
    }
}

// --- Cubic ---

fn bump() -> EdgeSegment {
    EdgeSegment::cubic(v(0.0, 0.0), v(1.0, 2.0), v(3.0, 2.0), v(4.0, 0.0))
}

#[test]
fn cubic_straight_line() {
    let edge = EdgeSegment::cubic(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0));
    let (distance, param) = edge.signed_distance(v(1.5, 2.0));
    assert_near(param, 0.5, 1e-9);
    assert_near(distance.distance, -2.0, 1e-9);
}

#[test]
fn cubic_matches_brute_force() {
    // Handles cross over so the curve doubles back on itself.
    let hairpin = EdgeSegment::cubic(v(0.0, 0.0), v(10.0, 10.0), v(-10.0, 10.0), v(1.0, 0.0));
    let looped = EdgeSegment::cubic(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0));
    let cases = [
        (bump(), vec![v(2.0, 3.0), v(2.0, -1.0), v(0.5, 1.5), v(3.2, 0.4), v(6.0, 1.0)]),
        (
            hairpin,
            vec![v(0.5, 5.0), v(0.0, 3.0), v(2.0, 6.0), v(-1.0, 7.5), v(3.0, 1.0)],
        ),
        (looped, vec![v(5.0, 6.0), v(5.0, 2.0), v(11.0, 3.0), v(2.0, 6.5)]),
    ];
    for (edge, origins) in cases {
        for origin in origins {
            let (distance, _) = edge.signed_distance(origin);
            assert_near(
                distance.distance.abs(),
                brute_force_distance(&edge, origin),
                1e-4,
            );
        }
    }
}

#[test]
fn cubic_sign_flips_across_curve() {
    let edge = bump();
    let (above, _) = edge.signed_distance(v(2.0, 3.0));
    let (below, _) = edge.signed_distance(v(2.0, 1.0));
    assert!(above.distance < 0.0);
    assert!(below.distance > 0.0);
}

#[test]
fn cubic_bounds_use_extrema() {
    let edge = EdgeSegment::cubic(v(0.0, 0.0), v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0));
    let bounds = edge.bounds();
    assert_near(bounds.l, 0.0, 1e-12);
    assert_near(bounds.b, 0.0, 1e-12);
    assert_near(bounds.r, 10.0, 1e-12);
    assert_near(bounds.t, 7.5, 1e-12);
}

#[test]
fn cubic_split_and_move() {
    let edge = bump();
    let [a, b, c] = edge.split_in_thirds();
    assert_eq!(a.end(), b.start());
    assert_eq!(b.end(), c.start());
    assert_point_near(b.point(0.5), edge.point(0.5), 1e-12);

    let mut moved = edge;
    moved.move_start_point(v(-1.0, 0.5));
    assert_eq!(moved.control_points()[0], v(-1.0, 0.5));
    assert_eq!(moved.control_points()[1], v(0.0, 2.5));
    moved.move_end_point(v(4.0, 1.0));
    assert_eq!(moved.control_points()[2], v(3.0, 3.0));
}

#[test]
fn cubic_degenerate_handle_direction() {
    let edge = EdgeSegment::cubic(v(0.0, 0.0), v(0.0, 0.0), v(2.0, 2.0), v(4.0, 0.0));
    assert_eq!(edge.direction(0.0), v(2.0, 2.0));
}

// --- Colour and bookkeeping ---

#[test]
fn colors_and_degeneracy() {
    let edge = EdgeSegment::linear(v(0.0, 0.0), v(1.0, 0.0));
    assert_eq!(edge.color(), EdgeColor::WHITE);
    assert_eq!(EdgeColor::default(), EdgeColor::WHITE);

    let magenta = edge.with_color(EdgeColor::MAGENTA);
    assert!(magenta.color().contains(EdgeColor::RED));
    assert!(!magenta.color().contains(EdgeColor::GREEN));
    assert_eq!(EdgeColor::YELLOW | EdgeColor::BLUE, EdgeColor::WHITE);

    assert!(!edge.is_degenerate());
    assert!(EdgeSegment::quadratic(v(1.0, 1.0), v(1.0, 1.0), v(1.0, 1.0)).is_degenerate());
}
