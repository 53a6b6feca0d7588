// src/generate/mod.rs

//! Distance-field generators.
//!
//! All three generators share the same per-pixel structure: the pixel centre
//! `(x + 0.5, y + 0.5)` is mapped into shape space as `p / scale - translate`,
//! every edge of the shape is measured, and the nearest distance is written as
//! `distance / range + 0.5`. Values are not clamped; quantization belongs to
//! whoever packs the bitmap.
//!
//! Rows are independent, so they are computed on the rayon pool. Each task
//! reads the shared shape and writes only its own row.

pub mod error_correction;

pub use crate::bitmap::median;
pub use error_correction::msdf_error_correction;

use std::cmp::Ordering;

use crate::bitmap::{Bitmap, Rgb};
use crate::edge::{EdgeColor, EdgeSegment};
use crate::geometry::{Point2, Vector2};
use crate::shape::Shape;
use crate::signed_distance::SignedDistance;
use log::debug;
use rayon::prelude::*;

/// Running minimum over edges, remembering which edge won and where.
#[derive(Clone, Copy)]
struct NearestEdge<'a> {
    distance: SignedDistance,
    edge: Option<&'a EdgeSegment>,
    param: f64,
}

impl<'a> NearestEdge<'a> {
    fn new() -> Self {
        Self {
            distance: SignedDistance::INFINITE,
            edge: None,
            param: 0.0,
        }
    }

    #[inline]
    fn consider(&mut self, edge: &'a EdgeSegment, distance: SignedDistance, param: f64) {
        if distance.closeness_cmp(&self.distance) == Ordering::Less {
            self.distance = distance;
            self.edge = Some(edge);
            self.param = param;
        }
    }

    /// The winning distance, extended past its edge's endpoints.
    fn pseudo_distance(mut self, origin: Point2) -> f64 {
        if let Some(edge) = self.edge {
            edge.distance_to_pseudo_distance(&mut self.distance, origin, self.param);
        }
        self.distance.distance
    }
}

/// Shape-space position of the centre of pixel `(x, y)`.
#[inline]
fn pixel_to_shape(x: usize, y: usize, scale: Vector2, translate: Vector2) -> Point2 {
    Vector2::new(x as f64 + 0.5, y as f64 + 0.5) / scale - translate
}

/// Runs `compute_row(y, row)` for every output row in parallel, where `y` is
/// the shape-space row index (flipped when `inverse_y_axis` is set).
fn for_each_row<T, F>(output: &mut Bitmap<T>, inverse_y_axis: bool, compute_row: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    let (width, height) = (output.width(), output.height());
    if width == 0 || height == 0 {
        return;
    }
    output
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, pixels)| {
            let y = if inverse_y_axis { height - row - 1 } else { row };
            compute_row(y, pixels);
        });
}

/// True signed distance field: nearest edge by [`SignedDistance`] ordering,
/// with no extension past curve endpoints.
pub fn generate_sdf(
    output: &mut Bitmap<f32>,
    shape: &Shape,
    range: f64,
    scale: Vector2,
    translate: Vector2,
) {
    debug!(
        "generate_sdf: {}x{} px, {} edges, range {range}",
        output.width(),
        output.height(),
        shape.edge_count()
    );
    for_each_row(output, shape.inverse_y_axis, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = pixel_to_shape(x, y, scale, translate);
            let mut min_distance = SignedDistance::INFINITE;
            for edge in shape.edges() {
                let (distance, _) = edge.signed_distance(p);
                if distance.closeness_cmp(&min_distance) == Ordering::Less {
                    min_distance = distance;
                }
            }
            *pixel = (min_distance.distance / range + 0.5) as f32;
        }
    });
}

/// Single-channel pseudo-distance field: like [`generate_sdf`], but the
/// nearest edge's distance is extended along its endpoint tangents.
pub fn generate_pseudo_sdf(
    output: &mut Bitmap<f32>,
    shape: &Shape,
    range: f64,
    scale: Vector2,
    translate: Vector2,
) {
    debug!(
        "generate_pseudo_sdf: {}x{} px, {} edges, range {range}",
        output.width(),
        output.height(),
        shape.edge_count()
    );
    for_each_row(output, shape.inverse_y_axis, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = pixel_to_shape(x, y, scale, translate);
            let mut nearest = NearestEdge::new();
            for edge in shape.edges() {
                let (distance, param) = edge.signed_distance(p);
                nearest.consider(edge, distance, param);
            }
            *pixel = (nearest.pseudo_distance(p) / range + 0.5) as f32;
        }
    });
}

/// Multi-channel distance field. Each channel only sees edges whose colour
/// contains it. When `edge_threshold > 0` the result is passed through
/// [`msdf_error_correction`] with `edge_threshold / (scale · range)` per axis.
pub fn generate_msdf(
    output: &mut Bitmap<Rgb>,
    shape: &Shape,
    range: f64,
    scale: Vector2,
    translate: Vector2,
    edge_threshold: f64,
) {
    debug!(
        "generate_msdf: {}x{} px, {} edges, range {range}, edge threshold {edge_threshold}",
        output.width(),
        output.height(),
        shape.edge_count()
    );
    for_each_row(output, shape.inverse_y_axis, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = pixel_to_shape(x, y, scale, translate);
            let mut r = NearestEdge::new();
            let mut g = NearestEdge::new();
            let mut b = NearestEdge::new();
            for edge in shape.edges() {
                let (distance, param) = edge.signed_distance(p);
                let color = edge.color();
                if color.contains(EdgeColor::RED) {
                    r.consider(edge, distance, param);
                }
                if color.contains(EdgeColor::GREEN) {
                    g.consider(edge, distance, param);
                }
                if color.contains(EdgeColor::BLUE) {
                    b.consider(edge, distance, param);
                }
            }
            *pixel = Rgb::new(
                (r.pseudo_distance(p) / range + 0.5) as f32,
                (g.pseudo_distance(p) / range + 0.5) as f32,
                (b.pseudo_distance(p) / range + 0.5) as f32,
            );
        }
    });

    if edge_threshold > 0.0 {
        let threshold = Vector2::new(
            edge_threshold / (scale.x * range),
            edge_threshold / (scale.y * range),
        );
        msdf_error_correction(output, threshold);
    }
}
