// src/generate/error_correction.rs

//! Repairs channel clashes in a multi-channel distance field.
//!
//! Runs in two phases. Detection reads the finished bitmap and marks every
//! pixel that clashes with one of its four axis neighbours; correction then
//! replaces each marked pixel with its channel median. Detection never sees a
//! corrected value, so the outcome does not depend on scan order.

use crate::bitmap::{Bitmap, Rgb};
use crate::geometry::Vector2;
use log::trace;
use rayon::prelude::*;

#[inline]
fn is_inside(p: Rgb) -> bool {
    u8::from(p.r > 0.5) + u8::from(p.g > 0.5) + u8::from(p.b > 0.5) >= 2
}

/// All channels strictly on the same side of the edge: nothing to repair.
#[inline]
fn is_uniform(p: Rgb) -> bool {
    (p.r > 0.5 && p.g > 0.5 && p.b > 0.5) || (p.r < 0.5 && p.g < 0.5 && p.b < 0.5)
}

/// The channel sits strictly on opposite sides of 0.5 in the two pixels.
#[inline]
fn flips(a: f32, b: f32) -> bool {
    (a > 0.5) != (b > 0.5) && (a < 0.5) != (b < 0.5)
}

/// Whether pixel `a` clashes with its neighbour `b`.
///
/// Both must agree on inside/outside while exactly two channels swap sides
/// by at least `threshold`. Of the pair, only the pixel whose remaining
/// channel is farther from 0.5 (farther from a real edge) is flagged.
pub(crate) fn pixel_clash(a: Rgb, b: Rgb, threshold: f32) -> bool {
    if is_inside(a) != is_inside(b) {
        return false;
    }
    if is_uniform(a) || is_uniform(b) {
        return false;
    }
    let (aa, ba, ab, bb, ac, bc) = if flips(a.r, b.r) {
        if flips(a.g, b.g) {
            (a.r, b.r, a.g, b.g, a.b, b.b)
        } else if flips(a.b, b.b) {
            (a.r, b.r, a.b, b.b, a.g, b.g)
        } else {
            return false;
        }
    } else if flips(a.g, b.g) && flips(a.b, b.b) {
        (a.g, b.g, a.b, b.b, a.r, b.r)
    } else {
        return false;
    };
    (aa - ba).abs() >= threshold
        && (ab - bb).abs() >= threshold
        && (ac - 0.5).abs() >= (bc - 0.5).abs()
}

/// Medianizes every pixel that clashes with an axis neighbour.
///
/// `threshold.x` applies to horizontal neighbours and `threshold.y` to
/// vertical ones, both in normalized bitmap units. Returns the number of
/// pixels corrected.
pub fn msdf_error_correction(output: &mut Bitmap<Rgb>, threshold: Vector2) -> usize {
    let (width, height) = (output.width(), output.height());
    if width == 0 || height == 0 {
        return 0;
    }
    let (tx, ty) = (threshold.x as f32, threshold.y as f32);

    let mut clashes = vec![false; width * height];
    {
        let source = &*output;
        clashes
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, flag) in row.iter_mut().enumerate() {
                    let pixel = source[(x, y)];
                    *flag = (x > 0 && pixel_clash(pixel, source[(x - 1, y)], tx))
                        || (x + 1 < width && pixel_clash(pixel, source[(x + 1, y)], tx))
                        || (y > 0 && pixel_clash(pixel, source[(x, y - 1)], ty))
                        || (y + 1 < height && pixel_clash(pixel, source[(x, y + 1)], ty));
                }
            });
    }

    let corrected = clashes.iter().filter(|&&flag| flag).count();
    trace!("msdf_error_correction: {corrected} clashing pixel(s) in {width}x{height}");
    if corrected == 0 {
        return 0;
    }

    output
        .pixels_mut()
        .par_iter_mut()
        .zip(clashes.par_iter())
        .filter(|(_, flag)| **flag)
        .for_each(|(pixel, _)| *pixel = Rgb::splat(pixel.median()));
    corrected
}
