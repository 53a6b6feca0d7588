// src/bitmap.rs

//! Owned row-major pixel grids written by the generators.

use std::ops::{Index, IndexMut};

/// A three-channel MSDF pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// The median channel: the value an MSDF decoder reconstructs.
    pub fn median(&self) -> f32 {
        median(self.r, self.g, self.b)
    }
}

/// Median of three values.
#[inline]
pub fn median(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).max(a.max(b).min(c))
}

/// A `width × height` grid stored row by row; `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap<T> {
    width: usize,
    height: usize,
    pixels: Vec<T>,
}

impl<T: Copy + Default> Bitmap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![T::default(); width * height],
        }
    }
}

impl<T> Bitmap<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < self.width && y < self.height {
            self.pixels.get_mut(y * self.width + x)
        } else {
            None
        }
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [T] {
        &mut self.pixels
    }
}

impl<T> Index<(usize, usize)> for Bitmap<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        &self.pixels[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Bitmap<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        &mut self.pixels[y * self.width + x]
    }
}
