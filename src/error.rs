// src/error.rs

//! Error types for shape validation.

use thiserror::Error;

/// Structural problems reported by [`Shape::validate`](crate::shape::Shape::validate).
///
/// Indices are zero-based positions in `Shape::contours` and `Contour::edges`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("contour {contour}: edge {edge} has a non-finite coordinate")]
    NonFiniteCoordinate { contour: usize, edge: usize },

    #[error("contour {contour}: edge {edge} has zero length")]
    DegenerateEdge { contour: usize, edge: usize },

    #[error("contour {contour}: edge {edge} does not end where the next edge starts")]
    DisconnectedEdges { contour: usize, edge: usize },
}
