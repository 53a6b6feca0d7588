// src/shape/mod.rs

//! The `Shape` model: contours of edge segments, the unit of input to
//! distance-field generation.
//!
//! Lifecycle: an outline loader builds a shape by appending contours, calls
//! [`Shape::normalize`] once, and from then on the shape is only read.

pub mod contour;

pub use contour::Contour;

use crate::edge::EdgeSegment;
use crate::error::ShapeError;
use crate::geometry::Bounds;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A vector outline made of closed contours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub contours: Vec<Contour>,
    /// When set, row 0 of a generated bitmap is the top of the shape
    /// (rows are flipped relative to shape-space Y).
    #[serde(default)]
    pub inverse_y_axis: bool,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contour(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// All edges of all contours, in contour order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeSegment> + '_ {
        self.contours.iter().flat_map(|contour| contour.edges.iter())
    }

    pub fn edge_count(&self) -> usize {
        self.contours.iter().map(|contour| contour.edges.len()).sum()
    }

    pub fn bounds(&self) -> Bounds {
        self.contours
            .iter()
            .fold(Bounds::EMPTY, |bounds, contour| bounds.union(contour.bounds()))
    }

    /// Checks that every coordinate is finite, no edge has zero length, and
    /// every contour closes (each edge ends where the next one starts).
    pub fn validate(&self) -> Result<(), ShapeError> {
        for (contour_index, contour) in self.contours.iter().enumerate() {
            for (edge_index, edge) in contour.edges.iter().enumerate() {
                if !edge.control_points().iter().all(|p| p.is_finite()) {
                    warn!("Shape::validate: contour {contour_index} edge {edge_index} is not finite");
                    return Err(ShapeError::NonFiniteCoordinate {
                        contour: contour_index,
                        edge: edge_index,
                    });
                }
                if edge.is_degenerate() {
                    warn!("Shape::validate: contour {contour_index} edge {edge_index} has zero length");
                    return Err(ShapeError::DegenerateEdge {
                        contour: contour_index,
                        edge: edge_index,
                    });
                }
            }
            if let Some(edge_index) = contour.first_gap() {
                warn!("Shape::validate: contour {contour_index} is open after edge {edge_index}");
                return Err(ShapeError::DisconnectedEdges {
                    contour: contour_index,
                    edge: edge_index,
                });
            }
        }
        Ok(())
    }

    /// Canonicalizes the shape for generation. Call once, after loading.
    ///
    /// * zero-length edges are dropped;
    /// * edges are flipped where needed so each contour runs in one direction,
    ///   and start points are snapped onto their predecessor's end;
    /// * a contour made of a single edge is split into three, so that edge
    ///   colouring can give it distinct channels;
    /// * contours left without edges are dropped.
    ///
    /// Contour winding is preserved; holes keep their opposite orientation.
    pub fn normalize(&mut self) {
        for (index, contour) in self.contours.iter_mut().enumerate() {
            let removed = contour.remove_degenerate_edges();
            if removed > 0 {
                warn!("Shape::normalize: dropped {removed} zero-length edge(s) from contour {index}");
            }
            contour.orient_and_join();
            if let [only] = contour.edges.as_slice() {
                let thirds = only.split_in_thirds();
                contour.edges = thirds.to_vec();
            }
        }
        self.contours.retain(|contour| !contour.is_empty());
        debug!(
            "Shape::normalize: {} contour(s), {} edge(s)",
            self.contours.len(),
            self.edge_count()
        );
    }
}
