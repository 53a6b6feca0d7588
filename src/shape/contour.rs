// src/shape/contour.rs

use crate::edge::EdgeSegment;
use crate::geometry::{Bounds, Point2};
use serde::{Deserialize, Serialize};

/// Gaps between consecutive edges below this are treated as joined.
pub const JOIN_TOLERANCE: f64 = 1e-9;

/// One closed loop of edges. The last edge's end joins the first edge's start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub edges: Vec<EdgeSegment>,
}

impl Contour {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn from_edges(edges: Vec<EdgeSegment>) -> Self {
        Self { edges }
    }

    pub fn add_edge(&mut self, edge: EdgeSegment) {
        self.edges.push(edge);
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.edges
            .iter()
            .fold(Bounds::EMPTY, |bounds, edge| bounds.union(edge.bounds()))
    }

    /// Orientation of the loop: `1` for counter-clockwise (Y up), `-1` for
    /// clockwise, `0` when the enclosed area vanishes.
    pub fn winding(&self) -> i32 {
        let samples: Vec<Point2> = match self.edges.as_slice() {
            [] => return 0,
            [only] => vec![only.point(0.0), only.point(1.0 / 3.0), only.point(2.0 / 3.0)],
            [first, second] => vec![
                first.point(0.0),
                first.point(0.5),
                second.point(0.0),
                second.point(0.5),
            ],
            edges => edges.iter().map(EdgeSegment::start).collect(),
        };
        let mut previous = samples[samples.len() - 1];
        let mut area = 0.0;
        for &current in &samples {
            area += previous.cross(current);
            previous = current;
        }
        if area > 0.0 {
            1
        } else if area < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Index of the first edge whose end does not meet the next edge's start.
    pub(crate) fn first_gap(&self) -> Option<usize> {
        let n = self.edges.len();
        (0..n).find(|&i| {
            (self.edges[i].end() - self.edges[(i + 1) % n].start()).length() > JOIN_TOLERANCE
        })
    }

    /// Drops zero-length edges. Returns how many were removed.
    pub(crate) fn remove_degenerate_edges(&mut self) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.is_degenerate());
        before - self.edges.len()
    }

    /// Makes every edge run in the loop's traversal direction and snaps
    /// near-joins shut, so each edge starts exactly where its predecessor ends.
    pub(crate) fn orient_and_join(&mut self) {
        let n = self.edges.len();
        if n < 2 {
            return;
        }
        // The first edge fixes the direction; flip it if only its reverse
        // connects to the second edge.
        let (first, second) = (self.edges[0], self.edges[1]);
        let joins = |a: Point2, b: Point2| (a - b).length() <= JOIN_TOLERANCE;
        if !joins(first.end(), second.start())
            && !joins(first.end(), second.end())
            && (joins(first.start(), second.start()) || joins(first.start(), second.end()))
        {
            self.edges[0].reverse();
        }
        for i in 1..n {
            let previous_end = self.edges[i - 1].end();
            let edge = &mut self.edges[i];
            if !joins(edge.start(), previous_end) && joins(edge.end(), previous_end) {
                edge.reverse();
            }
            if edge.start() != previous_end && joins(edge.start(), previous_end) {
                edge.move_start_point(previous_end);
            }
        }
        let last_end = self.edges[n - 1].end();
        let first = &mut self.edges[0];
        if first.start() != last_end && joins(first.start(), last_end) {
            first.move_start_point(last_end);
        }
    }
}
