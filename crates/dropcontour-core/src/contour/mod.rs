//! Contours, their nesting hierarchy, and the geometry computed on them.
//!
//! A [`Contour`] is only geometry: an ordered, closed sequence of pixel
//! coordinates. Nesting lives in a separate [`Hierarchy`] indexed by contour
//! position, so filters over geometry never need to touch topology.

pub mod analysis;
pub mod extract;
pub mod geometry;
pub mod hierarchy;

use serde::{Deserialize, Serialize};

pub use extract::{find_contours, ChainApproximation, RetrievalMode};
pub use geometry::{arc_length, contour_area, get_centroid, moments, Moments};
pub use hierarchy::{contour_child_finder, Hierarchy, HierarchyNode};

/// Integer pixel coordinate. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Whether a border separates a foreground region from the background
/// around it, or a hole inside a region from that region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderKind {
    #[default]
    Outer,
    Hole,
}

/// Closed pixel boundary. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    points: Vec<Point>,
    kind: BorderKind,
}

impl Contour {
    pub fn new(points: Vec<Point>, kind: BorderKind) -> Self {
        Self { points, kind }
    }

    /// Outer border from a list of `(x, y)` pairs.
    pub fn from_xy(points: &[(i32, i32)]) -> Self {
        Self::new(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            BorderKind::Outer,
        )
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn kind(&self) -> BorderKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as `[x, y]` floats, the form the ellipse fitter consumes.
    pub fn to_f64(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect()
    }

    /// Shoelace area, always non-negative.
    pub fn area(&self) -> f64 {
        contour_area(&self.points)
    }

    /// Length of the polyline; `closed` adds the last-to-first segment.
    pub fn arc_length(&self, closed: bool) -> f64 {
        arc_length(&self.points, closed)
    }
}

/// Every contour found in one image together with their nesting.
#[derive(Clone, Debug, Default)]
pub struct ContourSet {
    pub contours: Vec<Contour>,
    pub hierarchy: Hierarchy,
}

impl ContourSet {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
}
