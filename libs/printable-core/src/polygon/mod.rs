//! # Convex Polygon
//!
//! The planar footprint type shared by every hull stage. A `ConvexPolygon`
//! always holds its extreme points in counter-clockwise order without
//! duplicates or collinear middle points; all constructors go through
//! [`convex_hull`] so no other shape can be represented.
//!
//! Fewer than three points are valid values: empty means "no extent yet",
//! one point or a two-point segment are degenerate footprints.

use config::constants::EPSILON;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::ops::hull::convex_hull;

/// Convex region of the build plate, counter-clockwise.
///
/// # Example
///
/// ```rust
/// use printable_core::ConvexPolygon;
/// use glam::DVec2;
///
/// // Clockwise input with an interior point is normalized
/// let square = ConvexPolygon::from_points(&[
///     DVec2::new(-1.0, -1.0),
///     DVec2::new(-1.0, 1.0),
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(1.0, -1.0),
/// ]);
/// assert_eq!(square.len(), 4);
/// assert_eq!(square.area(), 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DVec2>", into = "Vec<DVec2>")]
pub struct ConvexPolygon {
    points: Vec<DVec2>,
}

impl ConvexPolygon {
    /// Creates an empty polygon.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates the convex hull of arbitrary points.
    pub fn from_points(points: &[DVec2]) -> Self {
        convex_hull(points)
    }

    /// Wraps points that are already a counter-clockwise hull.
    pub(crate) fn from_hull_points(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle spanning `min` to `max`.
    pub fn rectangle(min: DVec2, max: DVec2) -> Self {
        Self::from_points(&[
            DVec2::new(min.x, min.y),
            DVec2::new(max.x, min.y),
            DVec2::new(max.x, max.y),
            DVec2::new(min.x, max.y),
        ])
    }

    /// Square centered on the origin with corners at `(±half_extent, ±half_extent)`.
    pub fn square(half_extent: f64) -> Self {
        Self::rectangle(DVec2::splat(-half_extent), DVec2::splat(half_extent))
    }

    /// Returns the hull points in counter-clockwise order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the number of hull points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the edges as `(start, end)` pairs, closing the loop.
    ///
    /// A segment yields both directions, a single point yields nothing.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = if self.points.len() < 2 { 0 } else { self.points.len() };
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Axis-aligned bounds as (min, max), `None` when empty.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let (first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    /// Enclosed area; zero for degenerate polygons.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.perp_dot(b)).sum::<f64>() / 2.0
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: DVec2) -> Self {
        Self {
            points: self.points.iter().map(|p| *p + offset).collect(),
        }
    }

    /// Checks whether `point` lies inside or within `tolerance` of the boundary.
    pub fn contains(&self, point: DVec2, tolerance: f64) -> bool {
        match self.points.as_slice() {
            [] => false,
            [p] => p.distance(point) <= tolerance,
            [a, b] => distance_to_segment(point, *a, *b) <= tolerance,
            _ => self.edges().all(|(a, b)| {
                let edge = b - a;
                edge.perp_dot(point - a) >= -tolerance * edge.length()
            }),
        }
    }

    /// Separating-axis overlap test against another convex polygon.
    ///
    /// Polygons that only touch along an edge or at a corner do not overlap.
    /// Empty polygons never overlap anything.
    pub fn overlaps(&self, other: &ConvexPolygon) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let axes: Vec<DVec2> = self
            .separating_axes()
            .chain(other.separating_axes())
            .collect();
        if axes.is_empty() {
            // Two single points
            return self.points[0].distance(other.points[0]) < EPSILON;
        }

        axes.iter().all(|axis| {
            let (min_a, max_a) = self.project(*axis);
            let (min_b, max_b) = other.project(*axis);
            max_a > min_b + EPSILON && max_b > min_a + EPSILON
        })
    }

    fn separating_axes(&self) -> impl Iterator<Item = DVec2> + '_ {
        let segment = self.points.len() == 2;
        self.edges().flat_map(move |(a, b)| {
            let edge = b - a;
            let direction = segment.then_some(edge);
            std::iter::once(edge.perp()).chain(direction)
        })
    }

    fn project(&self, axis: DVec2) -> (f64, f64) {
        self.points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            let d = p.dot(axis);
            (lo.min(d), hi.max(d))
        })
    }
}

fn distance_to_segment(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let t = ((point - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

impl From<Vec<DVec2>> for ConvexPolygon {
    fn from(points: Vec<DVec2>) -> Self {
        convex_hull(&points)
    }
}

impl From<ConvexPolygon> for Vec<DVec2> {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.points
    }
}
