//! # Convex Hull (Monotone Chain)
//!
//! Computes the 2D convex hull of a point set.
//!
//! ## Algorithm
//!
//! 1. Sort points lexicographically by (x, y) and drop exact duplicates
//! 2. Build the lower chain left to right, popping every point that does not
//!    make a strict left turn
//! 3. Build the upper chain right to left the same way
//! 4. Concatenate both chains without their shared endpoints
//!
//! Turns are decided with the adaptive-precision `orient2d` predicate from
//! `robust`, so nearly collinear inputs never produce a reflex vertex.

use std::cmp::Ordering;

use glam::DVec2;
use robust::{orient2d, Coord};

use crate::polygon::ConvexPolygon;

/// Computes the convex hull of `points` in counter-clockwise order.
///
/// Interior, duplicate and collinear points are dropped. Fewer than three
/// distinct points give back those points (empty, a point or a segment).
///
/// # Example
///
/// ```rust
/// use printable_core::ops::convex_hull;
/// use glam::DVec2;
///
/// let hull = convex_hull(&[
///     DVec2::new(0.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(1.0, 0.5),
///     DVec2::new(2.0, 2.0),
///     DVec2::new(0.0, 2.0),
///     DVec2::new(1.0, 0.0),
/// ]);
/// assert_eq!(hull.len(), 4);
/// ```
pub fn convex_hull(points: &[DVec2]) -> ConvexPolygon {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| lexicographic(*a, *b));
    sorted.dedup();

    if sorted.len() < 3 {
        return ConvexPolygon::from_hull_points(sorted);
    }

    let mut lower = half_hull(sorted.iter());
    let mut upper = half_hull(sorted.iter().rev());
    lower.pop();
    upper.pop();
    lower.extend(upper);

    ConvexPolygon::from_hull_points(lower)
}

/// Signed orientation of `c` relative to the directed line `a -> b`.
///
/// Positive for a left (counter-clockwise) turn, negative for a right turn,
/// zero when collinear.
#[inline]
pub(crate) fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

fn half_hull<'a>(points: impl Iterator<Item = &'a DVec2>) -> Vec<DVec2> {
    let mut chain: Vec<DVec2> = Vec::new();
    for &point in points {
        while chain.len() >= 2 && orientation(chain[chain.len() - 2], chain[chain.len() - 1], point) <= 0.0 {
            chain.pop();
        }
        chain.push(point);
    }
    chain
}

fn lexicographic(a: DVec2, b: DVec2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
