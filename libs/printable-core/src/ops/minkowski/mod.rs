//! # Minkowski Sum
//!
//! Computes the Minkowski sum of two convex polygons.
//!
//! ## Algorithm Overview
//!
//! The Minkowski sum A ⊕ B is the set of all points a + b where a ∈ A and
//! b ∈ B. For convex polygons it is itself convex and its edges are the
//! edges of both operands sorted by angle:
//! 1. Rotate both vertex lists to start at their lowest (then leftmost) point
//! 2. Walk both edge lists at once, always advancing the edge with the
//!    smaller polar angle (both when parallel)
//! 3. Emit the running vertex sum at every step
//!
//! Operands with fewer than three vertices take the hull of all pairwise
//! sums instead, which is the same set.


use glam::DVec2;

use crate::ops::hull::convex_hull;
use crate::polygon::ConvexPolygon;

/// Computes the Minkowski sum of two convex polygons.
///
/// The result is empty when either operand is empty.
///
/// # Example
///
/// ```rust
/// use printable_core::{ops::minkowski_sum, ConvexPolygon};
///
/// // Growing a 2x2 square by a 2x2 square gives a 4x4 square
/// let grown = minkowski_sum(&ConvexPolygon::square(1.0), &ConvexPolygon::square(1.0));
/// assert_eq!(grown, ConvexPolygon::square(2.0));
/// ```
pub fn minkowski_sum(a: &ConvexPolygon, b: &ConvexPolygon) -> ConvexPolygon {
    if a.is_empty() || b.is_empty() {
        return ConvexPolygon::new();
    }
    if a.len() < 3 || b.len() < 3 {
        return pairwise_hull(a.points(), b.points());
    }

    let a = starting_at_lowest(a.points());
    let b = starting_at_lowest(b.points());
    let (n, m) = (a.len(), b.len());

    let mut sum = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        sum.push(a[i % n] + b[j % m]);

        let edge_a = a[(i + 1) % n] - a[i % n];
        let edge_b = b[(j + 1) % m] - b[j % m];
        let turn = edge_a.perp_dot(edge_b);

        if j >= m || (i < n && turn > 0.0) {
            i += 1;
        } else if i >= n || turn < 0.0 {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }

    // Parallel edges leave collinear vertices behind
    convex_hull(&sum)
}

fn pairwise_hull(a: &[DVec2], b: &[DVec2]) -> ConvexPolygon {
    let sums: Vec<DVec2> = a
        .iter()
        .flat_map(|pa| b.iter().map(move |pb| *pa + *pb))
        .collect();
    convex_hull(&sums)
}

fn starting_at_lowest(points: &[DVec2]) -> Vec<DVec2> {
    let start = points
        .iter()
        .enumerate()
        .min_by(|(_, p), (_, q)| p.y.total_cmp(&q.y).then_with(|| p.x.total_cmp(&q.x)))
        .map_or(0, |(index, _)| index);
    let mut rotated = points.to_vec();
    rotated.rotate_left(start);
    rotated
}
