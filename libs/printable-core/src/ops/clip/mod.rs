//! # Convex Clipping
//!
//! Intersection of two convex polygons with the Sutherland–Hodgman
//! algorithm: the subject is clipped against the half-plane to the left of
//! every counter-clockwise window edge in turn.

use glam::DVec2;

use crate::ops::hull::{convex_hull, orientation};
use crate::polygon::ConvexPolygon;

/// Clips `subject` to `window`.
///
/// Returns an empty polygon when the two do not intersect or when the
/// window has no area (fewer than three vertices).
///
/// # Example
///
/// ```rust
/// use printable_core::{ops::clip_convex, ConvexPolygon};
/// use glam::DVec2;
///
/// let big = ConvexPolygon::square(5.0);
/// let window = ConvexPolygon::rectangle(DVec2::new(0.0, 0.0), DVec2::new(10.0, 2.0));
/// let clipped = clip_convex(&big, &window);
/// assert_eq!(clipped, ConvexPolygon::rectangle(DVec2::new(0.0, 0.0), DVec2::new(5.0, 2.0)));
/// ```
pub fn clip_convex(subject: &ConvexPolygon, window: &ConvexPolygon) -> ConvexPolygon {
    if subject.is_empty() || window.len() < 3 {
        return ConvexPolygon::new();
    }

    let mut output: Vec<DVec2> = subject.points().to_vec();
    for (edge_start, edge_end) in window.edges() {
        if output.is_empty() {
            break;
        }
        output = clip_to_half_plane(&output, edge_start, edge_end);
    }

    convex_hull(&output)
}

/// Keeps the part of the closed ring `ring` left of (or on) `a -> b`.
fn clip_to_half_plane(ring: &[DVec2], a: DVec2, b: DVec2) -> Vec<DVec2> {
    let mut kept = Vec::with_capacity(ring.len() + 1);
    let count = ring.len();

    for i in 0..count {
        let current = ring[i];
        let next = ring[(i + 1) % count];
        let side_current = orientation(a, b, current);
        let side_next = orientation(a, b, next);

        if side_current >= 0.0 {
            kept.push(current);
        }
        if (side_current > 0.0 && side_next < 0.0) || (side_current < 0.0 && side_next > 0.0) {
            let t = side_current / (side_current - side_next);
            kept.push(current + (next - current) * t);
        }
    }

    kept
}
