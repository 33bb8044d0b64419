//! Geometry recompute pipeline.
//!
//! Everything an object exposes about its placed shape is derived here from
//! the transform, the meshes and the clearance shapes:
//!
//! ```text
//! meshes × matrix ─→ bounds, size, draw offset, bounding radius
//!        │
//!        └─→ rounded xy silhouette hull ─⊕ unit square─→ boundary hull
//!                                         ─⊕ plate margin─→ plate margin hull
//!                                         ─⊕ head shape──→ head clearance hull
//!                                         ─∩ min rectangle→ head min clearance hull
//! ```
//!
//! Each stage starts from the previous one, and the chain always restarts
//! from the rounded silhouette.

use std::sync::Arc;

use config::constants::{BOUNDARY_MARGIN, BOUNDING_RADIUS_DECIMALS};
use glam::{DMat3, DVec2, DVec3};
use serde::Serialize;

use crate::mesh::{bounds_of, Mesh};
use crate::ops::{clip_convex, convex_hull, minkowski_sum};
use crate::polygon::ConvexPolygon;

/// Derived placement geometry of a printable object.
///
/// `min` and `max` are relative to `draw_offset`, which centers the object
/// in x/y and puts its lowest point at z = 0. Hulls are in the same
/// offset-relative plate frame; add the object position to place them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectGeometry {
    /// Lowest transformed coordinates before the draw offset is removed.
    pub transformed_min: DVec3,
    /// Highest transformed coordinates before the draw offset is removed.
    pub transformed_max: DVec3,
    /// Lowest coordinates relative to the draw offset.
    pub min: DVec3,
    /// Highest coordinates relative to the draw offset.
    pub max: DVec3,
    /// Extent along each axis.
    pub size: DVec3,
    /// Center of the x/y bounds with z at the lowest point.
    pub draw_offset: DVec3,
    /// Largest per-mesh bounding sphere radius.
    pub bounding_radius: f64,
    /// Rounded silhouette grown by the fixed boundary margin.
    pub boundary_hull: ConvexPolygon,
    /// Boundary hull grown by the plate margin shape.
    pub plate_margin_hull: ConvexPolygon,
    /// Plate margin hull grown by the print head shape.
    pub head_clearance_hull: ConvexPolygon,
    /// Head clearance hull clipped to the minimum head rectangle.
    pub head_min_clearance_hull: ConvexPolygon,
}

impl ObjectGeometry {
    /// Runs the transform stages: bounds, radius, draw offset and boundary hull.
    ///
    /// Clearance hulls are left empty; [`derive_clearance`](Self::derive_clearance)
    /// fills them.
    pub(crate) fn measure(meshes: &[Arc<Mesh>], matrix: &DMat3) -> Self {
        let mut bounds: Option<(DVec3, DVec3)> = None;
        let mut bounding_radius: f64 = 0.0;
        let mut silhouette = ConvexPolygon::new();

        for mesh in meshes {
            let vertices = mesh.transformed(matrix);
            let Some((mesh_min, mesh_max)) = bounds_of(&vertices) else {
                continue;
            };

            bounds = Some(match bounds {
                Some((min, max)) => (min.min(mesh_min), max.max(mesh_max)),
                None => (mesh_min, mesh_max),
            });
            bounding_radius = bounding_radius.max(mesh_radius(&vertices, mesh_min, mesh_max));

            let mut points: Vec<DVec2> = vertices.iter().map(|v| grid_round(v.truncate())).collect();
            points.extend_from_slice(silhouette.points());
            silhouette = convex_hull(&points);
        }

        let Some((transformed_min, transformed_max)) = bounds else {
            return Self::default();
        };

        let size = transformed_max - transformed_min;
        let mut draw_offset = (transformed_min + transformed_max) / 2.0;
        draw_offset.z = transformed_min.z;

        let boundary_hull = minkowski_sum(
            &silhouette.translated(-draw_offset.truncate()),
            &ConvexPolygon::square(BOUNDARY_MARGIN),
        );

        Self {
            transformed_min,
            transformed_max,
            min: transformed_min - draw_offset,
            max: transformed_max - draw_offset,
            size,
            draw_offset,
            bounding_radius,
            boundary_hull,
            ..Self::default()
        }
    }

    /// Grows the boundary hull into the plate margin and head hulls.
    pub(crate) fn derive_clearance(
        &mut self,
        plate_margin_shape: &ConvexPolygon,
        head_shape: &ConvexPolygon,
        head_min_size: DVec2,
    ) {
        self.plate_margin_hull = minkowski_sum(&self.boundary_hull, plate_margin_shape);
        self.derive_head_clearance(head_shape, head_min_size);
    }

    /// Grows the plate margin hull by the head and clips the minimum hull.
    pub(crate) fn derive_head_clearance(&mut self, head_shape: &ConvexPolygon, head_min_size: DVec2) {
        self.head_clearance_hull = minkowski_sum(&self.plate_margin_hull, head_shape);
        self.head_min_clearance_hull = match self.plate_margin_hull.bounds() {
            Some((min, max)) => {
                let window = ConvexPolygon::rectangle(min - head_min_size, max + head_min_size);
                clip_convex(&self.head_clearance_hull, &window)
            }
            None => ConvexPolygon::new(),
        };
    }
}

/// Radius of the sphere around the mesh's own bounds center.
fn mesh_radius(vertices: &[DVec3], min: DVec3, max: DVec3) -> f64 {
    let center = (min + max) / 2.0;
    let radius = vertices
        .iter()
        .map(|v| v.distance(center))
        .fold(0.0, f64::max);
    let scale = 10f64.powi(BOUNDING_RADIUS_DECIMALS);
    (radius * scale).round() / scale
}

/// Nearest integer grid point, ties to even.
fn grid_round(p: DVec2) -> DVec2 {
    DVec2::new(p.x.round_ties_even(), p.y.round_ties_even())
}
