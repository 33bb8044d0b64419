//! # Printable Object
//!
//! A model placed on the build plate: shared triangle meshes, a 3×3
//! rotation/scale matrix, a planar position and the clearance shapes used to
//! grow its footprint. Every mutator ends by recomputing the derived
//! [`ObjectGeometry`], so the cached bounds and hulls are never stale.
//!
//! ## Example
//!
//! ```rust
//! use glam::{DVec2, DVec3};
//! use printable_core::{Axis, Mesh, PrintableObject};
//!
//! let mut mesh = Mesh::new();
//! mesh.add_triangle(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0), DVec3::new(0.0, 10.0, 0.0));
//!
//! let mut object = PrintableObject::new(Some("parts/bracket.stl"));
//! object.add_mesh(mesh);
//! object.set_size(20.0, Axis::X, true);
//!
//! assert_eq!(object.name(), "bracket");
//! assert!((object.size().y - 20.0).abs() < 1e-9);
//! assert!(!object.plate_margin_hull().is_empty());
//! ```

mod geometry;
mod lay_flat;

use std::path::Path;
use std::sync::Arc;

use config::constants::{ClearanceConfig, MAX_SENSIBLE_SIZE, MIN_SENSIBLE_SIZE, UNIT_RESCALE_FACTOR};
use glam::{DMat3, DVec2, DVec3};
use tracing::debug;

use crate::export::{build_vertex_index, VertexIndex};
use crate::mesh::Mesh;
use crate::polygon::ConvexPolygon;
use crate::transform::{axis_scale_matrix, axis_scales, mirror_matrix, Axis};

pub use geometry::ObjectGeometry;

/// Name used when an object has no origin file.
const UNNAMED: &str = "None";

/// A model on the build plate together with its cached placement geometry.
///
/// Cloning duplicates the transform, position, shapes and derived geometry.
/// Mesh data is shared between clones and only copied if one of them
/// rescales its meshes.
#[derive(Debug, Clone)]
pub struct PrintableObject {
    origin_filename: Option<String>,
    name: String,
    meshes: Vec<Arc<Mesh>>,
    matrix: DMat3,
    position: DVec2,
    plate_margin_shape: ConvexPolygon,
    head_shape: ConvexPolygon,
    head_min_size: DVec2,
    geometry: ObjectGeometry,
}

impl PrintableObject {
    /// Creates an empty object loaded from `origin_filename`.
    ///
    /// The name is the file name without its last extension, or `"None"`.
    pub fn new(origin_filename: Option<&str>) -> Self {
        let name = origin_filename
            .and_then(|f| Path::new(f).file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNNAMED.to_string());

        let clearance = ClearanceConfig::default();
        let mut object = Self {
            origin_filename: origin_filename.map(str::to_owned),
            name,
            meshes: Vec::new(),
            matrix: DMat3::IDENTITY,
            position: DVec2::ZERO,
            plate_margin_shape: ConvexPolygon::square(clearance.plate_margin),
            head_shape: head_polygon(&clearance),
            head_min_size: DVec2::from(clearance.head_min_size),
            geometry: ObjectGeometry::default(),
        };
        object.recompute_geometry();
        object
    }

    // =========================================================================
    // IDENTITY AND MESHES
    // =========================================================================

    /// Display name derived from the origin file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File the object was loaded from, if any.
    pub fn origin_filename(&self) -> Option<&str> {
        self.origin_filename.as_deref()
    }

    /// Appends a mesh and recomputes.
    ///
    /// Passing an `Arc<Mesh>` shares the mesh with other owners.
    pub fn add_mesh(&mut self, mesh: impl Into<Arc<Mesh>>) {
        self.meshes.push(mesh.into());
        self.recompute_geometry();
    }

    /// Meshes in insertion order.
    pub fn meshes(&self) -> &[Arc<Mesh>] {
        &self.meshes
    }

    /// Rescales meshes authored in micrometers or meters into millimeters.
    ///
    /// Objects larger than [`MAX_SENSIBLE_SIZE`] are shrunk by
    /// [`UNIT_RESCALE_FACTOR`]; objects then smaller than
    /// [`MIN_SENSIBLE_SIZE`] are grown by it. The vertex data itself changes,
    /// not the transform.
    pub fn normalize_units(&mut self) {
        if self.meshes.iter().all(|mesh| mesh.is_empty()) {
            return;
        }
        if self.geometry.size.max_element() > MAX_SENSIBLE_SIZE {
            self.rescale_meshes(1.0 / UNIT_RESCALE_FACTOR);
        }
        if self.geometry.size.max_element() < MIN_SENSIBLE_SIZE {
            self.rescale_meshes(UNIT_RESCALE_FACTOR);
        }
    }

    fn rescale_meshes(&mut self, factor: f64) {
        debug!(name = %self.name, factor, "Rescaling mesh units");
        for mesh in &mut self.meshes {
            Arc::make_mut(mesh).scale(factor);
        }
        self.recompute_geometry();
    }

    // =========================================================================
    // TRANSFORM
    // =========================================================================

    /// Current rotation/scale matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    /// Planar position on the build plate.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Moves the object on the plate.
    ///
    /// Derived geometry is object-local, so nothing is recomputed.
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    /// Composes `m` after the current transform and recomputes.
    pub fn apply_matrix(&mut self, m: DMat3) {
        self.matrix = m * self.matrix;
        self.recompute_geometry();
    }

    /// Reflects the object along `axis`.
    pub fn mirror(&mut self, axis: Axis) {
        self.apply_matrix(mirror_matrix(axis));
    }

    /// Per-axis scale of the transform.
    pub fn scale(&self) -> DVec3 {
        axis_scales(&self.matrix)
    }

    /// Scales so that the scale along `axis` becomes `value`.
    ///
    /// With `uniform` the same factor is applied to every axis.
    pub fn set_scale(&mut self, value: f64, axis: Axis, uniform: bool) {
        let factor = value / self.scale()[axis.index()];
        self.apply_axis_factor(factor, axis, uniform);
    }

    /// Scales so that the size along `axis` becomes `value`.
    pub fn set_size(&mut self, value: f64, axis: Axis, uniform: bool) {
        let factor = value / self.geometry.size[axis.index()];
        self.apply_axis_factor(factor, axis, uniform);
    }

    fn apply_axis_factor(&mut self, factor: f64, axis: Axis, uniform: bool) {
        if factor == 0.0 || !factor.is_finite() {
            debug!(?axis, factor, "Ignoring degenerate scale factor");
            return;
        }
        self.apply_matrix(axis_scale_matrix(factor, axis, uniform));
    }

    /// Removes scaling while keeping the rotation.
    pub fn reset_scale(&mut self) {
        let scale = self.scale();
        if scale.min_element() <= 0.0 {
            debug!(?scale, "Ignoring scale reset of a collapsed transform");
            return;
        }
        self.apply_matrix(DMat3::from_diagonal(scale.recip()));
    }

    /// Replaces the transform by its per-axis scale, dropping rotation.
    pub fn reset_rotation(&mut self) {
        self.matrix = DMat3::from_diagonal(self.scale());
        self.recompute_geometry();
    }

    /// Uniformly scales the object to the largest size that fits a build
    /// volume of `target`, centered on the plate, from the current position.
    pub fn scale_up_to(&mut self, target: DVec3) {
        let extent = self.geometry.max - self.geometry.min;
        let half = extent / 2.0;
        let p = self.position;

        let candidates = [
            (target.x / 2.0 - p.x) / half.x,
            (target.y / 2.0 - p.y) / half.y,
            (p.x + target.x / 2.0) / half.x,
            (p.y + target.y / 2.0) / half.y,
            target.z / extent.z,
        ];
        let factor = candidates.into_iter().fold(f64::INFINITY, f64::min);

        if !factor.is_finite() || factor <= 0.0 {
            debug!(?target, factor, "Object does not fit target volume");
            return;
        }
        self.apply_matrix(DMat3::from_diagonal(DVec3::splat(factor)));
    }

    // =========================================================================
    // CLEARANCE SHAPES
    // =========================================================================

    /// Margin kept between this object and its neighbors.
    pub fn plate_margin_shape(&self) -> &ConvexPolygon {
        &self.plate_margin_shape
    }

    /// Print head footprint relative to the nozzle.
    pub fn head_shape(&self) -> &ConvexPolygon {
        &self.head_shape
    }

    /// Half-extents of the minimum head clearance rectangle.
    pub fn head_min_size(&self) -> DVec2 {
        self.head_min_size
    }

    /// Replaces the plate margin shape and rebuilds the clearance hulls.
    pub fn set_plate_margin_shape(&mut self, shape: ConvexPolygon) {
        self.plate_margin_shape = shape;
        self.geometry
            .derive_clearance(&self.plate_margin_shape, &self.head_shape, self.head_min_size);
    }

    /// Replaces the head shape and minimum size and rebuilds the head hulls.
    pub fn set_head_shape(&mut self, shape: ConvexPolygon, min_size: DVec2) {
        self.head_shape = shape;
        self.head_min_size = min_size;
        self.geometry
            .derive_head_clearance(&self.head_shape, self.head_min_size);
    }

    /// Sets both clearance shapes from validated settings.
    pub fn apply_clearance(&mut self, clearance: &ClearanceConfig) {
        self.plate_margin_shape = ConvexPolygon::square(clearance.plate_margin);
        self.head_shape = head_polygon(clearance);
        self.head_min_size = DVec2::from(clearance.head_min_size);
        self.geometry
            .derive_clearance(&self.plate_margin_shape, &self.head_shape, self.head_min_size);
    }

    // =========================================================================
    // DERIVED GEOMETRY
    // =========================================================================

    /// Rebuilds every derived field from the transform, meshes and shapes.
    pub fn recompute_geometry(&mut self) {
        let mut geometry = ObjectGeometry::measure(&self.meshes, &self.matrix);
        geometry.derive_clearance(&self.plate_margin_shape, &self.head_shape, self.head_min_size);
        self.geometry = geometry;

        debug!(
            name = %self.name,
            meshes = self.meshes.len(),
            boundary_points = self.geometry.boundary_hull.len(),
            head_clearance_points = self.geometry.head_clearance_hull.len(),
            "Recomputed object geometry"
        );
    }

    /// All derived fields.
    pub fn geometry(&self) -> &ObjectGeometry {
        &self.geometry
    }

    /// Lowest transformed coordinates.
    pub fn bounds_min(&self) -> DVec3 {
        self.geometry.transformed_min
    }

    /// Highest transformed coordinates.
    pub fn bounds_max(&self) -> DVec3 {
        self.geometry.transformed_max
    }

    /// Lowest coordinates relative to the draw offset.
    pub fn local_min(&self) -> DVec3 {
        self.geometry.min
    }

    /// Highest coordinates relative to the draw offset.
    pub fn local_max(&self) -> DVec3 {
        self.geometry.max
    }

    pub fn size(&self) -> DVec3 {
        self.geometry.size
    }

    pub fn draw_offset(&self) -> DVec3 {
        self.geometry.draw_offset
    }

    pub fn bounding_radius(&self) -> f64 {
        self.geometry.bounding_radius
    }

    pub fn boundary_hull(&self) -> &ConvexPolygon {
        &self.geometry.boundary_hull
    }

    pub fn plate_margin_hull(&self) -> &ConvexPolygon {
        &self.geometry.plate_margin_hull
    }

    pub fn head_clearance_hull(&self) -> &ConvexPolygon {
        &self.geometry.head_clearance_hull
    }

    pub fn head_min_clearance_hull(&self) -> &ConvexPolygon {
        &self.geometry.head_min_clearance_hull
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// Whether the single-mesh export path can hold this object.
    pub fn can_store_as_single_mesh(&self) -> bool {
        self.meshes.len() < 2
    }

    /// Vertices of every mesh in plate space: transformed, centered on the
    /// draw offset and moved to the object position.
    pub fn plate_vertices(&self) -> Vec<Vec<DVec3>> {
        let shift = DVec3::new(self.position.x, self.position.y, 0.0) - self.geometry.draw_offset;
        self.meshes
            .iter()
            .map(|mesh| {
                mesh.transformed(&self.matrix)
                    .into_iter()
                    .map(|v| v + shift)
                    .collect()
            })
            .collect()
    }

    /// Merged plate-space vertex list with one index list per mesh.
    pub fn vertex_index_list(&self) -> VertexIndex {
        build_vertex_index(&self.plate_vertices())
    }
}

impl Default for PrintableObject {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Head footprint spanning the configured extents around the nozzle.
fn head_polygon(clearance: &ClearanceConfig) -> ConvexPolygon {
    ConvexPolygon::rectangle(
        DVec2::new(-clearance.head_min_x, -clearance.head_min_y),
        DVec2::new(clearance.head_max_x, clearance.head_max_y),
    )
}
