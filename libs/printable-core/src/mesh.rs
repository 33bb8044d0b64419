//! # Mesh Data Structure
//!
//! Triangle-soup mesh as handed over by the model loaders. Every three
//! consecutive vertices form one triangle; vertices are not shared between
//! triangles until [`build_vertex_index`](crate::export::build_vertex_index)
//! merges them for export.

use glam::{DMat3, DVec3};

use crate::error::{PlacementError, PlacementResult};

/// A triangle mesh stored as a flat vertex list.
///
/// # Example
///
/// ```rust
/// use printable_core::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_triangle(
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates a mesh with room for `triangle_count` triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Creates a mesh from a triangle-soup vertex list.
    ///
    /// Fails when the vertex count is not a multiple of three or a
    /// coordinate is not finite.
    pub fn from_vertices(vertices: Vec<DVec3>) -> PlacementResult<Self> {
        if vertices.len() % 3 != 0 {
            return Err(PlacementError::invalid_mesh(format!(
                "{} vertices do not form whole triangles",
                vertices.len()
            )));
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PlacementError::invalid_mesh(format!(
                "vertex {index} has a non-finite coordinate"
            )));
        }
        Ok(Self { vertices })
    }

    /// Appends one triangle.
    pub fn add_triangle(&mut self, v0: DVec3, v1: DVec3, v2: DVec3) {
        self.vertices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns every vertex mapped through `matrix`.
    pub fn transformed(&self, matrix: &DMat3) -> Vec<DVec3> {
        self.vertices.iter().map(|v| *matrix * *v).collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        bounds_of(&self.vertices)
    }

    /// Multiplies every vertex by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.vertices {
            *v *= factor;
        }
    }
}

/// Axis-aligned bounds of a vertex list, `None` when empty.
pub(crate) fn bounds_of(vertices: &[DVec3]) -> Option<(DVec3, DVec3)> {
    let (first, rest) = vertices.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v))),
    )
}
