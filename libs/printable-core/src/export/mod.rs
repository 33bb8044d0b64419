//! # Vertex Index Builder
//!
//! Converts one or more triangle-soup vertex arrays into a single merged
//! vertex list plus one index list per mesh, as single-mesh export formats
//! need.
//!
//! ## Hashing
//!
//! Each vertex is bucketed by its coordinates scaled by
//! [`VERTEX_HASH_SCALE`] and truncated, packed as
//! `x | y << 10 | z << 20`. Within a bucket a vertex merges into the first
//! entry closer than [`VERTEX_MERGE_DISTANCE`]. Buckets are fixed-size, so
//! two vertices within tolerance on either side of a bucket boundary stay
//! separate, and the packed fields wrap around after 1024 buckets per axis.

use std::collections::HashMap;

use config::constants::{VERTEX_HASH_BITS, VERTEX_HASH_SCALE, VERTEX_MERGE_DISTANCE};
use glam::DVec3;
use tracing::debug;

/// Merged vertices and per-mesh indices into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexIndex {
    /// Deduplicated vertex positions.
    pub vertices: Vec<DVec3>,
    /// For each input mesh, the merged index of every input vertex.
    pub mesh_indices: Vec<Vec<u32>>,
}

impl VertexIndex {
    /// Total number of input vertices across all meshes.
    pub fn input_vertex_count(&self) -> usize {
        self.mesh_indices.iter().map(Vec::len).sum()
    }
}

/// Builds a merged vertex list from already transformed mesh vertices.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use printable_core::export::build_vertex_index;
///
/// let a = vec![DVec3::new(0.5, 0.5, 0.5), DVec3::new(1.5, 0.5, 0.5)];
/// let b = vec![DVec3::new(1.5, 0.5, 0.5), DVec3::new(2.5, 0.5, 0.5)];
/// let index = build_vertex_index(&[a, b]);
/// assert_eq!(index.vertices.len(), 3);
/// assert_eq!(index.mesh_indices, vec![vec![0, 1], vec![1, 2]]);
/// ```
pub fn build_vertex_index<V: AsRef<[DVec3]>>(meshes: &[V]) -> VertexIndex {
    let mut buckets: HashMap<i64, Vec<u32>> = HashMap::new();
    let mut vertices: Vec<DVec3> = Vec::new();
    let mut mesh_indices = Vec::with_capacity(meshes.len());

    for mesh in meshes {
        let mesh = mesh.as_ref();
        let mut indices = Vec::with_capacity(mesh.len());

        for v in mesh {
            let bucket = buckets.entry(hash_key(*v)).or_default();
            let existing = bucket
                .iter()
                .copied()
                .find(|&candidate| vertices[candidate as usize].distance(*v) < VERTEX_MERGE_DISTANCE);

            let index = match existing {
                Some(index) => index,
                None => {
                    let index = vertices.len() as u32;
                    vertices.push(*v);
                    bucket.push(index);
                    index
                }
            };
            indices.push(index);
        }
        mesh_indices.push(indices);
    }

    let index = VertexIndex {
        vertices,
        mesh_indices,
    };
    debug!(
        meshes = meshes.len(),
        input_vertices = index.input_vertex_count(),
        merged_vertices = index.vertices.len(),
        "Built export vertex index"
    );
    index
}

/// Packs truncated, scaled coordinates into one bucket key.
fn hash_key(v: DVec3) -> i64 {
    let x = (v.x * VERTEX_HASH_SCALE) as i64;
    let y = (v.y * VERTEX_HASH_SCALE) as i64;
    let z = (v.z * VERTEX_HASH_SCALE) as i64;
    x | (y << VERTEX_HASH_BITS) | (z << (2 * VERTEX_HASH_BITS))
}
