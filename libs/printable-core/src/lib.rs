//! # Printable Core
//!
//! Placement geometry for objects on a 3D printer build plate.
//! Tracks each object's rotation/scale transform and derives the planar
//! footprint hulls a scene uses for layout and print-head collision checks.
//!
//! ## Architecture
//!
//! ```text
//! Mesh (triangle soup) ─→ PrintableObject (matrix, position, shapes)
//!                              │ recompute_geometry()
//!                              ▼
//!                         ObjectGeometry (bounds, offset, radius, hulls)
//!                              │
//!                              ├─→ ConvexPolygon::overlaps (scene layout)
//!                              └─→ export::build_vertex_index (file export)
//! ```
//!
//! ## Algorithms
//!
//! All geometry is pure Rust and single-threaded:
//! - **Convex Hull**: Andrew's monotone chain with robust orientation
//! - **Minkowski Sum**: Edge merge of convex polygons
//! - **Clipping**: Sutherland–Hodgman against a convex window
//! - **Export**: Spatial hash vertex merging
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DVec2, DVec3};
//! use printable_core::{Mesh, PrintableObject};
//!
//! let mut mesh = Mesh::new();
//! mesh.add_triangle(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0), DVec3::new(0.0, 10.0, 0.0));
//!
//! let mut left = PrintableObject::new(Some("left.stl"));
//! left.add_mesh(mesh);
//! let mut right = left.clone();
//! right.set_position(DVec2::new(40.0, 0.0));
//!
//! let a = left.plate_margin_hull().translated(left.position());
//! let b = right.plate_margin_hull().translated(right.position());
//! assert!(!a.overlaps(&b));
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod object;
pub mod ops;
pub mod polygon;
pub mod transform;

pub use error::{PlacementError, PlacementResult};
pub use mesh::Mesh;
pub use object::{ObjectGeometry, PrintableObject};
pub use polygon::ConvexPolygon;
pub use transform::Axis;
