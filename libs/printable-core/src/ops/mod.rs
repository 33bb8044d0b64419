//! # Polygon Operations
//!
//! Stateless convex-polygon algorithms used by the hull pipeline.

pub mod clip;
pub mod hull;
pub mod minkowski;

pub use clip::clip_convex;
pub use hull::convex_hull;
pub use minkowski::minkowski_sum;
