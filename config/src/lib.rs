//! # Config Crate
//!
//! Centralized configuration constants for the printable object placement
//! core. All magic numbers and tunable parameters are defined here so the
//! geometry crates never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ClearanceConfig, LAY_FLAT_MIN_DISTANCE, VERTEX_MERGE_DISTANCE};
//!
//! // Vertices closer than this are merged on export
//! assert!(VERTEX_MERGE_DISTANCE < 0.01);
//!
//! // Lay-flat ignores vertices nearer than this to the lowest point
//! assert_eq!(LAY_FLAT_MIN_DISTANCE, 5.0);
//!
//! // Clearance settings are validated on construction
//! let clearance = ClearanceConfig::default();
//! assert!(clearance.plate_margin > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Plain Rust, usable from any crate in the workspace
//! - **Compatible Defaults**: Values match the behavior existing plate layouts rely on

pub mod constants;
