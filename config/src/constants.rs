//! # Configuration Constants
//!
//! Centralized constants for the placement core. Geometry tolerances, hull
//! margins, export hashing parameters and load-time unit heuristics are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Clearance**: Default hull margins around printable objects
//! - **Orientation**: Lay-flat heuristic thresholds
//! - **Export**: Vertex deduplication hashing
//! - **Units**: Sensible size range used after loading a model

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// CLEARANCE CONSTANTS
// =============================================================================

/// Half-extent of the fixed square added around every boundary hull.
///
/// The rounded silhouette hull is grown by the square with corners
/// `(±BOUNDARY_MARGIN, ±BOUNDARY_MARGIN)` so that rounding to the integer
/// grid never cuts into the real footprint.
pub const BOUNDARY_MARGIN: f64 = 1.0;

/// Default half-extent of the plate margin square.
///
/// # Example
///
/// ```rust
/// use config::constants::{ClearanceConfig, DEFAULT_PLATE_MARGIN};
///
/// assert_eq!(ClearanceConfig::default().plate_margin, DEFAULT_PLATE_MARGIN);
/// ```
pub const DEFAULT_PLATE_MARGIN: f64 = 1.0;

/// Default distance from the nozzle to each side of the print head.
pub const DEFAULT_HEAD_EXTENT: f64 = 1.0;

/// Default half-extents of the minimum head clearance rectangle.
pub const DEFAULT_HEAD_MIN_SIZE: [f64; 2] = [1.0, 1.0];

// =============================================================================
// ORIENTATION CONSTANTS
// =============================================================================

/// Minimum distance from the lowest vertex for a vertex to steer lay-flat.
///
/// Vertices closer than this are treated as surface noise around the
/// lowest point.
pub const LAY_FLAT_MIN_DISTANCE: f64 = 5.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Coordinates are multiplied by this factor and truncated to form hash
/// buckets, giving buckets of roughly 0.01 units.
pub const VERTEX_HASH_SCALE: f64 = 100.0;

/// Bit width of each axis inside a packed vertex hash key.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_HASH_BITS;
///
/// // 1024 distinguishable buckets per axis before wraparound
/// assert_eq!(1u32 << VERTEX_HASH_BITS, 1024);
/// ```
pub const VERTEX_HASH_BITS: u32 = 10;

/// Vertices within one bucket merge when closer than this distance.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_DISTANCE;
///
/// fn vertices_should_merge(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     let dz = v1[2] - v2[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < VERTEX_MERGE_DISTANCE
/// }
///
/// assert!(vertices_should_merge([0.0; 3], [0.0005, 0.0, 0.0]));
/// ```
pub const VERTEX_MERGE_DISTANCE: f64 = 0.001;

/// Number of decimals kept when storing the bounding radius.
pub const BOUNDING_RADIUS_DECIMALS: i32 = 3;

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Models larger than this along any axis were most likely authored in
/// micrometers and are scaled down after loading.
pub const MAX_SENSIBLE_SIZE: f64 = 10_000.0;

/// Models smaller than this along every axis were most likely authored in
/// meters and are scaled up after loading.
pub const MIN_SENSIBLE_SIZE: f64 = 1.0;

/// Factor applied when a model is rescaled after loading.
pub const UNIT_RESCALE_FACTOR: f64 = 1000.0;

// =============================================================================
// CLEARANCE CONFIGURATION
// =============================================================================

/// Validated clearance settings used to derive plate and head hulls.
///
/// The head extents are distances from the nozzle to each side of the
/// print head, measured along the plate axes.
///
/// # Examples
/// ```
/// use config::constants::ClearanceConfig;
///
/// let cfg = ClearanceConfig::new(2.0, [10.0, 20.0, 5.0, 15.0], [3.0, 3.0]).expect("valid config");
/// assert_eq!(cfg.head_max_x, 20.0);
/// assert!(ClearanceConfig::new(-1.0, [0.0; 4], [0.0; 2]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearanceConfig {
    /// Half-extent of the square margin kept between neighboring objects.
    pub plate_margin: f64,
    /// Head extent towards negative x.
    pub head_min_x: f64,
    /// Head extent towards positive x.
    pub head_max_x: f64,
    /// Head extent towards negative y.
    pub head_min_y: f64,
    /// Head extent towards positive y.
    pub head_max_y: f64,
    /// Half-extents of the minimum head clearance rectangle.
    pub head_min_size: [f64; 2],
}

impl ClearanceConfig {
    /// Builds a configuration, rejecting negative or non-finite values.
    ///
    /// `head` is ordered `[min_x, max_x, min_y, max_y]`.
    pub fn new(plate_margin: f64, head: [f64; 4], head_min_size: [f64; 2]) -> Result<Self, ConfigError> {
        if !is_valid_length(plate_margin) {
            return Err(ConfigError::InvalidMargin(plate_margin));
        }
        if let Some(&extent) = head.iter().find(|v| !is_valid_length(**v)) {
            return Err(ConfigError::InvalidHeadExtent(extent));
        }
        if let Some(&size) = head_min_size.iter().find(|v| !is_valid_length(**v)) {
            return Err(ConfigError::InvalidHeadMinSize(size));
        }
        Ok(Self {
            plate_margin,
            head_min_x: head[0],
            head_max_x: head[1],
            head_min_y: head[2],
            head_max_y: head[3],
            head_min_size,
        })
    }
}

impl Default for ClearanceConfig {
    fn default() -> Self {
        Self {
            plate_margin: DEFAULT_PLATE_MARGIN,
            head_min_x: DEFAULT_HEAD_EXTENT,
            head_max_x: DEFAULT_HEAD_EXTENT,
            head_min_y: DEFAULT_HEAD_EXTENT,
            head_max_y: DEFAULT_HEAD_EXTENT,
            head_min_size: DEFAULT_HEAD_MIN_SIZE,
        }
    }
}

fn is_valid_length(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the plate margin is negative or not finite.
    InvalidMargin(f64),
    /// Raised when a head extent is negative or not finite.
    InvalidHeadExtent(f64),
    /// Raised when a minimum head clearance half-extent is negative or not finite.
    InvalidHeadMinSize(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMargin(value) => {
                write!(f, "plate margin must be a non-negative length: {value}")
            }
            ConfigError::InvalidHeadExtent(value) => {
                write!(f, "head extent must be a non-negative length: {value}")
            }
            ConfigError::InvalidHeadMinSize(value) => {
                write!(f, "head minimum size must be a non-negative length: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
