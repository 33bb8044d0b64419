//! Matrix helpers for the object transform.
//!
//! Object transforms are 3×3 linear maps (rotation and scale only; the
//! planar position is kept separately). Vertices are column vectors, so a
//! vertex `v` is placed at `matrix * v`, and composing an edit `m` after the
//! current transform is `m * matrix`.
//!
//! The scale of an axis is the length of the matrix row producing that
//! output axis. Rescaling an axis therefore multiplies that row, which is
//! what a diagonal matrix composed after the transform does.

use glam::{DMat3, DVec3};

use crate::error::PlacementError;

/// Principal axis of the object frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Plate x axis.
    X,
    /// Plate y axis.
    Y,
    /// Vertical axis.
    Z,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of the axis (0, 1 or 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along the axis.
    #[inline]
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = PlacementError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            other => Err(PlacementError::InvalidAxis(other)),
        }
    }
}

/// Reflection that flips `axis`.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use printable_core::transform::{mirror_matrix, Axis};
///
/// let flipped = mirror_matrix(Axis::Y) * DVec3::new(1.0, 2.0, 3.0);
/// assert_eq!(flipped, DVec3::new(1.0, -2.0, 3.0));
/// ```
pub fn mirror_matrix(axis: Axis) -> DMat3 {
    DMat3::from_diagonal(DVec3::ONE - 2.0 * axis.unit())
}

/// Scale by `factor` along every axis (`uniform`) or along `axis` only.
pub fn axis_scale_matrix(factor: f64, axis: Axis, uniform: bool) -> DMat3 {
    if uniform {
        DMat3::from_diagonal(DVec3::splat(factor))
    } else {
        let mut diagonal = DVec3::ONE;
        diagonal[axis.index()] = factor;
        DMat3::from_diagonal(diagonal)
    }
}

/// Per-axis scale of `matrix`: the length of each output row.
///
/// # Examples
/// ```
/// use glam::{DMat3, DVec3};
/// use printable_core::transform::axis_scales;
///
/// let m = DMat3::from_rotation_z(0.3) * DMat3::from_diagonal(DVec3::new(2.0, 2.0, 5.0));
/// let scale = axis_scales(&m);
/// assert!((scale.x - 2.0).abs() < 1e-12);
/// assert!((scale.z - 5.0).abs() < 1e-12);
/// ```
pub fn axis_scales(matrix: &DMat3) -> DVec3 {
    DVec3::new(
        matrix.row(0).length(),
        matrix.row(1).length(),
        matrix.row(2).length(),
    )
}
