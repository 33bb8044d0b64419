//! Lay-flat orientation heuristic.
//!
//! Rotates the object so that the shallowest slope leaving its lowest
//! vertex ends up horizontal. Only the first mesh is inspected. This is a
//! local heuristic and will not find the globally flattest face.

use config::constants::LAY_FLAT_MIN_DISTANCE;
use glam::{DMat3, DVec2, DVec3};
use tracing::{debug, trace};

use super::PrintableObject;

/// Direction from the lowest vertex and its elevation ratio `dz / distance`.
struct Slope {
    direction: DVec3,
    ratio: f64,
}

impl PrintableObject {
    /// Rotates the object so its flattest slope near the bottom rests on the plate.
    ///
    /// The first pass aligns the shallowest direction with +x and tilts it
    /// level about y. The second pass measures distances in the y/z plane
    /// and levels the remaining tilt about x. A pass that finds no vertex at
    /// least [`LAY_FLAT_MIN_DISTANCE`] away from the lowest vertex stops the
    /// heuristic; rotations from earlier passes are kept.
    pub fn lay_flat(&mut self) {
        let Some(mesh) = self.meshes.first().cloned() else {
            debug!(name = %self.name, "Nothing to lay flat");
            return;
        };

        let vertices = mesh.transformed(&self.matrix);
        let Some(slope) = shallowest_slope(&vertices, DVec3::length) else {
            trace!("Lay flat: no vertex far enough from the lowest point");
            return;
        };
        let yaw = -slope.direction.y.atan2(slope.direction.x);
        let pitch = slope.ratio.asin();
        trace!(yaw, pitch, "Lay flat: leveling along x");
        self.matrix = DMat3::from_rotation_y(pitch) * DMat3::from_rotation_z(yaw) * self.matrix;

        let vertices = mesh.transformed(&self.matrix);
        match shallowest_slope(&vertices, |d| DVec2::new(d.y, d.z).length()) {
            Some(slope) => {
                let roll = if slope.direction.y < 0.0 {
                    slope.ratio.asin()
                } else {
                    -slope.ratio.asin()
                };
                trace!(roll, "Lay flat: leveling along y");
                self.matrix = DMat3::from_rotation_x(roll) * self.matrix;
            }
            None => trace!("Lay flat: no vertex far enough in the y/z plane"),
        }

        self.recompute_geometry();
    }
}

/// Finds the vertex with the smallest elevation ratio as seen from the
/// lowest vertex, skipping vertices closer than the noise threshold.
///
/// `distance` measures the offset from the lowest vertex. Ratios start at
/// 1.0, so a direction straight up never qualifies.
fn shallowest_slope(vertices: &[DVec3], distance: impl Fn(DVec3) -> f64) -> Option<Slope> {
    let lowest = vertices
        .iter()
        .copied()
        .reduce(|lowest, v| if v.z < lowest.z { v } else { lowest })?;

    let mut best: Option<Slope> = None;
    let mut best_ratio = 1.0;
    for v in vertices {
        let direction = *v - lowest;
        let length = distance(direction);
        if length < LAY_FLAT_MIN_DISTANCE {
            continue;
        }
        let ratio = direction.z / length;
        if ratio < best_ratio {
            best_ratio = ratio;
            best = Some(Slope { direction, ratio });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_vertex_neighbors_are_noise() {
        let vertices = [
            DVec3::ZERO,
            DVec3::new(1.0, 0.0, 0.5),
            DVec3::new(0.0, 2.0, 1.0),
        ];
        assert!(shallowest_slope(&vertices, DVec3::length).is_none());
    }

    #[test]
    fn picks_the_smallest_ratio() {
        let vertices = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 5.0),
            DVec3::new(0.0, 10.0, 1.0),
            DVec3::new(0.0, 0.0, 10.0),
        ];
        let slope = shallowest_slope(&vertices, DVec3::length).expect("slope");
        assert_eq!(slope.direction, DVec3::new(0.0, 10.0, 1.0));
        assert!((slope.ratio - 1.0 / 101f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn vertical_direction_never_qualifies() {
        let vertices = [DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)];
        assert!(shallowest_slope(&vertices, DVec3::length).is_none());
    }
}
