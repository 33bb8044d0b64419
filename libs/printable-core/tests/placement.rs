use std::sync::Arc;

use approx::assert_abs_diff_eq;
use glam::{DMat3, DVec2, DVec3};
use printable_core::export::build_vertex_index;
use printable_core::ops::{convex_hull, minkowski_sum};
use printable_core::{Axis, ConvexPolygon, Mesh, PrintableObject};

const TOLERANCE: f64 = 1e-9;

/// Deterministic point cloud from a linear congruential generator.
fn scattered_points(seed: u64, count: usize, spread: f64) -> Vec<DVec2> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64 - 0.5) * 2.0 * spread
    };
    (0..count).map(|_| DVec2::new(next(), next())).collect()
}

fn triangle(a: DVec3, b: DVec3, c: DVec3) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_triangle(a, b, c);
    mesh
}

fn is_convex(polygon: &ConvexPolygon) -> bool {
    let points = polygon.points();
    let n = points.len();
    (0..n).all(|i| {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        (b - a).perp_dot(c - b) > -TOLERANCE
    })
}

fn assert_inside(inner: &ConvexPolygon, outer: &ConvexPolygon) {
    for point in inner.points() {
        assert!(outer.contains(*point, TOLERANCE), "{point} outside {outer:?}");
    }
}

fn wedge_object() -> PrintableObject {
    let mut object = PrintableObject::new(Some("wedge.obj"));
    let base = [
        DVec3::new(0.3, 0.7, 0.0),
        DVec3::new(24.6, 1.2, 0.0),
        DVec3::new(12.1, 17.5, 0.0),
    ];
    let top = DVec3::new(11.0, 6.4, 9.3);
    object.add_mesh(triangle(base[0], base[1], base[2]));
    object.add_mesh(triangle(base[0], base[1], top));
    object.add_mesh(triangle(base[1], base[2], top));
    object.apply_matrix(DMat3::from_rotation_z(0.35) * DMat3::from_rotation_x(0.2));
    object
}

// =============================================================================
// POLYGON PROPERTIES
// =============================================================================

#[test]
fn hull_is_convex_and_covers_input() {
    for seed in 1..20 {
        let points = scattered_points(seed, 40, 50.0);
        let hull = convex_hull(&points);
        assert!(hull.len() >= 3);
        assert!(is_convex(&hull));
        for point in &points {
            assert!(hull.contains(*point, TOLERANCE));
        }
    }
}

#[test]
fn minkowski_sum_contains_pairwise_sums() {
    for seed in 1..10 {
        let a = convex_hull(&scattered_points(seed, 12, 20.0));
        let b = convex_hull(&scattered_points(seed + 100, 7, 3.0));
        let sum = minkowski_sum(&a, &b);
        assert!(is_convex(&sum));
        for p in a.points() {
            for q in b.points() {
                assert!(sum.contains(*p + *q, TOLERANCE));
            }
        }
    }
}

// =============================================================================
// OBJECT SCENARIOS
// =============================================================================

#[test]
fn single_triangle_bounds() {
    let mut object = PrintableObject::new(None);
    object.add_mesh(triangle(
        DVec3::ZERO,
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(0.0, 10.0, 0.0),
    ));
    object.set_plate_margin_shape(ConvexPolygon::square(0.0));
    object.set_head_shape(ConvexPolygon::square(0.0), DVec2::ZERO);

    assert_eq!(object.bounds_min(), DVec3::ZERO);
    assert_eq!(object.bounds_max(), DVec3::new(10.0, 10.0, 0.0));
    assert_eq!(object.size(), DVec3::new(10.0, 10.0, 0.0));
    assert_eq!(object.draw_offset(), DVec3::new(5.0, 5.0, 0.0));
}

#[test]
fn mirror_twice_is_identity() {
    let mut object = wedge_object();
    let before = object.matrix();
    object.mirror(Axis::try_from(0).expect("x axis"));
    object.mirror(Axis::X);
    assert!(object.matrix().abs_diff_eq(before, 1e-12));
}

#[test]
fn set_size_round_trips() {
    for axis in Axis::ALL {
        for value in [0.5, 7.0, 130.0] {
            let mut object = wedge_object();
            object.set_size(value, axis, true);
            assert_abs_diff_eq!(object.size()[axis.index()], value, epsilon = 1e-9);
        }
    }
}

#[test]
fn hulls_are_nested() {
    let object = wedge_object();
    assert!(!object.boundary_hull().is_empty());

    assert_inside(object.boundary_hull(), object.plate_margin_hull());
    assert_inside(object.plate_margin_hull(), object.head_clearance_hull());
    assert_inside(object.head_min_clearance_hull(), object.head_clearance_hull());
}

#[test]
fn boundary_hull_sits_on_shifted_grid() {
    let object = wedge_object();
    let offset = object.draw_offset().truncate();
    for point in object.boundary_hull().points() {
        let grid = *point + offset;
        assert_abs_diff_eq!(grid.x, grid.x.round(), epsilon = 1e-9);
        assert_abs_diff_eq!(grid.y, grid.y.round(), epsilon = 1e-9);
    }
}

#[test]
fn recompute_is_idempotent() {
    let mut object = wedge_object();
    let first = object.geometry().clone();
    object.recompute_geometry();
    assert_eq!(object.geometry(), &first);
}

#[test]
fn bounding_radius_is_per_mesh() {
    let mut object = PrintableObject::new(None);
    object.add_mesh(triangle(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0)));
    let offset = DVec3::new(100.0, 0.0, 0.0);
    object.add_mesh(triangle(
        offset,
        offset + DVec3::new(2.0, 0.0, 0.0),
        offset + DVec3::new(0.0, 2.0, 0.0),
    ));

    // Each mesh alone, not the whole object
    assert_eq!(object.bounding_radius(), 1.414);
    assert_eq!(object.size().x, 102.0);
}

#[test]
fn clone_shares_meshes_and_keeps_geometry() {
    let object = wedge_object();
    let mut copy = object.clone();

    assert_eq!(Arc::strong_count(&object.meshes()[0]), 2);
    assert!(Arc::ptr_eq(&object.meshes()[1], &copy.meshes()[1]));
    assert_eq!(copy.geometry(), object.geometry());

    copy.mirror(Axis::Y);
    assert_eq!(object.matrix(), wedge_object().matrix());
    assert_ne!(copy.matrix(), object.matrix());
}

#[test]
fn lay_flat_then_reset_rotation_keeps_scale() {
    let mut object = wedge_object();
    object.set_scale(2.0, Axis::Z, true);
    object.lay_flat();
    object.reset_rotation();
    assert!(object.scale().abs_diff_eq(DVec3::splat(2.0), 1e-9));
}

#[test]
fn separated_objects_do_not_overlap() {
    let left = wedge_object();
    let mut right = left.clone();
    right.set_position(DVec2::new(200.0, 0.0));

    let a = left.plate_margin_hull().translated(left.position());
    let b = right.plate_margin_hull().translated(right.position());
    assert!(!a.overlaps(&b));

    right.set_position(DVec2::new(5.0, 5.0));
    let b = right.plate_margin_hull().translated(right.position());
    assert!(a.overlaps(&b));
}

// =============================================================================
// EXPORT
// =============================================================================

#[test]
fn shared_vertex_merges_once() {
    let first = vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(10.0, 0.0, 0.0), DVec3::new(0.0, 10.0, 0.0)];
    let second = vec![
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(20.0, 0.0, 0.0),
        DVec3::new(15.0, 10.0, 0.0),
    ];
    let index = build_vertex_index(&[first, second]);

    assert_eq!(index.vertices.len(), 5);
    assert_eq!(index.mesh_indices[0][1], index.mesh_indices[1][0]);
}

#[test]
fn object_export_merges_shared_vertex() {
    let mut object = PrintableObject::new(Some("pair.3mf"));
    object.add_mesh(triangle(
        DVec3::ZERO,
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(0.0, 10.0, 0.0),
    ));
    object.add_mesh(triangle(
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(20.0, 0.0, 0.0),
        DVec3::new(15.0, 10.0, 0.0),
    ));
    assert!(!object.can_store_as_single_mesh());

    let index = object.vertex_index_list();
    assert_eq!(index.input_vertex_count(), 6);
    assert_eq!(index.vertices.len(), 5);

    let shared = index.mesh_indices[0][1];
    assert_eq!(shared, index.mesh_indices[1][0]);
    // Plate space: draw offset (10, 5, 0) removed
    assert_eq!(index.vertices[shared as usize], DVec3::new(0.0, -5.0, 0.0));
}

#[test]
fn geometry_serializes_for_scene_consumers() {
    let mut object = PrintableObject::new(None);
    object.add_mesh(triangle(
        DVec3::ZERO,
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(0.0, 10.0, 0.0),
    ));

    let value = serde_json::to_value(object.geometry()).expect("serialize geometry");
    assert_eq!(value["size"], serde_json::json!([10.0, 10.0, 0.0]));
    assert_eq!(value["boundary_hull"].as_array().map(Vec::len), Some(5));
}
