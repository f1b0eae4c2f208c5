// Host-side tests for map fitting, flight bounds and baked mesh geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod flythrough {
    pub mod bounds {
        include!("../src/core/bounds.rs");
    }
    pub mod loadable {
        include!("../src/core/loadable.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
}

use flythrough::bounds::*;
use flythrough::loadable::Loadable;
use flythrough::mesh::*;
use glam::{Mat4, Vec3};

fn v3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

#[test]
fn aabb_from_points_encloses_every_point() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
    let a = Aabb::from_points([Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 4.0, 0.0)])
        .expect("two points");
    assert_eq!(a.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_eq!(a.max, Vec3::new(1.0, 4.0, 3.0));
    assert_eq!(a.center(), Vec3::new(0.0, 1.0, 1.5));
    assert_eq!(a.size(), Vec3::new(2.0, 6.0, 3.0));
}

#[test]
fn map_bounds_order_corners_and_clamp_xz() {
    let b = MapBounds::new(10.0, -10.0, 5.0, -5.0);
    assert!(b.min_x <= b.max_x && b.min_z <= b.max_z);
    let p = b.clamp(Vec3::new(50.0, 123.0, -50.0));
    assert_eq!(p, Vec3::new(10.0, 123.0, -5.0));
    assert!(b.contains(p));
    assert!(!b.contains(Vec3::new(11.0, 0.0, 0.0)));
}

#[test]
fn map_fit_scales_largest_extent_and_recentres() {
    // 50 x 10 x 20 box centred at (125, 5, -10)
    let raw = Aabb {
        min: Vec3::new(100.0, 0.0, -20.0),
        max: Vec3::new(150.0, 10.0, 0.0),
    };
    let fit = MapFit::new(&raw, 200.0);
    assert!((fit.scale - 4.0).abs() < 1e-6);

    let fitted = fit.fitted(&raw);
    assert!(v3_approx(fitted.center(), Vec3::ZERO));
    assert!((fitted.size().max_element() - 200.0).abs() < 1e-3);

    let bounds = fit.bounds(&raw);
    assert!((bounds.min_x + 100.0).abs() < 1e-3 && (bounds.max_x - 100.0).abs() < 1e-3);
    assert!((bounds.min_z + 40.0).abs() < 1e-3 && (bounds.max_z - 40.0).abs() < 1e-3);
}

#[test]
fn map_fit_matrix_maps_corners_onto_fitted_box() {
    let raw = Aabb {
        min: Vec3::new(-3.0, 0.0, 1.0),
        max: Vec3::new(7.0, 2.0, 5.0),
    };
    let fit = MapFit::new(&raw, 20.0);
    let m = fit.matrix();
    let fitted = fit.fitted(&raw);
    assert!(v3_approx(m.transform_point3(raw.min), fitted.min));
    assert!(v3_approx(m.transform_point3(raw.max), fitted.max));
}

#[test]
fn degenerate_map_keeps_unit_scale() {
    let raw = Aabb {
        min: Vec3::splat(3.0),
        max: Vec3::splat(3.0),
    };
    let fit = MapFit::new(&raw, 200.0);
    assert_eq!(fit.scale, 1.0);
    assert!(fit.scale.is_finite());
}

#[test]
fn mesh_append_bakes_world_transform_and_rebases_indices() {
    let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let normals = [[0.0, 0.0, 1.0]; 3];
    let mut mesh = CpuMesh::default();
    mesh.append(&Mat4::IDENTITY, &tri, Some(&normals[..]), Some(&[0, 1, 2][..]), [1.0, 0.0, 0.0]);
    let world = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
    mesh.append(&world, &tri, Some(&normals[..]), Some(&[2, 1, 0][..]), [0.0, 1.0, 0.0]);

    assert_eq!(mesh.vertices.len(), 6);
    assert_eq!(mesh.indices, vec![0, 1, 2, 5, 4, 3]);
    assert_eq!(mesh.vertices[4].position, [11.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[4].color, [0.0, 1.0, 0.0]);

    let b = mesh.bounds().expect("non-empty mesh");
    assert_eq!(b.min, Vec3::ZERO);
    assert_eq!(b.max, Vec3::new(11.0, 1.0, 0.0));
}

#[test]
fn mesh_normals_survive_non_uniform_scale() {
    let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
    let normals = [[0.0, 1.0, 0.0]; 3];
    let mut mesh = CpuMesh::default();
    let world = Mat4::from_scale(Vec3::new(5.0, 0.5, 2.0));
    mesh.append(&world, &tri, Some(&normals[..]), None, [1.0; 3]);
    for v in &mesh.vertices {
        assert!(v3_approx(Vec3::from_array(v.normal), Vec3::Y));
    }
}

#[test]
fn mesh_without_indices_is_a_triangle_list() {
    let quad = [[0.0; 3]; 6];
    let mut mesh = CpuMesh::default();
    mesh.append(&Mat4::IDENTITY, &quad, None, None, [1.0; 3]);
    assert_eq!(mesh.indices, (0..6).collect::<Vec<u32>>());
    // missing normals fall back to +Y
    assert_eq!(mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
}

#[test]
fn mesh_with_out_of_range_indices_draws_nothing() {
    let tri = [[0.0; 3]; 3];
    let mut mesh = CpuMesh::default();
    mesh.append(&Mat4::IDENTITY, &tri, None, Some(&[0, 1, 7][..]), [1.0; 3]);
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertices.len(), 3);
    assert!(mesh.bounds().is_some());
}

#[test]
fn empty_mesh_has_no_bounds() {
    assert!(CpuMesh::default().bounds().is_none());
    assert!(CpuMesh::default().is_empty());
}

#[test]
fn loadable_resolves_once() {
    let mut l: Loadable<u32> = Loadable::default();
    assert_eq!(l, Loadable::Pending);
    assert_eq!(l.get(), None);
    assert!(l.resolve(1));
    assert!(!l.resolve(2));
    assert_eq!(l.get(), Some(&1));
    // a late failure cannot undo a completed load
    l.fail();
    assert_eq!(l, Loadable::Ready(1));
}

#[test]
fn failed_loadable_never_becomes_ready() {
    let mut l: Loadable<&str> = Loadable::Pending;
    l.fail();
    assert_eq!(l, Loadable::Failed);
    assert!(!l.resolve("late"));
    assert!(l.get().is_none());
}
