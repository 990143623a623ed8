use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use morphfield_core::attributes::rebuild;
use morphfield_core::{EngineConfig, PropertyCell, PropertyMatrix, ScalarField, ShapeId};

fn config(polygon_count: u32, grid_width: u32, grid_height: u32) -> EngineConfig {
    EngineConfig {
        polygon_count,
        grid_width,
        grid_height,
        seed: Some(0),
        ..Default::default()
    }
}

#[test]
fn test_row_count_matches_polygon_count() {
    for count in [1, 2, 17, 1000] {
        let cfg = config(count, 5, 5);
        let matrix = PropertyMatrix::from_seed(5, 5, 8).unwrap();
        let rows = rebuild(&cfg, &matrix, &ScalarField::new(ShapeId::Torus)).unwrap();
        assert_eq!(rows.len(), count as usize);
    }
}

#[test]
fn test_positions_finite_for_all_shapes_and_seeds() {
    let cfg = config(2000, 10, 10);
    for seed in 0..5 {
        let matrix = PropertyMatrix::from_seed(10, 10, seed).unwrap();
        for shape in ShapeId::ALL {
            let mut field = ScalarField::new(shape);
            field.time = seed as f64 * 13.7;
            let rows = rebuild(&cfg, &matrix, &field).unwrap();
            for (i, row) in rows.iter().enumerate() {
                assert!(
                    row.position.is_finite(),
                    "{} seed {} vertex {} not finite: {:?}",
                    shape,
                    seed,
                    i,
                    row.position
                );
            }
        }
    }
}

#[test]
fn test_extreme_unit_range_cells_stay_finite() {
    let cfg = config(500, 3, 3);
    for value in [0.0, 1.0] {
        let matrix = PropertyMatrix::from_fn(3, 3, |_, _| {
            let mut cell = PropertyCell::with_random(value, value);
            cell.sphericity = value;
            cell.convexity = value;
            cell
        }).unwrap();
        let rows = rebuild(&cfg, &matrix, &ScalarField::new(ShapeId::Cube)).unwrap();
        assert!(rows.iter().all(|r| r.position.is_finite()));
    }
}

#[test]
fn test_rebuild_is_bit_identical() {
    let cfg = config(750, 10, 10);
    let matrix = PropertyMatrix::from_seed(10, 10, 99).unwrap();
    let mut field = ScalarField::new(ShapeId::Sphere);
    field.time = 4.25;
    field.morph.request_morph(ShapeId::Parabola, 3.0).unwrap();
    field.morph.tick(1.0);

    let a = rebuild(&cfg, &matrix, &field).unwrap();
    let b = rebuild(&cfg, &matrix, &field).unwrap();
    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.iter().zip(&b) {
        assert_eq!(ra.position.x.to_bits(), rb.position.x.to_bits());
        assert_eq!(ra.position.y.to_bits(), rb.position.y.to_bits());
        assert_eq!(ra.position.z.to_bits(), rb.position.z.to_bits());
    }
    assert_eq!(a, b);
}

#[test]
fn test_positions_follow_spherical_projection() {
    // Zero-amplitude cells leave the pure profile radius.
    let cfg = config(64, 4, 4);
    let matrix = PropertyMatrix::from_fn(4, 4, |_, _| {
        let mut cell = PropertyCell::with_random(0.0, 0.0);
        cell.convexity = 0.0;
        cell
    }).unwrap();
    let rows = rebuild(&cfg, &matrix, &ScalarField::new(ShapeId::Sphere)).unwrap();
    for (i, row) in rows.iter().enumerate() {
        let theta = TAU * i as f64 / 64.0;
        let phi = PI * i as f64 / 64.0;
        let r = cfg.radius;
        assert_relative_eq!(row.position.x, r * phi.sin() * theta.cos(), epsilon = 1e-9);
        assert_relative_eq!(row.position.y, r * phi.sin() * theta.sin(), epsilon = 1e-9);
        assert_relative_eq!(row.position.z, r * phi.cos(), epsilon = 1e-9);
        assert_relative_eq!(row.position.length(), r, epsilon = 1e-9);
    }
}

#[test]
fn test_vertices_pick_clamped_grid_cells() {
    // Encode grid coordinates into charge via rugosity so the lookup is visible.
    let (w, h) = (4usize, 3usize);
    let cfg = config(120, w as u32, h as u32);
    let matrix = PropertyMatrix::from_fn(w, h, |x, y| PropertyCell::with_random(0.0, (y * w + x) as f64 / 100.0)).unwrap();
    let rows = rebuild(&cfg, &matrix, &ScalarField::new(ShapeId::Sphere)).unwrap();
    for (i, row) in rows.iter().enumerate() {
        let t = i as f64 / 120.0;
        let (theta, phi) = (TAU * t, PI * t);
        let gx = ((theta / TAU * w as f64).floor() as usize).min(w - 1);
        let gy = ((phi / PI * h as f64).floor() as usize).min(h - 1);
        let rugosity = (gy * w + gx) as f64 / 100.0;
        assert_relative_eq!(row.charge, (rugosity - 0.5) * 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_derived_attributes_constant_fields() {
    let cfg = config(50, 2, 2);
    let matrix = PropertyMatrix::from_seed(2, 2, 4).unwrap();
    let rows = rebuild(&cfg, &matrix, &ScalarField::new(ShapeId::Cone)).unwrap();
    for row in &rows {
        assert_eq!(row.mass, 15.0);
        assert_eq!(row.symmetry_index, 8);
        assert_eq!(row.valency, 4);
        assert_eq!(row.volume, 15.0);
        assert_eq!(row.orientation, glam::DVec3::new(0.0, 1.0, 0.0));
        assert!(row.charge >= -1.0 && row.charge < 1.0);
    }
}
