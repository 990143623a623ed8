use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use morphfield_core::shapes::primitives::*;
use morphfield_core::{MorphError, ShapeId};

/// Deterministic sample of (theta, phi, r) triples covering the domain.
fn samples() -> impl Iterator<Item = (f64, f64, f64)> {
    (0..400).map(|i| {
        let theta = (i as f64 * 0.37) % TAU;
        let phi = ((i * 7) % 400) as f64 / 400.0 * PI;
        let r = 0.5 + (i % 13) as f64 * 3.7;
        (theta, phi, r)
    })
}

#[test]
fn test_sphere_is_constant_radius() {
    for (theta, phi, r) in samples() {
        assert_eq!(ShapeId::Sphere.radius(theta, phi, r), r, "sphere at ({},{})", theta, phi);
    }
}

#[test]
fn test_cube_bounded_by_radius() {
    for (theta, phi, r) in samples() {
        let v = ShapeId::Cube.radius(theta, phi, r);
        assert!(v >= 0.0 && v <= r, "cube({},{},{}) = {} out of [0, r]", theta, phi, r, v);
        let expected = r * theta.sin().abs().max(phi.cos().abs());
        assert_eq!(v, expected);
    }
}

#[test]
fn test_dispatch_matches_profiles() {
    let profiles: [(ShapeId, fn(f64, f64, f64) -> f64); 6] = [
        (ShapeId::Sphere, profile_sphere),
        (ShapeId::Cube, profile_cube),
        (ShapeId::Cone, profile_cone),
        (ShapeId::Cylinder, profile_cylinder),
        (ShapeId::Torus, profile_torus),
        (ShapeId::Parabola, profile_parabola),
    ];
    for (shape, profile) in profiles {
        for (theta, phi, r) in samples() {
            assert_eq!(shape.radius(theta, phi, r), profile(theta, phi, r), "{} mismatch", shape);
        }
    }
}

#[test]
fn test_profile_formulas() {
    let (theta, phi, r): (f64, f64, f64) = (1.2, 0.9, 8.0);
    assert_relative_eq!(ShapeId::Cone.radius(theta, phi, r), r * (1.0 - phi / PI));
    assert_relative_eq!(ShapeId::Cylinder.radius(theta, phi, r), r * phi.sin());
    assert_relative_eq!(ShapeId::Torus.radius(theta, phi, r), r + 0.3 * r * phi.cos());
    let u = 2.0 * phi / PI - 1.0;
    assert_relative_eq!(ShapeId::Parabola.radius(theta, phi, r), r * (1.0 - u * u));
}

#[test]
fn test_all_profiles_finite() {
    for shape in ShapeId::ALL {
        for (theta, phi, r) in samples() {
            let v = shape.radius(theta, phi, r);
            assert!(v.is_finite(), "{} produced non-finite radius at ({},{})", shape, theta, phi);
        }
    }
}

#[test]
fn test_closed_name_set() {
    let names: Vec<&str> = ShapeId::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["Sphere", "Cube", "Cone", "Cylinder", "Torus", "Parabola"]);
    for bad in ["Nonexistent", "Helix", "CUBE", "Sphere "] {
        assert_eq!(
            bad.parse::<ShapeId>(),
            Err(MorphError::UnknownShape(bad.to_string())),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_shape_serializes_as_name() {
    let json = serde_json::to_string(&ShapeId::Parabola).unwrap();
    assert_eq!(json, "\"Parabola\"");
    let back: ShapeId = serde_json::from_str("\"Cylinder\"").unwrap();
    assert_eq!(back, ShapeId::Cylinder);
    assert!(serde_json::from_str::<ShapeId>("\"Blob\"").is_err());
}
