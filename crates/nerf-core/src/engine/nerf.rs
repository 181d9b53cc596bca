use crate::core::models::coords::{AtomTriple, InternalCoordinate};
use crate::core::models::frame::BasisMatrix;
use crate::core::models::vector::Vector;
use crate::engine::error::NerfError;
use crate::engine::frame::build_reference_frame;
use std::f64::consts::PI;
use tracing::trace;

/// Places a fourth point `d` from three reference points and an internal coordinate.
///
/// The result satisfies, to within floating-point tolerance:
///
/// - `|d - c| == distance`,
/// - the angle `b-c-d` equals `bond_angle` (degrees),
/// - the dihedral `a-b-c-d` equals `torsion` (degrees).
///
/// # Arguments
///
/// * `a`, `b`, `c` - The reference points, in the direction the chain is extended.
/// * `distance` - Bond length from `c` to the new point; must be positive.
/// * `bond_angle` - Angle at `c` in degrees. Not range-checked.
/// * `torsion` - Dihedral angle in degrees. Not range-checked.
/// * `basis` - A frame previously built for the same `(a, b, c)`. When `None`, the
///   frame is computed from the points. A supplied frame is trusted as-is.
///
/// # Errors
///
/// - [`NerfError::InvalidParameter`] if `distance` is not a finite positive number.
/// - [`NerfError::DegenerateGeometry`] if no `basis` was supplied and the reference
///   points are collinear or coincident.
pub fn build_coordinate(
    a: &Vector,
    b: &Vector,
    c: &Vector,
    distance: f64,
    bond_angle: f64,
    torsion: f64,
    basis: Option<&BasisMatrix>,
) -> Result<Vector, NerfError> {
    if !(distance.is_finite() && distance > 0.0) {
        return Err(NerfError::InvalidParameter {
            name: "distance",
            value: distance,
            reason: "must be a finite positive number",
        });
    }

    // The preceding bond lies along the local x axis, so the angle swept from that
    // axis is the supplement of the bond angle.
    let (sin_angle, cos_angle) = (PI - bond_angle.to_radians()).sin_cos();
    let (sin_torsion, cos_torsion) = torsion.to_radians().sin_cos();

    let local = Vector::new(
        distance * cos_angle,
        distance * cos_torsion * sin_angle,
        distance * sin_torsion * sin_angle,
    );

    let computed;
    let basis = match basis {
        Some(basis) => basis,
        None => {
            computed = build_reference_frame(a, b, c)?;
            &computed
        }
    };

    let d = local.transform(basis) + *c;
    trace!(
        distance,
        bond_angle,
        torsion,
        position = %d,
        "Built coordinate."
    );
    Ok(d)
}

/// Same as [`build_coordinate`], taking the reference points and internal coordinate
/// as their grouped types.
pub fn build_coordinate_from(
    triple: &AtomTriple,
    coordinate: &InternalCoordinate,
    basis: Option<&BasisMatrix>,
) -> Result<Vector, NerfError> {
    build_coordinate(
        &triple.first,
        &triple.second,
        &triple.third,
        coordinate.distance,
        coordinate.bond_angle,
        coordinate.torsion,
        basis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::geometry::{angle, angular_difference, dihedral, measure_internal};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOLERANCE: f64 = 1e-3;

    fn sample_triple() -> (Vector, Vector, Vector) {
        (
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
        )
    }

    fn reference_triple() -> (Vector, Vector, Vector) {
        (
            Vector::new(-1.0, -1.0, 0.0),
            Vector::new(-1.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, 0.0),
        )
    }

    fn assert_reproduces(
        (a, b, c): (Vector, Vector, Vector),
        distance: f64,
        bond_angle: f64,
        torsion: f64,
    ) {
        let d = build_coordinate(&a, &b, &c, distance, bond_angle, torsion, None).unwrap();
        let measured = measure_internal(&a, &b, &c, &d);

        assert!(
            (measured.distance - distance).abs() < TOLERANCE,
            "distance: expected {distance}, got {}",
            measured.distance
        );
        assert!(
            (measured.bond_angle - bond_angle).abs() < TOLERANCE,
            "angle: expected {bond_angle}, got {}",
            measured.bond_angle
        );
        assert!(
            angular_difference(measured.torsion, torsion) < TOLERANCE,
            "torsion: expected {torsion}, got {}",
            measured.torsion
        );
    }

    #[test]
    fn distance_is_reproduced() {
        let (a, b, c) = sample_triple();
        let d = build_coordinate(&a, &b, &c, 2.34, 90.0, 0.0, None).unwrap();
        assert!(((d - c).norm() - 2.34).abs() < TOLERANCE);
    }

    #[test]
    fn bond_angle_is_reproduced() {
        let (a, b, c) = sample_triple();
        let d = build_coordinate(&a, &b, &c, 1.0, 90.0, 0.0, None).unwrap();
        assert!((angle(&b, &c, &d) - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn right_angle_with_quarter_turn_torsion_is_reproduced() {
        let (a, b, c) = sample_triple();
        let d = build_coordinate(&a, &b, &c, 1.0, 90.0, 90.0, None).unwrap();

        assert!(((d - c).norm() - 1.0).abs() < TOLERANCE);
        assert!((angle(&b, &c, &d) - 90.0).abs() < TOLERANCE);
        assert!((dihedral(&a, &b, &c, &d) - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn known_examples_are_reproduced_in_both_frames() {
        let examples = [
            (2.0, 90.0, 0.0),
            (1.0, 45.0, 0.0),
            (1.0, 45.0, -90.0),
            (1.0, 45.0, 90.0),
            (1.0, 45.0, 180.0),
            (1.0, 45.0, 135.0),
        ];
        for (distance, bond_angle, torsion) in examples {
            assert_reproduces(sample_triple(), distance, bond_angle, torsion);
            assert_reproduces(reference_triple(), distance, bond_angle, torsion);
        }
    }

    #[test]
    fn straight_angle_extends_along_the_previous_bond() {
        let (a, b, c) = sample_triple();
        let d = build_coordinate(&a, &b, &c, 1.5, 180.0, 0.0, None).unwrap();
        assert!((d - Vector::new(0.0, 2.5, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn zero_torsion_places_point_cis_to_first_point() {
        let (a, b, c) = reference_triple();
        let d = build_coordinate(&a, &b, &c, 1.0, 90.0, 0.0, None).unwrap();
        assert!((d - Vector::new(0.0, -1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn random_distances_are_reproduced() {
        let (a, b, c) = sample_triple();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let distance = rng.gen_range(0.01..5.0);
            let d = build_coordinate(&a, &b, &c, distance, 0.0, 0.0, None).unwrap();
            assert!(((d - c).norm() - distance).abs() < TOLERANCE);
        }
    }

    #[test]
    fn random_angles_and_torsions_are_reproduced() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let distance = rng.gen_range(0.1..5.0);
            let bond_angle = rng.gen_range(1.0..179.0);
            let torsion = 180.0 - rng.gen_range(0.0..360.0);
            assert_reproduces(sample_triple(), distance, bond_angle, torsion);
        }
    }

    #[test]
    fn supplied_basis_gives_same_result_as_computed_one() {
        let (a, b, c) = sample_triple();
        let basis = build_reference_frame(&a, &b, &c).unwrap();

        let fresh = build_coordinate(&a, &b, &c, 1.53, 111.0, -65.0, None).unwrap();
        let cached = build_coordinate(&a, &b, &c, 1.53, 111.0, -65.0, Some(&basis)).unwrap();

        assert_eq!(fresh, cached);
    }

    #[test]
    fn supplied_basis_skips_degeneracy_check() {
        let (a, b, c) = sample_triple();
        let basis = build_reference_frame(&a, &b, &c).unwrap();
        let origin = Vector::zero();

        let d = build_coordinate(&origin, &origin, &c, 1.0, 90.0, 0.0, Some(&basis));
        assert!(d.is_ok());
    }

    #[test]
    fn collinear_reference_points_are_rejected_without_basis() {
        let a = Vector::new(0.0, 0.0, 0.0);
        let b = Vector::new(1.0, 0.0, 0.0);
        let c = Vector::new(2.0, 0.0, 0.0);

        let result = build_coordinate(&a, &b, &c, 1.0, 90.0, 0.0, None);
        assert!(matches!(result, Err(NerfError::DegenerateGeometry { .. })));
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let (a, b, c) = sample_triple();
        for distance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = build_coordinate(&a, &b, &c, distance, 90.0, 0.0, None);
            assert!(
                matches!(
                    result,
                    Err(NerfError::InvalidParameter {
                        name: "distance",
                        ..
                    })
                ),
                "distance {distance} was accepted"
            );
        }
    }

    #[test]
    fn invalid_distance_is_reported_before_degenerate_geometry() {
        let p = Vector::zero();
        let result = build_coordinate(&p, &p, &p, 0.0, 90.0, 0.0, None);
        assert!(matches!(result, Err(NerfError::InvalidParameter { .. })));
    }

    #[test]
    fn out_of_range_angles_are_treated_periodically() {
        let (a, b, c) = sample_triple();
        let canonical = build_coordinate(&a, &b, &c, 1.2, 100.0, -30.0, None).unwrap();
        let wrapped = build_coordinate(&a, &b, &c, 1.2, 100.0, 330.0, None).unwrap();

        assert!((canonical - wrapped).norm() < 1e-9);
    }

    #[test]
    fn build_coordinate_from_matches_positional_form() {
        let (a, b, c) = sample_triple();
        let triple = AtomTriple::new(a, b, c);
        let ic = InternalCoordinate::new(1.33, 116.2, 180.0);

        let grouped = build_coordinate_from(&triple, &ic, None).unwrap();
        let positional = build_coordinate(&a, &b, &c, 1.33, 116.2, 180.0, None).unwrap();

        assert_eq!(grouped, positional);
    }
}
