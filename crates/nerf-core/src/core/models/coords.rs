use super::frame::BasisMatrix;
use super::vector::Vector;
use crate::engine::error::NerfError;
use crate::engine::frame::build_reference_frame;
use serde::{Deserialize, Serialize};

/// Three ordered reference points, in the direction the chain is being extended.
///
/// Order matters: swapping any two points changes the reference frame and therefore
/// the constructed fourth point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtomTriple {
    pub first: Vector,
    pub second: Vector,
    pub third: Vector,
}

impl AtomTriple {
    pub fn new(first: Vector, second: Vector, third: Vector) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    pub fn points(&self) -> [Vector; 3] {
        [self.first, self.second, self.third]
    }

    /// Builds the local reference frame anchored at `third`.
    ///
    /// The result can be computed once and passed to every builder call that extends
    /// from this triple.
    pub fn reference_frame(&self) -> Result<BasisMatrix, NerfError> {
        build_reference_frame(&self.first, &self.second, &self.third)
    }
}

/// Position of a point relative to three preceding reference points.
///
/// - `distance`: separation between the third reference point and the new point, in
///   the length unit of the reference points. Must be strictly positive.
/// - `bond_angle`: angle in degrees at the third point between the second point and
///   the new point, conventionally in `[0, 180]`.
/// - `torsion`: dihedral angle in degrees of (first, second, third, new),
///   conventionally in `(-180, 180]`.
///
/// Angles outside their conventional ranges are accepted; they are periodic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InternalCoordinate {
    pub distance: f64,
    pub bond_angle: f64,
    pub torsion: f64,
}

impl InternalCoordinate {
    pub fn new(distance: f64, bond_angle: f64, torsion: f64) -> Self {
        Self {
            distance,
            bond_angle,
            torsion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_returns_triple_in_order() {
        let a = Vector::new(1.0, 0.0, 0.0);
        let b = Vector::new(0.0, 0.0, 0.0);
        let c = Vector::new(0.0, 1.0, 0.0);
        let triple = AtomTriple::new(a, b, c);

        assert_eq!(triple.points(), [a, b, c]);
    }

    #[test]
    fn reference_frame_matches_free_function() {
        let triple = AtomTriple::new(
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
        );

        let from_triple = triple.reference_frame().unwrap();
        let direct = build_reference_frame(&triple.first, &triple.second, &triple.third).unwrap();
        assert_eq!(from_triple, direct);
    }

    #[test]
    fn reference_frame_propagates_degenerate_geometry() {
        let triple = AtomTriple::new(
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(2.0, 0.0, 0.0),
        );

        assert!(matches!(
            triple.reference_frame(),
            Err(NerfError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn internal_coordinate_deserializes_kebab_case_keys() {
        let ic: InternalCoordinate =
            toml::from_str("distance = 1.6\nbond-angle = 104.0\ntorsion = -60.0").unwrap();

        assert_eq!(ic, InternalCoordinate::new(1.6, 104.0, -60.0));
    }

    #[test]
    fn atom_triple_deserializes_from_arrays() {
        let triple: AtomTriple = toml::from_str(
            "first = [1.0, 0.0, 0.0]\nsecond = [0.0, 0.0, 0.0]\nthird = [0.0, 1.0, 0.0]",
        )
        .unwrap();

        assert_eq!(triple.third, Vector::new(0.0, 1.0, 0.0));
    }
}
