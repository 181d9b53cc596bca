use super::vector::Vector;
use nalgebra::Matrix3;

/// Orthonormal local coordinate frame anchored at the third of three reference points.
///
/// The rows are, in order:
///
/// 1. `bc` - unit vector along the second-to-third bond,
/// 2. `nbc` - `n x bc`, completing the right-handed triple,
/// 3. `n` - unit normal of the plane through the three points.
///
/// A `BasisMatrix` can only be obtained from
/// [`build_reference_frame`](crate::engine::frame::build_reference_frame) (or
/// [`AtomTriple::reference_frame`](super::coords::AtomTriple::reference_frame)), which
/// guarantees unit rows and pairwise orthogonality. It is never mutated after
/// construction, so a single instance can be shared read-only between threads and
/// reused across repeated builder calls for the same triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisMatrix(Matrix3<f64>);

impl BasisMatrix {
    pub(crate) fn from_rows(bc: Vector, nbc: Vector, n: Vector) -> Self {
        Self(Matrix3::from_rows(&[
            bc.as_vector3().transpose(),
            nbc.as_vector3().transpose(),
            n.as_vector3().transpose(),
        ]))
    }

    pub fn bc(&self) -> Vector {
        self.row(0)
    }

    pub fn nbc(&self) -> Vector {
        self.row(1)
    }

    pub fn n(&self) -> Vector {
        self.row(2)
    }

    pub fn rows(&self) -> [Vector; 3] {
        [self.row(0), self.row(1), self.row(2)]
    }

    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Checks that every row has unit length and every pair of rows is orthogonal,
    /// both to within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let rows = self.rows();
        let unit = rows.iter().all(|r| (r.norm() - 1.0).abs() <= tolerance);
        let orthogonal = (0..3)
            .flat_map(|i| (i + 1..3).map(move |j| (i, j)))
            .all(|(i, j)| rows[i].dot(rows[j]).abs() <= tolerance);
        unit && orthogonal
    }

    fn row(&self, i: usize) -> Vector {
        Vector::from(self.0.row(i).transpose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_returned_in_construction_order() {
        let bc = Vector::new(1.0, 0.0, 0.0);
        let nbc = Vector::new(0.0, 1.0, 0.0);
        let n = Vector::new(0.0, 0.0, 1.0);
        let basis = BasisMatrix::from_rows(bc, nbc, n);

        assert_eq!(basis.bc(), bc);
        assert_eq!(basis.nbc(), nbc);
        assert_eq!(basis.n(), n);
        assert_eq!(basis.rows(), [bc, nbc, n]);
        assert_eq!(*basis.as_matrix(), Matrix3::identity());
    }

    #[test]
    fn is_orthonormal_accepts_identity_and_rejects_skewed_rows() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        let z = Vector::new(0.0, 0.0, 1.0);
        assert!(BasisMatrix::from_rows(x, y, z).is_orthonormal(1e-12));

        let skewed = Vector::new(1.0, 1.0, 0.0);
        assert!(!BasisMatrix::from_rows(x, skewed, z).is_orthonormal(1e-6));
        assert!(!BasisMatrix::from_rows(x * 2.0, y, z).is_orthonormal(1e-6));
    }

    #[test]
    fn transform_maps_local_axes_onto_rows() {
        let bc = Vector::new(0.0, 1.0, 0.0);
        let nbc = Vector::new(0.0, 0.0, 1.0);
        let n = Vector::new(1.0, 0.0, 0.0);
        let basis = BasisMatrix::from_rows(bc, nbc, n);

        assert_eq!(Vector::new(1.0, 0.0, 0.0).transform(&basis), bc);
        assert_eq!(Vector::new(0.0, 1.0, 0.0).transform(&basis), nbc);
        assert_eq!(Vector::new(0.0, 0.0, 1.0).transform(&basis), n);
        assert_eq!(
            Vector::new(2.0, -1.0, 3.0).transform(&basis),
            Vector::new(3.0, 2.0, -1.0)
        );
    }
}
