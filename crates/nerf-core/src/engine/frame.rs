use crate::core::models::frame::BasisMatrix;
use crate::core::models::vector::Vector;
use crate::engine::error::NerfError;
use tracing::trace;

/// Minimum sine of the angle between `b - a` and `c - b` for the triple to be
/// considered non-collinear.
pub const COLLINEARITY_TOLERANCE: f64 = 1e-10;

/// Builds the local orthonormal frame for three ordered points `a`, `b`, `c`.
///
/// The rows of the returned matrix are `[bc, nbc, n]` where `bc` is the unit vector
/// from `b` to `c`, `n` is the unit normal of the plane through the three points
/// (`(b - a) x bc`, normalized) and `nbc = n x bc`.
///
/// # Errors
///
/// Returns [`NerfError::DegenerateGeometry`] if `b` and `c` coincide, if `a` and `b`
/// coincide, or if the three points are collinear so that no plane normal exists.
pub fn build_reference_frame(
    a: &Vector,
    b: &Vector,
    c: &Vector,
) -> Result<BasisMatrix, NerfError> {
    let bc = c
        .subtract(*b)
        .normalize()
        .map_err(|_| NerfError::DegenerateGeometry {
            reason: "second and third points coincide",
        })?;

    let ab = b.subtract(*a);
    let ab_norm = ab.norm();
    if ab_norm == 0.0 {
        return Err(NerfError::DegenerateGeometry {
            reason: "first and second points coincide",
        });
    }

    // |ab x bc| = |ab| * sin(theta) because bc is a unit vector.
    let normal = ab.cross(bc);
    if normal.norm() <= COLLINEARITY_TOLERANCE * ab_norm {
        return Err(NerfError::DegenerateGeometry {
            reason: "reference points are collinear",
        });
    }
    let n = normal
        .normalize()
        .map_err(|_| NerfError::DegenerateGeometry {
            reason: "reference points are collinear",
        })?;
    let nbc = n.cross(bc);

    trace!(bc = %bc, nbc = %nbc, n = %n, "Built reference frame.");

    Ok(BasisMatrix::from_rows(bc, nbc, n))
}
