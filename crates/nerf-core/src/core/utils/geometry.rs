use crate::core::models::coords::InternalCoordinate;
use crate::core::models::vector::Vector;

pub fn distance(a: &Vector, b: &Vector) -> f64 {
    (*a - *b).norm()
}

/// Angle in degrees at vertex `b` formed by `a-b-c`, in `[0, 180]`.
///
/// Returns NaN if `a` or `c` coincides with `b`.
pub fn angle(a: &Vector, b: &Vector, c: &Vector) -> f64 {
    let ba = *a - *b;
    let bc = *c - *b;
    let cos = ba.dot(bc) / (ba.norm() * bc.norm());
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Dihedral angle in degrees of `a-b-c-d`, in `(-180, 180]`.
///
/// Positive when, looking along `b -> c`, the bond `c-d` is rotated clockwise from
/// the bond `b-a`. Returns NaN if the points do not define two planes.
pub fn dihedral(a: &Vector, b: &Vector, c: &Vector, d: &Vector) -> f64 {
    let b0 = *a - *b;
    let Ok(b1) = (*c - *b).normalize() else {
        return f64::NAN;
    };
    let b2 = *d - *c;

    // Components of the outer bonds perpendicular to the central bond.
    let v = b0 - b1 * b0.dot(b1);
    let w = b2 - b1 * b2.dot(b1);
    if v.norm() == 0.0 || w.norm() == 0.0 {
        return f64::NAN;
    }

    let x = v.dot(w);
    let y = b1.cross(v).dot(w);
    let degrees = y.atan2(x).to_degrees();
    if degrees <= -180.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Measures the internal coordinate of `d` relative to the reference points `a`, `b`, `c`.
///
/// This is the inverse of
/// [`build_coordinate`](crate::engine::nerf::build_coordinate).
pub fn measure_internal(a: &Vector, b: &Vector, c: &Vector, d: &Vector) -> InternalCoordinate {
    InternalCoordinate {
        distance: distance(c, d),
        bond_angle: angle(b, c, d),
        torsion: dihedral(a, b, c, d),
    }
}

/// Smallest absolute difference between two angles in degrees, accounting for
/// periodicity. Always in `[0, 180]`.
pub fn angular_difference(x: f64, y: f64) -> f64 {
    let diff = (x - y).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

pub fn calculate_rmsd(coords1: &[Vector], coords2: &[Vector]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| {
            let d = *p1 - *p2;
            d.dot(d)
        })
        .sum();
    Some((squared_dist_sum / n).sqrt())
}
