use nalgebra::{Vector3, Vector4};
use serde::{Deserialize, Serialize};

use crate::config::INDEX_TOLERANCE;
use crate::errors::IndexError;
use crate::lattice::Lattice;

/// Crystallographic indices in either the 3-term Miller or the 4-term
/// hexagonal Miller-Bravais convention.
///
/// Depending on context the components describe a plane (reciprocal
/// convention) or a direction (real-space convention); the conversion
/// functions below are split accordingly because the two conventions
/// transform differently between 3- and 4-index form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MillerIndex {
    /// (h, k, l) plane or [u, v, w] direction indices.
    Miller(Vector3<f64>),
    /// (h, k, i, l) plane or [u, v, t, w] direction indices.
    MillerBravais(Vector4<f64>),
}

impl MillerIndex {
    /// Build an index from a slice of 3 or 4 components.
    ///
    /// # Returns
    /// The typed index, or [`IndexError::InvalidDimensions`] for any other
    /// component count.
    pub fn from_slice(values: &[f64]) -> Result<Self, IndexError> {
        match values {
            [h, k, l] => Ok(MillerIndex::Miller(Vector3::new(*h, *k, *l))),
            [h, k, i, l] => Ok(MillerIndex::MillerBravais(Vector4::new(*h, *k, *i, *l))),
            other => Err(IndexError::InvalidDimensions(other.len())),
        }
    }
}

/// Convert 3-term Miller [uvw] direction indices to 4-term hexagonal
/// Miller-Bravais [uvtw] indices.
///
/// Uses u' = (2u - v)/3, v' = (2v - u)/3, t = -(u' + v'), w' = w and returns
/// the real-valued result without rescaling to the smallest integer
/// representation.
pub fn vector3to4(uvw: &Vector3<f64>) -> Vector4<f64> {
    let u = (2.0 * uvw[0] - uvw[1]) / 3.0;
    let v = (2.0 * uvw[1] - uvw[0]) / 3.0;
    Vector4::new(u, v, -(u + v), uvw[2])
}

/// Convert 4-term hexagonal Miller-Bravais [uvtw] direction indices to
/// 3-term Miller [uvw] indices.
///
/// Inverse of [`vector3to4`]: u = 2u' + v', v = u' + 2v', w = w'.
///
/// # Returns
/// [`IndexError::BravaisSum`] if u' + v' + t' is not zero within tolerance.
pub fn vector4to3(uvtw: &Vector4<f64>) -> Result<Vector3<f64>, IndexError> {
    if (uvtw[0] + uvtw[1] + uvtw[2]).abs() > INDEX_TOLERANCE {
        return Err(IndexError::BravaisSum);
    }
    Ok(Vector3::new(
        2.0 * uvtw[0] + uvtw[1],
        uvtw[0] + 2.0 * uvtw[1],
        uvtw[3],
    ))
}

/// Convert 3-term Miller (hkl) plane indices to 4-term hexagonal
/// Miller-Bravais (hkil) indices, i = -(h + k).
pub fn plane3to4(hkl: &Vector3<f64>) -> Vector4<f64> {
    Vector4::new(hkl[0], hkl[1], -(hkl[0] + hkl[1]), hkl[2])
}

/// Convert 4-term hexagonal Miller-Bravais (hkil) plane indices to 3-term
/// Miller (hkl) indices.
///
/// # Returns
/// [`IndexError::BravaisSum`] if h + k + i is not zero within tolerance.
pub fn plane4to3(hkil: &Vector4<f64>) -> Result<Vector3<f64>, IndexError> {
    if (hkil[0] + hkil[1] + hkil[2]).abs() > INDEX_TOLERANCE {
        return Err(IndexError::BravaisSum);
    }
    Ok(Vector3::new(hkil[0], hkil[1], hkil[3]))
}

/// Convert [uvw] direction indices to a Cartesian vector relative to the
/// given cell: u*a1 + v*a2 + w*a3.
pub fn vector_crystal_to_cartesian(uvw: &Vector3<f64>, lattice: &Lattice) -> Vector3<f64> {
    lattice.crystal_to_cartesian(uvw)
}
