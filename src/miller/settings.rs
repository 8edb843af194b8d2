use std::str::FromStr;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::IndexError;

/// Conventional cell setting: which positions of the conventional cell carry
/// lattice points beyond the corners.
///
/// Tokens follow the crystallographic convention: `p` primitive, `a`/`b`/`c`
/// side-centered, `i` body-centered, `f` face-centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellSetting {
    Primitive,
    ACentered,
    BCentered,
    CCentered,
    BodyCentered,
    FaceCentered,
}

impl CellSetting {
    pub const ALL: [CellSetting; 6] = [
        CellSetting::Primitive,
        CellSetting::ACentered,
        CellSetting::BCentered,
        CellSetting::CCentered,
        CellSetting::BodyCentered,
        CellSetting::FaceCentered,
    ];

    /// The one-letter setting token.
    pub fn token(self) -> char {
        match self {
            CellSetting::Primitive => 'p',
            CellSetting::ACentered => 'a',
            CellSetting::BCentered => 'b',
            CellSetting::CCentered => 'c',
            CellSetting::BodyCentered => 'i',
            CellSetting::FaceCentered => 'f',
        }
    }

    /// Rows are the primitive cell vectors expressed in the conventional
    /// basis.
    pub fn primitive_vectors(self) -> Matrix3<f64> {
        match self {
            CellSetting::Primitive => Matrix3::identity(),
            CellSetting::ACentered => Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, 0.5, 0.5, //
                0.0, -0.5, 0.5,
            ),
            CellSetting::BCentered => Matrix3::new(
                0.5, 0.0, 0.5, //
                0.0, 1.0, 0.0, //
                -0.5, 0.0, 0.5,
            ),
            CellSetting::CCentered => Matrix3::new(
                0.5, 0.5, 0.0, //
                -0.5, 0.5, 0.0, //
                0.0, 0.0, 1.0,
            ),
            CellSetting::BodyCentered => Matrix3::new(
                0.5, 0.5, 0.5, //
                -0.5, 0.5, -0.5, //
                -0.5, -0.5, 0.5,
            ),
            CellSetting::FaceCentered => Matrix3::new(
                0.5, 0.5, 0.0, //
                0.5, 0.0, 0.5, //
                0.0, 0.5, 0.5,
            ),
        }
    }

    /// Rows are the conventional cell vectors expressed in the primitive
    /// basis. Exact inverse of [`CellSetting::primitive_vectors`].
    pub fn conventional_vectors(self) -> Matrix3<f64> {
        match self {
            CellSetting::Primitive => Matrix3::identity(),
            CellSetting::ACentered => Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, 1.0, -1.0, //
                0.0, 1.0, 1.0,
            ),
            CellSetting::BCentered => Matrix3::new(
                1.0, 0.0, -1.0, //
                0.0, 1.0, 0.0, //
                1.0, 0.0, 1.0,
            ),
            CellSetting::CCentered => Matrix3::new(
                1.0, -1.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ),
            CellSetting::BodyCentered => Matrix3::new(
                0.0, -1.0, -1.0, //
                1.0, 1.0, 0.0, //
                1.0, 0.0, 1.0,
            ),
            CellSetting::FaceCentered => Matrix3::new(
                1.0, 1.0, -1.0, //
                1.0, -1.0, 1.0, //
                -1.0, 1.0, 1.0,
            ),
        }
    }
}

impl FromStr for CellSetting {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p" => Ok(CellSetting::Primitive),
            "a" => Ok(CellSetting::ACentered),
            "b" => Ok(CellSetting::BCentered),
            "c" => Ok(CellSetting::CCentered),
            "i" => Ok(CellSetting::BodyCentered),
            "f" => Ok(CellSetting::FaceCentered),
            other => Err(IndexError::UnknownSetting(other.to_string())),
        }
    }
}

/// Convert [uvw] direction indices relative to the primitive cell to indices
/// relative to the conventional cell of the given setting.
pub fn vector_primitive_to_conventional(uvw: &Vector3<f64>, setting: CellSetting) -> Vector3<f64> {
    setting.primitive_vectors().transpose() * uvw
}

/// Convert [uvw] direction indices relative to the conventional cell of the
/// given setting to indices relative to the primitive cell.
///
/// Exact inverse of [`vector_primitive_to_conventional`] for every setting.
pub fn vector_conventional_to_primitive(uvw: &Vector3<f64>, setting: CellSetting) -> Vector3<f64> {
    setting.conventional_vectors().transpose() * uvw
}

/// Convert (hkl) plane indices relative to the conventional cell to indices
/// relative to the primitive cell.
///
/// Plane indices live in reciprocal space and therefore transform with the
/// primitive-vector matrix directly, not with its transpose inverse.
pub fn plane_conventional_to_primitive(hkl: &Vector3<f64>, setting: CellSetting) -> Vector3<f64> {
    setting.primitive_vectors() * hkl
}

/// Convert (hkl) plane indices relative to the primitive cell to indices
/// relative to the conventional cell of the given setting.
///
/// Exact inverse of [`plane_conventional_to_primitive`] for every setting.
pub fn plane_primitive_to_conventional(hkl: &Vector3<f64>, setting: CellSetting) -> Vector3<f64> {
    setting.conventional_vectors() * hkl
}
