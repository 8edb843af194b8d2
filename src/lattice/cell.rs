use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::errors::LatticeError;

/// A 3D unit cell.
///
/// Immutable value object: the derived quantities (reciprocal basis, metric
/// tensor, volume) are computed once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// Real-space cell edge vectors (columns).
    direct: Matrix3<f64>,
    /// Reciprocal basis vectors (columns), crystallographic convention
    /// (A^-1)^T without the 2π factor.
    reciprocal: Matrix3<f64>,
    /// Metric tensor G = A^T * A.
    metric: Matrix3<f64>,
    /// Cell volume = det(A).
    volume: f64,
}

impl Lattice {
    /// Construct a cell from its edge vectors given as matrix columns.
    ///
    /// # Returns
    /// [`LatticeError`] if the columns are linearly dependent or too close
    /// to zero.
    pub fn from_matrix(direct: Matrix3<f64>) -> Result<Self, LatticeError> {
        let volume = direct.determinant();
        if volume.abs() < BASE_VECTOR_TOLERANCE {
            return Err(LatticeError);
        }

        let inverse = direct.try_inverse().ok_or(LatticeError)?;
        let reciprocal = inverse.transpose();
        let metric = direct.transpose() * direct;

        Ok(Lattice {
            direct,
            reciprocal,
            metric,
            volume,
        })
    }

    /// Construct a cell from its three edge vectors.
    pub fn from_vectors(
        a1: Vector3<f64>,
        a2: Vector3<f64>,
        a3: Vector3<f64>,
    ) -> Result<Self, LatticeError> {
        Self::from_matrix(Matrix3::from_columns(&[a1, a2, a3]))
    }

    /// Real-space basis matrix (edge vectors as columns).
    pub fn direct(&self) -> &Matrix3<f64> {
        &self.direct
    }

    /// Reciprocal basis matrix (reciprocal vectors as columns).
    pub fn reciprocal(&self) -> &Matrix3<f64> {
        &self.reciprocal
    }

    /// Metric tensor G = A^T * A.
    pub fn metric(&self) -> &Matrix3<f64> {
        &self.metric
    }

    /// Cell volume.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Lattice parameters (a, b, c): the edge vector lengths.
    pub fn parameters(&self) -> (f64, f64, f64) {
        (
            self.direct.column(0).norm(),
            self.direct.column(1).norm(),
            self.direct.column(2).norm(),
        )
    }

    /// Cell angles (α, β, γ) in radians: α between b and c, β between a and
    /// c, γ between a and b.
    pub fn angles(&self) -> (f64, f64, f64) {
        let (a, b, c) = self.parameters();
        let alpha = (self.metric[(1, 2)] / (b * c)).clamp(-1.0, 1.0).acos();
        let beta = (self.metric[(0, 2)] / (a * c)).clamp(-1.0, 1.0).acos();
        let gamma = (self.metric[(0, 1)] / (a * b)).clamp(-1.0, 1.0).acos();
        (alpha, beta, gamma)
    }

    /// Whether the cell is hexagonal: a = b, α = β = 90°, γ = 120° within
    /// tolerance.
    pub fn is_hexagonal(&self, tol: f64) -> bool {
        let (a, b, _) = self.parameters();
        let (alpha, beta, gamma) = self.angles();
        (a - b).abs() < tol * a.max(b)
            && (alpha - PI / 2.0).abs() < tol
            && (beta - PI / 2.0).abs() < tol
            && (gamma - 2.0 * PI / 3.0).abs() < tol
    }

    /// Convert [uvw] direction indices to a Cartesian vector:
    /// u*a1 + v*a2 + w*a3.
    pub fn crystal_to_cartesian(&self, uvw: &Vector3<f64>) -> Vector3<f64> {
        self.direct * uvw
    }

    /// Cartesian normal of the (hkl) plane: h*a1* + k*a2* + l*a3*.
    ///
    /// Not normalized; only the direction is meaningful.
    pub fn plane_normal(&self, hkl: &Vector3<f64>) -> Vector3<f64> {
        self.reciprocal * hkl
    }
}

impl Default for Lattice {
    /// Cubic cell with unit edge.
    fn default() -> Self {
        Lattice {
            direct: Matrix3::identity(),
            reciprocal: Matrix3::identity(),
            metric: Matrix3::identity(),
            volume: 1.0,
        }
    }
}
