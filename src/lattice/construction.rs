use nalgebra::Matrix3;

use crate::errors::LatticeError;
use crate::lattice::Lattice;

/// Standard cell construction utilities for common unit cells

/// Create a cubic cell with lattice parameter a
pub fn cubic_cell(a: f64) -> Result<Lattice, LatticeError> {
    Lattice::from_matrix(Matrix3::new(a, 0.0, 0.0, 0.0, a, 0.0, 0.0, 0.0, a))
}

/// Create an orthorhombic cell with lattice parameters a, b, c
pub fn orthorhombic_cell(a: f64, b: f64, c: f64) -> Result<Lattice, LatticeError> {
    Lattice::from_matrix(Matrix3::new(a, 0.0, 0.0, 0.0, b, 0.0, 0.0, 0.0, c))
}

/// Create a hexagonal cell with lattice parameters a, c (γ = 120°)
pub fn hexagonal_cell(a: f64, c: f64) -> Result<Lattice, LatticeError> {
    let direct = Matrix3::new(
        a,
        -a / 2.0,
        0.0,
        0.0,
        a * 3.0_f64.sqrt() / 2.0,
        0.0,
        0.0,
        0.0,
        c,
    );
    Lattice::from_matrix(direct)
}

/// Create the primitive cell of a face-centered cubic lattice with
/// conventional lattice parameter a
pub fn fcc_primitive_cell(a: f64) -> Result<Lattice, LatticeError> {
    let h = a / 2.0;
    let direct = Matrix3::new(0.0, h, h, h, 0.0, h, h, h, 0.0);
    Lattice::from_matrix(direct)
}

/// Create the primitive cell of a body-centered cubic lattice with
/// conventional lattice parameter a
pub fn bcc_primitive_cell(a: f64) -> Result<Lattice, LatticeError> {
    let h = a / 2.0;
    let direct = Matrix3::new(-h, h, h, h, -h, h, h, h, -h);
    Lattice::from_matrix(direct)
}

/// Create a triclinic cell from lattice parameters a, b, c and angles
/// α, β, γ (radians), with a1 along x and a2 in the xy-plane
pub fn triclinic_cell(
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> Result<Lattice, LatticeError> {
    let cx = c * beta.cos();
    let cy = c * (alpha.cos() - beta.cos() * gamma.cos()) / gamma.sin();
    let cz_sq = c * c - cx * cx - cy * cy;
    if cz_sq <= 0.0 {
        return Err(LatticeError);
    }

    let direct = Matrix3::new(
        a,
        b * gamma.cos(),
        cx,
        0.0,
        b * gamma.sin(),
        cy,
        0.0,
        0.0,
        cz_sq.sqrt(),
    );
    Lattice::from_matrix(direct)
}
