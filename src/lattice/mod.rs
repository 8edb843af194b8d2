// Lattice module: unit-cell geometry and standard cell constructors

// ======================== MODULE DECLARATIONS ========================
pub mod cell;
pub mod construction;

// Test modules
mod _tests_cell;

// ======================== UNIT CELL ========================
pub use cell::Lattice; // struct - immutable 3D unit cell
// Lattice impl methods:
//   from_matrix(direct: Matrix3<f64>) -> Result<Self, LatticeError>  - constructs from edge vectors as columns
//   from_vectors(a1, a2, a3) -> Result<Self, LatticeError>           - constructs from three edge vectors
//   direct(&self) -> &Matrix3<f64>                                   - real-space basis matrix
//   reciprocal(&self) -> &Matrix3<f64>                               - reciprocal basis matrix (no 2π factor)
//   metric(&self) -> &Matrix3<f64>                                   - metric tensor G = A^T * A
//   volume(&self) -> f64                                             - cell volume
//   parameters(&self) -> (f64, f64, f64)                             - lattice constants a, b, c
//   angles(&self) -> (f64, f64, f64)                                 - cell angles α, β, γ in radians
//   is_hexagonal(&self, tol: f64) -> bool                            - a = b, α = β = 90°, γ = 120°
//   crystal_to_cartesian(&self, uvw: &Vector3<f64>) -> Vector3<f64>  - [uvw] indices to Cartesian vector
//   plane_normal(&self, hkl: &Vector3<f64>) -> Vector3<f64>          - Cartesian (hkl) plane normal, unnormalized

// ======================== CELL CONSTRUCTION UTILITIES ========================
pub use construction::{
    cubic_cell,         // fn(a: f64) -> Result<Lattice, LatticeError> - cubic cell with parameter a
    orthorhombic_cell,  // fn(a: f64, b: f64, c: f64) -> Result<Lattice, LatticeError> - orthorhombic cell
    hexagonal_cell,     // fn(a: f64, c: f64) -> Result<Lattice, LatticeError> - hexagonal cell, γ = 120°
    fcc_primitive_cell, // fn(a: f64) -> Result<Lattice, LatticeError> - fcc primitive cell, conventional parameter a
    bcc_primitive_cell, // fn(a: f64) -> Result<Lattice, LatticeError> - bcc primitive cell, conventional parameter a
    triclinic_cell,     // fn(a, b, c, alpha, beta, gamma) -> Result<Lattice, LatticeError> - general cell
};
