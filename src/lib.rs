//! Free-surface rotation-basis library
//!
//! Given a crystallographic plane in Miller (hkl) or Miller-Bravais (hkil)
//! indices and a unit cell, this library finds three integer-index lattice
//! vectors (two spanning the plane, one out-of-plane) suitable for
//! constructing a periodic slab for free-surface simulations, along with the
//! index-format and cell-setting conversions the search is built on.

pub mod config;
pub mod errors;
pub mod lattice;
pub mod miller;
pub mod surface;

// ======================== ERROR TYPES ========================
pub use errors::{
    BasisSearchError, // struct - bounded search exhausted; carries stage and window
    IndexError,       // enum - malformed, degenerate or unsupported index input
    LatticeError,     // struct - degenerate cell matrix
    SearchStage,      // enum - which search stage ran out of candidates
    SurfaceBasisError, // enum - umbrella error for the solver
};

// ======================== CORE TYPES & SOLVER ========================
pub use lattice::Lattice;
pub use miller::{CellSetting, MillerIndex};
pub use surface::{free_surface_basis, BasisOptions, CutAxis, DirectionSet, SurfaceBasis};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SurfaceBasisError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
