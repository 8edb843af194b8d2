// Surface module: free-surface rotation-basis determination
// Finds periodic integer-index lattice vectors (two in-plane, one
// out-of-plane) for constructing a slab with a given crystallographic plane
// as a free surface

// ======================== MODULE DECLARATIONS ========================
pub mod basis;
pub mod search;


// ======================== FREE-SURFACE BASIS SOLVER ========================
pub use basis::{
    free_surface_basis, // fn(hkl: &[f64], lattice: &Lattice, options: &BasisOptions) -> Result<SurfaceBasis, SurfaceBasisError>
    BasisOptions,       // struct - cut axis, window bound, output-format flags, cell setting
    CutAxis,            // enum - which output row is the out-of-plane vector (default C)
    DirectionSet,       // enum - 3-index or 4-index direction rows
    SurfaceBasis,       // struct - direction rows plus optional unit plane normal
};

// ======================== BOUNDED INTEGER SEARCH HELPERS ========================
pub use search::{
    gcd,                // fn(a: i64, b: i64) -> i64 - Euclidean gcd
    gcd3,               // fn(a: i64, b: i64, c: i64) -> i64 - gcd of three values
    lcm,                // fn(a: i64, b: i64) -> i64 - least common multiple
    rationalize,        // fn(v: &Vector3<f64>) -> Result<Vector3<i64>, IndexError> - scale to coprime integers
    reduce_by_gcd,      // fn(v: Vector3<i64>) -> Vector3<i64> - divide by component gcd
    canonical_sign,     // fn(v: Vector3<i64>) -> Vector3<i64> - first nonzero component positive
    coefficient_pairs,  // fn(window: i64) -> Vec<(i64, i64)> - shell-ordered coefficient enumeration
    component_triples,  // fn(window: i64) -> Vec<Vector3<i64>> - shell-ordered component enumeration
};
