// Constants

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // For cell matrix degeneracy checks
pub const LATTICE_TOLERANCE: f64 = 1e-8; // For lattice parameter / angle comparisons
pub const INDEX_TOLERANCE: f64 = 1e-8; // For index integrality and h+k+i sum checks
pub const LENGTH_TOLERANCE: f64 = 1e-8; // Relative, for shortest-vector comparisons
pub const ANGLE_TOLERANCE: f64 = 1e-8; // For smallest-angle comparisons (on cosines)

// Bounds
pub const MAX_DENOMINATOR: i64 = 96; // Largest multiplier tried when scaling indices to integers
