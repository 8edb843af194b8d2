// Miller module: crystallographic index representations and conversions
// Covers 3-term Miller <-> 4-term Miller-Bravais maps for directions and
// planes, and primitive <-> conventional cell-setting conversions

// ======================== MODULE DECLARATIONS ========================
pub mod conversions;
pub mod settings;

mod _tests_settings;

// ======================== INDEX REPRESENTATIONS & FORMAT CONVERSION ========================
pub use conversions::{
    MillerIndex,                 // enum - 3-term Miller or 4-term Miller-Bravais indices
    vector3to4,                  // fn(uvw: &Vector3<f64>) -> Vector4<f64> - [uvw] to [uvtw], real-valued
    vector4to3,                  // fn(uvtw: &Vector4<f64>) -> Result<Vector3<f64>, IndexError> - [uvtw] to [uvw]
    plane3to4,                   // fn(hkl: &Vector3<f64>) -> Vector4<f64> - (hkl) to (hkil)
    plane4to3,                   // fn(hkil: &Vector4<f64>) -> Result<Vector3<f64>, IndexError> - (hkil) to (hkl)
    vector_crystal_to_cartesian, // fn(uvw: &Vector3<f64>, lattice: &Lattice) -> Vector3<f64> - indices to Cartesian
};

// ======================== CELL-SETTING CONVERSION ========================
pub use settings::{
    CellSetting,                       // enum - conventional cell setting (p, a, b, c, i, f)
    vector_primitive_to_conventional,  // fn(uvw, setting) -> Vector3<f64> - direction indices, primitive cell to conventional
    vector_conventional_to_primitive,  // fn(uvw, setting) -> Vector3<f64> - direction indices, conventional cell to primitive
    plane_primitive_to_conventional,   // fn(hkl, setting) -> Vector3<f64> - plane indices, primitive cell to conventional
    plane_conventional_to_primitive,   // fn(hkl, setting) -> Vector3<f64> - plane indices, conventional cell to primitive
};
