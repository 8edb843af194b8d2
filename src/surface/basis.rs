use log::debug;
use nalgebra::{Matrix3, Matrix3x4, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{ANGLE_TOLERANCE, LATTICE_TOLERANCE, LENGTH_TOLERANCE};
use crate::errors::{BasisSearchError, IndexError, SearchStage, SurfaceBasisError};
use crate::lattice::Lattice;
use crate::miller::{
    plane4to3, plane_conventional_to_primitive, vector3to4, vector_primitive_to_conventional,
    CellSetting, MillerIndex,
};
use crate::surface::search::{
    canonical_sign, coefficient_pairs, component_triples, lcm, rationalize, reduce_by_gcd,
};

/// Which of the three returned vectors is the out-of-plane one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutAxis {
    A,
    B,
    #[default]
    C,
}

/// Options for [`free_surface_basis`]. The defaults match a plain 3-index
/// call: out-of-plane vector last, auto-computed search window, 3-index
/// output, no plane normal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasisOptions {
    /// Position of the out-of-plane vector in the output rows.
    pub cut_axis: CutAxis,
    /// Bound on the integer search window. When `None` the window is the
    /// largest absolute value among the reduced plane indices and the
    /// initial template components. Never grown automatically.
    pub max_index: Option<i64>,
    /// Emit 4-index Miller-Bravais rows. Defaults to true for 4-index input
    /// and false otherwise.
    pub return_hexagonal: Option<bool>,
    /// Also compute the unit Cartesian plane normal.
    pub return_plane_normal: bool,
    /// Set when the supplied cell is a primitive cell and the plane indices
    /// are given relative to the conventional cell of this setting. Output
    /// rows are converted back to conventional indices.
    pub conventional_setting: Option<CellSetting>,
}

/// Three direction rows, in 3-index Miller or 4-index Miller-Bravais form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DirectionSet {
    /// Rows are [u, v, w] indices.
    Miller(Matrix3<f64>),
    /// Rows are [u, v, t, w] indices.
    MillerBravais(Matrix3x4<f64>),
}

impl DirectionSet {
    /// The 3-index form, if that is what was produced.
    pub fn miller(&self) -> Option<&Matrix3<f64>> {
        match self {
            DirectionSet::Miller(m) => Some(m),
            DirectionSet::MillerBravais(_) => None,
        }
    }

    /// The 4-index form, if that is what was produced.
    pub fn miller_bravais(&self) -> Option<&Matrix3x4<f64>> {
        match self {
            DirectionSet::Miller(_) => None,
            DirectionSet::MillerBravais(m) => Some(m),
        }
    }
}

/// Result of the free-surface basis search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBasis {
    /// Direction rows: two in-plane vectors and one out-of-plane vector,
    /// arranged according to [`BasisOptions::cut_axis`].
    pub vectors: DirectionSet,
    /// Unit Cartesian plane normal, when requested.
    pub plane_normal: Option<Vector3<f64>>,
}

/// Find periodic lattice vectors suitable for building a slab with the given
/// crystallographic plane as a free surface.
///
/// Returns three integer (or small-rational, after cell-setting conversion)
/// direction vectors: two spanning the (hkl) plane and one out-of-plane
/// vector chosen closest in direction to the plane normal. All three are
/// exact lattice translations.
///
/// # Arguments
/// * `hkl` - Plane indices, 3-term Miller or 4-term Miller-Bravais
/// * `lattice` - Unit cell; lengths and angles for the searches
/// * `options` - Cut axis, window bound, output-format flags, cell setting
///
/// # Errors
/// [`IndexError`] for malformed input (wrong length, degenerate plane,
/// hexagonal indices against a non-hexagonal cell); [`BasisSearchError`]
/// when the bounded search window holds no admissible candidate.
pub fn free_surface_basis(
    hkl: &[f64],
    lattice: &Lattice,
    options: &BasisOptions,
) -> Result<SurfaceBasis, SurfaceBasisError> {
    // Step 1: normalize the input format.
    let index = MillerIndex::from_slice(hkl)?;
    let return_hexagonal = options
        .return_hexagonal
        .unwrap_or(matches!(index, MillerIndex::MillerBravais(_)));

    let plane = match index {
        MillerIndex::Miller(v) => v,
        MillerIndex::MillerBravais(v) => {
            if !lattice.is_hexagonal(LATTICE_TOLERANCE) {
                return Err(IndexError::HexagonalRequired.into());
            }
            plane4to3(&v)?
        }
    };
    if return_hexagonal && !lattice.is_hexagonal(LATTICE_TOLERANCE) {
        return Err(IndexError::HexagonalRequired.into());
    }

    // Step 2: conventional -> primitive, reciprocal-space map.
    let plane = match options.conventional_setting {
        Some(setting) => plane_conventional_to_primitive(&plane, setting),
        None => plane,
    };

    // Step 3: reduce to coprime integers; reject the degenerate plane.
    let plane = rationalize(&plane)?;
    if plane == Vector3::zeros() {
        return Err(IndexError::DegeneratePlane.into());
    }
    debug!("reduced plane indices: {:?}", plane);

    // Step 4: closed-form in-plane templates from the zero pattern.
    let (template_a, template_b) = in_plane_templates(&plane);
    let template_a = reduce_by_gcd(template_a);
    let template_b = reduce_by_gcd(template_b);
    debug!("in-plane templates: {:?}, {:?}", template_a, template_b);

    // Step 5: search window, explicit or from the largest index seen so far.
    let window = options.max_index.unwrap_or_else(|| {
        plane
            .iter()
            .chain(template_a.iter())
            .chain(template_b.iter())
            .map(|x| x.abs())
            .max()
            .unwrap_or(1)
    });
    debug!("search window: {}", window);

    // Steps 6-7: shortest in-plane pair over bounded template combinations.
    let first = shortest_in_plane(&template_a, &template_b, window, lattice, None)?;
    let second = shortest_in_plane(&template_a, &template_b, window, lattice, Some(&first))?;

    // Step 8: out-of-plane vector closest in direction to the plane normal.
    let normal = lattice.plane_normal(&plane.map(|x| x as f64));
    let third = out_of_plane(&first, &second, window, &normal, lattice)?;
    debug!("selected basis: {:?}, {:?}, {:?}", first, second, third);

    // Step 9: arrange rows cyclically so handedness survives the cut choice.
    let rows = match options.cut_axis {
        CutAxis::C => [first, second, third],
        CutAxis::A => [third, first, second],
        CutAxis::B => [second, third, first],
    };
    let mut rows = rows.map(|v| v.map(|x| x as f64));
    if let Some(setting) = options.conventional_setting {
        rows = rows.map(|r| vector_primitive_to_conventional(&r, setting));
    }

    let vectors = if return_hexagonal {
        let expanded = rows.map(|r| vector3to4(&r).transpose());
        DirectionSet::MillerBravais(Matrix3x4::from_rows(&expanded))
    } else {
        let transposed = rows.map(|r| r.transpose());
        DirectionSet::Miller(Matrix3::from_rows(&transposed))
    };

    let plane_normal = options.return_plane_normal.then(|| normal.normalize());

    Ok(SurfaceBasis {
        vectors,
        plane_normal,
    })
}

/// Closed-form in-plane direction templates for a coprime integer plane.
///
/// Built from reciprocals of the nonzero components scaled by their least
/// common multiple so both templates are exact integer vectors with zero
/// dot product against (h, k, l).
fn in_plane_templates(plane: &Vector3<i64>) -> (Vector3<i64>, Vector3<i64>) {
    let zeros: Vec<usize> = (0..3).filter(|&i| plane[i] == 0).collect();

    match zeros.len() {
        // General (hkl): vectors between the plane's axis intercepts.
        0 => {
            let m = lcm(lcm(plane[0], plane[1]), plane[2]);
            (
                Vector3::new(m / plane[0], -m / plane[1], 0),
                Vector3::new(m / plane[0], 0, -m / plane[2]),
            )
        }
        // (hk0) type: the zero component's axis lies in the plane.
        1 => {
            let z = zeros[0];
            let p = (z + 1) % 3;
            let q = (z + 2) % 3;
            let m = lcm(plane[p], plane[q]);
            let mut axis = Vector3::zeros();
            axis[z] = 1;
            let mut cross = Vector3::zeros();
            cross[p] = m / plane[p];
            cross[q] = -m / plane[q];
            (axis, cross)
        }
        // (h00) type: both remaining axes span the plane.
        2 => {
            let p = (0..3).find(|&i| plane[i] != 0).unwrap_or(0);
            let mut a = Vector3::zeros();
            a[(p + 1) % 3] = 1;
            let mut b = Vector3::zeros();
            b[(p + 2) % 3] = 1;
            (a, b)
        }
        _ => unreachable!("degenerate plane rejected before template construction"),
    }
}

/// Shortest nonzero integer combination of the two templates within the
/// window, excluding candidates parallel to `exclude` when given.
///
/// Candidate membership uses exact integer arithmetic; lengths are compared
/// in Cartesian space with a relative tolerance, first found wins ties.
fn shortest_in_plane(
    template_a: &Vector3<i64>,
    template_b: &Vector3<i64>,
    window: i64,
    lattice: &Lattice,
    exclude: Option<&Vector3<i64>>,
) -> Result<Vector3<i64>, BasisSearchError> {
    let mut best: Option<Vector3<i64>> = None;
    let mut best_length = f64::INFINITY;

    for (i, j) in coefficient_pairs(window) {
        let candidate = template_a * i + template_b * j;
        if candidate == Vector3::zeros() {
            continue;
        }
        if let Some(previous) = exclude {
            if candidate.cross(previous) == Vector3::zeros() {
                continue;
            }
        }

        let length = lattice
            .crystal_to_cartesian(&candidate.map(|x| x as f64))
            .norm();
        if best.is_none() || length < best_length * (1.0 - LENGTH_TOLERANCE) {
            best = Some(candidate);
            best_length = length;
        }
    }

    best.map(canonical_sign).ok_or(BasisSearchError {
        stage: SearchStage::InPlane,
        window,
    })
}

/// Integer direction within the window that is non-coplanar with the
/// in-plane pair and closest in direction to the Cartesian plane normal.
///
/// Coplanarity is decided with the exact integer scalar triple product; the
/// angle comparison is on cosines with an absolute tolerance, first found
/// wins ties.
fn out_of_plane(
    in_plane_a: &Vector3<i64>,
    in_plane_b: &Vector3<i64>,
    window: i64,
    normal: &Vector3<f64>,
    lattice: &Lattice,
) -> Result<Vector3<i64>, BasisSearchError> {
    let normal_length = normal.norm();
    let cross = in_plane_a.cross(in_plane_b);

    let mut best: Option<Vector3<i64>> = None;
    let mut best_cosine = f64::NEG_INFINITY;

    for candidate in component_triples(window) {
        if candidate == Vector3::zeros() || cross.dot(&candidate) == 0 {
            continue;
        }

        let cartesian = lattice.crystal_to_cartesian(&candidate.map(|x| x as f64));
        let cosine = cartesian.dot(normal) / (cartesian.norm() * normal_length);
        if cosine > best_cosine + ANGLE_TOLERANCE {
            best = Some(candidate);
            best_cosine = cosine;
        }
    }

    best.ok_or(BasisSearchError {
        stage: SearchStage::OutOfPlane,
        window,
    })
}
