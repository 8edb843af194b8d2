use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating crystallographic indices or setting tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Index has the wrong number of components (3 expected for Miller,
    /// 4 for Miller-Bravais).
    #[error("invalid index dimensions ({0} components)")]
    InvalidDimensions(usize),

    /// Miller-Bravais indices must satisfy h + k + i = 0 (u + v + t = 0 for
    /// directions).
    #[error("invalid indices: first three components must sum to zero")]
    BravaisSum,

    /// The (0, 0, 0) plane does not define a surface.
    #[error("degenerate plane indices (0, 0, 0)")]
    DegeneratePlane,

    /// Unrecognized conventional cell setting token.
    #[error("unknown lattice setting '{0}'; allowed values are p, a, b, c, i and f")]
    UnknownSetting(String),

    /// Four-index input or output was requested against a non-hexagonal cell.
    #[error("hexagonal indices require a hexagonal cell")]
    HexagonalRequired,

    /// Plane indices could not be scaled to integers.
    #[error("indices cannot be scaled to integers within denominator limit {0}")]
    NotRational(i64),
}

/// Which stage of the bounded basis search ran out of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStage {
    InPlane,
    OutOfPlane,
}

impl fmt::Display for SearchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStage::InPlane => write!(f, "in-plane"),
            SearchStage::OutOfPlane => write!(f, "out-of-plane"),
        }
    }
}

/// The bounded enumeration finished without an admissible candidate.
///
/// Carries the window that was searched; callers may retry with a larger
/// `max_index`. The search itself never widens the window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {stage} vector found within search window {window}; retry with a larger max_index")]
pub struct BasisSearchError {
    pub stage: SearchStage,
    pub window: i64,
}

/// Cell matrix cannot represent a lattice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cell vectors are either linearly dependent or too close to zero")]
pub struct LatticeError;

/// Umbrella error for the free-surface basis solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceBasisError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Search(#[from] BasisSearchError),

    #[error(transparent)]
    Lattice(#[from] LatticeError),
}
