use nalgebra::Vector3;

use crate::config::{INDEX_TOLERANCE, MAX_DENOMINATOR};
use crate::errors::IndexError;

/// Greatest common divisor (Euclidean algorithm).
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Greatest common divisor of three values.
pub fn gcd3(a: i64, b: i64, c: i64) -> i64 {
    gcd(gcd(a, b), c)
}

/// Least common multiple; lcm(0, b) = 0 by convention.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Divide an integer vector by the gcd of its components.
pub fn reduce_by_gcd(v: Vector3<i64>) -> Vector3<i64> {
    let g = gcd3(v[0], v[1], v[2]);
    if g == 0 {
        v
    } else {
        v / g
    }
}

/// Flip the sign of an integer vector so its first nonzero component is
/// positive.
pub fn canonical_sign(v: Vector3<i64>) -> Vector3<i64> {
    for component in v.iter() {
        if *component != 0 {
            return if *component < 0 { -v } else { v };
        }
    }
    v
}

/// Scale a real vector to the smallest coprime integer representation.
///
/// Tries multipliers 1..=[`MAX_DENOMINATOR`] until every scaled component is
/// within tolerance of an integer, then reduces by the component gcd. The
/// multiplier search never grows beyond the fixed limit.
///
/// # Returns
/// [`IndexError::NotRational`] if no admissible multiplier exists.
pub fn rationalize(v: &Vector3<f64>) -> Result<Vector3<i64>, IndexError> {
    for multiplier in 1..=MAX_DENOMINATOR {
        let scaled = v * multiplier as f64;
        let rounded = scaled.map(|x| x.round());
        if (scaled - rounded).amax() < INDEX_TOLERANCE {
            let ints = Vector3::new(rounded[0] as i64, rounded[1] as i64, rounded[2] as i64);
            return Ok(reduce_by_gcd(ints));
        }
    }
    Err(IndexError::NotRational(MAX_DENOMINATOR))
}

/// All integer coefficient pairs with |i|, |j| <= window, ordered by
/// increasing shell (max absolute component) and lexicographically within a
/// shell. The fixed order makes first-found tie-breaking deterministic.
pub fn coefficient_pairs(window: i64) -> Vec<(i64, i64)> {
    let mut pairs = Vec::with_capacity(((2 * window + 1) * (2 * window + 1)) as usize);
    for i in -window..=window {
        for j in -window..=window {
            pairs.push((i, j));
        }
    }
    pairs.sort_by_key(|&(i, j)| (i.abs().max(j.abs()), i, j));
    pairs
}

/// All integer component triples with |u|, |v|, |w| <= window, in the same
/// shell-then-lexicographic order as [`coefficient_pairs`].
pub fn component_triples(window: i64) -> Vec<Vector3<i64>> {
    let count = (2 * window + 1).pow(3) as usize;
    let mut triples = Vec::with_capacity(count);
    for u in -window..=window {
        for v in -window..=window {
            for w in -window..=window {
                triples.push(Vector3::new(u, v, w));
            }
        }
    }
    triples.sort_by_key(|t| (t[0].abs().max(t[1].abs()).max(t[2].abs()), t[0], t[1], t[2]));
    triples
}
