// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve-point decoding, validation, and wire encoding.
//!
//! Wire coordinates are decimal strings in affine form. G2 coordinates
//! arrive with the two components of each `Fq2` element **swapped** relative
//! to `(c0, c1)` order: the index-1 component comes first, matching the
//! snarkjs/EVM layout. The encoder reproduces the swap exactly.
//!
//! All-zero coordinates encode the point at infinity. Neither curve equation
//! has a solution at the origin (`b != 0` on both), so the encoding is
//! unambiguous.

use ark_bn254::{Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::Zero;

use crate::error::{G16Result, VerifyError};
use crate::field::{fq_to_decimal, parse_fq};

/// Check a G1 point against its curve invariant.
///
/// G1 has cofactor 1, so on-curve already implies membership in the
/// r-order group and the subgroup call compiles to a constant.
pub fn validate_g1(p: &G1Affine) -> G16Result<()> {
    if p.is_zero() || (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()) {
        Ok(())
    } else {
        Err(VerifyError::InvalidPoint(format!("G1 point {p} is not on the curve")))
    }
}

/// Check a G2 point against its curve and subgroup invariants.
///
/// The subgroup check is load-bearing here: the twist has composite order,
/// and a point outside the r-order subgroup would make the pairing equation
/// meaningless while still satisfying the curve equation.
pub fn validate_g2(p: &G2Affine) -> G16Result<()> {
    if p.is_zero() || (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()) {
        Ok(())
    } else {
        Err(VerifyError::InvalidPoint(format!(
            "G2 point {p} is not in the r-order twist subgroup"
        )))
    }
}

/// Decode a G1 point from `(x, y)` decimal coordinates.
///
/// `(0, 0)` decodes to the identity; anything else must be on the curve or
/// the decode fails with [`VerifyError::InvalidPoint`]. An off-curve point
/// is never coerced to identity.
pub fn decode_g1(x: &str, y: &str) -> G16Result<G1Affine> {
    let x = parse_fq(x)?;
    let y = parse_fq(y)?;
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::zero());
    }
    let p = G1Affine::new_unchecked(x, y);
    validate_g1(&p)?;
    Ok(p)
}

/// Decode a G2 point from wire-order `(x1, x0, y1, y0)` decimal coordinates.
pub fn decode_g2(x1: &str, x0: &str, y1: &str, y0: &str) -> G16Result<G2Affine> {
    let x = Fq2::new(parse_fq(x0)?, parse_fq(x1)?);
    let y = Fq2::new(parse_fq(y0)?, parse_fq(y1)?);
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::zero());
    }
    let p = G2Affine::new_unchecked(x, y);
    validate_g2(&p)?;
    Ok(p)
}

/// Encode a G1 point as `[x, y]`; the identity becomes `["0", "0"]`.
pub fn encode_g1(p: &G1Affine) -> [String; 2] {
    match p.xy() {
        Some((x, y)) => [fq_to_decimal(&x), fq_to_decimal(&y)],
        None => ["0".into(), "0".into()],
    }
}

/// Encode a G2 point as wire-order `[x1, x0, y1, y0]`.
pub fn encode_g2(p: &G2Affine) -> [String; 4] {
    match p.xy() {
        Some((x, y)) => [
            fq_to_decimal(&x.c1),
            fq_to_decimal(&x.c0),
            fq_to_decimal(&y.c1),
            fq_to_decimal(&y.c0),
        ],
        None => ["0".into(), "0".into(), "0".into(), "0".into()],
    }
}
