// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Bilinear map and the fused multi-pairing check.
//!
//! Both verifiers reduce to one question: is the product of a handful of
//! pairings the target-group identity? Answering it with a single shared
//! Miller loop means the dominant final exponentiation is paid once, no
//! matter how many pairs the check covers.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::Zero;
use g16_types::{validate_g1, validate_g2, G16Result};

/// The bilinear map `e: G1 x G2 -> GT`, satisfying `e(aP, bQ) = e(P, Q)^(ab)`.
pub fn pair(p: &G1Affine, q: &G2Affine) -> PairingOutput<Bn254> {
    Bn254::pairing(*p, *q)
}

/// True iff the product of all pairings equals the target-group identity.
///
/// Every point is checked against its curve invariant before any pairing
/// work: the map is undefined off-curve, and a bad point must surface as
/// [`g16_types::VerifyError::InvalidPoint`] rather than a wrong boolean.
pub fn multi_pairing_check(pairs: &[(G1Affine, G2Affine)]) -> G16Result<bool> {
    for (p, q) in pairs {
        validate_g1(p)?;
        validate_g2(q)?;
    }
    let (g1, g2): (Vec<_>, Vec<_>) = pairs.iter().copied().unzip();
    Ok(Bn254::multi_pairing(g1, g2).is_zero())
}
