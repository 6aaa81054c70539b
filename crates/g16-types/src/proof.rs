// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 proof and its flat wire layout.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_serialize::CanonicalSerialize;

use crate::error::{G16Result, VerifyError};
use crate::point::{decode_g1, decode_g2, encode_g1, encode_g2, validate_g1, validate_g2};

/// Flat length of an encoded proof: `[a.x, a.y, b.x1, b.x0, b.y1, b.y0, c.x, c.y]`.
pub const PROOF_LEN: usize = 8;

/// Groth16 proof: two G1 points and one G2 point.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

impl Proof {
    /// Decode from the flat 8-element layout.
    pub fn from_flat<S: AsRef<str>>(flat: &[S]) -> G16Result<Self> {
        if flat.len() != PROOF_LEN {
            return Err(VerifyError::MalformedInput(format!(
                "proof must be {PROOF_LEN} elements, got {}",
                flat.len()
            )));
        }
        let s = |i: usize| flat[i].as_ref();
        Ok(Self {
            a: decode_g1(s(0), s(1))?,
            b: decode_g2(s(2), s(3), s(4), s(5))?,
            c: decode_g1(s(6), s(7))?,
        })
    }

    /// Re-encode to the flat layout, reproducing the Fq2 coordinate swap.
    pub fn to_flat(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(PROOF_LEN);
        out.extend(encode_g1(&self.a));
        out.extend(encode_g2(&self.b));
        out.extend(encode_g1(&self.c));
        out
    }

    /// Check all three points against their curve invariants.
    pub fn validate(&self) -> G16Result<()> {
        validate_g1(&self.a)?;
        validate_g2(&self.b)?;
        validate_g1(&self.c)
    }
}

impl From<&ark_groth16::Proof<Bn254>> for Proof {
    fn from(p: &ark_groth16::Proof<Bn254>) -> Self {
        Self { a: p.a, b: p.b, c: p.c }
    }
}
