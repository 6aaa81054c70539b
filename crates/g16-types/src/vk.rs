// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verification key: typed structure, decode-time invariants, and the flat
//! wire layout.
//!
//! The flat form is `14 + 2 * ic.len()` decimal strings:
//!
//! ```text
//! [alpha.x, alpha.y,
//!  beta.x1,  beta.x0,  beta.y1,  beta.y0,
//!  gamma.x1, gamma.x0, gamma.y1, gamma.y0,
//!  delta.x1, delta.x0, delta.y1, delta.y0,
//!  ic[0].x, ic[0].y, ic[1].x, ic[1].y, ...]
//! ```
//!
//! with G2 limbs in the swapped order described in [`crate::point`].

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_serialize::CanonicalSerialize;

use crate::error::{G16Result, VerifyError};
use crate::point::{decode_g1, decode_g2, encode_g1, encode_g2, validate_g1, validate_g2};

/// Number of flat elements before the `ic` table.
pub const VK_FIXED_LEN: usize = 14;

/// Groth16 verification key.
///
/// `ic[0]` is the constant term of the public-input linear combination;
/// `ic[1..]` pair with the public inputs in order.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize)]
pub struct VerificationKey {
    pub alpha_g1: G1Affine,
    pub beta_g2: G2Affine,
    pub gamma_g2: G2Affine,
    pub delta_g2: G2Affine,
    pub ic: Vec<G1Affine>,
}

impl VerificationKey {
    /// Number of public inputs the key expects: `ic.len() - 1`.
    pub fn num_public_inputs(&self) -> usize {
        self.ic.len() - 1
    }

    /// Decode from the flat layout and check every invariant once.
    pub fn from_flat<S: AsRef<str>>(flat: &[S]) -> G16Result<Self> {
        if flat.len() < VK_FIXED_LEN + 2 || (flat.len() - VK_FIXED_LEN) % 2 != 0 {
            return Err(VerifyError::MalformedInput(format!(
                "verification key must be 14 + 2*(n+1) elements, got {}",
                flat.len()
            )));
        }
        let s = |i: usize| flat[i].as_ref();
        let vk = Self {
            alpha_g1: decode_g1(s(0), s(1))?,
            beta_g2: decode_g2(s(2), s(3), s(4), s(5))?,
            gamma_g2: decode_g2(s(6), s(7), s(8), s(9))?,
            delta_g2: decode_g2(s(10), s(11), s(12), s(13))?,
            ic: flat[VK_FIXED_LEN..]
                .chunks(2)
                .map(|c| decode_g1(c[0].as_ref(), c[1].as_ref()))
                .collect::<G16Result<Vec<_>>>()?,
        };
        vk.validate()?;
        Ok(vk)
    }

    /// Re-encode to the flat layout, reproducing the Fq2 coordinate swap.
    pub fn to_flat(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(VK_FIXED_LEN + 2 * self.ic.len());
        out.extend(encode_g1(&self.alpha_g1));
        out.extend(encode_g2(&self.beta_g2));
        out.extend(encode_g2(&self.gamma_g2));
        out.extend(encode_g2(&self.delta_g2));
        for p in &self.ic {
            out.extend(encode_g1(p));
        }
        out
    }

    /// Full structural validation: point invariants for every component,
    /// non-empty `ic`, and non-identity fixed points.
    ///
    /// `from_flat` calls this, so decoded keys are valid by construction;
    /// it is public for keys assembled from typed parts.
    pub fn validate(&self) -> G16Result<()> {
        if self.ic.is_empty() {
            return Err(VerifyError::MalformedInput(
                "verification key has an empty ic table".into(),
            ));
        }
        validate_g1(&self.alpha_g1)?;
        validate_g2(&self.beta_g2)?;
        validate_g2(&self.gamma_g2)?;
        validate_g2(&self.delta_g2)?;
        for p in &self.ic {
            validate_g1(p)?;
        }
        // The pairing equation degenerates if any fixed term vanishes; ic
        // entries may legitimately encode zero.
        if self.alpha_g1.is_zero()
            || self.beta_g2.is_zero()
            || self.gamma_g2.is_zero()
            || self.delta_g2.is_zero()
        {
            return Err(VerifyError::MalformedInput(
                "verification key fixed point is the identity".into(),
            ));
        }
        Ok(())
    }
}

impl From<&ark_groth16::VerifyingKey<Bn254>> for VerificationKey {
    fn from(vk: &ark_groth16::VerifyingKey<Bn254>) -> Self {
        Self {
            alpha_g1: vk.alpha_g1,
            beta_g2: vk.beta_g2,
            gamma_g2: vk.gamma_g2,
            delta_g2: vk.delta_g2,
            ic: vk.gamma_abc_g1.clone(),
        }
    }
}
