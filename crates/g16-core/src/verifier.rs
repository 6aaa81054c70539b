// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Single-proof Groth16 verification.
//!
//! Algorithm:
//! 1. Compute `vk_x = ic[0] + MSM(ic[1..], public_inputs)`
//! 2. Check: `e(A,B) * e(-alpha,beta) * e(-vk_x,gamma) * e(-C,delta) == 1`

use ark_bn254::{Fr, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use g16_types::{parse_public_inputs, G16Result, Proof, VerificationKey, VerifyError};
use tracing::debug;

use crate::pairing::multi_pairing_check;

/// Public-input linear combination `ic[0] + sum(inputs[i] * ic[i+1])` in G1.
///
/// Callers must have checked `inputs.len() == vk.num_public_inputs()`.
fn public_input_lc(vk: &VerificationKey, inputs: &[Fr]) -> G16Result<G1Projective> {
    let msm = G1Projective::msm(&vk.ic[1..], inputs).map_err(|_| {
        VerifyError::MalformedInput("public input count does not match the key".into())
    })?;
    Ok(G1Projective::from(vk.ic[0]) + msm)
}

/// Verify one proof against a key and its public inputs.
///
/// `Ok(false)` means the proof is well-formed but does not attest the
/// statement; errors mean the input was structurally unusable. All
/// structural checks run before any pairing work.
///
/// The key's own invariants are established once at decode time
/// ([`VerificationKey::from_flat`]), not re-derived per call.
pub fn verify_proof(
    vk: &VerificationKey,
    public_inputs: &[Fr],
    proof: &Proof,
) -> G16Result<bool> {
    if public_inputs.len() != vk.num_public_inputs() {
        return Err(VerifyError::MalformedInput(format!(
            "expected {} public inputs, got {}",
            vk.num_public_inputs(),
            public_inputs.len()
        )));
    }
    proof.validate()?;

    let vk_x = public_input_lc(vk, public_inputs)?.into_affine();

    multi_pairing_check(&[
        (proof.a, proof.b),
        (-vk.alpha_g1, vk.beta_g2),
        (-vk_x, vk.gamma_g2),
        (-proof.c, vk.delta_g2),
    ])
}

/// Flat-format entry point: decimal-string sequences as produced by the
/// external encoder. See [`VerificationKey::from_flat`] for the key layout
/// and [`Proof::from_flat`] for the 8-element proof layout.
pub fn verify<S: AsRef<str>>(public_inputs: &[S], proof: &[S], vk: &[S]) -> G16Result<bool> {
    let vk = VerificationKey::from_flat(vk)?;
    let proof = Proof::from_flat(proof)?;
    let inputs = parse_public_inputs(public_inputs)?;
    debug!(inputs = inputs.len(), "verifying proof");
    verify_proof(&vk, &inputs, &proof)
}
