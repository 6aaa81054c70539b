// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Randomized batch verification: `k` proofs, one shared key, `k + 3`
//! pairings.
//!
//! Verifying each proof alone pays the alpha/gamma/delta terms every time.
//! Raising the i-th verification equation to a random nonzero `r_i` and
//! multiplying them together collapses those shared terms into one
//! contribution each:
//!
//! ```text
//! prod e(r_i*A_i, B_i) * e(-(sum r_i)*alpha, beta)
//!                      * e(-sum r_i*vk_x_i, gamma)
//!                      * e(-sum r_i*C_i, delta)  == 1
//! ```
//!
//! The challenges come from a transcript over the batch's own content, so
//! the check is non-interactive. A batch that fails says only "not all
//! valid"; callers wanting the culprit re-verify individually.

use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::Zero;
use ark_serialize::CanonicalSerialize;
use g16_types::{
    parse_public_inputs, G16Result, Proof, VerificationKey, VerifyError, PROOF_LEN,
};
use tracing::debug;

use crate::pairing::multi_pairing_check;
use crate::transcript::Transcript;

const BATCH_DOMAIN: &[u8] = b"g16.batch.v1";

/// One nonzero challenge per proof, derived from the key and the full batch.
fn batch_challenges(vk: &VerificationKey, batch: &[(Vec<Fr>, Proof)]) -> Vec<Fr> {
    let mut t = Transcript::new(BATCH_DOMAIN);
    let mut buf = Vec::new();
    vk.serialize_compressed(&mut buf).unwrap();
    t.append_bytes(&buf);
    for (inputs, proof) in batch {
        buf.clear();
        inputs.serialize_compressed(&mut buf).unwrap();
        proof.serialize_compressed(&mut buf).unwrap();
        t.append_bytes(&buf);
    }
    batch.iter().map(|_| t.challenge_fr()).collect()
}

/// Verify `k` proofs sharing one verification key, each with its own public
/// inputs, as a single fused pairing check.
///
/// Returns `Ok(true)` only if every proof verifies. Structural problems in
/// *any* proof abort the whole batch with the error that proof would raise
/// individually; all per-proof checks run before any aggregation.
pub fn verify_batch(vk: &VerificationKey, batch: &[(Vec<Fr>, Proof)]) -> G16Result<bool> {
    if batch.is_empty() {
        return Err(VerifyError::MalformedInput("batch contains no proofs".into()));
    }
    let n = vk.num_public_inputs();
    for (inputs, proof) in batch {
        if inputs.len() != n {
            return Err(VerifyError::MalformedInput(format!(
                "expected {n} public inputs, got {}",
                inputs.len()
            )));
        }
        proof.validate()?;
    }

    let r = batch_challenges(vk, batch);
    let sum_r: Fr = r.iter().sum();

    // sum r_i * C_i as one MSM.
    let c_points: Vec<G1Affine> = batch.iter().map(|(_, proof)| proof.c).collect();
    let agg_c = G1Projective::msm(&c_points, &r)
        .map_err(|_| VerifyError::MalformedInput("challenge count mismatch".into()))?;

    // sum r_i * vk_x_i folds column-wise over ic:
    //   (sum r_i)*ic[0] + sum_j (sum_i r_i*x_ij) * ic[j+1]
    let mut folded_inputs = vec![Fr::zero(); n];
    for ((inputs, _), ri) in batch.iter().zip(&r) {
        for (acc, x) in folded_inputs.iter_mut().zip(inputs) {
            *acc += *ri * x;
        }
    }
    let agg_vkx = vk.ic[0] * sum_r
        + G1Projective::msm(&vk.ic[1..], &folded_inputs)
            .map_err(|_| VerifyError::MalformedInput("folded input count mismatch".into()))?;

    // k individual A-terms plus the three folded fixed terms.
    let mut g1: Vec<G1Projective> = batch
        .iter()
        .zip(&r)
        .map(|((_, proof), ri)| proof.a * *ri)
        .collect();
    g1.push(-(vk.alpha_g1 * sum_r));
    g1.push(-agg_vkx);
    g1.push(-agg_c);
    let g1 = G1Projective::normalize_batch(&g1);

    let mut g2 = Vec::with_capacity(batch.len() + 3);
    g2.extend(batch.iter().map(|(_, proof)| proof.b));
    g2.extend([vk.beta_g2, vk.gamma_g2, vk.delta_g2]);

    let pairs: Vec<_> = g1.into_iter().zip(g2).collect();
    multi_pairing_check(&pairs)
}

/// Flat-format entry point for a batch.
///
/// `proofs` is `k` concatenated 8-element proof encodings; `public_inputs`
/// is the `k` input sequences concatenated in the same order (`n` scalars
/// each, where `n` is fixed by the key); `vk` is one shared key.
pub fn verify_many<S: AsRef<str>>(
    public_inputs: &[S],
    proofs: &[S],
    vk: &[S],
) -> G16Result<bool> {
    let vk = VerificationKey::from_flat(vk)?;
    if proofs.is_empty() || proofs.len() % PROOF_LEN != 0 {
        return Err(VerifyError::MalformedInput(format!(
            "proof batch length must be a nonzero multiple of {PROOF_LEN}, got {}",
            proofs.len()
        )));
    }
    let k = proofs.len() / PROOF_LEN;
    let n = vk.num_public_inputs();
    if public_inputs.len() != k * n {
        return Err(VerifyError::MalformedInput(format!(
            "expected {k} x {n} public inputs, got {}",
            public_inputs.len()
        )));
    }

    let mut batch = Vec::with_capacity(k);
    for i in 0..k {
        let inputs = parse_public_inputs(&public_inputs[i * n..(i + 1) * n])?;
        let proof = Proof::from_flat(&proofs[i * PROOF_LEN..(i + 1) * PROOF_LEN])?;
        batch.push((inputs, proof));
    }
    debug!(proofs = k, pairings = k + 3, "batch verification");
    verify_batch(&vk, &batch)
}
