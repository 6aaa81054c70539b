// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end verification against honestly generated proofs.
//!
//! Proofs come from `ark-groth16` over a 2-public-input cube circuit
//! (public `x`, `y`; constraint `y = x^3`), then travel through the flat
//! decimal wire format exactly as an external encoder would produce it.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, ProvingKey};
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use g16_core::{verify, verify_many, G16Result, Proof, VerificationKey, VerifyError};

// ── Test circuits ──

/// Public `x` and `y`, private witness, constraint `y = x^3`.
#[derive(Clone)]
struct CubeCircuit {
    x: Option<Fr>,
    y: Option<Fr>,
}

impl ConstraintSynthesizer<Fr> for CubeCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let x_pub = FpVar::new_input(cs.clone(), || {
            self.x.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let y_pub = FpVar::new_input(cs.clone(), || {
            self.y.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let w = FpVar::new_witness(cs, || self.x.ok_or(SynthesisError::AssignmentMissing))?;
        w.enforce_equal(&x_pub)?;
        let cube = &w * &w * &w;
        cube.enforce_equal(&y_pub)?;
        Ok(())
    }
}

/// No public inputs at all: a single boolean-ness constraint `w^2 = w`.
#[derive(Clone)]
struct BitCircuit {
    w: Option<Fr>,
}

impl ConstraintSynthesizer<Fr> for BitCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let w = FpVar::new_witness(cs, || self.w.ok_or(SynthesisError::AssignmentMissing))?;
        (&w * &w).enforce_equal(&w)?;
        Ok(())
    }
}

// ── Scenario helpers ──

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn cube_setup(rng: &mut StdRng) -> (ProvingKey<Bn254>, Vec<String>) {
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(
        CubeCircuit { x: None, y: None },
        rng,
    )
    .expect("setup failed");
    let vk_flat = VerificationKey::from(&vk).to_flat();
    (pk, vk_flat)
}

/// Prove `y = x^3` for a small x; returns (proof, public inputs) in flat form.
fn cube_prove(pk: &ProvingKey<Bn254>, x: u64, rng: &mut StdRng) -> (Vec<String>, Vec<String>) {
    let y = x * x * x;
    let circuit = CubeCircuit {
        x: Some(Fr::from(x)),
        y: Some(Fr::from(y)),
    };
    let proof = Groth16::<Bn254>::prove(pk, circuit, rng).expect("proving failed");
    let proof_flat = Proof::from(&proof).to_flat();
    let inputs_flat = vec![x.to_string(), y.to_string()];
    (proof_flat, inputs_flat)
}

fn assert_malformed(res: G16Result<bool>) {
    match res {
        Err(VerifyError::MalformedInput(_)) => {}
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

// ── Single-proof path ──

#[test]
fn valid_proof_verifies() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, inputs_flat) = cube_prove(&pk, 3, &mut rng);
    assert_eq!(inputs_flat, ["3", "27"]);
    assert!(verify(&inputs_flat, &proof_flat, &vk_flat).unwrap());
}

#[test]
fn wrong_public_input_rejects() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, _) = cube_prove(&pk, 3, &mut rng);
    // Same proof, claimed y = 28: well-formed, cryptographically invalid.
    let wrong = ["3".to_string(), "28".to_string()];
    assert!(!verify(&wrong, &proof_flat, &vk_flat).unwrap());
}

#[test]
fn corrupted_input_scalar_rejects() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, mut inputs_flat) = cube_prove(&pk, 3, &mut rng);
    inputs_flat[0] = "4".to_string();
    assert!(!verify(&inputs_flat, &proof_flat, &vk_flat).unwrap());
}

#[test]
fn corrupted_proof_point_rejects() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, inputs_flat) = cube_prove(&pk, 3, &mut rng);

    // Replace A with the G1 generator: still on-curve, so this must come
    // back as a clean `false`, not an error.
    let mut tampered = proof_flat.clone();
    tampered[0] = "1".to_string();
    tampered[1] = "2".to_string();
    assert!(!verify(&inputs_flat, &tampered, &vk_flat).unwrap());

    // Swap A and C (both G1): every point still valid, proof no longer is.
    let mut swapped = proof_flat.clone();
    swapped.swap(0, 6);
    swapped.swap(1, 7);
    assert!(!verify(&inputs_flat, &swapped, &vk_flat).unwrap());
}

#[test]
fn off_curve_corruption_errors() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (mut proof_flat, inputs_flat) = cube_prove(&pk, 3, &mut rng);
    proof_flat[0] = "1".to_string();
    proof_flat[1] = "1".to_string();
    match verify(&inputs_flat, &proof_flat, &vk_flat) {
        Err(VerifyError::InvalidPoint(_)) => {}
        other => panic!("expected InvalidPoint, got {other:?}"),
    }
}

#[test]
fn input_length_mismatch_errors() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, inputs_flat) = cube_prove(&pk, 3, &mut rng);

    assert_malformed(verify(&inputs_flat[..1], &proof_flat, &vk_flat));
    let too_many = ["3".to_string(), "27".to_string(), "0".to_string()];
    assert_malformed(verify(&too_many, &proof_flat, &vk_flat));
    let none: Vec<String> = vec![];
    assert_malformed(verify(&none, &proof_flat, &vk_flat));
}

#[test]
fn malformed_strings_error() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, mut inputs_flat) = cube_prove(&pk, 3, &mut rng);

    inputs_flat[1] = "27x".to_string();
    assert_malformed(verify(&inputs_flat, &proof_flat, &vk_flat));

    // The group order itself is not a canonical scalar.
    inputs_flat[1] =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617"
            .to_string();
    assert_malformed(verify(&inputs_flat, &proof_flat, &vk_flat));

    // A truncated proof is a length error, not a parse error downstream.
    let (good_proof, inputs) = cube_prove(&pk, 2, &mut rng);
    assert_malformed(verify(&inputs, &good_proof[..7], &vk_flat));
}

#[test]
fn agrees_with_reference_verifier() {
    let mut rng = test_rng();
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(
        CubeCircuit { x: None, y: None },
        &mut rng,
    )
    .unwrap();
    let proof = Groth16::<Bn254>::prove(
        &pk,
        CubeCircuit {
            x: Some(Fr::from(3u64)),
            y: Some(Fr::from(27u64)),
        },
        &mut rng,
    )
    .unwrap();
    let inputs = [Fr::from(3u64), Fr::from(27u64)];

    let reference = Groth16::<Bn254>::verify(&vk, &inputs, &proof).unwrap();
    let ours = verify(
        &["3".to_string(), "27".to_string()],
        &Proof::from(&proof).to_flat(),
        &VerificationKey::from(&vk).to_flat(),
    )
    .unwrap();
    assert!(reference);
    assert_eq!(ours, reference);
}

// ── Wire format ──

#[test]
fn wire_roundtrip() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, _) = cube_prove(&pk, 3, &mut rng);

    let vk = VerificationKey::from_flat(&vk_flat).unwrap();
    assert_eq!(vk.to_flat(), vk_flat);
    assert_eq!(vk.num_public_inputs(), 2);
    assert_eq!(vk_flat.len(), 14 + 2 * 3);

    let proof = Proof::from_flat(&proof_flat).unwrap();
    assert_eq!(proof.to_flat(), proof_flat);
}

// ── Zero public inputs ──

#[test]
fn no_public_inputs_circuit() {
    let mut rng = test_rng();
    let (pk, vk) =
        Groth16::<Bn254>::circuit_specific_setup(BitCircuit { w: None }, &mut rng).unwrap();
    let proof = Groth16::<Bn254>::prove(&pk, BitCircuit { w: Some(Fr::from(1u64)) }, &mut rng)
        .unwrap();

    let vk_flat = VerificationKey::from(&vk).to_flat();
    assert_eq!(vk_flat.len(), 16); // ic has exactly the constant term
    let proof_flat = Proof::from(&proof).to_flat();

    let none: Vec<String> = vec![];
    assert!(verify(&none, &proof_flat, &vk_flat).unwrap());

    // Supplying an input to an input-less key is a mismatch, not `false`.
    let one = ["1".to_string()];
    assert_malformed(verify(&one, &proof_flat, &vk_flat));
}

// ── Batch path ──

#[test]
fn batch_of_valid_proofs_verifies() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);

    let mut inputs_cat = Vec::new();
    let mut proofs_cat = Vec::new();
    for x in [2, 3, 5] {
        let (proof_flat, inputs_flat) = cube_prove(&pk, x, &mut rng);
        inputs_cat.extend(inputs_flat);
        proofs_cat.extend(proof_flat);
    }
    assert!(verify_many(&inputs_cat, &proofs_cat, &vk_flat).unwrap());
}

#[test]
fn batch_accepts_duplicated_proof() {
    // The shape the original callers use: the same (inputs, proof) pair
    // concatenated onto itself.
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, inputs_flat) = cube_prove(&pk, 3, &mut rng);

    let inputs_cat: Vec<String> = [&inputs_flat[..], &inputs_flat[..]].concat();
    let proofs_cat: Vec<String> = [&proof_flat[..], &proof_flat[..]].concat();
    assert!(verify_many(&inputs_cat, &proofs_cat, &vk_flat).unwrap());
}

#[test]
fn batch_with_one_corrupted_proof_rejects() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);

    let mut inputs_cat = Vec::new();
    let mut proofs_cat = Vec::new();
    for x in [2, 3, 5] {
        let (proof_flat, inputs_flat) = cube_prove(&pk, x, &mut rng);
        inputs_cat.extend(inputs_flat);
        proofs_cat.extend(proof_flat);
    }
    // Middle proof's A becomes the generator: well-formed, invalid.
    proofs_cat[8] = "1".to_string();
    proofs_cat[9] = "2".to_string();
    assert!(!verify_many(&inputs_cat, &proofs_cat, &vk_flat).unwrap());
}

#[test]
fn batch_with_one_corrupted_input_rejects() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);

    let mut inputs_cat = Vec::new();
    let mut proofs_cat = Vec::new();
    for x in [2, 3, 5] {
        let (proof_flat, inputs_flat) = cube_prove(&pk, x, &mut rng);
        inputs_cat.extend(inputs_flat);
        proofs_cat.extend(proof_flat);
    }
    inputs_cat[3] = "28".to_string(); // second proof now claims 3^3 = 28
    assert!(!verify_many(&inputs_cat, &proofs_cat, &vk_flat).unwrap());
}

#[test]
fn batch_structural_error_aborts() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, inputs_flat) = cube_prove(&pk, 3, &mut rng);

    let inputs_cat: Vec<String> = [&inputs_flat[..], &inputs_flat[..]].concat();
    let mut proofs_cat: Vec<String> = [&proof_flat[..], &proof_flat[..]].concat();
    proofs_cat[8] = "1".to_string();
    proofs_cat[9] = "1".to_string(); // off-curve
    match verify_many(&inputs_cat, &proofs_cat, &vk_flat) {
        Err(VerifyError::InvalidPoint(_)) => {}
        other => panic!("expected InvalidPoint, got {other:?}"),
    }
}

#[test]
fn batch_shape_errors() {
    let mut rng = test_rng();
    let (pk, vk_flat) = cube_setup(&mut rng);
    let (proof_flat, inputs_flat) = cube_prove(&pk, 3, &mut rng);

    // Proof stream not a multiple of the proof stride.
    assert_malformed(verify_many(&inputs_flat, &proof_flat[..7], &vk_flat));
    // Empty batch.
    let none: Vec<String> = vec![];
    assert_malformed(verify_many(&none, &none, &vk_flat));
    // Input count not k * n.
    let short_inputs = &inputs_flat[..1];
    assert_malformed(verify_many(short_inputs, &proof_flat, &vk_flat));
}
