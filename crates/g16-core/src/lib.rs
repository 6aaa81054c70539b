// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-core
//!
//! Groth16 proof verification over BN254: the public-input linear
//! combination, the fused multi-pairing check, and a randomized batch path
//! that verifies `k` proofs sharing one key with `k + 3` pairings instead
//! of `4k`.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`pairing`] | Bilinear map and the fused product-equals-identity check |
//! | [`verifier`] | Single-proof verification, typed and flat-string entry points |
//! | [`batch`] | Randomized multi-proof verification against one shared key |
//! | [`transcript`] | Deterministic Keccak-256 challenge derivation |
//!
//! The engine is stateless and purely functional: no shared mutable state,
//! no I/O, and independent calls may run concurrently without coordination.
//! Structurally bad input is an error; a well-formed proof that simply does
//! not verify is `Ok(false)`.

pub mod batch;
pub mod pairing;
pub mod transcript;
pub mod verifier;

pub use batch::{verify_batch, verify_many};
pub use pairing::{multi_pairing_check, pair};
pub use transcript::Transcript;
pub use verifier::{verify, verify_proof};

// Re-export the data model so callers need only one crate.
pub use g16_types::{G16Result, Proof, VerificationKey, VerifyError, PROOF_LEN};
