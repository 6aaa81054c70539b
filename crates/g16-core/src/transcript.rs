// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Deterministic challenge derivation for batch verification.
//!
//! A chained Keccak-256 state: 32 bytes of running state absorb
//! length-prefixed data, and each squeeze hashes `state || round` to produce
//! both the output and the next state. The batch verifier seeds it with the
//! verification key and every `(inputs, proof)` pair, so the challenges are
//! fixed by the batch content and an adversary cannot pick proofs after
//! seeing the coefficients.

use ark_bn254::Fr;
use ark_ff::{PrimeField, Zero};
use sha3::{Digest, Keccak256};

pub struct Transcript {
    state: [u8; 32],
    rounds: u64,
}

impl Transcript {
    /// Fresh transcript, domain-separated by `label`.
    pub fn new(label: &'static [u8]) -> Self {
        let mut t = Self { state: [0u8; 32], rounds: 0 };
        t.append_bytes(label);
        t
    }

    /// Absorb a length-prefixed byte string into the state.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        let mut h = Keccak256::new();
        h.update(self.state);
        h.update((bytes.len() as u64).to_be_bytes());
        h.update(bytes);
        self.state = h.finalize().into();
    }

    /// Squeeze one nonzero scalar-field challenge.
    ///
    /// The 256-bit digest is reduced modulo r; a zero outcome (probability
    /// ~2^-254) is skipped by squeezing again, so the batch combination
    /// never multiplies a proof by zero.
    pub fn challenge_fr(&mut self) -> Fr {
        loop {
            let mut h = Keccak256::new();
            h.update(self.state);
            h.update(self.rounds.to_be_bytes());
            let digest: [u8; 32] = h.finalize().into();
            self.rounds += 1;
            self.state = digest;
            let c = Fr::from_le_bytes_mod_order(&digest);
            if !c.is_zero() {
                return c;
            }
        }
    }
}

impl std::fmt::Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript")
            .field("state", &hex::encode(self.state))
            .field("rounds", &self.rounds)
            .finish()
    }
}
