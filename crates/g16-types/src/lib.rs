// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! g16-types: data model for Groth16 verification over BN254.
//!
//! Verification keys and proofs travel as flat ordered sequences of decimal
//! strings (the layout produced by snarkjs-style encoders). This crate turns
//! those sequences into validated, typed structures and back.

pub mod error;
pub mod field;
pub mod point;
pub mod proof;
pub mod vk;

pub use error::{G16Result, VerifyError};
pub use field::{fq_to_decimal, fr_to_decimal, parse_fq, parse_fr, parse_public_inputs};
pub use point::{decode_g1, decode_g2, encode_g1, encode_g2, validate_g1, validate_g2};
pub use proof::{Proof, PROOF_LEN};
pub use vk::{VerificationKey, VK_FIXED_LEN};
