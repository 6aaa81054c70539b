// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Decimal wire boundary for BN254 field elements.
//!
//! Group coordinates live in the base field `Fq`, public inputs and batch
//! challenges in the scalar field `Fr`. The two moduli are close in size but
//! distinct, so every parse checks canonicality against the modulus of the
//! field actually being targeted; accepting a base-field-sized value as a
//! public input would silently change the verified statement.

use ark_bn254::{Fq, Fr};
use ark_ff::{Field, PrimeField};
use num_bigint::BigUint;

use crate::error::{G16Result, VerifyError};

fn parse_field<F: PrimeField>(s: &str, field: &str) -> G16Result<F> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VerifyError::MalformedInput(format!(
            "not a decimal integer: {s:?}"
        )));
    }
    let n: BigUint = s
        .parse()
        .map_err(|_| VerifyError::MalformedInput(format!("not a decimal integer: {s:?}")))?;
    F::BigInt::try_from(n)
        .ok()
        .and_then(F::from_bigint)
        .ok_or_else(|| {
            VerifyError::MalformedInput(format!("{s} is not a canonical {field} element"))
        })
}

fn field_to_decimal<F: PrimeField>(x: &F) -> String {
    let n: BigUint = x.into_bigint().into();
    n.to_string()
}

/// Parse a canonical scalar-field element. Rejects anything >= r.
pub fn parse_fr(s: &str) -> G16Result<Fr> {
    parse_field(s, "scalar-field")
}

/// Parse a canonical base-field element (a curve coordinate). Rejects anything >= q.
pub fn parse_fq(s: &str) -> G16Result<Fq> {
    parse_field(s, "base-field")
}

/// Canonical decimal rendering of a scalar-field element.
pub fn fr_to_decimal(x: &Fr) -> String {
    field_to_decimal(x)
}

/// Canonical decimal rendering of a base-field element.
pub fn fq_to_decimal(x: &Fq) -> String {
    field_to_decimal(x)
}

/// Parse an ordered public-input sequence, one scalar per circuit signal.
pub fn parse_public_inputs<S: AsRef<str>>(flat: &[S]) -> G16Result<Vec<Fr>> {
    flat.iter().map(|s| parse_fr(s.as_ref())).collect()
}

/// Multiplicative inverse in the scalar field; zero has none.
pub fn invert_fr(x: &Fr) -> G16Result<Fr> {
    x.inverse().ok_or(VerifyError::DivisionByZero)
}

/// Multiplicative inverse in the base field; zero has none.
pub fn invert_fq(x: &Fq) -> G16Result<Fq> {
    x.inverse().ok_or(VerifyError::DivisionByZero)
}
