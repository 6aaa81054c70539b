// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for decoding and verification.

/// Structural failures surfaced by decoding and verification.
///
/// A well-formed but cryptographically invalid proof is *not* an error:
/// verification returns `Ok(false)` for it. Everything here means the input
/// could not be used at all, and callers can rely on the distinction.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Wrong sequence length, non-numeric string, or a scalar that is not
    /// reduced into its field.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Decoded coordinates do not satisfy the curve (or subgroup) invariant.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// Inverse of zero requested. Unreachable while the point and scalar
    /// checks gate all inputs; reaching it means the arithmetic layer itself
    /// violated an invariant and the caller must treat it as fatal.
    #[error("division by zero in field arithmetic")]
    DivisionByZero,
}

pub type G16Result<T> = Result<T, VerifyError>;
