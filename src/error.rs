//! Typed error taxonomy for the core. No operation in this crate panics on a
//! caller-reachable path; every failure surfaces as one of these variants.

use thiserror::Error;

/// Everything that can go wrong in the field/polynomial/erasure/FPCC core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Empty data, `m > n`, `n + m > 256`, or mismatched array lengths.
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// Fragments disagree on `(block_id, n, m, original_length)` or payload length.
    #[error("mismatched fragments: {reason}")]
    MismatchedFragments { reason: String },

    /// Fewer than `m` fragments were supplied to the decoder.
    #[error("insufficient fragments: need {needed}, got {got}")]
    InsufficientFragments { needed: usize, got: usize },

    /// The chosen m×m sub-matrix failed to invert. Unexpected for a well-formed
    /// Cauchy matrix; indicates data or matrix corruption.
    #[error("decoding failed: {reason}")]
    DecodingFailure { reason: String },

    /// Division or inversion by the zero field element.
    #[error("division by zero in GF(2^8)")]
    DivisionByZero,

    /// The random oracle was asked to derive a point from an empty hash list.
    #[error("random oracle given empty input")]
    EmptyInput,
}
