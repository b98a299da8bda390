//! Self-describing erasure-coded fragments.

/// A single fragment produced by the encoder and consumed by the decoder and
/// verifier. All fragments of one block share `(block_id, n, m,
/// original_length)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Index in `[0, n)`. Identifies which row of the generator matrix this
    /// fragment came from, and which server should hold it.
    pub index: usize,
    /// Raw fragment bytes, one codeword column per byte position.
    pub data: Vec<u8>,
    /// Identifier for the originating data block, typically the hex SHA-256
    /// of the original data.
    pub block_id: String,
    /// Total number of fragments in the coding scheme.
    pub n: usize,
    /// Reconstruction threshold.
    pub m: usize,
    /// Byte length of the original, pre-padding data.
    pub original_length: usize,
}
