//! Division-based homomorphic fingerprinting and the random-oracle evaluation
//! point derivation (Hendricks, Ganger, Reiter, PODC 2007, Theorem 2.3 and
//! Section 3).
//!
//! `fingerprint(r, d) = d(r)` treats a byte string `d` as a polynomial over
//! GF(2^8) and evaluates it at `r`. The map is linear in `d`, which mirrors
//! the linearity of the Reed-Solomon code: a server holding fragment `d_i`
//! can be checked against a cross-checksum without anyone reconstructing the
//! full block.

use sha2::{Digest, Sha256};

use crate::error::CoreError;
use crate::field::Gf256;

/// Computes `fp(r, data) = d(r)` via Horner's method directly on the byte
/// stream, without materializing a [`crate::polynomial::Polynomial`]. Empty
/// input fingerprints to zero.
pub fn fingerprint(r: Gf256, data: &[u8]) -> Gf256 {
    let mut result = Gf256::ZERO;
    for &byte in data.iter().rev() {
        result = result.mul(r).add(Gf256(byte));
    }
    result
}

/// SHA-256 of a fragment's data bytes.
pub fn hash_fragment(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derives the evaluation point `r` from an ordered list of fragment hash
/// digests: `r = SHA256(h_0 || h_1 || ... || h_{n-1})[0]`.
///
/// `r` is fixed only after every fragment hash is known, so a Byzantine
/// server that has already seen the cross-checksum cannot tailor a forged
/// fragment to a chosen `r`.
pub fn derive_r(fragment_hashes: &[[u8; 32]]) -> Result<Gf256, CoreError> {
    if fragment_hashes.is_empty() {
        return Err(CoreError::EmptyInput);
    }
    let mut hasher = Sha256::new();
    for h in fragment_hashes {
        hasher.update(h);
    }
    let digest = hasher.finalize();
    Ok(Gf256(digest[0]))
}
