//! Reed-Solomon erasure decoding: reconstruct the original data from any `m`
//! consistent fragments of the same block.

use crate::error::CoreError;
use crate::erasure::fragment::Fragment;
use crate::erasure::matrix::Matrix;
use crate::field::Gf256;

/// Reconstructs the original data from at least `m` fragments of one block.
///
/// Fragments may arrive in any order and in any quantity `>= m`; exactly `m`
/// are used, preferring the lowest indices (deterministic for testability).
/// The caller is responsible for excluding fragments the verifier has marked
/// invalid — this function does not re-verify.
///
/// # Errors
/// - [`CoreError::InsufficientFragments`] if fewer than `m` fragments are given.
/// - [`CoreError::MismatchedFragments`] if fragments disagree on
///   `(block_id, n, m, original_length)` or payload length.
/// - [`CoreError::DecodingFailure`] if the selected sub-matrix fails to
///   invert (unexpected for a well-formed Cauchy matrix).
pub fn decode(fragments: &[Fragment]) -> Result<Vec<u8>, CoreError> {
    if fragments.is_empty() {
        return Err(CoreError::InsufficientFragments { needed: 1, got: 0 });
    }

    let first = &fragments[0];
    let (block_id, n, m, original_length) =
        (first.block_id.clone(), first.n, first.m, first.original_length);
    let payload_len = first.data.len();

    for f in fragments {
        if f.block_id != block_id || f.n != n || f.m != m || f.original_length != original_length
        {
            return Err(CoreError::MismatchedFragments {
                reason: "fragments disagree on block_id/n/m/original_length".to_string(),
            });
        }
        if f.data.len() != payload_len {
            return Err(CoreError::MismatchedFragments {
                reason: "fragments have inconsistent payload lengths".to_string(),
            });
        }
    }

    if fragments.len() < m {
        return Err(CoreError::InsufficientFragments { needed: m, got: fragments.len() });
    }

    let mut sorted: Vec<&Fragment> = fragments.iter().collect();
    sorted.sort_by_key(|f| f.index);
    sorted.dedup_by_key(|f| f.index);
    let chosen: Vec<&Fragment> = sorted.into_iter().take(m).collect();
    if chosen.len() < m {
        return Err(CoreError::InsufficientFragments { needed: m, got: chosen.len() });
    }

    let generator = Matrix::cauchy(n, m)?;
    let row_indices: Vec<usize> = chosen.iter().map(|f| f.index).collect();
    let g_s = generator.submatrix(&row_indices)?;
    let g_s_inv = g_s.invert()?;

    let mut padded = Vec::with_capacity(payload_len * m);
    for col in 0..payload_len {
        let y_k: Vec<Gf256> = chosen.iter().map(|f| Gf256(f.data[col])).collect();
        let v_k = g_s_inv.mul_vec(&y_k);
        for i in 0..m {
            padded.push(v_k[i].0);
        }
    }

    padded.truncate(original_length);
    Ok(padded)
}
