//! Reed-Solomon erasure encoding over the Cauchy generator matrix.

use crate::error::CoreError;
use crate::erasure::fragment::Fragment;
use crate::erasure::matrix::Matrix;
use crate::fingerprint::hash_fragment;
use crate::field::Gf256;

/// Encodes `data` into `n` erasure-coded fragments, any `m` of which suffice
/// to reconstruct it.
///
/// `block_id` defaults to the hex SHA-256 digest of `data` when `None`.
///
/// # Errors
/// Returns [`CoreError::InvalidParameters`] if `data` is empty, `m > n`, or
/// `n + m > 256`.
pub fn encode(
    data: &[u8],
    n: usize,
    m: usize,
    block_id: Option<String>,
) -> Result<Vec<Fragment>, CoreError> {
    if data.is_empty() {
        return Err(CoreError::InvalidParameters {
            reason: "data must not be empty".to_string(),
        });
    }
    if m == 0 || m > n {
        return Err(CoreError::InvalidParameters {
            reason: format!("threshold m={} must be in [1, n={}]", m, n),
        });
    }
    if n + m > 256 {
        return Err(CoreError::InvalidParameters {
            reason: format!("n + m = {} exceeds field size 256", n + m),
        });
    }

    let block_id = block_id.unwrap_or_else(|| hex::encode(hash_fragment(data)));

    let original_length = data.len();
    let padded_len = ((original_length + m - 1) / m) * m;
    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(data);
    padded.resize(padded_len, 0u8);

    let chunk_size = padded_len / m;
    let generator = Matrix::cauchy(n, m)?;

    let mut fragment_bytes: Vec<Vec<u8>> = vec![Vec::with_capacity(chunk_size); n];
    for k in 0..chunk_size {
        let v_k: Vec<Gf256> = (0..m).map(|i| Gf256(padded[k * m + i])).collect();
        let c_k = generator.mul_vec(&v_k);
        for i in 0..n {
            fragment_bytes[i].push(c_k[i].0);
        }
    }

    let fragments = fragment_bytes
        .into_iter()
        .enumerate()
        .map(|(index, data)| Fragment {
            index,
            data,
            block_id: block_id.clone(),
            n,
            m,
            original_length,
        })
        .collect();

    Ok(fragments)
}
