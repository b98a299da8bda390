//! The fingerprinted cross-checksum (FPCC): a per-object commitment binding
//! all `n` fragment hashes and the first `m` fragment fingerprints under a
//! single derived evaluation point (Hendricks, Ganger, Reiter, PODC 2007,
//! Section 3).
//!
//! `r` is fixed only after every fragment is hashed, so a Byzantine server
//! that has already seen the FPCC cannot tailor its returned fragment to a
//! chosen `r`.

use crate::error::CoreError;
use crate::erasure::Fragment;
use crate::field::Gf256;
use crate::fingerprint::{derive_r, fingerprint, hash_fragment};

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// The fingerprinted cross-checksum for one encoded block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fpcc {
    /// `SHA256(fragment_i.data)` for every `i` in `[0, n)`, in index order.
    pub hashes: Vec<Hash>,
    /// `fp(r, fragment_j.data)` for every `j` in `[0, m)`, in index order.
    pub fingerprints: Vec<Gf256>,
    /// The evaluation point, derived from `hashes` by the random oracle.
    pub r: Gf256,
    pub n: usize,
    pub m: usize,
}

impl Fpcc {
    /// Builds the FPCC for a complete set of `n` fragments belonging to one
    /// block.
    ///
    /// # Errors
    /// [`CoreError::InvalidParameters`] if `fragments` does not contain
    /// exactly `n` fragments, one for every index in `[0, n)`, all sharing
    /// the same `(block_id, n, m)`.
    pub fn generate(fragments: &[Fragment]) -> Result<Fpcc, CoreError> {
        if fragments.is_empty() {
            return Err(CoreError::InvalidParameters {
                reason: "generate requires at least one fragment".to_string(),
            });
        }
        let n = fragments[0].n;
        let m = fragments[0].m;
        let block_id = &fragments[0].block_id;

        if fragments.len() != n {
            return Err(CoreError::InvalidParameters {
                reason: format!("expected exactly {} fragments, got {}", n, fragments.len()),
            });
        }

        let mut sorted: Vec<&Fragment> = fragments.iter().collect();
        sorted.sort_by_key(|f| f.index);

        for (expected_index, f) in sorted.iter().enumerate() {
            if f.n != n || f.m != m || &f.block_id != block_id {
                return Err(CoreError::InvalidParameters {
                    reason: "fragments disagree on block_id/n/m".to_string(),
                });
            }
            if f.index != expected_index {
                return Err(CoreError::InvalidParameters {
                    reason: "fragments must cover every index in [0, n) exactly once"
                        .to_string(),
                });
            }
        }

        let hashes: Vec<Hash> = sorted.iter().map(|f| hash_fragment(&f.data)).collect();
        let r = derive_r(&hashes)?;
        let fingerprints: Vec<Gf256> =
            sorted[..m].iter().map(|f| fingerprint(r, &f.data)).collect();

        Ok(Fpcc { hashes, fingerprints, r, n, m })
    }

    /// Deterministic canonical byte encoding: `n` (u16 LE) || `m` (u16 LE) ||
    /// `r` (1 byte) || each hash (32 bytes, index order) || each fingerprint
    /// (1 byte, index order). This format is stable; any change to it must
    /// be versioned.
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + 1 + self.hashes.len() * 32 + self.fingerprints.len());
        out.extend_from_slice(&(self.n as u16).to_le_bytes());
        out.extend_from_slice(&(self.m as u16).to_le_bytes());
        out.push(self.r.0);
        for h in &self.hashes {
            out.extend_from_slice(h);
        }
        for fp in &self.fingerprints {
            out.push(fp.0);
        }
        out
    }

    /// Human-readable canonical serialization, suitable for transport
    /// alongside a fragment.
    pub fn to_canonical_string(&self) -> String {
        let hashes = self
            .hashes
            .iter()
            .map(|h| hex::encode(h))
            .collect::<Vec<_>>()
            .join(",");
        let fps = self
            .fingerprints
            .iter()
            .map(|fp| fp.0.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "n={};m={};r={};hashes={};fingerprints={}",
            self.n, self.m, self.r.0, hashes, fps
        )
    }

    /// Parses the output of [`Fpcc::to_canonical_string`].
    pub fn from_canonical_string(s: &str) -> Result<Fpcc, CoreError> {
        let bad = |reason: &str| CoreError::InvalidParameters { reason: reason.to_string() };

        let mut n = None;
        let mut m = None;
        let mut r = None;
        let mut hashes = None;
        let mut fingerprints = None;

        for field in s.split(';') {
            let (key, value) = field.split_once('=').ok_or_else(|| bad("malformed field"))?;
            match key {
                "n" => n = Some(value.parse::<usize>().map_err(|_| bad("bad n"))?),
                "m" => m = Some(value.parse::<usize>().map_err(|_| bad("bad m"))?),
                "r" => r = Some(value.parse::<u8>().map_err(|_| bad("bad r"))?),
                "hashes" => {
                    let mut parsed = Vec::new();
                    if !value.is_empty() {
                        for h in value.split(',') {
                            let bytes = hex::decode(h).map_err(|_| bad("bad hash hex"))?;
                            let arr: Hash =
                                bytes.try_into().map_err(|_| bad("hash must be 32 bytes"))?;
                            parsed.push(arr);
                        }
                    }
                    hashes = Some(parsed);
                }
                "fingerprints" => {
                    let mut parsed = Vec::new();
                    if !value.is_empty() {
                        for fp in value.split(',') {
                            let byte = fp.parse::<u8>().map_err(|_| bad("bad fingerprint"))?;
                            parsed.push(Gf256(byte));
                        }
                    }
                    fingerprints = Some(parsed);
                }
                _ => return Err(bad("unknown field")),
            }
        }

        Ok(Fpcc {
            hashes: hashes.ok_or_else(|| bad("missing hashes"))?,
            fingerprints: fingerprints.ok_or_else(|| bad("missing fingerprints"))?,
            r: Gf256(r.ok_or_else(|| bad("missing r"))?),
            n: n.ok_or_else(|| bad("missing n"))?,
            m: m.ok_or_else(|| bad("missing m"))?,
        })
    }

    /// Hex-encoded SHA-256 of the canonical byte encoding. Equal FPCCs have
    /// equal digests.
    pub fn digest(&self) -> String {
        hex::encode(hash_fragment(&self.to_canonical_bytes()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::erasure::encode;

    #[test]
    fn correct_number_of_hashes_and_fingerprints() {
        let frags = encode(b"test block", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        assert_eq!(fpcc.hashes.len(), 5);
        assert_eq!(fpcc.fingerprints.len(), 3);
    }

    #[test]
    fn hashes_match_sha256() {
        let frags = encode(b"hash check", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        for (i, frag) in frags.iter().enumerate() {
            assert_eq!(fpcc.hashes[i], hash_fragment(&frag.data));
        }
    }

    #[test]
    fn fingerprints_match_fp_function() {
        let frags = encode(b"fp check", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        for j in 0..3 {
            assert_eq!(fpcc.fingerprints[j], fingerprint(fpcc.r, &frags[j].data));
        }
    }

    #[test]
    fn r_matches_oracle() {
        let frags = encode(b"oracle check", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        assert_eq!(derive_r(&fpcc.hashes).unwrap(), fpcc.r);
    }

    #[test]
    fn canonical_string_round_trips() {
        let frags = encode(b"serialize me", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        let s = fpcc.to_canonical_string();
        assert_eq!(Fpcc::from_canonical_string(&s).unwrap(), fpcc);
    }

    #[test]
    fn digest_is_stable_and_equal_for_equal_fpccs() {
        let frags = encode(b"digest test", 5, 3, None).unwrap();
        let a = Fpcc::generate(&frags).unwrap();
        let b = Fpcc::generate(&frags).unwrap();
        assert_eq!(a.digest(), a.digest());
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_wrong_fragment_count() {
        let frags = encode(b"short", 5, 3, None).unwrap();
        assert!(Fpcc::generate(&frags[0..4]).is_err());
    }
}
