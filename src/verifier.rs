//! Stateless predicate deciding whether a fragment is consistent with an
//! FPCC (Hendricks, Ganger, Reiter, PODC 2007, Definition 3.3).
//!
//! Pure: no I/O, no state, no short-circuit across a batch. Verification
//! *outcomes* are values, not errors, so callers can aggregate results
//! across many fragments without exception-style control flow.

use crate::cross_checksum::Fpcc;
use crate::fingerprint::{fingerprint, hash_fragment};

/// The outcome of a single fragment verification check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// All applicable checks passed.
    Consistent,
    /// The fragment's hash does not match the FPCC entry.
    HashMismatch,
    /// The fingerprint check failed (only possible for `index < m`).
    FpMismatch,
    /// `index` is out of range for the FPCC.
    IndexError,
}

/// A detailed verification report, as returned by [`check`] and [`batch_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub outcome: VerificationOutcome,
    pub fragment_index: usize,
    /// `Some(true/false)` once the hash check has run; `None` on `IndexError`.
    pub hash_matched: Option<bool>,
    /// Whether a fingerprint check was attempted (only for `index < m`).
    pub fp_checked: bool,
    /// `Some(true/false)` once the fingerprint check has run.
    pub fp_matched: Option<bool>,
    pub detail: String,
}

/// Checks whether `data`, claimed to be fragment `index`, is consistent with
/// `fpcc`:
///
/// 1. `index` must be in `[0, fpcc.n)`, else [`VerificationOutcome::IndexError`].
/// 2. `SHA256(data)` must equal `fpcc.hashes[index]`, else
///    [`VerificationOutcome::HashMismatch`].
/// 3. If `index < fpcc.m`, `fp(fpcc.r, data)` must equal
///    `fpcc.fingerprints[index]`, else [`VerificationOutcome::FpMismatch`].
pub fn check(index: usize, data: &[u8], fpcc: &Fpcc) -> VerificationReport {
    if index >= fpcc.n {
        return VerificationReport {
            outcome: VerificationOutcome::IndexError,
            fragment_index: index,
            hash_matched: None,
            fp_checked: false,
            fp_matched: None,
            detail: format!("index {} out of range for fpcc with n={}", index, fpcc.n),
        };
    }

    let computed_hash = hash_fragment(data);
    let hash_matched = computed_hash == fpcc.hashes[index];
    if !hash_matched {
        return VerificationReport {
            outcome: VerificationOutcome::HashMismatch,
            fragment_index: index,
            hash_matched: Some(false),
            fp_checked: false,
            fp_matched: None,
            detail: "fragment hash does not match fpcc entry".to_string(),
        };
    }

    if index < fpcc.m {
        let computed_fp = fingerprint(fpcc.r, data);
        let fp_matched = computed_fp == fpcc.fingerprints[index];
        if !fp_matched {
            return VerificationReport {
                outcome: VerificationOutcome::FpMismatch,
                fragment_index: index,
                hash_matched: Some(true),
                fp_checked: true,
                fp_matched: Some(false),
                detail: "fragment fingerprint does not match fpcc entry".to_string(),
            };
        }
        return VerificationReport {
            outcome: VerificationOutcome::Consistent,
            fragment_index: index,
            hash_matched: Some(true),
            fp_checked: true,
            fp_matched: Some(true),
            detail: "hash and fingerprint both match".to_string(),
        };
    }

    VerificationReport {
        outcome: VerificationOutcome::Consistent,
        fragment_index: index,
        hash_matched: Some(true),
        fp_checked: false,
        fp_matched: None,
        detail: "hash matches; no fingerprint check applicable for a parity fragment".to_string(),
    }
}

/// Verifies multiple `(index, data)` pairs against the same FPCC, returning
/// reports in input order. Every pair is checked; a failure earlier in the
/// list never short-circuits a later one.
pub fn batch_check(items: &[(usize, &[u8])], fpcc: &Fpcc) -> Vec<VerificationReport> {
    items.iter().map(|&(index, data)| check(index, data, fpcc)).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::erasure::encode;

    #[test]
    fn consistent_fragments_verify() {
        let frags = encode(b"Integrity test: this must not be altered.", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        for f in &frags {
            let report = check(f.index, &f.data, &fpcc);
            assert_eq!(report.outcome, VerificationOutcome::Consistent);
        }
    }

    #[test]
    fn flipped_byte_causes_hash_mismatch() {
        let frags = encode(b"Integrity test: this must not be altered.", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();

        let mut corrupted = frags[1].data.clone();
        corrupted[0] ^= 0xFF;

        let report = check(1, &corrupted, &fpcc);
        assert_eq!(report.outcome, VerificationOutcome::HashMismatch);

        // The remaining four honest fragments still decode the original.
        let honest: Vec<_> = frags
            .iter()
            .filter(|f| f.index != 1)
            .cloned()
            .collect();
        let recovered = crate::erasure::decode(&honest).unwrap();
        assert_eq!(recovered, b"Integrity test: this must not be altered.");
    }

    #[test]
    fn out_of_range_index_is_index_error() {
        let frags = encode(b"abc", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        let report = check(5, b"whatever", &fpcc);
        assert_eq!(report.outcome, VerificationOutcome::IndexError);
    }

    #[test]
    fn batch_check_preserves_order_and_does_not_short_circuit() {
        let frags = encode(b"batch check me", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();

        let mut corrupted = frags[0].data.clone();
        corrupted[0] ^= 1;

        let items: Vec<(usize, &[u8])> = vec![
            (0, &corrupted),
            (1, &frags[1].data),
            (2, &frags[2].data),
        ];
        let reports = batch_check(&items, &fpcc);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].outcome, VerificationOutcome::HashMismatch);
        assert_eq!(reports[1].outcome, VerificationOutcome::Consistent);
        assert_eq!(reports[2].outcome, VerificationOutcome::Consistent);
    }

    #[test]
    fn parity_fragment_has_no_fingerprint_check() {
        let frags = encode(b"parity only hash", 5, 3, None).unwrap();
        let fpcc = Fpcc::generate(&frags).unwrap();
        let report = check(4, &frags[4].data, &fpcc);
        assert_eq!(report.outcome, VerificationOutcome::Consistent);
        assert!(!report.fp_checked);
    }
}
