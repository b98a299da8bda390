//! `veristore-core` — the cryptographic integrity and coding subsystem of a
//! distributed object store that tolerates both crash failures and Byzantine
//! corruption of a bounded fraction of storage servers.
//!
//! An object is split into `n` erasure-coded fragments dispersed across `n`
//! servers; any `m` surviving, integrity-verified fragments reconstruct the
//! object. The canonical parameter set is `(n=5, m=3, f=1)`: the protocol
//! tolerates `f` simultaneously faulty servers where `n = m + 2f`.
//!
//! This crate covers the core that a networked dispersal/retrieval protocol
//! and a per-server on-disk store consume through a small interface: finite
//! field arithmetic over GF(2^8) ([`field`]), polynomials and evaluation
//! fingerprinting over that field ([`polynomial`], [`fingerprint`]), the
//! Reed-Solomon m-of-n erasure code ([`erasure`]), the fingerprinted
//! cross-checksum construction ([`cross_checksum`]), and the per-fragment
//! verifier ([`verifier`]).
//!
//! Everything here is purely computational and stateless: every type is a
//! value type with no interior mutability, every operation takes read-only
//! references and returns fresh values, and nothing blocks, suspends, retries,
//! or logs. Transport, on-disk storage, authentication, and confidentiality
//! are deliberately out of scope.

pub mod cross_checksum;
pub mod erasure;
pub mod error;
pub mod field;
pub mod fingerprint;
pub mod polynomial;
pub mod verifier;

pub use cross_checksum::Fpcc;
pub use erasure::{decode, encode, Fragment, Params};
pub use error::CoreError;
pub use verifier::{batch_check, check, VerificationOutcome, VerificationReport};
