//! Transcodes arkworks Groth16 proofs and verifying keys into the JSON documents consumed by
//! snarkjs-compatible verifiers, and back.
//!
//! - [`field`]: canonical decimal / big-endian codecs for field elements
//! - [`point`]: G1/G2 array and byte codecs
//! - [`curve`]: the static registry of supported curves
//! - [`proof`] and [`verifying_key`]: the two document exporters
//!
//! Nothing here proves or verifies; see the `prover` crate for a toolchain that produces the
//! inputs.

pub mod curve;
pub mod document;
pub mod error;
pub mod field;
pub mod point;
pub mod proof;
pub mod source;
pub mod verifying_key;

pub use curve::{lookup, CoeffOrder, CurveId, CurveMetadata, Groth16Curve, SupportedCurve};
pub use document::{read_document, write_document};
pub use error::{EncodingError, ExportError};
pub use proof::{export_proof, export_proof_derived, proof_to_json, ProofJson};
pub use source::{ProofSource, PublicProof, VerifyingKeySource};
pub use verifying_key::{export_verifying_key, verifying_key_to_json, VerifyingKeyJson};
