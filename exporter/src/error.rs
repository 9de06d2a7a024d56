use thiserror::Error;

/// Malformed or out-of-range scalar and point data.
///
/// These always point at a bug upstream (or a corrupted document) and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("value needs {needed} bytes but the field width is {width}")]
    Oversize { needed: usize, width: usize },
    #[error("invalid decimal literal: {0:?}")]
    InvalidDigits(String),
    #[error("value {0} is not below the field modulus")]
    OutOfRange(String),
    #[error("malformed point: {0}")]
    MalformedPoint(String),
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("buffer has length {found}, expected {expected}")]
    InvalidLength { expected: usize, found: usize },
}

/// Schema-level contract violations and sink failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("proof carries {expected} public inputs but {found} were supplied")]
    InputCountMismatch { expected: usize, found: usize },
    #[error("public input {index} is {supplied} but the proof carries {derived}")]
    InputMismatch {
        index: usize,
        supplied: String,
        derived: String,
    },
    #[error("unsupported curve: {0:?}")]
    UnsupportedCurve(String),
    #[error("verifying key has an empty IC vector")]
    EmptyIcVector,
    #[error("nPublic is {n_public} but IC holds {ic_len} points")]
    IcLengthMismatch { n_public: usize, ic_len: usize },
    #[error("document {field} is {found:?}, expected {expected:?}")]
    TagMismatch {
        field: &'static str,
        expected: String,
        found: String,
    },
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("sink i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json document: {0}")]
    Json(serde_json::Error),
}

impl ExportError {
    /// Only sink failures are worth retrying, and only with a fresh sink.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Json(err)
        }
    }
}
