//! Field element codec: canonical decimal strings and fixed-width big-endian bytes.
//!
//! Every conversion goes through `into_bigint`, which leaves Montgomery form, so the output
//! is always the reduced representative in `[0, p)`.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::error::EncodingError;

fn modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_be(&F::MODULUS.to_bytes_be())
}

/// Base-10 rendering of the canonical representative, no sign and no leading zeros.
pub fn encode_decimal<F: PrimeField>(e: &F) -> String {
    let value: BigUint = (*e).into();
    value.to_string()
}

/// Parse a canonical decimal literal.
///
/// Only ASCII digits are accepted, and no leading zeros unless the literal is `"0"`.
pub fn decode_decimal<F: PrimeField>(s: &str) -> Result<F, EncodingError> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if !canonical {
        return Err(EncodingError::InvalidDigits(s.to_owned()));
    }
    let value = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| EncodingError::InvalidDigits(s.to_owned()))?;
    if value >= modulus::<F>() {
        return Err(EncodingError::OutOfRange(s.to_owned()));
    }
    Ok(F::from(value))
}

/// Big-endian bytes of the canonical value, left-padded with zeros to `width`.
pub fn encode_bytes<F: PrimeField>(e: &F, width: usize) -> Result<Vec<u8>, EncodingError> {
    let raw = e.into_bigint().to_bytes_be();
    let start = raw.iter().position(|b| *b != 0).unwrap_or(raw.len());
    let significant = &raw[start..];
    if significant.len() > width {
        return Err(EncodingError::Oversize {
            needed: significant.len(),
            width,
        });
    }
    let mut out = vec![0u8; width - significant.len()];
    out.extend_from_slice(significant);
    Ok(out)
}

/// Inverse of [`encode_bytes`]; any width is accepted as long as the value is reduced.
pub fn decode_bytes<F: PrimeField>(bytes: &[u8]) -> Result<F, EncodingError> {
    let value = BigUint::from_bytes_be(bytes);
    if value >= modulus::<F>() {
        return Err(EncodingError::OutOfRange(value.to_string()));
    }
    Ok(F::from(value))
}
