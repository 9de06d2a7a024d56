//! Curve point codec.
//!
//! JSON: G1 is `[x, y, "1"]` and G2 is `[[x_a, x_b], [y_a, y_b], ["1", "0"]]`, with the
//! coefficient order pinned per curve in the registry. The identity has fixed sentinels
//! instead of an encoded `(0, 0)`.
//!
//! Bytes: uncompressed affine `x || y`, each base-field coefficient big-endian and
//! `field_bytes` wide. The identity is all zeros.

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{Fp2, Fp2Config, PrimeField};

use crate::curve::{CoeffOrder, SupportedCurve, G1, G2};
use crate::error::EncodingError;
use crate::field::{decode_bytes, decode_decimal, encode_bytes, encode_decimal};

pub type G1Json = Vec<String>;
pub type G2Json = Vec<Vec<String>>;

const G1_IDENTITY: [&str; 3] = ["0", "1", "0"];
const G2_IDENTITY: [[&str; 2]; 3] = [["0", "0"], ["1", "0"], ["0", "0"]];
const G2_UNIT_Z: [&str; 2] = ["1", "0"];

fn owned<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn fp2_json<Q: Fp2Config>(e: &Fp2<Q>, order: CoeffOrder) -> Vec<String> {
    order
        .arrange(encode_decimal(&e.c0), encode_decimal(&e.c1))
        .to_vec()
}

fn fp2_from_json<Q: Fp2Config, S: AsRef<str>>(
    pair: &[S],
    order: CoeffOrder,
) -> Result<Fp2<Q>, EncodingError> {
    let [a, b] = pair else {
        return Err(EncodingError::MalformedPoint(format!(
            "extension coordinate has {} coefficients, expected 2",
            pair.len()
        )));
    };
    let [c0, c1] = order.arrange(a.as_ref(), b.as_ref());
    Ok(Fp2::new(decode_decimal(c0)?, decode_decimal(c1)?))
}

fn checked<P: SWCurveConfig>(point: Affine<P>) -> Result<Affine<P>, EncodingError> {
    if !point.is_on_curve() {
        return Err(EncodingError::NotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(EncodingError::NotInSubgroup);
    }
    Ok(point)
}

pub fn encode_g1_with<P>(p: &Affine<P>) -> G1Json
where
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    if p.infinity {
        return owned(G1_IDENTITY);
    }
    vec![encode_decimal(&p.x), encode_decimal(&p.y), "1".to_owned()]
}

pub fn encode_g2_with<P, Q>(p: &Affine<P>, order: CoeffOrder) -> G2Json
where
    P: SWCurveConfig<BaseField = Fp2<Q>>,
    Q: Fp2Config,
{
    if p.infinity {
        return G2_IDENTITY.iter().map(|pair| owned(*pair)).collect();
    }
    vec![fp2_json(&p.x, order), fp2_json(&p.y, order), owned(G2_UNIT_Z)]
}

pub fn decode_g1_with<P, S>(json: &[S]) -> Result<Affine<P>, EncodingError>
where
    P: SWCurveConfig,
    P::BaseField: PrimeField,
    S: AsRef<str>,
{
    let [x, y, z] = json else {
        return Err(EncodingError::MalformedPoint(format!(
            "G1 array has {} elements, expected 3",
            json.len()
        )));
    };
    let (x, y, z) = (x.as_ref(), y.as_ref(), z.as_ref());
    if [x, y, z] == G1_IDENTITY {
        return Ok(Affine::identity());
    }
    if z != "1" {
        return Err(EncodingError::MalformedPoint(format!(
            "G1 z coordinate is {z:?}, expected \"1\""
        )));
    }
    checked(Affine::new_unchecked(decode_decimal(x)?, decode_decimal(y)?))
}

pub fn decode_g2_with<P, Q, S>(
    json: &[Vec<S>],
    order: CoeffOrder,
) -> Result<Affine<P>, EncodingError>
where
    P: SWCurveConfig<BaseField = Fp2<Q>>,
    Q: Fp2Config,
    S: AsRef<str>,
{
    let [x, y, z] = json else {
        return Err(EncodingError::MalformedPoint(format!(
            "G2 array has {} elements, expected 3",
            json.len()
        )));
    };
    let is = |pair: &Vec<S>, expected: [&str; 2]| {
        pair.len() == 2 && pair[0].as_ref() == expected[0] && pair[1].as_ref() == expected[1]
    };
    if is(x, G2_IDENTITY[0]) && is(y, G2_IDENTITY[1]) && is(z, G2_IDENTITY[2]) {
        return Ok(Affine::identity());
    }
    if !is(z, G2_UNIT_Z) {
        return Err(EncodingError::MalformedPoint(
            "G2 z coordinate is not [\"1\", \"0\"]".to_owned(),
        ));
    }
    let x = fp2_from_json::<Q, S>(x, order)?;
    let y = fp2_from_json::<Q, S>(y, order)?;
    checked(Affine::new_unchecked(x, y))
}

/// `[x, y, "1"]`, or `["0", "1", "0"]` for the identity.
pub fn encode_g1<C: SupportedCurve>(p: &G1<C>) -> G1Json {
    encode_g1_with(p)
}

/// G2 array with the curve's JSON coefficient order.
pub fn encode_g2<C: SupportedCurve>(p: &G2<C>) -> G2Json {
    encode_g2_with::<C::G2Config, C::Fq2Config>(p, C::metadata().g2_json_order)
}

fn check_arity(group: &str, found: usize, expected: usize) -> Result<(), EncodingError> {
    if found != expected {
        return Err(EncodingError::MalformedPoint(format!(
            "{group} array has {found} elements, expected {expected}"
        )));
    }
    Ok(())
}

pub fn decode_g1<C: SupportedCurve, S: AsRef<str>>(json: &[S]) -> Result<G1<C>, EncodingError> {
    check_arity("G1", json.len(), C::metadata().g1_arity)?;
    decode_g1_with(json)
}

pub fn decode_g2<C: SupportedCurve, S: AsRef<str>>(
    json: &[Vec<S>],
) -> Result<G2<C>, EncodingError> {
    let meta = C::metadata();
    check_arity("G2", json.len(), meta.g2_arity)?;
    decode_g2_with::<C::G2Config, C::Fq2Config, S>(json, meta.g2_json_order)
}

pub fn encode_g1_bytes<C: SupportedCurve>(p: &G1<C>) -> Result<Vec<u8>, EncodingError> {
    let width = C::metadata().field_bytes;
    if p.infinity {
        return Ok(vec![0; 2 * width]);
    }
    let mut out = encode_bytes(&p.x, width)?;
    out.extend(encode_bytes(&p.y, width)?);
    Ok(out)
}

pub fn encode_g2_bytes<C: SupportedCurve>(p: &G2<C>) -> Result<Vec<u8>, EncodingError> {
    let meta = C::metadata();
    let width = meta.field_bytes;
    if p.infinity {
        return Ok(vec![0; 4 * width]);
    }
    let mut out = Vec::with_capacity(4 * width);
    for coord in [&p.x, &p.y] {
        for coeff in meta.g2_byte_order.arrange(&coord.c0, &coord.c1) {
            out.extend(encode_bytes(coeff, width)?);
        }
    }
    Ok(out)
}

pub fn decode_g1_bytes<C: SupportedCurve>(bytes: &[u8]) -> Result<G1<C>, EncodingError> {
    let width = C::metadata().field_bytes;
    if bytes.len() != 2 * width {
        return Err(EncodingError::InvalidLength {
            expected: 2 * width,
            found: bytes.len(),
        });
    }
    if bytes.iter().all(|b| *b == 0) {
        return Ok(Affine::identity());
    }
    let (x, y) = bytes.split_at(width);
    checked(Affine::new_unchecked(decode_bytes(x)?, decode_bytes(y)?))
}

pub fn decode_g2_bytes<C: SupportedCurve>(bytes: &[u8]) -> Result<G2<C>, EncodingError> {
    let meta = C::metadata();
    let width = meta.field_bytes;
    if bytes.len() != 4 * width {
        return Err(EncodingError::InvalidLength {
            expected: 4 * width,
            found: bytes.len(),
        });
    }
    if bytes.iter().all(|b| *b == 0) {
        return Ok(Affine::identity());
    }
    let coeffs: Vec<&[u8]> = bytes.chunks_exact(width).collect();
    let fp2 = |a: &[u8], b: &[u8]| -> Result<Fp2<C::Fq2Config>, EncodingError> {
        let [c0, c1] = meta.g2_byte_order.arrange(a, b);
        Ok(Fp2::new(decode_bytes(c0)?, decode_bytes(c1)?))
    };
    let x = fp2(coeffs[0], coeffs[1])?;
    let y = fp2(coeffs[2], coeffs[3])?;
    checked(Affine::new_unchecked(x, y))
}
