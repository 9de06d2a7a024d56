//! Registry of the curves the exporter knows how to tag.
//!
//! The table is a `static` built at compile time. Nothing registers curves at runtime, so a
//! document is never stamped with a tag whose field width was not configured here.

use ark_ec::pairing::Pairing;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{Fp2, Fp2Config, PrimeField};

use crate::error::ExportError;

pub const GROTH16: &str = "groth16";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    Bn254,
    Bls12_381,
}

/// Which coefficient of an `Fp2` coordinate comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoeffOrder {
    /// `[c0, c1]`, real part first.
    C0C1,
    /// `[c1, c0]`, imaginary part first.
    C1C0,
}

impl CoeffOrder {
    pub fn arrange<T>(self, c0: T, c1: T) -> [T; 2] {
        match self {
            Self::C0C1 => [c0, c1],
            Self::C1C0 => [c1, c0],
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CurveMetadata {
    pub id: CurveId,
    pub protocol: &'static str,
    pub curve: &'static str,
    pub aliases: &'static [&'static str],
    /// Byte width of a base field element.
    pub field_bytes: usize,
    /// Byte width of a scalar field element.
    pub scalar_bytes: usize,
    pub g1_arity: usize,
    pub g2_arity: usize,
    /// Coefficient order of G2 coordinates inside JSON arrays.
    pub g2_json_order: CoeffOrder,
    /// Coefficient order of G2 coordinates in the uncompressed byte layout.
    pub g2_byte_order: CoeffOrder,
}

static CURVES: [CurveMetadata; 2] = [
    CurveMetadata {
        id: CurveId::Bn254,
        protocol: GROTH16,
        curve: "bn128",
        aliases: &["bn254"],
        field_bytes: 32,
        scalar_bytes: 32,
        g1_arity: 3,
        g2_arity: 3,
        g2_json_order: CoeffOrder::C0C1,
        g2_byte_order: CoeffOrder::C1C0,
    },
    CurveMetadata {
        id: CurveId::Bls12_381,
        protocol: GROTH16,
        curve: "bls12381",
        aliases: &["bls12-381", "bls12_381"],
        field_bytes: 48,
        scalar_bytes: 32,
        g1_arity: 3,
        g2_arity: 3,
        g2_json_order: CoeffOrder::C0C1,
        g2_byte_order: CoeffOrder::C1C0,
    },
];

/// Resolve a curve tag (or one of its aliases) to its metadata.
pub fn lookup(curve_id: &str) -> Result<&'static CurveMetadata, ExportError> {
    CURVES
        .iter()
        .find(|meta| {
            meta.curve.eq_ignore_ascii_case(curve_id)
                || meta
                    .aliases
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(curve_id))
        })
        .ok_or_else(|| ExportError::UnsupportedCurve(curve_id.to_owned()))
}

impl CurveId {
    pub fn metadata(self) -> &'static CurveMetadata {
        match self {
            Self::Bn254 => &CURVES[0],
            Self::Bls12_381 => &CURVES[1],
        }
    }
}

/// Binds a pairing engine to its registry entry and coordinate types.
pub trait SupportedCurve: Sized + 'static {
    const ID: CurveId;

    type Fq: PrimeField;
    type Fq2Config: Fp2Config<Fp = Self::Fq>;
    type G1Config: SWCurveConfig<BaseField = Self::Fq>;
    type G2Config: SWCurveConfig<BaseField = Fp2<Self::Fq2Config>>;
    type Scalar: PrimeField;

    fn metadata() -> &'static CurveMetadata {
        Self::ID.metadata()
    }
}

pub type G1<C> = Affine<<C as SupportedCurve>::G1Config>;
pub type G2<C> = Affine<<C as SupportedCurve>::G2Config>;
pub type Scalar<C> = <C as SupportedCurve>::Scalar;

/// A supported curve whose `ark-ec` pairing types coincide with the codec's point types.
pub trait Groth16Curve:
    SupportedCurve
    + Pairing<
        G1Affine = G1<Self>,
        G2Affine = G2<Self>,
        ScalarField = <Self as SupportedCurve>::Scalar,
    >
{
}

impl<E> Groth16Curve for E where
    E: SupportedCurve
        + Pairing<G1Affine = G1<E>, G2Affine = G2<E>, ScalarField = <E as SupportedCurve>::Scalar>
{
}

impl SupportedCurve for ark_bn254::Bn254 {
    const ID: CurveId = CurveId::Bn254;

    type Fq = ark_bn254::Fq;
    type Fq2Config = ark_bn254::Fq2Config;
    type G1Config = ark_bn254::g1::Config;
    type G2Config = ark_bn254::g2::Config;
    type Scalar = ark_bn254::Fr;
}

impl SupportedCurve for ark_bls12_381::Bls12_381 {
    const ID: CurveId = CurveId::Bls12_381;

    type Fq = ark_bls12_381::Fq;
    type Fq2Config = ark_bls12_381::Fq2Config;
    type G1Config = ark_bls12_381::g1::Config;
    type G2Config = ark_bls12_381::g2::Config;
    type Scalar = ark_bls12_381::Fr;
}
