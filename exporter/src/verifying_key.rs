//! Verifying-key exporter.

use std::io::Write;

use ark_groth16::VerifyingKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::{Groth16Curve, SupportedCurve};
use crate::document::write_document;
use crate::error::ExportError;
use crate::point::{decode_g1, decode_g2, encode_g1, encode_g2, G1Json, G2Json};
use crate::proof::check_tags;
use crate::source::VerifyingKeySource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKeyJson {
    pub protocol: String,
    pub curve: String,
    #[serde(rename = "nPublic")]
    pub n_public: usize,
    pub vk_alpha_1: G1Json,
    pub vk_beta_2: G2Json,
    pub vk_gamma_2: G2Json,
    pub vk_delta_2: G2Json,
    #[serde(rename = "IC")]
    pub ic: Vec<G1Json>,
}

pub fn verifying_key_to_json<K: VerifyingKeySource>(
    vk: &K,
) -> Result<VerifyingKeyJson, ExportError> {
    let ic = vk.ic();
    if ic.is_empty() {
        return Err(ExportError::EmptyIcVector);
    }
    let meta = <K::Curve as SupportedCurve>::metadata();
    Ok(VerifyingKeyJson {
        protocol: meta.protocol.to_owned(),
        curve: meta.curve.to_owned(),
        n_public: ic.len() - 1,
        vk_alpha_1: encode_g1::<K::Curve>(&vk.alpha_g1()),
        vk_beta_2: encode_g2::<K::Curve>(&vk.beta_g2()),
        vk_gamma_2: encode_g2::<K::Curve>(&vk.gamma_g2()),
        vk_delta_2: encode_g2::<K::Curve>(&vk.delta_g2()),
        ic: ic.iter().map(encode_g1::<K::Curve>).collect(),
    })
}

pub fn export_verifying_key<K: VerifyingKeySource, W: Write>(
    vk: &K,
    sink: W,
) -> Result<(), ExportError> {
    let doc = verifying_key_to_json(vk)?;
    let written = write_document(&doc, sink)?;
    debug!(
        curve = %doc.curve,
        n_public = doc.n_public,
        bytes = written,
        "exported verifying key"
    );
    Ok(())
}

impl VerifyingKeyJson {
    pub fn decode<E: Groth16Curve>(&self) -> Result<VerifyingKey<E>, ExportError> {
        check_tags::<E>(&self.protocol, &self.curve)?;
        if self.ic.is_empty() {
            return Err(ExportError::EmptyIcVector);
        }
        if self.n_public.checked_add(1) != Some(self.ic.len()) {
            return Err(ExportError::IcLengthMismatch {
                n_public: self.n_public,
                ic_len: self.ic.len(),
            });
        }
        Ok(VerifyingKey {
            alpha_g1: decode_g1::<E, _>(&self.vk_alpha_1)?,
            beta_g2: decode_g2::<E, _>(&self.vk_beta_2)?,
            gamma_g2: decode_g2::<E, _>(&self.vk_gamma_2)?,
            delta_g2: decode_g2::<E, _>(&self.vk_delta_2)?,
            gamma_abc_g1: self
                .ic
                .iter()
                .map(|point| decode_g1::<E, _>(point))
                .collect::<Result<_, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::read_document;
    use ark_bls12_381::Bls12_381;
    use ark_bn254::Bn254;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::UniformRand;

    // snarkjs bn128 key with one public signal; `vk_alphabeta_12` is emptied but kept, since
    // unknown keys are ignored.
    const SNARKJS_VK: &str = r#"{"protocol":"groth16","curve":"bn128","nPublic":1,"vk_alpha_1":["20491192805390485299153009773594534940189261866228447918068658471970481763042","9383485363053290200918347156157836566562967994039712273449902621266178545958","1"],"vk_beta_2":[["6375614351688725206403948262868962793625744043794305715222011528459656738731","4252822878758300859123897981450591353533073413197771768651442665752259397132"],["10505242626370262277552901082094356697409835680220590971873171140371331206856","21847035105528745403288232691147584728191162732299865338377159692350059136679"],["1","0"]],"vk_gamma_2":[["10857046999023057135944570762232829481370756359578518086990519993285655852781","11559732032986387107991004021392285783925812861821192530917403151452391805634"],["8495653923123431417604973247489272438418190587263600148770280649306958101930","4082367875863433681332203403145435568316851327593401208105741076214120093531"],["1","0"]],"vk_delta_2":[["11147726250204240425553718976509533562471607057214060089201410948104319395085","7578930958937280071835180946681941543445736407833773661864416097780323268523"],["19323259608937507818318198715669949863835067101358223126995456700412018945827","7326125747274447110428491691423519622729831393346111572514231778923697550810"],["1","0"]],"vk_alphabeta_12":[],"IC":[["6819801395408938350212900248749732364821477541620635511814266536599629892365","9092252330033992554755034971584864587974280972948086568597554018278609861372","1"],["17882351432929302592725330552407222299541667716607588771282887857165175611387","18907419617206324833977586007131055763810739835484972981819026406579664278293","1"]]}"#;

    fn random_vk(n_public: usize) -> VerifyingKey<Bls12_381> {
        let mut rng = ark_std::test_rng();
        VerifyingKey {
            alpha_g1: ark_bls12_381::G1Projective::rand(&mut rng).into_affine(),
            beta_g2: ark_bls12_381::G2Projective::rand(&mut rng).into_affine(),
            gamma_g2: ark_bls12_381::G2Projective::rand(&mut rng).into_affine(),
            delta_g2: ark_bls12_381::G2Projective::rand(&mut rng).into_affine(),
            gamma_abc_g1: (0..=n_public)
                .map(|_| ark_bls12_381::G1Projective::rand(&mut rng).into_affine())
                .collect(),
        }
    }

    #[test]
    fn snarkjs_key_decodes_and_re_encodes() {
        let doc: VerifyingKeyJson = read_document(SNARKJS_VK.as_bytes()).unwrap();
        let vk = doc.decode::<Bn254>().unwrap();
        assert_eq!(vk.gamma_g2, ark_bn254::G2Affine::generator());
        assert_eq!(verifying_key_to_json(&vk).unwrap(), doc);
    }

    #[test]
    fn n_public_counts_ic_minus_constant() {
        let doc = verifying_key_to_json(&random_vk(3)).unwrap();
        assert_eq!(doc.n_public, 3);
        assert_eq!(doc.ic.len(), doc.n_public + 1);
        assert_eq!(doc.curve, "bls12381");
        assert_eq!(doc.protocol, "groth16");
    }

    #[test]
    fn empty_ic_is_rejected() {
        let mut vk = random_vk(0);
        vk.gamma_abc_g1.clear();
        let mut sink = Vec::new();
        let err = export_verifying_key(&vk, &mut sink).unwrap_err();
        assert!(matches!(err, ExportError::EmptyIcVector));
        assert!(sink.is_empty());
    }

    #[test]
    fn export_is_deterministic_and_round_trips() {
        let vk = random_vk(2);
        let (mut first, mut second) = (Vec::new(), Vec::new());
        export_verifying_key(&vk, &mut first).unwrap();
        export_verifying_key(&vk, &mut second).unwrap();
        assert_eq!(first, second);

        let doc: VerifyingKeyJson = read_document(first.as_slice()).unwrap();
        assert_eq!(doc.decode::<Bls12_381>().unwrap(), vk);
    }

    #[test]
    fn key_order_matches_the_schema() {
        let mut out = Vec::new();
        export_verifying_key(&random_vk(1), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let keys = [
            "protocol",
            "curve",
            "nPublic",
            "vk_alpha_1",
            "vk_beta_2",
            "vk_gamma_2",
            "vk_delta_2",
            "IC",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| text.find(&format!("\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\"nPublic\": 1"));
    }

    #[test]
    fn inconsistent_n_public_is_rejected() {
        let mut doc = verifying_key_to_json(&random_vk(2)).unwrap();
        doc.n_public = 5;
        assert!(matches!(
            doc.decode::<Bls12_381>(),
            Err(ExportError::IcLengthMismatch { n_public: 5, ic_len: 3 })
        ));
    }

    #[test]
    fn huge_n_public_is_a_length_mismatch() {
        let mut doc: VerifyingKeyJson = read_document(SNARKJS_VK.as_bytes()).unwrap();
        doc.ic.truncate(1);
        doc.n_public = usize::MAX;
        assert!(matches!(
            doc.decode::<Bn254>(),
            Err(ExportError::IcLengthMismatch { n_public: usize::MAX, ic_len: 1 })
        ));

        let text = SNARKJS_VK.replace("\"nPublic\":1", "\"nPublic\":18446744073709551615");
        let doc: VerifyingKeyJson = read_document(text.as_bytes()).unwrap();
        assert!(matches!(
            doc.decode::<Bn254>(),
            Err(ExportError::IcLengthMismatch { ic_len: 2, .. })
        ));
    }
}
