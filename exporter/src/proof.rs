//! Proof exporter: `pi_a`, `pi_b`, `pi_c`, `public` plus protocol/curve tags.

use std::io::Write;

use ark_groth16::Proof;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::{lookup, Groth16Curve, SupportedCurve};
use crate::document::write_document;
use crate::error::ExportError;
use crate::field::{decode_decimal, encode_decimal};
use crate::point::{decode_g1, decode_g2, encode_g1, encode_g2, G1Json, G2Json};
use crate::source::{ProofSource, PublicProof};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub pi_a: G1Json,
    pub pi_b: G2Json,
    pub pi_c: G1Json,
    pub public: Vec<String>,
    pub protocol: String,
    pub curve: String,
}

/// Build the document, deriving `public` from the proof object itself.
pub fn proof_to_json<P: ProofSource>(proof: &P) -> ProofJson {
    let meta = <P::Curve as SupportedCurve>::metadata();
    ProofJson {
        pi_a: encode_g1::<P::Curve>(&proof.pi_a()),
        pi_b: encode_g2::<P::Curve>(&proof.pi_b()),
        pi_c: encode_g1::<P::Curve>(&proof.pi_c()),
        public: proof.public_inputs().iter().map(encode_decimal).collect(),
        protocol: meta.protocol.to_owned(),
        curve: meta.curve.to_owned(),
    }
}

/// Export `proof`, cross-checking caller-supplied public inputs against the proof's own.
///
/// The emitted `public` array is always the one derived from the proof; `public_inputs` only
/// has to agree with it, in count and in value.
pub fn export_proof<P, S, W>(proof: &P, public_inputs: &[S], sink: W) -> Result<(), ExportError>
where
    P: ProofSource,
    S: AsRef<str>,
    W: Write,
{
    let derived = proof.public_inputs();
    if derived.len() != public_inputs.len() {
        return Err(ExportError::InputCountMismatch {
            expected: derived.len(),
            found: public_inputs.len(),
        });
    }
    for (index, (supplied, derived)) in public_inputs.iter().zip(derived).enumerate() {
        let supplied = supplied.as_ref();
        if decode_decimal::<<P::Curve as SupportedCurve>::Scalar>(supplied)? != *derived {
            return Err(ExportError::InputMismatch {
                index,
                supplied: supplied.to_owned(),
                derived: encode_decimal(derived),
            });
        }
    }
    export_proof_derived(proof, sink)
}

pub fn export_proof_derived<P: ProofSource, W: Write>(
    proof: &P,
    sink: W,
) -> Result<(), ExportError> {
    let doc = proof_to_json(proof);
    let written = write_document(&doc, sink)?;
    debug!(
        curve = %doc.curve,
        public_inputs = doc.public.len(),
        bytes = written,
        "exported proof"
    );
    Ok(())
}

impl ProofJson {
    /// Decode back into an `ark-groth16` proof for curve `E`.
    pub fn decode<E: Groth16Curve>(&self) -> Result<PublicProof<E>, ExportError> {
        check_tags::<E>(&self.protocol, &self.curve)?;
        let proof = Proof {
            a: decode_g1::<E, _>(&self.pi_a)?,
            b: decode_g2::<E, _>(&self.pi_b)?,
            c: decode_g1::<E, _>(&self.pi_c)?,
        };
        let public_inputs = self
            .public
            .iter()
            .map(|s| decode_decimal(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PublicProof::new(proof, public_inputs))
    }
}

pub(crate) fn check_tags<C: SupportedCurve>(
    protocol: &str,
    curve: &str,
) -> Result<(), ExportError> {
    let meta = C::metadata();
    if protocol != meta.protocol {
        return Err(ExportError::TagMismatch {
            field: "protocol",
            expected: meta.protocol.to_owned(),
            found: protocol.to_owned(),
        });
    }
    let tagged = lookup(curve)?;
    if tagged.id != meta.id {
        return Err(ExportError::TagMismatch {
            field: "curve",
            expected: meta.curve.to_owned(),
            found: curve.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::read_document;
    use crate::error::EncodingError;
    use ark_bls12_381::Bls12_381;
    use ark_bn254::{Bn254, Fr};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::UniformRand;

    // Points taken from a snarkjs bn128 proof.
    const SNARKJS_PROOF: &str = r#"{"pi_a":["9116723326348226310312399687760458379430965793646629199281973649756047436480","2874270905534102053533448138397225723399614825643556082270186179665334613224","1"],"pi_b":[["13328302993272298376458050653251338379859716533551615072852727463498727372592","12701171633796457182683671489148506476790474186771723028154216779603805469575"],["8082634848749541028482697284805475720753045849064639479971735063238995549772","20245972516592660684651816366736428662226358885768931974840625194221925755315"],["1","0"]],"pi_c":["3011399641379772467981372516841419028913642315726922827824714699429906533335","10895927520860009543604229709848836725831147762816413949621715866949585547965","1"],"public":["35"],"protocol":"groth16","curve":"bn128"}"#;

    fn random_proof(inputs: &[u64]) -> PublicProof<Bn254> {
        let mut rng = ark_std::test_rng();
        PublicProof::new(
            Proof {
                a: ark_bn254::G1Projective::rand(&mut rng).into_affine(),
                b: ark_bn254::G2Projective::rand(&mut rng).into_affine(),
                c: ark_bn254::G1Projective::rand(&mut rng).into_affine(),
            },
            inputs.iter().copied().map(Fr::from).collect(),
        )
    }

    #[test]
    fn snarkjs_proof_decodes_and_re_encodes_identically() {
        let doc: ProofJson = read_document(SNARKJS_PROOF.as_bytes()).unwrap();
        let proof = doc.decode::<Bn254>().unwrap();
        assert_eq!(proof.public_inputs, vec![Fr::from(35u64)]);
        assert_eq!(proof_to_json(&proof), doc);
    }

    #[test]
    fn keys_come_out_in_a_fixed_order() {
        let mut out = Vec::new();
        export_proof(&random_proof(&[35]), &["35"], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let keys = ["pi_a", "pi_b", "pi_c", "public", "protocol", "curve"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| format!("\"{key}\""))
            .map(|key| text.find(&key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\"bn128\""));
    }

    #[test]
    fn exporting_twice_is_byte_identical() {
        let proof = random_proof(&[1, 2, 3]);
        let (mut first, mut second) = (Vec::new(), Vec::new());
        export_proof_derived(&proof, &mut first).unwrap();
        export_proof_derived(&proof, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn public_input_count_must_match() {
        let err = export_proof(&random_proof(&[35]), &["35", "36"], Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::InputCountMismatch { expected: 1, found: 2 }
        ));
    }

    #[test]
    fn public_input_values_must_match() {
        let mut sink = Vec::new();
        let err = export_proof(&random_proof(&[35, 7]), &["35", "8"], &mut sink).unwrap_err();
        assert!(matches!(err, ExportError::InputMismatch { index: 1, .. }));
        assert!(sink.is_empty());

        let err = export_proof(&random_proof(&[35]), &["-35"], Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Encoding(EncodingError::InvalidDigits(_))
        ));
    }

    #[test]
    fn identity_points_survive_export() {
        let mut proof = random_proof(&[]);
        proof.proof.c = ark_bn254::G1Affine::zero();
        let doc = proof_to_json(&proof);
        assert_eq!(doc.pi_c, ["0", "1", "0"]);
        assert_eq!(doc.decode::<Bn254>().unwrap(), proof);
    }

    #[test]
    fn decoding_checks_tags() {
        let mut doc = proof_to_json(&random_proof(&[1]));
        let err = doc.decode::<Bls12_381>().unwrap_err();
        assert!(matches!(err, ExportError::TagMismatch { field: "curve", .. }));

        doc.curve = "bn254".to_owned();
        assert!(doc.decode::<Bn254>().is_ok());

        doc.curve = "pallas".to_owned();
        assert!(matches!(
            doc.decode::<Bn254>(),
            Err(ExportError::UnsupportedCurve(_))
        ));

        doc.curve = "bn128".to_owned();
        doc.protocol = "plonk".to_owned();
        assert!(matches!(
            doc.decode::<Bn254>(),
            Err(ExportError::TagMismatch { field: "protocol", .. })
        ));
    }

    #[test]
    fn short_point_arrays_are_malformed() {
        let mut doc = proof_to_json(&random_proof(&[1]));
        doc.pi_a.pop();
        assert!(matches!(
            doc.decode::<Bn254>(),
            Err(ExportError::Encoding(EncodingError::MalformedPoint(_)))
        ));
    }
}
