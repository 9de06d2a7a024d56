use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use clap::{Parser, Subcommand};
use exporter::field::encode_bytes;
use exporter::point::{encode_g1_bytes, encode_g2_bytes};
use exporter::{
    CurveId, Groth16Curve, ProofJson, PublicProof, VerifyingKeyJson,
    export_proof, export_proof_derived, export_verifying_key, lookup, read_document,
    write_document,
};
use rand::thread_rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// zkcli: prove x^3 + x + 5 = y and exchange the result as snarkjs JSON
#[derive(Parser)]
#[command(name = "zkcli")]
#[command(about = "Generate Groth16 proofs and snarkjs-compatible documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prove x^3 + x + 5 = y and write the proof and verifying key documents
    Prove {
        /// Curve tag or alias: bn128, bn254, bls12381, bls12-381
        #[arg(long, default_value = "bn128")]
        curve: String,
        #[arg(long)]
        x: u64,
        /// Expected public inputs as decimal strings; checked against the proof
        #[arg(long)]
        public: Vec<String>,

        #[arg(long, default_value = "proof.json")]
        proof_out: PathBuf,
        #[arg(long, default_value = "verification_key.json")]
        vk_out: PathBuf,
        /// Also write the bare public input array, as `snarkjs` does in public.json
        #[arg(long)]
        public_out: Option<PathBuf>,
    },
    /// Decode a proof and verifying key document and verify the proof
    Check {
        #[arg(long, default_value = "proof.json")]
        proof: PathBuf,
        #[arg(long, default_value = "verification_key.json")]
        vk: PathBuf,
    },
    /// Print pi_a || pi_b || pi_c || public inputs as big-endian hex
    Calldata {
        #[arg(long, default_value = "proof.json")]
        proof: PathBuf,
    },
}

fn create_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path).with_context(|| format!("creating {}", path.display()))
}

fn open_document<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_document(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

fn save(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let mut file = create_file(path)?;
    file.write_all(bytes).with_context(|| format!("writing {}", path.display()))
}

fn prove<E: Groth16Curve>(
    x: u64,
    public: &[String],
    proof_out: &Path,
    vk_out: &Path,
    public_out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut rng = thread_rng();
    let out = prover::generate_proof::<E, _>(x, &mut rng)?;
    info!(curve = E::metadata().curve, x, "proof generated");

    // Render every document before touching the filesystem, so a rejected `--public`
    // leaves existing outputs alone.
    let proof = PublicProof::new(out.proof, out.public_inputs);
    let mut proof_bytes = Vec::new();
    if public.is_empty() {
        export_proof_derived(&proof, &mut proof_bytes)?;
    } else {
        export_proof(&proof, public, &mut proof_bytes)?;
    }
    let mut vk_bytes = Vec::new();
    export_verifying_key(&out.vk, &mut vk_bytes)?;
    let public_bytes = match public_out {
        Some(_) => {
            let mut buf = Vec::new();
            write_document(&exporter::proof_to_json(&proof).public, &mut buf)?;
            Some(buf)
        }
        None => None,
    };

    save(proof_out, &proof_bytes)?;
    save(vk_out, &vk_bytes)?;
    if let (Some(path), Some(bytes)) = (public_out, public_bytes) {
        save(path, &bytes)?;
        println!("✅ Public inputs saved to {}", path.display());
    }

    println!("✅ Proof saved to {}", proof_out.display());
    println!("✅ Verifying key saved to {}", vk_out.display());
    Ok(())
}

fn check<E: Groth16Curve>(proof: &ProofJson, vk: &VerifyingKeyJson) -> anyhow::Result<bool> {
    let proof = proof.decode::<E>()?;
    let vk = vk.decode::<E>()?;
    if proof.public_inputs.len() + 1 != vk.gamma_abc_g1.len() {
        bail!(
            "proof carries {} public inputs but the key expects {}",
            proof.public_inputs.len(),
            vk.gamma_abc_g1.len() - 1
        );
    }
    prover::verify_proof(&proof.proof, &proof.public_inputs, &vk)
}

fn calldata<E: Groth16Curve>(doc: &ProofJson) -> anyhow::Result<Vec<u8>> {
    let PublicProof {
        proof,
        public_inputs,
    } = doc.decode::<E>()?;
    let mut out = encode_g1_bytes::<E>(&proof.a)?;
    out.extend(encode_g2_bytes::<E>(&proof.b)?);
    out.extend(encode_g1_bytes::<E>(&proof.c)?);
    for input in &public_inputs {
        out.extend(encode_bytes(input, E::metadata().scalar_bytes)?);
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Prove {
            curve,
            x,
            public,
            proof_out,
            vk_out,
            public_out,
        } => {
            let public_out = public_out.as_deref();
            match lookup(curve)?.id {
                CurveId::Bn254 => prove::<Bn254>(*x, public, proof_out, vk_out, public_out)?,
                CurveId::Bls12_381 => {
                    prove::<Bls12_381>(*x, public, proof_out, vk_out, public_out)?
                }
            }
        }
        Commands::Check { proof, vk } => {
            let proof: ProofJson = open_document(proof)?;
            let vk: VerifyingKeyJson = open_document(vk)?;
            let valid = match lookup(&proof.curve)?.id {
                CurveId::Bn254 => check::<Bn254>(&proof, &vk)?,
                CurveId::Bls12_381 => check::<Bls12_381>(&proof, &vk)?,
            };
            println!("Proof is valid: {}", valid);
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Calldata { proof } => {
            let doc: ProofJson = open_document(proof)?;
            let bytes = match lookup(&doc.curve)?.id {
                CurveId::Bn254 => calldata::<Bn254>(&doc)?,
                CurveId::Bls12_381 => calldata::<Bls12_381>(&doc)?,
            };
            info!(len = bytes.len(), "calldata encoded");
            println!("0x{}", hex::encode(bytes));
        }
    }

    Ok(())
}
