// Groth16 toolchain for the x^3 + x + 5 = y circuit.
// Produces the proof, verifying key and public inputs that the exporter transcodes.

// Includes:
// - `generate_proof`: runs setup and proving for a given x on any pairing engine
// - `verify_proof`: checks a proof against a verifying key and public inputs

pub mod circuit;
pub mod verify;

pub use verify::verify_proof;

use ark_ec::pairing::Pairing;
use ark_groth16::{Groth16, Proof, VerifyingKey};
use ark_std::rand::RngCore;

use crate::circuit::{CubicCircuit, cubic_output};

pub struct CubicProof<E: Pairing> {
    pub proof: Proof<E>,
    pub vk: VerifyingKey<E>,
    /// Public inputs in declared order; here just `[y]`.
    pub public_inputs: Vec<E::ScalarField>,
}

/// Generate fresh parameters and a Groth16 proof that x^3 + x + 5 = y.
pub fn generate_proof<E: Pairing, R: RngCore>(
    x: u64,
    rng: &mut R,
) -> anyhow::Result<CubicProof<E>> {
    let x = E::ScalarField::from(x);
    let y = cubic_output(x);

    let pk = Groth16::<E>::generate_random_parameters_with_reduction(CubicCircuit::blank(), rng)?;
    let proof = Groth16::<E>::create_random_proof_with_reduction(
        CubicCircuit::with_witness(x),
        &pk,
        rng,
    )?;

    Ok(CubicProof {
        proof,
        vk: pk.vk,
        public_inputs: vec![y],
    })
}
