// Checks a Groth16 proof against public inputs using the prepared form of the verifying key.

use ark_ec::pairing::Pairing;
use ark_groth16::{Groth16, Proof, VerifyingKey, prepare_verifying_key};

pub fn verify_proof<E: Pairing>(
    proof: &Proof<E>,
    public_inputs: &[E::ScalarField],
    vk: &VerifyingKey<E>,
) -> anyhow::Result<bool> {
    let pvk = prepare_verifying_key(vk);
    Ok(Groth16::<E>::verify_proof(&pvk, proof, public_inputs)?)
}
