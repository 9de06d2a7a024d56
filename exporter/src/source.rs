//! Accessors the exporters need from a proving toolchain's proof and key objects.

use ark_ec::pairing::Pairing;
use ark_groth16::{Proof, VerifyingKey};

use crate::curve::{Groth16Curve, Scalar, SupportedCurve, G1, G2};

pub trait ProofSource {
    type Curve: SupportedCurve;

    fn pi_a(&self) -> G1<Self::Curve>;
    fn pi_b(&self) -> G2<Self::Curve>;
    fn pi_c(&self) -> G1<Self::Curve>;
    /// Public inputs in the circuit's declared order, without the leading constant one.
    fn public_inputs(&self) -> &[Scalar<Self::Curve>];
}

pub trait VerifyingKeySource {
    type Curve: SupportedCurve;

    fn alpha_g1(&self) -> G1<Self::Curve>;
    fn beta_g2(&self) -> G2<Self::Curve>;
    fn gamma_g2(&self) -> G2<Self::Curve>;
    fn delta_g2(&self) -> G2<Self::Curve>;
    /// `gamma_abc_g1`: one point for the constant term plus one per public input.
    fn ic(&self) -> &[G1<Self::Curve>];
}

/// A Groth16 proof together with the public inputs it was produced for.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicProof<E: Pairing> {
    pub proof: Proof<E>,
    pub public_inputs: Vec<E::ScalarField>,
}

impl<E: Pairing> PublicProof<E> {
    pub fn new(proof: Proof<E>, public_inputs: Vec<E::ScalarField>) -> Self {
        Self {
            proof,
            public_inputs,
        }
    }
}

impl<E: Groth16Curve> ProofSource for PublicProof<E> {
    type Curve = E;

    fn pi_a(&self) -> G1<E> {
        self.proof.a
    }

    fn pi_b(&self) -> G2<E> {
        self.proof.b
    }

    fn pi_c(&self) -> G1<E> {
        self.proof.c
    }

    fn public_inputs(&self) -> &[Scalar<E>] {
        &self.public_inputs
    }
}

impl<E: Groth16Curve> VerifyingKeySource for VerifyingKey<E> {
    type Curve = E;

    fn alpha_g1(&self) -> G1<E> {
        self.alpha_g1
    }

    fn beta_g2(&self) -> G2<E> {
        self.beta_g2
    }

    fn gamma_g2(&self) -> G2<E> {
        self.gamma_g2
    }

    fn delta_g2(&self) -> G2<E> {
        self.delta_g2
    }

    fn ic(&self) -> &[G1<E>] {
        &self.gamma_abc_g1
    }
}
