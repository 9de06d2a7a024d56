// Defines the zkSNARK constraint system for x^3 + x + 5 = y.
// x is the private witness and y the single public input.

use ark_ff::PrimeField;
use ark_r1cs_std::alloc::AllocVar;
use ark_r1cs_std::eq::EqGadget;
use ark_r1cs_std::fields::fp::FpVar;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

pub struct CubicCircuit<F: PrimeField> {
    pub x: Option<F>,
    pub y: Option<F>,
}

impl<F: PrimeField> CubicCircuit<F> {
    /// Circuit with no assignment, for parameter generation.
    pub fn blank() -> Self {
        Self { x: None, y: None }
    }

    pub fn with_witness(x: F) -> Self {
        Self {
            x: Some(x),
            y: Some(cubic_output(x)),
        }
    }
}

/// y = x^3 + x + 5
pub fn cubic_output<F: PrimeField>(x: F) -> F {
    x * x * x + x + F::from(5u64)
}

impl<F: PrimeField> ConstraintSynthesizer<F> for CubicCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let x = FpVar::new_witness(cs.clone(), || self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let y = FpVar::new_input(cs.clone(), || self.y.ok_or(SynthesisError::AssignmentMissing))?;

        let x_squared = &x * &x;
        let x_cubed = &x_squared * &x;
        let lhs = &x_cubed + &x + F::from(5u64);
        lhs.enforce_equal(&y)?;

        Ok(())
    }
}
