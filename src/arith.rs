use ark_ec::pairing::Pairing;
use ark_std::Zero;
use ndarray::Array1;
use std::ops::Mul;

/// Σ aᵢ·bᵢ over scalars.
pub(crate) fn dot_ss<E: Pairing>(
    a: &Array1<E::ScalarField>,
    b: &[E::ScalarField],
) -> E::ScalarField {
    assert!(a.len() == b.len());

    let mut sum = E::ScalarField::zero();
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }

    sum
}

/// Σ aᵢ·Bᵢ, scalar coefficients against G1 elements. Zero coefficients
/// contribute the identity and are skipped.
pub(crate) fn dot_s1<E: Pairing>(a: &[E::ScalarField], b: &Array1<E::G1>) -> E::G1 {
    assert!(a.len() == b.len());

    let mut sum = E::G1::zero();
    for i in 0..a.len() {
        if a[i].is_zero() {
            continue;
        }
        sum += b[i].mul(a[i]);
    }

    sum
}
