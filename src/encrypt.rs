use ark_ec::pairing::Pairing;
use ark_std::{UniformRand, Zero};
use ndarray::Array1;
use rand_core::RngCore;
use std::ops::Mul;

use crate::{ciphertext::Ciphertext, Error, Params};

/// Master public key: one group element `hᵢ = sᵢ·G` per vector component.
/// The only key material an encryptor holds.
#[derive(Clone, Debug)]
pub struct MasterPublicKey<E: Pairing> {
    // dim = n
    pub(crate) h: Array1<E::G1Affine>,
}

impl<E: Pairing> MasterPublicKey<E> {
    pub fn dim(&self) -> usize {
        self.h.len()
    }

    /// Encrypts `x` under caller-supplied randomness `r`.
    ///
    /// `r` must be non-zero and must never be reused for a second encryption
    /// under the same key: reuse cancels the mask and leaks a linear relation
    /// between the two plaintexts. The engine cannot detect reuse; upholding
    /// the contract is on the caller. Prefer
    /// [`encrypt_rand`](Self::encrypt_rand) where a fresh sample per call is
    /// acceptable.
    pub fn encrypt(
        &self,
        pp: &Params<E>,
        x: &[E::ScalarField],
        r: E::ScalarField,
    ) -> Result<Ciphertext<E>, Error> {
        if x.len() != self.h.len() {
            return Err(Error::DimensionMismatch {
                expected: self.h.len(),
                got: x.len(),
            });
        }
        if r.is_zero() {
            return Err(Error::ZeroRandomness);
        }

        // c0 = r·G
        let c0 = pp.g.mul(r);

        // cxᵢ = r·hᵢ + xᵢ·G
        let cx = Array1::from_shape_fn(x.len(), |i| self.h[i].mul(r) + pp.g.mul(x[i]));

        Ok(Ciphertext { c0, cx })
    }

    /// Encrypts `x` under a freshly sampled non-zero `r`.
    pub fn encrypt_rand<R: RngCore>(
        &self,
        rng: &mut R,
        pp: &Params<E>,
        x: &[E::ScalarField],
    ) -> Result<Ciphertext<E>, Error> {
        let r = loop {
            let r = E::ScalarField::rand(rng);
            if !r.is_zero() {
                break r;
            }
        };
        self.encrypt(pp, x, r)
    }
}
