use ark_ec::{pairing::Pairing, CurveGroup};
use ark_std::UniformRand;
use ndarray::Array1;
use rand_core::RngCore;
use std::ops::Mul;

use crate::{
    arith::dot_ss,
    params::MAX_DIM,
    Error, FunctionalKey, MasterPublicKey, Params,
};

/// Master secret key: the scalar vector `s`, held by the trusted key-issuer.
///
/// The encrypt/decrypt engine never consumes it directly; it only sees the
/// public image [`MasterPublicKey`] and [`FunctionalKey`]s derived here.
#[derive(Clone, Debug)]
pub struct MasterSecretKey<E: Pairing> {
    // dim = n
    pub(crate) s: Array1<E::ScalarField>,
}

impl<E: Pairing> MasterSecretKey<E> {
    /// Wraps issuer-supplied scalars. The dimension must lie in
    /// `1..=MAX_DIM` and is fixed for the lifetime of the key pair.
    pub fn from_scalars(s: Vec<E::ScalarField>) -> Result<Self, Error> {
        if s.is_empty() || s.len() > MAX_DIM {
            return Err(Error::DimensionOutOfRange(s.len()));
        }
        Ok(Self {
            s: Array1::from(s),
        })
    }

    pub fn dim(&self) -> usize {
        self.s.len()
    }

    /// Public image `hᵢ = sᵢ·G`.
    pub fn public_key(&self, pp: &Params<E>) -> MasterPublicKey<E> {
        let h: Vec<E::G1> = self.s.iter().map(|si| pp.g.mul(*si)).collect();
        MasterPublicKey {
            h: Array1::from(E::G1::normalize_batch(&h)),
        }
    }

    /// Functional key `sk_y = Σ sᵢ·yᵢ`, authorizing recovery of `<x, y>`
    /// from ciphertexts under the matching public key.
    pub fn functional_key(&self, y: &[E::ScalarField]) -> Result<FunctionalKey<E>, Error> {
        if y.len() != self.s.len() {
            return Err(Error::DimensionMismatch {
                expected: self.s.len(),
                got: y.len(),
            });
        }
        Ok(FunctionalKey {
            sk: dot_ss::<E>(&self.s, y),
        })
    }
}

/// Samples a fresh master key pair of dimension `n`.
pub fn setup<E: Pairing, R: RngCore>(
    rng: &mut R,
    pp: &Params<E>,
    n: usize,
) -> Result<(MasterSecretKey<E>, MasterPublicKey<E>), Error> {
    if n == 0 || n > MAX_DIM {
        return Err(Error::DimensionOutOfRange(n));
    }

    let s: Vec<E::ScalarField> = (0..n).map(|_| E::ScalarField::rand(rng)).collect();
    let msk = MasterSecretKey {
        s: Array1::from(s),
    };
    let mpk = msk.public_key(pp);

    Ok((msk, mpk))
}
