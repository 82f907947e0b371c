use ark_ec::{pairing::Pairing, CurveGroup};
use ark_std::Zero;
use std::ops::Mul;

use crate::{arith::dot_s1, ciphertext::Ciphertext, dlog::DlogTable, Error};

/// Functional decryption key for one vector `y`: the scalar
/// `sk_y = Σ sᵢ·yᵢ`.
///
/// Holding it together with `y` authorizes recovery of `<x, y>` from any
/// ciphertext under the matching master key, and nothing further about `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionalKey<E: Pairing> {
    pub(crate) sk: E::ScalarField,
}

impl<E: Pairing> FunctionalKey<E> {
    /// Recovers `<x, y>` from the ciphertext.
    ///
    /// The true inner product must lie within the table's populated range;
    /// outside it the call fails with [`Error::DlogNotFound`] rather than
    /// returning a wrong value. The identity result decodes to 0 without
    /// consulting the table.
    pub fn decrypt(
        &self,
        ct: &Ciphertext<E>,
        y: &[E::ScalarField],
        table: &DlogTable<E>,
    ) -> Result<u64, Error> {
        if y.len() != ct.dim() {
            return Err(Error::DimensionMismatch {
                expected: ct.dim(),
                got: y.len(),
            });
        }
        if table.is_empty() {
            return Err(Error::TableNotReady);
        }

        let point = self.decrypt_point(ct, y)?;
        if point.is_zero() {
            return Ok(0);
        }
        table.lookup(&point.into_affine()).ok_or(Error::DlogNotFound)
    }

    /// Evaluates the ciphertext to `<x, y>·G` without recovering the scalar.
    ///
    /// For callers that combine several results additively before a single
    /// recovery, as [`multi::decrypt`](crate::multi::decrypt()) does.
    pub fn decrypt_point(
        &self,
        ct: &Ciphertext<E>,
        y: &[E::ScalarField],
    ) -> Result<E::G1, Error> {
        if y.len() != ct.dim() {
            return Err(Error::DimensionMismatch {
                expected: ct.dim(),
                got: y.len(),
            });
        }

        // Σ yᵢ·cxᵢ - sk_y·c0
        //   = Σ yᵢ·(r·hᵢ + xᵢ·G) - (Σ sᵢ·yᵢ)·r·G
        //   = <x, y>·G
        let num = dot_s1::<E>(y, &ct.cx);
        let den = ct.c0.mul(self.sk);

        Ok(num - den)
    }
}
