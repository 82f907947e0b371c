use ark_ec::{pairing::Pairing, CurveGroup};
use ark_std::Zero;

use crate::{ciphertext::Ciphertext, dlog::DlogTable, Error, FunctionalKey};

/// Recovers `Σₛ <xₛ, yₛ>` across slots with a single table lookup.
///
/// `cts`, `keys` and `ys` are indexed by slot. Each slot's result point is
/// folded into the running sum without ever being exposed; only the combined
/// sum is recovered, so the caller learns nothing about an individual slot's
/// inner product. The sum must lie within the table's populated range.
pub fn decrypt<E: Pairing>(
    cts: &[Ciphertext<E>],
    keys: &[FunctionalKey<E>],
    ys: &[&[E::ScalarField]],
    table: &DlogTable<E>,
) -> Result<u64, Error> {
    if cts.is_empty() {
        return Err(Error::DimensionOutOfRange(0));
    }
    if keys.len() != cts.len() {
        return Err(Error::DimensionMismatch {
            expected: cts.len(),
            got: keys.len(),
        });
    }
    if ys.len() != cts.len() {
        return Err(Error::DimensionMismatch {
            expected: cts.len(),
            got: ys.len(),
        });
    }
    if table.is_empty() {
        return Err(Error::TableNotReady);
    }

    let mut sum = E::G1::zero();
    for ((ct, key), y) in cts.iter().zip(keys.iter()).zip(ys.iter()) {
        sum += key.decrypt_point(ct, y)?;
    }

    if sum.is_zero() {
        return Ok(0);
    }
    table.lookup(&sum.into_affine()).ok_or(Error::DlogNotFound)
}
