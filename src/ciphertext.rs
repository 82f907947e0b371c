use ark_ec::pairing::Pairing;
use ndarray::Array1;

/// Ciphertext of one vector: the mask commitment `c0 = r·G` followed by one
/// masked component `cxᵢ = r·hᵢ + xᵢ·G` per plaintext entry.
///
/// Immutable once produced; carries no identity beyond its content.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ciphertext<E: Pairing> {
    pub(crate) c0: E::G1,
    // dim = n
    pub(crate) cx: Array1<E::G1>,
}

impl<E: Pairing> Ciphertext<E> {
    /// Dimension n of the encrypted vector.
    pub fn dim(&self) -> usize {
        self.cx.len()
    }
}
