use ark_ec::{pairing::Pairing, AffineRepr};

/// Upper bound on the vector dimension of a single-input key pair.
pub const MAX_DIM: usize = 32;

/// Upper bound on the per-slot vector dimension in the multi-input scheme.
pub const MAX_SLOT_DIM: usize = 16;

/// Default number of table entries covering recoverable inner products.
pub const DEFAULT_TABLE_SPAN: u64 = 65_536;

/// Public curve parameters: the generator of the G1 subgroup all keys,
/// ciphertexts and table entries are built over.
#[derive(Clone, Copy)]
pub struct Params<E: Pairing> {
    pub(crate) g: E::G1Affine,
}

impl<E: Pairing> Params<E> {
    /// Parameters over the curve's standard G1 generator.
    pub fn new() -> Self {
        Self {
            g: E::G1Affine::generator(),
        }
    }

    /// Parameters over a caller-chosen generator. The point must generate
    /// the full prime-order subgroup.
    pub fn from_generator(g: E::G1Affine) -> Self {
        Self { g }
    }

    pub fn generator(&self) -> E::G1Affine {
        self.g
    }
}

impl<E: Pairing> Default for Params<E> {
    fn default() -> Self {
        Self::new()
    }
}
