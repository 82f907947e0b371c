use std::collections::btree_map::{BTreeMap, Entry};

use ark_ec::pairing::Pairing;

use crate::{
    ciphertext::Ciphertext, params::MAX_SLOT_DIM, Error, MasterPublicKey, Params,
};

/// Registry of independent encryption slots.
///
/// Each slot owns its master public key; slots never share keys or
/// randomness, so compromising one slot's randomness cannot unmask another
/// slot's ciphertext. A slot id is bound exactly once.
pub struct Slots<E: Pairing> {
    slots: BTreeMap<usize, MasterPublicKey<E>>,
}

impl<E: Pairing> Slots<E> {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Binds `mpk` to `id`. Slot dimensions are bounded by [`MAX_SLOT_DIM`];
    /// rebinding an already-initialized id is rejected.
    pub fn init_slot(&mut self, id: usize, mpk: MasterPublicKey<E>) -> Result<(), Error> {
        if mpk.dim() == 0 || mpk.dim() > MAX_SLOT_DIM {
            return Err(Error::DimensionOutOfRange(mpk.dim()));
        }
        match self.slots.entry(id) {
            Entry::Occupied(_) => Err(Error::SlotOccupied(id)),
            Entry::Vacant(vacant) => {
                vacant.insert(mpk);
                Ok(())
            }
        }
    }

    /// The master public key bound to `id`.
    pub fn mpk(&self, id: usize) -> Result<&MasterPublicKey<E>, Error> {
        self.slots.get(&id).ok_or(Error::SlotMissing(id))
    }

    /// Encrypts `x` for one slot. The randomness contract of
    /// [`MasterPublicKey::encrypt`] applies per slot: `r` is single-use and
    /// never shared between slots.
    pub fn encrypt_slot(
        &self,
        pp: &Params<E>,
        id: usize,
        x: &[E::ScalarField],
        r: E::ScalarField,
    ) -> Result<Ciphertext<E>, Error> {
        self.mpk(id)?.encrypt(pp, x, r)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<E: Pairing> Default for Slots<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {

    use ark_bls12_381::Bls12_381 as E;
    use ark_ec::pairing::Pairing;
    use ark_std::test_rng;

    type Fr = <E as Pairing>::ScalarField;

    use crate::setup;

    use super::*;

    #[test]
    fn test_slot_is_bound_exactly_once() {
        let rng = &mut test_rng();
        let pp = Params::<E>::new();
        let (_, mpk_a) = setup(rng, &pp, 2).unwrap();
        let (_, mpk_b) = setup(rng, &pp, 2).unwrap();

        let mut slots = Slots::new();
        slots.init_slot(0, mpk_a).unwrap();
        assert_eq!(slots.init_slot(0, mpk_b).unwrap_err(), Error::SlotOccupied(0));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_slot_dimension_bound() {
        let rng = &mut test_rng();
        let pp = Params::<E>::new();
        let (_, oversized) = setup(rng, &pp, MAX_SLOT_DIM + 1).unwrap();

        let mut slots = Slots::new();
        assert_eq!(
            slots.init_slot(0, oversized).unwrap_err(),
            Error::DimensionOutOfRange(MAX_SLOT_DIM + 1)
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn test_encrypt_requires_initialized_slot() {
        let rng = &mut test_rng();
        let pp = Params::<E>::new();
        let (_, mpk) = setup(rng, &pp, 2).unwrap();

        let mut slots = Slots::new();
        slots.init_slot(3, mpk).unwrap();

        let x = vec![Fr::from(1u64), Fr::from(2u64)];
        assert!(slots.encrypt_slot(&pp, 3, &x, Fr::from(7u64)).is_ok());
        assert_eq!(
            slots.encrypt_slot(&pp, 4, &x, Fr::from(7u64)).unwrap_err(),
            Error::SlotMissing(4)
        );
    }
}
