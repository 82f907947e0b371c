use std::collections::HashMap;
use std::marker::PhantomData;
use std::ops::Mul;

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_serialize::CanonicalSerialize;
use rayon::prelude::*;

use crate::Params;

// Walk length handed to each worker by `extend_par`.
const PAR_BLOCK: u64 = 1 << 10;

/// Recovery table mapping `k·G` to `k` over caller-populated ranges.
///
/// Decryption yields the inner product in exponentiated form; a bounded
/// precomputed table is the only way to undo that encoding on a curve with no
/// efficient discrete-log algorithm. Populate it once per deployment with
/// [`extend`](Self::extend) or [`extend_par`](Self::extend_par), then share
/// it read-only across any number of concurrent decryptions.
///
/// Entries are keyed by the compressed affine encoding of the point. The
/// identity (`k = 0`) is never stored; [`lookup`](Self::lookup) resolves it
/// by convention instead.
pub struct DlogTable<E: Pairing> {
    entries: HashMap<Vec<u8>, u64>,
    _curve: PhantomData<E>,
}

impl<E: Pairing> DlogTable<E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _curve: PhantomData,
        }
    }

    /// Populates `[start, start + count)`: seeds `start·G` with one scalar
    /// multiplication, then walks forward one generator addition per entry.
    ///
    /// Idempotent per entry; re-extending an overlapping range is absorbed
    /// without touching existing entries.
    pub fn extend(&mut self, pp: &Params<E>, start: u64, count: u64) {
        self.absorb(Self::walk(pp, start, count));
    }

    /// Like [`extend`](Self::extend), with the point walk fanned out across
    /// threads in disjoint contiguous blocks. Each worker seeds its own block
    /// start; insertion into the map stays on the calling thread. The result
    /// is identical to a serial `extend` over the same range.
    pub fn extend_par(&mut self, pp: &Params<E>, start: u64, count: u64) {
        let blocks: Vec<(u64, u64)> = (0..count)
            .step_by(PAR_BLOCK as usize)
            .map(|off| (start + off, PAR_BLOCK.min(count - off)))
            .collect();

        let walked: Vec<Vec<(Vec<u8>, u64)>> = blocks
            .par_iter()
            .map(|&(block_start, block_count)| Self::walk(pp, block_start, block_count))
            .collect();

        for block in walked {
            self.absorb(block);
        }
    }

    /// Read-only probe: the discrete log of `point` if it lies within a
    /// populated range. The identity resolves to 0 without a stored entry.
    pub fn lookup(&self, point: &E::G1Affine) -> Option<u64> {
        if point.is_zero() {
            return Some(0);
        }
        self.entries.get(&Self::key(point)).copied()
    }

    /// Number of stored entries (the identity is never among them).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn absorb(&mut self, walked: Vec<(Vec<u8>, u64)>) {
        for (key, k) in walked {
            self.entries.entry(key).or_insert(k);
        }
    }

    fn walk(pp: &Params<E>, start: u64, count: u64) -> Vec<(Vec<u8>, u64)> {
        // k = 0 encodes the identity, which is special-cased in `lookup`
        // rather than stored.
        let (first, steps) = if start == 0 {
            (1, count.saturating_sub(1))
        } else {
            (start, count)
        };
        if steps == 0 {
            return Vec::new();
        }

        let g = pp.g.into_group();
        let mut acc = pp.g.mul(E::ScalarField::from(first));

        let mut points = Vec::with_capacity(steps as usize);
        for _ in 0..steps {
            points.push(acc);
            acc += g;
        }

        E::G1::normalize_batch(&points)
            .iter()
            .enumerate()
            .map(|(i, p)| (Self::key(p), first + i as u64))
            .collect()
    }

    fn key(point: &E::G1Affine) -> Vec<u8> {
        let mut key = Vec::with_capacity(point.compressed_size());
        point
            .serialize_compressed(&mut key)
            .expect("infallible write to Vec");
        key
    }
}

impl<E: Pairing> Default for DlogTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {

    use ark_bls12_381::Bls12_381 as E;
    use ark_ec::pairing::Pairing;

    type Fr = <E as Pairing>::ScalarField;
    type G1Affine = <E as Pairing>::G1Affine;

    use super::*;

    fn multiple(pp: &Params<E>, k: u64) -> G1Affine {
        pp.g.mul(Fr::from(k)).into_affine()
    }

    #[test]
    fn test_lookup_over_populated_range() {
        let pp = Params::<E>::new();
        let mut table = DlogTable::new();
        table.extend(&pp, 0, 1000);

        for k in [0u64, 1, 2, 17, 500, 999] {
            assert_eq!(table.lookup(&multiple(&pp, k)), Some(k));
        }
        assert_eq!(table.lookup(&multiple(&pp, 1000)), None);
        assert_eq!(table.lookup(&multiple(&pp, 5000)), None);

        // absent until the range is extended
        table.extend(&pp, 1000, 24);
        assert_eq!(table.lookup(&multiple(&pp, 1000)), Some(1000));
        assert_eq!(table.lookup(&multiple(&pp, 1023)), Some(1023));
        assert_eq!(table.lookup(&multiple(&pp, 1024)), None);
    }

    #[test]
    fn test_identity_is_never_stored() {
        let pp = Params::<E>::new();
        let mut table = DlogTable::new();

        assert_eq!(table.lookup(&G1Affine::zero()), Some(0));

        table.extend(&pp, 0, 10);
        assert_eq!(table.len(), 9);
        assert_eq!(table.lookup(&G1Affine::zero()), Some(0));
    }

    #[test]
    fn test_extend_is_idempotent() {
        let pp = Params::<E>::new();
        let mut table = DlogTable::new();

        table.extend(&pp, 0, 100);
        let len = table.len();

        table.extend(&pp, 0, 100);
        assert_eq!(table.len(), len);

        // overlapping range: absorbed, existing entries untouched
        table.extend(&pp, 50, 100);
        assert_eq!(table.len(), len + 50);
        assert_eq!(table.lookup(&multiple(&pp, 75)), Some(75));
        assert_eq!(table.lookup(&multiple(&pp, 149)), Some(149));
    }

    #[test]
    fn test_disjoint_ranges_in_any_order() {
        let pp = Params::<E>::new();
        let mut table = DlogTable::new();

        table.extend(&pp, 200, 50);
        table.extend(&pp, 0, 50);

        assert_eq!(table.lookup(&multiple(&pp, 25)), Some(25));
        assert_eq!(table.lookup(&multiple(&pp, 225)), Some(225));
        assert_eq!(table.lookup(&multiple(&pp, 100)), None);
    }

    #[test]
    fn test_parallel_extend_matches_serial() {
        let pp = Params::<E>::new();

        let mut serial = DlogTable::new();
        serial.extend(&pp, 0, 3000);

        let mut parallel = DlogTable::new();
        parallel.extend_par(&pp, 0, 3000);

        assert_eq!(serial.len(), parallel.len());
        assert_eq!(serial.entries, parallel.entries);
    }

    #[test]
    fn test_empty_and_zero_count() {
        let pp = Params::<E>::new();
        let mut table = DlogTable::<E>::new();

        assert!(table.is_empty());
        table.extend(&pp, 0, 0);
        assert!(table.is_empty());
        // [0, 1) holds only the identity, which is not stored
        table.extend(&pp, 0, 1);
        assert!(table.is_empty());
    }
}
