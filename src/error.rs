//! Error taxonomy shared by every fallible operation in the crate.

/// Failure modes of the scheme.
///
/// The variants fall into four kinds: precondition violations
/// ([`DimensionMismatch`](Error::DimensionMismatch),
/// [`DimensionOutOfRange`](Error::DimensionOutOfRange),
/// [`ZeroRandomness`](Error::ZeroRandomness)), a missing recovery table
/// ([`TableNotReady`](Error::TableNotReady)), an unrecoverable result
/// ([`DlogNotFound`](Error::DlogNotFound)) and multi-input slot misuse
/// ([`SlotOccupied`](Error::SlotOccupied),
/// [`SlotMissing`](Error::SlotMissing)). None of them is transient; retrying
/// the same call yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("vector dimension {0} outside the supported range")]
    DimensionOutOfRange(usize),

    #[error("encryption randomness must be a non-zero scalar")]
    ZeroRandomness,

    #[error("discrete-log table is empty, extend it before decrypting")]
    TableNotReady,

    #[error("recovered point lies outside the populated discrete-log range")]
    DlogNotFound,

    #[error("slot {0} is already initialized")]
    SlotOccupied(usize),

    #[error("slot {0} is not initialized")]
    SlotMissing(usize),
}
