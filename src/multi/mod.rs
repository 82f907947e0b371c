//! Multi-input extension: independent encryption slots whose per-slot inner
//! products are combined additively and recovered in a single table lookup.
//!
//! Each slot carries its own master key pair and randomness; the decryptor
//! learns `Σₛ <xₛ, yₛ>` and nothing about any individual slot's vector.

pub(crate) mod decrypt;
pub use decrypt::*;
pub(crate) mod slots;
pub use slots::*;
