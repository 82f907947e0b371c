#![doc = include_str!("../README.md")]

pub(crate) mod arith;
pub mod ciphertext;
pub use ciphertext::Ciphertext;
pub mod decrypt;
pub use decrypt::FunctionalKey;
pub mod dlog;
pub use dlog::DlogTable;
pub mod encrypt;
pub use encrypt::MasterPublicKey;
pub mod error;
pub use error::Error;
pub mod key_gen;
pub use key_gen::{setup, MasterSecretKey};
pub mod multi;
pub mod params;
pub use params::{Params, DEFAULT_TABLE_SPAN, MAX_DIM, MAX_SLOT_DIM};
