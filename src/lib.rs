//! Fast generation of 192-bit unique identifiers.
//!
//! A [`Generator`] reads 24 random bytes once and then hands out
//! identifiers by bumping an atomic counter stored over the first 8 of
//! them. Identifiers are unique, not unguessable: consecutive values are
//! adjacent. The layout ignores RFC 4122; [`hex`] renders the first 128
//! bits in UUID-looking text when one is needed.

pub mod entropy;
pub mod error;
pub mod generator;
pub mod hex;

pub use entropy::{EntropySource, OsEntropy, ReaderEntropy};
pub use error::GeneratorError;
pub use generator::{Generator, Uuid, UUID_LEN};
pub use hex::{hex128, hex128_bytes, to_uuid, valid_hex128};
