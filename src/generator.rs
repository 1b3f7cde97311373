use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::entropy::{EntropySource, OsEntropy};
use crate::error::GeneratorError;

/// Length in bytes of an identifier and of the seed it is derived from.
pub const UUID_LEN: usize = 24;

/// A 192-bit identifier: the counter as 8 little-endian bytes followed by
/// the 16-byte seed tail.
pub type Uuid = [u8; UUID_LEN];

const COUNTER_LEN: usize = 8;

/// Produces identifiers in sequence from a random starting point.
///
/// One random read at construction is amortized over every later call to
/// [`Generator::next`], which costs a single atomic increment and a
/// 24-byte copy. Identifiers from one generator are adjacent to each
/// other, so they are unique but not unguessable.
///
/// `Generator` is `Sync`; share it by reference or behind an `Arc`.
pub struct Generator {
    // The first COUNTER_LEN bytes only seed `counter` and are overwritten on every read.
    seed: Uuid,
    counter: AtomicU64,
}

impl Generator {
    /// Seeds a generator from the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::SeedAcquisition` when the OS cannot supply
    /// random bytes.
    pub fn new() -> Result<Self, GeneratorError> {
        Self::with_entropy(&mut OsEntropy)
    }

    /// Seeds a generator from `source`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::SeedAcquisition` when `source` cannot fill
    /// all 24 seed bytes.
    pub fn with_entropy<E>(source: &mut E) -> Result<Self, GeneratorError>
    where
        E: EntropySource + ?Sized,
    {
        let mut seed = [0u8; UUID_LEN];
        source.fill_seed(&mut seed)?;
        let counter = counter_from_seed(&seed);
        tracing::debug!("seeded identifier generator");
        Ok(Self {
            seed,
            counter: AtomicU64::new(counter),
        })
    }

    /// Like [`Generator::new`] but panics when seeding fails.
    ///
    /// Meant for process startup, where a missing entropy source leaves
    /// nothing sensible to recover to.
    ///
    /// # Panics
    ///
    /// Panics if the OS random source is unavailable.
    #[must_use]
    pub fn must_new() -> Self {
        Self::must_with_entropy(&mut OsEntropy)
    }

    /// Like [`Generator::with_entropy`] but panics when seeding fails.
    ///
    /// # Panics
    ///
    /// Panics if `source` cannot fill all 24 seed bytes.
    #[must_use]
    pub fn must_with_entropy<E>(source: &mut E) -> Self
    where
        E: EntropySource + ?Sized,
    {
        Self::with_entropy(source).unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to seed identifier generator");
            panic!("{err}");
        })
    }

    /// Returns the next identifier.
    ///
    /// Only the first 8 bytes differ from the previous identifier, so the
    /// first 16 bytes alone still make a usable (if weaker) 128-bit id.
    /// Safe to call concurrently; the counter wraps after 2^64 calls.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Uuid {
        let value = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        let mut uuid = self.seed;
        uuid[..COUNTER_LEN].copy_from_slice(&value.to_le_bytes());
        uuid
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

fn counter_from_seed(seed: &Uuid) -> u64 {
    let mut head = [0u8; COUNTER_LEN];
    head.copy_from_slice(&seed[..COUNTER_LEN]);
    u64::from_le_bytes(head)
}
