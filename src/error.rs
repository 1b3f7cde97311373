use std::io;

/// Failure to build a [`Generator`](crate::Generator).
///
/// Seeding is the only fallible step; once a generator exists, producing
/// identifiers cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("cannot generate random seed: {0}")]
    SeedAcquisition(#[from] io::Error),
}
