use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// The taxonomy is deliberately small: the only fallible operations are the
/// ones that accept caller-supplied configuration (particle counts, domain
/// bounds, particle fields). Stepping has no error channel; it is a pure
/// in-memory computation over already-validated state.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
