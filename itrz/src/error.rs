use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A strict zip found one sequence ending before the other.
    #[error("sequences are not the same length")]
    UnevenSequenceLengths,
}

pub type Result<T> = std::result::Result<T, Error>;
