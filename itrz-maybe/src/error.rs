use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The value of an empty `Maybe` was requested.
    #[error("value accessed on an empty Maybe")]
    EmptyValueAccessed,
}

pub type Result<T> = std::result::Result<T, Error>;
