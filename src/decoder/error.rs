use thiserror::Error;

/// A parse failure.
///
/// The only diagnostic carried is `offset`: the byte position of the first
/// byte the parser could not consume in its current state. For input that
/// ends too early the offset equals the input length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid input at byte offset {offset}")]
pub struct DecodeError {
    pub offset: usize,
}

impl DecodeError {
    pub(crate) fn at(offset: usize) -> Self {
        Self { offset }
    }
}

/// Failure modes of [`get`](crate::get).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetError {
    /// The document was malformed at or before the point where the target
    /// would have been located.
    #[error(transparent)]
    Invalid(#[from] DecodeError),
    /// Every member of some container on the path was examined without a
    /// match. The offset is the last position visited: the closing bracket
    /// of that container, or the start of a scalar reached with path
    /// components still unresolved.
    #[error("no value at the requested path, search ended at byte offset {0}")]
    NotFound(usize),
}
