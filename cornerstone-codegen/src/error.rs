use thiserror::Error;

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while emitting or persisting a declaration tree.
///
/// Everything except [`Error::Persist`] signals a malformed tree or a misuse
/// of the buffers. Those abort the run and must never be recovered into
/// partially rendered output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("generic function '{function}' cannot carry decorations")]
    DecoratedGeneric { function: String },

    #[error("cannot render the definition of '{function}': it has no declaring record")]
    MissingDeclaringRecord { function: String },

    #[error("indentation decreased below zero")]
    IndentUnderflow,

    #[error("cannot trim {requested} characters, only {available} are pending on the current line")]
    TrimOverflow { requested: usize, available: usize },

    #[error("{0}")]
    Persist(eyre::Report),
}

impl Error {
    /// Whether this error is a broken invariant rather than an I/O failure.
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(self, Self::Persist(_))
    }
}
