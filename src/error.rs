use thiserror::Error;

/// Errors surfaced at the application boundary
#[derive(Error, Debug)]
pub enum RibocodeError {
    /// A character outside A, T, G, C in the DNA input
    #[error("invalid base '{base}' at position {position}")]
    InvalidBase { base: char, position: usize },
    /// Reading the sequence failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
