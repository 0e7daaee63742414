//! Error types for todo-core.

/// Errors raised by storage adapters, the codec and configuration loading.
///
/// Storage failures never reach the screen: the load and save paths in
/// [`crate::persist`] log them and carry on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a key from the store failed.
    #[error("failed to read `{key}`: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a key to the store failed.
    #[error("failed to write `{key}`: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Persisted JSON could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Configuration file is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Other I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, Error>;
