//! Errors that stop the app from starting.

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The tokio runtime for storage I/O could not be built.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// eframe failed to create or run the window.
    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}
