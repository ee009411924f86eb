//! Host Error Types

use thiserror::Error;

/// Errors raised while starting or running the console host
#[derive(Error, Debug)]
pub enum ServerError {
    /// Binding the listener failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The server loop stopped with an error
    #[error("Server error: {0}")]
    Serve(String),
}
