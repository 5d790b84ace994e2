//! Runtime error types.

use thiserror::Error;

/// Errors raised around the call into compiled code. The returned value
/// itself never produces one.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("shared library not found: {0}")]
    LibraryNotFound(String),

    #[error("failed to load library: {0}")]
    LoadError(#[from] libloading::Error),

    #[error("failed to find symbol '{0}': {1}")]
    SymbolNotFound(String, libloading::Error),

    #[error("I/O error when printing: {0}")]
    Write(#[from] std::io::Error),
}
