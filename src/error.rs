//! Error types for jdchm operations.

use thiserror::Error;

/// Errors that can occur while generating or compiling a help project.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("HTML Help compiler not found")]
    CompilerNotFound,

    #[error("compilation failed: {0}")]
    Compiler(String),
}

pub type Result<T> = std::result::Result<T, Error>;
