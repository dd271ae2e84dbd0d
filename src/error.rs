use thiserror::Error;

/// A unified error type for the digest library.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Wraps standard I/O errors from opening or reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text bytes that were not valid UTF-8.
    #[error("Text encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}
