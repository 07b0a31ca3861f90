use thiserror::Error;

/// Qrterm error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("'{0}' is not a supported color")]
    UnsupportedColor(String),

    #[error("'{0}' is not a supported error correction level")]
    UnsupportedLevel(String),

    #[error("'{0}' is not a supported justification")]
    UnsupportedJustify(String),

    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
