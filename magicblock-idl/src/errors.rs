use thiserror::Error;

pub type IdlResult<T> = std::result::Result<T, IdlError>;

#[derive(Debug, Error)]
pub enum IdlError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Borsh error: {0}")]
    Borsh(#[from] std::io::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("UnknownType '{0}'")]
    UnknownType(String),

    #[error("TypeMismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("MissingField '{0}' for type '{1}'")]
    MissingField(String, String),

    #[error("InvalidEnumVariant {0} for enum '{1}'")]
    InvalidEnumVariant(u8, String),

    #[error("UnknownEnumVariant '{0}' for enum '{1}'")]
    UnknownEnumVariant(String, String),

    #[error("ArrayLengthMismatch: expected {0}, got {1}")]
    ArrayLengthMismatch(usize, usize),

    #[error("PayloadTooShort: {0} bytes")]
    PayloadTooShort(usize),

    #[error("UnknownDiscriminator {0:?}")]
    UnknownDiscriminator([u8; 8]),

    #[error("InvalidProgramAddress '{0}'")]
    InvalidProgramAddress(String),
}
