use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema format error: {0}")]
    Format(String),

    #[error("Verifier error: {0}")]
    Verify(String),
}
