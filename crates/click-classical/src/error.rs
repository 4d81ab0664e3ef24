use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassicalError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}
