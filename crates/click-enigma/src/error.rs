use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnigmaError {
    #[error("Unknown rotor: {0:?}")]
    UnknownRotor(String),

    #[error("Unknown reflector: {0:?}")]
    UnknownReflector(String),

    #[error("Invalid positions {0:?}: expected exactly 3 letters A-Z")]
    InvalidPositions(String),

    #[error("Invalid ring setting {0}: expected 0-25")]
    InvalidRingSetting(u8),
}
