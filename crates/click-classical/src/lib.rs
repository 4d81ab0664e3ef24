pub mod caesar;
pub mod error;
pub mod morse;
pub mod vigenere;

pub use error::ClassicalError;
