pub mod error;
pub mod machine;
pub mod plugboard;
pub mod rotor;

pub use error::EnigmaError;
pub use machine::{Enigma, EnigmaConfig};
pub use plugboard::Plugboard;
pub use rotor::{Reflector, Rotor};
