//! The machine itself: three rotors, a reflector, a plugboard, and the
//! stepping mechanism with its double-step anomaly.
//!
//! One `Enigma` instance is one session. Positions advance with every
//! alphabetic character, so an instance must not be shared between two
//! character streams.

use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::rotor::{Reflector, Rotor};

/// Machine configuration, named per the historical catalogue.
///
/// Rotors are listed left to right as mounted; positions are the three
/// letters visible in the rotor windows; ring settings are 0-based offsets.
pub struct EnigmaConfig<'a> {
    pub rotors: [&'a str; 3],
    pub positions: &'a str,
    pub rings: [u8; 3],
    pub reflector: &'a str,
    pub plugboard: Option<&'a str>,
}

/// A configured Enigma I. Self-reciprocal: the same settings encrypt and
/// decrypt.
#[derive(Debug)]
pub struct Enigma {
    rotors: [Rotor; 3],
    positions: [u8; 3],
    rings: [u8; 3],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    /// Build a machine, resolving every identifier against the catalogue.
    /// Fails fast before any character is processed.
    pub fn new(config: &EnigmaConfig) -> Result<Self, EnigmaError> {
        let rotors = [
            Rotor::by_name(config.rotors[0])?,
            Rotor::by_name(config.rotors[1])?,
            Rotor::by_name(config.rotors[2])?,
        ];
        let reflector = Reflector::by_name(config.reflector)?;

        let window: Vec<u8> = config
            .positions
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase() as u8 - b'A')
            .collect();
        let positions: [u8; 3] = window
            .try_into()
            .map_err(|_| EnigmaError::InvalidPositions(config.positions.to_string()))?;
        if config.positions.chars().count() != 3 {
            return Err(EnigmaError::InvalidPositions(config.positions.to_string()));
        }

        for &ring in &config.rings {
            if ring > 25 {
                return Err(EnigmaError::InvalidRingSetting(ring));
            }
        }

        let plugboard = match config.plugboard {
            Some(spec) => Plugboard::parse(spec),
            None => Plugboard::identity(),
        };

        Ok(Enigma {
            rotors,
            positions,
            rings: config.rings,
            reflector,
            plugboard,
        })
    }

    /// Letters currently visible in the rotor windows, left to right.
    pub fn positions(&self) -> [char; 3] {
        self.positions.map(|p| (p + b'A') as char)
    }

    /// Advance the rotors, as the keypress does before the circuit closes.
    ///
    /// Middle rotor at its notch: middle and left advance together (the
    /// double-step). Otherwise, right rotor at its notch advances the
    /// middle. The right rotor always advances.
    fn step(&mut self) {
        if self.positions[1] == self.rotors[1].notch {
            self.positions[1] = (self.positions[1] + 1) % 26;
            self.positions[0] = (self.positions[0] + 1) % 26;
        } else if self.positions[2] == self.rotors[2].notch {
            self.positions[1] = (self.positions[1] + 1) % 26;
        }
        self.positions[2] = (self.positions[2] + 1) % 26;
    }

    /// Process one character. Non-alphabetic input passes through unchanged
    /// with no stepping; alphabetic input always comes out uppercase.
    pub fn process_char(&mut self, c: char) -> char {
        if !c.is_ascii_alphabetic() {
            return c;
        }
        self.step();

        let mut signal = c.to_ascii_uppercase() as u8 - b'A';
        signal = self.plugboard.swap(signal);

        for i in (0..3).rev() {
            let offset = self.positions[i] as i16 - self.rings[i] as i16;
            signal = self.rotors[i].substitute_forward(signal, offset);
        }
        signal = self.reflector.reflect(signal);
        for i in 0..3 {
            let offset = self.positions[i] as i16 - self.rings[i] as i16;
            signal = self.rotors[i].substitute_backward(signal, offset);
        }

        signal = self.plugboard.swap(signal);
        (signal + b'A') as char
    }

    /// Process a whole text; positions persist and advance across the call.
    pub fn process(&mut self, text: &str) -> String {
        text.chars().map(|c| self.process_char(c)).collect()
    }
}
