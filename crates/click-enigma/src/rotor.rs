//! Historical Enigma I wiring tables.
//!
//! The five rotors and two reflectors of the Wehrmacht Enigma I. Wirings are
//! immutable constant data; only rotor positions mutate at runtime.

use crate::error::EnigmaError;

const ALPHABET_LEN: i16 = 26;

/// Rotor catalogue: name, wiring (image of A..Z), turnover notch.
const ROTOR_CATALOGUE: &[(&str, &[u8; 26], u8)] = &[
    ("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q'),
    ("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E'),
    ("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V'),
    ("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", b'J'),
    ("V", b"VZBRGITYUPSDNHLXAWMJQOFECK", b'Z'),
];

/// Reflector catalogue: UKW-B and UKW-C (both involutions).
const REFLECTOR_CATALOGUE: &[(&str, &[u8; 26])] = &[
    ("B", b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

/// One rotor: forward and inverse substitution tables plus the notch.
#[derive(Debug)]
pub struct Rotor {
    forward: [u8; 26],
    backward: [u8; 26],
    /// Window position (0-25) at which this rotor's notch engages the next.
    pub notch: u8,
}

impl Rotor {
    /// Look a rotor up in the catalogue by its historical name (`I`..`V`).
    pub fn by_name(name: &str) -> Result<Self, EnigmaError> {
        let (_, wiring, notch) = ROTOR_CATALOGUE
            .iter()
            .find(|(n, _, _)| *n == name)
            .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;

        let mut forward = [0u8; 26];
        let mut backward = [0u8; 26];
        for (i, &letter) in wiring.iter().enumerate() {
            forward[i] = letter - b'A';
            backward[(letter - b'A') as usize] = i as u8;
        }
        Ok(Rotor {
            forward,
            backward,
            notch: notch - b'A',
        })
    }

    /// Substitute right-to-left (entry side), `offset = position - ring`.
    pub fn substitute_forward(&self, c: u8, offset: i16) -> u8 {
        let contact = (c as i16 + offset).rem_euclid(ALPHABET_LEN) as usize;
        (self.forward[contact] as i16 - offset).rem_euclid(ALPHABET_LEN) as u8
    }

    /// Substitute left-to-right (return side) through the inverse wiring.
    pub fn substitute_backward(&self, c: u8, offset: i16) -> u8 {
        let contact = (c as i16 + offset).rem_euclid(ALPHABET_LEN) as usize;
        (self.backward[contact] as i16 - offset).rem_euclid(ALPHABET_LEN) as u8
    }
}

/// A reflector: a fixed involutive substitution.
#[derive(Debug)]
pub struct Reflector {
    map: [u8; 26],
}

impl Reflector {
    /// Look a reflector up in the catalogue by name (`B` or `C`).
    pub fn by_name(name: &str) -> Result<Self, EnigmaError> {
        let (_, wiring) = REFLECTOR_CATALOGUE
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| EnigmaError::UnknownReflector(name.to_string()))?;

        let mut map = [0u8; 26];
        for (i, &letter) in wiring.iter().enumerate() {
            map[i] = letter - b'A';
        }
        Ok(Reflector { map })
    }

    pub fn reflect(&self, c: u8) -> u8 {
        self.map[c as usize]
    }
}
