//! Plugboard (Steckerbrett): a symmetric letter swap applied before and
//! after the rotor stack.

/// Symmetric partial mapping over A-Z. Unplugged letters map to themselves.
#[derive(Debug)]
pub struct Plugboard {
    map: [u8; 26],
}

impl Plugboard {
    /// Parse a space-separated pair list, e.g. `"AB CD EF"`.
    ///
    /// Entries that are not exactly two letters are ignored; case does not
    /// matter. A letter named in two pairs takes the later pair.
    pub fn parse(spec: &str) -> Self {
        let mut map = [0u8; 26];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }

        for entry in spec.split_whitespace() {
            let letters: Vec<u8> = entry
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_uppercase() as u8 - b'A')
                .collect();
            if let [a, b] = letters[..] {
                map[a as usize] = b;
                map[b as usize] = a;
            }
        }
        Plugboard { map }
    }

    /// The identity plugboard (no cables).
    pub fn identity() -> Self {
        Self::parse("")
    }

    pub fn swap(&self, c: u8) -> u8 {
        self.map[c as usize]
    }
}
