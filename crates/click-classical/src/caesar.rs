//! Caesar shift cipher. Letters rotate by a fixed amount, case preserved,
//! everything else passes through.

fn shift_char(c: char, shift: i32) -> char {
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    if c.is_ascii_alphabetic() {
        let offset = (c as u8 - base) as i32;
        (base + (offset + shift).rem_euclid(26) as u8) as char
    } else {
        c
    }
}

/// Shift every letter forward by `shift` positions (mod 26).
pub fn encode(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Shift every letter back by `shift` positions.
pub fn decode(text: &str, shift: i32) -> String {
    encode(text, -shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rot3() {
        assert_eq!(encode("HELLO", 3), "KHOOR");
        assert_eq!(decode("KHOOR", 3), "HELLO");
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(encode("Hello, World!", 3), "Khoor, Zruog!");
    }

    #[test]
    fn wraps_around_z() {
        assert_eq!(encode("xyz", 3), "abc");
    }

    #[test]
    fn negative_and_large_shifts() {
        assert_eq!(encode("ABC", -1), "ZAB");
        assert_eq!(encode("ABC", 27), encode("ABC", 1));
    }

    #[test]
    fn round_trip() {
        let text = "The five boxing wizards jump quickly.";
        for shift in 0..26 {
            assert_eq!(decode(&encode(text, shift), shift), text);
        }
    }
}
