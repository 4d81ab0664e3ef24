//! Morse code. The lookup table is immutable constant data.

/// International Morse for A-Z and 0-9.
const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Encode text as dot/dash groups separated by spaces, `/` between words.
/// Characters outside the table are skipped.
pub fn encode(text: &str) -> String {
    let mut groups: Vec<&str> = Vec::new();
    for c in text.chars() {
        if c.is_whitespace() {
            if groups.last() != Some(&"/") && !groups.is_empty() {
                groups.push("/");
            }
            continue;
        }
        let upper = c.to_ascii_uppercase();
        if let Some((_, code)) = MORSE_TABLE.iter().find(|(ch, _)| *ch == upper) {
            groups.push(code);
        }
    }
    if groups.last() == Some(&"/") {
        groups.pop();
    }
    groups.join(" ")
}

/// Decode space-separated dot/dash groups, `/` as word gap. Unknown groups
/// are skipped.
pub fn decode(morse: &str) -> String {
    let mut out = String::new();
    for group in morse.split_whitespace() {
        if group == "/" {
            out.push(' ');
            continue;
        }
        if let Some((ch, _)) = MORSE_TABLE.iter().find(|(_, code)| *code == group) {
            out.push(*ch);
        }
    }
    out
}
