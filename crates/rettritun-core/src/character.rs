// Character classification utilities
//
// Classifies characters into the coarse categories the tokenizer works
// with. The letter ranges cover the full Icelandic alphabet (the accented
// vowels, eth, thorn and their uppercase forms all fall inside the
// Latin-1 and Latin Extended blocks) along with general Latin text.

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    let cp = c as u32;
    if (0x41..=0x5A).contains(&cp)           // A-Z
        || (0x61..=0x7A).contains(&cp)       // a-z
        || (0xC0..=0xD6).contains(&cp)       // À-Ö (covers Á É Í Ó Æ Ð)
        || (0xD8..=0xF6).contains(&cp)       // Ø-ö (covers Ú Ý Þ á é í ó æ ð ö)
        || (0xF8..=0x2AF).contains(&cp)      // ø-ɏ (covers ú ý þ) and Latin Extended
    {
        return CharType::Letter;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) || is_icelandic_quotation_mark(c) {
        return CharType::Punctuation;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    CharType::Unknown
}

/// Check whether a character is a punctuation character recognized by the
/// tokenizer.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '&'
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character is an Icelandic quotation mark.
///
/// Icelandic quotes text „svona“; the ASCII double quote is accepted as
/// the informal equivalent.
pub fn is_icelandic_quotation_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{201E}' // „ DOUBLE LOW-9 QUOTATION MARK
            | '\u{201C}' // “ LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // ” RIGHT DOUBLE QUOTATION MARK
    )
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}
