// Lexical tokenizer for Icelandic text.
//
// Scans raw text into the token stream the corrector consumes. Words
// and numbers are single tokens (hyphens and apostrophes may join word
// parts, dots and commas may group digits), whitespace is consumed as a
// separator and never emitted, and punctuation comes out one token at a
// time with a three-dot ellipsis as a single token. The scanner is
// lazy: it advances through the text only as tokens are requested.

use rettritun_core::case::{CaseType, capitalize_first, detect_case};
use rettritun_core::character::{CharType, get_char_type};
use rettritun_core::enums::TokenKind;
use rettritun_core::token::{Token, TokenValue};

/// Tokenizer configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizerOptions {
    /// Capitalize sentence-initial words that arrive all-lowercase.
    /// Meant for input sources that lack capitalization entirely
    /// (transcripts, messaging).
    pub auto_uppercase: bool,
}

/// Pull-based tokenizer over a text.
///
/// Implements `Iterator<Item = Token>`; each `next()` scans exactly one
/// token.
pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    options: TokenizerOptions,
    /// Whether the next word starts a sentence (start of text or after
    /// sentence-ending punctuation).
    sentence_start: bool,
}

impl Tokenizer {
    /// Create a tokenizer over `text`.
    pub fn new(text: &str, options: TokenizerOptions) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            options,
            sentence_start: true,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Scan a word or number token starting at the current position.
    /// Returns the scanned text and whether only numeric characters
    /// (digits, digit-grouping dots, decimal commas) were seen.
    fn scan_word(&mut self) -> (String, bool) {
        let start = self.pos;
        let mut seen_letters = false;

        while let Some(c) = self.peek(0) {
            match get_char_type(c) {
                CharType::Letter => {
                    seen_letters = true;
                    self.pos += 1;
                }
                CharType::Digit => {
                    self.pos += 1;
                }
                CharType::Punctuation => {
                    let next = self.peek(1).map(get_char_type);
                    match c {
                        // Hyphens join word parts: "austur-evrópskur".
                        '-' | '\u{2010}' | '\u{2011}' => {
                            if matches!(next, Some(CharType::Letter | CharType::Digit)) {
                                self.pos += 1;
                            } else {
                                break;
                            }
                        }
                        // Apostrophes stay inside words: "Hann'i".
                        '\'' | '\u{2019}' => {
                            if matches!(next, Some(CharType::Letter)) {
                                self.pos += 1;
                            } else {
                                break;
                            }
                        }
                        // Dots group digits: "1.234", "17.6.2018".
                        '.' => {
                            if !seen_letters && matches!(next, Some(CharType::Digit)) {
                                self.pos += 1;
                            } else {
                                break;
                            }
                        }
                        // Commas mark decimals: "3,14".
                        ',' => {
                            if !seen_letters && matches!(next, Some(CharType::Digit)) {
                                self.pos += 1;
                            } else {
                                break;
                            }
                        }
                        _ => break,
                    }
                }
                CharType::Whitespace | CharType::Unknown => break,
            }
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        (text, !seen_letters)
    }
}

/// Parse the numeric value of a number token. Grouping dots are
/// dropped and the decimal comma becomes a decimal point. Dots that do
/// not group digits in threes ("17.6.2018") make the token date-like,
/// with no single numeric value.
fn parse_number(text: &str) -> Option<f64> {
    let (int_part, dec_part) = match text.split_once(',') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (text, None),
    };

    let mut groups = int_part.split('.');
    let mut digits = groups.next()?.to_string();
    if digits.is_empty() {
        return None;
    }
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }

    if let Some(dec) = dec_part {
        digits.push('.');
        digits.push_str(dec);
    }
    digits.parse().ok()
}

/// Sentence-ending punctuation, for the auto-uppercase option.
fn ends_sentence(text: &str) -> bool {
    matches!(text, "." | "!" | "?" | "..." | "\u{2026}")
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // Whitespace separates tokens but is not one.
        while let Some(c) = self.peek(0) {
            if get_char_type(c) == CharType::Whitespace {
                self.pos += 1;
            } else {
                break;
            }
        }
        let c = self.peek(0)?;

        match get_char_type(c) {
            CharType::Letter | CharType::Digit => {
                let (text, numeric) = self.scan_word();
                let at_sentence_start = self.sentence_start;
                self.sentence_start = false;

                if numeric {
                    let value = parse_number(&text).map(TokenValue::Number);
                    return Some(Token::new(TokenKind::Number, text, value));
                }

                let text = if self.options.auto_uppercase
                    && at_sentence_start
                    && detect_case(&text) == CaseType::AllLower
                {
                    capitalize_first(&text)
                } else {
                    text
                };
                Some(Token::new(TokenKind::Word, text, None))
            }
            CharType::Punctuation => {
                // Three consecutive dots form one ellipsis token.
                let text = if c == '.' && self.peek(1) == Some('.') && self.peek(2) == Some('.') {
                    self.pos += 3;
                    "...".to_string()
                } else {
                    self.pos += 1;
                    c.to_string()
                };
                if ends_sentence(&text) {
                    self.sentence_start = true;
                }
                Some(Token::new(TokenKind::Punctuation, text, None))
            }
            CharType::Unknown => {
                self.pos += 1;
                self.sentence_start = false;
                Some(Token::new(TokenKind::Unknown, c.to_string(), None))
            }
            // Whitespace was consumed above.
            CharType::Whitespace => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_all(text: &str) -> Vec<Token> {
        Tokenizer::new(text, TokenizerOptions::default()).collect()
    }

    fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, String)> {
        tokens
            .iter()
            .map(|t| (t.kind, t.text.clone().unwrap_or_default()))
            .collect()
    }

    // -- Basic scanning -------------------------------------------------------

    #[test]
    fn empty_text_no_tokens() {
        assert!(tokenize_all("").is_empty());
    }

    #[test]
    fn whitespace_only_no_tokens() {
        assert!(tokenize_all(" \t\n ").is_empty());
    }

    #[test]
    fn simple_words() {
        let tokens = tokenize_all("hesturinn hleypur");
        assert_eq!(
            kinds_and_texts(&tokens),
            [
                (TokenKind::Word, "hesturinn".to_string()),
                (TokenKind::Word, "hleypur".to_string()),
            ]
        );
    }

    #[test]
    fn icelandic_word_is_one_token() {
        let tokens = tokenize_all("sag\u{00F0}i \u{00FE}etta");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text.as_deref(), Some("sag\u{00F0}i"));
        assert_eq!(tokens[1].text.as_deref(), Some("\u{00FE}etta"));
    }

    #[test]
    fn word_and_period() {
        let tokens = tokenize_all("hestur.");
        assert_eq!(
            kinds_and_texts(&tokens),
            [
                (TokenKind::Word, "hestur".to_string()),
                (TokenKind::Punctuation, ".".to_string()),
            ]
        );
    }

    #[test]
    fn hyphenated_word_is_one_token() {
        let tokens = tokenize_all("austur-evr\u{00F3}pskur");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[0].text.as_deref(), Some("austur-evr\u{00F3}pskur"));
    }

    #[test]
    fn trailing_hyphen_not_part_of_word() {
        let tokens = tokenize_all("hestur- ");
        assert_eq!(
            kinds_and_texts(&tokens),
            [
                (TokenKind::Word, "hestur".to_string()),
                (TokenKind::Punctuation, "-".to_string()),
            ]
        );
    }

    // -- Numbers --------------------------------------------------------------

    #[test]
    fn plain_number_with_value() {
        let tokens = tokenize_all("42");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].value, Some(TokenValue::Number(42.0)));
    }

    #[test]
    fn grouped_number_is_one_token() {
        let tokens = tokenize_all("1.234");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text.as_deref(), Some("1.234"));
        assert_eq!(tokens[0].value, Some(TokenValue::Number(1234.0)));
    }

    #[test]
    fn decimal_comma_number() {
        let tokens = tokenize_all("3,14");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].value, Some(TokenValue::Number(3.14)));
    }

    #[test]
    fn date_like_number_is_one_token() {
        let tokens = tokenize_all("17.6.2018");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        // Not a plain decimal; no numeric value can be assigned.
        assert_eq!(tokens[0].value, None);
    }

    #[test]
    fn digits_with_letters_is_word() {
        let tokens = tokenize_all("17ja");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn number_before_period() {
        let tokens = tokenize_all("42.");
        assert_eq!(
            kinds_and_texts(&tokens),
            [
                (TokenKind::Number, "42".to_string()),
                (TokenKind::Punctuation, ".".to_string()),
            ]
        );
    }

    // -- Punctuation ----------------------------------------------------------

    #[test]
    fn ellipsis_is_one_token() {
        let tokens = tokenize_all("hestur...");
        assert_eq!(
            kinds_and_texts(&tokens),
            [
                (TokenKind::Word, "hestur".to_string()),
                (TokenKind::Punctuation, "...".to_string()),
            ]
        );
    }

    #[test]
    fn two_dots_are_two_tokens() {
        let tokens = tokenize_all("..");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn comma_after_word_is_separate() {
        let tokens = tokenize_all("hestur, hross");
        assert_eq!(
            kinds_and_texts(&tokens),
            [
                (TokenKind::Word, "hestur".to_string()),
                (TokenKind::Punctuation, ",".to_string()),
                (TokenKind::Word, "hross".to_string()),
            ]
        );
    }

    #[test]
    fn icelandic_quotes_are_punctuation() {
        let tokens = tokenize_all("\u{201E}hestur\u{201C}");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Punctuation);
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[2].kind, TokenKind::Punctuation);
    }

    #[test]
    fn unknown_character() {
        let tokens = tokenize_all("a @ b");
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].text.as_deref(), Some("@"));
    }

    // -- Auto-uppercase -------------------------------------------------------

    fn tokenize_auto(text: &str) -> Vec<Token> {
        Tokenizer::new(
            text,
            TokenizerOptions {
                auto_uppercase: true,
            },
        )
        .collect()
    }

    #[test]
    fn auto_uppercase_capitalizes_sentence_starts() {
        let tokens = tokenize_auto("hann kom. hann f\u{00F3}r");
        let texts: Vec<_> = tokens.iter().filter_map(|t| t.text.as_deref()).collect();
        assert_eq!(texts, ["Hann", "kom", ".", "Hann", "f\u{00F3}r"]);
    }

    #[test]
    fn auto_uppercase_leaves_mid_sentence_words() {
        let tokens = tokenize_auto("hann kom, og f\u{00F3}r");
        let texts: Vec<_> = tokens.iter().filter_map(|t| t.text.as_deref()).collect();
        assert_eq!(texts, ["Hann", "kom", ",", "og", "f\u{00F3}r"]);
    }

    #[test]
    fn auto_uppercase_respects_existing_case() {
        // Words that are not all-lowercase are left alone.
        let tokens = tokenize_auto("HANN kom");
        assert_eq!(tokens[0].text.as_deref(), Some("HANN"));
    }

    #[test]
    fn auto_uppercase_off_by_default() {
        let tokens = tokenize_all("hann kom");
        assert_eq!(tokens[0].text.as_deref(), Some("hann"));
    }

    #[test]
    fn auto_uppercase_after_question_mark() {
        let tokens = tokenize_auto("kom hann? nei");
        let texts: Vec<_> = tokens.iter().filter_map(|t| t.text.as_deref()).collect();
        assert_eq!(texts, ["Kom", "hann", "?", "Nei"]);
    }

    // -- Laziness -------------------------------------------------------------

    #[test]
    fn scans_on_demand() {
        let mut tokenizer = Tokenizer::new("eitt tv\u{00F6} \u{00FE}rj\u{00FA}", TokenizerOptions::default());
        assert_eq!(tokenizer.next().and_then(|t| t.text), Some("eitt".into()));
        assert_eq!(tokenizer.next().and_then(|t| t.text), Some("tv\u{00F6}".into()));
        assert_eq!(
            tokenizer.next().and_then(|t| t.text),
            Some("\u{00FE}rj\u{00FA}".into())
        );
        assert_eq!(tokenizer.next(), None);
    }
}
