// rettritun-cli: shared utilities for CLI tools.

use std::io::Read;
use std::process;

use rettritun_core::enums::TokenKind;
use rettritun_core::token::Token;

/// Read all of stdin into a string.
pub fn read_stdin() -> Result<String, String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Ok(input)
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Join token texts into a display string: tokens are separated by a
/// single space, with no space before trailing punctuation or after an
/// opening bracket or quote.
///
/// This is a display convenience for the CLI tools; faithful
/// re-formatting of the source text is a concern of downstream
/// consumers, not of the correction pipeline.
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut suppress_space = true;

    for token in tokens {
        let Some(text) = token.text.as_deref() else {
            continue;
        };
        let closing = token.kind == TokenKind::Punctuation && !is_opening(text);
        if !suppress_space && !closing {
            out.push(' ');
        }
        out.push_str(text);
        suppress_space = token.kind == TokenKind::Punctuation && is_opening(text);
    }
    out
}

/// Opening punctuation: no space follows it.
fn is_opening(text: &str) -> bool {
    matches!(text, "(" | "[" | "{" | "\u{201E}")
}

/// Human-readable label for a token kind.
pub fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Word => "WORD",
        TokenKind::Number => "NUMBER",
        TokenKind::Punctuation => "PUNCTUATION",
        TokenKind::Unknown => "UNKNOWN",
        TokenKind::None => "NONE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::word(text)
    }

    fn punct(text: &str) -> Token {
        Token::new(TokenKind::Punctuation, text, None)
    }

    #[test]
    fn join_plain_words() {
        let tokens = vec![word("hestur"), word("hleypur")];
        assert_eq!(join_tokens(&tokens), "hestur hleypur");
    }

    #[test]
    fn join_no_space_before_punctuation() {
        let tokens = vec![word("hestur"), punct(","), word("hross"), punct(".")];
        assert_eq!(join_tokens(&tokens), "hestur, hross.");
    }

    #[test]
    fn join_opening_quote_hugs_word() {
        let tokens = vec![punct("\u{201E}"), word("hestur"), punct("\u{201C}")];
        assert_eq!(join_tokens(&tokens), "\u{201E}hestur\u{201C}");
    }

    #[test]
    fn join_skips_textless_tokens() {
        let tokens = vec![word("hestur"), Token::none(), word("hross")];
        assert_eq!(join_tokens(&tokens), "hestur hross");
    }

    #[test]
    fn join_empty() {
        assert_eq!(join_tokens(&[]), "");
    }
}
