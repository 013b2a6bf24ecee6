// Shared enums: TokenKind

/// Categorical tag assigned to each token by the tokenizer.
///
/// The correction rules only ever match `Word` tokens; every other kind
/// passes through the corrector untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of text or a placeholder with no content.
    None,
    /// Ordinary word token.
    Word,
    /// Numeric token (cardinal, decimal, grouped thousands).
    Number,
    /// Punctuation token.
    Punctuation,
    /// Character not used in Icelandic text.
    Unknown,
}
