// Token public API type
//
// The uniform record flowing through the pipeline: tokenizer output,
// corrector input and output. Tokens are immutable once emitted
// downstream; the corrector synthesizes fresh tokens rather than
// editing ones it has already yielded.

use crate::correction::Correction;
use crate::enums::TokenKind;

/// Semantic payload attached to a token by the tokenizer or an upstream
/// analyzer. The corrector treats this as opaque and passes it through
/// unmodified, except that synthesized tokens start with no value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Numeric value of a `Number` token.
    Number(f64),
    /// Morphological analyses attached by an upstream analyzer.
    Analyses(Vec<String>),
}

/// A single token of the lexical stream.
///
/// `text` is absent for tokens with no literal surface form (stream
/// markers synthesized by upstream stages); such tokens never match any
/// correction rule. `correction` is present on every token so that
/// later passes (spelling, capitalization, taboo flagging) can annotate
/// without restructuring the record; the duplicate/compound rules in
/// this crate family leave it unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Categorical tag from the tokenizer.
    pub kind: TokenKind,

    /// Literal surface text, if any.
    pub text: Option<String>,

    /// Opaque semantic payload, if any.
    pub value: Option<TokenValue>,

    /// Annotation slot for correction passes.
    pub correction: Option<Correction>,
}

impl Token {
    /// Create a token from tokenizer output.
    pub fn new(kind: TokenKind, text: impl Into<String>, value: Option<TokenValue>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            value,
            correction: None,
        }
    }

    /// Create a synthesized plain word token with no value attached.
    ///
    /// Used for all tokens the corrector produces itself: collapsed
    /// duplicates, compound split parts and merged compounds. Whatever
    /// semantic value the source tokens carried is invalidated by the
    /// rewrite, so none is kept.
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Word,
            text: Some(text.into()),
            value: None,
            correction: None,
        }
    }

    /// Create a token of the given kind with no surface text.
    pub fn textless(kind: TokenKind) -> Self {
        Self {
            kind,
            text: None,
            value: None,
            correction: None,
        }
    }

    /// Create an empty `None` token, signaling end of text.
    pub fn none() -> Self {
        Self::textless(TokenKind::None)
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::none()
    }
}
