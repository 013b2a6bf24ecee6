// Pipeline entry point: tokenizer wired to the correction stream.
//
// The single integration point callers use: raw text in, lazily
// corrected token stream out. The corrector itself is tokenizer
// agnostic; `corrector::correct` accepts any token iterator for
// callers that bring their own tokenizer.

use rettritun_core::token::Token;

use crate::corrector::{self, CorrectionStream};
use crate::tokenizer::{Tokenizer, TokenizerOptions};

/// Tokenize `text` and apply the token-level corrections.
///
/// The returned stream is lazy: no text is scanned and no rule is
/// evaluated until tokens are pulled from it.
pub fn tokenize(text: &str, options: TokenizerOptions) -> CorrectionStream<Tokenizer> {
    corrector::correct(Tokenizer::new(text, options))
}

/// Convenience wrapper collecting the corrected stream into a vector.
pub fn correct_text(text: &str, options: TokenizerOptions) -> Vec<Token> {
    tokenize(text, options).collect()
}
