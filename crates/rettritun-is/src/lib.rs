// rettritun-is: Icelandic token-level error correction.
//
// Corrects the common token-level writing errors (accidental word
// duplication, words erroneously written as one compound, and compounds
// erroneously written as two words) in a lazy token stream, leaving
// everything else untouched and in order. Other correction concerns
// (spelling, capitalization, grammar) are separate passes outside this
// crate.

pub mod corrector;
pub mod pipeline;
pub mod rules;
pub mod tables;
pub mod tokenizer;

pub use corrector::{CorrectionStream, correct};
pub use pipeline::{correct_text, tokenize};
pub use tokenizer::{Tokenizer, TokenizerOptions};
