// Correction annotation public API type
//
// Tokens carry an optional `Correction` describing what a correction
// pass did (or would do) to them. The duplicate/compound rewrite rules
// never set it; the slot exists so that annotation passes layered on
// top of the same token stream can populate it without changing the
// token record.

/// Classification of a token-level correction.
///
/// The first three codes cover the duplicate/compound rewrite family;
/// the remaining codes are reserved for the neighbouring passes that
/// share this annotation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CorrectionCode {
    /// A word was accidentally written twice in a row.
    #[error("word was unnecessarily repeated")]
    RepeatedWord,

    /// A word was erroneously written as one compound.
    #[error("word should be written as separate words")]
    WronglyCompounded,

    /// Two words were erroneously written apart.
    #[error("words should be written as one compound")]
    WronglySplit,

    /// A word is misspelled (set by the spelling pass).
    #[error("word is misspelled")]
    Misspelling,

    /// A word has wrong capitalization (set by the capitalization pass).
    #[error("word has wrong capitalization")]
    WrongCapitalization,
}

/// A correction applied to (or suggested for) a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// What kind of correction this is.
    pub code: CorrectionCode,

    /// The original surface text before the correction.
    pub original: String,

    /// The corrected surface text.
    pub corrected: String,
}

impl Correction {
    /// Create a new correction annotation.
    pub fn new(
        code: CorrectionCode,
        original: impl Into<String>,
        corrected: impl Into<String>,
    ) -> Self {
        Self {
            code,
            original: original.into(),
            corrected: corrected.into(),
        }
    }
}
