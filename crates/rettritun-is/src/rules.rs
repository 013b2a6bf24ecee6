// Rewrite rule evaluation over the lookahead window.
//
// Pure decision functions: given the `(current, lookahead)` window they
// say whether a rule fires and what it produces, without touching any
// stream state. The corrector applies the effects. Evaluation order is
// fixed: duplicate collapse, then compound split, then compound merge;
// a token that could both trigger a split and duplicate its neighbour
// is treated as a duplicate.

use rettritun_core::enums::TokenKind;
use rettritun_core::token::Token;

use crate::tables::{is_allowed_multiple, not_compound_parts, split_compound_join};

/// Outcome of evaluating the rewrite rules on a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    /// `current` and `lookahead` are an accidental repetition; both are
    /// consumed and replaced by a single word token carrying
    /// `current`'s text.
    CollapseDuplicate,

    /// `current` is an erroneously merged word; it is replaced by one
    /// word token per part, emitted in order.
    SplitCompound(&'static [&'static str]),

    /// `(current, lookahead)` is an erroneously split compound; both
    /// are consumed and replaced by a single word token with the mapped
    /// joined spelling.
    MergeCompound(&'static str),
}

/// Evaluate the rules on `(current, lookahead)` in priority order.
///
/// Returns `None` when no rule fires, which tells the corrector to emit
/// `current` unchanged. Tokens without text never match.
pub fn evaluate(current: &Token, lookahead: &Token) -> Option<RuleMatch> {
    if is_duplicate_pair(current, lookahead) {
        return Some(RuleMatch::CollapseDuplicate);
    }
    if let Some(parts) = split_parts(current) {
        return Some(RuleMatch::SplitCompound(parts));
    }
    if let Some(joined) = merge_join(current, lookahead) {
        return Some(RuleMatch::MergeCompound(joined));
    }
    None
}

/// Duplicate word check: both tokens are plain words with equal text
/// under case-insensitive comparison, and the word is not one of the
/// forms allowed to repeat.
fn is_duplicate_pair(current: &Token, lookahead: &Token) -> bool {
    let (Some(a), Some(b)) = (current.text.as_deref(), lookahead.text.as_deref()) else {
        return false;
    };
    if current.kind != TokenKind::Word || lookahead.kind != TokenKind::Word {
        return false;
    }
    let lower = a.to_lowercase();
    lower == b.to_lowercase() && !is_allowed_multiple(&lower)
}

/// Erroneous-compound check: `current`'s lowercased text is a known
/// wrongly-merged word. Needs no lookahead, so the corrector also
/// applies it to the final pending token at end of stream.
pub(crate) fn split_parts(current: &Token) -> Option<&'static [&'static str]> {
    let text = current.text.as_deref()?;
    not_compound_parts(&text.to_lowercase())
}

/// Split-compound check: the literal surface pair is a known
/// wrongly-split compound. Case-sensitive by design; the table is keyed
/// on exact surfaces.
fn merge_join(current: &Token, lookahead: &Token) -> Option<&'static str> {
    split_compound_join(current.text.as_deref()?, lookahead.text.as_deref()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::word(text)
    }

    // -- Duplicate collapse ---------------------------------------------------

    #[test]
    fn duplicate_pair_fires() {
        let result = evaluate(&word("sag\u{00F0}i"), &word("sag\u{00F0}i"));
        assert_eq!(result, Some(RuleMatch::CollapseDuplicate));
    }

    #[test]
    fn duplicate_is_case_insensitive() {
        let result = evaluate(&word("Hestur"), &word("hestur"));
        assert_eq!(result, Some(RuleMatch::CollapseDuplicate));
    }

    #[test]
    fn allowed_multiple_does_not_fire() {
        assert_eq!(evaluate(&word("ger\u{00F0}i"), &word("ger\u{00F0}i")), None);
        assert_eq!(evaluate(&word("\u{00E1}"), &word("\u{00E1}")), None);
    }

    #[test]
    fn allowed_multiple_check_uses_lowercase_form() {
        // "Á Á" lowercases to "á", which is in the allowed set.
        assert_eq!(evaluate(&word("\u{00C1}"), &word("\u{00C1}")), None);
    }

    #[test]
    fn different_words_do_not_fire() {
        assert_eq!(evaluate(&word("hestur"), &word("hest")), None);
    }

    #[test]
    fn non_word_kinds_do_not_collapse() {
        let num = Token::new(TokenKind::Number, "17", None);
        assert_eq!(evaluate(&num, &num.clone()), None);

        let punct = Token::new(TokenKind::Punctuation, ".", None);
        assert_eq!(evaluate(&punct, &punct.clone()), None);
    }

    #[test]
    fn textless_tokens_never_match() {
        let marker = Token::textless(TokenKind::Word);
        assert_eq!(evaluate(&marker, &word("hestur")), None);
        assert_eq!(evaluate(&word("hestur"), &marker), None);
        assert_eq!(evaluate(&marker, &marker.clone()), None);
    }

    // -- Compound split -------------------------------------------------------

    #[test]
    fn split_fires_on_known_compound() {
        let result = evaluate(&word("allskonar"), &word("hestur"));
        assert_eq!(
            result,
            Some(RuleMatch::SplitCompound(&["alls", "konar"]))
        );
    }

    #[test]
    fn split_lookup_is_case_insensitive() {
        let result = evaluate(&word("Allskonar"), &word("hestur"));
        assert_eq!(
            result,
            Some(RuleMatch::SplitCompound(&["alls", "konar"]))
        );
    }

    #[test]
    fn split_with_three_parts() {
        let result = evaluate(&word("h\u{00E9}rumbil"), &word("hestur"));
        assert_eq!(
            result,
            Some(RuleMatch::SplitCompound(&["h\u{00E9}r", "um", "bil"]))
        );
    }

    // -- Compound merge -------------------------------------------------------

    #[test]
    fn merge_fires_on_known_pair() {
        let result = evaluate(&word("bakdyra"), &word("megin"));
        assert_eq!(result, Some(RuleMatch::MergeCompound("bakdyramegin")));
    }

    #[test]
    fn merge_is_case_sensitive() {
        assert_eq!(evaluate(&word("Bakdyra"), &word("megin")), None);
    }

    #[test]
    fn merge_uses_mapped_spelling() {
        // The table value wins over plain concatenation; this entry's
        // joined spelling is not the two surfaces glued together.
        let result = evaluate(&word("megin"), &word("uppista\u{00F0}a"));
        assert_eq!(
            result,
            Some(RuleMatch::MergeCompound("meginuppista\u{00F0}a "))
        );
    }

    // -- Priority order -------------------------------------------------------

    #[test]
    fn duplicate_beats_split() {
        // "allskonar allskonar": both a NotCompounds key and a
        // duplicate pair; the duplicate rule wins.
        let result = evaluate(&word("allskonar"), &word("allskonar"));
        assert_eq!(result, Some(RuleMatch::CollapseDuplicate));
    }

    #[test]
    fn split_beats_merge() {
        // "svokallaður" is a NotCompounds key; even if a merge pair
        // started at the same window, the split is checked first.
        let result = evaluate(&word("svokalla\u{00F0}ur"), &word("hestur"));
        assert_eq!(
            result,
            Some(RuleMatch::SplitCompound(&["svo", "kalla\u{00F0}ur"]))
        );
    }
}
