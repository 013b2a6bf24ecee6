// Correction stream: the stateful loop over the lookahead window.
//
// Wraps an upstream token iterator and yields the corrected sequence.
// The stream holds at most two upstream tokens at a time (`current` and
// the lookahead pulled per step) plus a short queue of already
// synthesized output while a split is being emitted. Everything is
// pull-driven: no upstream token is requested until the consumer asks
// for more output, and dropping the stream mid-way is always safe.

use std::collections::VecDeque;

use rettritun_core::token::Token;

use crate::rules::{self, RuleMatch};

/// Iterator adapter applying the duplicate/compound rewrite rules to an
/// upstream token sequence.
///
/// Construct with [`correct`]. Each `next()` call performs as many rule
/// steps as needed to produce one more output token; every internal
/// step advances the upstream cursor, so the stream terminates for any
/// finite upstream.
pub struct CorrectionStream<I> {
    /// The upstream collaborator.
    upstream: I,

    /// The pending token awaiting a decision. `None` once the upstream
    /// is exhausted and the final token has been flushed.
    current: Option<Token>,

    /// Synthesized tokens ready to be emitted ahead of `current`
    /// (compound split parts).
    queued: VecDeque<Token>,
}

/// Wrap an upstream token sequence in a [`CorrectionStream`].
///
/// The upstream may be any iterator of tokens: the bundled tokenizer,
/// an external tokenizer adapter, or a plain `Vec` in tests.
pub fn correct<I>(upstream: I) -> CorrectionStream<I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    let mut upstream = upstream.into_iter();
    let current = upstream.next();
    CorrectionStream {
        upstream,
        current,
        queued: VecDeque::new(),
    }
}

impl<I: Iterator<Item = Token>> Iterator for CorrectionStream<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.queued.pop_front() {
                return Some(token);
            }

            let current = self.current.take()?;

            let Some(lookahead) = self.upstream.next() else {
                // End of upstream. The split rule is the only rule that
                // needs no lookahead, so it still applies to the final
                // pending token; then the stream is drained.
                if let Some(parts) = rules::split_parts(&current) {
                    self.queued.extend(parts.iter().map(|&p| Token::word(p)));
                    continue;
                }
                return Some(current);
            };

            match rules::evaluate(&current, &lookahead) {
                Some(RuleMatch::CollapseDuplicate) => {
                    // Keep the first occurrence's original casing. The
                    // synthesized token is a plain word with no value:
                    // the repetition invalidates any attached analysis.
                    let text = current.text.unwrap_or_default();
                    self.current = Some(Token::word(text));
                }
                Some(RuleMatch::SplitCompound(parts)) => {
                    // The parts bypass the window and are emitted
                    // directly; the lookahead becomes the new current.
                    self.queued.extend(parts.iter().map(|&p| Token::word(p)));
                    self.current = Some(lookahead);
                }
                Some(RuleMatch::MergeCompound(joined)) => {
                    // The merged token becomes the new current so that
                    // it is re-checked against further rules. No 3-way
                    // merge is attempted.
                    self.current = Some(Token::word(joined));
                }
                None => {
                    self.current = Some(lookahead);
                    return Some(current);
                }
            }
        }
    }
}
