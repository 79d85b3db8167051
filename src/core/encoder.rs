//! Backtracking search over the dictionary index.

use crate::core::codec;
use crate::core::format;
use crate::core::index::WordIndex;

/// Enumerates every way a telephone number can be written as a sequence of
/// dictionary words, with single raw digits filling gaps no word covers.
///
/// The encoder owns an immutable [`WordIndex`] and nothing else; it is
/// `Send + Sync`, so one instance can serve concurrent callers. Encoding the
/// same number against the same index always yields the same results in the
/// same order.
pub struct NumberEncoder {
    index: WordIndex,
}

impl NumberEncoder {
    /// Builds the index from a word list and wraps it. Words the letter
    /// table cannot decode are dropped during the build.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index: WordIndex::build(words),
        }
    }

    /// Wraps an index built elsewhere, so one index can be constructed once
    /// and reused across many encoders or call sites.
    pub fn from_index(index: WordIndex) -> Self {
        Self { index }
    }

    /// Returns all valid encodings of one telephone number as space-joined
    /// token strings, in stable search order.
    ///
    /// The number is first reduced to its digits; an input with no digits
    /// at all ("Hello", "--/", "") yields an empty result, not an error.
    pub fn encode(&self, tn: &str) -> Vec<String> {
        let digits = codec::normalize_number(tn);
        if digits.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        let mut tokens: Vec<&str> = Vec::new();
        self.search(&digits, 0, false, &mut tokens, &mut results);
        results
    }

    /// Encodes many numbers, flattening the results into
    /// `(original_number, encoding)` pairs in number-order then
    /// encoding-order. Numbers with no encoding contribute no pairs.
    pub fn encode_batch<I, S>(&self, tns: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for tn in tns {
            let tn = tn.as_ref();
            for encoding in self.encode(tn) {
                pairs.push((tn.to_string(), encoding));
            }
        }
        pairs
    }

    /// Depth-first walk over `digits[pos..]`.
    ///
    /// For each end position, shortest substring first: every dictionary
    /// word under that substring's key is an independent branch; a single
    /// digit is a fallback branch only when the previous token was not a
    /// digit and the lookahead rule allows it. A branch that reaches the
    /// end of the digits records the joined token stack as one result.
    ///
    /// The token stack is shared across branches with push-before-recurse /
    /// pop-after-recurse discipline, so no per-branch copies are made.
    fn search<'a>(
        &'a self,
        digits: &'a str,
        pos: usize,
        last_was_digit: bool,
        tokens: &mut Vec<&'a str>,
        results: &mut Vec<String>,
    ) {
        if pos == digits.len() {
            results.push(format::join_words(tokens));
            return;
        }

        for end in pos + 1..=digits.len() {
            let sub = &digits[pos..end];

            if let Some(words) = self.index.lookup(sub) {
                for word in words {
                    tokens.push(word);
                    self.search(digits, end, false, tokens, results);
                    tokens.pop();
                }
            } else if sub.len() == 1
                && !last_was_digit
                && self.digit_insert_allowed(pos, digits)
            {
                tokens.push(sub);
                self.search(digits, pos + 1, true, tokens, results);
                tokens.pop();
            }
        }
    }

    /// The digit-insertion legality rule: a raw digit may stand at `start`
    /// only if no substring beginning there, up to and including the full
    /// remaining tail, is a dictionary key. Evaluated fresh on every digit
    /// candidate; the scan always runs to the end of the whole number, not
    /// just the current candidate token.
    fn digit_insert_allowed(&self, start: usize, digits: &str) -> bool {
        (start + 1..=digits.len()).all(|end| !self.index.contains_key(&digits[start..end]))
    }
}
