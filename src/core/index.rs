// src/core/index.rs
use std::collections::HashMap;

use tracing::debug;

use crate::core::codec;
use crate::core::types::DigitKey;

/// An immutable dictionary index keyed by digit-string.
///
/// Built once from a word list: each word is normalized (umlaut markers
/// stripped), decoded through the letter table and filed under the resulting
/// digit-key. Distinct words frequently share a key ("Torf" and "fort" are
/// both `4824`), so every bucket keeps all of them in insertion order.
///
/// Words containing a character outside the letter table are skipped, not
/// fatal: one malformed dictionary line never aborts the build.
///
/// There is no mutation API after construction, so the index is safe to
/// share read-only across any number of concurrent encode calls.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    buckets: HashMap<DigitKey, Vec<String>>,
}

impl WordIndex {
    /// Builds the index from a word list. O(total letters) work.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: HashMap<DigitKey, Vec<String>> = HashMap::new();
        let mut kept = 0usize;
        let mut skipped = 0usize;

        for word in words {
            let word = word.into();
            match codec::digit_key(&codec::normalize_word(&word)) {
                Ok(key) => {
                    buckets.entry(key).or_default().push(word);
                    kept += 1;
                }
                Err(err) => {
                    debug!(word = %word, error = %err, "skipping dictionary word");
                    skipped += 1;
                }
            }
        }

        debug!(keys = buckets.len(), kept, skipped, "dictionary index built");
        Self { buckets }
    }

    /// Returns all words filed under `key`, in insertion order.
    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// True if any word decodes to `key`. This is the lookahead primitive
    /// behind the digit-insertion legality rule.
    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets.contains_key(key)
    }

    /// Number of distinct digit-keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
