// File: src/core/types.rs
use thiserror::Error;

/// The digit-string a word maps to under the letter-to-digit table.
/// This is the lookup key of the dictionary index.
pub type DigitKey = String;

/// Errors raised by the letter-to-digit codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The character has no entry in the letter table (digits, punctuation
    /// and non-ASCII letters all land here).
    #[error("unsupported character '{0}'")]
    UnsupportedCharacter(char),
}
