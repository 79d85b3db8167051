//! Letter-to-digit codec and input normalization.

use crate::core::types::{CodecError, DigitKey};

/// Maps a single letter to its digit by the next schema:
///
/// ```text
/// E | J N Q | R W X | D S Y | F T | A M | C I V | B K U | L O P | G H Z
/// e | j n q | r w x | d s y | f t | a m | c i v | b k u | l o p | g h z
/// 0 |   1   |   2   |   3   |  4  |  5  |   6   |   7   |   8   |   9
/// ```
///
/// Anything outside this table (digits, punctuation, whitespace, non-ASCII
/// letters) is an `UnsupportedCharacter` error.
pub fn digit_for(c: char) -> Result<char, CodecError> {
    match c.to_ascii_lowercase() {
        'e' => Ok('0'),
        'j' | 'n' | 'q' => Ok('1'),
        'r' | 'w' | 'x' => Ok('2'),
        'd' | 's' | 'y' => Ok('3'),
        'f' | 't' => Ok('4'),
        'a' | 'm' => Ok('5'),
        'c' | 'i' | 'v' => Ok('6'),
        'b' | 'k' | 'u' => Ok('7'),
        'l' | 'o' | 'p' => Ok('8'),
        'g' | 'h' | 'z' => Ok('9'),
        _ => Err(CodecError::UnsupportedCharacter(c)),
    }
}

/// Derives the digit-key of a word by decoding every character in order.
/// The result has one digit per input character. The first character
/// outside the letter table fails the whole word.
pub fn digit_key(word: &str) -> Result<DigitKey, CodecError> {
    let mut key = String::with_capacity(word.len());
    for c in word.chars() {
        key.push(digit_for(c)?);
    }
    Ok(key)
}

/// Strips the `"` umlaut markers the source dictionary convention allows
/// inside words. Must be applied before [`digit_key`].
pub fn normalize_word(word: &str) -> String {
    word.chars().filter(|&c| c != '"').collect()
}

/// Reduces a raw telephone number to its digits, dropping dashes, slashes
/// and any other separator. The result may be empty.
pub fn normalize_number(tn: &str) -> String {
    tn.chars().filter(char::is_ascii_digit).collect()
}
