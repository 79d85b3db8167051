//! Rendering of finished encodings.

/// Joins the tokens of one encoding with single spaces.
pub fn join_words(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// Pairs an encoding with the original, unnormalized input number:
/// `"<original number>: <encoding>"`. No trailing whitespace.
pub fn format_line(tn: &str, encoding: &str) -> String {
    format!("{tn}: {encoding}")
}
