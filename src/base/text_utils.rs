//! Text utilities for isolating identifiers in a partially typed expression.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if `text` is a complete identifier: a start character (or `_`)
/// followed by word characters.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(is_word_character)
        }
        _ => false,
    }
}

/// Split `text` into its leading run of word characters and whatever follows.
///
/// # Example
/// ```
/// use cali::base::leading_identifier;
///
/// assert_eq!(leading_identifier("Widget(1)"), ("Widget", "(1)"));
/// assert_eq!(leading_identifier("(1)"), ("", "(1)"));
/// ```
pub fn leading_identifier(text: &str) -> (&str, &str) {
    let end = text
        .char_indices()
        .find(|(_, c)| !is_word_character(*c))
        .map_or(text.len(), |(i, _)| i);
    text.split_at(end)
}

/// Case-insensitive `starts_with`.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| text_chars.next() == Some(p))
}

/// The part of `candidate` that follows the first `typed.chars().count()`
/// characters.
///
/// Used to turn a case-insensitively matched candidate into the text still to
/// be inserted after what the user typed.
pub fn remainder_after<'a>(candidate: &'a str, typed: &str) -> &'a str {
    let skip = typed.chars().count();
    match candidate.char_indices().nth(skip) {
        Some((i, _)) => &candidate[i..],
        None => "",
    }
}
