use unicode_segmentation::UnicodeSegmentation;

/// Splits text on Unicode word boundaries (UAX #29).
///
/// Whitespace runs are dropped; punctuation survives as its own segment so
/// callers can tell alphabetic tokens from the rest.
pub fn segment(text: &str) -> impl Iterator<Item = &str> {
    text.split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
}

pub fn is_alpha(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
