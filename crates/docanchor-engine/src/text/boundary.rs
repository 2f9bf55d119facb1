/// Unicode connector punctuation (general category `Pc`).
const CONNECTOR_PUNCTUATION: [char; 10] = [
    '_', '\u{203F}', '\u{2040}', '\u{2054}', '\u{FE33}', '\u{FE34}', '\u{FE4D}', '\u{FE4E}',
    '\u{FE4F}', '\u{FF3F}',
];

/// True for letters, digits and connector punctuation in any script.
///
/// Digits include other numeric characters such as `²`. Combining marks are
/// not word characters, so a decomposed `e\u{301}` ends a word after the `e`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || CONNECTOR_PUNCTUATION.contains(&c)
}

/// True if `chars[start..end]` is not glued to a word character on either side.
pub fn is_whole_word(chars: &[char], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !is_word_char(chars[start - 1]);
    let after_ok = end >= chars.len() || !is_word_char(chars[end]);
    before_ok && after_ok
}
