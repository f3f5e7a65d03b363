//! Byte classes used by the tokenizer
//!
//! Only bytes in `0x01..=0x7F` can be word or operator bytes; anything
//! at or above `0x80` falls through to plain text.

#[inline]
fn is_ascii_nonzero(ch: u8) -> bool {
    ch > 0x00 && ch < 0x80
}

/// Byte that continues an identifier or keyword
#[inline]
pub fn is_word_char(ch: u8) -> bool {
    is_ascii_nonzero(ch) && (ch.is_ascii_alphanumeric() || ch == b'_')
}

/// Byte that may start a word token
#[inline]
pub fn is_word_start(ch: u8) -> bool {
    is_ascii_nonzero(ch)
        && (ch.is_ascii_alphanumeric() || matches!(ch, b'_' | b'@' | b'#' | b'$' | b'.'))
}

/// Byte that opens or continues a variable name
#[inline]
pub fn is_type_char(ch: u8) -> bool {
    ch == b'$'
}

/// Single-byte operator
#[inline]
pub fn is_operator(ch: u8) -> bool {
    is_ascii_nonzero(ch)
        && matches!(
            ch,
            b'+' | b'-' | b'*' | b'/' | b'&' | b'^' | b'=' | b'<' | b'>' | b',' | b'%'
        )
}

#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_hex_letter(ch: u8) -> bool {
    matches!(ch, b'a'..=b'f' | b'A'..=b'F')
}

/// Bracket, parenthesis or brace
#[inline]
pub fn is_fold_bracket(ch: u8) -> bool {
    matches!(ch, b'{' | b'}' | b'(' | b')' | b'[' | b']')
}

/// Whitespace as far as line scanning is concerned
#[inline]
pub fn is_space(ch: u8) -> bool {
    ch == b' ' || (0x09..=0x0d).contains(&ch)
}
