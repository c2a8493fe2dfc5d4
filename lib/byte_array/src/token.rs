//! Textual encoding of a single byte and the reverse scan over emitted text.

use core::{error, fmt};

/// A byte formatted as `0x` followed by two lowercase hexadecimal digits.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HexToken(u8);

impl HexToken {
    /// Creates a new [`HexToken`] for `value`.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the byte this [`HexToken`] encodes.
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for HexToken {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for HexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Returns the text between the opening line of an array declaration and its closing `};`.
///
/// Returns `None` if `text` does not look like the output of an [`Emitter`][e].
///
/// [e]: crate::emitter::Emitter
pub fn array_body(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("[] = {\n")?;
    let (body, _) = rest.rsplit_once("};\nconst unsigned int ")?;
    Some(body)
}

/// Scans `text` for [`HexToken`]s and returns the bytes they encode, in order.
///
/// Everything between tokens is ignored, so `text` should be restricted to an array body (see
/// [`array_body`]) when the array name itself may contain `0x`.
///
/// # Errors
///
/// - [`TokenError::Truncated`]: Returned if a `0x` prefix is not followed by two characters.
/// - [`TokenError::InvalidDigit`]: Returned if a digit is not a lowercase hexadecimal digit.
/// - [`TokenError::TooLong`]: Returned if a token has more than two digits.
pub fn decode_tokens(text: &str) -> Result<Vec<u8>, TokenError> {
    let bytes = text.as_bytes();
    let mut values = Vec::new();

    let mut offset = 0;
    while let Some(position) = bytes[offset..].windows(2).position(|window| window == b"0x") {
        let start = offset + position;
        let digits_start = start + 2;

        let Some(&[high, low]) = bytes.get(digits_start..digits_start + 2) else {
            return Err(TokenError::Truncated { offset: start });
        };
        let high = digit_value(high).ok_or(TokenError::InvalidDigit {
            offset: digits_start,
        })?;
        let low = digit_value(low).ok_or(TokenError::InvalidDigit {
            offset: digits_start + 1,
        })?;

        if bytes
            .get(digits_start + 2)
            .is_some_and(u8::is_ascii_hexdigit)
        {
            return Err(TokenError::TooLong { offset: start });
        }

        values.push((high << 4) | low);
        offset = digits_start + 2;
    }

    Ok(values)
}

/// Returns the value of a lowercase hexadecimal digit.
fn digit_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// Various errors that can occur while decoding [`HexToken`]s.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TokenError {
    /// The text ended before a token's two digits.
    Truncated {
        /// The offset of the token's `0x` prefix.
        offset: usize,
    },
    /// A token's digit is not a lowercase hexadecimal digit.
    InvalidDigit {
        /// The offset of the offending digit.
        offset: usize,
    },
    /// A token carries more than two digits.
    TooLong {
        /// The offset of the token's `0x` prefix.
        offset: usize,
    },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { offset } => write!(f, "truncated token at offset {offset}"),
            Self::InvalidDigit { offset } => write!(f, "invalid hex digit at offset {offset}"),
            Self::TooLong { offset } => {
                write!(f, "token at offset {offset} has more than two digits")
            }
        }
    }
}

impl error::Error for TokenError {}

#[cfg(test)]
mod test {
    use super::{HexToken, TokenError, array_body, decode_tokens};

    #[test]
    fn formats_extremes() {
        assert_eq!(HexToken::new(0).to_string(), "0x00");
        assert_eq!(HexToken::new(0x0a).to_string(), "0x0a");
        assert_eq!(HexToken::new(255).to_string(), "0xff");
    }

    #[test]
    fn every_byte_is_four_lowercase_characters() {
        for value in 0..=u8::MAX {
            assert_eq!(HexToken::new(value).value(), value);

            let token = HexToken::from(value).to_string();

            assert_eq!(token.len(), 4);
            assert!(token.starts_with("0x"));
            assert!(
                token[2..]
                    .bytes()
                    .all(|digit| matches!(digit, b'0'..=b'9' | b'a'..=b'f'))
            );
        }
    }

    #[test]
    fn decodes_separated_tokens() {
        let bytes = decode_tokens("0x00, 0x7f,\n0x80, 0xff, ").unwrap();
        assert_eq!(bytes, [0x00, 0x7f, 0x80, 0xff]);
    }

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert_eq!(
            decode_tokens("0x0"),
            Err(TokenError::Truncated { offset: 0 })
        );
        assert_eq!(
            decode_tokens("0x00, 0xFF"),
            Err(TokenError::InvalidDigit { offset: 8 })
        );
        assert_eq!(
            decode_tokens("0x123"),
            Err(TokenError::TooLong { offset: 0 })
        );
    }

    #[test]
    fn body_excludes_declaration_lines() {
        let text = "const unsigned char a0x1[] = {\n0x01, 0x02,\n};\nconst unsigned int a0x1_len = 2;\n";
        assert_eq!(array_body(text), Some("0x01, 0x02,\n"));
        assert_eq!(array_body("0x01, 0x02"), None);
    }
}
