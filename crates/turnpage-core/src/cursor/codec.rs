///
/// Cursor transport codec.
///
/// This module owns the opaque hex form continuation tokens travel in.
/// It intentionally contains only token text encoding/decoding logic and
/// no query semantics.
///

// Defensive decode bound for untrusted cursor token input.
const MAX_CURSOR_TOKEN_HEX_LEN: usize = 8 * 1024;

///
/// CursorDecodeError
///

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CursorDecodeError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} hex chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token must have an even number of hex characters")]
    OddLength,

    #[error("invalid hex character at position {position}")]
    InvalidHex { position: usize },
}

/// Encode raw cursor bytes as a lowercase hex token.
#[must_use]
pub(crate) fn encode_cursor(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}

/// Decode a lowercase/uppercase hex cursor token into raw bytes.
///
/// The token may include surrounding whitespace, which is trimmed.
pub(crate) fn decode_cursor(token: &str) -> Result<Vec<u8>, CursorDecodeError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(CursorDecodeError::Empty);
    }

    if token.len() > MAX_CURSOR_TOKEN_HEX_LEN {
        return Err(CursorDecodeError::TooLong {
            len: token.len(),
            max: MAX_CURSOR_TOKEN_HEX_LEN,
        });
    }

    if token.len() % 2 != 0 {
        return Err(CursorDecodeError::OddLength);
    }

    token
        .as_bytes()
        .chunks_exact(2)
        .enumerate()
        .map(|(pair, chunk)| {
            let hi = decode_hex_nibble(chunk[0]).ok_or(CursorDecodeError::InvalidHex {
                position: pair * 2 + 1,
            })?;
            let lo = decode_hex_nibble(chunk[1]).ok_or(CursorDecodeError::InvalidHex {
                position: pair * 2 + 2,
            })?;

            Ok((hi << 4) | lo)
        })
        .collect()
}

const fn decode_hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{CursorDecodeError, MAX_CURSOR_TOKEN_HEX_LEN, decode_cursor, encode_cursor};

    #[test]
    fn decode_rejects_empty_and_whitespace_tokens() {
        assert_eq!(
            decode_cursor("").expect_err("empty token must fail"),
            CursorDecodeError::Empty
        );
        assert_eq!(
            decode_cursor(" \t\n ").expect_err("whitespace token must fail"),
            CursorDecodeError::Empty
        );
    }

    #[test]
    fn decode_rejects_odd_length_tokens() {
        assert_eq!(
            decode_cursor("0ab").expect_err("odd-length token must fail"),
            CursorDecodeError::OddLength
        );
    }

    #[test]
    fn decode_enforces_max_token_length() {
        let accepted = "7f".repeat(MAX_CURSOR_TOKEN_HEX_LEN / 2);
        let bytes = decode_cursor(&accepted).expect("max-sized token should decode");
        assert_eq!(bytes.len(), MAX_CURSOR_TOKEN_HEX_LEN / 2);

        let rejected = format!("{accepted}7f");
        assert_eq!(
            decode_cursor(&rejected).expect_err("oversized token must fail"),
            CursorDecodeError::TooLong {
                len: MAX_CURSOR_TOKEN_HEX_LEN + 2,
                max: MAX_CURSOR_TOKEN_HEX_LEN
            }
        );
    }

    #[test]
    fn decode_reports_invalid_hex_position() {
        assert_eq!(
            decode_cursor("0g").expect_err("invalid nibble must fail"),
            CursorDecodeError::InvalidHex { position: 2 }
        );
        assert_eq!(
            decode_cursor("zz").expect_err("invalid nibble must fail"),
            CursorDecodeError::InvalidHex { position: 1 }
        );
    }

    #[test]
    fn decode_accepts_mixed_case_and_surrounding_whitespace() {
        let bytes = decode_cursor("  0aFF10  ").expect("mixed-case token should decode");
        assert_eq!(bytes, vec![0x0a, 0xff, 0x10]);
    }

    #[test]
    fn encode_decode_round_trip_is_stable() {
        let raw = vec![0x00, 0x01, 0x0a, 0xff];
        let encoded = encode_cursor(&raw);
        assert_eq!(encoded, "00010aff");

        let decoded = decode_cursor(&encoded).expect("encoded token should decode");
        assert_eq!(decoded, raw);
    }
}
