//! C-style quoting for string, bytes and C-string literal bodies.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Escape `bytes` so they can sit between double quotes and decode back to
/// the same bytes under C escape rules.
///
/// A C reader extends `\x` over every following hex digit, so a literal hex
/// digit right after a `\x` escape is escaped as well.
pub fn quote_string_for_c(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    let mut after_hex_escape = false;

    for &b in bytes {
        let hex_continuation = after_hex_escape && b.is_ascii_hexdigit();
        after_hex_escape = false;
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            0x0c => out.push_str("\\f"),
            0x0b => out.push_str("\\v"),
            0x20..=0x7e if !hex_continuation => out.push(b as char),
            _ => {
                out.push_str("\\x");
                out.push(HEX_DIGITS[usize::from(b >> 4)] as char);
                out.push(HEX_DIGITS[usize::from(b & 0x0f)] as char);
                after_hex_escape = true;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Decode a quoted body the way a C compiler reads it.
    fn unescape_c(text: &str) -> Vec<u8> {
        let bytes = text.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'\\' {
                out.push(bytes[i]);
                i += 1;
                continue;
            }
            i += 1;
            let c = bytes[i];
            i += 1;
            match c {
                b'n' => out.push(b'\n'),
                b't' => out.push(b'\t'),
                b'r' => out.push(b'\r'),
                b'a' => out.push(0x07),
                b'b' => out.push(0x08),
                b'f' => out.push(0x0c),
                b'v' => out.push(0x0b),
                b'x' => {
                    let mut value: u32 = 0;
                    while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
                        value = value * 16 + char::from(bytes[i]).to_digit(16).unwrap();
                        i += 1;
                    }
                    out.push(value as u8);
                }
                b'0'..=b'7' => {
                    let mut value = u32::from(c - b'0');
                    let mut digits = 1;
                    while digits < 3 && i < bytes.len() && (b'0'..=b'7').contains(&bytes[i]) {
                        value = value * 8 + u32::from(bytes[i] - b'0');
                        i += 1;
                        digits += 1;
                    }
                    out.push(value as u8);
                }
                other => out.push(other),
            }
        }
        out
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(quote_string_for_c(b"hello, world"), "hello, world");
        assert_eq!(quote_string_for_c(b""), "");
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(quote_string_for_c(b"He said \"hi\"\n"), "He said \\\"hi\\\"\\n");
        assert_eq!(quote_string_for_c(b"a\\b"), "a\\\\b");
        assert_eq!(quote_string_for_c(b"\t\r\x07\x08\x0c\x0b"), "\\t\\r\\a\\b\\f\\v");
    }

    #[test]
    fn test_hex_escapes() {
        assert_eq!(quote_string_for_c(b"\x00"), "\\x00");
        assert_eq!(quote_string_for_c(b"\x7f"), "\\x7F");
        assert_eq!(quote_string_for_c("é".as_bytes()), "\\xC3\\xA9");
    }

    #[test]
    fn test_hex_digit_after_hex_escape() {
        assert_eq!(quote_string_for_c(b"\x01a"), "\\x01\\x61");
        assert_eq!(quote_string_for_c(b"\x01ag"), "\\x01\\x61g");
        assert_eq!(quote_string_for_c(b"\x01g"), "\\x01g");
        // a named escape does not extend
        assert_eq!(quote_string_for_c(b"\na"), "\\na");
    }

    proptest! {
        #[test]
        fn prop_c_round_trip(bytes in any::<Vec<u8>>()) {
            let quoted = quote_string_for_c(&bytes);
            prop_assert_eq!(unescape_c(&quoted), bytes);
        }

        #[test]
        fn prop_output_is_printable_ascii(bytes in any::<Vec<u8>>()) {
            let quoted = quote_string_for_c(&bytes);
            prop_assert!(quoted.bytes().all(|b| (0x20..=0x7e).contains(&b)));
        }
    }
}
