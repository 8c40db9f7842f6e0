//! Utility functions used elsewhere

/// Converts an ascii hex digit to its value. Both cases are accepted.
#[inline]
pub fn ascii_hex_to_u8(i: &u8) -> Option<u8> {
    match *i {
        b'0' ..= b'9' => Some(i - b'0'),
        b'a' ..= b'f' => Some(i - b'a' + 10),
        b'A' ..= b'F' => Some(i - b'A' + 10),
        _ => None
    }
}

/// Converts a decimal digit value (0-9) to its ascii character
#[inline]
pub fn u8_to_ascii_decimal(v: u8) -> u8 {
    debug_assert!(v < 10, "{} is not a decimal digit", v);
    b'0' + v
}

/// Turn non-ascii charaters into "\x00" hex format, for error messages
pub fn encode_non_ascii(input: &[u8]) -> String {
    use std::fmt::Write;

    let mut output = String::with_capacity(input.len());
    for &ch in input {
        if ch > 31 && ch < 127 {
            output.push(ch.into());
        } else {
            write!(&mut output, "\\x{:x}", ch).unwrap(); // cannot fail
        }
    }
    output
}

/// Helper function to check a byte to see if it is whitespace surrounding a numeral
#[inline]
pub fn is_whitespace(ch: u8) -> bool {
    match ch {
        0x00 | 0x09 | 0x0A | 0x0C | 0x0D | 0x20 => true,
        _ => false
    }
}

/// Strips leading and trailing whitespace (see `is_whitespace`)
pub fn trim_whitespace(i: &[u8]) -> &[u8] {
    let start = match i.iter().position(|&ch| ! is_whitespace(ch)) {
        Some(start) => start,
        None => { return &i[i.len()..]; }
    };
    let end = i.iter().rposition(|&ch| ! is_whitespace(ch)).unwrap_or(start);
    &i[start..end + 1]
}

/// Takes a byte array and returns an escaped string of ascii
#[cfg(test)]
pub fn u8_to_esc_ascii(i: &[u8]) -> String {
    use std::char;
    use std::ascii;

    let mut s = String::new();
    for &ch in i {
        for ech in ascii::escape_default(ch) {
            s.push(char::from_u32(ech as u32).unwrap()) // should never fail (from escape default)
        }
    }
    s
}

#[cfg(test)]
/// Helper macro to test some input and output against a parser
macro_rules! test_helper {
    ($fn:ident => [ $( ( $input:expr, $output:expr ) ),+ ] ) => {{
        $(
            assert_eq!(super::$fn(&$input[..]), $output,
                       r#""{}""#, crate::util::u8_to_esc_ascii($input));
        )+
    }};
}

#[cfg(test)]
/// The error a parser returns when it fails at `$i` with nom error kind `$kind`
macro_rules! test_error {
    ($i:expr, $kind:ident) => (
        Err(::nom::Err::Error(::nom::error::Error::new(&$i[..], ::nom::error::ErrorKind::$kind)))
    )
}

#[test]
fn test_ascii_hex_to_u8() {
    assert_eq!(ascii_hex_to_u8(&b'0'), Some(0));
    assert_eq!(ascii_hex_to_u8(&b'9'), Some(9));
    assert_eq!(ascii_hex_to_u8(&b'A'), Some(10));
    assert_eq!(ascii_hex_to_u8(&b'f'), Some(15));
    assert_eq!(ascii_hex_to_u8(&b'G'), None);
    assert_eq!(ascii_hex_to_u8(&b' '), None);
}

#[test]
fn test_trim_whitespace() {
    assert_eq!(trim_whitespace(b"  CF2\r"), b"CF2");
    assert_eq!(trim_whitespace(b"CF2"), b"CF2");
    assert_eq!(trim_whitespace(b"\t \r"), b"");
    assert_eq!(trim_whitespace(b""), b"");
    assert_eq!(trim_whitespace(b" A B "), b"A B");
}

#[test]
fn test_encode_non_ascii() {
    assert_eq!(encode_non_ascii(b"G"), "G");
    assert_eq!(encode_non_ascii(b"\n"), "\\xa");
    assert_eq!(encode_non_ascii(&[0xff]), "\\xff");
}
