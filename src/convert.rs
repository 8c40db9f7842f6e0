//! Hexadecimal to decimal conversion
//!
//! Uses Horner's method: for each hex digit, most significant first, multiply what we have so far
//! by 16 and add the digit.

use hexdec_par_ser::numeral::parse_hex_numeral;

use crate::digits::{Buffer, DigitBuffer};
use crate::error::{ErrorKind, Result};

/// Where a `Converter` is in processing its digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No digits seen yet, so there's nothing to multiply
    Start,
    /// At least one digit has been added
    Accumulating,
}

/// Converts a hexadecimal number to decimal one digit at a time
///
/// Feed digit values (0-15) most significant first with `push_digit`, then call `finish` to get
/// the decimal numeral.
#[derive(Debug, Clone)]
pub struct Converter {
    digits: DigitBuffer,
    state: State,
}

impl Converter {
    /// Create a converter expecting around `hex_len` hexadecimal digits
    ///
    /// The estimate just sizes the initial digit buffer. A hex numeral needs roughly 1.2 decimal
    /// digits per hex digit, so expect the buffer to grow.
    pub fn new(hex_len: usize) -> Converter {
        Converter::with_capacity(hex_len)
    }

    /// Create a converter whose digit buffer starts with room for `capacity` decimal digits
    pub fn with_capacity(capacity: usize) -> Converter {
        Converter {
            digits: DigitBuffer::new(capacity),
            state: State::Start,
        }
    }

    /// Add the next (less significant) hexadecimal digit
    pub fn push_digit(&mut self, value: u8) -> Result<()> {
        if value > 15 {
            bail!(ErrorKind::DigitOutOfRange(value));
        }
        if self.state == State::Accumulating {
            self.digits.multiply_by_16();
        }
        self.digits.increase_digit(0, u32::from(value), Buffer::Committed);
        self.state = State::Accumulating;
        trace!("after digit {:X}: {}", value, self.digits);
        Ok(())
    }

    /// The value so far, as a decimal numeral
    pub fn current(&self) -> String {
        self.digits.to_string()
    }

    /// Finish converting, returning the decimal numeral
    ///
    /// No digits at all gives `"0"`.
    pub fn finish(self) -> String {
        debug!("finished with {} decimal digits (capacity {})",
               self.digits.len(), self.digits.capacity());
        self.digits.finalize()
    }
}

/// Convert a hexadecimal numeral to a decimal numeral
///
/// Upper and lower case hex digits are both accepted. The empty string is zero. Anything else
/// (including whitespace, signs, or a `0x` prefix) fails with an `InvalidDigit` error.
///
/// ```
/// assert_eq!(hexdec::hex_to_decimal("CF2").unwrap(), "3314");
/// assert_eq!(hexdec::hex_to_decimal("ff").unwrap(), "255");
/// ```
pub fn hex_to_decimal(hex: &str) -> Result<String> {
    hex_bytes_to_decimal(hex.as_bytes())
}

/// Like `hex_to_decimal`, but for a byte slice
pub fn hex_bytes_to_decimal(hex: &[u8]) -> Result<String> {
    convert_with_capacity(hex, hex.len())
}

/// Like `hex_bytes_to_decimal`, but with an explicit initial capacity for the digit buffer
///
/// The result never depends on `capacity`.
pub fn convert_with_capacity(hex: &[u8], capacity: usize) -> Result<String> {
    let values = parse_hex_numeral(hex)?;
    debug!("converting {} hex digits", values.len());
    let mut converter = Converter::with_capacity(capacity);
    for value in values {
        converter.push_digit(value)?;
    }
    Ok(converter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    use hexdec_par_ser::ErrorKind as ParSerErrorKind;

    #[test]
    fn known_values() {
        let cases = [
            ("0", "0"),
            ("", "0"),
            ("F", "15"),
            ("10", "16"),
            ("FF", "255"),
            ("CF2", "3314"),
            ("FFFFFFFF", "4294967295"),
            ("10000000000000000", "18446744073709551616"),
        ];
        for &(hex, dec) in cases.iter() {
            assert_eq!(hex_to_decimal(hex).unwrap(), dec, "{}", hex);
        }
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(hex_to_decimal("000").unwrap(), "0");
        assert_eq!(hex_to_decimal("00F").unwrap(), "15");
        assert_eq!(hex_to_decimal("0010").unwrap(), "16");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(hex_to_decimal("cf2").unwrap(), "3314");
        assert_eq!(hex_to_decimal("cF2").unwrap(), hex_to_decimal("CF2").unwrap());
        assert_eq!(hex_to_decimal("abcdef").unwrap(), hex_to_decimal("ABCDEF").unwrap());
    }

    #[test]
    fn invalid_digit() {
        for &(hex, ch, position) in [("G", b'G', 0), ("12 3", b' ', 2), ("0x10", b'x', 1),
                                     ("-1", b'-', 0), ("FF\n", b'\n', 2)].iter() {
            match *hex_to_decimal(hex).unwrap_err().kind() {
                ErrorKind::ParSer(ParSerErrorKind::InvalidDigit(c, p)) => {
                    assert_eq!((c, p), (ch, position), "{}", hex);
                }
                ref other => panic!("unexpected error for {:?}: {:?}", hex, other),
            }
        }
    }

    #[test]
    fn push_digit() {
        let mut converter = Converter::new(3);
        assert_eq!(converter.current(), "0");
        converter.push_digit(0xC).unwrap();
        assert_eq!(converter.current(), "12");
        converter.push_digit(0xF).unwrap();
        assert_eq!(converter.current(), "207");
        converter.push_digit(0x2).unwrap();
        assert_eq!(converter.finish(), "3314");
    }

    #[test]
    fn push_digit_out_of_range() {
        let mut converter = Converter::new(1);
        converter.push_digit(1).unwrap();
        match *converter.push_digit(16).unwrap_err().kind() {
            ErrorKind::DigitOutOfRange(16) => (),
            ref other => panic!("unexpected error {:?}", other),
        }
        // a rejected digit leaves the value alone
        assert_eq!(converter.finish(), "1");
    }

    #[test]
    fn capacity_does_not_change_result() {
        let hex = "F".repeat(64);
        let expected = convert_with_capacity(hex.as_bytes(), 1024).unwrap();
        for &capacity in [0, 1, 2, 7, 64].iter() {
            assert_eq!(convert_with_capacity(hex.as_bytes(), capacity).unwrap(), expected);
        }
    }
}
