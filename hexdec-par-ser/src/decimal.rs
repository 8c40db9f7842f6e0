//!
//! # Decimal numerals
//!
//! Digit values are stored least significant first (index `i` is the coefficient of `10^i`), but
//! written most significant first.

use nom::character::complete::digit0;

use crate::util::u8_to_ascii_decimal;
use crate::{IResult, Result, ErrorKind};

/// Serializes decimal digit values, least significant first, into a decimal numeral
///
/// Zero digits at the most significant end are not written. No digits (or only zeros) is the
/// value zero, written `"0"`.
pub fn to_decimal_string(digits: &[u8]) -> String {
    let significant = match digits.iter().rposition(|&d| d != 0) {
        Some(end) => &digits[..end + 1],
        None => { return "0".to_owned(); }
    };
    significant.iter().rev().map(|&d| u8_to_ascii_decimal(d) as char).collect()
}

/// Matches as many ascii decimal digits as possible
pub fn decimal_digits(i: &[u8]) -> IResult<&[u8], &[u8]> {
    digit0(i)
}

/// Parses a complete decimal numeral into digit values, least significant first
///
/// Leading zeros are dropped, so zero (however it is written) gives no digits.
pub fn parse_decimal_numeral(input: &[u8]) -> Result<Vec<u8>> {
    let (rest, digits) = match decimal_digits(input) {
        Ok(out) => out,
        Err(e) => bail!(ErrorKind::ParserError(format!("{:?}", e))),
    };
    if let Some(&ch) = rest.first() {
        bail!(ErrorKind::InvalidDecimalDigit(ch, input.len() - rest.len()));
    }
    let significant = match digits.iter().position(|&ch| ch != b'0') {
        Some(start) => &digits[start..],
        None => &digits[digits.len()..],
    };
    Ok(significant.iter().rev().map(|ch| ch - b'0').collect())
}
