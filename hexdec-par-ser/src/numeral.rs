//!
//! # Hexadecimal numerals
//!
//! A numeral is a run of the digits `0-9`, `a-f` and `A-F`, most significant digit first. There is
//! no sign, no prefix (like `0x`), and no fractional part.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till};
use nom::combinator::{map_opt, opt};
use nom::multi::many0;
use nom::number::complete::be_u8;
use nom::sequence::terminated;

use crate::util::{ascii_hex_to_u8, trim_whitespace};
use crate::{IResult, Result, ErrorKind};

/// Matches a single hexadecimal digit, returning its value (0-15)
pub fn hex_digit(i: &[u8]) -> IResult<&[u8], u8> {
    map_opt(be_u8, |ch| ascii_hex_to_u8(&ch))(i)
}

/// Matches as many hexadecimal digits as possible, returning their values
pub fn hex_digits(i: &[u8]) -> IResult<&[u8], Vec<u8>> {
    many0(hex_digit)(i)
}

/// Parses a complete hexadecimal numeral into digit values, most significant first
///
/// Every byte must be a hex digit. The first one that isn't is reported as `InvalidDigit` along
/// with its position, and nothing else is returned. An empty input gives no digits.
pub fn parse_hex_numeral(input: &[u8]) -> Result<Vec<u8>> {
    let (rest, digits) = match hex_digits(input) {
        Ok(out) => out,
        Err(e) => bail!(ErrorKind::ParserError(format!("{:?}", e))),
    };
    if let Some(&ch) = rest.first() {
        bail!(ErrorKind::InvalidDigit(ch, input.len() - rest.len()));
    }
    Ok(digits)
}

/// Matches a line ending, which is one of "\r\n", "\r", or "\n"
pub fn eol(i: &[u8]) -> IResult<&[u8], &[u8]> {
    alt((tag(&b"\r\n"[..]), tag(&b"\r"[..]), tag(&b"\n"[..])))(i)
}

/// Matches a single line and its line ending (if any), returning the line
pub fn line(i: &[u8]) -> IResult<&[u8], &[u8]> {
    terminated(take_till(|ch| ch == b'\r' || ch == b'\n'), opt(eol))(i)
}

/// Splits line-oriented input into numerals
///
/// Surrounding whitespace is trimmed and blank lines are skipped. The numerals themselves are not
/// validated here.
pub fn lines(mut input: &[u8]) -> Result<Vec<&[u8]>> {
    let mut out = Vec::new();
    while ! input.is_empty() {
        let (rest, l) = match line(input) {
            Ok(out) => out,
            Err(e) => bail!(ErrorKind::ParserError(format!("{:?}", e))),
        };
        let l = trim_whitespace(l);
        if l.is_empty() {
            trace!("skipping blank line");
        } else {
            out.push(l);
        }
        input = rest;
    }
    Ok(out)
}
